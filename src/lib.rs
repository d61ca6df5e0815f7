pub mod parse;
pub mod render;
pub mod solver;
pub mod types;
