use box_stack::parse::{self, InputError};
use box_stack::render;
use box_stack::solver::Solver;
use box_stack::types::{BoxDims, BoxId, StackResult, Stacking};
use clap::Parser;
use std::io::Read;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "box_stack",
    about = "Minimum height of a two-box stack",
    long_about = "Reads six integers from stdin (three edges per box) and prints the \
                  lowest possible height of one box stacked on the other, or -1."
)]
struct Cli {
    /// Box dimensions as LxWxH instead of reading stdin (e.g. 5x5x5 10x10x1)
    #[arg(long, num_args = 2, value_names = ["A", "B"])]
    boxes: Option<Vec<String>>,

    /// Show ASCII side view of the stack
    #[arg(long)]
    layout: bool,

    /// Describe which box goes on the bottom and how each is turned
    #[arg(long)]
    explain: bool,

    /// Log search details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn read_boxes(cli: &Cli, stdin: impl Read) -> Result<(BoxDims, BoxDims), String> {
    match &cli.boxes {
        Some(args) => {
            let dims = args
                .iter()
                .map(|s| parse::parse_dimensions(s))
                .collect::<Result<Vec<_>, InputError>>()
                .map_err(|e| e.to_string())?;
            Ok((dims[0], dims[1]))
        }
        None => {
            let input = std::io::read_to_string(stdin)
                .map_err(|e| format!("failed to read stdin: {}", e))?;
            parse::parse_boxes(&input).map_err(|e| e.to_string())
        }
    }
}

fn explain(a: BoxDims, b: BoxDims, s: &Stacking) -> String {
    let (bottom_dims, top_dims) = match s.bottom_box {
        BoxId::A => (a, b),
        BoxId::B => (b, a),
    };
    format!(
        "Bottom: box {} ({}), {}\nTop:    box {} ({}), {}\n",
        s.bottom_box,
        bottom_dims,
        s.bottom,
        s.top_box(),
        top_dims,
        s.top
    )
}

/// Everything printed to stdout for one run. The first line is always the
/// height or `-1`.
fn run(cli: &Cli, stdin: impl Read) -> Result<String, String> {
    let (a, b) = read_boxes(cli, stdin)?;
    let result = Solver::new(a, b).solve();

    let mut out = format!("{}\n", result);
    if let StackResult::Stacked(s) = &result {
        if cli.explain {
            out.push_str(&explain(a, b, s));
        }
        if cli.layout {
            out.push_str(&render::render_stack(s));
        }
    }
    Ok(out)
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let out = run(&cli, std::io::stdin()).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    print!("{}", out);
}
