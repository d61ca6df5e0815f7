use serde::{Deserialize, Deserializer, Serialize};

/// Edge lengths of one box, in the order they were supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoxDims {
    #[serde(deserialize_with = "deserialize_edges")]
    pub edges: [u32; 3],
}

impl BoxDims {
    pub fn new(a: u32, b: u32, c: u32) -> Self {
        Self { edges: [a, b, c] }
    }

    /// One orientation per choice of height edge, in edge order.
    /// Repeated edges give repeated orientations; they are kept.
    pub fn orientations(&self) -> [Orientation; 3] {
        let [a, b, c] = self.edges;
        [
            Orientation::new(0, a, Footprint::new(b, c)),
            Orientation::new(1, b, Footprint::new(a, c)),
            Orientation::new(2, c, Footprint::new(a, b)),
        ]
    }
}

impl std::fmt::Display for BoxDims {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.edges;
        write!(f, "{}x{}x{}", a, b, c)
    }
}

/// Base of an orientation. `min <= max` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Footprint {
    min: u32,
    max: u32,
}

impl Footprint {
    pub fn new(a: u32, b: u32) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn fits_in(&self, other: &Footprint) -> bool {
        self.min() <= other.min() && self.max() <= other.max()
    }
}

impl std::fmt::Display for Footprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.min(), self.max())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Orientation {
    /// Index into `BoxDims::edges` of the edge standing upright.
    pub height_edge: usize,
    pub height: u32,
    pub footprint: Footprint,
}

impl Orientation {
    pub fn new(height_edge: usize, height: u32, footprint: Footprint) -> Self {
        Self {
            height_edge,
            height,
            footprint,
        }
    }

    pub fn fits_on(&self, bottom: &Orientation) -> bool {
        self.footprint.fits_in(&bottom.footprint)
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "height {} on {}", self.height, self.footprint)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoxId {
    A,
    B,
}

impl BoxId {
    pub fn other(self) -> Self {
        match self {
            BoxId::A => BoxId::B,
            BoxId::B => BoxId::A,
        }
    }
}

impl std::fmt::Display for BoxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoxId::A => write!(f, "A"),
            BoxId::B => write!(f, "B"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stacking {
    pub bottom_box: BoxId,
    pub bottom: Orientation,
    pub top: Orientation,
    pub height: u64,
}

impl Stacking {
    pub fn top_box(&self) -> BoxId {
        self.bottom_box.other()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackResult {
    Stacked(Stacking),
    Infeasible,
}

impl StackResult {
    pub fn height(&self) -> Option<u64> {
        match self {
            StackResult::Stacked(s) => Some(s.height),
            StackResult::Infeasible => None,
        }
    }

    pub fn stacking(&self) -> Option<&Stacking> {
        match self {
            StackResult::Stacked(s) => Some(s),
            StackResult::Infeasible => None,
        }
    }

    pub fn is_feasible(&self) -> bool {
        matches!(self, StackResult::Stacked(_))
    }
}

impl std::fmt::Display for StackResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StackResult::Stacked(s) => write!(f, "{}", s.height),
            StackResult::Infeasible => write!(f, "-1"),
        }
    }
}

/// Accepts each edge as a JSON integer or an integral float (`5` or `5.0`).
fn deserialize_edges<'de, D>(deserializer: D) -> Result<[u32; 3], D::Error>
where
    D: Deserializer<'de>,
{
    let raw = <[serde_json::Number; 3]>::deserialize(deserializer)?;
    let mut edges = [0u32; 3];
    for (edge, n) in edges.iter_mut().zip(raw.iter()) {
        *edge = number_to_u32(n).map_err(serde::de::Error::custom)?;
    }
    Ok(edges)
}

fn number_to_u32(n: &serde_json::Number) -> Result<u32, String> {
    if let Some(v) = n.as_u64() {
        return u32::try_from(v).map_err(|_| format!("edge {} out of range", v));
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= 0.0 && f <= u32::MAX as f64 => Ok(f as u32),
        _ => Err(format!("edge {} is not a non-negative integer", n)),
    }
}
