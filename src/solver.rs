use crate::types::{BoxDims, BoxId, Orientation, StackResult, Stacking};

pub struct Solver {
    a: BoxDims,
    b: BoxDims,
}

impl Solver {
    pub fn new(a: BoxDims, b: BoxDims) -> Self {
        Self { a, b }
    }

    pub fn solve(&self) -> StackResult {
        let result = search(&self.a.orientations(), &self.b.orientations());
        match result.stacking() {
            Some(s) => tracing::debug!(
                a = %self.a,
                b = %self.b,
                bottom_box = %s.bottom_box,
                bottom = %s.bottom,
                top = %s.top,
                height = s.height,
                "found stacking"
            ),
            None => tracing::debug!(a = %self.a, b = %self.b, "no stacking fits"),
        }
        result
    }
}

/// Exhaustive search over both stacking directions: `a` under `b`, then `b`
/// under `a`. Ties keep the first pair found.
pub fn search(a: &[Orientation], b: &[Orientation]) -> StackResult {
    let mut best: Option<Stacking> = None;

    for (bottom_box, bottoms, tops) in [(BoxId::A, a, b), (BoxId::B, b, a)] {
        for bottom in bottoms {
            for top in tops {
                if !top.fits_on(bottom) {
                    tracing::trace!(%bottom_box, %bottom, %top, "does not fit");
                    continue;
                }
                let height = bottom.height as u64 + top.height as u64;
                tracing::trace!(%bottom_box, %bottom, %top, height, "fits");
                if best.is_none_or(|s| height < s.height) {
                    best = Some(Stacking {
                        bottom_box,
                        bottom: *bottom,
                        top: *top,
                        height,
                    });
                }
            }
        }
    }

    match best {
        Some(s) => StackResult::Stacked(s),
        None => StackResult::Infeasible,
    }
}
