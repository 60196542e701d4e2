use serde::{Deserialize, Serialize};

/// Relative and absolute tolerance used for every boundary comparison.
///
/// Two values `a` and `b` are close when
/// `|a - b| <= atol + rtol * max(|a|, |b|)`. The check is symmetric in its
/// operands.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct Tolerance {
    pub rtol: f64,
    pub atol: f64,
}

impl Tolerance {
    pub const DEFAULT: Tolerance = Tolerance {
        rtol: 1e-5,
        atol: 1e-8,
    };

    pub const fn new(rtol: f64, atol: f64) -> Tolerance {
        Tolerance { rtol, atol }
    }

    pub fn close(&self, a: f64, b: f64) -> bool {
        // Equal infinities are close, anything else non-finite is not.
        if a == b {
            return true;
        }
        if !a.is_finite() || !b.is_finite() {
            return false;
        }

        (a - b).abs() <= self.atol + self.rtol * a.abs().max(b.abs())
    }

    /// The looser of the two tolerances, component-wise.
    pub fn loosest(self, other: Tolerance) -> Tolerance {
        Tolerance {
            rtol: self.rtol.max(other.rtol),
            atol: self.atol.max(other.atol),
        }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance::DEFAULT
    }
}

/// [`Tolerance::close`] with the default tolerance.
pub fn is_close(a: f64, b: f64) -> bool {
    Tolerance::DEFAULT.close(a, b)
}
