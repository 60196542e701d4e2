use std::fmt;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::cursor::Cursor;
use crate::error::{RangeError, Result};
use crate::tolerance::Tolerance;

/// An evenly spaced, finite sequence of floats from `start` (inclusive)
/// towards `stop` (exclusive), moving by `step`.
///
/// All boundary checks go through the range's [`Tolerance`], so values that
/// land next to `start` or `stop` because of rounding are treated as if they
/// landed exactly on them. A `FloatRange` is an immutable value; sequential
/// traversal happens through a [`Cursor`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
#[serde(try_from = "RawRange", into = "RawRange")]
pub struct FloatRange {
    start: f64,
    stop: f64,
    step: f64,
    tolerance: Tolerance,
}

impl FloatRange {
    /// Creates the range `start, start + step, ...` up to `stop`.
    ///
    /// Fails with [`RangeError::InvalidArgument`] if `step` is zero or any
    /// parameter is not finite.
    pub fn new(start: f64, stop: f64, step: f64) -> Result<FloatRange> {
        check_finite("start", start)?;
        check_finite("stop", stop)?;
        check_finite("step", step)?;
        if step == 0.0 {
            debug!("rejecting zero step for range from {start} to {stop}");
            return Err(RangeError::InvalidArgument {
                name: "step",
                value: step,
                reason: "must be nonzero",
            });
        }

        Ok(FloatRange {
            start,
            stop,
            step,
            tolerance: Tolerance::DEFAULT,
        })
    }

    /// The one-argument form: `0.0, 1.0, ...` up to `stop`.
    pub fn until(stop: f64) -> Result<FloatRange> {
        FloatRange::new(0.0, stop, 1.0)
    }

    pub fn with_tolerance(self, tolerance: Tolerance) -> FloatRange {
        FloatRange { tolerance, ..self }
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn stop(&self) -> f64 {
        self.stop
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// Number of values in the range.
    ///
    /// The quotient `(stop - start) / step` is floored, then rounded up unless
    /// the grid point it lands on is close to `stop`. A stop that sits just past
    /// a grid point because of rounding therefore still counts that point. The
    /// grid point is compared against `stop` in both directions, the same check
    /// iteration and [`FloatRange::contains`] apply.
    pub fn len(&self) -> usize {
        let ascending = self.stop > self.start && self.step > 0.0;
        let descending = self.stop < self.start && self.step < 0.0;
        if !ascending && !descending {
            return 0;
        }

        let mut estimate = ((self.stop - self.start) / self.step).floor();
        if !self.close(self.start + estimate * self.step, self.stop) {
            trace!("{self}: rounding length up from {estimate}");
            estimate += 1.0;
        }

        estimate as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `key` lies on the range's grid between `start` (inclusive) and
    /// `stop` (exclusive).
    pub fn contains(&self, key: f64) -> bool {
        // rem_euclid keeps the remainder in [0, |step|) whatever the sign of step.
        let delta = (key - self.start).rem_euclid(self.step);

        self.reaches(key, self.start)
            && self.precedes_stop(key)
            && (self.close(delta, 0.0) || self.close(delta, self.step.abs()))
    }

    /// Offset of `key` within the range.
    pub fn index(&self, key: f64) -> Result<usize> {
        if !self.contains(key) {
            return Err(RangeError::NotFound { key, range: *self });
        }

        Ok(((key - self.start) / self.step).round() as usize)
    }

    /// Value at `offset`. Negative offsets count back from the end.
    pub fn get(&self, offset: isize) -> Result<f64> {
        let len = self.len();
        let resolved = if offset < 0 {
            len.checked_sub(offset.unsigned_abs())
        } else {
            Some(offset.unsigned_abs())
        };

        match resolved {
            Some(k) if k < len => {
                let value = self.value_at(k);
                if self.contains(value) {
                    return Ok(value);
                }
                debug!("{self}: value {value} at offset {offset} failed containment");
            }
            _ => {}
        }

        Err(RangeError::IndexOutOfRange {
            offset,
            len,
            range: *self,
        })
    }

    pub fn first(&self) -> Option<f64> {
        self.get(0).ok()
    }

    pub fn last(&self) -> Option<f64> {
        self.get(-1).ok()
    }

    /// The first grid point at or beyond `stop`, i.e. `start + len * step`.
    pub fn aligned_stop(&self) -> f64 {
        self.value_at(self.len())
    }

    /// A fresh cursor positioned before the first value.
    pub fn iter(&self) -> Cursor {
        Cursor::new(*self)
    }

    pub(crate) fn value_at(&self, k: usize) -> f64 {
        self.start + k as f64 * self.step
    }

    /// `value` is strictly before `stop` in the direction of travel and not
    /// close to it.
    pub(crate) fn precedes_stop(&self, value: f64) -> bool {
        let ordered = if self.step > 0.0 {
            value < self.stop
        } else {
            value > self.stop
        };

        ordered && !self.close(value, self.stop)
    }

    /// `value` is at or past `bound` in the direction of travel.
    fn reaches(&self, value: f64, bound: f64) -> bool {
        let ordered = if self.step > 0.0 {
            value > bound
        } else {
            value < bound
        };

        ordered || self.close(value, bound)
    }

    fn close(&self, a: f64, b: f64) -> bool {
        self.tolerance.close(a, b)
    }
}

fn check_finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        return Ok(());
    }

    debug!("rejecting non-finite {name} {value}");
    Err(RangeError::InvalidArgument {
        name,
        value,
        reason: "must be finite",
    })
}

/// Equal when start, stop and step are pairwise close under the looser of
/// the two tolerances. Iteration progress plays no part.
impl PartialEq for FloatRange {
    fn eq(&self, other: &Self) -> bool {
        let tolerance = self.tolerance.loosest(other.tolerance);

        tolerance.close(self.start, other.start)
            && tolerance.close(self.stop, other.stop)
            && tolerance.close(self.step, other.step)
    }
}

impl fmt::Display for FloatRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "float_range({}, {}, {})", self.start, self.stop, self.step)
    }
}

impl IntoIterator for FloatRange {
    type Item = f64;
    type IntoIter = Cursor;

    fn into_iter(self) -> Cursor {
        Cursor::new(self)
    }
}

impl IntoIterator for &FloatRange {
    type Item = f64;
    type IntoIter = Cursor;

    fn into_iter(self) -> Cursor {
        Cursor::new(*self)
    }
}

/// Serialized form. A missing `start` means 0 and a missing `step` means 1.
#[derive(Serialize, Deserialize)]
struct RawRange {
    #[serde(default)]
    start: f64,
    stop: f64,
    #[serde(default = "default_step")]
    step: f64,
    #[serde(default)]
    tolerance: Tolerance,
}

fn default_step() -> f64 {
    1.0
}

impl TryFrom<RawRange> for FloatRange {
    type Error = RangeError;

    fn try_from(raw: RawRange) -> Result<Self> {
        Ok(FloatRange::new(raw.start, raw.stop, raw.step)?.with_tolerance(raw.tolerance))
    }
}

impl From<FloatRange> for RawRange {
    fn from(range: FloatRange) -> Self {
        RawRange {
            start: range.start,
            stop: range.stop,
            step: range.step,
            tolerance: range.tolerance,
        }
    }
}
