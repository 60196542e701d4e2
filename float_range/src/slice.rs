use std::fmt;
use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

use log::debug;

use crate::error::{RangeError, Result};
use crate::range::FloatRange;

/// Integer-offset slice of a [`FloatRange`], with the same meaning as
/// `[start:stop:step]` on an integer range. Negative offsets count back from
/// the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SliceSpec {
    pub start: Option<isize>,
    pub stop: Option<isize>,
    pub step: Option<isize>,
}

impl SliceSpec {
    /// `[::-1]`
    pub const REVERSE: SliceSpec = SliceSpec {
        start: None,
        stop: None,
        step: Some(-1),
    };

    pub const fn new(
        start: Option<isize>,
        stop: Option<isize>,
        step: Option<isize>,
    ) -> SliceSpec {
        SliceSpec { start, stop, step }
    }

    pub const fn with_step(self, step: isize) -> SliceSpec {
        SliceSpec {
            step: Some(step),
            ..self
        }
    }
}

impl fmt::Display for SliceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn part(f: &mut fmt::Formatter<'_>, value: Option<isize>) -> fmt::Result {
            match value {
                Some(v) => write!(f, "{v}"),
                None => Ok(()),
            }
        }

        write!(f, "[")?;
        part(f, self.start)?;
        write!(f, ":")?;
        part(f, self.stop)?;
        if self.step.is_some() {
            write!(f, ":")?;
            part(f, self.step)?;
        }
        write!(f, "]")
    }
}

impl From<Range<isize>> for SliceSpec {
    fn from(r: Range<isize>) -> Self {
        SliceSpec::new(Some(r.start), Some(r.end), None)
    }
}

impl From<RangeFrom<isize>> for SliceSpec {
    fn from(r: RangeFrom<isize>) -> Self {
        SliceSpec::new(Some(r.start), None, None)
    }
}

impl From<RangeTo<isize>> for SliceSpec {
    fn from(r: RangeTo<isize>) -> Self {
        SliceSpec::new(None, Some(r.end), None)
    }
}

impl From<RangeFull> for SliceSpec {
    fn from(_: RangeFull) -> Self {
        SliceSpec::default()
    }
}

impl FloatRange {
    /// Sub-range selected by integer offsets, see [`FloatRange::slice_by`].
    pub fn slice(
        &self,
        start: Option<isize>,
        stop: Option<isize>,
        step: Option<isize>,
    ) -> Result<FloatRange> {
        self.slice_by(SliceSpec::new(start, stop, step))
    }

    /// Sub-range selected by integer offsets.
    ///
    /// With a positive step, offsets are resolved against [`FloatRange::len`]
    /// and clamped to it; the end of the range is taken from
    /// [`FloatRange::aligned_stop`] so the last value is never lost to
    /// rounding. A negative step is only supported without explicit bounds
    /// and walks the range backwards from its last value. The resulting step
    /// is the original step times the slice step.
    pub fn slice_by(&self, slice: SliceSpec) -> Result<FloatRange> {
        let stride = slice.step.unwrap_or(1);
        if stride == 0 {
            return Err(RangeError::ZeroSliceStep {
                slice,
                range: *self,
            });
        }

        let len = self.len();
        let (first, stop) = if stride > 0 {
            let lo = resolve(slice.start.unwrap_or(0), len);
            let hi = slice.stop.map_or(len, |stop| resolve(stop, len)).max(lo);
            (self.value_at(lo), self.value_at(hi))
        } else if slice.start.is_none() && slice.stop.is_none() {
            let last = self.start() + (len as f64 - 1.0) * self.step();
            (last, self.start() - self.step())
        } else {
            debug!("{self}: rejecting slice {slice}");
            return Err(RangeError::UnsupportedOperation {
                slice,
                range: *self,
            });
        };

        let sliced = FloatRange::new(first, stop, self.step() * stride as f64)?;
        Ok(sliced.with_tolerance(self.tolerance()))
    }

    /// The same values in reverse order.
    pub fn reversed(&self) -> Result<FloatRange> {
        self.slice_by(SliceSpec::REVERSE)
    }
}

/// Resolves a possibly negative offset against `len`, clamped to `0..=len`.
fn resolve(offset: isize, len: usize) -> usize {
    if offset < 0 {
        len.saturating_sub(offset.unsigned_abs())
    } else {
        offset.unsigned_abs().min(len)
    }
}
