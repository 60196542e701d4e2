use crate::range::FloatRange;
use crate::slice::SliceSpec;

pub type Result<T, E = RangeError> = std::result::Result<T, E>;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RangeError {
    #[error("invalid {name} {value}: {reason}")]
    InvalidArgument {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("{key} is not in {range}")]
    NotFound { key: f64, range: FloatRange },

    #[error("offset {offset} out of range for {range} of length {len}")]
    IndexOutOfRange {
        offset: isize,
        len: usize,
        range: FloatRange,
    },

    #[error("slice {slice} of {range} has a zero step")]
    ZeroSliceStep { slice: SliceSpec, range: FloatRange },

    #[error("unsupported slice {slice} of {range}")]
    UnsupportedOperation { slice: SliceSpec, range: FloatRange },

    #[error("end of sequence")]
    EndOfSequence,
}
