//! Floating-point analogue of an integer range.
//!
//! A [`FloatRange`] describes the values `start, start + step, ...` that stay
//! strictly before `stop`. Membership, length, indexing, slicing and
//! iteration all compare boundaries through one [`Tolerance`], so they agree
//! with each other even when binary rounding nudges a value across a bound.
//!
//! ```
//! use float_range::FloatRange;
//!
//! let tenths = FloatRange::new(0.0, 1.0, 0.1)?;
//! assert_eq!(tenths.len(), 10);
//! assert_eq!(tenths.index(0.5)?, 5);
//! assert!(!tenths.contains(1.0));
//!
//! let values: Vec<f64> = FloatRange::new(2.0, 1.0, -0.5)?.into_iter().collect();
//! assert_eq!(values, [2.0, 1.5]);
//! # Ok::<(), float_range::RangeError>(())
//! ```

pub mod config;
pub mod cursor;
pub mod error;
pub mod range;
pub mod slice;
pub mod tolerance;

pub use config::{Config, ConfigError, RangeConfig, parse_config};
pub use cursor::Cursor;
pub use error::{RangeError, Result};
pub use range::FloatRange;
pub use slice::SliceSpec;
pub use tolerance::{Tolerance, is_close};
