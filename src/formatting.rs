//! Raw log line field formatting helpers.
//!
//! Column position encodes meaning in the raw log format, so absent
//! optional fields render as blanks (two adjacent separators), never
//! skipped and never defaulted to zero.
use std::fmt;

/// Locale invariant decimal rendering of an `f64`. Debug formatting is
/// used on purpose: it is the shortest form that round-trips exactly
/// and it always carries a decimal point (`1000.0`, not `1000`).
pub(crate) struct Decimal(pub f64);

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Locale invariant decimal rendering of an `f32`, at `f32` precision
pub(crate) struct Decimal32(pub f32);

impl fmt::Display for Decimal32 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Optional field: renders its value when present, a blank otherwise
pub(crate) struct Blankable<T>(pub Option<T>);

impl<T: fmt::Display> fmt::Display for Blankable<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.0 {
            Some(value) => value.fmt(f),
            None => Ok(()),
        }
    }
}
