//! integrated tests

mod formatting;

#[cfg(feature = "serde")]
mod serde;
