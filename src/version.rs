//! Raw log format revision description
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Revision of the raw measurement log format produced by this crate,
/// advertised in every file header.
pub const CURRENT_VERSION: Version = Version {
    major: 2,
    minor: 0,
    patch: 0,
    build: 1,
};

/// Version is used to describe raw measurement log format revisions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Version {
    /// Version major number
    pub major: u8,
    /// Version minor number
    pub minor: u8,
    /// Version patch number
    pub patch: u8,
    /// Version build number
    pub build: u8,
}

impl Default for Version {
    /// Builds the current log format [Version]
    fn default() -> Self {
        CURRENT_VERSION
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "v{}.{}.{}.{}",
            self.major, self.minor, self.patch, self.build
        )
    }
}
