//! Host platform capability description
use crate::error::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Minimum platform API level exposing raw GNSS measurements
pub const RAW_MEASUREMENTS_MIN_API: u32 = 24;

/// Minimum platform API level exposing the AGC field
pub const AGC_MIN_API: u32 = 26;

/// Capability descriptor of the host platform, queried once from the
/// measurement source and passed into the encoder at call time: the
/// encoder never performs any platform version detection of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Capabilities {
    /// Platform API level
    pub api_level: u32,
    /// Platform release identifier
    pub release: String,
    /// Device manufacturer identifier
    pub manufacturer: String,
    /// Device model identifier
    pub model: String,
}

impl Capabilities {
    /// Builds a [Capabilities] descriptor for given platform API level,
    /// with blank identity strings
    pub fn new(api_level: u32) -> Self {
        Self {
            api_level,
            release: String::new(),
            manufacturer: String::new(),
            model: String::new(),
        }
    }

    /// Sets the platform release identifier
    pub fn with_release(&self, release: &str) -> Self {
        let mut s = self.clone();
        s.release = release.to_string();
        s
    }

    /// Sets the device manufacturer identifier
    pub fn with_manufacturer(&self, manufacturer: &str) -> Self {
        let mut s = self.clone();
        s.manufacturer = manufacturer.to_string();
        s
    }

    /// Sets the device model identifier
    pub fn with_model(&self, model: &str) -> Self {
        let mut s = self.clone();
        s.model = model.to_string();
        s
    }

    /// True if this platform exposes raw GNSS measurements
    pub fn supports_raw_measurements(&self) -> bool {
        self.api_level >= RAW_MEASUREMENTS_MIN_API
    }

    /// True if this platform exposes the AGC field
    pub fn supports_agc(&self) -> bool {
        self.api_level >= AGC_MIN_API
    }

    /// Fails fast with [Error::UnsupportedPlatform] when this platform
    /// does not expose raw GNSS measurements
    pub fn ensure_raw_measurements(&self) -> Result<(), Error> {
        if self.supports_raw_measurements() {
            Ok(())
        } else {
            Err(Error::UnsupportedPlatform {
                found: self.api_level,
                minimum: RAW_MEASUREMENTS_MIN_API,
            })
        }
    }
}
