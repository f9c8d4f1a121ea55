//! Platform measurement source abstraction
use std::fmt;

use crate::{capability::Capabilities, reading::BatchReading};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One coarse location fix
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LocationFix {
    /// Latitude (decimal degrees)
    pub latitude: f64,
    /// Longitude (decimal degrees)
    pub longitude: f64,
}

impl fmt::Display for LocationFix {
    /// `{latitude},{longitude}`, locale invariant decimals
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?},{:?}", self.latitude, self.longitude)
    }
}

/// Location fix delivery callback
pub type LocationCallback = Box<dyn FnMut(LocationFix) + Send>;

/// Raw measurement batch delivery callback
pub type MeasurementCallback = Box<dyn FnMut(BatchReading) + Send>;

/// Any platform location/GNSS subsystem should implement the
/// [MeasurementSource] trait to feed the measurement bridge.
///
/// The two streams are independent and unordered relative to one
/// another, each typically delivered on a platform owned background
/// thread. Subscription lifetime belongs to the caller through the
/// returned handles: this crate never unsubscribes on its own.
pub trait MeasurementSource {
    /// Subscription handle. Delivery on a stream ends when the host
    /// platform releases its handle, however the implementation
    /// defines that (commonly on drop).
    type Subscription;

    /// Describes the host platform this source runs on
    fn capabilities(&self) -> Capabilities;

    /// True once location authorization was granted. Acquiring the
    /// authorization (prompting included) is the host application's
    /// concern and must happen before any subscription is attempted.
    fn authorized(&self) -> bool;

    /// Subscribes to coarse location fixes at given rate (ms) and
    /// minimum travelled distance (m)
    fn subscribe_locations(
        &mut self,
        rate_ms: u64,
        min_distance_m: f64,
        callback: LocationCallback,
    ) -> Self::Subscription;

    /// Subscribes to raw measurement batch readings
    fn subscribe_raw_measurements(&mut self, callback: MeasurementCallback)
        -> Self::Subscription;
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn location_fix_payload() {
        let fix = LocationFix {
            latitude: 52.3740,
            longitude: 4.8897,
        };
        assert_eq!(fix.to_string(), "52.374,4.8897");

        let fix = LocationFix {
            latitude: 52.0,
            longitude: -4.5,
        };
        assert_eq!(fix.to_string(), "52.0,-4.5");
    }
}
