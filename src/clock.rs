//! Receiver clock snapshot
use hifitime::Epoch;

use crate::{error::MalformedMeasurement, reading::ClockReading};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Validated receiver clock snapshot, one per measurement batch.
/// Immutable once captured: a batch is consumed synchronously and
/// discarded, never retained or mutated after encoding.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClockSnapshot {
    /// Receiver clock in the GNSS time base (ns)
    pub time_nanos: i64,
    /// Leap second count, when known
    pub leap_second: Option<u8>,
    /// 1 sigma time uncertainty (ns)
    pub time_uncertainty_nanos: Option<f64>,
    /// Full bias between clock and true GNSS time (ns):
    /// GPST time of reception is `time_nanos - full_bias_nanos`
    pub full_bias_nanos: i64,
    /// Sub nanosecond bias (ns)
    pub bias_nanos: Option<f64>,
    /// 1 sigma bias uncertainty (ns)
    pub bias_uncertainty_nanos: Option<f64>,
    /// Clock drift (ns/s)
    pub drift_nanos_per_second: Option<f64>,
    /// 1 sigma drift uncertainty (ns/s)
    pub drift_uncertainty_nanos_per_second: Option<f64>,
    /// Hardware clock discontinuity counter
    pub hw_clock_discontinuity_count: u32,
}

impl ClockSnapshot {
    /// Returns the GPST [Epoch] of reception, to 1 ns resolution:
    /// `time_nanos - full_bias_nanos`, the sub nanosecond bias is
    /// not applied. None if the clock describes an epoch prior to
    /// the GPST reference.
    pub fn gpst_time(&self) -> Option<Epoch> {
        let nanos = (self.time_nanos as i128) - (self.full_bias_nanos as i128);
        u64::try_from(nanos).ok().map(Epoch::from_gpst_nanoseconds)
    }
}

impl TryFrom<ClockReading> for ClockSnapshot {
    type Error = MalformedMeasurement;
    fn try_from(reading: ClockReading) -> Result<Self, Self::Error> {
        Ok(Self {
            time_nanos: reading
                .time_nanos
                .ok_or(MalformedMeasurement { field: "TimeNanos" })?,
            leap_second: reading.leap_second,
            time_uncertainty_nanos: reading.time_uncertainty_nanos,
            full_bias_nanos: reading.full_bias_nanos.ok_or(MalformedMeasurement {
                field: "FullBiasNanos",
            })?,
            bias_nanos: reading.bias_nanos,
            bias_uncertainty_nanos: reading.bias_uncertainty_nanos,
            drift_nanos_per_second: reading.drift_nanos_per_second,
            drift_uncertainty_nanos_per_second: reading.drift_uncertainty_nanos_per_second,
            hw_clock_discontinuity_count: reading.hw_clock_discontinuity_count.ok_or(
                MalformedMeasurement {
                    field: "HardwareClockDiscontinuityCount",
                },
            )?,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use hifitime::Epoch;

    #[test]
    fn validation() {
        let reading = ClockReading {
            time_nanos: Some(123456789),
            full_bias_nanos: Some(-987654321),
            hw_clock_discontinuity_count: Some(0),
            ..Default::default()
        };
        let clock = ClockSnapshot::try_from(reading).unwrap();
        assert_eq!(clock.time_nanos, 123456789);
        assert_eq!(clock.full_bias_nanos, -987654321);
        assert!(clock.leap_second.is_none());
    }

    #[test]
    fn missing_required_field() {
        let reading = ClockReading {
            time_nanos: Some(123456789),
            hw_clock_discontinuity_count: Some(0),
            ..Default::default()
        };
        let err = ClockSnapshot::try_from(reading).unwrap_err();
        assert_eq!(err.field, "FullBiasNanos");
    }

    #[test]
    fn gpst_time() {
        let clock = ClockSnapshot {
            time_nanos: 123456789,
            full_bias_nanos: -987654321,
            ..Default::default()
        };
        assert_eq!(
            clock.gpst_time(),
            Some(Epoch::from_gpst_nanoseconds(1111111110)),
        );

        // clock describing a pre GPST instant
        let clock = ClockSnapshot {
            time_nanos: 0,
            full_bias_nanos: 1,
            ..Default::default()
        };
        assert!(clock.gpst_time().is_none());
    }
}
