//! Unvalidated readings, as marshaled from the platform callbacks.
//!
//! Every field is carried as an [Option]: the platform pairs each value
//! with a presence flag, and the distinction between "absent optional"
//! and "absent required" is only drawn when a reading is converted into
//! the validated model ([crate::clock::ClockSnapshot],
//! [crate::measurement::SatelliteMeasurement]).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One clock snapshot reading, delivered alongside every measurement batch
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClockReading {
    /// Receiver clock in the GNSS time base (ns)
    pub time_nanos: Option<i64>,
    /// Leap second count, when known
    pub leap_second: Option<u8>,
    /// 1 sigma time uncertainty (ns)
    pub time_uncertainty_nanos: Option<f64>,
    /// Full bias between clock and true GNSS time (ns)
    pub full_bias_nanos: Option<i64>,
    /// Sub nanosecond bias (ns)
    pub bias_nanos: Option<f64>,
    /// 1 sigma bias uncertainty (ns)
    pub bias_uncertainty_nanos: Option<f64>,
    /// Clock drift (ns/s)
    pub drift_nanos_per_second: Option<f64>,
    /// 1 sigma drift uncertainty (ns/s)
    pub drift_uncertainty_nanos_per_second: Option<f64>,
    /// Hardware clock discontinuity counter
    pub hw_clock_discontinuity_count: Option<u32>,
}

/// One per satellite/signal measurement reading
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeasurementReading {
    /// Satellite identification number
    pub svid: Option<u16>,
    /// Time offset of this measurement versus the batch clock (ns)
    pub time_offset_nanos: Option<f64>,
    /// Tracking state bit mask
    pub state: Option<u32>,
    /// Received satellite time (ns)
    pub received_sv_time_nanos: Option<i64>,
    /// 1 sigma received satellite time uncertainty (ns)
    pub received_sv_time_uncertainty_nanos: Option<i64>,
    /// Carrier to noise density (dB-Hz)
    pub cn0_db_hz: Option<f64>,
    /// Pseudorange rate (m/s)
    pub pseudorange_rate_mps: Option<f64>,
    /// 1 sigma pseudorange rate uncertainty (m/s)
    pub pseudorange_rate_uncertainty_mps: Option<f64>,
    /// Accumulated delta range state bit mask
    pub adr_state: Option<u32>,
    /// Accumulated delta range (m)
    pub adr_meters: Option<f64>,
    /// 1 sigma accumulated delta range uncertainty (m)
    pub adr_uncertainty_meters: Option<f64>,
    /// Carrier frequency (Hz)
    pub carrier_frequency_hz: Option<f32>,
    /// Full carrier cycle count
    pub carrier_cycles: Option<i64>,
    /// Fractional carrier phase
    pub carrier_phase: Option<f64>,
    /// 1 sigma carrier phase uncertainty
    pub carrier_phase_uncertainty: Option<f64>,
    /// Multipath indicator code
    pub multipath_indicator: Option<u8>,
    /// Signal to noise ratio (dB)
    pub snr_in_db: Option<f64>,
    /// Constellation type code
    pub constellation_type: Option<u8>,
    /// Automatic gain control level (dB)
    pub agc_db: Option<f64>,
}

/// One raw measurement batch as delivered by the platform callback:
/// a clock reading plus zero or more satellite readings, in delivery
/// order, stamped with the monotonic elapsed realtime of reception.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BatchReading {
    /// Milliseconds since boot (monotonic), sampled at delivery
    pub elapsed_realtime_ms: u64,
    /// Clock snapshot for the whole batch
    pub clock: ClockReading,
    /// Per satellite readings, delivery order preserved
    pub measurements: Vec<MeasurementReading>,
}
