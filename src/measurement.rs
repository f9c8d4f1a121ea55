//! Per satellite raw measurement and its log line encoding
use std::io::{BufWriter, Write};

use num_traits::FromPrimitive;

use crate::{
    capability::Capabilities,
    clock::ClockSnapshot,
    constellation::ConstellationType,
    error::{FormattingError, MalformedMeasurement},
    formatting::{Blankable, Decimal, Decimal32},
    reading::MeasurementReading,
    state::{AdrState, TrackingState},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Multipath indicator code carried by every satellite measurement
#[derive(FromPrimitive, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MultipathIndicator {
    /// Presence of multipath is unknown
    #[default]
    Unknown = 0,
    /// Multipath was detected on this signal
    Detected = 1,
    /// No multipath was detected on this signal
    NotDetected = 2,
}

impl MultipathIndicator {
    /// Interprets a multipath code delivered by the platform.
    /// Codes outside the published set decay to [MultipathIndicator::Unknown].
    pub fn from_code(code: u8) -> Self {
        Self::from_u8(code).unwrap_or(Self::Unknown)
    }

    /// Returns the integer code rendered in the raw log line
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

/// Validated measurement of one tracked satellite/signal.
/// Optional fields are tagged options: an absent optional is a normal
/// data state, rendered as a blank column.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SatelliteMeasurement {
    /// Satellite identification number
    pub svid: u16,
    /// Time offset of this measurement versus the batch clock (ns)
    pub time_offset_nanos: Option<f64>,
    /// Tracking state
    pub state: TrackingState,
    /// Received satellite time (ns)
    pub received_sv_time_nanos: i64,
    /// 1 sigma received satellite time uncertainty (ns)
    pub received_sv_time_uncertainty_nanos: i64,
    /// Carrier to noise density (dB-Hz)
    pub cn0_db_hz: f64,
    /// Pseudorange rate (m/s)
    pub pseudorange_rate_mps: f64,
    /// 1 sigma pseudorange rate uncertainty (m/s)
    pub pseudorange_rate_uncertainty_mps: f64,
    /// Accumulated delta range state
    pub adr_state: AdrState,
    /// Accumulated delta range (m)
    pub adr_meters: f64,
    /// 1 sigma accumulated delta range uncertainty (m)
    pub adr_uncertainty_meters: f64,
    /// Carrier frequency (Hz)
    pub carrier_frequency_hz: Option<f32>,
    /// Full carrier cycle count
    pub carrier_cycles: Option<i64>,
    /// Fractional carrier phase
    pub carrier_phase: Option<f64>,
    /// 1 sigma carrier phase uncertainty
    pub carrier_phase_uncertainty: Option<f64>,
    /// Multipath indicator
    pub multipath_indicator: MultipathIndicator,
    /// Signal to noise ratio (dB)
    pub snr_in_db: Option<f64>,
    /// Constellation this satellite belongs to
    pub constellation: ConstellationType,
    /// Automatic gain control level (dB). Only rendered on platforms
    /// that expose the field, see [Capabilities::supports_agc].
    pub agc_db: Option<f64>,
}

impl SatelliteMeasurement {
    /// Encodes this measurement as one raw log line: the literal
    /// leading `Raw` token followed by 30 comma separated fields.
    /// Absent optionals render blank to preserve column alignment;
    /// the AGC column also renders blank whenever the platform does
    /// not expose the field, regardless of presence.
    pub fn to_line(
        &self,
        clock: &ClockSnapshot,
        elapsed_realtime_ms: u64,
        capabilities: &Capabilities,
    ) -> String {
        let agc_db = if capabilities.supports_agc() {
            self.agc_db
        } else {
            None
        };
        format!(
            "Raw,{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{}",
            elapsed_realtime_ms,
            clock.time_nanos,
            Blankable(clock.leap_second),
            Blankable(clock.time_uncertainty_nanos.map(Decimal)),
            clock.full_bias_nanos,
            Blankable(clock.bias_nanos.map(Decimal)),
            Blankable(clock.bias_uncertainty_nanos.map(Decimal)),
            Blankable(clock.drift_nanos_per_second.map(Decimal)),
            Blankable(clock.drift_uncertainty_nanos_per_second.map(Decimal)),
            clock.hw_clock_discontinuity_count,
            self.svid,
            Blankable(self.time_offset_nanos.map(Decimal)),
            self.state.bits(),
            self.received_sv_time_nanos,
            self.received_sv_time_uncertainty_nanos,
            Decimal(self.cn0_db_hz),
            Decimal(self.pseudorange_rate_mps),
            Decimal(self.pseudorange_rate_uncertainty_mps),
            self.adr_state.bits(),
            Decimal(self.adr_meters),
            Decimal(self.adr_uncertainty_meters),
            Blankable(self.carrier_frequency_hz.map(Decimal32)),
            Blankable(self.carrier_cycles),
            Blankable(self.carrier_phase.map(Decimal)),
            Blankable(self.carrier_phase_uncertainty.map(Decimal)),
            self.multipath_indicator.code(),
            Blankable(self.snr_in_db.map(Decimal)),
            self.constellation.code(),
            Blankable(agc_db.map(Decimal)),
            Blankable(self.carrier_frequency_hz.map(Decimal32)),
        )
    }

    /// Formats this measurement as one raw log line into given writer
    pub fn format<W: Write>(
        &self,
        w: &mut BufWriter<W>,
        clock: &ClockSnapshot,
        elapsed_realtime_ms: u64,
        capabilities: &Capabilities,
    ) -> Result<(), FormattingError> {
        writeln!(w, "{}", self.to_line(clock, elapsed_realtime_ms, capabilities))?;
        Ok(())
    }
}

impl TryFrom<MeasurementReading> for SatelliteMeasurement {
    type Error = MalformedMeasurement;
    fn try_from(reading: MeasurementReading) -> Result<Self, Self::Error> {
        Ok(Self {
            svid: reading.svid.ok_or(MalformedMeasurement { field: "Svid" })?,
            time_offset_nanos: reading.time_offset_nanos,
            state: TrackingState::from_bits_retain(
                reading.state.ok_or(MalformedMeasurement { field: "State" })?,
            ),
            received_sv_time_nanos: reading.received_sv_time_nanos.ok_or(
                MalformedMeasurement {
                    field: "ReceivedSvTimeNanos",
                },
            )?,
            received_sv_time_uncertainty_nanos: reading.received_sv_time_uncertainty_nanos.ok_or(
                MalformedMeasurement {
                    field: "ReceivedSvTimeUncertaintyNanos",
                },
            )?,
            cn0_db_hz: reading
                .cn0_db_hz
                .ok_or(MalformedMeasurement { field: "Cn0DbHz" })?,
            pseudorange_rate_mps: reading.pseudorange_rate_mps.ok_or(MalformedMeasurement {
                field: "PseudorangeRateMetersPerSecond",
            })?,
            pseudorange_rate_uncertainty_mps: reading.pseudorange_rate_uncertainty_mps.ok_or(
                MalformedMeasurement {
                    field: "PseudorangeRateUncertaintyMetersPerSecond",
                },
            )?,
            adr_state: AdrState::from_bits_retain(reading.adr_state.ok_or(
                MalformedMeasurement {
                    field: "AccumulatedDeltaRangeState",
                },
            )?),
            adr_meters: reading.adr_meters.ok_or(MalformedMeasurement {
                field: "AccumulatedDeltaRangeMeters",
            })?,
            adr_uncertainty_meters: reading.adr_uncertainty_meters.ok_or(
                MalformedMeasurement {
                    field: "AccumulatedDeltaRangeUncertaintyMeters",
                },
            )?,
            carrier_frequency_hz: reading.carrier_frequency_hz,
            carrier_cycles: reading.carrier_cycles,
            carrier_phase: reading.carrier_phase,
            carrier_phase_uncertainty: reading.carrier_phase_uncertainty,
            multipath_indicator: MultipathIndicator::from_code(reading.multipath_indicator.ok_or(
                MalformedMeasurement {
                    field: "MultipathIndicator",
                },
            )?),
            snr_in_db: reading.snr_in_db,
            constellation: ConstellationType::from_code(reading.constellation_type.ok_or(
                MalformedMeasurement {
                    field: "ConstellationType",
                },
            )?),
            agc_db: reading.agc_db,
        })
    }
}
