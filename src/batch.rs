//! Raw measurement batch
use std::io::{BufWriter, Write};

use itertools::Itertools;

use crate::{
    capability::Capabilities,
    clock::ClockSnapshot,
    constellation::ConstellationType,
    error::{FormattingError, MalformedMeasurement},
    measurement::SatelliteMeasurement,
    reading::BatchReading,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One validated measurement batch: a clock snapshot plus the set of
/// per satellite measurements delivered together at one instant, in
/// delivery order (never re-sorted).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MeasurementBatch {
    /// Milliseconds since boot (monotonic), sampled at delivery
    pub elapsed_realtime_ms: u64,
    /// Clock snapshot for the whole batch
    pub clock: ClockSnapshot,
    /// Per satellite measurements, delivery order preserved
    pub measurements: Vec<SatelliteMeasurement>,
}

impl MeasurementBatch {
    /// Returns the satellite identification numbers tracked in this batch
    pub fn satellites(&self) -> impl Iterator<Item = u16> + '_ {
        self.measurements.iter().map(|m| m.svid)
    }

    /// Returns the distinct constellations observed in this batch
    pub fn constellations(&self) -> Vec<ConstellationType> {
        self.measurements
            .iter()
            .map(|m| m.constellation)
            .unique()
            .collect()
    }

    /// Formats every measurement of this batch, one raw log line each,
    /// into given writer. Concatenating one [crate::header::Header] and
    /// every delivered batch, in delivery order, constitutes a raw
    /// measurement log file.
    pub fn format<W: Write>(
        &self,
        w: &mut BufWriter<W>,
        capabilities: &Capabilities,
    ) -> Result<(), FormattingError> {
        for measurement in self.measurements.iter() {
            measurement.format(w, &self.clock, self.elapsed_realtime_ms, capabilities)?;
        }
        Ok(())
    }
}

impl TryFrom<BatchReading> for MeasurementBatch {
    type Error = MalformedMeasurement;
    /// Validates a whole delivered batch. Strict: any malformed record
    /// fails the conversion. Stream consumers that prefer to drop bad
    /// records and carry on validate per record instead, see
    /// [crate::logger::register].
    fn try_from(reading: BatchReading) -> Result<Self, Self::Error> {
        Ok(Self {
            elapsed_realtime_ms: reading.elapsed_realtime_ms,
            clock: ClockSnapshot::try_from(reading.clock)?,
            measurements: reading
                .measurements
                .into_iter()
                .map(SatelliteMeasurement::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}
