#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

/*
 * GNSS-RawLog is part of the rtk-rs framework.
 * Authors: Guillaume W. Bres <guillaume.bressaix@gmail.com> et al.
 * This framework is shipped under Mozilla Public V2 license.
 */

extern crate gnss_rs as gnss;

#[macro_use]
extern crate num_derive;

pub mod batch;
pub mod capability;
pub mod clock;
pub mod constellation;
pub mod header;
pub mod logger;
pub mod measurement;
pub mod reading;
pub mod source;
pub mod state;
pub mod version;

mod error;
mod formatting;

#[cfg(test)]
mod tests;

/// Package to include all basic structures
pub mod prelude {
    // export
    pub use crate::{
        batch::MeasurementBatch,
        capability::{Capabilities, AGC_MIN_API, RAW_MEASUREMENTS_MIN_API},
        clock::ClockSnapshot,
        constellation::ConstellationType,
        error::{Error, FormattingError, MalformedMeasurement},
        header::{Header, COLUMN_NAMES},
        logger::{file_header, register, Event, EventSink, Registration, LOCATION_RATE_MS},
        measurement::{MultipathIndicator, SatelliteMeasurement},
        reading::{BatchReading, ClockReading, MeasurementReading},
        source::{LocationCallback, LocationFix, MeasurementCallback, MeasurementSource},
        state::{AdrState, TrackingState},
        version::{Version, CURRENT_VERSION},
    };
    // pub re-export
    pub use gnss::prelude::Constellation;
    pub use hifitime::Epoch;
}
