//! Constellation type codes used by the raw measurement stream
use num_traits::FromPrimitive;

use crate::prelude::Constellation;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Integer constellation code carried by every satellite measurement.
/// The code is part of the wire format: [ConstellationType::code]
/// round-trips the value the platform delivered, as long as it is one
/// of the published codes.
#[derive(FromPrimitive, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConstellationType {
    /// Constellation not identified by the chipset
    #[default]
    Unknown = 0,
    /// `GPS` american constellation
    Gps = 1,
    /// Space based augmentation vehicle
    Sbas = 2,
    /// `Glonass` russian constellation
    Glonass = 3,
    /// `QZSS` japanese constellation
    Qzss = 4,
    /// `BeiDou` chinese constellation
    Beidou = 5,
    /// `Galileo` european constellation
    Galileo = 6,
    /// `IRNSS` indian constellation
    Irnss = 7,
}

impl ConstellationType {
    /// Interprets a constellation code delivered by the platform.
    /// Codes outside the published set decay to [ConstellationType::Unknown].
    pub fn from_code(code: u8) -> Self {
        Self::from_u8(code).unwrap_or(Self::Unknown)
    }

    /// Returns the integer code rendered in the raw log line
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Converts self to a [Constellation], when one is identified
    pub fn constellation(&self) -> Option<Constellation> {
        match self {
            Self::Unknown => None,
            Self::Gps => Some(Constellation::GPS),
            Self::Sbas => Some(Constellation::SBAS),
            Self::Glonass => Some(Constellation::Glonass),
            Self::Qzss => Some(Constellation::QZSS),
            Self::Beidou => Some(Constellation::BeiDou),
            Self::Galileo => Some(Constellation::Galileo),
            Self::Irnss => Some(Constellation::IRNSS),
        }
    }
}
