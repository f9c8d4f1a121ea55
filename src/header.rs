//! Raw measurement log file header
use std::fmt;
use std::io::{BufWriter, Write};

use crate::{
    capability::Capabilities,
    error::FormattingError,
    version::{Version, CURRENT_VERSION},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Comment line prefix, part of the compatibility contract
pub const COMMENT_PREFIX: &str = "# ";

/// Literal column name row. Order and the duplicated trailing
/// CarrierFrequencyHz column are part of the compatibility contract
/// and must not change.
pub const COLUMN_NAMES: &str = "Raw,ElapsedRealtimeMillis,TimeNanos,LeapSecond,TimeUncertaintyNanos,FullBiasNanos,\
BiasNanos,BiasUncertaintyNanos,DriftNanosPerSecond,DriftUncertaintyNanosPerSecond,\
HardwareClockDiscontinuityCount,Svid,TimeOffsetNanos,State,ReceivedSvTimeNanos,\
ReceivedSvTimeUncertaintyNanos,Cn0DbHz,PseudorangeRateMetersPerSecond,\
PseudorangeRateUncertaintyMetersPerSecond,\
AccumulatedDeltaRangeState,AccumulatedDeltaRangeMeters,\
AccumulatedDeltaRangeUncertaintyMeters,CarrierFrequencyHz,CarrierCycles,\
CarrierPhase,CarrierPhaseUncertainty,MultipathIndicator,SnrInDb,\
ConstellationType,AgcDb,CarrierFrequencyHz";

/// Describes a raw measurement log file header: a fixed comment block
/// carrying the format [Version], the host identity strings and the
/// column name row. Rendering is pure and byte stable given identical
/// identity strings, so a consuming application may retrieve it once
/// and prepend it to an accumulated log file.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Header {
    /// Log format revision
    pub version: Version,
    /// Platform release identifier
    pub release: String,
    /// Device manufacturer identifier
    pub manufacturer: String,
    /// Device model identifier
    pub model: String,
}

impl Header {
    /// Builds the [Header] describing given host [Capabilities]
    pub fn new(capabilities: &Capabilities) -> Self {
        Self {
            version: CURRENT_VERSION,
            release: capabilities.release.clone(),
            manufacturer: capabilities.manufacturer.clone(),
            model: capabilities.model.clone(),
        }
    }

    /// Formats this [Header] into given writer
    pub fn format<W: Write>(&self, w: &mut BufWriter<W>) -> Result<(), FormattingError> {
        write!(w, "{}", self)?;
        Ok(())
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", COMMENT_PREFIX)?;
        writeln!(f, "{}Header Description:", COMMENT_PREFIX)?;
        writeln!(f, "{}", COMMENT_PREFIX)?;
        writeln!(
            f,
            "{}Version: {} Platform: {} Manufacturer: {} Model: {}",
            COMMENT_PREFIX, self.version, self.release, self.manufacturer, self.model,
        )?;
        writeln!(f, "{}", COMMENT_PREFIX)?;
        writeln!(f, "{}{}", COMMENT_PREFIX, COLUMN_NAMES)?;
        writeln!(f, "{}", COMMENT_PREFIX)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::capability::Capabilities;

    fn capabilities() -> Capabilities {
        Capabilities::new(30)
            .with_release("12")
            .with_manufacturer("Google")
            .with_model("Pixel 5")
    }

    #[test]
    fn rendering() {
        let header = Header::new(&capabilities()).to_string();
        assert!(header.contains("Raw,ElapsedRealtimeMillis"));
        assert!(header.contains("Version: v2.0.0.1"));
        assert!(header.contains("Platform: 12 Manufacturer: Google Model: Pixel 5"));
        // comment block syntax
        for line in header.lines() {
            assert!(line.starts_with("# "));
        }
    }

    #[test]
    fn byte_stable() {
        let header = Header::new(&capabilities());
        assert_eq!(header.to_string(), header.to_string());
        assert_eq!(header, Header::new(&capabilities()));
    }

    #[test]
    fn column_name_row() {
        // 1 leading token + 30 fields
        assert_eq!(COLUMN_NAMES.split(',').count(), 31);
        assert!(COLUMN_NAMES.starts_with("Raw,ElapsedRealtimeMillis"));
        // the duplicated trailing column is preserved verbatim
        assert!(COLUMN_NAMES.ends_with("AgcDb,CarrierFrequencyHz"));
        assert_eq!(
            COLUMN_NAMES
                .split(',')
                .filter(|c| *c == "CarrierFrequencyHz")
                .count(),
            2,
        );
    }
}
