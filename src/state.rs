//! Tracking and accumulated delta range state bit masks
use bitflags::bitflags;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

bitflags! {
    /// Per signal tracking state, as reported by the chipset.
    /// The raw integer is part of the wire format: unknown bits are
    /// retained and round-trip through [TrackingState::bits].
    #[derive(Debug, Copy, Clone, Default)]
    #[derive(PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct TrackingState: u32 {
        /// Code lock achieved on this signal
        const CODE_LOCK = 0x0000_0001;
        /// Bit synchronization achieved
        const BIT_SYNC = 0x0000_0002;
        /// Subframe synchronization achieved
        const SUBFRAME_SYNC = 0x0000_0004;
        /// Time of week decoded from the data stream
        const TOW_DECODED = 0x0000_0008;
        /// Received time is known modulo one millisecond only
        const MSEC_AMBIGUOUS = 0x0000_0010;
        /// Symbol synchronization achieved
        const SYMBOL_SYNC = 0x0000_0020;
        /// Glonass string synchronization achieved
        const GLO_STRING_SYNC = 0x0000_0040;
        /// Glonass time of day decoded
        const GLO_TOD_DECODED = 0x0000_0080;
        /// BeiDou D2 bit synchronization achieved
        const BDS_D2_BIT_SYNC = 0x0000_0100;
        /// BeiDou D2 subframe synchronization achieved
        const BDS_D2_SUBFRAME_SYNC = 0x0000_0200;
        /// Galileo E1B/C combined code lock
        const GAL_E1BC_CODE_LOCK = 0x0000_0400;
        /// Galileo E1C secondary code lock
        const GAL_E1C_2ND_CODE_LOCK = 0x0000_0800;
        /// Galileo E1B page synchronization achieved
        const GAL_E1B_PAGE_SYNC = 0x0000_1000;
        /// SBAS synchronization achieved
        const SBAS_SYNC = 0x0000_2000;
        /// Time of week known without having decoded it
        const TOW_KNOWN = 0x0000_4000;
        /// Glonass time of day known without having decoded it
        const GLO_TOD_KNOWN = 0x0000_8000;
        /// Secondary code lock achieved
        const CODE_LOCK_2ND = 0x0001_0000;
    }
}

bitflags! {
    /// Accumulated delta range (carrier phase) state.
    /// Unknown bits are retained, like [TrackingState].
    #[derive(Debug, Copy, Clone, Default)]
    #[derive(PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct AdrState: u32 {
        /// Accumulated delta range is valid
        const VALID = 0x01;
        /// Accumulation was reset since the previous report
        const RESET = 0x02;
        /// A cycle slip was detected
        const CYCLE_SLIP = 0x04;
        /// Half cycle ambiguity is resolved
        const HALF_CYCLE_RESOLVED = 0x08;
        /// Half cycle ambiguity state is reported
        const HALF_CYCLE_REPORTED = 0x10;
    }
}
