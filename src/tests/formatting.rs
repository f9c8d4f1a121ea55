//! End to end log file formatting
use std::io::BufWriter;

use crate::{
    batch::MeasurementBatch,
    capability::Capabilities,
    header::Header,
    reading::{BatchReading, MeasurementReading},
    tests::toolkit::{gps_batch_reading, sparse_clock_reading, Utf8Buffer},
};

fn capabilities() -> Capabilities {
    Capabilities::new(30)
        .with_release("12")
        .with_manufacturer("Google")
        .with_model("Pixel 5")
}

#[test]
fn log_file() {
    let capabilities = capabilities();

    let mut buf = BufWriter::new(Utf8Buffer::new(4096));

    // one header, then every delivered batch in delivery order
    Header::new(&capabilities).format(&mut buf).unwrap();

    let first = MeasurementBatch::try_from(gps_batch_reading()).unwrap();
    first.format(&mut buf, &capabilities).unwrap();

    let second = MeasurementBatch::try_from(BatchReading {
        elapsed_realtime_ms: 1042,
        clock: sparse_clock_reading(),
        measurements: vec![
            MeasurementReading {
                svid: Some(7),
                snr_in_db: Some(29.5),
                ..crate::tests::toolkit::sparse_measurement_reading()
            },
            MeasurementReading {
                svid: Some(11),
                constellation_type: Some(6),
                agc_db: Some(-1.5),
                ..crate::tests::toolkit::sparse_measurement_reading()
            },
        ],
    })
    .unwrap();
    second.format(&mut buf, &capabilities).unwrap();

    let content = buf.into_inner().unwrap().to_ascii_utf8();
    assert_eq!(
        content,
        "# \n\
         # Header Description:\n\
         # \n\
         # Version: v2.0.0.1 Platform: 12 Manufacturer: Google Model: Pixel 5\n\
         # \n\
         # Raw,ElapsedRealtimeMillis,TimeNanos,LeapSecond,TimeUncertaintyNanos,FullBiasNanos,\
         BiasNanos,BiasUncertaintyNanos,DriftNanosPerSecond,DriftUncertaintyNanosPerSecond,\
         HardwareClockDiscontinuityCount,Svid,TimeOffsetNanos,State,ReceivedSvTimeNanos,\
         ReceivedSvTimeUncertaintyNanos,Cn0DbHz,PseudorangeRateMetersPerSecond,\
         PseudorangeRateUncertaintyMetersPerSecond,\
         AccumulatedDeltaRangeState,AccumulatedDeltaRangeMeters,\
         AccumulatedDeltaRangeUncertaintyMeters,CarrierFrequencyHz,CarrierCycles,\
         CarrierPhase,CarrierPhaseUncertainty,MultipathIndicator,SnrInDb,\
         ConstellationType,AgcDb,CarrierFrequencyHz\n\
         # \n\
         Raw,42,123456789,,,-987654321,,,,,0,5,,1,111,2,30.5,-500.1,0.1,1,1000.0,0.5,,,,,0,,1,,\n\
         Raw,1042,123456789,,,-987654321,,,,,0,7,,1,111,2,30.5,-500.1,0.1,1,1000.0,0.5,,,,,0,29.5,1,,\n\
         Raw,1042,123456789,,,-987654321,,,,,0,11,,1,111,2,30.5,-500.1,0.1,1,1000.0,0.5,,,,,0,,6,-1.5,\n",
    );
}
