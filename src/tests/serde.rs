//! serde round trips over the public model
use crate::{
    batch::MeasurementBatch,
    tests::toolkit::gps_batch_reading,
};

#[test]
fn batch_roundtrip() {
    let batch = MeasurementBatch::try_from(gps_batch_reading()).unwrap();
    let json = serde_json::to_string(&batch).unwrap();
    let parsed: MeasurementBatch = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, batch);
}

#[test]
fn reading_roundtrip() {
    let reading = gps_batch_reading();
    let json = serde_json::to_string(&reading).unwrap();
    let parsed: crate::reading::BatchReading = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, reading);
}
