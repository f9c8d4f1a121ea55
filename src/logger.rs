//! Measurement bridge: wires a platform source to an application sink
use std::sync::Arc;

#[cfg(feature = "log")]
use log::warn;

use crate::{
    capability::Capabilities,
    clock::ClockSnapshot,
    error::Error,
    header::Header,
    measurement::SatelliteMeasurement,
    reading::BatchReading,
    source::MeasurementSource,
};

/// Default coarse location subscription rate (ms)
pub const LOCATION_RATE_MS: u64 = 1_000;

/// Asynchronous event forwarded to the application boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// One coarse location fix, `"{latitude},{longitude}"` payload
    LocationChange(String),
    /// Human readable rendition of one satellite measurement.
    /// Diagnostics only: the format is opaque and not meant to be
    /// parsed downstream.
    GnssMeasurement(String),
    /// One raw log line, exactly as rendered by
    /// [SatelliteMeasurement::to_line]
    RawGnssMeasurementLine(String),
}

impl Event {
    /// Name the application listens for
    pub fn name(&self) -> &'static str {
        match self {
            Self::LocationChange(_) => "locationChange",
            Self::GnssMeasurement(_) => "gnssMeasurement",
            Self::RawGnssMeasurementLine(_) => "rawGnssMeasurementLine",
        }
    }

    /// Message payload
    pub fn message(&self) -> &str {
        match self {
            Self::LocationChange(msg) => msg,
            Self::GnssMeasurement(msg) => msg,
            Self::RawGnssMeasurementLine(msg) => msg,
        }
    }
}

/// Application boundary consuming forwarded [Event]s. Both platform
/// streams may deliver concurrently, so emission takes `&self`.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: Event);
}

/// Live registration on both platform streams. The two subscription
/// handles are owned by the calling application: dropping or releasing
/// them (however [MeasurementSource::Subscription] defines it) ends
/// delivery, nothing here outlives them.
pub struct Registration<S: MeasurementSource> {
    /// Coarse location stream handle
    pub locations: S::Subscription,
    /// Raw measurement stream handle
    pub raw_measurements: S::Subscription,
    /// Log file [Header] for this platform, retrievable once at
    /// registration so the application can prepend it to an
    /// accumulated log file
    pub header: Header,
}

/// Registers on both platform streams and forwards every delivery to
/// given sink:
///
/// - one [Event::LocationChange] per location fix,
/// - one [Event::GnssMeasurement] plus one
///   [Event::RawGnssMeasurementLine] per satellite measurement, in
///   delivery order.
///
/// Fails fast with [Error::UnsupportedPlatform] when the platform does
/// not expose raw measurements (no partial registration is attempted),
/// and with [Error::AuthorizationDenied] when location authorization
/// was not granted (never retried here, so the host prompt is never
/// spammed). Once registered, a malformed record is dropped and the
/// stream carries on: the worst case failure is one line that could
/// not be rendered.
pub fn register<S: MeasurementSource, E: EventSink + 'static>(
    source: &mut S,
    sink: Arc<E>,
) -> Result<Registration<S>, Error> {
    let capabilities = source.capabilities();
    capabilities.ensure_raw_measurements()?;

    if !source.authorized() {
        return Err(Error::AuthorizationDenied);
    }

    let header = Header::new(&capabilities);

    let location_sink = sink.clone();
    let locations = source.subscribe_locations(
        LOCATION_RATE_MS,
        0.0,
        Box::new(move |fix| {
            location_sink.emit(Event::LocationChange(fix.to_string()));
        }),
    );

    let raw_measurements = source.subscribe_raw_measurements(Box::new(move |batch: BatchReading| {
        let elapsed_realtime_ms = batch.elapsed_realtime_ms;
        let clock = match ClockSnapshot::try_from(batch.clock) {
            Ok(clock) => clock,
            Err(_e) => {
                #[cfg(feature = "log")]
                warn!("dropped batch: {}", _e);
                return;
            },
        };
        for reading in batch.measurements {
            match SatelliteMeasurement::try_from(reading) {
                Ok(measurement) => {
                    sink.emit(Event::GnssMeasurement(format!("{:?}", measurement)));
                    sink.emit(Event::RawGnssMeasurementLine(measurement.to_line(
                        &clock,
                        elapsed_realtime_ms,
                        &capabilities,
                    )));
                },
                Err(_e) => {
                    #[cfg(feature = "log")]
                    warn!("dropped measurement: {}", _e);
                },
            }
        }
    }));

    Ok(Registration {
        locations,
        raw_measurements,
        header,
    })
}

/// Returns the log file [Header] for given platform without
/// registering anything, for applications that only need the
/// module initialization constant.
pub fn file_header(capabilities: &Capabilities) -> Header {
    Header::new(capabilities)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        source::{LocationCallback, LocationFix, MeasurementCallback},
        tests::toolkit::{gps_batch_reading, sparse_measurement_reading},
    };
    use std::sync::Mutex;

    struct MockSource {
        capabilities: Capabilities,
        authorized: bool,
        location_callback: Option<LocationCallback>,
        measurement_callback: Option<MeasurementCallback>,
    }

    impl MockSource {
        fn new(api_level: u32, authorized: bool) -> Self {
            Self {
                capabilities: Capabilities::new(api_level)
                    .with_release("12")
                    .with_manufacturer("Google")
                    .with_model("Pixel 5"),
                authorized,
                location_callback: None,
                measurement_callback: None,
            }
        }

        fn deliver_location(&mut self, fix: LocationFix) {
            if let Some(callback) = &mut self.location_callback {
                callback(fix);
            }
        }

        fn deliver_batch(&mut self, batch: BatchReading) {
            if let Some(callback) = &mut self.measurement_callback {
                callback(batch);
            }
        }
    }

    impl MeasurementSource for MockSource {
        type Subscription = ();
        fn capabilities(&self) -> Capabilities {
            self.capabilities.clone()
        }
        fn authorized(&self) -> bool {
            self.authorized
        }
        fn subscribe_locations(
            &mut self,
            _rate_ms: u64,
            _min_distance_m: f64,
            callback: LocationCallback,
        ) -> Self::Subscription {
            self.location_callback = Some(callback);
        }
        fn subscribe_raw_measurements(
            &mut self,
            callback: MeasurementCallback,
        ) -> Self::Subscription {
            self.measurement_callback = Some(callback);
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        events: Mutex<Vec<Event>>,
    }

    impl EventSink for RecordingSink {
        fn emit(&self, event: Event) {
            self.events.lock().unwrap().push(event);
        }
    }

    #[test]
    fn unsupported_platform_fails_fast() {
        let mut source = MockSource::new(23, true);
        let sink = Arc::new(RecordingSink::default());
        match register(&mut source, sink) {
            Err(Error::UnsupportedPlatform { found, minimum }) => {
                assert_eq!(found, 23);
                assert_eq!(minimum, 24);
            },
            _ => panic!("expected UnsupportedPlatform"),
        }
        // no partial registration
        assert!(source.location_callback.is_none());
        assert!(source.measurement_callback.is_none());
    }

    #[test]
    fn authorization_denied() {
        let mut source = MockSource::new(30, false);
        let sink = Arc::new(RecordingSink::default());
        assert!(matches!(
            register(&mut source, sink),
            Err(Error::AuthorizationDenied),
        ));
        assert!(source.location_callback.is_none());
        assert!(source.measurement_callback.is_none());
    }

    #[test]
    fn forwards_location_fixes() {
        let mut source = MockSource::new(30, true);
        let sink = Arc::new(RecordingSink::default());
        let _registration = register(&mut source, sink.clone()).unwrap();

        source.deliver_location(LocationFix {
            latitude: 52.0,
            longitude: 4.5,
        });

        let events = sink.events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name(), "locationChange");
        assert_eq!(events[0].message(), "52.0,4.5");
    }

    #[test]
    fn forwards_raw_measurement_lines() {
        let mut source = MockSource::new(30, true);
        let sink = Arc::new(RecordingSink::default());
        let registration = register(&mut source, sink.clone()).unwrap();
        assert!(registration
            .header
            .to_string()
            .contains("Version: v2.0.0.1"));

        source.deliver_batch(gps_batch_reading());

        let events = sink.events.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].name(), "gnssMeasurement");
        assert_eq!(events[1].name(), "rawGnssMeasurementLine");
        assert_eq!(
            events[1].message(),
            "Raw,42,123456789,,,-987654321,,,,,0,5,,1,111,2,30.5,-500.1,0.1,1,1000.0,0.5,,,,,0,,1,,",
        );
    }

    #[test]
    fn malformed_record_does_not_stop_the_stream() {
        let mut source = MockSource::new(30, true);
        let sink = Arc::new(RecordingSink::default());
        let _registration = register(&mut source, sink.clone()).unwrap();

        let mut batch = gps_batch_reading();
        let mut malformed = sparse_measurement_reading();
        malformed.svid = None;
        batch.measurements.insert(0, malformed);

        source.deliver_batch(batch);
        // the malformed record was dropped, the valid one went through
        assert_eq!(sink.events.lock().unwrap().len(), 2);

        // and the subscription is still live
        source.deliver_batch(gps_batch_reading());
        assert_eq!(sink.events.lock().unwrap().len(), 4);
    }
}
