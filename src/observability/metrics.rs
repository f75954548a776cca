use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub trips_completed_total: IntCounterVec,
    pub stops_completed_total: IntCounter,
    pub points_awarded_total: IntCounter,
    pub redemptions_total: IntCounterVec,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let trips_completed_total = IntCounterVec::new(
            Opts::new("trips_completed_total", "Completed trips by grade"),
            &["grade"],
        )
        .expect("valid trips_completed_total metric");

        let stops_completed_total = IntCounter::new(
            "stops_completed_total",
            "Delivery stops completed across all trips",
        )
        .expect("valid stops_completed_total metric");

        let points_awarded_total = IntCounter::new(
            "points_awarded_total",
            "Points credited to driver ledgers",
        )
        .expect("valid points_awarded_total metric");

        let redemptions_total = IntCounterVec::new(
            Opts::new("redemptions_total", "Voucher redemptions by outcome"),
            &["outcome"],
        )
        .expect("valid redemptions_total metric");

        registry
            .register(Box::new(trips_completed_total.clone()))
            .expect("register trips_completed_total");
        registry
            .register(Box::new(stops_completed_total.clone()))
            .expect("register stops_completed_total");
        registry
            .register(Box::new(points_awarded_total.clone()))
            .expect("register points_awarded_total");
        registry
            .register(Box::new(redemptions_total.clone()))
            .expect("register redemptions_total");

        Self {
            registry,
            trips_completed_total,
            stops_completed_total,
            points_awarded_total,
            redemptions_total,
        }
    }

    pub fn encode(&self) -> Result<String, String> {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();

        TextEncoder::new()
            .encode(&metric_families, &mut buffer)
            .map_err(|err| format!("failed to encode metrics: {err}"))?;

        String::from_utf8(buffer).map_err(|err| format!("metrics are not valid utf8: {err}"))
    }
}
