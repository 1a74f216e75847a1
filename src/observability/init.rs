//! Subscriber setup.

use super::file_writer::RotationPolicy;
use super::tracer::{self, SCOPE_NAME};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the trace file inside the data directory.
pub const TRACE_FILE_NAME: &str = "siteflow-otlp.json";

/// Installs the global subscriber: an `EnvFilter` followed by an
/// OpenTelemetry layer exporting to a rotating OTLP JSON file.
///
/// The filter comes from `RUST_LOG` when set, otherwise from
/// `config.trace_level`, otherwise `"info"`. Traces go to
/// [`TRACE_FILE_NAME`] under [`get_data_dir`](crate::infrastructure::paths::get_data_dir),
/// rotated per `config.trace_max_bytes` and `config.trace_backups`.
///
/// Tracing is optional: if the data directory cannot be created the call
/// does nothing, and only the first successful call installs a subscriber.
///
/// # Example
///
/// ```rust,no_run
/// use siteflow::observability::init_tracing;
/// use siteflow::Config;
///
/// let config = Config {
///     trace_level: Some("siteflow=debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(config.trace_level.as_deref().unwrap_or("info"))
    });

    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        SCOPE_NAME,
    )]);
    let policy = RotationPolicy {
        max_bytes: config.trace_max_bytes,
        backups: config.trace_backups,
    };

    let provider =
        tracer::create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource, policy);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SCOPE_NAME));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}
