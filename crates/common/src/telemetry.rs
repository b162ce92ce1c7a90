use opentelemetry::global;
use opentelemetry_sdk::propagation::TraceContextPropagator;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

use crate::config::{AppConfig, LogFormat};

/// Telemetry configuration
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub service_name: String,
    pub log_level: String,
    pub log_format: LogFormat,
    pub jaeger_endpoint: Option<String>,
    pub enable_jaeger: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "product-service".to_string(),
            log_level: "info".to_string(),
            log_format: LogFormat::Json,
            jaeger_endpoint: None,
            enable_jaeger: false,
        }
    }
}

impl TelemetryConfig {
    pub fn from_app_config(service_name: &str, config: &AppConfig) -> Self {
        Self {
            service_name: service_name.to_string(),
            log_level: config.log_level.clone(),
            log_format: config.log_format,
            jaeger_endpoint: config.jaeger_endpoint.clone(),
            enable_jaeger: config.enable_jaeger,
        }
    }
}

fn fmt_layer(format: LogFormat) -> Box<dyn Layer<Registry> + Send + Sync> {
    match format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_level(true)
            .with_thread_ids(true)
            .json()
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_level(true)
            .pretty()
            .boxed(),
    }
}

/// Initialize tracing/logging with optional Jaeger export
pub fn init_telemetry(config: TelemetryConfig) -> Result<(), Box<dyn std::error::Error>> {
    global::set_text_map_propagator(TraceContextPropagator::new());

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(fmt_layer(config.log_format));

    if config.enable_jaeger {
        let tracer = opentelemetry_jaeger::new_agent_pipeline()
            .with_service_name(&config.service_name)
            .with_endpoint(config.jaeger_endpoint.unwrap_or_else(|| "localhost:6831".to_string()))
            .install_batch(opentelemetry_sdk::runtime::Tokio)?;

        registry
            .with(tracing_opentelemetry::layer().with_tracer(tracer))
            .with(env_filter)
            .try_init()?;

        tracing::info!(
            service = %config.service_name,
            "Telemetry initialized with Jaeger tracing"
        );
    } else {
        registry.with(env_filter).try_init()?;

        tracing::info!(
            service = %config.service_name,
            "Telemetry initialized without Jaeger"
        );
    }

    Ok(())
}

/// Shutdown telemetry gracefully
pub fn shutdown_telemetry() {
    global::shutdown_tracer_provider();
}
