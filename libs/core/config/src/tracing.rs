use crate::Environment;
use tracing_subscriber::{EnvFilter, prelude::*};

/// Install color-eyre for startup error reports. Safe to call more than once.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Default filter when `RUST_LOG` is not set
fn default_directives(environment: &Environment) -> &'static str {
    if environment.is_production() {
        "info,sea_orm=warn,sqlx=warn"
    } else {
        "debug,sea_orm=info,sqlx=info,hyper=info"
    }
}

/// Initialize the global subscriber.
///
/// - Production: flattened JSON events, no module targets
/// - Development: pretty, human-readable output
///
/// Both carry `tracing_error::ErrorLayer` so eyre reports include span traces.
/// `RUST_LOG` overrides the default filter. Later calls are no-ops, which
/// keeps tests that initialize tracing independent of each other.
pub fn init_tracing(environment: &Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(environment)));

    let result = if environment.is_production() {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().pretty())
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    };

    match result {
        Ok(()) => tracing::info!(?environment, "Tracing initialized"),
        Err(_) => tracing::debug!("Tracing already initialized"),
    }
}
