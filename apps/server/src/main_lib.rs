use std::sync::Arc;

use anyhow::Context;
use household_core::{AllocationService, AllocationServiceTrait};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub struct AppState {
    pub allocation_service: Arc<dyn AllocationServiceTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("HH_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let ttl = chrono::Duration::from_std(config.plan_cache_ttl)
        .context("HH_PLAN_CACHE_TTL_SECS is too large")?;
    tracing::info!("Plan cache TTL: {}s", ttl.num_seconds());

    let allocation_service: Arc<dyn AllocationServiceTrait> =
        Arc::new(AllocationService::with_ttl(ttl));

    Ok(Arc::new(AppState { allocation_service }))
}
