mod allocation;
mod health;
mod planner;
pub mod query;

use std::sync::Arc;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{
    config::Config,
    main_lib::AppState,
    models::{AllocationPlan, HouseholdProfileInput, PieChart, PieSlice},
};

pub use allocation::*;
pub use health::*;
pub use planner::planner_page;

#[derive(OpenApi)]
#[openapi(
    paths(
        healthz,
        readyz,
        calculate_allocation,
        allocation_chart,
        allocation_chart_svg,
        export_allocation
    ),
    components(schemas(HouseholdProfileInput, AllocationPlan, PieChart, PieSlice)),
    tags((name = "household"))
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(origin) => Some(origin),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin '{}'", o);
                    None
                }
            })
            .collect::<Vec<_>>();
        CorsLayer::new().allow_origin(origins)
    };

    let api = Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/openapi.json", get(openapi_json))
        .route("/allocation", post(calculate_allocation))
        .route("/allocation/chart", post(allocation_chart))
        .route("/allocation/chart.svg", get(allocation_chart_svg))
        .route("/allocation/export", get(export_allocation));

    Router::new()
        .route("/", get(planner_page))
        .nest("/api/v1", api)
        .with_state(state)
        .layer(cors)
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
        // Last added runs first: Set must precede Propagate.
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
