use std::sync::Arc;

use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::Html,
};
use household_core::{render_svg, HouseholdProfile};

use crate::{
    api::query::PlannerQuery,
    error::ApiError,
    main_lib::AppState,
    page::{render_planner, PlannerView},
};

/// The planner page. Renders the chart below the form when `generate` is set;
/// invalid inputs re-render the form with defaults and an error banner.
pub async fn planner_page(
    State(state): State<Arc<AppState>>,
    raw: RawQuery,
) -> (StatusCode, Html<String>) {
    let query = match PlannerQuery::parse(raw.0.as_deref()) {
        Ok(query) => query,
        Err(e) => return error_page(ApiError::from(e)),
    };

    let chart_svg = if query.generate {
        tracing::debug!("Optimizing allocation for {:?}", query.profile);
        match state.allocation_service.build_chart(&query.profile) {
            Ok(chart) => Some(render_svg(&chart)),
            Err(e) => return error_page(ApiError::from(e)),
        }
    } else {
        None
    };

    let html = render_planner(&PlannerView {
        profile: &query.profile,
        chart_svg,
        error: None,
    });
    (StatusCode::OK, Html(html))
}

fn error_page(err: ApiError) -> (StatusCode, Html<String>) {
    let defaults = HouseholdProfile::default();
    let html = render_planner(&PlannerView {
        profile: &defaults,
        chart_svg: None,
        error: Some(err.to_string()),
    });
    (err.status(), Html(html))
}
