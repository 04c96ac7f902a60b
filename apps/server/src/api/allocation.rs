use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, RawQuery, State},
    http::header,
    response::IntoResponse,
    Json,
};
use household_core::{render_svg, HouseholdProfile};

use crate::{
    api::query::PlannerQuery,
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{AllocationPlan, HouseholdProfileInput, PieChart},
};

#[utoipa::path(
    post,
    path = "/api/v1/allocation",
    request_body = HouseholdProfileInput,
    responses((status = 200, body = AllocationPlan), (status = 400, description = "Invalid household parameters"))
)]
pub async fn calculate_allocation(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<HouseholdProfileInput>, JsonRejection>,
) -> ApiResult<Json<AllocationPlan>> {
    let Json(payload) = payload?;
    let profile = HouseholdProfile::try_from(payload)?;
    let plan = state.allocation_service.calculate_allocation(&profile)?;
    Ok(Json(AllocationPlan::from(plan)))
}

#[utoipa::path(
    post,
    path = "/api/v1/allocation/chart",
    request_body = HouseholdProfileInput,
    responses((status = 200, body = PieChart), (status = 400, description = "Invalid household parameters"))
)]
pub async fn allocation_chart(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<HouseholdProfileInput>, JsonRejection>,
) -> ApiResult<Json<PieChart>> {
    let Json(payload) = payload?;
    let profile = HouseholdProfile::try_from(payload)?;
    let chart = state.allocation_service.build_chart(&profile)?;
    Ok(Json(PieChart::from(chart)))
}

#[utoipa::path(
    get,
    path = "/api/v1/allocation/chart.svg",
    responses((status = 200, description = "Donut chart of the plan", content_type = "image/svg+xml"))
)]
pub async fn allocation_chart_svg(
    State(state): State<Arc<AppState>>,
    raw: RawQuery,
) -> ApiResult<impl IntoResponse> {
    let query = PlannerQuery::parse(raw.0.as_deref())?;
    let chart = state.allocation_service.build_chart(&query.profile)?;
    Ok((
        [(header::CONTENT_TYPE, "image/svg+xml; charset=utf-8")],
        render_svg(&chart),
    ))
}

/// Exporting plans is a disabled placeholder, like the sidebar button.
#[utoipa::path(
    get,
    path = "/api/v1/allocation/export",
    responses((status = 501, description = "Not available yet"))
)]
pub async fn export_allocation() -> ApiResult<()> {
    Err(ApiError::NotImplemented(
        "Exporting plans is not available yet".to_string(),
    ))
}
