use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use tracing::warn;

use crate::core::{PayloadBounds, SiteSelection};
use crate::error::DashError;
use crate::render::{PageLayout, PlotlyFigure};

use super::AppState;

/// Error surfaced to HTTP clients as a JSON body.
pub(crate) struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl From<DashError> for ApiError {
    fn from(err: DashError) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            warn!(status = %self.status, error = %self.message, "request failed");
        }
        (
            self.status,
            Json(serde_json::json!({ "error": self.message })),
        )
            .into_response()
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SiteQuery {
    site: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ScatterQuery {
    site: Option<String>,
    low: Option<String>,
    high: Option<String>,
}

fn selection(site: Option<&str>) -> SiteSelection {
    site.map(SiteSelection::from_value).unwrap_or_default()
}

impl ScatterQuery {
    fn interval(&self) -> Option<PayloadBounds> {
        PayloadBounds::parse(self.low.as_deref(), self.high.as_deref())
    }
}

pub(crate) async fn index(State(state): State<AppState>) -> Html<String> {
    Html(String::clone(&state.page))
}

pub(crate) async fn layout(State(state): State<AppState>) -> Json<PageLayout> {
    Json(state.dashboard.layout().clone())
}

pub(crate) async fn pie_figure(
    State(state): State<AppState>,
    Query(query): Query<SiteQuery>,
) -> Json<PlotlyFigure> {
    let site = selection(query.site.as_deref());
    Json(state.dashboard.pie(&site).to_plotly_figure())
}

pub(crate) async fn scatter_figure(
    State(state): State<AppState>,
    Query(query): Query<ScatterQuery>,
) -> Json<PlotlyFigure> {
    let site = selection(query.site.as_deref());
    Json(
        state
            .dashboard
            .scatter(&site, query.interval())
            .to_plotly_figure(),
    )
}

pub(crate) async fn figure_contract(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(query): Query<ScatterQuery>,
) -> Result<Response, ApiError> {
    let site = selection(query.site.as_deref());
    let chart = match kind.as_str() {
        "pie" => state.dashboard.pie(&site),
        "scatter" => state.dashboard.scatter(&site, query.interval()),
        other => return Err(ApiError::not_found(format!("unknown chart `{other}`"))),
    };
    let body = chart.to_json_contract_v1_pretty()?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
