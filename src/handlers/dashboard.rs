// src/handlers/dashboard.rs

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    common::error::ApiError,
    config::AppState,
    middleware::{auth::BearerToken, i18n::Locale},
    // Importamos os models para referenciar no Swagger
    models::{
        alerts::Alert,
        dashboard::{DashboardOverview, WeeklySalesSummary},
        stock::StockStats,
    },
};

// GET /api/painel
#[utoipa::path(
    get,
    path = "/api/painel",
    tag = "Painel",
    responses(
        (
            status = 200,
            description = "Vendas da semana, resumo por período, alertas e estoque",
            body = DashboardOverview
        ),
        (status = 401, description = "Não autorizado"),
        (status = 502, description = "API do marketplace indisponível")
    ),
    security(
        ("api_jwt" = [])
    )
)]
pub async fn get_overview(
    State(app_state): State<AppState>,
    locale: Locale,
    BearerToken(token): BearerToken,
) -> Result<impl IntoResponse, ApiError> {
    let now = app_state.business_now();

    let overview = app_state
        .dashboard_service
        .load_overview(&token, now, &locale)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(overview)))
}

// GET /api/painel/vendas
#[utoipa::path(
    get,
    path = "/api/painel/vendas",
    tag = "Painel",
    responses(
        (
            status = 200,
            description = "Faturamento dos últimos 7 dias e variação semanal",
            body = WeeklySalesSummary
        ),
        (status = 401, description = "Não autorizado")
    ),
    security(
        ("api_jwt" = [])
    )
)]
pub async fn get_weekly_sales(
    State(app_state): State<AppState>,
    locale: Locale,
    BearerToken(token): BearerToken,
) -> Result<impl IntoResponse, ApiError> {
    let now = app_state.business_now();

    let summary = app_state
        .dashboard_service
        .weekly_sales(&token, now, &locale)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(summary)))
}

// GET /api/painel/alertas
#[utoipa::path(
    get,
    path = "/api/painel/alertas",
    tag = "Painel",
    responses(
        (status = 200, description = "Até 6 alertas operacionais", body = Vec<Alert>),
        (status = 401, description = "Não autorizado")
    ),
    security(
        ("api_jwt" = [])
    )
)]
pub async fn get_alerts(
    State(app_state): State<AppState>,
    locale: Locale,
    BearerToken(token): BearerToken,
) -> Result<impl IntoResponse, ApiError> {
    let alerts = app_state
        .dashboard_service
        .alerts(&token)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(alerts)))
}

// GET /api/painel/estoque/estatisticas
#[utoipa::path(
    get,
    path = "/api/painel/estoque/estatisticas",
    tag = "Painel",
    responses(
        (status = 200, description = "Totais do estoque da farmácia", body = StockStats),
        (status = 401, description = "Não autorizado")
    ),
    security(
        ("api_jwt" = [])
    )
)]
pub async fn get_stock_stats(
    State(app_state): State<AppState>,
    locale: Locale,
    BearerToken(token): BearerToken,
) -> Result<impl IntoResponse, ApiError> {
    let stats = app_state
        .dashboard_service
        .stock_stats(&token)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(stats)))
}
