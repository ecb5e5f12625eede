// src/handlers/orders.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::error::ApiError,
    config::AppState,
    middleware::{auth::BearerToken, i18n::Locale},
    models::orders::Order,
};

// GET /api/pedidos/meus
#[utoipa::path(
    get,
    path = "/api/pedidos/meus",
    tag = "Pedidos",
    responses(
        (status = 200, description = "Pedidos do cliente, do mais recente", body = Vec<Order>),
        (status = 401, description = "Não autorizado"),
        (status = 502, description = "API do marketplace indisponível")
    ),
    security(
        ("api_jwt" = [])
    )
)]
pub async fn get_my_orders(
    State(app_state): State<AppState>,
    locale: Locale,
    BearerToken(token): BearerToken,
) -> Result<impl IntoResponse, ApiError> {
    let orders = app_state
        .dashboard_service
        .customer_orders(&token)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(orders)))
}
