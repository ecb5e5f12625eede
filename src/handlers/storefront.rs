// src/handlers/storefront.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::i18n::Locale,
    models::{
        offers::{BestOffer, Offer},
        storefront::{HomeFeed, ProductListing, ProductQuery},
    },
};

// GET /api/vitrine
#[utoipa::path(
    get,
    path = "/api/vitrine",
    tag = "Vitrine",
    responses(
        (
            status = 200,
            description = "Produtos, promoções, farmácias e melhores ofertas",
            body = HomeFeed
        ),
        (status = 502, description = "API do marketplace indisponível (com fallback desligado)")
    )
)]
pub async fn get_home(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let home = app_state
        .storefront_service
        .load_home()
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(home)))
}

// GET /api/vitrine/produtos
#[utoipa::path(
    get,
    path = "/api/vitrine/produtos",
    tag = "Vitrine",
    params(ProductQuery),
    responses(
        (
            status = 200,
            description = "Produtos agregados, filtrados e ordenados",
            body = ProductListing
        ),
        (status = 400, description = "Filtro inválido"),
        (status = 502, description = "API do marketplace indisponível")
    )
)]
pub async fn list_products(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(query): Query<ProductQuery>,
) -> Result<impl IntoResponse, ApiError> {
    query
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale))?;

    let listing = app_state
        .storefront_service
        .list_products(&query)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(listing)))
}

// GET /api/vitrine/melhores-ofertas
#[utoipa::path(
    get,
    path = "/api/vitrine/melhores-ofertas",
    tag = "Vitrine",
    responses(
        (
            status = 200,
            description = "Até 10 produtos com maior economia entre farmácias",
            body = Vec<BestOffer>
        ),
        (status = 502, description = "API do marketplace indisponível")
    )
)]
pub async fn get_best_offers(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {
    let offers = app_state
        .storefront_service
        .best_offers()
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(offers)))
}

// GET /api/farmacias/{id}/ofertas
#[utoipa::path(
    get,
    path = "/api/farmacias/{id}/ofertas",
    tag = "Vitrine",
    params(
        ("id" = i64, Path, description = "ID da farmácia")
    ),
    responses(
        (
            status = 200,
            description = "Ofertas da farmácia, na ordem do marketplace",
            body = Vec<Offer>
        ),
        (status = 502, description = "API do marketplace indisponível")
    )
)]
pub async fn get_pharmacy_offers(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(pharmacy_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let offers = app_state
        .storefront_service
        .pharmacy_offers(pharmacy_id)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(offers)))
}
