// src/lib.rs

use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod common;
pub mod config;
pub mod docs;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod upstream;

use crate::{config::AppState, docs::ApiDoc};

/// Router completo da aplicação, já com o estado.
pub fn app(app_state: AppState) -> Router {
    // Rotas públicas da vitrine
    let storefront_routes = Router::new()
        .route("/", get(handlers::storefront::get_home))
        .route("/produtos", get(handlers::storefront::list_products))
        .route("/melhores-ofertas", get(handlers::storefront::get_best_offers));

    let pharmacy_routes = Router::new()
        .route("/{id}/ofertas", get(handlers::storefront::get_pharmacy_offers));

    // Rotas do painel: o extrator BearerToken exige o header Authorization
    let dashboard_routes = Router::new()
        .route("/", get(handlers::dashboard::get_overview))
        .route("/vendas", get(handlers::dashboard::get_weekly_sales))
        .route("/alertas", get(handlers::dashboard::get_alerts))
        .route("/estoque/estatisticas", get(handlers::dashboard::get_stock_stats));

    // Pedidos do cliente dono do token
    let order_routes = Router::new().route("/meus", get(handlers::orders::get_my_orders));

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/vitrine", storefront_routes)
        .nest("/api/farmacias", pharmacy_routes)
        .nest("/api/painel", dashboard_routes)
        .nest("/api/pedidos", order_routes)
        .with_state(app_state)
}
