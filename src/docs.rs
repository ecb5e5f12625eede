// src/docs.rs

use utoipa::OpenApi;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Vitrine ---
        handlers::storefront::get_home,
        handlers::storefront::list_products,
        handlers::storefront::get_best_offers,
        handlers::storefront::get_pharmacy_offers,

        // --- Painel ---
        handlers::dashboard::get_overview,
        handlers::dashboard::get_weekly_sales,
        handlers::dashboard::get_alerts,
        handlers::dashboard::get_stock_stats,

        // --- Pedidos ---
        handlers::orders::get_my_orders,
    ),
    components(
        schemas(
            // --- Catálogo e ofertas ---
            models::catalog::CatalogProduct,
            models::offers::Offer,
            models::offers::AggregatedProduct,
            models::offers::BestOffer,
            models::pharmacy::Pharmacy,

            // --- Vitrine ---
            models::storefront::DataSource,
            models::storefront::PriceOrder,
            models::storefront::HomeFeed,
            models::storefront::ProductListing,

            // --- Pedidos ---
            models::orders::OrderStatus,
            models::orders::Order,
            models::orders::OrderItem,

            // --- Painel ---
            models::dashboard::DailySalesBucket,
            models::dashboard::WeeklySalesSummary,
            models::dashboard::SalesPeriodSummary,
            models::dashboard::DashboardOverview,
            models::stock::StockItem,
            models::stock::StockStats,
            models::alerts::AlertKind,
            models::alerts::Severity,
            models::alerts::Alert,
        )
    ),
    tags(
        (name = "Vitrine", description = "Produtos, promoções e melhores ofertas"),
        (name = "Painel", description = "Indicadores da farmácia: vendas, alertas e estoque"),
        (name = "Pedidos", description = "Pedidos do cliente autenticado")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(
                Http::new(HttpAuthScheme::Bearer)
            ),
        );
    }
}
