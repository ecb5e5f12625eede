// src/services.rs

pub mod alert_generator;
pub mod dashboard_service;
pub mod fallback;
pub mod offer_aggregator;
pub mod sales_analytics;
pub mod storefront_service;

pub use dashboard_service::DashboardService;
pub use storefront_service::StorefrontService;
