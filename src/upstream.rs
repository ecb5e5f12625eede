// src/upstream.rs
//
// Leitores da API do marketplace. Cada um fica atrás de uma porta
// (`*Source`) para que os serviços possam ser testados com dados fixos.

use async_trait::async_trait;

use crate::{
    common::error::AppError,
    models::{
        catalog::CatalogProduct, offers::Offer, orders::Order, pharmacy::Pharmacy,
        stock::StockItem,
    },
};

pub mod catalog_repo;
pub mod client;
pub mod offer_repo;
pub mod order_repo;
pub mod pharmacy_repo;
pub mod stock_repo;

pub use catalog_repo::CatalogRepository;
pub use client::UpstreamClient;
pub use offer_repo::OfferRepository;
pub use order_repo::OrderRepository;
pub use pharmacy_repo::PharmacyRepository;
pub use stock_repo::StockRepository;

#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn list_catalog(&self) -> Result<Vec<CatalogProduct>, AppError>;
}

#[async_trait]
pub trait OfferSource: Send + Sync {
    /// Ofertas ativas de um produto do catálogo (o upstream já filtra por ativo).
    async fn offers_for_product(&self, product_id: i64) -> Result<Vec<Offer>, AppError>;

    async fn offers_for_pharmacy(&self, pharmacy_id: i64) -> Result<Vec<Offer>, AppError>;
}

/// Quais pedidos o token enxerga.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderScope {
    // Pedidos recebidos pela farmácia do usuário
    Pharmacy,
    // Pedidos feitos pelo próprio cliente
    Customer,
}

#[async_trait]
pub trait OrderSource: Send + Sync {
    async fn list_orders(&self, scope: OrderScope, token: &str) -> Result<Vec<Order>, AppError>;
}

#[async_trait]
pub trait StockSource: Send + Sync {
    async fn list_stock(&self, token: &str) -> Result<Vec<StockItem>, AppError>;
}

#[async_trait]
pub trait PharmacySource: Send + Sync {
    async fn list_pharmacies(&self) -> Result<Vec<Pharmacy>, AppError>;
}
