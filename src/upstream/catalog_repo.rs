// src/upstream/catalog_repo.rs

use async_trait::async_trait;

use crate::{
    common::{envelope::decode_records, error::AppError},
    models::catalog::{CatalogProduct, CatalogRecord},
    upstream::{client::UpstreamClient, CatalogSource},
};

const CATALOG_PATH: &str = "/catalogo";

#[derive(Clone)]
pub struct CatalogRepository {
    client: UpstreamClient,
}

impl CatalogRepository {
    pub fn new(client: UpstreamClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CatalogSource for CatalogRepository {
    async fn list_catalog(&self) -> Result<Vec<CatalogProduct>, AppError> {
        let raw = self.client.get_list(CATALOG_PATH, None).await?;

        let products: Vec<CatalogProduct> = decode_records::<CatalogRecord>(CATALOG_PATH, raw)
            .into_iter()
            .map(CatalogProduct::from)
            .collect();

        tracing::debug!(total = products.len(), "Produtos no catálogo");
        Ok(products)
    }
}
