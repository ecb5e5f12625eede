// src/upstream/stock_repo.rs

use async_trait::async_trait;

use crate::{
    common::{envelope::decode_records, error::AppError},
    models::{offers::StockRecord, stock::StockItem},
    upstream::{client::UpstreamClient, StockSource},
};

// Estoque completo da farmácia do token (inclui itens inativos e zerados)
const OWN_STOCK_PATH: &str = "/farmacia-admin/estoque";

#[derive(Clone)]
pub struct StockRepository {
    client: UpstreamClient,
}

impl StockRepository {
    pub fn new(client: UpstreamClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StockSource for StockRepository {
    async fn list_stock(&self, token: &str) -> Result<Vec<StockItem>, AppError> {
        let raw = self.client.get_list(OWN_STOCK_PATH, Some(token)).await?;
        Ok(decode_records::<StockRecord>(OWN_STOCK_PATH, raw)
            .into_iter()
            .map(StockItem::from)
            .collect())
    }
}
