// src/upstream/offer_repo.rs

use async_trait::async_trait;

use crate::{
    common::{envelope::decode_records, error::AppError},
    models::offers::{Offer, StockRecord},
    upstream::{client::UpstreamClient, OfferSource},
};

#[derive(Clone)]
pub struct OfferRepository {
    client: UpstreamClient,
}

impl OfferRepository {
    pub fn new(client: UpstreamClient) -> Self {
        Self { client }
    }

    async fn fetch(&self, path: &str) -> Result<Vec<Offer>, AppError> {
        let raw = self.client.get_list(path, None).await?;
        Ok(decode_records::<StockRecord>(path, raw)
            .into_iter()
            .map(Offer::from)
            .collect())
    }
}

#[async_trait]
impl OfferSource for OfferRepository {
    async fn offers_for_product(&self, product_id: i64) -> Result<Vec<Offer>, AppError> {
        self.fetch(&format!("/estoque/buscar-por-catalogo/{product_id}"))
            .await
    }

    async fn offers_for_pharmacy(&self, pharmacy_id: i64) -> Result<Vec<Offer>, AppError> {
        self.fetch(&format!("/estoque/farmacia/{pharmacy_id}")).await
    }
}
