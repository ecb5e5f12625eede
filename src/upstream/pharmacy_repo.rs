// src/upstream/pharmacy_repo.rs

use async_trait::async_trait;

use crate::{
    common::{envelope::decode_records, error::AppError},
    models::pharmacy::{Pharmacy, PharmacyRecord},
    upstream::{client::UpstreamClient, PharmacySource},
};

const PHARMACIES_PATH: &str = "/farmacias";

#[derive(Clone)]
pub struct PharmacyRepository {
    client: UpstreamClient,
}

impl PharmacyRepository {
    pub fn new(client: UpstreamClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PharmacySource for PharmacyRepository {
    async fn list_pharmacies(&self) -> Result<Vec<Pharmacy>, AppError> {
        let raw = self.client.get_list(PHARMACIES_PATH, None).await?;
        Ok(decode_records::<PharmacyRecord>(PHARMACIES_PATH, raw)
            .into_iter()
            .map(Pharmacy::from)
            .collect())
    }
}
