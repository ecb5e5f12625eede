// src/models/storefront.rs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::{
    offers::{AggregatedProduct, BestOffer},
    pharmacy::Pharmacy,
};

/// De onde vieram os dados entregues à tela.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Live,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HomeFeed {
    pub source: DataSource,
    #[schema(example = "Erro ao carregar dados. Usando dados de exemplo.")]
    pub notice: Option<String>,
    pub products: Vec<AggregatedProduct>,
    pub promotions: Vec<AggregatedProduct>,
    pub pharmacies: Vec<Pharmacy>,
    pub best_offers: Vec<BestOffer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductListing {
    pub source: DataSource,
    pub notice: Option<String>,
    pub products: Vec<AggregatedProduct>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PriceOrder {
    PrecoAsc,
    PrecoDesc,
}

// Query string de GET /api/vitrine/produtos
#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    /// Categoria exata (sem diferenciar maiúsculas) ou "todos".
    #[validate(length(max = 60, message = "A categoria deve ter no máximo 60 caracteres."))]
    pub categoria: Option<String>,

    /// Trecho procurado no nome ou na descrição.
    #[validate(length(max = 100, message = "A busca deve ter no máximo 100 caracteres."))]
    pub busca: Option<String>,

    #[param(value_type = Option<String>, example = "preco_asc")]
    pub ordem: Option<PriceOrder>,
}
