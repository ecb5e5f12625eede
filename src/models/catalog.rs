// src/models/catalog.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

// Categoria usada quando o upstream não informa `tipoProduto`
pub const DEFAULT_CATEGORY: &str = "MEDICAMENTO";

/// Produto canônico do catálogo central (identidade = `id`).
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogProduct {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Dipirona Monoidratada 500mg 10 comprimidos")]
    pub name: String,
    pub description: String,
    pub active_ingredient: Option<String>,
    #[schema(example = "Medley")]
    pub lab: Option<String>,
    #[schema(example = "MEDICAMENTO")]
    pub category: String,
}

// Registro como chega do GET /catalogo
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRecord {
    #[validate(range(min = 1, message = "O id do produto deve ser positivo."))]
    pub id: i64,
    #[validate(length(min = 1, message = "O nome do produto é obrigatório."))]
    pub nome: String,
    pub descricao: Option<String>,
    pub principio_ativo: Option<String>,
    pub laboratorio: Option<String>,
    pub tipo_produto: Option<String>,
}

impl From<CatalogRecord> for CatalogProduct {
    fn from(record: CatalogRecord) -> Self {
        Self {
            id: record.id,
            name: record.nome,
            description: record.descricao.unwrap_or_default(),
            active_ingredient: record.principio_ativo,
            lab: record.laboratorio,
            category: record
                .tipo_produto
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        }
    }
}
