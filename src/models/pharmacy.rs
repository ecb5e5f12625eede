// src/models/pharmacy.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

const ADDRESS_UNAVAILABLE: &str = "Endereço não disponível";

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pharmacy {
    pub id: i64,
    #[schema(example = "Farmácia Central")]
    pub name: String,
    #[schema(example = "Rua das Flores, 120 - Centro, Brasília/DF")]
    pub address: String,
    pub active: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressRecord {
    pub logradouro: String,
    pub numero: String,
    pub bairro: String,
    pub cidade: String,
    pub estado: String,
}

// Registro do GET /farmacias
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PharmacyRecord {
    pub id: i64,
    #[validate(length(min = 1, message = "O nome fantasia é obrigatório."))]
    pub nome_fantasia: String,
    pub ativo: Option<bool>,
    pub endereco: Option<AddressRecord>,
}

impl From<PharmacyRecord> for Pharmacy {
    fn from(record: PharmacyRecord) -> Self {
        let address = record
            .endereco
            .map(|e| {
                format!(
                    "{}, {} - {}, {}/{}",
                    e.logradouro, e.numero, e.bairro, e.cidade, e.estado
                )
            })
            .unwrap_or_else(|| ADDRESS_UNAVAILABLE.to_string());

        Self {
            id: record.id,
            name: record.nome_fantasia,
            address,
            active: record.ativo != Some(false),
        }
    }
}
