// src/models/offers.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::models::catalog::CatalogProduct;

/// Teto aceito para preços e totais vindos do upstream.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0); // 1e12

/// Teto aceito para quantidades vindas do upstream.
pub const MAX_QUANTITY: i64 = 1_000_000_000;

// O preço chega como número; string, negativo, gigante ou ausente derruba o registro
pub(crate) fn validate_amount(val: &Decimal) -> Result<(), ValidationError> {
    if val.is_sign_negative() && !val.is_zero() {
        let mut err = ValidationError::new("range");
        err.add_param("min".into(), &0.0);
        err.message = Some("O valor não pode ser negativo.".into());
        return Err(err);
    }
    if *val > MAX_AMOUNT {
        let mut err = ValidationError::new("range");
        err.add_param("max".into(), &MAX_AMOUNT);
        err.message = Some("O valor excede o máximo aceito.".into());
        return Err(err);
    }
    Ok(())
}

pub(crate) fn validate_quantity(val: i64) -> Result<(), ValidationError> {
    if !(0..=MAX_QUANTITY).contains(&val) {
        let mut err = ValidationError::new("range");
        err.add_param("min".into(), &0);
        err.add_param("max".into(), &MAX_QUANTITY);
        err.message = Some("A quantidade deve estar entre 0 e 1.000.000.000.".into());
        return Err(err);
    }
    Ok(())
}

// Registro de estoque/oferta como chega do upstream (EstoqueResponse).
// O mesmo formato serve as ofertas públicas e o estoque da farmácia.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StockRecord {
    pub estoque_id: i64,
    pub produto_id: i64,
    pub produto_nome: Option<String>,

    #[validate(custom(function = "validate_amount"))]
    pub preco: Decimal,

    #[validate(custom(function = "validate_quantity"))]
    pub quantidade: i64,

    // Campo opcional: ausente conta como ativo
    pub ativo: Option<bool>,

    pub farmacia_id: i64,
    pub farmacia_razao_social: Option<String>,
}

/// Listagem de uma farmácia para um produto do catálogo.
///
/// `quantity == 0` significa esgotado, mas a oferta continua existindo.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub offer_id: i64,
    pub product_id: i64,
    pub pharmacy_id: i64,
    #[schema(example = "Drogaria São João LTDA")]
    pub pharmacy_name: String,
    #[schema(value_type = f64, example = 12.9)]
    pub price: Decimal,
    pub quantity: i64,
    pub active: bool,
}

impl From<StockRecord> for Offer {
    fn from(record: StockRecord) -> Self {
        Self {
            offer_id: record.estoque_id,
            product_id: record.produto_id,
            pharmacy_id: record.farmacia_id,
            pharmacy_name: record.farmacia_razao_social.unwrap_or_default(),
            price: record.preco,
            quantity: record.quantidade,
            active: record.ativo != Some(false),
        }
    }
}

/// Produto do catálogo consolidado com todas as suas ofertas ativas.
///
/// Invariantes: `min_price <= representative_price <= max_price`, e
/// `is_promotional` implica ao menos duas ofertas com `min_price < max_price`.
/// Quando há promoção, `representative_price` é o preço "de" (o maior) e
/// `min_price` o preço "por".
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedProduct {
    pub product: CatalogProduct,
    pub offers: Vec<Offer>,
    #[schema(value_type = f64)]
    pub min_price: Decimal,
    #[schema(value_type = f64)]
    pub max_price: Decimal,
    pub is_promotional: bool,
    #[schema(value_type = f64)]
    pub representative_price: Decimal,
    // Primeira oferta com o menor preço, na ordem de chegada
    pub representative_offer_id: i64,
    pub pharmacy_id: i64,
    pub pharmacy_name: String,
    pub in_stock: bool,
    #[schema(example = 19)]
    pub discount_pct: u32,
}

impl AggregatedProduct {
    /// Preço efetivamente cobrado (o promocional, quando houver).
    pub fn final_price(&self) -> Decimal {
        self.min_price
    }
}

/// Par mais barato / mais caro de um produto e a economia entre eles.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BestOffer {
    pub product: CatalogProduct,
    pub cheapest_offer: Offer,
    pub most_expensive_offer: Offer,
    #[schema(value_type = f64)]
    pub savings: Decimal,
    pub pharmacy_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn record(preco: Decimal, quantidade: i64) -> StockRecord {
        StockRecord {
            estoque_id: 1,
            produto_id: 1,
            produto_nome: None,
            preco,
            quantidade,
            ativo: None,
            farmacia_id: 1,
            farmacia_razao_social: None,
        }
    }

    #[test]
    fn amount_ceiling_is_one_trillion() {
        assert_eq!(MAX_AMOUNT, Decimal::new(1_000_000_000_000, 0));
    }

    #[test]
    fn values_within_bounds_are_accepted() {
        assert!(record(dec!(12.90), 5).validate().is_ok());
        assert!(record(Decimal::ZERO, 0).validate().is_ok());
        assert!(record(MAX_AMOUNT, MAX_QUANTITY).validate().is_ok());
    }

    #[test]
    fn oversized_values_are_rejected() {
        let errors = record(dec!(12.90), i64::MAX).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("quantidade"));

        let errors = record(MAX_AMOUNT + dec!(0.01), 1).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("preco"));

        assert!(record(dec!(-1), 1).validate().is_err());
        assert!(record(dec!(1), -1).validate().is_err());
    }
}
