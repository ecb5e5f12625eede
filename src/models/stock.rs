// src/models/stock.rs

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::offers::StockRecord;

// Abaixo disso (e acima de zero) o item conta como estoque baixo
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// Item do estoque da própria farmácia.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StockItem {
    pub stock_id: i64,
    pub product_id: i64,
    pub product_name: Option<String>,
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub quantity: i64,
    pub active: bool,
}

impl StockItem {
    pub fn is_out_of_stock(&self) -> bool {
        self.quantity == 0
    }

    pub fn is_low_stock(&self) -> bool {
        self.quantity > 0 && self.quantity < LOW_STOCK_THRESHOLD
    }
}

impl From<StockRecord> for StockItem {
    fn from(record: StockRecord) -> Self {
        Self {
            stock_id: record.estoque_id,
            product_id: record.produto_id,
            product_name: record.produto_nome,
            price: record.preco,
            quantity: record.quantidade,
            active: record.ativo != Some(false),
        }
    }
}

// Cards de estatística do estoque
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StockStats {
    pub total_products: usize,
    pub total_units: i64,
    #[schema(value_type = f64)]
    pub total_value: Decimal, // Σ preço × quantidade
    pub low_stock_products: usize,
    pub out_of_stock_products: usize,
}

impl StockStats {
    pub fn from_items(items: &[StockItem]) -> Self {
        Self {
            total_products: items.len(),
            // Somas saturam no teto em vez de estourar
            total_units: items
                .iter()
                .fold(0i64, |acc, i| acc.saturating_add(i.quantity)),
            total_value: items.iter().fold(Decimal::ZERO, |acc, i| {
                acc.saturating_add(i.price.saturating_mul(Decimal::from(i.quantity)))
            }),
            low_stock_products: items.iter().filter(|i| i.is_low_stock()).count(),
            out_of_stock_products: items.iter().filter(|i| i.is_out_of_stock()).count(),
        }
    }
}
