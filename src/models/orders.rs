// src/models/orders.rs

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::offers::{validate_amount, validate_quantity};

// --- Enums ---
// Ciclo de vida do pedido:
// AGUARDANDO_CONFIRMACAO -> AGUARDANDO_PAGAMENTO | AGUARDANDO_RECEITA -> CONFIRMADO
//   -> EM_PREPARACAO -> PRONTO_PARA_ENTREGA -> EM_TRANSPORTE -> ENTREGUE
// Ramos terminais: CANCELADO, RECUSADO
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    AguardandoConfirmacao,
    AguardandoPagamento,
    AguardandoReceita,
    Confirmado,
    EmPreparacao,
    ProntoParaEntrega,
    EmTransporte,
    Entregue,
    Cancelado,
    Recusado,
}

impl OrderStatus {
    /// Status que contam como venda realizada (de confirmado até entregue).
    pub fn is_revenue_recognized(self) -> bool {
        matches!(
            self,
            OrderStatus::Confirmado
                | OrderStatus::EmPreparacao
                | OrderStatus::ProntoParaEntrega
                | OrderStatus::EmTransporte
                | OrderStatus::Entregue
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: i64,
    pub product_name: Option<String>,
    pub quantity: i64,
    #[schema(value_type = f64)]
    pub unit_price: Decimal,
    #[schema(value_type = f64)]
    pub subtotal: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub status: OrderStatus,
    #[schema(value_type = f64)]
    pub total: Decimal,
    // Horário local do negócio (já convertido do fuso do upstream)
    pub created_at: NaiveDateTime,
    pub items: Vec<OrderItem>,
}

// --- Registros do upstream ---

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRecord {
    pub produto_id: i64,
    pub produto_nome: Option<String>,
    #[validate(custom(function = "validate_quantity"))]
    pub quantidade: i64,
    #[validate(custom(function = "validate_amount"))]
    pub preco_unitario: Decimal,
    #[validate(custom(function = "validate_amount"))]
    pub subtotal: Decimal,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub id: i64,
    pub status: OrderStatus,
    #[validate(custom(function = "validate_amount"))]
    pub total: Decimal,
    pub created_at: String,
    #[serde(default)]
    #[validate(nested)]
    pub itens: Vec<OrderItemRecord>,
}

impl OrderRecord {
    /// Converte para o domínio, levando `createdAt` para o fuso do negócio.
    pub fn into_order(self, business_offset: FixedOffset) -> Result<Order, String> {
        let created_at = parse_order_timestamp(&self.created_at, business_offset)
            .ok_or_else(|| format!("createdAt inválido: '{}'", self.created_at))?;

        Ok(Order {
            id: self.id,
            status: self.status,
            total: self.total,
            created_at,
            items: self
                .itens
                .into_iter()
                .map(|item| OrderItem {
                    product_id: item.produto_id,
                    product_name: item.produto_nome,
                    quantity: item.quantidade,
                    unit_price: item.preco_unitario,
                    subtotal: item.subtotal,
                })
                .collect(),
        })
    }
}

/// Aceita RFC 3339 (com fuso) ou data/hora local sem fuso, como o backend Java envia.
pub fn parse_order_timestamp(raw: &str, business_offset: FixedOffset) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.with_timezone(&business_offset).naive_local());
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}
