// src/upstream/order_repo.rs

use async_trait::async_trait;

use crate::{
    common::{envelope::decode_records, error::AppError},
    models::orders::{Order, OrderRecord},
    upstream::{client::UpstreamClient, OrderScope, OrderSource},
};

#[derive(Clone)]
pub struct OrderRepository {
    client: UpstreamClient,
}

impl OrderRepository {
    pub fn new(client: UpstreamClient) -> Self {
        Self { client }
    }
}

fn scope_path(scope: OrderScope) -> &'static str {
    match scope {
        OrderScope::Pharmacy => "/farmacia-admin/pedidos",
        OrderScope::Customer => "/pedidos/meus-pedidos",
    }
}

#[async_trait]
impl OrderSource for OrderRepository {
    async fn list_orders(&self, scope: OrderScope, token: &str) -> Result<Vec<Order>, AppError> {
        let path = scope_path(scope);
        let raw = self.client.get_list(path, Some(token)).await?;
        let offset = self.client.business_offset();

        let orders = decode_records::<OrderRecord>(path, raw)
            .into_iter()
            .filter_map(|record| {
                let id = record.id;
                match record.into_order(offset) {
                    Ok(order) => Some(order),
                    Err(reason) => {
                        tracing::warn!(
                            endpoint = path,
                            order_id = id,
                            %reason,
                            "Pedido descartado"
                        );
                        None
                    }
                }
            })
            .collect();

        Ok(orders)
    }
}
