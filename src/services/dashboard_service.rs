// src/services/dashboard_service.rs

use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::{
    common::error::AppError,
    middleware::i18n::Locale,
    models::{
        alerts::Alert,
        dashboard::{DashboardOverview, WeeklySalesSummary},
        orders::Order,
        stock::{StockItem, StockStats},
    },
    services::{
        alert_generator::{self, AlertCapPolicy},
        sales_analytics,
    },
    upstream::{OrderScope, OrderSource, StockSource},
};

#[derive(Clone)]
pub struct DashboardService {
    stock: Arc<dyn StockSource>,
    orders: Arc<dyn OrderSource>,
    alert_policy: AlertCapPolicy,
}

impl DashboardService {
    pub fn new(
        stock: Arc<dyn StockSource>,
        orders: Arc<dyn OrderSource>,
        alert_policy: AlertCapPolicy,
    ) -> Self {
        Self {
            stock,
            orders,
            alert_policy,
        }
    }

    // Estoque e pedidos em paralelo; qualquer falha derruba a carga
    async fn read_all(&self, token: &str) -> Result<(Vec<StockItem>, Vec<Order>), AppError> {
        tokio::try_join!(
            self.stock.list_stock(token),
            self.orders.list_orders(OrderScope::Pharmacy, token)
        )
    }

    async fn read_orders(&self, token: &str) -> Result<Vec<Order>, AppError> {
        self.orders.list_orders(OrderScope::Pharmacy, token).await
    }

    pub async fn load_overview(
        &self,
        token: &str,
        now: NaiveDateTime,
        locale: &Locale,
    ) -> Result<DashboardOverview, AppError> {
        let (stock, orders) = self.read_all(token).await?;

        tracing::debug!(
            stock_items = stock.len(),
            orders = orders.len(),
            "Painel carregado"
        );

        Ok(DashboardOverview {
            weekly_sales: sales_analytics::weekly_summary(&orders, now, locale),
            period_summary: sales_analytics::period_summary(&orders, now),
            alerts: alert_generator::generate_alerts(&stock, &orders, self.alert_policy),
            stock_stats: StockStats::from_items(&stock),
        })
    }

    pub async fn weekly_sales(
        &self,
        token: &str,
        now: NaiveDateTime,
        locale: &Locale,
    ) -> Result<WeeklySalesSummary, AppError> {
        let orders = self.read_orders(token).await?;
        Ok(sales_analytics::weekly_summary(&orders, now, locale))
    }

    pub async fn alerts(&self, token: &str) -> Result<Vec<Alert>, AppError> {
        let (stock, orders) = self.read_all(token).await?;
        Ok(alert_generator::generate_alerts(&stock, &orders, self.alert_policy))
    }

    pub async fn stock_stats(&self, token: &str) -> Result<StockStats, AppError> {
        let stock = self.stock.list_stock(token).await?;
        Ok(StockStats::from_items(&stock))
    }

    /// Pedidos do próprio cliente dono do token, do mais recente ao mais antigo.
    pub async fn customer_orders(&self, token: &str) -> Result<Vec<Order>, AppError> {
        let mut orders = self.orders.list_orders(OrderScope::Customer, token).await?;
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{alerts::AlertKind, orders::OrderStatus};
    use async_trait::async_trait;
    use axum::http::StatusCode;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    struct FakeStock(Vec<StockItem>);

    #[async_trait]
    impl StockSource for FakeStock {
        async fn list_stock(&self, _token: &str) -> Result<Vec<StockItem>, AppError> {
            Ok(self.0.clone())
        }
    }

    struct FakeOrders {
        orders: Vec<Order>,
        customer: Vec<Order>,
        fail: bool,
    }

    #[async_trait]
    impl OrderSource for FakeOrders {
        async fn list_orders(
            &self,
            scope: OrderScope,
            token: &str,
        ) -> Result<Vec<Order>, AppError> {
            assert_eq!(token, "tok");
            if self.fail {
                return Err(AppError::UpstreamStatus {
                    endpoint: "/farmacia-admin/pedidos".to_string(),
                    status: StatusCode::BAD_GATEWAY,
                });
            }
            match scope {
                OrderScope::Pharmacy => Ok(self.orders.clone()),
                OrderScope::Customer => Ok(self.customer.clone()),
            }
        }
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 10, 15)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap()
    }

    fn service(fail: bool) -> DashboardService {
        let stock = vec![
            StockItem {
                stock_id: 1,
                product_id: 10,
                product_name: Some("Dipirona".to_string()),
                price: dec!(12.90),
                quantity: 0,
                active: true,
            },
            StockItem {
                stock_id: 2,
                product_id: 20,
                product_name: Some("Paracetamol".to_string()),
                price: dec!(18.50),
                quantity: 5,
                active: true,
            },
        ];
        let orders = vec![
            Order {
                id: 1,
                status: OrderStatus::Entregue,
                total: dec!(100),
                created_at: now() - chrono::TimeDelta::hours(2),
                items: vec![],
            },
            Order {
                id: 2,
                status: OrderStatus::AguardandoReceita,
                total: dec!(40),
                created_at: now(),
                items: vec![],
            },
        ];

        let customer = vec![
            Order {
                id: 30,
                status: OrderStatus::Entregue,
                total: dec!(25.80),
                created_at: now() - chrono::TimeDelta::days(3),
                items: vec![],
            },
            Order {
                id: 31,
                status: OrderStatus::EmTransporte,
                total: dec!(12.90),
                created_at: now() - chrono::TimeDelta::hours(1),
                items: vec![],
            },
        ];

        DashboardService::new(
            Arc::new(FakeStock(stock)),
            Arc::new(FakeOrders {
                orders,
                customer,
                fail,
            }),
            AlertCapPolicy::default(),
        )
    }

    #[tokio::test]
    async fn overview_combines_sales_alerts_and_stock() {
        let overview = service(false)
            .load_overview("tok", now(), &Locale::default())
            .await
            .unwrap();

        assert_eq!(overview.weekly_sales.total_revenue, dec!(100));
        assert_eq!(overview.weekly_sales.week_over_week_variance_pct, dec!(100));
        assert_eq!(overview.period_summary.today, dec!(100));
        assert_eq!(overview.stock_stats.total_units, 5);
        assert_eq!(overview.stock_stats.out_of_stock_products, 1);

        let kinds: Vec<AlertKind> = overview.alerts.iter().map(|a| a.kind).collect();
        assert_eq!(
            kinds,
            vec![AlertKind::Esgotado, AlertKind::AguardandoReceita, AlertKind::EstoqueBaixo]
        );
    }

    #[tokio::test]
    async fn order_failure_fails_the_whole_load() {
        let err = service(true)
            .load_overview("tok", now(), &Locale::default())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::UpstreamStatus { .. }));
    }

    #[tokio::test]
    async fn stock_stats_only_reads_stock() {
        // pedidos falhariam, mas as estatísticas não dependem deles
        let stats = service(true).stock_stats("tok").await.unwrap();

        assert_eq!(stats.total_products, 2);
        assert_eq!(stats.total_value, dec!(92.50));
    }

    #[tokio::test]
    async fn customer_orders_read_the_customer_scope_newest_first() {
        let orders = service(false).customer_orders("tok").await.unwrap();

        let ids: Vec<i64> = orders.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![31, 30]);
    }
}
