// src/models/dashboard.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{alerts::Alert, stock::StockStats};

// 1. Um dia do gráfico de vendas
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DailySalesBucket {
    #[schema(example = "Seg")]
    pub day_label: String,
    pub date: NaiveDate,
    #[schema(value_type = f64)]
    pub revenue: Decimal,
    pub order_count: u32,
}

// 2. Gráfico da semana (7 dias, do mais antigo para hoje)
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySalesSummary {
    pub buckets: Vec<DailySalesBucket>,
    #[schema(value_type = f64)]
    pub total_revenue: Decimal,
    pub total_orders: u32,
    #[schema(value_type = f64, example = -25.0)]
    pub week_over_week_variance_pct: Decimal,
    #[schema(value_type = f64)]
    pub best_day_revenue: Decimal,
}

// 3. Resumo por período (hoje / 7 dias / 30 dias)
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalesPeriodSummary {
    #[schema(value_type = f64)]
    pub today: Decimal,
    #[schema(value_type = f64)]
    pub week: Decimal,
    #[schema(value_type = f64)]
    pub month: Decimal,
    pub month_order_count: u32,
}

// 4. Tudo que a tela inicial do painel precisa numa chamada só
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub weekly_sales: WeeklySalesSummary,
    pub period_summary: SalesPeriodSummary,
    pub alerts: Vec<Alert>,
    pub stock_stats: StockStats,
}
