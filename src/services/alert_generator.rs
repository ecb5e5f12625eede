// src/services/alert_generator.rs

use std::str::FromStr;

use crate::models::{
    alerts::{Alert, AlertKind, Severity},
    orders::{Order, OrderStatus},
    stock::StockItem,
};

/// Máximo de alertas exibidos por atualização.
pub const MAX_ALERTS: usize = 6;

const UNNAMED_PRODUCT: &str = "Produto sem nome";

/// Como escolher quais candidatos ocupam as 6 vagas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertCapPolicy {
    /// Ordena por gravidade, depois por categoria, depois pela ordem de montagem.
    #[default]
    SeverityThenCategory,
    /// Pendências, esgotados, estoque baixo; os 6 primeiros.
    ConstructionOrder,
}

impl FromStr for AlertCapPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "severity" => Ok(AlertCapPolicy::SeverityThenCategory),
            "construction" => Ok(AlertCapPolicy::ConstructionOrder),
            other => Err(format!(
                "política de alertas inválida '{other}' (use 'severity' ou 'construction')"
            )),
        }
    }
}

// Categoria do candidato; também desempata dentro da mesma gravidade
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Category {
    Backlog,
    Stockout,
    LowStock,
}

fn plural(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {plural}")
    }
}

fn backlog_alert(status: OrderStatus, count: usize) -> Alert {
    let (id, kind, severity, title, message) = match status {
        OrderStatus::AguardandoReceita => (
            "pedido-aguardando_receita",
            AlertKind::AguardandoReceita,
            Severity::Warning,
            "Receitas Pendentes",
            plural(
                count,
                "pedido aguardando receita médica",
                "pedidos aguardando receita médica",
            ),
        ),
        _ => (
            "pedido-em_preparacao",
            AlertKind::EmPreparacao,
            Severity::Info,
            "Pedidos em Separação",
            plural(count, "pedido em preparação", "pedidos em preparação"),
        ),
    };

    Alert {
        id: id.to_string(),
        kind,
        severity,
        title: title.to_string(),
        message,
        related_product_id: None,
        related_quantity: Some(count as i64),
    }
}

fn stock_alert(item: &StockItem, category: Category) -> Alert {
    let name = item.product_name.as_deref().unwrap_or(UNNAMED_PRODUCT);

    match category {
        Category::Stockout => Alert {
            id: format!("esgotado-{}", item.stock_id),
            kind: AlertKind::Esgotado,
            severity: Severity::Error,
            title: "Produto Esgotado".to_string(),
            message: format!("{name} está sem estoque"),
            related_product_id: Some(item.product_id),
            related_quantity: Some(0),
        },
        _ => Alert {
            id: format!("baixo-{}", item.stock_id),
            kind: AlertKind::EstoqueBaixo,
            severity: Severity::Warning,
            title: "Estoque Baixo".to_string(),
            message: format!("{name} tem apenas {} unidades", item.quantity),
            related_product_id: Some(item.product_id),
            related_quantity: Some(item.quantity),
        },
    }
}

// Todos os candidatos, na ordem de montagem
fn candidates(stock: &[StockItem], orders: &[Order]) -> Vec<(Category, Alert)> {
    let mut out = Vec::new();

    for status in [OrderStatus::AguardandoReceita, OrderStatus::EmPreparacao] {
        let count = orders.iter().filter(|o| o.status == status).count();
        if count > 0 {
            out.push((Category::Backlog, backlog_alert(status, count)));
        }
    }

    let active = || stock.iter().filter(|item| item.active);

    out.extend(
        active()
            .filter(|item| item.is_out_of_stock())
            .map(|item| (Category::Stockout, stock_alert(item, Category::Stockout))),
    );
    out.extend(
        active()
            .filter(|item| item.is_low_stock())
            .map(|item| (Category::LowStock, stock_alert(item, Category::LowStock))),
    );

    out
}

/// Alertas operacionais do painel, no máximo [`MAX_ALERTS`].
pub fn generate_alerts(
    stock: &[StockItem],
    orders: &[Order],
    policy: AlertCapPolicy,
) -> Vec<Alert> {
    let mut all = candidates(stock, orders);

    if policy == AlertCapPolicy::SeverityThenCategory {
        // Estável: empates mantêm a ordem de montagem
        all.sort_by_key(|(category, alert)| (alert.severity.rank(), *category));
    }

    all.into_iter()
        .take(MAX_ALERTS)
        .map(|(_, alert)| alert)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn item(stock_id: i64, name: Option<&str>, quantity: i64, active: bool) -> StockItem {
        StockItem {
            stock_id,
            product_id: stock_id + 100,
            product_name: name.map(str::to_string),
            price: dec!(10),
            quantity,
            active,
        }
    }

    fn order(id: i64, status: OrderStatus) -> Order {
        Order {
            id,
            status,
            total: Decimal::ZERO,
            created_at: NaiveDate::from_ymd_opt(2025, 10, 15)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            items: vec![],
        }
    }

    #[test]
    fn one_stockout_and_one_low_stock() {
        let stock = vec![item(1, Some("Dipirona"), 0, true), item(2, Some("Paracetamol"), 5, true)];

        let alerts = generate_alerts(&stock, &[], AlertCapPolicy::default());

        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].kind, AlertKind::Esgotado);
        assert_eq!(alerts[0].id, "esgotado-1");
        assert_eq!(alerts[0].message, "Dipirona está sem estoque");
        assert_eq!(alerts[0].related_quantity, Some(0));
        assert_eq!(alerts[1].kind, AlertKind::EstoqueBaixo);
        assert_eq!(alerts[1].id, "baixo-2");
        assert_eq!(alerts[1].message, "Paracetamol tem apenas 5 unidades");
        assert_eq!(alerts[1].severity, Severity::Warning);
    }

    #[test]
    fn inactive_and_healthy_items_raise_nothing() {
        let stock = vec![
            item(1, Some("A"), 0, false),
            item(2, Some("B"), 3, false),
            item(3, Some("C"), 10, true),
            item(4, Some("D"), 50, true),
        ];

        assert!(generate_alerts(&stock, &[], AlertCapPolicy::default()).is_empty());
    }

    #[test]
    fn backlog_counts_are_pluralised() {
        let orders = vec![
            order(1, OrderStatus::AguardandoReceita),
            order(2, OrderStatus::AguardandoReceita),
            order(3, OrderStatus::EmPreparacao),
            order(4, OrderStatus::Entregue),
        ];

        let alerts = generate_alerts(&[], &orders, AlertCapPolicy::ConstructionOrder);

        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].id, "pedido-aguardando_receita");
        assert_eq!(alerts[0].title, "Receitas Pendentes");
        assert_eq!(alerts[0].message, "2 pedidos aguardando receita médica");
        assert_eq!(alerts[1].id, "pedido-em_preparacao");
        assert_eq!(alerts[1].message, "1 pedido em preparação");
        assert_eq!(alerts[1].severity, Severity::Info);
    }

    #[test]
    fn missing_name_uses_placeholder() {
        let alerts = generate_alerts(&[item(9, None, 0, true)], &[], AlertCapPolicy::default());
        assert_eq!(alerts[0].message, "Produto sem nome está sem estoque");
    }

    #[test]
    fn never_more_than_six() {
        let stock: Vec<StockItem> = (1..=20).map(|i| item(i, Some("X"), i % 3, true)).collect();
        let orders = vec![
            order(1, OrderStatus::AguardandoReceita),
            order(2, OrderStatus::EmPreparacao),
        ];

        for policy in [AlertCapPolicy::SeverityThenCategory, AlertCapPolicy::ConstructionOrder] {
            assert_eq!(generate_alerts(&stock, &orders, policy).len(), MAX_ALERTS);
        }
    }

    #[test]
    fn severity_policy_keeps_late_stockouts() {
        // Muitos itens com estoque baixo e um esgotado no fim da listagem
        let mut stock: Vec<StockItem> = (1..=8).map(|i| item(i, Some("Baixo"), 2, true)).collect();
        stock.push(item(99, Some("Esgotado"), 0, true));
        let orders = vec![
            order(1, OrderStatus::EmPreparacao),
            order(2, OrderStatus::AguardandoReceita),
        ];

        let by_severity = generate_alerts(&stock, &orders, AlertCapPolicy::SeverityThenCategory);
        let ids: Vec<&str> = by_severity.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "esgotado-99",
                "pedido-aguardando_receita",
                "baixo-1",
                "baixo-2",
                "baixo-3",
                "baixo-4"
            ]
        );

        let legacy = generate_alerts(&stock, &orders, AlertCapPolicy::ConstructionOrder);
        let ids: Vec<&str> = legacy.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "pedido-aguardando_receita",
                "pedido-em_preparacao",
                "esgotado-99",
                "baixo-1",
                "baixo-2",
                "baixo-3"
            ]
        );
    }

    #[test]
    fn policy_parses_from_config_values() {
        assert_eq!(
            "severity".parse::<AlertCapPolicy>(),
            Ok(AlertCapPolicy::SeverityThenCategory)
        );
        assert_eq!(
            " Construction ".parse::<AlertCapPolicy>(),
            Ok(AlertCapPolicy::ConstructionOrder)
        );
        assert!("random".parse::<AlertCapPolicy>().is_err());
    }
}
