// src/services/sales_analytics.rs
//
// Faturamento a partir dos pedidos. Tudo é calculado em dias de
// calendário no fuso do negócio: `now` já chega convertido.

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta, Weekday};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::{
    middleware::i18n::Locale,
    models::{
        dashboard::{DailySalesBucket, SalesPeriodSummary, WeeklySalesSummary},
        orders::Order,
    },
};

pub const WINDOW_DAYS: i64 = 7;
pub const MONTH_DAYS: i64 = 30;

/// Dias de calendário entre a data do pedido e hoje. Negativo = futuro.
pub fn days_ago(today: NaiveDate, order: &Order) -> i64 {
    (today - order.created_at.date()).num_days()
}

fn weekday_label(day: Weekday, locale: &Locale) -> &'static str {
    let idx = day.num_days_from_sunday() as usize;
    if locale.is_english() {
        ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"][idx]
    } else {
        ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"][idx]
    }
}

// Pedidos que contam como venda, já com a idade em dias
fn recognized(orders: &[Order], today: NaiveDate) -> impl Iterator<Item = (i64, &Order)> {
    orders
        .iter()
        .filter(|o| o.status.is_revenue_recognized())
        .map(move |o| (days_ago(today, o), o))
        .filter(|(days, _)| *days >= 0)
}

// Soma que satura em Decimal::MAX em vez de estourar
fn saturating_sum(values: impl Iterator<Item = Decimal>) -> Decimal {
    values.fold(Decimal::ZERO, Decimal::saturating_add)
}

fn revenue_between(orders: &[Order], today: NaiveDate, from_days: i64, to_days: i64) -> Decimal {
    saturating_sum(
        recognized(orders, today)
            .filter(|(days, _)| (from_days..to_days).contains(days))
            .map(|(_, o)| o.total),
    )
}

/// Variação percentual semana contra semana, com uma casa decimal.
pub fn week_over_week_variance(current: Decimal, prior: Decimal) -> Decimal {
    if prior.is_zero() {
        return if current > Decimal::ZERO {
            Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        };
    }
    (current - prior)
        .checked_div(prior)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::MAX)
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Gráfico dos últimos 7 dias: índice 0 é seis dias atrás, índice 6 é hoje.
pub fn weekly_summary(
    orders: &[Order],
    now: NaiveDateTime,
    locale: &Locale,
) -> WeeklySalesSummary {
    let today = now.date();

    let mut buckets: Vec<DailySalesBucket> = (0..WINDOW_DAYS)
        .rev()
        .map(|offset| {
            let date = today - TimeDelta::days(offset);
            DailySalesBucket {
                day_label: weekday_label(date.weekday(), locale).to_string(),
                date,
                revenue: Decimal::ZERO,
                order_count: 0,
            }
        })
        .collect();

    for (days, order) in recognized(orders, today) {
        if days < WINDOW_DAYS {
            let bucket = &mut buckets[(WINDOW_DAYS - 1 - days) as usize];
            bucket.revenue = bucket.revenue.saturating_add(order.total);
            bucket.order_count += 1;
        }
    }

    let total_revenue = saturating_sum(buckets.iter().map(|b| b.revenue));
    let total_orders: u32 = buckets.iter().map(|b| b.order_count).sum();
    let best_day_revenue = buckets
        .iter()
        .map(|b| b.revenue)
        .max()
        .unwrap_or(Decimal::ZERO);
    let prior = revenue_between(orders, today, WINDOW_DAYS, WINDOW_DAYS * 2);

    WeeklySalesSummary {
        week_over_week_variance_pct: week_over_week_variance(total_revenue, prior),
        buckets,
        total_revenue,
        total_orders,
        best_day_revenue,
    }
}

pub fn period_summary(orders: &[Order], now: NaiveDateTime) -> SalesPeriodSummary {
    let today = now.date();

    SalesPeriodSummary {
        today: revenue_between(orders, today, 0, 1),
        week: revenue_between(orders, today, 0, WINDOW_DAYS),
        month: revenue_between(orders, today, 0, MONTH_DAYS),
        month_order_count: recognized(orders, today)
            .filter(|(days, _)| *days < MONTH_DAYS)
            .count() as u32,
    }
}
