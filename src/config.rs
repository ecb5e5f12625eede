// src/config.rs

use std::{env, net::SocketAddr, sync::Arc, time::Duration};

use anyhow::{Context, bail};
use chrono::FixedOffset;

use crate::{
    services::{DashboardService, StorefrontService, alert_generator::AlertCapPolicy},
    upstream::{
        CatalogRepository, OfferRepository, OrderRepository, PharmacyRepository,
        StockRepository, UpstreamClient,
    },
};

/// Configuração lida do ambiente (e do `.env`, se existir).
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub bind_addr: SocketAddr,
    pub upstream_api_url: String,
    pub upstream_timeout: Duration,
    pub fallback_enabled: bool,
    pub alert_policy: AlertCapPolicy,
    pub business_offset: FixedOffset,
}

fn parse_bool(key: &str, raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "sim" => Ok(true),
        "false" | "0" | "no" | "nao" | "não" => Ok(false),
        other => bail!("{key} deve ser true ou false (recebido '{other}')"),
    }
}

impl Settings {
    /// Monta a configuração a partir de uma função de busca. Variáveis
    /// ausentes assumem o padrão; valores inválidos abortam.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let bind_addr = get("BIND_ADDR", "0.0.0.0:3000");
        let bind_addr: SocketAddr = bind_addr
            .trim()
            .parse()
            .with_context(|| format!("BIND_ADDR inválido: '{bind_addr}'"))?;

        let upstream_api_url = get("UPSTREAM_API_URL", "http://localhost:8080/api");
        if !(upstream_api_url.starts_with("http://") || upstream_api_url.starts_with("https://")) {
            bail!(
                "UPSTREAM_API_URL exige http:// ou https:// (recebido '{upstream_api_url}')"
            );
        }

        let timeout = get("UPSTREAM_TIMEOUT_SECS", "10");
        let timeout_secs: u64 = timeout
            .trim()
            .parse()
            .with_context(|| format!("UPSTREAM_TIMEOUT_SECS inválido: '{timeout}'"))?;
        if timeout_secs == 0 {
            bail!("UPSTREAM_TIMEOUT_SECS deve ser maior que zero");
        }

        let fallback_enabled = parse_bool("FALLBACK_ENABLED", &get("FALLBACK_ENABLED", "true"))?;

        let alert_policy: AlertCapPolicy = get("ALERT_CAP_POLICY", "severity")
            .parse()
            .map_err(anyhow::Error::msg)?;

        let offset = get("BUSINESS_UTC_OFFSET_HOURS", "-3");
        let offset_hours: i32 = offset
            .trim()
            .parse()
            .with_context(|| format!("BUSINESS_UTC_OFFSET_HOURS inválido: '{offset}'"))?;
        let business_offset = FixedOffset::east_opt(offset_hours * 3600).with_context(|| {
            format!("BUSINESS_UTC_OFFSET_HOURS fora do intervalo: {offset_hours}")
        })?;

        Ok(Self {
            bind_addr,
            upstream_api_url: upstream_api_url.trim_end_matches('/').to_string(),
            upstream_timeout: Duration::from_secs(timeout_secs),
            fallback_enabled,
            alert_policy,
            business_offset,
        })
    }

    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }
}

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub storefront_service: StorefrontService,
    pub dashboard_service: DashboardService,
}

impl AppState {
    pub fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let settings = Settings::from_env()?;
        tracing::info!(
            upstream = %settings.upstream_api_url,
            fallback = settings.fallback_enabled,
            alert_policy = ?settings.alert_policy,
            "✅ Configuração carregada"
        );

        Self::from_settings(settings)
    }

    // --- Monta o gráfico de dependências ---
    pub fn from_settings(settings: Settings) -> anyhow::Result<Self> {
        let client = UpstreamClient::new(
            &settings.upstream_api_url,
            settings.upstream_timeout,
            settings.business_offset,
        )?;

        let storefront_service = StorefrontService::new(
            Arc::new(CatalogRepository::new(client.clone())),
            Arc::new(OfferRepository::new(client.clone())),
            Arc::new(PharmacyRepository::new(client.clone())),
            settings.fallback_enabled,
        );

        let dashboard_service = DashboardService::new(
            Arc::new(StockRepository::new(client.clone())),
            Arc::new(OrderRepository::new(client)),
            settings.alert_policy,
        );

        Ok(Self {
            settings,
            storefront_service,
            dashboard_service,
        })
    }

    /// "Agora" no fuso do negócio. Único ponto que lê o relógio.
    pub fn business_now(&self) -> chrono::NaiveDateTime {
        chrono::Utc::now()
            .with_timezone(&self.settings.business_offset)
            .naive_local()
    }
}
