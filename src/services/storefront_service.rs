// src/services/storefront_service.rs

use std::sync::Arc;

use futures::future::join_all;

use crate::{
    common::error::AppError,
    models::{
        catalog::CatalogProduct,
        offers::{AggregatedProduct, BestOffer, Offer},
        pharmacy::Pharmacy,
        storefront::{DataSource, HomeFeed, PriceOrder, ProductListing, ProductQuery},
    },
    services::{
        fallback::{self, FALLBACK_NOTICE},
        offer_aggregator,
    },
    upstream::{CatalogSource, OfferSource, PharmacySource},
};

const ALL_CATEGORIES: &str = "todos";

// Resultado de uma carga de produtos, com a origem dos dados
struct LoadedProducts {
    source: DataSource,
    notice: Option<String>,
    products: Vec<AggregatedProduct>,
}

#[derive(Clone)]
pub struct StorefrontService {
    catalog: Arc<dyn CatalogSource>,
    offers: Arc<dyn OfferSource>,
    pharmacies: Arc<dyn PharmacySource>,
    fallback_enabled: bool,
}

impl StorefrontService {
    pub fn new(
        catalog: Arc<dyn CatalogSource>,
        offers: Arc<dyn OfferSource>,
        pharmacies: Arc<dyn PharmacySource>,
        fallback_enabled: bool,
    ) -> Self {
        Self {
            catalog,
            offers,
            pharmacies,
            fallback_enabled,
        }
    }

    /// Tela inicial: produtos, promoções, farmácias e melhores ofertas.
    pub async fn load_home(&self) -> Result<HomeFeed, AppError> {
        let (catalog, pharmacies) = match tokio::try_join!(
            self.catalog.list_catalog(),
            self.pharmacies.list_pharmacies()
        ) {
            Ok(pair) => pair,
            Err(err) if self.fallback_enabled => {
                tracing::error!(
                    error = %err,
                    "Falha ao carregar a vitrine; usando dados de exemplo"
                );
                return Ok(build_home(
                    DataSource::Fallback,
                    Some(FALLBACK_NOTICE.to_string()),
                    fallback::fallback_products(),
                    fallback::fallback_pharmacies(),
                ));
            }
            Err(err) => return Err(err),
        };

        let mut source = DataSource::Live;

        let mut products = self.aggregate_live(&catalog).await;
        if products.is_empty() && self.fallback_enabled {
            tracing::warn!("Nenhum produto com oferta ativa; usando produtos de exemplo");
            products = fallback::fallback_products();
            source = DataSource::Fallback;
        }

        let mut pharmacies = pharmacies;
        if pharmacies.is_empty() && self.fallback_enabled {
            tracing::warn!("Nenhuma farmácia retornada; usando farmácias de exemplo");
            pharmacies = fallback::fallback_pharmacies();
            source = DataSource::Fallback;
        }

        Ok(build_home(source, None, products, pharmacies))
    }

    pub async fn list_products(&self, query: &ProductQuery) -> Result<ProductListing, AppError> {
        let loaded = self.load_products().await?;

        Ok(ProductListing {
            source: loaded.source,
            notice: loaded.notice,
            products: apply_query(loaded.products, query),
        })
    }

    pub async fn best_offers(&self) -> Result<Vec<BestOffer>, AppError> {
        let loaded = self.load_products().await?;
        Ok(offer_aggregator::best_offers(&loaded.products))
    }

    /// Ofertas de uma farmácia, na ordem do upstream. Sem fallback.
    pub async fn pharmacy_offers(&self, pharmacy_id: i64) -> Result<Vec<Offer>, AppError> {
        self.offers.offers_for_pharmacy(pharmacy_id).await
    }

    async fn load_products(&self) -> Result<LoadedProducts, AppError> {
        match self.catalog.list_catalog().await {
            Ok(catalog) => {
                let products = self.aggregate_live(&catalog).await;
                if products.is_empty() && self.fallback_enabled {
                    tracing::warn!("Nenhum produto com oferta ativa; usando produtos de exemplo");
                    return Ok(LoadedProducts {
                        source: DataSource::Fallback,
                        notice: None,
                        products: fallback::fallback_products(),
                    });
                }
                Ok(LoadedProducts {
                    source: DataSource::Live,
                    notice: None,
                    products,
                })
            }
            Err(err) if self.fallback_enabled => {
                tracing::error!(
                    error = %err,
                    "Falha ao carregar o catálogo; usando dados de exemplo"
                );
                Ok(LoadedProducts {
                    source: DataSource::Fallback,
                    notice: Some(FALLBACK_NOTICE.to_string()),
                    products: fallback::fallback_products(),
                })
            }
            Err(err) => Err(err),
        }
    }

    // Todas as leituras saem juntas; a falha de um produto vira lista vazia
    async fn aggregate_live(&self, catalog: &[CatalogProduct]) -> Vec<AggregatedProduct> {
        let reads = catalog.iter().map(|product| async move {
            match self.offers.offers_for_product(product.id).await {
                Ok(offers) => offers,
                Err(err) => {
                    tracing::warn!(
                        product_id = product.id,
                        error = %err,
                        "Falha ao buscar ofertas; produto segue sem ofertas"
                    );
                    Vec::new()
                }
            }
        });
        let offer_lists = join_all(reads).await;

        // join_all devolve na ordem do catálogo, não na ordem de chegada
        catalog
            .iter()
            .zip(offer_lists)
            .filter_map(|(product, offers)| offer_aggregator::aggregate_product(product, &offers))
            .collect()
    }
}

fn build_home(
    source: DataSource,
    notice: Option<String>,
    products: Vec<AggregatedProduct>,
    pharmacies: Vec<Pharmacy>,
) -> HomeFeed {
    HomeFeed {
        source,
        notice,
        promotions: offer_aggregator::promotions(&products),
        best_offers: offer_aggregator::best_offers(&products),
        pharmacies: pharmacies.into_iter().filter(|p| p.active).collect(),
        products,
    }
}

pub fn filter_by_category(
    products: Vec<AggregatedProduct>,
    category: Option<&str>,
) -> Vec<AggregatedProduct> {
    match category.map(str::trim) {
        None | Some("") => products,
        Some(c) if c.eq_ignore_ascii_case(ALL_CATEGORIES) => products,
        Some(c) => {
            let wanted = c.to_lowercase();
            products
                .into_iter()
                .filter(|p| p.product.category.to_lowercase() == wanted)
                .collect()
        }
    }
}

pub fn search(products: Vec<AggregatedProduct>, term: Option<&str>) -> Vec<AggregatedProduct> {
    let term = match term.map(str::trim) {
        None | Some("") => return products,
        Some(t) => t.to_lowercase(),
    };

    products
        .into_iter()
        .filter(|p| {
            p.product.name.to_lowercase().contains(&term)
                || p.product.description.to_lowercase().contains(&term)
        })
        .collect()
}

pub fn sort_by_price(
    mut products: Vec<AggregatedProduct>,
    order: Option<PriceOrder>,
) -> Vec<AggregatedProduct> {
    match order {
        Some(PriceOrder::PrecoAsc) => products.sort_by_key(|p| p.final_price()),
        Some(PriceOrder::PrecoDesc) => {
            products.sort_by(|a, b| b.final_price().cmp(&a.final_price()))
        }
        None => {}
    }
    products
}

pub fn apply_query(
    products: Vec<AggregatedProduct>,
    query: &ProductQuery,
) -> Vec<AggregatedProduct> {
    let products = filter_by_category(products, query.categoria.as_deref());
    let products = search(products, query.busca.as_deref());
    sort_by_price(products, query.ordem)
}
