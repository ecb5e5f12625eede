// src/services/offer_aggregator.rs
//
// Consolida o catálogo com as ofertas das farmácias. Funções puras: a
// mesma entrada sempre produz a mesma saída, na mesma ordem.

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};

use crate::models::{
    catalog::CatalogProduct,
    offers::{AggregatedProduct, BestOffer, Offer},
};

pub const BEST_OFFERS_LIMIT: usize = 10;

/// Consolida um produto com suas ofertas. Ofertas inativas são ignoradas;
/// sem nenhuma oferta ativa o produto não aparece na vitrine.
pub fn aggregate_product(product: &CatalogProduct, offers: &[Offer]) -> Option<AggregatedProduct> {
    let active: Vec<Offer> = offers.iter().filter(|o| o.active).cloned().collect();

    let min_price = active.iter().map(|o| o.price).min()?;
    let max_price = active.iter().map(|o| o.price).max()?;

    // Empate no menor preço: vale a primeira na ordem de chegada
    let cheapest = active.iter().find(|o| o.price == min_price)?;

    let is_promotional = active.len() >= 2 && min_price < max_price;
    let representative_price = if is_promotional { max_price } else { min_price };
    let in_stock = active.iter().any(|o| o.quantity > 0);

    Some(AggregatedProduct {
        product: product.clone(),
        min_price,
        max_price,
        is_promotional,
        representative_price,
        representative_offer_id: cheapest.offer_id,
        pharmacy_id: cheapest.pharmacy_id,
        pharmacy_name: cheapest.pharmacy_name.clone(),
        in_stock,
        discount_pct: discount_pct(representative_price, min_price),
        offers: active,
    })
}

/// Agrega o catálogo inteiro, preservando a ordem do catálogo.
pub fn aggregate<F>(catalog: &[CatalogProduct], mut offers_for: F) -> Vec<AggregatedProduct>
where
    F: FnMut(&CatalogProduct) -> Vec<Offer>,
{
    catalog
        .iter()
        .filter_map(|product| aggregate_product(product, &offers_for(product)))
        .collect()
}

/// Desconto inteiro do preço "de" para o preço "por" (meio arredonda para cima).
pub fn discount_pct(representative_price: Decimal, min_price: Decimal) -> u32 {
    if representative_price <= Decimal::ZERO || min_price >= representative_price {
        return 0;
    }
    ((representative_price - min_price) / representative_price * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(0)
}

pub fn promotions(products: &[AggregatedProduct]) -> Vec<AggregatedProduct> {
    products.iter().filter(|p| p.is_promotional).cloned().collect()
}

/// Ranking das maiores economias entre farmácias (no máximo 10).
pub fn best_offers(products: &[AggregatedProduct]) -> Vec<BestOffer> {
    let mut ranked: Vec<BestOffer> = products
        .iter()
        .filter_map(|p| {
            let mut by_price = p.offers.clone();
            // sort_by é estável: empates mantêm a ordem de chegada
            by_price.sort_by(|a, b| a.price.cmp(&b.price));

            let cheapest = by_price.first()?.clone();
            let most_expensive = by_price.last()?.clone();

            Some(BestOffer {
                product: p.product.clone(),
                savings: most_expensive.price - cheapest.price,
                pharmacy_name: cheapest.pharmacy_name.clone(),
                cheapest_offer: cheapest,
                most_expensive_offer: most_expensive,
            })
        })
        .collect();

    ranked.sort_by(|a, b| b.savings.cmp(&a.savings));
    ranked.truncate(BEST_OFFERS_LIMIT);
    ranked
}
