// src/services/fallback.rs
//
// Dados de exemplo exibidos quando a API do marketplace não responde.
// Passam pelo mesmo agregador dos dados reais.

use rust_decimal::Decimal;

use crate::{
    models::{
        catalog::CatalogProduct, offers::AggregatedProduct, offers::Offer, pharmacy::Pharmacy,
    },
    services::offer_aggregator,
};

pub const FALLBACK_NOTICE: &str = "Erro ao carregar dados. Usando dados de exemplo.";

// (id, nome, descrição, categoria, preço, preço promocional, estoque, farmácia)
type Sample = (i64, &'static str, &'static str, &'static str, i64, Option<i64>, i64, i64);

// Preços em centavos
const SAMPLE_PRODUCTS: [Sample; 8] = [
    (1, "Dipirona 500mg", "Analgésico e antitérmico", "Analgésicos", 1590, Some(1290), 50, 1),
    (2, "Paracetamol 750mg", "Analgésico de ação rápida", "Analgésicos", 1850, None, 30, 2),
    (3, "Vitamina C 1g", "Suplemento vitamínico", "Vitaminas", 2500, Some(1990), 45, 1),
    (4, "Ibuprofeno 600mg", "Anti-inflamatório", "Anti-inflamatórios", 2200, Some(1850), 25, 3),
    (5, "Omeprazol 20mg", "Protetor gástrico", "Digestivos", 2890, None, 40, 2),
    (
        6,
        "Amoxicilina 500mg",
        "Antibiótico de amplo espectro",
        "Antibióticos",
        3250,
        Some(2890),
        20,
        1,
    ),
    (7, "Loratadina 10mg", "Antialérgico", "Antialérgicos", 1290, None, 60, 3),
    (
        8,
        "Protetor Solar FPS 50",
        "Proteção UVA e UVB",
        "Dermocosméticos",
        4500,
        Some(3990),
        35,
        2,
    ),
];

const SAMPLE_PHARMACIES: [(i64, &str, &str, bool); 5] = [
    (1, "Farmácia Central", "Rua das Flores, 123 - Centro, São Paulo/SP", true),
    (2, "Drogaria São Paulo", "Av. Paulista, 1500 - Bela Vista, São Paulo/SP", true),
    (3, "Farmácia Popular", "Rua Augusta, 456 - Consolação, São Paulo/SP", false),
    (4, "Drogasil", "Rua Oscar Freire, 789 - Jardins, São Paulo/SP", true),
    (5, "Farmácia do Bairro", "Rua da Consolação, 234 - Consolação, São Paulo/SP", true),
];

pub fn fallback_pharmacies() -> Vec<Pharmacy> {
    SAMPLE_PHARMACIES
        .iter()
        .map(|&(id, name, address, active)| Pharmacy {
            id,
            name: name.to_string(),
            address: address.to_string(),
            active,
        })
        .collect()
}

fn pharmacy_name(id: i64) -> String {
    SAMPLE_PHARMACIES
        .iter()
        .find(|p| p.0 == id)
        .map(|p| p.1.to_string())
        .unwrap_or_default()
}

fn sample_offer(
    offer_id: i64,
    product_id: i64,
    pharmacy_id: i64,
    cents: i64,
    quantity: i64,
) -> Offer {
    Offer {
        offer_id,
        product_id,
        pharmacy_id,
        pharmacy_name: pharmacy_name(pharmacy_id),
        price: Decimal::new(cents, 2),
        quantity,
        active: true,
    }
}

// Produto com preço promocional vira duas ofertas: a promoção na farmácia
// de origem e o preço cheio na farmácia seguinte.
fn sample_offers(sample: &Sample) -> Vec<Offer> {
    let &(id, _, _, _, price, promo, stock, pharmacy_id) = sample;

    match promo {
        Some(promo) => {
            let other = pharmacy_id % SAMPLE_PHARMACIES.len() as i64 + 1;
            vec![
                sample_offer(id * 10, id, pharmacy_id, promo, stock),
                sample_offer(id * 10 + 1, id, other, price, stock),
            ]
        }
        None => vec![sample_offer(id * 10, id, pharmacy_id, price, stock)],
    }
}

pub fn fallback_products() -> Vec<AggregatedProduct> {
    let catalog: Vec<CatalogProduct> = SAMPLE_PRODUCTS
        .iter()
        .map(|&(id, name, description, category, ..)| CatalogProduct {
            id,
            name: name.to_string(),
            description: description.to_string(),
            active_ingredient: None,
            lab: None,
            category: category.to_string(),
        })
        .collect();

    offer_aggregator::aggregate(&catalog, |product| {
        SAMPLE_PRODUCTS
            .iter()
            .find(|s| s.0 == product.id)
            .map(sample_offers)
            .unwrap_or_default()
    })
}
