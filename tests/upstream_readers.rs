use std::time::Duration;

use chrono::{FixedOffset, NaiveDate};
use rust_decimal_macros::dec;
use serde_json::json;
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

use vitrine::{
    common::error::AppError,
    models::orders::OrderStatus,
    upstream::{
        CatalogRepository, CatalogSource, OfferRepository, OfferSource, OrderRepository,
        OrderScope, OrderSource, PharmacyRepository, PharmacySource, StockRepository, StockSource,
        UpstreamClient,
    },
};

fn client(server: &MockServer) -> UpstreamClient {
    let brt = FixedOffset::west_opt(3 * 3600).unwrap();
    UpstreamClient::new(&format!("{}/api/", server.uri()), Duration::from_secs(2), brt).unwrap()
}

#[tokio::test]
async fn catalog_reads_spring_pages_and_fills_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/catalogo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [
                {
                    "id": 1,
                    "nome": "Dipirona 500mg",
                    "laboratorio": "Medley",
                    "tipoProduto": "MEDICAMENTO"
                },
                { "id": 2, "nome": "Shampoo", "descricao": "Anticaspa", "tipoProduto": "HIGIENE" },
                { "id": 3, "nome": "Sem tipo" },
                { "id": 0, "nome": "Id inválido" },
                { "id": 4, "nome": "" }
            ],
            "totalElements": 5
        })))
        .mount(&server)
        .await;

    let catalog = CatalogRepository::new(client(&server)).list_catalog().await.unwrap();

    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog[0].description, "");
    assert_eq!(catalog[0].lab.as_deref(), Some("Medley"));
    assert_eq!(catalog[1].category, "HIGIENE");
    assert_eq!(catalog[2].category, "MEDICAMENTO");
}

#[tokio::test]
async fn offers_drop_malformed_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/estoque/buscar-por-catalogo/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "estoqueId": 10,
                "produtoId": 1,
                "preco": 15.9,
                "quantidade": 5,
                "farmaciaId": 1,
                "farmaciaRazaoSocial": "Farmácia Central"
            },
            { "estoqueId": 11, "produtoId": 1, "preco": "12.90", "quantidade": 5, "farmaciaId": 2 },
            { "estoqueId": 12, "produtoId": 1, "preco": 11.0, "quantidade": -1, "farmaciaId": 3 },
            {
                "estoqueId": 13,
                "produtoId": 1,
                "preco": 13.5,
                "quantidade": 0,
                "ativo": false,
                "farmaciaId": 4
            }
        ])))
        .mount(&server)
        .await;

    let offers = OfferRepository::new(client(&server))
        .offers_for_product(1)
        .await
        .unwrap();

    assert_eq!(offers.len(), 2);
    assert_eq!(offers[0].price, dec!(15.9));
    assert_eq!(offers[0].pharmacy_name, "Farmácia Central");
    assert!(offers[0].active);
    assert!(!offers[1].active);
}

#[tokio::test]
async fn not_found_means_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/estoque/farmacia/9"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let offers = OfferRepository::new(client(&server))
        .offers_for_pharmacy(9)
        .await
        .unwrap();

    assert!(offers.is_empty());
}

#[tokio::test]
async fn server_errors_and_odd_shapes_are_upstream_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/catalogo"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/farmacias"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(&server)
        .await;

    let catalog_err = CatalogRepository::new(client(&server))
        .list_catalog()
        .await
        .unwrap_err();
    let pharmacy_err = PharmacyRepository::new(client(&server))
        .list_pharmacies()
        .await
        .unwrap_err();

    assert!(matches!(catalog_err, AppError::UpstreamStatus { .. }));
    assert!(matches!(pharmacy_err, AppError::UpstreamPayload { .. }));
}

#[tokio::test]
async fn pharmacies_get_a_formatted_address() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/farmacias"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {
                    "id": 1,
                    "nomeFantasia": "Farmácia Central",
                    "ativo": true,
                    "endereco": {
                        "logradouro": "Rua das Flores",
                        "numero": "120",
                        "bairro": "Centro",
                        "cidade": "Brasília",
                        "estado": "DF"
                    }
                },
                { "id": 2, "nomeFantasia": "Drogaria Sem Endereço" }
            ]
        })))
        .mount(&server)
        .await;

    let pharmacies = PharmacyRepository::new(client(&server))
        .list_pharmacies()
        .await
        .unwrap();

    assert_eq!(pharmacies[0].address, "Rua das Flores, 120 - Centro, Brasília/DF");
    assert_eq!(pharmacies[1].address, "Endereço não disponível");
    assert!(pharmacies[1].active);
}

#[tokio::test]
async fn stock_forwards_the_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/farmacia-admin/estoque"))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "estoqueId": 1,
                "produtoId": 5,
                "produtoNome": "Dipirona",
                "preco": 12.9,
                "quantidade": 0,
                "farmaciaId": 1
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let stock = StockRepository::new(client(&server))
        .list_stock("tok-123")
        .await
        .unwrap();

    assert_eq!(stock.len(), 1);
    assert!(stock[0].is_out_of_stock());
}

#[tokio::test]
async fn customer_orders_use_their_own_route_and_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/pedidos/meus-pedidos"))
        .and(header("authorization", "Bearer cliente"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pedidos": [
                {
                    "id": 7,
                    "status": "ENTREGUE",
                    "total": 45.8,
                    "createdAt": "2025-10-15T01:30:00Z",
                    "itens": [
                        {
                            "produtoId": 1,
                            "produtoNome": "Dipirona",
                            "quantidade": 2,
                            "precoUnitario": 12.9,
                            "subtotal": 25.8
                        }
                    ]
                },
                { "id": 8, "status": "ENTREGUE", "total": 10, "createdAt": "ontem" },
                {
                    "id": 9,
                    "status": "STATUS_NOVO",
                    "total": 10,
                    "createdAt": "2025-10-15T10:00:00"
                }
            ],
            "total": 3
        })))
        .mount(&server)
        .await;

    let orders = OrderRepository::new(client(&server))
        .list_orders(OrderScope::Customer, "cliente")
        .await
        .unwrap();

    assert_eq!(orders.len(), 1);
    let order = &orders[0];
    assert_eq!(order.status, OrderStatus::Entregue);
    assert_eq!(order.items[0].subtotal, dec!(25.8));
    // 01:30 UTC ainda é dia 14 em Brasília
    assert_eq!(order.created_at.date(), NaiveDate::from_ymd_opt(2025, 10, 14).unwrap());
}

#[tokio::test]
async fn pharmacy_orders_read_the_admin_route() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/farmacia-admin/pedidos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1,
                "status": "AGUARDANDO_RECEITA",
                "total": 30.0,
                "createdAt": "2025-10-15T09:15:00.123"
            }
        ])))
        .mount(&server)
        .await;

    let orders = OrderRepository::new(client(&server))
        .list_orders(OrderScope::Pharmacy, "farmacia")
        .await
        .unwrap();

    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].status, OrderStatus::AguardandoReceita);
    assert!(orders[0].items.is_empty());
}
