// src/common/envelope.rs
//
// O upstream devolve listas em vários formatos: array puro, página do
// Spring (`{ "content": [...] }`), `{ "items": [...] }` ou
// `{ "pedidos": [...] }`. Cada registro é validado isoladamente; registros
// ruins são descartados aqui, antes de qualquer conta.

use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::Validate;

use crate::common::error::AppError;

pub fn extract_records(endpoint: &str, body: Value) -> Result<Vec<Value>, AppError> {
    match body {
        Value::Array(records) => Ok(records),
        Value::Object(mut map) => {
            for key in ["content", "items", "pedidos"] {
                if let Some(Value::Array(records)) = map.remove(key) {
                    return Ok(records);
                }
            }
            Err(AppError::UpstreamPayload {
                endpoint: endpoint.to_string(),
                reason: "objeto sem 'content', 'items' ou 'pedidos'".to_string(),
            })
        }
        other => Err(AppError::UpstreamPayload {
            endpoint: endpoint.to_string(),
            reason: format!("esperava uma lista, veio {}", json_kind(&other)),
        }),
    }
}

pub fn decode_records<R>(endpoint: &str, records: Vec<Value>) -> Vec<R>
where
    R: DeserializeOwned + Validate,
{
    let total = records.len();

    let decoded: Vec<R> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, raw)| {
            let record = match serde_json::from_value::<R>(raw) {
                Ok(record) => record,
                Err(e) => {
                    tracing::warn!(
                        endpoint,
                        index,
                        error = %e,
                        "Registro descartado: formato inválido"
                    );
                    return None;
                }
            };
            if let Err(e) = record.validate() {
                tracing::warn!(
                    endpoint,
                    index,
                    error = %e,
                    "Registro descartado: valores inválidos"
                );
                return None;
            }
            Some(record)
        })
        .collect();

    if decoded.len() < total {
        tracing::warn!(
            endpoint,
            kept = decoded.len(),
            dropped = total - decoded.len(),
            "Registros inválidos removidos na leitura"
        );
    }

    decoded
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "booleano",
        Value::Number(_) => "número",
        Value::String(_) => "texto",
        Value::Array(_) => "lista",
        Value::Object(_) => "objeto",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::offers::StockRecord;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn offer_json(id: i64, preco: Value, quantidade: Value) -> Value {
        json!({
            "estoqueId": id,
            "produtoId": 1,
            "preco": preco,
            "quantidade": quantidade,
            "farmaciaId": 7,
            "farmaciaRazaoSocial": "Farmácia Central"
        })
    }

    #[test]
    fn accepts_bare_arrays_pages_and_items() {
        let bare = extract_records("/x", json!([1, 2])).unwrap();
        let page = extract_records("/x", json!({ "content": [1], "totalElements": 1 })).unwrap();
        let items = extract_records("/x", json!({ "items": [1, 2, 3], "total": 3 })).unwrap();

        assert_eq!(bare.len(), 2);
        assert_eq!(page.len(), 1);
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn rejects_shapes_that_are_not_lists() {
        assert!(matches!(
            extract_records("/x", json!({ "data": [] })),
            Err(AppError::UpstreamPayload { .. })
        ));
        assert!(extract_records("/x", json!("oops")).is_err());
    }

    #[test]
    fn malformed_numeric_fields_are_dropped_at_the_boundary() {
        let records = vec![
            offer_json(1, json!(10.5), json!(3)),
            offer_json(2, json!("abc"), json!(3)),
            offer_json(3, json!(-1), json!(3)),
            offer_json(4, json!(8), json!(-2)),
            offer_json(5, json!(9.9), json!(2.5)),
            offer_json(6, json!(null), json!(1)),
        ];

        let decoded: Vec<StockRecord> = decode_records("/estoque", records);

        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].estoque_id, 1);
        assert_eq!(decoded[0].preco, dec!(10.5));
    }

    #[test]
    fn out_of_range_numbers_are_dropped_at_the_boundary() {
        let records = vec![
            offer_json(1, json!(10.5), json!(i64::MAX)),
            offer_json(2, json!(1e15), json!(3)),
            offer_json(3, json!(4.2), json!(1_000_000_000)),
        ];

        let decoded: Vec<StockRecord> = decode_records("/estoque", records);

        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].estoque_id, 3);
    }
}
