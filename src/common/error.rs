// src/common/error.rs

use std::collections::HashMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::middleware::i18n::Locale;

// Taxonomia interna de erros.
// Falhas pontuais de leitura (um produto) e cargas com fallback nunca chegam aqui:
// são recuperadas nos serviços.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Token inválido")]
    InvalidToken,

    #[error("Upstream indisponível em {endpoint}: {source}")]
    UpstreamUnavailable {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Upstream respondeu {status} em {endpoint}")]
    UpstreamStatus { endpoint: String, status: StatusCode },

    #[error("Resposta inesperada do upstream em {endpoint}: {reason}")]
    UpstreamPayload { endpoint: String, reason: String },

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

// O formato que o cliente recebe
#[derive(Debug, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    pub status: StatusCode,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Vec<String>>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

impl AppError {
    pub fn to_api_error(&self, locale: &Locale) -> ApiError {
        let en = locale.is_english();

        let (status, error) = match self {
            AppError::ValidationError(errors) => {
                let mut details = HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let error = if en {
                    "One or more fields are invalid."
                } else {
                    "Um ou mais campos são inválidos."
                };
                return ApiError {
                    status: StatusCode::BAD_REQUEST,
                    error: error.to_string(),
                    details: Some(details),
                };
            }
            AppError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                if en {
                    "Missing or invalid authentication token."
                } else {
                    "Token de autenticação inválido ou ausente."
                },
            ),
            AppError::UpstreamUnavailable { .. }
            | AppError::UpstreamStatus { .. }
            | AppError::UpstreamPayload { .. } => {
                tracing::error!("Falha no upstream: {}", self);
                (
                    StatusCode::BAD_GATEWAY,
                    if en {
                        "The marketplace service is unavailable right now."
                    } else {
                        "O serviço do marketplace está indisponível no momento."
                    },
                )
            }
            AppError::InternalServerError(e) => {
                tracing::error!("Erro Interno do Servidor: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    if en {
                        "An unexpected error occurred."
                    } else {
                        "Ocorreu um erro inesperado."
                    },
                )
            }
        };

        ApiError {
            status,
            error: error.to_string(),
            details: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.to_api_error(&Locale::default()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::{ValidationError, ValidationErrors};

    #[test]
    fn upstream_failures_map_to_bad_gateway() {
        let err = AppError::UpstreamStatus {
            endpoint: "/catalogo".into(),
            status: StatusCode::SERVICE_UNAVAILABLE,
        };
        let api = err.to_api_error(&Locale::default());
        assert_eq!(api.status, StatusCode::BAD_GATEWAY);
        assert!(api.details.is_none());
    }

    #[test]
    fn validation_errors_carry_field_details() {
        let mut errors = ValidationErrors::new();
        let mut e = ValidationError::new("length");
        e.message = Some("A busca deve ter no máximo 100 caracteres.".into());
        errors.add("busca", e);

        let api = AppError::ValidationError(errors).to_api_error(&Locale("en".into()));

        assert_eq!(api.status, StatusCode::BAD_REQUEST);
        assert_eq!(api.error, "One or more fields are invalid.");
        let details = api.details.unwrap();
        assert_eq!(details["busca"].len(), 1);
    }

    #[test]
    fn token_error_is_localized() {
        let pt = AppError::InvalidToken.to_api_error(&Locale::default());
        let en = AppError::InvalidToken.to_api_error(&Locale("en".into()));
        assert_eq!(pt.status, StatusCode::UNAUTHORIZED);
        assert_ne!(pt.error, en.error);
    }
}
