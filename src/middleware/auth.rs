// src/middleware/auth.rs

use std::fmt;

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};

use crate::{
    common::error::{ApiError, AppError},
    middleware::i18n::Locale,
};

// O token não é validado aqui: ele segue como veio para o upstream,
// que resolve a farmácia do usuário nas rotas /farmacia-admin.
#[derive(Clone)]
pub struct BearerToken(pub String);

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(***)")
    }
}

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let locale = Locale::from_request_parts(parts, state)
            .await
            .unwrap_or_default();

        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| AppError::InvalidToken.to_api_error(&locale))?;

        let token = bearer.token().trim();
        if token.is_empty() {
            return Err(AppError::InvalidToken.to_api_error(&locale));
        }

        Ok(BearerToken(token.to_string()))
    }
}
