use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::server::model::language::Language;

/// Extracts the response language from `Accept-Language` or `x-lang`.
///
/// Never rejects; requests without a usable header get French.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lang(pub Language);

impl<S> FromRequestParts<S> for Lang
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Lang(Language::from_headers(&parts.headers)))
    }
}
