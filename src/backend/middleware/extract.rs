/**
 * Request Extraction
 *
 * `ValidatedJson<T>` behaves like `axum::Json<T>` but rejects with a
 * `BackendError`, so a malformed body gets the same 400 JSON error shape as a
 * failed field validation instead of axum's plain-text 422.
 *
 * `RouteContext` exposes the matched route parameters as strings.
 */

use std::convert::Infallible;

use axum::{
    extract::{FromRequest, FromRequestParts, RawPathParams, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use crate::backend::error::BackendError;

/// JSON body extractor with `BackendError` rejections
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::warn!("Rejected request body: {}", rejection.body_text());
            BackendError::from(rejection)
        })?;
        Ok(ValidatedJson(value))
    }
}

/// Raw route parameters of the matched path
///
/// Unlike `Path<T>` this never rejects: a route without a parameter simply
/// has no value for it, and parsing is left to the handler so a malformed
/// identifier can be answered the same way as an unknown one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteContext {
    params: Vec<(String, String)>,
}

impl RouteContext {
    /// Build a context from name and value pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            params: pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// Value of a parameter, if the route declares it
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// The `application_id` parameter of nested routes
    pub fn application_id(&self) -> Option<&str> {
        self.get("application_id")
    }

    /// The trailing `id` parameter parsed as an identifier
    ///
    /// A missing or malformed id cannot match any row, so it is reported as
    /// not found.
    pub fn object_id(&self) -> Result<i64, BackendError> {
        self.get("id")
            .and_then(|raw| raw.parse().ok())
            .ok_or_else(BackendError::not_found)
    }
}

impl<S> FromRequestParts<S> for RouteContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match RawPathParams::from_request_parts(parts, state).await {
            Ok(params) => Ok(Self::from_pairs(params.iter())),
            Err(rejection) => {
                tracing::debug!("No route parameters: {}", rejection.body_text());
                Ok(Self::default())
            }
        }
    }
}
