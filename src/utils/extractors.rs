use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Integer id from the route. Anything that is not an `i32` matches no
/// record, so it answers 404 rather than 400.
#[derive(Debug, Clone, Copy)]
pub struct EntityId(pub i32);

impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let extracted = Path::<i32>::from_request_parts(parts, state).await;
        match extracted {
            Ok(Path(id)) => Ok(EntityId(id)),
            Err(rejection) => Err(AppError::NotFound(format!(
                "{}: {}",
                parts.uri.path(),
                rejection.body_text()
            ))),
        }
    }
}

/// JSON body whose rejections use the `{ "error": ... }` 400 shape.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        Ok(JsonBody(value))
    }
}
