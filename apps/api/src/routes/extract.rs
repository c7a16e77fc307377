use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Multipart, Request},
    http::header,
    Form, Json,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// Body extractor accepting JSON, a urlencoded form, or the text fields of a
/// multipart form, chosen by `Content-Type`. Any other content type (or none)
/// yields `T::default()`, so absent fields read as empty strings.
#[derive(Debug, Clone, Default)]
pub struct JsonOrForm<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let essence = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .map(|v| v.trim().to_ascii_lowercase())
            .unwrap_or_default();

        if essence == "application/json" || essence.ends_with("+json") {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::Validation(e.body_text()))?;
            return Ok(Self(value));
        }

        if essence == "application/x-www-form-urlencoded" {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::Validation(e.body_text()))?;
            return Ok(Self(value));
        }

        if essence == "multipart/form-data" {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| AppError::Validation(e.body_text()))?;
            return read_multipart_fields(multipart).await.map(Self);
        }

        Ok(Self(T::default()))
    }
}

/// Collects the non-file parts of a multipart form and deserializes them the
/// same way a urlencoded form is, so numeric fields arrive as strings in both.
async fn read_multipart_fields<T: DeserializeOwned>(mut multipart: Multipart) -> Result<T, AppError> {
    let mut pairs: Vec<(String, String)> = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(e.body_text()))?
    {
        if field.file_name().is_some() {
            continue;
        }
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        let value = field
            .text()
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;
        pairs.push((name, value));
    }

    let encoded = serde_urlencoded::to_string(&pairs)
        .map_err(|e| AppError::Validation(format!("Failed to encode form fields: {e}")))?;
    serde_urlencoded::from_str(&encoded)
        .map_err(|e| AppError::Validation(format!("Failed to deserialize form fields: {e}")))
}
