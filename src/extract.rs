use axum::extract::FromRequest;

use crate::error::ApiError;

/// `Json` extractor whose rejections become `ApiError::Validation` (422)
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);
