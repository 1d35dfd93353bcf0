use axum::extract::FromRequest;

use super::ApiError;

/// JSON request body; rejections answer with the same `{"message"}` body as
/// every other client error
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
