use axum::extract::FromRequest;

use crate::error::AppError;

/// `Json` whose rejections (bad syntax, wrong field types, missing content
/// type) come back in the API's error envelope as a 400.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
