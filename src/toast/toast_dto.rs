use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::toast_models::{ToastCategory, ToastId};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct EnqueueToastRequest {
    #[validate(length(min = 1, max = 500))]
    pub message: String,
    pub category: Option<ToastCategory>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EnqueueToastResponse {
    pub id: ToastId,
}
