use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::{request::Parts, StatusCode},
    response::{
        sse::{Event, KeepAlive},
        IntoResponse, Sse,
    },
    Json,
};
use futures::stream::Stream;
use std::convert::Infallible;
use tokio_stream::{wrappers::BroadcastStream, StreamExt};
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, Result};

use super::{
    toast_dto::{EnqueueToastRequest, EnqueueToastResponse},
    toast_models::Toast,
    toast_queue::ToastQueue,
};

/// Extractor for the toast queue installed by the provider layer.
pub struct Toasts(pub ToastQueue);

#[async_trait]
impl<S> FromRequestParts<S> for Toasts
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self> {
        ToastQueue::from_extensions(&parts.extensions).map(Toasts)
    }
}

/// List active toasts, oldest first
#[utoipa::path(
    get,
    path = "/admin/toasts",
    responses(
        (status = 200, description = "Active toasts", body = Vec<Toast>),
        (status = 303, description = "Redirect to login when no session token is present")
    ),
    tag = "toasts"
)]
pub async fn list_toasts(Toasts(queue): Toasts) -> Json<Vec<Toast>> {
    Json(queue.active())
}

/// Enqueue a toast
#[utoipa::path(
    post,
    path = "/admin/toasts",
    request_body = EnqueueToastRequest,
    responses(
        (status = 201, description = "Toast enqueued", body = EnqueueToastResponse),
        (status = 400, description = "Validation error")
    ),
    tag = "toasts"
)]
pub async fn enqueue_toast(
    Toasts(queue): Toasts,
    Json(payload): Json<EnqueueToastRequest>,
) -> Result<impl IntoResponse> {
    payload.validate()?;

    let id = queue.enqueue(payload.message, payload.category);

    Ok((StatusCode::CREATED, Json(EnqueueToastResponse { id })))
}

/// Dismiss a toast. Unknown ids are accepted silently.
#[utoipa::path(
    delete,
    path = "/admin/toasts/{id}",
    params(
        ("id" = Uuid, Path, description = "Toast ID")
    ),
    responses(
        (status = 204, description = "Toast no longer active")
    ),
    tag = "toasts"
)]
pub async fn dismiss_toast(Toasts(queue): Toasts, Path(id): Path<Uuid>) -> StatusCode {
    queue.dismiss(id.into());
    StatusCode::NO_CONTENT
}

/// Subscribe to toast changes via Server-Sent Events
#[utoipa::path(
    get,
    path = "/admin/toasts/stream",
    responses(
        (status = 200, description = "SSE stream of toast events")
    ),
    tag = "toasts"
)]
pub async fn toast_stream(
    Toasts(queue): Toasts,
) -> Sse<impl Stream<Item = std::result::Result<Event, Infallible>>> {
    let stream = BroadcastStream::new(queue.subscribe()).filter_map(|result| {
        let event = result.ok()?;
        let json = serde_json::to_string(&event).ok()?;
        Some(Ok(Event::default().data(json)))
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
