use crate::{
    about::{self, AboutData, StaffEntry, StructureGroup, Struktur},
    admin::{self, session_gate},
    error::AppError,
    news::{NewsId, NewsItem},
    state::AppState,
    toast::{
        self,
        toast_dto::{EnqueueToastRequest, EnqueueToastResponse},
        Toast, ToastCategory, ToastEvent, ToastId, ToastQueue,
    },
};
use axum::{
    middleware,
    routing::{delete, get},
    Extension, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        about::about_handlers::get_about,
        about::about_handlers::get_achievements,
        toast::toast_handlers::list_toasts,
        toast::toast_handlers::enqueue_toast,
        toast::toast_handlers::dismiss_toast,
        toast::toast_handlers::toast_stream,
    ),
    components(
        schemas(
            AboutData,
            Struktur,
            StaffEntry,
            StructureGroup,
            NewsItem,
            NewsId,
            Toast,
            ToastId,
            ToastCategory,
            ToastEvent,
            EnqueueToastRequest,
            EnqueueToastResponse,
        )
    ),
    tags(
        (name = "about", description = "Institution profile content"),
        (name = "toasts", description = "Transient admin notifications")
    )
)]
struct ApiDoc;

pub fn create_router(state: AppState, toasts: ToastQueue) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Public pages
    let site_routes = Router::new()
        .route("/tentang", get(about::about_index))
        .route("/tentang/prestasi/items", get(about::achievements_fragment))
        .route("/tentang/:section", get(about::about_page));

    let api_routes = Router::new()
        .route("/about", get(about::get_about))
        .route("/about/prestasi", get(about::get_achievements));

    // Everything under /admin except the login page needs a session token,
    // unrouted paths included.
    let protected_admin = Router::new()
        .route("/", get(admin::dashboard))
        .route("/toasts", get(toast::list_toasts).post(toast::enqueue_toast))
        .route("/toasts/stream", get(toast::toast_stream))
        .route("/toasts/:id", delete(toast::dismiss_toast))
        .fallback(not_found)
        .layer(middleware::from_fn(session_gate));

    let admin_routes = Router::new()
        .route("/login", get(admin::login_page))
        .merge(protected_admin);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(site_routes)
        .nest("/admin", admin_routes)
        .nest("/api", api_routes)
        .fallback(not_found)
        .layer(Extension(toasts))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound("Page not found".to_string())
}
