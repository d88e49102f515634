use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;

use crate::{state::AppState, toast::Toasts};

use super::{
    admin_middleware::safe_return_path,
    admin_views::{render_admin_layout, render_dashboard, render_login},
};

#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    from: Option<String>,
}

/// Admin dashboard, rendered inside the admin layout
pub async fn dashboard(Toasts(queue): Toasts) -> Html<String> {
    let toasts = queue.active();
    let content = render_dashboard(toasts.len());

    Html(render_admin_layout("Dashboard", "/admin", &content, &toasts))
}

/// Login entry point. Credentials go to the external auth endpoint together
/// with the location the viewer originally asked for.
pub async fn login_page(
    State(state): State<AppState>,
    Query(query): Query<LoginQuery>,
) -> Html<String> {
    let from = safe_return_path(query.from.as_deref());
    Html(render_login(&state.config.admin_auth_url, from))
}
