pub mod admin_handlers;
pub mod admin_middleware;
pub mod admin_views;

pub use admin_handlers::{dashboard, login_page};
pub use admin_middleware::session_gate;
