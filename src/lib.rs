pub mod about;
pub mod admin;
pub mod error;
pub mod news;
pub mod routes;
pub mod state;
pub mod toast;
pub mod views;
