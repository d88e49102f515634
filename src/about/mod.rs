pub mod about_config;
pub mod about_handlers;
pub mod about_models;
pub mod about_service;
pub mod about_views;

pub use about_config::load_about_data;
pub use about_handlers::{about_index, about_page, achievements_fragment, get_about, get_achievements};
pub use about_models::{AboutData, StaffEntry, StructureGroup, Struktur};
pub use about_service::AboutService;
