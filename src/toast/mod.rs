pub mod toast_dto;
pub mod toast_handlers;
pub mod toast_models;
pub mod toast_queue;
pub mod toast_style;

pub use toast_handlers::{dismiss_toast, enqueue_toast, list_toasts, toast_stream, Toasts};
pub use toast_models::{Toast, ToastCategory, ToastEvent, ToastId};
pub use toast_queue::ToastQueue;
pub use toast_style::ToastStyle;
