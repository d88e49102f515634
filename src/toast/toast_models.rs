use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ToastCategory {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl ToastCategory {
    pub const ALL: [ToastCategory; 4] = [
        ToastCategory::Success,
        ToastCategory::Error,
        ToastCategory::Warning,
        ToastCategory::Info,
    ];
}

impl fmt::Display for ToastCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ToastCategory::Success => write!(f, "success"),
            ToastCategory::Error => write!(f, "error"),
            ToastCategory::Warning => write!(f, "warning"),
            ToastCategory::Info => write!(f, "info"),
        }
    }
}

/// Opaque toast identifier. Viewers only ever hand it back to dismiss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct ToastId(Uuid);

impl ToastId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<Uuid> for ToastId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub category: ToastCategory,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToastEvent {
    Added { toast: Toast },
    Dismissed { id: ToastId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_display() {
        assert_eq!(ToastCategory::Success.to_string(), "success");
        assert_eq!(ToastCategory::Error.to_string(), "error");
        assert_eq!(ToastCategory::Warning.to_string(), "warning");
        assert_eq!(ToastCategory::Info.to_string(), "info");
    }

    #[test]
    fn test_category_defaults_to_info() {
        assert_eq!(ToastCategory::default(), ToastCategory::Info);
    }

    #[test]
    fn test_event_wire_shape() {
        let id = ToastId::from(Uuid::nil());
        let json = serde_json::to_value(ToastEvent::Dismissed { id }).unwrap();
        assert_eq!(json["type"], "dismissed");
        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
    }
}
