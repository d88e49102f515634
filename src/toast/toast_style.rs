use super::toast_models::ToastCategory;

/// Visual treatment of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastStyle {
    pub background: &'static str,
    pub icon: &'static str,
    pub icon_color: &'static str,
}

impl ToastStyle {
    pub const fn for_category(category: ToastCategory) -> Self {
        match category {
            ToastCategory::Success => Self {
                background: "bg-gradient-to-r from-green-500 to-emerald-600",
                icon: "check-circle",
                icon_color: "text-white",
            },
            ToastCategory::Error => Self {
                background: "bg-gradient-to-r from-red-500 to-rose-600",
                icon: "x-circle",
                icon_color: "text-white",
            },
            ToastCategory::Warning => Self {
                background: "bg-gradient-to-r from-amber-500 to-orange-600",
                icon: "alert-circle",
                icon_color: "text-white",
            },
            ToastCategory::Info => Self {
                background: "bg-gradient-to-r from-blue-500 to-indigo-600",
                icon: "info",
                icon_color: "text-white",
            },
        }
    }
}
