use crate::toast::{Toast, ToastCategory, ToastStyle};

use super::escape;

/// Fixed top-right stack of toasts, oldest first, each with a dismiss button.
///
/// One blank `<template>` per category follows the stack, so toasts that
/// arrive over the live feed get the same markup as server-rendered ones.
pub fn render_toast_container(toasts: &[Toast]) -> String {
    let items: String = toasts.iter().map(render_toast).collect();
    let templates: String = ToastCategory::ALL
        .iter()
        .map(|category| {
            format!(
                r#"<template data-toast-template="{}">{}</template>"#,
                category,
                toast_markup("", *category, "")
            )
        })
        .collect();

    format!(
        r#"<div id="toasts" class="fixed top-4 right-4 z-[9999] space-y-3 pointer-events-none">{}</div>{}"#,
        items, templates
    )
}

fn render_toast(toast: &Toast) -> String {
    toast_markup(&toast.id.to_string(), toast.category, &escape(&toast.message))
}

fn toast_markup(id: &str, category: ToastCategory, message: &str) -> String {
    let style = ToastStyle::for_category(category);

    format!(
        r#"<div class="{bg} text-white px-6 py-4 rounded-2xl shadow-2xl flex items-center gap-4 min-w-[320px] max-w-md pointer-events-auto animate-slideInRight" data-toast-id="{id}" data-category="{category}">
<i data-lucide="{icon}" class="w-6 h-6 flex-shrink-0 {icon_color}"></i>
<p class="flex-1 font-bold text-sm leading-relaxed">{message}</p>
<button type="button" data-dismiss="{id}" class="p-1 hover:bg-white/20 rounded-lg transition-colors flex-shrink-0" aria-label="Tutup">&times;</button>
</div>"#,
        bg = style.background,
        id = id,
        category = category,
        icon = style.icon,
        icon_color = style.icon_color,
        message = message,
    )
}
