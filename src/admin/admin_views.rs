use crate::{
    toast::Toast,
    views::{document, escape, render_toast_container},
};

const NAV_ITEMS: [(&str, &str, &str); 2] = [
    ("/admin", "layout-dashboard", "Dashboard"),
    ("/tentang/profil", "globe", "Lihat Situs"),
];

// Keeps the stack in sync with the live feed. Clicking a toast dismisses it.
const TOAST_SCRIPT: &str = r#"<script>
(() => {
  const stack = document.getElementById('toasts');
  const find = (id) => stack.querySelector(`[data-toast-id="${id}"]`);
  const drop = (id) => find(id)?.remove();
  const add = (toast) => {
    const template = document.querySelector(`template[data-toast-template="${toast.category}"]`);
    if (!template || find(toast.id)) return;
    const node = template.content.firstElementChild.cloneNode(true);
    node.dataset.toastId = toast.id;
    node.querySelector('[data-dismiss]').dataset.dismiss = toast.id;
    node.querySelector('p').textContent = toast.message;
    stack.appendChild(node);
    window.lucide?.createIcons();
  };
  stack.addEventListener('click', (e) => {
    const id = e.target.closest('[data-dismiss]')?.dataset.dismiss;
    if (id) fetch(`/admin/toasts/${id}`, { method: 'DELETE' }).then(() => drop(id));
  });
  const feed = new EventSource('/admin/toasts/stream');
  feed.onmessage = (e) => {
    const event = JSON.parse(e.data);
    if (event.type === 'added') add(event.toast);
    if (event.type === 'dismissed') drop(event.id);
  };
})();
</script>"#;

/// Admin chrome: mobile top bar with a menu toggle, an overlay, the
/// sidebar, the content slot and the toast stack.
pub fn render_admin_layout(title: &str, current_path: &str, content: &str, toasts: &[Toast]) -> String {
    let nav: String = NAV_ITEMS
        .iter()
        .map(|(href, icon, label)| {
            let active = if *href == current_path {
                "bg-slate-900 text-white"
            } else {
                "text-slate-600 hover:bg-slate-100"
            };
            format!(
                r#"<a href="{href}" class="{active} flex items-center gap-3 px-4 py-3 rounded-xl font-bold"><i data-lucide="{icon}" class="w-5 h-5"></i>{label}</a>"#,
                href = href,
                active = active,
                icon = icon,
                label = label,
            )
        })
        .collect();

    let body = format!(
        r#"<div class="min-h-screen bg-slate-50 flex">
<input type="checkbox" id="sidebar-toggle" class="peer hidden">
<div class="lg:hidden fixed top-0 left-0 right-0 h-16 bg-white border-b border-slate-200 flex items-center justify-between px-4 z-50">
<div class="flex items-center gap-3">
<label for="sidebar-toggle" class="p-2 rounded-xl bg-slate-100 text-slate-900 hover:bg-slate-200 transition-all cursor-pointer"><i data-lucide="menu" class="w-6 h-6"></i></label>
<h1 class="font-black text-lg text-slate-900">Admin Panel</h1>
</div>
</div>
<label for="sidebar-toggle" class="hidden peer-checked:block lg:!hidden fixed inset-0 bg-black/50 z-40"></label>
<aside class="fixed inset-y-0 left-0 w-64 bg-white border-r border-slate-200 z-50 -translate-x-full peer-checked:translate-x-0 lg:translate-x-0 transition-transform">
<div class="p-6 font-black text-xl text-slate-900">Admin Panel</div>
<nav class="px-4 space-y-1">{nav}</nav>
</aside>
<div class="flex-1 lg:ml-64 min-h-screen flex flex-col pt-16 lg:pt-0">
{content}
</div>
</div>
{toasts}
{script}"#,
        nav = nav,
        content = content,
        toasts = render_toast_container(toasts),
        script = TOAST_SCRIPT,
    );

    document(title, &body)
}

pub fn render_dashboard(active_toasts: usize) -> String {
    format!(
        r#"<main class="p-6 lg:p-10 space-y-6">
<h2 class="text-3xl font-black text-slate-900">Dashboard</h2>
<div class="bg-white p-6 rounded-[2rem] shadow-xl border border-slate-100 max-w-sm">
<p class="text-xs font-black uppercase tracking-widest text-slate-400 mb-2">Notifikasi aktif</p>
<p class="text-4xl font-black text-slate-900">{}</p>
</div>
</main>"#,
        active_toasts
    )
}

pub fn render_login(action: &str, from: &str) -> String {
    let body = format!(
        r#"<div class="min-h-screen bg-slate-50 flex items-center justify-center px-4">
<form method="post" action="{action}" class="bg-white p-10 rounded-[2.5rem] shadow-2xl w-full max-w-md space-y-6">
<h1 class="text-3xl font-black text-slate-900">Masuk Admin</h1>
<input type="hidden" name="from" value="{from}">
<input type="text" name="username" placeholder="Username" class="w-full px-4 py-3 rounded-xl border border-slate-200" required>
<input type="password" name="password" placeholder="Password" class="w-full px-4 py-3 rounded-xl border border-slate-200" required>
<button type="submit" class="w-full bg-slate-900 text-white font-black py-3 rounded-xl">Masuk</button>
</form>
</div>"#,
        action = escape(action),
        from = escape(from),
    );

    document("Masuk Admin", &body)
}
