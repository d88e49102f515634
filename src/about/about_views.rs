use crate::views::{document, escape, percent_encode};
use crate::news::NewsItem;

use super::{
    about_models::{AboutData, AboutSection, Level, LevelTheme},
    about_service::{AboutPage, AchievementsView},
};

const NILAI_LUHUR: [&str; 4] = ["Amanah", "Fathanah", "Siddiq", "Tabligh"];

const EMPTY_ACHIEVEMENTS: &str = "Belum ada catatan prestasi spesifik untuk jenjang ini.";

pub fn render_about_page(page: &AboutPage) -> String {
    let theme = page.level.theme();

    let content = match page.section {
        Some(AboutSection::VisiMisi) => render_visi_misi(&page.about, page.level, &theme),
        Some(AboutSection::Struktur) => render_struktur(&page.about, &theme),
        Some(AboutSection::Prestasi) => render_achievements(page.level, &AchievementsView::Loading),
        Some(AboutSection::Profil) | None => render_profil(&page.about, page.level, &theme),
    };

    let body = format!(
        r#"<div class="bg-slate-50 min-h-screen">
<header class="{bg} py-16 md:py-24 px-4 text-center relative overflow-hidden">
<div class="max-w-4xl mx-auto relative z-10">
<h1 class="text-3xl md:text-6xl font-black text-white mb-6 leading-tight">{title}</h1>
<p class="text-white/80 text-base md:text-xl font-medium">{subtitle}</p>
</div>
</header>
{nav}
<main class="max-w-7xl mx-auto px-4 py-10 md:py-20">
{content}
</main>
</div>"#,
        bg = theme.bg,
        title = escape(&page.title),
        subtitle = escape(&page.subtitle),
        nav = render_level_nav(page),
        content = content,
    );

    document(&page.title, &body)
}

fn render_level_nav(page: &AboutPage) -> String {
    let slug = page.section.map(|s| s.slug()).unwrap_or("profil");
    let links: String = Level::ALL
        .iter()
        .map(|level| {
            let active = if *level == page.level {
                "bg-slate-900 text-white"
            } else {
                "bg-white text-slate-600"
            };
            format!(
                r#"<a href="/tentang/{slug}?level={code}" class="{active} px-4 py-2 rounded-full text-xs font-black">{code}</a>"#,
                slug = slug,
                code = level.code(),
                active = active,
            )
        })
        .collect();

    format!(
        r#"<nav class="flex flex-wrap justify-center gap-2 pt-8">{}</nav>"#,
        links
    )
}

fn render_visi_misi(about: &AboutData, level: Level, theme: &LevelTheme) -> String {
    let heading = if level.is_general() {
        "Visi Yayasan".to_string()
    } else {
        format!("Visi {}", level)
    };

    let misi: String = about
        .misi
        .iter()
        .enumerate()
        .map(|(idx, m)| {
            format!(
                r#"<li class="flex gap-6"><span class="flex-shrink-0 w-10 h-10 rounded-2xl {bg} text-white flex items-center justify-center font-black text-sm shadow-lg">{n:02}</span><p class="text-slate-600 font-medium leading-relaxed">{text}</p></li>"#,
                bg = theme.bg,
                n = idx + 1,
                text = escape(m),
            )
        })
        .collect();

    let values: String = NILAI_LUHUR
        .iter()
        .map(|value| {
            format!(
                r#"<div class="bg-white/10 p-4 md:p-6 rounded-2xl border border-white/20"><p class="font-black text-lg md:text-xl mb-1">{}</p></div>"#,
                value
            )
        })
        .collect();

    format!(
        r#"<div class="space-y-16">
<section class="{bg} p-6 md:p-20 rounded-[4rem] text-white text-center shadow-2xl">
<h2 class="text-xl md:text-2xl font-black uppercase tracking-[0.4em] mb-6 text-islamic-gold-500/80">{heading}</h2>
<p class="text-2xl md:text-5xl leading-tight font-black">&quot;{visi}&quot;</p>
</section>
<div class="grid grid-cols-1 md:grid-cols-2 gap-8 md:gap-10">
<section class="bg-white p-6 md:p-12 rounded-[2.5rem] shadow-xl">
<h3 class="text-3xl font-black text-slate-900 mb-8">Misi Strategis</h3>
<ul class="space-y-8">{misi}</ul>
</section>
<section class="bg-islamic-gold-500 p-6 md:p-12 rounded-[2.5rem] text-white shadow-xl">
<h3 class="text-3xl font-black mb-8">Nilai-Nilai Luhur</h3>
<div class="grid grid-cols-2 gap-4">{values}</div>
</section>
</div>
</div>"#,
        bg = theme.bg,
        heading = escape(&heading),
        visi = escape(&about.visi),
        misi = misi,
        values = values,
    )
}

fn render_profil(about: &AboutData, level: Level, theme: &LevelTheme) -> String {
    let (badge, headline) = if level.is_general() {
        (
            "Sejarah Yayasan".to_string(),
            "Membangun Peradaban".to_string(),
        )
    } else {
        (
            format!("Profil Lengkap {}", level),
            format!("Mencetak Generasi {}", level),
        )
    };

    format!(
        r#"<div class="flex flex-col md:flex-row gap-10 md:gap-16 items-center">
<div class="md:w-1/2">
<div class="inline-flex items-center gap-2 bg-slate-50 {text} px-4 py-2 rounded-full text-xs font-black tracking-widest uppercase mb-6">{badge}</div>
<h2 class="text-3xl md:text-4xl font-black text-slate-900 mb-6 leading-tight">{headline} Melalui <span class="{text}">Pendidikan Qurani</span>.</h2>
<p class="text-slate-600 leading-relaxed text-base md:text-lg mb-8">{history}</p>
<div class="space-y-6">
<div class="flex items-center gap-6 bg-white p-6 rounded-[2rem] shadow-xl"><div class="{bg} p-4 rounded-2xl text-white"><i data-lucide="award"></i></div><div><p class="font-black text-slate-800 text-lg">Terakreditasi A Unggul</p><p class="text-sm text-slate-500">Sertifikasi kualitas nasional tingkat tertinggi.</p></div></div>
<div class="flex items-center gap-6 bg-white p-6 rounded-[2rem] shadow-xl"><div class="bg-islamic-gold-500 p-4 rounded-2xl text-white"><i data-lucide="heart"></i></div><div><p class="font-black text-slate-800 text-lg">Lingkungan Berbasis Akhlak</p><p class="text-sm text-slate-500">Pembinaan karakter harian dalam ekosistem islami.</p></div></div>
</div>
</div>
<div class="md:w-1/2 w-full">
<img src="{image}" alt="Profile" class="w-full h-full object-cover min-h-[300px] md:min-h-[500px] rounded-[2.5rem] md:rounded-[4rem] shadow-2xl">
</div>
</div>"#,
        text = theme.text,
        bg = theme.bg,
        badge = escape(&badge),
        headline = escape(&headline),
        history = escape(&about.history),
        image = escape(&about.image_url),
    )
}

fn render_struktur(about: &AboutData, theme: &LevelTheme) -> String {
    let struktur = &about.struktur;

    let staff: String = struktur
        .staff
        .iter()
        .map(|entry| {
            format!(
                r#"<div class="bg-white p-6 md:p-8 rounded-[2rem] shadow-xl border border-slate-100"><p class="text-[10px] uppercase font-black {text} tracking-widest mb-2">{role}</p><p class="font-bold text-slate-800 leading-tight">{name}</p></div>"#,
                text = theme.text,
                role = escape(&entry.role),
                name = escape(&entry.name),
            )
        })
        .collect();

    let groups: String = struktur
        .groups
        .iter()
        .map(|group| {
            let members: String = group
                .members
                .iter()
                .map(|member| {
                    let role = if member.role.is_empty() {
                        String::new()
                    } else {
                        format!(
                            r#"<p class="font-black text-xs text-slate-400 mb-2 uppercase tracking-wide">{}</p>"#,
                            escape(&member.role)
                        )
                    };
                    format!(
                        r#"<div class="bg-slate-50 p-6 rounded-3xl border border-slate-100">{role}<p class="font-bold text-slate-800 text-sm">{name}</p></div>"#,
                        role = role,
                        name = escape(&member.name),
                    )
                })
                .collect();

            format!(
                r#"<section class="max-w-6xl mx-auto"><h3 class="text-xl md:text-2xl font-black text-slate-800 mb-10">{title}</h3><div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-4 gap-6">{members}</div></section>"#,
                title = escape(&group.title),
                members = members,
            )
        })
        .collect();

    format!(
        r#"<div class="space-y-24 text-center">
<h2 class="text-3xl md:text-4xl font-black text-slate-900 mb-10 md:mb-20">Struktur Organisasi</h2>
<section class="max-w-sm mx-auto">
<div class="{bg} text-white p-8 md:p-10 rounded-[2.5rem] shadow-2xl">
<p class="text-[10px] uppercase font-black text-islamic-gold-500 tracking-widest mb-2">{pimpinan}</p>
<p class="text-xl md:text-2xl font-black leading-tight">{nama}</p>
</div>
</section>
<section class="max-w-5xl mx-auto grid grid-cols-1 md:grid-cols-3 gap-6">{staff}</section>
{groups}
</div>"#,
        bg = theme.bg,
        pimpinan = escape(&struktur.pimpinan),
        nama = escape(&struktur.nama),
        staff = staff,
        groups = groups,
    )
}

/// Achievements section. While loading, the page embeds a loader that swaps
/// in the list fragment and aborts the request if the page goes away.
pub fn render_achievements(level: Level, view: &AchievementsView) -> String {
    match view {
        AchievementsView::Loading => format!(
            r#"<div id="prestasi" data-src="/tentang/prestasi/items?level={code}">
<div class="flex justify-center py-20"><div class="flex items-center gap-3 text-slate-400"><i data-lucide="loader-2" class="w-6 h-6 animate-spin"></i><span class="font-medium">Memuat data prestasi...</span></div></div>
</div>
<template id="prestasi-empty">{empty}</template>
<script>
(() => {{
  const el = document.getElementById('prestasi');
  const ctrl = new AbortController();
  const show = (html) => {{ if (el.isConnected) {{ el.innerHTML = html; lucide.createIcons(); }} }};
  window.addEventListener('pagehide', () => ctrl.abort(), {{ once: true }});
  fetch(el.dataset.src, {{ signal: ctrl.signal }})
    .then((r) => (r.ok ? r.text() : Promise.reject(new Error(`HTTP ${{r.status}}`))))
    .then(show)
    .catch((err) => {{
      if (err.name !== 'AbortError') show(document.getElementById('prestasi-empty').innerHTML);
    }});
}})();
</script>"#,
            code = level.code(),
            empty = render_empty_achievements(),
        ),
        AchievementsView::Empty => render_empty_achievements(),
        AchievementsView::Items(items) => {
            let theme = level.theme();
            let cards: String = items.iter().map(|item| render_achievement_card(item, &theme)).collect();
            format!(
                r#"<div class="grid grid-cols-1 md:grid-cols-2 gap-8 md:gap-10">{}</div>"#,
                cards
            )
        }
    }
}

fn render_empty_achievements() -> String {
    format!(
        r#"<div class="text-center py-32 bg-slate-50 rounded-[3rem] border-2 border-dashed border-slate-200"><i data-lucide="award" class="w-16 h-16 text-slate-200 mx-auto mb-4"></i><p class="text-slate-400 font-bold">{}</p></div>"#,
        EMPTY_ACHIEVEMENTS
    )
}

fn render_achievement_card(item: &NewsItem, theme: &LevelTheme) -> String {
    let badge = if item.is_international() {
        "bg-islamic-gold-500 text-white".to_string()
    } else {
        format!("{} text-white", theme.bg)
    };

    format!(
        r#"<a href="/berita/{id}" class="bg-white p-8 md:p-12 rounded-[2.5rem] shadow-xl border border-slate-50 hover:shadow-2xl transition-all flex flex-col group">
<div class="flex justify-between items-start mb-8">
<div class="px-4 py-1.5 rounded-full text-[9px] md:text-[10px] font-black uppercase tracking-widest shadow-lg {badge}">Tingkat {tier}</div>
<span class="{text} font-black text-lg md:text-xl italic">{year}</span>
</div>
<h3 class="text-2xl md:text-3xl font-black text-slate-900 mb-6 leading-tight">{title}</h3>
<p class="text-slate-500 leading-relaxed font-medium mb-8 flex-grow text-sm md:text-base">{excerpt}</p>
</a>"#,
        id = escape(&percent_encode(&item.id.to_string(), b"")),
        badge = badge,
        tier = escape(item.tier()),
        text = theme.text,
        year = escape(item.year()),
        title = escape(&item.title),
        excerpt = escape(&item.excerpt),
    )
}
