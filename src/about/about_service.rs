use std::sync::Arc;

use crate::news::{NewsItem, NewsSource};

use super::about_models::{AboutData, AboutSection, Level};

/// News category holding achievements. Matched exactly against the feed.
pub const PRESTASI_CATEGORY: &str = "Prestasi";

/// View state of the achievements list.
#[derive(Debug, Clone, PartialEq)]
pub enum AchievementsView {
    Loading,
    Empty,
    Items(Vec<NewsItem>),
}

impl AchievementsView {
    pub fn from_items(items: Vec<NewsItem>) -> Self {
        if items.is_empty() {
            AchievementsView::Empty
        } else {
            AchievementsView::Items(items)
        }
    }
}

/// Everything needed to render one about page.
#[derive(Debug, Clone)]
pub struct AboutPage {
    pub level: Level,
    pub section: Option<AboutSection>,
    pub title: String,
    pub subtitle: String,
    pub about: Arc<AboutData>,
}

/// Composes about pages from configured content and the news feed.
#[derive(Clone)]
pub struct AboutService {
    about: Arc<AboutData>,
    news: Arc<dyn NewsSource>,
}

impl AboutService {
    pub fn new(about: AboutData, news: Arc<dyn NewsSource>) -> Self {
        Self {
            about: Arc::new(about),
            news,
        }
    }

    pub fn about(&self) -> Arc<AboutData> {
        self.about.clone()
    }

    pub fn compose(&self, slug: &str, level: Level) -> AboutPage {
        let section = AboutSection::from_slug(slug);

        AboutPage {
            level,
            section,
            title: page_title(section, level),
            subtitle: page_subtitle(level),
            about: self.about.clone(),
        }
    }

    /// Achievements for the level. A failing feed degrades to an empty list.
    pub async fn achievements(&self, level: Level) -> Vec<NewsItem> {
        match self.news.fetch_by_category(PRESTASI_CATEGORY).await {
            Ok(items) => filter_by_level(items, level),
            Err(e) => {
                tracing::error!("Failed to load prestasi data: {}", e);
                Vec::new()
            }
        }
    }
}

/// Keep items whose `jenjang` is exactly the level code; the general level
/// keeps everything.
pub fn filter_by_level(items: Vec<NewsItem>, level: Level) -> Vec<NewsItem> {
    if level.is_general() {
        return items;
    }

    items
        .into_iter()
        .filter(|item| item.jenjang == level.code())
        .collect()
}

pub fn page_title(section: Option<AboutSection>, level: Level) -> String {
    let context = level.context_label();

    match section {
        Some(AboutSection::VisiMisi) => format!("Visi & Misi {}", context),
        Some(AboutSection::Profil) => format!("Profil Lengkap {}", context),
        Some(AboutSection::Struktur) => format!("Manajemen {}", context),
        Some(AboutSection::Prestasi) => format!("Capaian Juara {}", context),
        None => format!("Tentang {}", context),
    }
}

pub fn page_subtitle(level: Level) -> String {
    if level.is_general() {
        "Berkhidmat untuk kemajuan pendidikan bangsa berbasis nilai Qurani".to_string()
    } else {
        format!(
            "Mewujudkan keunggulan pendidikan pada jenjang {}",
            level.theme().kind
        )
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::{AppError, Result};
    use crate::news::NewsId;
    use async_trait::async_trait;
    use std::sync::Mutex;

    pub(crate) struct StaticNews {
        pub items: Vec<NewsItem>,
        pub fail: bool,
        pub requested: Mutex<Vec<String>>,
    }

    impl StaticNews {
        pub(crate) fn with(items: Vec<NewsItem>) -> Self {
            Self {
                items,
                fail: false,
                requested: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn failing() -> Self {
            Self {
                items: Vec::new(),
                fail: true,
                requested: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl NewsSource for StaticNews {
        async fn fetch_by_category(&self, category: &str) -> Result<Vec<NewsItem>> {
            self.requested.lock().unwrap().push(category.to_string());
            if self.fail {
                return Err(AppError::Upstream("connection refused".into()));
            }
            Ok(self.items.clone())
        }
    }

    pub(crate) fn item(id: i64, jenjang: &str) -> NewsItem {
        NewsItem {
            id: NewsId::Number(id),
            title: format!("Juara {}", id),
            excerpt: "Lomba tahfidz tingkat kota".to_string(),
            date: "12 Mei 2024".to_string(),
            level: None,
            jenjang: jenjang.to_string(),
            category: PRESTASI_CATEGORY.to_string(),
        }
    }

    #[test]
    fn test_filter_keeps_matching_level() {
        let filtered = filter_by_level(vec![item(1, "SD"), item(2, "SMP")], Level::Sd);
        assert_eq!(filtered, vec![item(1, "SD")]);
    }

    #[test]
    fn test_filter_general_passes_everything() {
        let items = vec![item(1, "SD"), item(2, "SMP")];
        assert_eq!(filter_by_level(items.clone(), Level::Umum), items);
    }

    #[test]
    fn test_filter_is_exact_match() {
        let filtered = filter_by_level(vec![item(1, "sd"), item(2, " SD")], Level::Sd);
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_titles() {
        assert_eq!(
            page_title(Some(AboutSection::VisiMisi), Level::Umum),
            "Visi & Misi Yayasan"
        );
        assert_eq!(page_title(Some(AboutSection::Struktur), Level::Smp), "Manajemen SMP");
        assert_eq!(
            page_title(Some(AboutSection::Prestasi), Level::Sd),
            "Capaian Juara SD"
        );
        assert_eq!(page_title(None, Level::Sd), "Tentang SD");
    }

    #[test]
    fn test_compose_unknown_slug() {
        let service = AboutService::new(AboutData::default(), Arc::new(StaticNews::with(vec![])));
        let page = service.compose("sejarah", Level::Umum);
        assert_eq!(page.section, None);
        assert_eq!(page.title, "Tentang Yayasan");
    }

    #[tokio::test]
    async fn test_achievements_fetches_prestasi_and_filters() {
        let news = Arc::new(StaticNews::with(vec![item(1, "SD"), item(2, "SMP")]));
        let service = AboutService::new(AboutData::default(), news.clone());

        let items = service.achievements(Level::Smp).await;
        assert_eq!(items, vec![item(2, "SMP")]);
        assert_eq!(*news.requested.lock().unwrap(), vec!["Prestasi".to_string()]);
    }

    #[tokio::test]
    async fn test_achievements_failure_degrades_to_empty() {
        let service = AboutService::new(AboutData::default(), Arc::new(StaticNews::failing()));
        assert!(service.achievements(Level::Umum).await.is_empty());
    }

    #[test]
    fn test_view_from_items() {
        assert_eq!(AchievementsView::from_items(vec![]), AchievementsView::Empty);
        assert!(matches!(
            AchievementsView::from_items(vec![item(1, "SD")]),
            AchievementsView::Items(_)
        ));
    }
}
