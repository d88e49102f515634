use serde::de::DeserializeOwned;

use super::about_models::{AboutData, Struktur};

pub const ABOUT_VISI: &str = "VITE_ABOUT_VISI";
pub const ABOUT_HISTORY: &str = "VITE_ABOUT_HISTORY";
pub const ABOUT_MISI: &str = "VITE_ABOUT_MISI";
pub const ABOUT_STRUKTUR: &str = "VITE_ABOUT_STRUKTUR";
pub const ABOUT_IMAGE: &str = "VITE_ABOUT_IMAGE";

/// Build the about content from configuration values. Malformed JSON values
/// are logged and replaced by their defaults; this never fails.
pub fn load_about_data<F>(lookup: F) -> AboutData
where
    F: Fn(&str) -> Option<String>,
{
    AboutData {
        visi: lookup(ABOUT_VISI).unwrap_or_default(),
        history: lookup(ABOUT_HISTORY).unwrap_or_default(),
        misi: parse_or_default(ABOUT_MISI, lookup(ABOUT_MISI).as_deref()),
        struktur: parse_or_default::<Struktur>(ABOUT_STRUKTUR, lookup(ABOUT_STRUKTUR).as_deref()),
        image_url: lookup(ABOUT_IMAGE).unwrap_or_default(),
    }
}

fn parse_or_default<T>(key: &str, raw: Option<&str>) -> T
where
    T: DeserializeOwned + Default,
{
    let Some(raw) = raw.filter(|raw| !raw.trim().is_empty()) else {
        return T::default();
    };

    match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::error!("Error parsing {}: {}", key, e);
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::about::about_models::StaffEntry;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_misi_parsed_from_json_array() {
        let about = load_about_data(lookup_from(&[(ABOUT_MISI, r#"["a","b"]"#)]));
        assert_eq!(about.misi, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_malformed_misi_defaults_to_empty() {
        let about = load_about_data(lookup_from(&[(ABOUT_MISI, "{bad json")]));
        assert!(about.misi.is_empty());
    }

    #[test]
    fn test_misi_of_wrong_shape_defaults_to_empty() {
        let about = load_about_data(lookup_from(&[(ABOUT_MISI, r#"{"a": 1}"#)]));
        assert!(about.misi.is_empty());
    }

    #[test]
    fn test_struktur_parsed() {
        let about = load_about_data(lookup_from(&[(
            ABOUT_STRUKTUR,
            r#"{"pimpinan":"Ketua","nama":"Dr. Farhan","staff":[{"role":"BAAK","name":"Fita"}]}"#,
        )]));
        assert_eq!(about.struktur.pimpinan, "Ketua");
        assert_eq!(about.struktur.nama, "Dr. Farhan");
        assert_eq!(
            about.struktur.staff,
            vec![StaffEntry {
                role: "BAAK".into(),
                name: "Fita".into()
            }]
        );
    }

    #[test]
    fn test_malformed_struktur_uses_placeholder() {
        let about = load_about_data(lookup_from(&[(ABOUT_STRUKTUR, "{bad json")]));
        assert_eq!(about.struktur, Struktur::default());
        assert_eq!(about.struktur.pimpinan, "Pimpinan");
        assert_eq!(about.struktur.nama, "-");
    }

    #[test]
    fn test_missing_values_default() {
        let about = load_about_data(lookup_from(&[]));
        assert_eq!(about, AboutData::default());
    }

    #[test]
    fn test_plain_strings_copied() {
        let about = load_about_data(lookup_from(&[
            (ABOUT_VISI, "Unggul dalam iman"),
            (ABOUT_HISTORY, "Berdiri sejak 1990"),
            (ABOUT_IMAGE, "https://example.org/foto.jpg"),
        ]));
        assert_eq!(about.visi, "Unggul dalam iman");
        assert_eq!(about.history, "Berdiri sejak 1990");
        assert_eq!(about.image_url, "https://example.org/foto.jpg");
    }
}
