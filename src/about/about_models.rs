use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

use crate::error::AppError;

/// Educational tier the site is currently showing. `Umum` is the
/// foundation-wide view and means "no level filter".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    #[default]
    Umum,
    Tk,
    Sd,
    Smp,
    Sma,
    Pt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelTheme {
    pub bg: &'static str,
    pub text: &'static str,
    pub kind: &'static str,
}

impl Level {
    pub const ALL: [Level; 6] = [
        Level::Umum,
        Level::Tk,
        Level::Sd,
        Level::Smp,
        Level::Sma,
        Level::Pt,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Level::Umum => "UMUM",
            Level::Tk => "TK",
            Level::Sd => "SD",
            Level::Smp => "SMP",
            Level::Sma => "SMA",
            Level::Pt => "PT",
        }
    }

    pub fn is_general(&self) -> bool {
        matches!(self, Level::Umum)
    }

    /// "Yayasan" for the foundation view, otherwise the level code.
    pub fn context_label(&self) -> &'static str {
        if self.is_general() {
            "Yayasan"
        } else {
            self.code()
        }
    }

    pub fn theme(&self) -> LevelTheme {
        match self {
            Level::Umum => LevelTheme {
                bg: "bg-slate-900",
                text: "text-slate-900",
                kind: "Yayasan",
            },
            Level::Tk => LevelTheme {
                bg: "bg-pink-600",
                text: "text-pink-600",
                kind: "Taman Kanak-Kanak",
            },
            Level::Sd => LevelTheme {
                bg: "bg-islamic-green-700",
                text: "text-islamic-green-700",
                kind: "Sekolah Dasar",
            },
            Level::Smp => LevelTheme {
                bg: "bg-blue-700",
                text: "text-blue-700",
                kind: "Sekolah Menengah Pertama",
            },
            Level::Sma => LevelTheme {
                bg: "bg-indigo-800",
                text: "text-indigo-800",
                kind: "Sekolah Menengah Atas",
            },
            Level::Pt => LevelTheme {
                bg: "bg-emerald-800",
                text: "text-emerald-800",
                kind: "Perguruan Tinggi",
            },
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Level {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|level| level.code() == s)
            .ok_or_else(|| AppError::Validation(format!("Unknown level: {}", s)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct StaffEntry {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub name: String,
}

/// A titled block of the organisational chart, e.g. "Dewan Senat".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct StructureGroup {
    pub title: String,
    #[serde(default)]
    pub members: Vec<StaffEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Struktur {
    /// Title of the leader position.
    #[serde(default = "default_pimpinan")]
    pub pimpinan: String,
    #[serde(default = "default_nama")]
    pub nama: String,
    #[serde(default)]
    pub staff: Vec<StaffEntry>,
    #[serde(default)]
    pub groups: Vec<StructureGroup>,
}

fn default_pimpinan() -> String {
    "Pimpinan".to_string()
}

fn default_nama() -> String {
    "-".to_string()
}

impl Default for Struktur {
    fn default() -> Self {
        Self {
            pimpinan: default_pimpinan(),
            nama: default_nama(),
            staff: Vec::new(),
            groups: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct AboutData {
    pub visi: String,
    pub history: String,
    pub misi: Vec<String>,
    pub struktur: Struktur,
    pub image_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AboutSection {
    VisiMisi,
    Profil,
    Struktur,
    Prestasi,
}

impl AboutSection {
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "visi-misi" => Some(AboutSection::VisiMisi),
            "profil" => Some(AboutSection::Profil),
            "struktur" => Some(AboutSection::Struktur),
            "prestasi" => Some(AboutSection::Prestasi),
            _ => None,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            AboutSection::VisiMisi => "visi-misi",
            AboutSection::Profil => "profil",
            AboutSection::Struktur => "struktur",
            AboutSection::Prestasi => "prestasi",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_parse() {
        assert_eq!("SD".parse::<Level>().unwrap(), Level::Sd);
        assert_eq!("UMUM".parse::<Level>().unwrap(), Level::Umum);
        assert!(matches!("sd".parse::<Level>(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_level_serde_uses_codes() {
        assert_eq!(serde_json::to_string(&Level::Smp).unwrap(), "\"SMP\"");
        assert_eq!(serde_json::from_str::<Level>("\"PT\"").unwrap(), Level::Pt);
    }

    #[test]
    fn test_context_label() {
        assert_eq!(Level::Umum.context_label(), "Yayasan");
        assert_eq!(Level::Sma.context_label(), "SMA");
    }

    #[test]
    fn test_section_slugs() {
        for section in [
            AboutSection::VisiMisi,
            AboutSection::Profil,
            AboutSection::Struktur,
            AboutSection::Prestasi,
        ] {
            assert_eq!(AboutSection::from_slug(section.slug()), Some(section));
        }
        assert_eq!(AboutSection::from_slug("sejarah"), None);
    }

    #[test]
    fn test_struktur_missing_fields_default() {
        let struktur: Struktur = serde_json::from_str(r#"{"nama": "Dr. Farhan"}"#).unwrap();
        assert_eq!(struktur.pimpinan, "Pimpinan");
        assert_eq!(struktur.nama, "Dr. Farhan");
        assert!(struktur.staff.is_empty());
    }
}
