use std::collections::HashSet;
use std::sync::OnceLock;

use log::{debug, error};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const VIDEOS_JSON: &str = include_str!("../content/videos.json");

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Shorts,
    Ads,
    Longform,
    Vsl,
}

impl Category {
    /// Tab order in the portfolio section.
    pub const ALL: [Category; 4] = [
        Category::Shorts,
        Category::Ads,
        Category::Longform,
        Category::Vsl,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Shorts => "Vídeos Curtos",
            Category::Ads => "Ads / Anúncios",
            Category::Longform => "Vídeos Longos",
            Category::Vsl => "VSLs",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Category::Shorts => "shorts",
            Category::Ads => "ads",
            Category::Longform => "longform",
            Category::Vsl => "vsl",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoEntry {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    pub video_url: String,
    pub category: Category,
    pub duration: String,
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("video catalog is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("video id {0:?} appears more than once")]
    DuplicateId(String),
    #[error("video at position {0} has an empty id or title")]
    MissingField(usize),
}

/// Decodes and validates a catalog document.
pub fn parse_catalog(json: &str) -> Result<Vec<VideoEntry>, ContentError> {
    let entries: Vec<VideoEntry> = serde_json::from_str(json)?;

    let mut seen = HashSet::with_capacity(entries.len());
    for (position, entry) in entries.iter().enumerate() {
        if entry.id.trim().is_empty() || entry.title.trim().is_empty() {
            return Err(ContentError::MissingField(position));
        }
        if !seen.insert(entry.id.as_str()) {
            return Err(ContentError::DuplicateId(entry.id.clone()));
        }
    }

    Ok(entries)
}

/// The embedded catalog, decoded on first use. A broken catalog degrades to
/// an empty one so the page still renders.
pub fn catalog() -> &'static [VideoEntry] {
    static CATALOG: OnceLock<Vec<VideoEntry>> = OnceLock::new();
    CATALOG.get_or_init(|| match parse_catalog(VIDEOS_JSON) {
        Ok(entries) => {
            debug!("Loaded {} portfolio videos", entries.len());
            entries
        }
        Err(e) => {
            error!("Failed to load portfolio videos: {}", e);
            Vec::new()
        }
    })
}

/// Entries tagged with `category`, in catalog order.
pub fn filter_by_category(entries: &[VideoEntry], category: Category) -> Vec<&VideoEntry> {
    entries.iter().filter(|v| v.category == category).collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SoftwareTool {
    pub name: &'static str,
    pub abbr: &'static str,
    pub color: &'static str,
    pub bg_color: &'static str,
}

pub const SOFTWARE: [SoftwareTool; 4] = [
    SoftwareTool {
        name: "After Effects",
        abbr: "Ae",
        color: "#9999FF",
        bg_color: "rgba(153, 153, 255, 0.15)",
    },
    SoftwareTool {
        name: "Premiere Pro",
        abbr: "Pr",
        color: "#EA77FF",
        bg_color: "rgba(234, 119, 255, 0.15)",
    },
    SoftwareTool {
        name: "Photoshop",
        abbr: "Ps",
        color: "#31A8FF",
        bg_color: "rgba(49, 168, 255, 0.15)",
    },
    SoftwareTool {
        name: "Illustrator",
        abbr: "Ai",
        color: "#FF9A00",
        bg_color: "rgba(255, 154, 0, 0.15)",
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClientLogo {
    pub name: &'static str,
    pub logo: &'static str,
}

// Placeholders until real client logos are available.
pub const CLIENTS: [ClientLogo; 5] = [
    ClientLogo { name: "Cliente 1", logo: "C1" },
    ClientLogo { name: "Cliente 2", logo: "C2" },
    ClientLogo { name: "Cliente 3", logo: "C3" },
    ClientLogo { name: "Cliente 4", logo: "C4" },
    ClientLogo { name: "Cliente 5", logo: "C5" },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink { label: "Instagram", href: "#", icon: "📷" },
    SocialLink { label: "YouTube", href: "#", icon: "▶" },
    SocialLink { label: "LinkedIn", href: "#", icon: "in" },
    SocialLink {
        label: "Email",
        href: "mailto:contato@murilocelestino.com",
        icon: "✉",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, category: Category) -> VideoEntry {
        VideoEntry {
            id: id.to_string(),
            title: format!("Video {}", id),
            thumbnail: "https://example.com/thumb.jpg".to_string(),
            video_url: "#".to_string(),
            category,
            duration: "0:30".to_string(),
        }
    }

    #[test]
    fn embedded_catalog_is_valid() {
        let entries = parse_catalog(VIDEOS_JSON).expect("shipped catalog should decode");
        assert_eq!(entries.len(), 10);
        for category in Category::ALL {
            assert!(
                !filter_by_category(&entries, category).is_empty(),
                "no videos for {:?}",
                category
            );
        }
        assert_eq!(catalog().len(), entries.len());
    }

    #[test]
    fn filter_keeps_only_matching_entries_in_order() {
        let entries = vec![
            entry("a", Category::Ads),
            entry("b", Category::Shorts),
            entry("c", Category::Ads),
            entry("d", Category::Vsl),
            entry("e", Category::Ads),
        ];

        for category in Category::ALL {
            let filtered = filter_by_category(&entries, category);
            assert!(filtered.iter().all(|v| v.category == category));
            let expected: Vec<&str> = entries
                .iter()
                .filter(|v| v.category == category)
                .map(|v| v.id.as_str())
                .collect();
            let actual: Vec<&str> = filtered.iter().map(|v| v.id.as_str()).collect();
            assert_eq!(actual, expected);
        }

        let ads: Vec<&str> = filter_by_category(&entries, Category::Ads)
            .into_iter()
            .map(|v| v.id.as_str())
            .collect();
        assert_eq!(ads, vec!["a", "c", "e"]);
    }

    #[test]
    fn filter_without_matches_is_empty() {
        let entries = vec![entry("a", Category::Shorts), entry("b", Category::Ads)];
        assert!(filter_by_category(&entries, Category::Longform).is_empty());
        assert!(filter_by_category(&[], Category::Vsl).is_empty());
    }

    #[test]
    fn category_uses_lowercase_tags() {
        let json = r#"[{"id":"x","title":"T","thumbnail":"t","videoUrl":"u","category":"longform","duration":"1:00"}]"#;
        let entries = parse_catalog(json).unwrap();
        assert_eq!(entries[0].category, Category::Longform);
        assert_eq!(entries[0].video_url, "u");
        assert_eq!(
            serde_json::to_string(&Category::Vsl).unwrap(),
            format!("\"{}\"", Category::Vsl.slug())
        );
    }

    #[test]
    fn unknown_category_is_rejected() {
        let json = r#"[{"id":"x","title":"T","thumbnail":"t","videoUrl":"u","category":"podcast","duration":"1:00"}]"#;
        assert!(matches!(parse_catalog(json), Err(ContentError::Decode(_))));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = serde_json::to_string(&vec![
            entry("1", Category::Shorts),
            entry("2", Category::Ads),
            entry("1", Category::Vsl),
        ])
        .unwrap();
        match parse_catalog(&json) {
            Err(ContentError::DuplicateId(id)) => assert_eq!(id, "1"),
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut bad = entry("1", Category::Shorts);
        bad.title = "  ".to_string();
        let json = serde_json::to_string(&vec![entry("0", Category::Ads), bad]).unwrap();
        assert!(matches!(parse_catalog(&json), Err(ContentError::MissingField(1))));
    }
}
