//! Marker glyph lookup table
//!
//! The catalog tags each server with emoji glyphs. Every glyph maps to
//! exactly one tag; a description may carry any number of them.

use crate::catalog::types::{HostingType, Platform};

/// Emoji variation selector, often appended to the glyphs below
const VARIATION_SELECTOR: char = '\u{FE0F}';

/// Semantic meaning of a marker glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Language(&'static str),
    Hosting(HostingType),
    Platform(Platform),
}

/// One row of the lookup table
#[derive(Debug, Clone, Copy)]
pub struct Marker {
    /// Accepted spellings, longest first so removal never leaves a fragment
    pub glyphs: &'static [&'static str],
    pub tag: Tag,
}

pub const MARKERS: &[Marker] = &[
    Marker { glyphs: &["\u{1F40D}"], tag: Tag::Language("Python") },
    Marker { glyphs: &["\u{1F4C7}"], tag: Tag::Language("TypeScript/JavaScript") },
    Marker { glyphs: &["\u{1F3CE}\u{FE0F}", "\u{1F3CE}"], tag: Tag::Language("Go") },
    Marker { glyphs: &["\u{1F980}"], tag: Tag::Language("Rust") },
    Marker { glyphs: &["#\u{FE0F}\u{20E3}", "#\u{20E3}"], tag: Tag::Language("C#") },
    Marker { glyphs: &["\u{2615}"], tag: Tag::Language("Java") },
    Marker { glyphs: &["\u{2601}\u{FE0F}", "\u{2601}"], tag: Tag::Hosting(HostingType::Cloud) },
    Marker { glyphs: &["\u{1F3E0}"], tag: Tag::Hosting(HostingType::Local) },
    Marker { glyphs: &["\u{1F34E}"], tag: Tag::Platform(Platform::MacOs) },
    Marker { glyphs: &["\u{1FA9F}"], tag: Tag::Platform(Platform::Windows) },
    Marker { glyphs: &["\u{1F427}"], tag: Tag::Platform(Platform::Linux) },
];

/// Tags found in one description, in table order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetectedTags {
    pub languages: Vec<String>,
    pub hosting_types: Vec<HostingType>,
    pub platforms: Vec<Platform>,
}

impl Marker {
    /// Check whether any spelling of this marker occurs in `text`
    pub fn is_present(&self, text: &str) -> bool {
        self.glyphs.iter().any(|glyph| text.contains(glyph))
    }
}

/// Collect the tags of every marker present in `text`
pub fn detect_tags(text: &str) -> DetectedTags {
    let mut tags = DetectedTags::default();

    for marker in MARKERS.iter().filter(|m| m.is_present(text)) {
        match marker.tag {
            Tag::Language(lang) => tags.languages.push(lang.to_string()),
            Tag::Hosting(hosting) => tags.hosting_types.push(hosting),
            Tag::Platform(platform) => tags.platforms.push(platform),
        }
    }

    tags
}

/// Strip marker glyphs and collapse whitespace
pub fn clean_description(text: &str) -> String {
    let mut cleaned = text.to_string();
    for marker in MARKERS {
        for glyph in marker.glyphs {
            if cleaned.contains(glyph) {
                cleaned = cleaned.replace(glyph, " ");
            }
        }
    }

    cleaned
        .replace(VARIATION_SELECTOR, "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_shape() {
        let languages = MARKERS
            .iter()
            .filter(|m| matches!(m.tag, Tag::Language(_)))
            .count();
        let hosting = MARKERS
            .iter()
            .filter(|m| matches!(m.tag, Tag::Hosting(_)))
            .count();
        let platforms = MARKERS
            .iter()
            .filter(|m| matches!(m.tag, Tag::Platform(_)))
            .count();

        assert_eq!(languages, 6);
        assert_eq!(hosting, 2);
        assert_eq!(platforms, 3);
    }

    #[test]
    fn test_detect_multiple_markers() {
        let tags = detect_tags("🐍 📇 ☁️ 🏠 🍎 🪟 🐧 Does everything");
        assert_eq!(tags.languages, vec!["Python", "TypeScript/JavaScript"]);
        assert_eq!(tags.hosting_types, vec![HostingType::Cloud, HostingType::Local]);
        assert_eq!(
            tags.platforms,
            vec![Platform::MacOs, Platform::Windows, Platform::Linux]
        );
    }

    #[test]
    fn test_detect_with_and_without_variation_selector() {
        assert_eq!(detect_tags("\u{2601} plain").hosting_types, vec![HostingType::Cloud]);
        assert_eq!(detect_tags("🏎️ fast").languages, vec!["Go"]);
        assert_eq!(detect_tags("🏎 fast").languages, vec!["Go"]);
    }

    #[test]
    fn test_csharp_keycap_not_plain_hash() {
        assert_eq!(detect_tags("#️⃣ dotnet").languages, vec!["C#"]);
        assert!(detect_tags("Supports C# and #hashtags").languages.is_empty());
    }

    #[test]
    fn test_clean_description() {
        assert_eq!(clean_description("🐍  A database   tool "), "A database tool");
        assert_eq!(clean_description("🏎️ ☁️ - Go server"), "- Go server");
        assert_eq!(clean_description("#️⃣ Uses C# #tags"), "Uses C# #tags");
    }

    #[test]
    fn test_no_markers() {
        assert_eq!(detect_tags("Just text"), DetectedTags::default());
        assert_eq!(clean_description("Just\ttext"), "Just text");
    }
}
