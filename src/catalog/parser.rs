//! Line-oriented catalog parser
//!
//! The README is scanned one line at a time. Parse state is an explicit
//! accumulator threaded through [`CatalogParser::step`], so parsing the
//! same text always yields the same entries.

use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

use crate::catalog::markers::{clean_description, detect_tags};
use crate::catalog::types::{CategoryCount, Entry};

/// Level-2 headings containing one of these words close the server list.
/// Upstream heading vocabulary is an external contract: if the README gains
/// a new trailing section under another name, its list items will be
/// parsed as servers.
pub const SECTION_TERMINATORS: &[&str] = &["Frameworks", "Tips"];

/// `### 🗄️ <a name="databases"></a>Databases`
const CATEGORY_HEADING: &str = r#"^###\s+.*<a\s+name="[^"]*"\s*>\s*</a>\s*(\S.*?)\s*$"#;

/// `## Frameworks`
const SECTION_HEADING: &str = r"^##\s+(.+?)\s*$";

/// `- [label](url) <markers> - description`, top-level bullets only.
/// The URL may hold one level of balanced parentheses.
const LIST_ITEM: &str = r"^[-*]\s+\[([^\]]+)\]\(((?:[^()\s]|\([^()\s]*\))+)\)\s*(.*?)\s*[-\u{2013}\u{2014}]\s+(.+?)\s*$";

/// Scanner state carried from one line to the next
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseState {
    /// Last category heading seen
    pub category: String,
    /// Whether list items are currently parsed as entries
    pub in_section: bool,
}

/// Compiled line patterns
pub struct CatalogParser {
    category_heading: Regex,
    section_heading: Regex,
    list_item: Regex,
}

impl CatalogParser {
    /// Create a parser with freshly compiled patterns
    pub fn new() -> Self {
        Self {
            category_heading: Regex::new(CATEGORY_HEADING).expect("category heading pattern"),
            section_heading: Regex::new(SECTION_HEADING).expect("section heading pattern"),
            list_item: Regex::new(LIST_ITEM).expect("list item pattern"),
        }
    }

    /// Shared parser instance
    pub fn global() -> &'static CatalogParser {
        static PARSER: OnceLock<CatalogParser> = OnceLock::new();
        PARSER.get_or_init(CatalogParser::new)
    }

    /// Parse a whole document into entries, preserving document order
    pub fn parse(&self, text: &str) -> Vec<Entry> {
        let (_, entries) = text.lines().fold(
            (ParseState::default(), Vec::<Entry>::new()),
            |(state, mut entries), line| {
                let (next, entry) = self.step(state, line);
                entries.extend(entry);
                (next, entries)
            },
        );

        debug!(entries = entries.len(), "Parsed catalog document");
        entries
    }

    /// Reduce one line into the next state and at most one entry
    pub fn step(&self, state: ParseState, line: &str) -> (ParseState, Option<Entry>) {
        if let Some(caps) = self.category_heading.captures(line) {
            let next = ParseState {
                category: caps[1].trim().to_string(),
                in_section: true,
            };
            return (next, None);
        }

        if let Some(caps) = self.section_heading.captures(line) {
            if SECTION_TERMINATORS.iter().any(|word| caps[1].contains(word)) {
                let next = ParseState {
                    in_section: false,
                    ..state
                };
                return (next, None);
            }
            return (state, None);
        }

        if !state.in_section {
            return (state, None);
        }

        let entry = self.parse_item(line, &state.category);
        (state, entry)
    }

    /// Parse a list item line; `None` for anything that is not a full item
    fn parse_item(&self, line: &str, category: &str) -> Option<Entry> {
        let caps = self.list_item.captures(line)?;

        let name = caps[1].trim();
        if name.is_empty() {
            return None;
        }

        let raw_description = format!("{} {}", &caps[3], &caps[4]);
        let tags = detect_tags(&raw_description);

        Some(Entry {
            name: name.to_string(),
            description: clean_description(&raw_description),
            languages: tags.languages,
            hosting_types: tags.hosting_types,
            platforms: tags.platforms,
            category: category.to_string(),
            link: caps[2].to_string(),
            relevance_score: None,
        })
    }
}

impl Default for CatalogParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a catalog document with the shared parser
pub fn parse_catalog(text: &str) -> Vec<Entry> {
    CatalogParser::global().parse(text)
}

/// Distinct categories in first-appearance order with their entry counts
pub fn categories(entries: &[Entry]) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();

    for entry in entries {
        match counts.iter_mut().find(|c| c.category == entry.category) {
            Some(existing) => existing.count += 1,
            None => counts.push(CategoryCount {
                category: entry.category.clone(),
                count: 1,
            }),
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::{HostingType, Platform};

    const SAMPLE: &str = r#"# Awesome MCP Servers

- [Not a server](https://example.com) - Appears before any category

## Server Implementations

### 🗄️ <a name="databases"></a>Databases

- [foo](http://x) - 🐍 A database tool
- [crystaldba/postgres-mcp](https://github.com/crystaldba/postgres-mcp) 🐍 🏠 - PostgreSQL database integration
- [broken link](https://github.com/broken
- [no-separator](https://github.com/a/b) just text

### 💻 <a name="developer-tools"></a>Developer Tools

- [dev/tool](https://github.com/dev/tool) 🦀 ☁️ 🍎 🪟 🐧 - Helps developers

## Frameworks

- [fastmcp](https://github.com/jlowin/fastmcp) 🐍 - A framework, not a server
"#;

    #[test]
    fn test_heading_example() {
        let text = "### 🗄️ <a name=\"databases\"></a>Databases\n- [foo](http://x) - 🐍 A database tool";
        let entries = parse_catalog(text);

        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.name, "foo");
        assert_eq!(entry.link, "http://x");
        assert_eq!(entry.category, "Databases");
        assert_eq!(entry.languages, vec!["Python"]);
        assert_eq!(entry.description, "A database tool");
        assert!(entry.relevance_score.is_none());
    }

    #[test]
    fn test_parse_sample() {
        let entries = parse_catalog(SAMPLE);
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();

        assert_eq!(names, vec!["foo", "crystaldba/postgres-mcp", "dev/tool"]);
    }

    #[test]
    fn test_markers_before_separator() {
        let entries = parse_catalog(SAMPLE);
        let pg = &entries[1];

        assert_eq!(pg.description, "PostgreSQL database integration");
        assert_eq!(pg.languages, vec!["Python"]);
        assert_eq!(pg.hosting_types, vec![HostingType::Local]);
        assert!(pg.platforms.is_empty());
    }

    #[test]
    fn test_category_follows_headings() {
        let entries = parse_catalog(SAMPLE);
        assert_eq!(entries[0].category, "Databases");
        assert_eq!(entries[1].category, "Databases");
        assert_eq!(entries[2].category, "Developer Tools");
        assert_eq!(
            entries[2].platforms,
            vec![Platform::MacOs, Platform::Windows, Platform::Linux]
        );
        assert_eq!(entries[2].hosting_types, vec![HostingType::Cloud]);
    }

    #[test]
    fn test_terminator_closes_section() {
        let entries = parse_catalog(SAMPLE);
        assert!(entries.iter().all(|e| e.name != "fastmcp"));
    }

    #[test]
    fn test_plain_level_two_heading_keeps_section() {
        let text = "### <a name=\"a\"></a>Alpha\n## Something Else\n- [x](http://x) - still here";
        let entries = parse_catalog(text);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].category, "Alpha");
    }

    #[test]
    fn test_heading_without_anchor_ignored() {
        let text = "### Plain heading\n- [x](http://x) - not in a section";
        assert!(parse_catalog(text).is_empty());
    }

    #[test]
    fn test_step_is_pure() {
        let parser = CatalogParser::new();
        let state = ParseState {
            category: "Databases".to_string(),
            in_section: true,
        };

        let (next, entry) = parser.step(state.clone(), "- [foo](http://x) - 🐍 A database tool");
        assert_eq!(next, state);
        assert_eq!(entry.map(|e| e.category), Some("Databases".to_string()));

        let (next, entry) = parser.step(state.clone(), "## Tips and Tricks");
        assert!(!next.in_section);
        assert_eq!(next.category, "Databases");
        assert!(entry.is_none());
    }

    #[test]
    fn test_empty_and_garbage_documents() {
        assert!(parse_catalog("").is_empty());
        assert!(parse_catalog("\n\n   \n").is_empty());
        assert!(parse_catalog("[[[(((---").is_empty());
    }

    #[test]
    fn test_dash_inside_description() {
        let text = "### <a name=\"a\"></a>Alpha\n- [x](http://x) – Read - and write - files";
        let entries = parse_catalog(text);
        assert_eq!(entries[0].description, "Read - and write - files");
    }

    #[test]
    fn test_nested_bullets_are_not_entries() {
        let text = "### <a name=\"a\"></a>Alpha\n- [top](http://t) - top level\n  - [nested](http://n) - nested bullet\n\t* [tabbed](http://t2) - also nested";
        let entries = parse_catalog(text);

        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["top"]);
    }

    #[test]
    fn test_parenthesised_url() {
        let text = "### <a name=\"a\"></a>Alpha\n- [wiki](https://en.wikipedia.org/wiki/Foo_(bar)) - paren url\n- [open](https://x.org/a_(b) - unbalanced";
        let entries = parse_catalog(text);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].link, "https://en.wikipedia.org/wiki/Foo_(bar)");
        assert_eq!(entries[0].description, "paren url");
    }

    #[test]
    fn test_categories_counts() {
        let entries = parse_catalog(SAMPLE);
        let counts = categories(&entries);

        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].category, "Databases");
        assert_eq!(counts[0].count, 2);
        assert_eq!(counts[1].category, "Developer Tools");
        assert_eq!(counts[1].count, 1);
    }
}
