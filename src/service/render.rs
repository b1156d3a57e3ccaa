//! Plain-text rendering of tool results
//!
//! Output is Markdown-flavoured text so it reads well both in a terminal
//! and when handed to a language model.

use std::fmt::Write;

use crate::catalog::{CategoryCount, Entry};
use crate::ranking::Recommendation;
use crate::service::listing::Listing;

const UNCATEGORIZED: &str = "Uncategorized";
const NOT_SPECIFIED: &str = "Not specified";

fn category_label(category: &str) -> &str {
    if category.is_empty() {
        UNCATEGORIZED
    } else {
        category
    }
}

fn join_display<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn or_not_specified(joined: String) -> String {
    if joined.is_empty() {
        NOT_SPECIFIED.to_string()
    } else {
        joined
    }
}

/// Render the list operation
pub fn render_listing(listing: &Listing) -> String {
    if listing.is_empty() {
        return match &listing.filter {
            Some(filter) => format!("No MCP servers found in categories matching '{}'.", filter),
            None => "No MCP servers found in the catalog.".to_string(),
        };
    }

    let mut out = String::new();
    match &listing.filter {
        Some(filter) => {
            let _ = writeln!(
                out,
                "Found {} MCP servers in categories matching '{}':",
                listing.total, filter
            );
        }
        None => {
            let _ = writeln!(out, "Found {} MCP servers:", listing.total);
        }
    }

    for group in &listing.groups {
        let _ = writeln!(
            out,
            "\n## {} ({})",
            category_label(&group.category),
            group.entries.len()
        );
        for entry in &group.entries {
            render_list_entry(&mut out, entry);
        }
    }

    out
}

fn render_list_entry(out: &mut String, entry: &Entry) {
    let _ = writeln!(out, "\n### {}", entry.name);
    let _ = writeln!(out, "{}", entry.description);
    let _ = writeln!(out, "- Languages: {}", or_not_specified(entry.languages.join(", ")));
    let _ = writeln!(out, "- Hosting: {}", or_not_specified(join_display(&entry.hosting_types)));
    let _ = writeln!(out, "- Platforms: {}", or_not_specified(join_display(&entry.platforms)));
    let _ = writeln!(out, "- Link: {}", entry.link);
}

/// Render the recommend operation
pub fn render_recommendation(problem: &str, recommendation: &Recommendation) -> String {
    let entries = match recommendation {
        Recommendation::NoMatches => {
            return format!(
                "No matching MCP servers found for \"{}\". Try broader or different keywords.",
                problem.trim()
            );
        }
        Recommendation::Ranked(entries) => entries,
    };

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Top {} MCP server recommendations for \"{}\":",
        entries.len(),
        problem.trim()
    );

    for (rank, entry) in entries.iter().enumerate() {
        let _ = writeln!(
            out,
            "\n{}. {} (score: {})",
            rank + 1,
            entry.name,
            entry.relevance_score.unwrap_or_default()
        );
        let _ = writeln!(out, "   {}", entry.description);
        let _ = writeln!(out, "   Category: {}", category_label(&entry.category));
        if !entry.languages.is_empty() {
            let _ = writeln!(out, "   Languages: {}", entry.languages.join(", "));
        }
        if !entry.hosting_types.is_empty() {
            let _ = writeln!(out, "   Hosting: {}", join_display(&entry.hosting_types));
        }
        if !entry.platforms.is_empty() {
            let _ = writeln!(out, "   Platforms: {}", join_display(&entry.platforms));
        }
        let _ = writeln!(out, "   Link: {}", entry.link);
    }

    out
}

/// Render the categories operation
pub fn render_categories(counts: &[CategoryCount]) -> String {
    if counts.is_empty() {
        return "No MCP server categories found in the catalog.".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "{} categories:", counts.len());
    for count in counts {
        let _ = writeln!(out, "- {} ({})", category_label(&count.category), count.count);
    }
    out
}
