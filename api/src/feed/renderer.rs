//! Feed renderer
//!
//! Renders the news feed to plain-text markdown, for terminals and LLM readers.

use crate::app::{FeedStatus, NewsItem, NewsView};
use crate::domain::entities::{columns, NewsRecord};

/// Render a display-ordered view to markdown
pub fn render_news(view: &NewsView) -> String {
    let mut buf = String::new();

    // Header
    match &view.query {
        Some(query) => buf.push_str(&format!("# News matching \"{}\"\n\n", query)),
        None => buf.push_str("# News Feed\n\n"),
    }

    // State banner
    match &view.status {
        FeedStatus::Pending => {
            buf.push_str("_Loading news, check back in a moment._\n\n");
        }
        FeedStatus::Empty => {
            buf.push_str("_No news available right now._ Send `POST /news/reload` to retry.\n\n");
        }
        FeedStatus::Unavailable { reason } => {
            buf.push_str(&format!(
                "**Feed unavailable:** {}. Send `POST /news/reload` to retry.\n\n",
                reason
            ));
        }
        FeedStatus::Ready => {}
    }

    // Counters
    buf.push_str(&format!(
        "Stories: {} | High priority: {} | Categories: {}",
        view.total, view.high_priority, view.categories
    ));
    if let Some(updated) = view.last_updated {
        buf.push_str(&format!(
            " | Updated: {}",
            updated.format("%Y-%m-%d %H:%M UTC")
        ));
    }
    buf.push_str("\n\n");

    if view.items.is_empty() {
        if view.query.is_some() {
            buf.push_str("_No stories match your search._\n");
        }
        return buf;
    }

    for item in &view.items {
        buf.push_str(&render_item(item));
        buf.push('\n');
    }

    buf.push_str("---\n\n");
    buf.push_str("- `GET /news/N` - Read story N in full\n");
    buf.push_str("- `GET /news/search?q=term` - Search stories\n");

    buf
}

fn render_item(item: &NewsItem) -> String {
    let record = &item.record;
    let marker = if item.high_priority { "[ALTA] " } else { "" };

    let mut meta_parts = Vec::new();
    for column in [
        columns::DATE,
        columns::CATEGORY,
        columns::COUNTRY,
        columns::SOURCE,
    ] {
        if let Some(value) = record.non_empty(column) {
            meta_parts.push(value.to_string());
        }
    }

    let mut line = format!(
        "[{}] {}{}\n",
        item.position,
        marker,
        record.title().unwrap_or_default()
    );
    if !meta_parts.is_empty() {
        line.push_str(&format!("    {}\n", meta_parts.join(" | ")));
    }
    if let Some(description) = record.non_empty(columns::DESCRIPTION) {
        line.push_str(&format!("    {}\n", truncate(description, 120)));
    }

    line
}

/// Render one story in full
pub fn render_article(position: usize, record: &NewsRecord) -> String {
    let mut buf = String::new();

    buf.push_str(&format!("# {}\n\n", record.title().unwrap_or_default()));

    if let Some(priority) = record.priority() {
        buf.push_str(&format!("**Priority:** {}\n\n", priority));
    }

    if let Some(description) = record.non_empty(columns::DESCRIPTION) {
        buf.push_str(&format!("_{}_\n\n", description));
    }

    buf.push_str("## Details\n\n");
    buf.push_str(&format!("- **Position:** {}\n", position));
    for (label, column) in [
        ("Date", columns::DATE),
        ("Category", columns::CATEGORY),
        ("Country", columns::COUNTRY),
        ("Source", columns::SOURCE),
        ("Image", columns::IMAGE),
    ] {
        if let Some(value) = record.non_empty(column) {
            buf.push_str(&format!("- **{}:** {}\n", label, value));
        }
    }
    buf.push('\n');

    if let Some(content) = record.non_empty(columns::CONTENT) {
        buf.push_str(content);
        buf.push('\n');
    }

    buf
}

/// Truncate a string with ellipsis, counting characters
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
