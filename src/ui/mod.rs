//! Terminal output formatting for papers and statistics.

use comfy_table::{presets, Cell, ContentArrangement, Table};
use owo_colors::OwoColorize;
use std::io::IsTerminal;

use crate::models::{Paper, Stats};

/// Get the current terminal width.
pub fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(100)
}

/// Check if stdout is a terminal.
pub fn is_terminal() -> bool {
    std::io::stdout().is_terminal()
}

/// Truncate text to fit within `max_width` columns using unicode-aware
/// width measurement, appending an ellipsis when truncation occurred.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    let total_width: usize = text
        .chars()
        .map(|c| unicode_width::UnicodeWidthChar::width(c).unwrap_or(1))
        .sum();
    if total_width <= max_width {
        return text.to_string();
    }

    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(1);
        if used + w > budget {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str("...");
    out
}

/// Section header line.
pub fn section(title: &str) -> String {
    format!("{}", format!("━━━ {} ━━━", title).bold().cyan())
}

/// Render a list of papers as a table.
pub fn papers_table(papers: &[Paper]) -> String {
    if papers.is_empty() {
        return format!("{}", "No papers.".dimmed());
    }

    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_BORDERS_ONLY)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(terminal_width() as u16)
        .set_header(vec!["Key", "Title", "Authors", "Categories", "Published"]);

    for paper in papers {
        table.add_row(vec![
            Cell::new(paper.key()),
            Cell::new(truncate_with_ellipsis(&paper.title, 48)),
            Cell::new(truncate_with_ellipsis(&paper.author_line(), 28)),
            Cell::new(truncate_with_ellipsis(&paper.category_line(), 18)),
            Cell::new(date_part(paper.published.as_deref())),
        ]);
    }

    table.to_string()
}

/// Render one paper as a full record.
pub fn paper_detail(paper: &Paper) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", paper.title.blue().bold()));
    out.push_str(&format!(
        "{} {}\n\n",
        paper.key().dimmed(),
        paper.category_line().green()
    ));

    out.push_str(&format!("Authors:   {}\n", paper.author_line()));
    out.push_str(&format!(
        "Published: {}\n",
        paper.published.as_deref().unwrap_or("-")
    ));
    out.push_str(&format!(
        "Updated:   {}\n",
        paper.updated.as_deref().unwrap_or("-")
    ));
    if !paper.pdf_url.is_empty() {
        out.push_str(&format!("PDF:       {}\n", paper.pdf_url.cyan()));
    }
    if !paper.source_url.is_empty() {
        out.push_str(&format!("Source:    {}\n", paper.source_url.cyan()));
    }

    if !paper.r#abstract.is_empty() {
        out.push('\n');
        out.push_str(&format!("{}\n", "Abstract".bold()));
        out.push_str(&paper.r#abstract);
        out.push('\n');
    }

    if let Some(keywords) = &paper.keywords {
        out.push('\n');
        out.push_str(&format!("Keywords:  {}\n", keywords.join(", ").yellow()));
    }
    if let Some(summary) = &paper.summary {
        out.push('\n');
        out.push_str(&format!("{}\n", "Summary".bold()));
        out.push_str(summary);
        out.push('\n');
    }

    out
}

/// Render store statistics with a per-category breakdown.
pub fn stats_view(stats: &Stats) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Papers:  {}\n",
        stats.total_papers.to_string().green().bold()
    ));
    out.push_str(&format!(
        "Storage: {:.2} MB ({} bytes)\n",
        stats.db_size_mb, stats.db_size_bytes
    ));

    if stats.categories.is_empty() {
        return out;
    }

    out.push('\n');
    out.push_str(&format!("{}\n", "Top categories".bold()));

    let mut categories: Vec<(&String, &usize)> = stats.categories.iter().collect();
    categories.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

    let max_count = categories.first().map(|(_, c)| **c).unwrap_or(1).max(1);
    let name_width = categories
        .iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(0);

    for (name, count) in categories {
        let bar_len = (count * 20).div_ceil(max_count);
        out.push_str(&format!(
            "  {:name_width$}  {} {}\n",
            name,
            "█".repeat(bar_len).cyan(),
            count
        ));
    }

    out
}

/// Leading date part of a server timestamp, or "-" when absent.
fn date_part(timestamp: Option<&str>) -> String {
    timestamp
        .map(|t| t.chars().take(10).collect())
        .unwrap_or_else(|| "-".to_string())
}
