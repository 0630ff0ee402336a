//! Plain text output formatting.

use crate::types::ScanResult;
use console::style;

/// Format entries as a human-readable registry table.
pub fn format_table(entries: &[ScanResult]) -> String {
    let mut out = String::new();

    if entries.is_empty() {
        out.push_str(&format!("  {}\n", style("Registry empty.").dim()));
        return out;
    }

    out.push_str(&format!(
        "  {:<10}  {:<10}  {:<28}  {:<16}  {}\n",
        style("ID").bold(),
        style("DATE").bold(),
        style("URL").bold(),
        style("CATEGORY").bold(),
        style("DESCRIPTION").bold()
    ));
    out.push_str(&format!(
        "  {}\n",
        style("─".repeat(88)).dim()
    ));

    for entry in entries {
        out.push_str(&format!(
            "  {:<10}  {:<10}  {:<28}  {:<16}  {}\n",
            entry.id.short(),
            entry.created_at().format("%Y-%m-%d").to_string(),
            truncate(&entry.url, 28),
            truncate(&entry.category, 16),
            style(truncate(&entry.description, 40)).dim()
        ));
    }

    out
}

/// Format one entry with every field, for detailed views.
pub fn format_entry_detail(entry: &ScanResult) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", style(&entry.url).bold()));
    out.push_str(&format!("  ID:           {}\n", entry.id));
    out.push_str(&format!(
        "  Captured:     {}\n",
        entry.created_at().format("%Y-%m-%d %H:%M UTC")
    ));
    out.push_str(&format!("  Category:     {}\n", entry.category));
    out.push_str(&format!("  Subcategory:  {}\n", entry.sub_category));

    if let Some(suggested) = &entry.suggested_categories {
        if !suggested.is_empty() {
            out.push_str(&format!("  Suggested:    {}\n", suggested.join(", ")));
        }
    }
    if let Some(pricing) = &entry.pricing {
        out.push_str(&format!("  Pricing:      {}\n", pricing));
    }
    if let Some(platform) = &entry.platform {
        out.push_str(&format!("  Platform:     {}\n", platform));
    }

    out.push_str(&format!("  Description:  {}\n", entry.description));

    if entry.image_data.is_some() {
        out.push_str(&format!("  {}\n", style("Screenshot attached").dim()));
    }
    if let Some(sources) = &entry.sources {
        for source in sources {
            out.push_str(&format!(
                "  Source:       {} ({})\n",
                source.title, source.uri
            ));
        }
    }

    out
}

/// Truncate a string to a maximum length, adding ellipsis if truncated.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EntryId;

    fn entry() -> ScanResult {
        ScanResult {
            id: EntryId::new(),
            url: "figma.com".to_string(),
            category: "Design".to_string(),
            sub_category: "UI".to_string(),
            suggested_categories: Some(vec!["Prototyping".to_string()]),
            description: "Collaborative interface design".to_string(),
            pricing: Some("Freemium".to_string()),
            platform: None,
            timestamp: 1_700_000_000_000,
            image_data: None,
            sources: None,
        }
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_empty_table() {
        assert!(format_table(&[]).contains("Registry empty"));
    }

    #[test]
    fn test_table_contains_fields() {
        let e = entry();
        let table = format_table(&[e.clone()]);
        assert!(table.contains("figma.com"));
        assert!(table.contains("Design"));
        assert!(table.contains(&e.id.short()));
    }

    #[test]
    fn test_detail_view() {
        let detail = format_entry_detail(&entry());
        assert!(detail.contains("Subcategory:  UI"));
        assert!(detail.contains("Pricing:      Freemium"));
        assert!(detail.contains("Suggested:    Prototyping"));
        assert!(!detail.contains("Platform:"));
    }
}
