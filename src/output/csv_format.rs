//! CSV output formatting.

use crate::types::ScanResult;
use std::io::{self, Write};

/// Write entries in CSV format: date, url, category, description.
pub fn write_csv<W: Write>(writer: W, entries: &[ScanResult]) -> io::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    // Write header
    wtr.write_record(["date", "url", "category", "description"])?;

    for entry in entries {
        wtr.write_record([
            &entry.created_at().format("%Y-%m-%d").to_string(),
            &entry.url,
            &entry.category,
            &entry.description,
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EntryId;

    #[test]
    fn test_csv_columns() {
        let entries = vec![ScanResult {
            id: EntryId::new(),
            url: "figma.com".to_string(),
            category: "Design".to_string(),
            sub_category: "UI".to_string(),
            suggested_categories: None,
            description: "Interface design, collaborative".to_string(),
            pricing: None,
            platform: None,
            timestamp: 1_700_000_000_000,
            image_data: None,
            sources: None,
        }];

        let mut buf = Vec::new();
        write_csv(&mut buf, &entries).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let mut lines = text.lines();
        assert_eq!(lines.next().unwrap(), "date,url,category,description");
        let row = lines.next().unwrap();
        assert!(row.contains("figma.com"));
        // the comma-bearing description is quoted by the writer
        assert!(row.contains("\"Interface design, collaborative\""));
    }
}
