//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// Format data as a rounded table for humans
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return "No results found.".to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

/// Format data as a borderless table, one row per entry
pub fn format_plain<T: Tabled>(data: &[T]) -> String {
    let mut table = Table::new(data);
    table.with(Style::blank());
    table.to_string()
}

/// Format one record as aligned `HEADER: value` lines
pub fn format_detail<T: Tabled>(item: &T) -> String {
    let headers = T::headers();
    let width = headers.iter().map(|h| h.len()).max().unwrap_or(0) + 1;

    headers
        .iter()
        .zip(item.fields())
        .map(|(header, value)| format!("  {:<width$} {}", format!("{header}:"), value))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Tabled)]
    struct TestRow {
        #[tabled(rename = "ID")]
        id: String,
        #[tabled(rename = "NAME")]
        name: String,
    }

    fn rows() -> Vec<TestRow> {
        vec![
            TestRow {
                id: "1".to_string(),
                name: "blocklist".to_string(),
            },
            TestRow {
                id: "2".to_string(),
                name: "allowlist".to_string(),
            },
        ]
    }

    #[test]
    fn test_format_table_empty() {
        let items: Vec<TestRow> = vec![];
        assert_eq!(format_table(&items), "No results found.");
    }

    #[test]
    fn test_format_table_uses_rounded_style() {
        let result = format_table(&rows());

        assert!(result.contains("ID"));
        assert!(result.contains("allowlist"));
        assert!(result.contains("╭"));
        assert!(result.contains("╰"));
    }

    #[test]
    fn test_format_plain_has_no_borders() {
        let result = format_plain(&rows());

        assert!(result.contains("NAME"));
        assert!(result.contains("blocklist"));
        assert!(!result.contains("│"));
    }

    #[test]
    fn test_format_detail_aligns_headers() {
        let detail = format_detail(&rows()[0]);
        let lines: Vec<&str> = detail.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("  ID:"));
        assert!(lines[1].ends_with("blocklist"));
        assert_eq!(lines[0].find('1'), lines[1].find('b'));
    }
}
