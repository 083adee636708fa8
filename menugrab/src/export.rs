// CSV/JSON export for extracted menu rows.

use anyhow::{Context, Result};
use menugrab_scraper::MenuRow;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "json" => Some(ExportFormat::Json),
            _ => None,
        }
    }
}

const CSV_HEADER: &str = "Category,ItemName,Description,Price";

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

fn csv_field(field: &str) -> String {
    if needs_quotes(field) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Render rows as CSV. A missing price becomes an empty field.
pub fn to_csv_string(rows: &[MenuRow]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for row in rows {
        let price = row.price.map(|p| p.to_string()).unwrap_or_default();
        out.push_str(&format!(
            "{},{},{},{}\n",
            csv_field(&row.category),
            csv_field(&row.name),
            csv_field(&row.description),
            price
        ));
    }
    out
}

pub fn write_rows(rows: &[MenuRow], path: &Path, format: ExportFormat) -> Result<()> {
    let contents = match format {
        ExportFormat::Csv => to_csv_string(rows),
        ExportFormat::Json => serde_json::to_string_pretty(rows)?,
    };
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(category: &str, name: &str, description: &str, price: Option<f64>) -> MenuRow {
        MenuRow {
            category: category.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            price,
        }
    }

    #[test]
    fn csv_has_header_and_one_line_per_row() {
        let rows = vec![
            row("Pizza", "Margherita", "Tomato and mozzarella", Some(7.5)),
            row("Drinks", "Cola", "330ml can", None),
        ];
        let csv = to_csv_string(&rows);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Category,ItemName,Description,Price");
        assert_eq!(lines[1], "Pizza,Margherita,Tomato and mozzarella,7.5");
        // Missing price is an empty trailing field.
        assert_eq!(lines[2], "Drinks,Cola,330ml can,");
    }

    #[test]
    fn csv_quotes_fields_with_commas_and_quotes() {
        let rows = vec![row(
            "Pizza",
            "The \"Works\"",
            "Ham, mushroom, olives",
            Some(12.0),
        )];
        let csv = to_csv_string(&rows);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines[1],
            "Pizza,\"The \"\"Works\"\"\",\"Ham, mushroom, olives\",12"
        );
    }

    #[test]
    fn json_serializes_missing_price_as_null() {
        let rows = vec![row("Drinks", "Cola", "330ml can", None)];
        let json = serde_json::to_string(&rows).unwrap();
        assert!(json.contains("\"price\":null"));
    }

    #[test]
    fn format_parsing_is_case_insensitive() {
        assert_eq!(ExportFormat::from_str("CSV"), Some(ExportFormat::Csv));
        assert_eq!(ExportFormat::from_str("Json"), Some(ExportFormat::Json));
        assert_eq!(ExportFormat::from_str("xml"), None);
    }

    #[test]
    fn write_rows_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menu.csv");
        write_rows(
            &[row("Pizza", "Margherita", "Tomato", Some(7.5))],
            &path,
            ExportFormat::Csv,
        )
        .unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("Category,ItemName,Description,Price"));
    }
}
