// In-memory columnar table loaded from semicolon-delimited CSV bytes.
use crate::error::AnalyzeError;
use csv::{ReaderBuilder, Trim};

#[derive(Debug, Clone)]
pub struct Column {
    name: String,
    cells: Vec<Option<String>>,
}

impl Column {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cells(&self) -> &[Option<String>] {
        &self.cells
    }
}

#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<Column>,
}

/// Header normalization rule: trimmed, lowercased, internal spaces replaced
/// with underscores. "  Amount " and "amount" name the same column.
pub fn normalize_column_name(raw: &str) -> String {
    raw.trim().to_lowercase().replace(' ', "_")
}

impl Table {
    /// Parses UTF-8, semicolon-delimited text with a single header row into
    /// a column-oriented table. Fields are whitespace-trimmed; ragged data
    /// rows are tolerated (short rows pad with missing cells, long rows are
    /// truncated at the header width), so every column ends up the same
    /// length.
    pub fn from_semicolon_bytes(bytes: &[u8]) -> Result<Table, AnalyzeError> {
        let text = std::str::from_utf8(bytes)?;

        let mut reader = ReaderBuilder::new()
            .delimiter(b';')
            .has_headers(true)
            .trim(Trim::All)
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers = reader.headers()?.clone();
        let mut columns: Vec<Column> = headers
            .iter()
            .map(|header| Column {
                name: normalize_column_name(header),
                cells: Vec::new(),
            })
            .collect();

        for record in reader.records() {
            let record = record?;
            for (idx, column) in columns.iter_mut().enumerate() {
                column.cells.push(record.get(idx).map(|s| s.to_string()));
            }
        }

        Ok(Table { columns })
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.cells.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_normalization() {
        assert_eq!(normalize_column_name("  Amount "), "amount");
        assert_eq!(normalize_column_name("Category Name"), "category_name");
        assert_eq!(normalize_column_name("amount"), "amount");
    }

    #[test]
    fn test_load_normalizes_headers() {
        let csv = "Date; Amount ;Category Name\n2024-01-01;5;Food\n";
        let table = Table::from_semicolon_bytes(csv.as_bytes()).unwrap();
        assert_eq!(table.column_names(), vec!["date", "amount", "category_name"]);
    }

    #[test]
    fn test_load_aligns_columns() {
        let csv = "a;b\n1;2\n3;4\n";
        let table = Table::from_semicolon_bytes(csv.as_bytes()).unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(
            table.column("a").unwrap().cells(),
            &[Some("1".to_string()), Some("3".to_string())]
        );
        assert_eq!(
            table.column("b").unwrap().cells(),
            &[Some("2".to_string()), Some("4".to_string())]
        );
    }

    #[test]
    fn test_load_pads_short_rows() {
        let csv = "a;b;c\n1;2\n";
        let table = Table::from_semicolon_bytes(csv.as_bytes()).unwrap();
        // Every column has the same length; the missing cell is None.
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.column("c").unwrap().cells(), &[None]);
    }

    #[test]
    fn test_load_truncates_long_rows() {
        let csv = "a;b\n1;2;3\n";
        let table = Table::from_semicolon_bytes(csv.as_bytes()).unwrap();
        assert_eq!(table.column_names(), vec!["a", "b"]);
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn test_load_header_only() {
        let csv = "Date;Amount;Category\n";
        let table = Table::from_semicolon_bytes(csv.as_bytes()).unwrap();
        assert_eq!(table.row_count(), 0);
        assert!(table.column("amount").is_some());
    }

    #[test]
    fn test_load_rejects_invalid_utf8() {
        let bytes = [0xff, 0xfe, b'a', b';', b'b'];
        let result = Table::from_semicolon_bytes(&bytes);
        assert!(matches!(result, Err(AnalyzeError::Decode { .. })));
    }

    #[test]
    fn test_load_trims_fields() {
        let csv = "amount;category\n 5 ; Food \n";
        let table = Table::from_semicolon_bytes(csv.as_bytes()).unwrap();
        assert_eq!(
            table.column("category").unwrap().cells(),
            &[Some("Food".to_string())]
        );
    }
}
