// Cell-level normalizers for the two columns the analysis cares about.
// Both are total functions: dirty input degrades to a safe default instead
// of failing the request, so a few malformed cells never reject an upload.

/// Cleans a currency-like cell into an `f64`.
///
/// Strips everything that is not a digit, comma or period, then treats every
/// comma as a decimal point (covers exports like "10,50" where the comma is
/// the decimal mark). Anything that still fails to parse becomes 0.0, as
/// does a missing cell.
///
/// Known limitation: a value carrying both a thousands separator and a
/// decimal point ("1,234.56") turns into "1.234.56", which does not parse
/// and therefore yields 0.0. Kept as-is; changing it would silently alter
/// existing totals. The same stripping also drops sign characters, so
/// "-5" parses as 5.0.
pub fn clean_currency(value: Option<&str>) -> f64 {
    let Some(raw) = value else {
        return 0.0;
    };
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if cleaned.is_empty() {
        return 0.0;
    }
    cleaned.parse::<f64>().unwrap_or(0.0)
}

/// Cleans a category cell into a comparison key: trimmed and lowercased.
/// Missing cells become the empty string, which never matches any filter.
pub fn clean_category(value: Option<&str>) -> String {
    match value {
        Some(raw) => raw.trim().to_lowercase(),
        None => String::new(),
    }
}
