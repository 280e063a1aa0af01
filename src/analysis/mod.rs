// Filter/aggregate step: total the amounts of rows whose category mentions
// food.
use crate::data::cleaning::{clean_category, clean_currency};
use crate::data::table::Table;
use crate::error::AnalyzeError;

pub const AMOUNT_COLUMN: &str = "amount";
pub const CATEGORY_COLUMN: &str = "category";
pub const CATEGORY_NEEDLE: &str = "food";

/// Sums the cleaned amount of every row whose cleaned category contains
/// "food" as a substring ("fast food" and "food delivery" both count),
/// rounded to cents once at the end. An upload with no matching rows sums
/// to 0.0.
///
/// Fails only if the table lacks the `amount` or `category` column; dirty
/// cell values degrade to defaults inside the cleaners.
pub fn food_total(table: &Table) -> Result<f64, AnalyzeError> {
    let amounts = table
        .column(AMOUNT_COLUMN)
        .ok_or(AnalyzeError::MissingColumns)?;
    let categories = table
        .column(CATEGORY_COLUMN)
        .ok_or(AnalyzeError::MissingColumns)?;

    let total: f64 = amounts
        .cells()
        .iter()
        .zip(categories.cells())
        .filter(|(_, category)| clean_category(category.as_deref()).contains(CATEGORY_NEEDLE))
        .map(|(amount, _)| clean_currency(amount.as_deref()))
        .sum();

    Ok(round_cents(total))
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
