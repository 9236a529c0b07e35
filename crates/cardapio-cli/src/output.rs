//! Formatted output helpers for CLI commands.
//!
//! Prints menu items with the same labels and ordering the detail view uses.

use cardapio_common::types::ItemCardapio;
use cardapio_tui::ui::detail::DetailView;

/// Formats one item as aligned `Label  value` lines, one field per line.
#[must_use]
pub fn format_fields(item: &ItemCardapio) -> String {
    let rows = DetailView::fields(item);
    let width = rows.iter().map(|r| r.label.len()).max().unwrap_or(0);
    rows.iter()
        .map(|r| format!("{:<width$}  {}\n", r.label, r.value))
        .collect()
}

/// Serializes one item as pretty JSON.
///
/// # Errors
///
/// Returns an error if the item cannot be serialized.
pub fn to_json(item: &ItemCardapio) -> serde_json::Result<String> {
    serde_json::to_string_pretty(item)
}
