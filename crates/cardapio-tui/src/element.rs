//! Stable element identifiers shared by the screens and their tests.
//!
//! The ids match the ones the web front end exposes through `id` and
//! `data-cy`, so automation written against either surface can locate the
//! same heading, field, or button.

/// Heading of the detail view.
pub const DETAIL_HEADING: &str = "itemCardapioDetailsHeading";
/// "Back" button of the detail view.
pub const DETAIL_BACK_BUTTON: &str = "entityDetailsBackButton";
/// "Edit" button of the detail view.
pub const DETAIL_EDIT_BUTTON: &str = "entityDetailsEditButton";

/// Record id field.
pub const FIELD_ID: &str = "id";
/// Category field.
pub const FIELD_CATEGORIA: &str = "categoria";
/// Name field.
pub const FIELD_NOME: &str = "nome";
/// Description field.
pub const FIELD_DESCRICAO: &str = "descricao";
/// Price field.
pub const FIELD_VALOR: &str = "valor";
/// Parent menu reference field.
pub const FIELD_CARDAPIO: &str = "cardapio";

/// Heading of the delete dialog.
pub const DELETE_HEADING: &str = "itemCardapioDeleteDialogHeading";
/// Confirmation question of the delete dialog.
pub const DELETE_QUESTION: &str = "qrDapioApp.itemCardapio.delete.question";
/// Confirm button of the delete dialog.
pub const CONFIRM_DELETE_BUTTON: &str = "jhi-confirm-delete-itemCardapio";
/// Test alias of the confirm button.
pub const CONFIRM_DELETE_DATA_CY: &str = "entityConfirmDeleteButton";
/// Cancel button of the delete dialog.
pub const CANCEL_BUTTON: &str = "entityCancelButton";

/// A labelled, read-only value rendered by a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRow {
    /// Stable element id.
    pub id: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Display text; empty when the value is absent.
    pub value: String,
}

/// A keyboard-activated action shown in a screen's footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    /// Stable element id.
    pub id: &'static str,
    /// Key that activates the button.
    pub key: char,
    /// Human-readable label.
    pub label: &'static str,
}

impl Button {
    /// Footer hint, e.g. `[b] Back`.
    #[must_use]
    pub fn hint(&self) -> String {
        format!("[{}] {}", self.key, self.label)
    }
}

/// Finds a row by element id.
#[must_use]
pub fn find<'a>(rows: &'a [FieldRow], id: &str) -> Option<&'a FieldRow> {
    rows.iter().find(|row| row.id == id)
}
