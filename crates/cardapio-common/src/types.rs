//! Domain types for the menu-item resource.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Wire form of an identifier: the REST resource sends numeric ids, route
/// parameters arrive as strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Number(n) => n.to_string(),
            RawId::Text(s) => s,
        }
    }
}

/// Writes canonical integers (`42`, `-3`) as JSON numbers; anything that
/// would not read back identically (`007`, `+5`) stays a string.
fn serialize_id<S: Serializer>(id: &str, serializer: S) -> Result<S::Ok, S::Error> {
    match id.parse::<i64>() {
        Ok(n) if n.to_string() == id => serializer.serialize_i64(n),
        _ => serializer.serialize_str(id),
    }
}

/// Identifier of a menu item. Immutable once assigned; the sole key used to
/// fetch or delete the record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemCardapioId(String);

impl ItemCardapioId {
    /// Creates a menu-item ID from a string value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemCardapioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ItemCardapioId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl Serialize for ItemCardapioId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_id(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for ItemCardapioId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawId::deserialize(deserializer).map(|raw| Self(raw.into()))
    }
}

/// Identifier of a menu (`Cardapio`), the parent of many menu items.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CardapioId(String);

impl CardapioId {
    /// Creates a menu ID from a string value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardapioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for CardapioId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl Serialize for CardapioId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_id(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for CardapioId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawId::deserialize(deserializer).map(|raw| Self(raw.into()))
    }
}

/// Reference from a menu item to its parent menu.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardapioRef {
    /// Parent menu identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<CardapioId>,
    /// Parent menu name, when the server embeds it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
}

/// A menu item record as served by the REST resource.
///
/// Every field is optional: the default value is the empty entity the store
/// holds before a fetch completes or after a delete succeeds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemCardapio {
    /// Record identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ItemCardapioId>,
    /// Category label (`PRATO`, `BEBIDA`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoria: Option<String>,
    /// Item name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    /// Free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
    /// Price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valor: Option<f64>,
    /// Parent menu.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cardapio: Option<CardapioRef>,
}

impl ItemCardapio {
    /// Returns the record id as display text, or an empty string.
    #[must_use]
    pub fn id_text(&self) -> String {
        self.id.as_ref().map(ToString::to_string).unwrap_or_default()
    }

    /// Returns the price as display text, or an empty string.
    ///
    /// Uses the shortest representation that round-trips: `7.5` renders as
    /// `"7.5"` and `1.0` as `"1"`.
    #[must_use]
    pub fn valor_text(&self) -> String {
        self.valor.map(|v| v.to_string()).unwrap_or_default()
    }

    /// Returns the parent menu id as display text, or an empty string when
    /// the reference or its id is absent.
    #[must_use]
    pub fn cardapio_id_text(&self) -> String {
        self.cardapio
            .as_ref()
            .and_then(|c| c.id.as_ref())
            .map(ToString::to_string)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUCO: &str = r#"{"id":42,"categoria":"Bebidas","nome":"Suco","descricao":"Suco natural","valor":7.5,"cardapio":{"id":1}}"#;

    #[test]
    fn deserializes_numeric_ids() {
        let item: ItemCardapio = serde_json::from_str(SUCO).expect("parse failed");
        assert_eq!(item.id, Some(ItemCardapioId::new("42")));
        assert_eq!(item.cardapio_id_text(), "1");
        assert_eq!(item.valor, Some(7.5));
    }

    #[test]
    fn serializes_numeric_ids_as_numbers() {
        let item = ItemCardapio {
            id: Some(ItemCardapioId::from(42_i64)),
            ..ItemCardapio::default()
        };
        let json = serde_json::to_string(&item).expect("serialize failed");
        assert_eq!(json, r#"{"id":42}"#);
    }

    #[test]
    fn string_ids_stay_strings() {
        let id: ItemCardapioId = serde_json::from_str(r#""abc-1""#).expect("parse failed");
        assert_eq!(id.as_str(), "abc-1");
        assert_eq!(serde_json::to_string(&id).expect("serialize failed"), r#""abc-1""#);
    }

    #[test]
    fn non_canonical_numeric_ids_stay_strings() {
        for raw in ["007", "+5", "-0"] {
            let id = ItemCardapioId::new(raw);
            let json = serde_json::to_string(&id).expect("serialize failed");
            assert_eq!(json, format!("\"{raw}\""));
        }
        let negative = serde_json::to_string(&CardapioId::new("-3")).expect("serialize failed");
        assert_eq!(negative, "-3");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let json = r#"{"id":3,"nome":"Pudim","restaurante":{"id":9}}"#;
        let item: ItemCardapio = serde_json::from_str(json).expect("parse failed");
        assert_eq!(item.nome.as_deref(), Some("Pudim"));
    }

    #[test]
    fn empty_entity_renders_blank_text() {
        let item = ItemCardapio::default();
        assert_eq!(item.id_text(), "");
        assert_eq!(item.valor_text(), "");
        assert_eq!(item.cardapio_id_text(), "");
    }

    #[test]
    fn parent_without_id_renders_blank() {
        let item = ItemCardapio {
            cardapio: Some(CardapioRef {
                id: None,
                nome: Some("Almoço".into()),
            }),
            ..ItemCardapio::default()
        };
        assert_eq!(item.cardapio_id_text(), "");
    }

    #[test]
    fn whole_prices_drop_the_fraction() {
        let item = ItemCardapio {
            valor: Some(1.0),
            ..ItemCardapio::default()
        };
        assert_eq!(item.valor_text(), "1");
    }
}
