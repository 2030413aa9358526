//! AutocompleteItem trait for items that can be offered as candidates.

use serde::Deserialize;
use serde::Serialize;

use crate::record::Record;

/// The two shapes a candidate can take.
///
/// The default filter and the default row renderer both dispatch on this
/// discriminant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape<'a> {
    /// A plain string candidate.
    Text(&'a str),
    /// A record candidate.
    Record(&'a Record),
}

impl<'a> Shape<'a> {
    /// Default display text: the string itself, or the record's `name` field.
    ///
    /// A record without a string `name` field renders as an empty label.
    pub fn default_label(&self) -> &'a str {
        match *self {
            Shape::Text(text) => text,
            Shape::Record(record) => record.get_str("name").unwrap_or(""),
        }
    }
}

/// Trait for items that can be displayed in an Autocomplete widget.
///
/// # Example
///
/// ```
/// use typeahead::{AutocompleteItem, Record, Shape};
///
/// struct Currency {
///     fields: Record,
/// }
///
/// impl AutocompleteItem for Currency {
///     fn shape(&self) -> Shape<'_> {
///         Shape::Record(&self.fields)
///     }
/// }
/// ```
pub trait AutocompleteItem {
    /// Expose this item as a text or record candidate.
    fn shape(&self) -> Shape<'_>;
}

impl AutocompleteItem for String {
    fn shape(&self) -> Shape<'_> {
        Shape::Text(self)
    }
}

impl AutocompleteItem for &str {
    fn shape(&self) -> Shape<'_> {
        Shape::Text(self)
    }
}

impl AutocompleteItem for Record {
    fn shape(&self) -> Shape<'_> {
        Shape::Record(self)
    }
}

/// An owned candidate of either shape.
///
/// Deserializes untagged: a JSON string becomes [`Candidate::Text`], a JSON
/// object becomes [`Candidate::Record`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Candidate {
    /// A plain string candidate.
    Text(String),
    /// A record candidate.
    Record(Record),
}

impl AutocompleteItem for Candidate {
    fn shape(&self) -> Shape<'_> {
        match self {
            Candidate::Text(text) => Shape::Text(text),
            Candidate::Record(record) => Shape::Record(record),
        }
    }
}

impl From<&str> for Candidate {
    fn from(value: &str) -> Self {
        Candidate::Text(value.to_string())
    }
}

impl From<String> for Candidate {
    fn from(value: String) -> Self {
        Candidate::Text(value)
    }
}

impl From<Record> for Candidate {
    fn from(value: Record) -> Self {
        Candidate::Record(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_mixed_candidates() {
        let json = r#"["Euro", {"code": "USD", "name": "US Dollar"}]"#;
        let candidates: Vec<Candidate> = serde_json::from_str(json).unwrap();

        assert_eq!(candidates[0], Candidate::Text("Euro".into()));
        match &candidates[1] {
            Candidate::Record(record) => {
                assert_eq!(record.get_str("code"), Some("USD"));
                let keys: Vec<&str> = record.fields().map(|(k, _)| k).collect();
                assert_eq!(keys, vec!["code", "name"]);
            }
            other => panic!("expected record, got {:?}", other),
        }
    }

    #[test]
    fn test_default_label() {
        let text = Candidate::from("Euro");
        let record = Candidate::from(Record::new().set("code", "EUR").set("name", "Euro"));
        let nameless = Candidate::from(Record::new().set("code", "EUR"));

        assert_eq!(text.shape().default_label(), "Euro");
        assert_eq!(record.shape().default_label(), "Euro");
        assert_eq!(nameless.shape().default_label(), "");
    }
}
