// crates/worldatlas-core/src/normalize.rs

//! # JSON Normalization
//!
//! Turns the loosely-shaped source document into an [`Atlas`].
//!
//! The source looks like
//! `{ "<Continent>": [ "Name" | { "name": .., "population": .., .. }, .. ] }`
//! but nothing about it is guaranteed. Decoding happens in two explicit
//! steps so one odd record can never spoil the batch:
//!
//! 1. Each array element becomes an [`Entry`] (`Record`, `Bare` or `Skipped`).
//! 2. Each record field is read on its own; numeric-or-string fields go
//!    through [`Quantity`] and a deterministic formatter.

use crate::error::{AtlasError, Result};
use crate::model::{Atlas, Continent, Country};
use crate::text::{group_digits, group_thousands};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::io::Read;
use tracing::{debug, warn};

/// Unit appended to numeric areas.
pub const AREA_SUFFIX: &str = " km²";

// -----------------------------------------------------------------------------
// FIELD DECODING
// -----------------------------------------------------------------------------

/// A field that may hold a number or a string.
///
/// Variant order matters: serde tries them top to bottom, so integers are
/// claimed before they could be read as floats.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Text(String),
    /// Anything else (bool, array, object).
    Other(Value),
}

impl Quantity {
    /// Population display text: grouped digits, fractions truncated toward zero.
    pub fn population_text(&self) -> String {
        match self {
            Quantity::Integer(n) => group_thousands(*n),
            Quantity::Unsigned(n) => group_thousands(*n),
            Quantity::Float(f) => group_digits(&format!("{:.0}", f.trunc())),
            Quantity::Text(s) => s.clone(),
            Quantity::Other(v) => scalar_text(v),
        }
    }

    /// Area display text: grouped digits rounded to whole km², plus [`AREA_SUFFIX`].
    pub fn area_text(&self) -> String {
        match self {
            Quantity::Integer(n) => format!("{}{AREA_SUFFIX}", group_thousands(*n)),
            Quantity::Unsigned(n) => format!("{}{AREA_SUFFIX}", group_thousands(*n)),
            Quantity::Float(f) => {
                format!("{}{AREA_SUFFIX}", group_digits(&format!("{:.0}", f.round())))
            }
            Quantity::Text(s) => s.clone(),
            Quantity::Other(v) => scalar_text(v),
        }
    }
}

/// Plain rendering for leftover scalars. Containers render as nothing.
fn scalar_text(v: &Value) -> String {
    match v {
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

/// A country object as found in the source. Every field is optional and
/// untyped until it is read, so a wrong type only blanks that one field.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawCountry {
    name: Option<Value>,
    capital: Option<Value>,
    currency: Option<Value>,
    #[serde(rename = "flagUrl")]
    flag_url: Option<Value>,
    #[serde(rename = "FlagUrl")]
    flag_url_alt: Option<Value>,
    population: Option<Quantity>,
    area_km2: Option<Quantity>,
}

fn text_of(field: &Option<Value>) -> Option<&str> {
    field.as_ref().and_then(Value::as_str)
}

impl From<RawCountry> for Country {
    fn from(raw: RawCountry) -> Self {
        let text = |f: &Option<Value>| text_of(f).unwrap_or_default().to_string();

        Country {
            name: text(&raw.name),
            capital: text(&raw.capital),
            currency: text(&raw.currency),
            flag_url: text_of(&raw.flag_url)
                .or_else(|| text_of(&raw.flag_url_alt))
                .unwrap_or_default()
                .to_string(),
            population: raw
                .population
                .as_ref()
                .map(Quantity::population_text)
                .unwrap_or_default(),
            area: raw
                .area_km2
                .as_ref()
                .map(Quantity::area_text)
                .unwrap_or_default(),
        }
    }
}

// -----------------------------------------------------------------------------
// ELEMENT DECODING
// -----------------------------------------------------------------------------

/// One element of a continent array, classified by shape.
#[derive(Debug)]
pub enum Entry {
    /// A structured country object.
    Record(RawCountry),
    /// A plain string naming a country.
    Bare(String),
    /// Anything that cannot describe a country.
    Skipped(Value),
}

impl From<Value> for Entry {
    fn from(value: Value) -> Self {
        match value {
            obj @ Value::Object(_) => {
                // Every field is optional and the catch-all variants absorb
                // odd types, so this only fails on malformed input.
                match RawCountry::deserialize(&obj) {
                    Ok(raw) => Entry::Record(raw),
                    Err(_) => Entry::Skipped(obj),
                }
            }
            Value::String(s) => Entry::Bare(s),
            other => Entry::Skipped(other),
        }
    }
}

impl Entry {
    /// Converts to a record, dropping blank bare names and skipped shapes.
    pub fn into_country(self) -> Option<Country> {
        match self {
            Entry::Record(raw) => Some(raw.into()),
            Entry::Bare(name) if name.trim().is_empty() => None,
            Entry::Bare(name) => Some(Country::named(name)),
            Entry::Skipped(v) => {
                debug!(element = %v, "Skipping country entry that is neither object nor string");
                None
            }
        }
    }
}

// -----------------------------------------------------------------------------
// DOCUMENT DECODING
// -----------------------------------------------------------------------------

/// Builds the atlas from an already-parsed top-level object.
pub fn atlas_from_object(root: Map<String, Value>) -> Atlas {
    let mut continents = Vec::with_capacity(root.len());

    for (name, value) in root {
        let Value::Array(items) = value else {
            debug!(key = %name, "Skipping top-level key that is not an array");
            continue;
        };

        let countries = items
            .into_iter()
            .filter_map(|item| Entry::from(item).into_country())
            .collect();

        continents.push(Continent { name, countries });
    }

    Atlas::new(continents)
}

impl Atlas {
    /// **Strict Parse:** fails on malformed JSON or a non-object top level.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// **Strict Parse** from any reader (file, buffer, ...).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_value(serde_json::from_reader(reader)?)
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(root) => Ok(atlas_from_object(root)),
            other => Err(AtlasError::InvalidShape(format!(
                "expected an object of continents, found {}",
                kind_of(&other)
            ))),
        }
    }

    /// **Degrading Parse:** any failure yields the empty atlas.
    pub fn parse_or_empty(json: &str) -> Self {
        Self::from_json_str(json).unwrap_or_else(|e| {
            warn!(error = %e, "Dataset could not be parsed, continuing without data");
            Self::empty()
        })
    }
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn quantity(v: Value) -> Quantity {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn quantity_picks_narrowest_numeric_variant() {
        assert_eq!(quantity(json!(42)), Quantity::Integer(42));
        assert_eq!(quantity(json!(-7)), Quantity::Integer(-7));
        assert_eq!(quantity(json!(u64::MAX)), Quantity::Unsigned(u64::MAX));
        assert_eq!(quantity(json!(1.5)), Quantity::Float(1.5));
        assert_eq!(quantity(json!("n/a")), Quantity::Text("n/a".into()));
        assert_eq!(quantity(json!(true)), Quantity::Other(json!(true)));
    }

    #[test]
    fn population_truncates_fractions() {
        assert_eq!(Quantity::Integer(67_000_000).population_text(), "67,000,000");
        assert_eq!(Quantity::Float(1234.99).population_text(), "1,234");
        assert_eq!(Quantity::Float(-1234.99).population_text(), "-1,234");
        assert_eq!(Quantity::Text("approx. 5 million".into()).population_text(), "approx. 5 million");
        assert_eq!(Quantity::Other(json!(false)).population_text(), "false");
        assert_eq!(Quantity::Other(json!([1, 2])).population_text(), "");
    }

    #[test]
    fn area_rounds_and_adds_unit() {
        assert_eq!(Quantity::Integer(551_695).area_text(), "551,695 km²");
        assert_eq!(Quantity::Float(551_695.0).area_text(), "551,695 km²");
        assert_eq!(Quantity::Float(0.5).area_text(), "1 km²");
        assert_eq!(Quantity::Float(2.4).area_text(), "2 km²");
        assert_eq!(Quantity::Text("unknown".into()).area_text(), "unknown");
        assert_eq!(Quantity::Other(json!({"v": 1})).area_text(), "");
    }

    #[test]
    fn huge_floats_keep_every_digit() {
        assert_eq!(Quantity::Float(1e20).population_text(), "100,000,000,000,000,000,000");
        assert_eq!(Quantity::Float(1e20).area_text(), "100,000,000,000,000,000,000 km²");
        assert_eq!(Quantity::Float(-0.4).population_text(), "0");

        // Integer literals past u64 arrive as floats.
        let atlas = Atlas::from_json_str(
            r#"{"X": [{"name": "Big", "population": 100000000000000000000, "area_km2": 1e20}]}"#,
        )
        .unwrap();
        let big = atlas.find_country("X", "Big").unwrap();
        assert_eq!(big.population, "100,000,000,000,000,000,000");
        assert_eq!(big.area, "100,000,000,000,000,000,000 km²");
    }

    #[test]
    fn wrong_typed_fields_blank_only_themselves() {
        let country = Entry::from(json!({
            "name": "Chad",
            "capital": 12,
            "currency": null,
            "population": 17_000_000,
            "area_km2": [1]
        }))
        .into_country()
        .unwrap();

        assert_eq!(country.name, "Chad");
        assert_eq!(country.capital, "");
        assert_eq!(country.currency, "");
        assert_eq!(country.population, "17,000,000");
        assert_eq!(country.area, "");
    }

    #[test]
    fn flag_url_prefers_first_spelling() {
        let both = Entry::from(json!({"name": "A", "flagUrl": "first", "FlagUrl": "second"}))
            .into_country()
            .unwrap();
        assert_eq!(both.flag_url, "first");

        let alt = Entry::from(json!({"name": "B", "FlagUrl": "second"}))
            .into_country()
            .unwrap();
        assert_eq!(alt.flag_url, "second");

        let null_first = Entry::from(json!({"name": "C", "flagUrl": null, "FlagUrl": "second"}))
            .into_country()
            .unwrap();
        assert_eq!(null_first.flag_url, "second");
    }

    #[test]
    fn bare_and_odd_elements() {
        assert_eq!(
            Entry::from(json!("Japan")).into_country(),
            Some(Country::named("Japan"))
        );
        assert_eq!(Entry::from(json!("  \t")).into_country(), None);
        assert_eq!(Entry::from(json!(5)).into_country(), None);
        assert_eq!(Entry::from(json!(null)).into_country(), None);
        assert_eq!(Entry::from(json!(["Japan"])).into_country(), None);
    }

    #[test]
    fn object_without_name_is_kept_blank() {
        let country = Entry::from(json!({"capital": "Nowhere"}))
            .into_country()
            .unwrap();
        assert_eq!(country.name, "");
        assert_eq!(country.capital, "Nowhere");
    }

    #[test]
    fn non_array_keys_are_skipped() {
        let atlas = Atlas::from_json_str(r#"{"meta": {"v": 1}, "Oceania": ["Fiji"], "note": "x"}"#)
            .unwrap();
        let names: Vec<_> = atlas.continent_names().collect();
        assert_eq!(names, ["Oceania"]);
    }

    #[test]
    fn strict_parse_reports_shape_and_syntax() {
        assert!(matches!(
            Atlas::from_json_str("[1, 2]"),
            Err(AtlasError::InvalidShape(_))
        ));
        assert!(matches!(
            Atlas::from_json_str("{ not json"),
            Err(AtlasError::Json(_))
        ));
        assert!(matches!(
            Atlas::from_reader("[]".as_bytes()),
            Err(AtlasError::InvalidShape(_))
        ));
        assert!(Atlas::from_reader(r#"{"A": ["x"]}"#.as_bytes()).is_ok());
        assert!(Atlas::parse_or_empty("\"just text\"").is_empty());
        assert!(Atlas::parse_or_empty("").is_empty());
    }
}
