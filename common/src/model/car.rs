//! Car records as the storefront sees them.
//!
//! The inventory file holds untyped JSON objects; nothing enforces a schema on
//! the server. This module names the conventional fields and turns an arbitrary
//! `serde_json::Value` into a display-ready [`Car`] where every field that is
//! missing or of an unexpected type degrades to an empty string.

use serde_json::{Number, Value};

pub const BRAND: &str = "znacka";
pub const MODEL: &str = "model";
pub const YEAR: &str = "rok";
pub const FUEL: &str = "palivo";
pub const TRANSMISSION: &str = "prevodovka";
pub const BASE_PRICE: &str = "stara_cena";
pub const DISCOUNT_PRICE: &str = "nova_cena";
pub const TAGS: &str = "tagy";
pub const IMAGE: &str = "obrazok";

/// Display view of one stored record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Car {
    pub brand: String,
    pub model: String,
    pub year: String,
    pub fuel: String,
    pub transmission: String,
    pub base_price: String,
    pub discount_price: String,
    pub tags: Vec<String>,
    pub image: String,
}

impl Car {
    /// Builds the display view of `record`. Non-object records yield an empty car.
    pub fn from_record(record: &Value) -> Self {
        let field = |name: &str| display_text(record.get(name));

        Car {
            brand: field(BRAND),
            model: field(MODEL),
            year: field(YEAR),
            fuel: field(FUEL),
            transmission: field(TRANSMISSION),
            base_price: field(BASE_PRICE),
            discount_price: field(DISCOUNT_PRICE),
            tags: tag_words(record.get(TAGS)),
            image: field(IMAGE),
        }
    }
}

/// Renders a scalar field as text.
///
/// Strings are returned verbatim and numbers in decimal form. `null`, `false`,
/// zero, arrays, objects and missing fields all render as the empty string.
pub fn display_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) if n.as_f64() != Some(0.0) => number_text(n),
        Some(Value::Bool(true)) => "true".to_string(),
        _ => String::new(),
    }
}

/// Whole-valued floats drop the fraction, so `15990.0` reads `15990`.
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => (f as i64).to_string(),
        _ => n.to_string(),
    }
}

/// Raw tag entries of a record, one per scalar array element. Unlike
/// [`display_text`], `0` and `false` are kept as words; `null` is skipped.
pub fn tag_entries(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(number_text(n)),
                Value::Bool(b) => Some(b.to_string()),
                _ => None,
            })
            .filter(|text| !text.is_empty())
            .collect(),
        _ => Vec::new(),
    }
}

/// Tags as filter words: every entry split on whitespace.
fn tag_words(value: Option<&Value>) -> Vec<String> {
    tag_entries(value)
        .iter()
        .flat_map(|entry| entry.split_whitespace().map(str::to_string))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_conventional_fields() {
        let car = Car::from_record(&json!({
            "znacka": "Skoda",
            "model": "Octavia",
            "rok": 2019,
            "palivo": "Diesel",
            "prevodovka": "Manuál",
            "stara_cena": "15 990 €",
            "nova_cena": "",
            "tagy": ["combi", "rodinne"],
            "obrazok": "https://example.com/a.avif"
        }));

        assert_eq!(car.brand, "Skoda");
        assert_eq!(car.year, "2019");
        assert_eq!(car.base_price, "15 990 €");
        assert_eq!(car.discount_price, "");
        assert_eq!(car.tags, vec!["combi", "rodinne"]);
        assert_eq!(car.image, "https://example.com/a.avif");
    }

    #[test]
    fn malformed_fields_degrade_to_empty() {
        let car = Car::from_record(&json!({
            "znacka": null,
            "model": {"nested": true},
            "rok": 0,
            "tagy": "suv"
        }));

        assert_eq!(car, Car::default());
    }

    #[test]
    fn non_object_record_is_empty() {
        assert_eq!(Car::from_record(&json!(42)), Car::default());
        assert_eq!(Car::from_record(&Value::Null), Car::default());
    }

    #[test]
    fn whole_floats_render_without_fraction() {
        assert_eq!(display_text(Some(&json!(15990.0))), "15990");
        assert_eq!(display_text(Some(&json!(2.5))), "2.5");
        assert_eq!(display_text(Some(&json!(2019))), "2019");
        assert_eq!(display_text(Some(&json!(-0.0))), "");
    }

    #[test]
    fn zero_and_false_tags_are_kept() {
        let car = Car::from_record(&json!({"tagy": [0, false, 4.0, null, ""]}));
        assert_eq!(car.tags, vec!["0", "false", "4"]);
    }

    #[test]
    fn multi_word_tags_split_into_words() {
        let car = Car::from_record(&json!({"tagy": ["mestske auto", 4, null]}));
        assert_eq!(car.tags, vec!["mestske", "auto", "4"]);
    }
}
