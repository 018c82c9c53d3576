//! Mapping between stored records and the admin page's edit form.
//!
//! The form only knows the conventional fields. When a record is edited, its
//! other keys are carried over untouched.

use serde_json::{Map, Value};

use crate::model::car::{
    display_text, tag_entries, BASE_PRICE, BRAND, DISCOUNT_PRICE, FUEL, IMAGE, MODEL, TAGS,
    TRANSMISSION, YEAR,
};

/// Text inputs of the admin form. `tags` is a comma-separated list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarForm {
    pub brand: String,
    pub model: String,
    pub year: String,
    pub fuel: String,
    pub transmission: String,
    pub base_price: String,
    pub discount_price: String,
    pub tags: String,
    pub image: String,
}

/// Identifies one input of [`CarForm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Brand,
    Model,
    Year,
    Fuel,
    Transmission,
    BasePrice,
    DiscountPrice,
    Tags,
    Image,
}

impl FormField {
    pub const ALL: [FormField; 9] = [
        FormField::Brand,
        FormField::Model,
        FormField::Year,
        FormField::Fuel,
        FormField::Transmission,
        FormField::BasePrice,
        FormField::DiscountPrice,
        FormField::Tags,
        FormField::Image,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Brand => "Značka",
            FormField::Model => "Model",
            FormField::Year => "Rok",
            FormField::Fuel => "Palivo",
            FormField::Transmission => "Prevodovka",
            FormField::BasePrice => "Cena",
            FormField::DiscountPrice => "Zľavnená cena",
            FormField::Tags => "Tagy (oddelené čiarkou)",
            FormField::Image => "Obrázok (URL)",
        }
    }
}

impl CarForm {
    pub fn from_record(record: &Value) -> Self {
        let field = |name: &str| display_text(record.get(name));

        CarForm {
            brand: field(BRAND),
            model: field(MODEL),
            year: field(YEAR),
            fuel: field(FUEL),
            transmission: field(TRANSMISSION),
            base_price: field(BASE_PRICE),
            discount_price: field(DISCOUNT_PRICE),
            tags: tag_entries(record.get(TAGS)).join(", "),
            image: field(IMAGE),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Brand => &self.brand,
            FormField::Model => &self.model,
            FormField::Year => &self.year,
            FormField::Fuel => &self.fuel,
            FormField::Transmission => &self.transmission,
            FormField::BasePrice => &self.base_price,
            FormField::DiscountPrice => &self.discount_price,
            FormField::Tags => &self.tags,
            FormField::Image => &self.image,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Brand => &mut self.brand,
            FormField::Model => &mut self.model,
            FormField::Year => &mut self.year,
            FormField::Fuel => &mut self.fuel,
            FormField::Transmission => &mut self.transmission,
            FormField::BasePrice => &mut self.base_price,
            FormField::DiscountPrice => &mut self.discount_price,
            FormField::Tags => &mut self.tags,
            FormField::Image => &mut self.image,
        };
        *slot = value;
    }

    /// Builds the record to store. Keys of `original` that the form does not
    /// cover are kept; a year made only of digits is stored as a number.
    pub fn to_record(&self, original: Option<&Value>) -> Value {
        let mut record = match original {
            Some(Value::Object(map)) => map.clone(),
            _ => Map::new(),
        };

        let text = |value: &str| Value::String(value.trim().to_string());
        record.insert(BRAND.into(), text(&self.brand));
        record.insert(MODEL.into(), text(&self.model));
        record.insert(YEAR.into(), year_value(&self.year));
        record.insert(FUEL.into(), text(&self.fuel));
        record.insert(TRANSMISSION.into(), text(&self.transmission));
        record.insert(BASE_PRICE.into(), text(&self.base_price));
        record.insert(DISCOUNT_PRICE.into(), text(&self.discount_price));
        record.insert(
            TAGS.into(),
            Value::Array(
                self.tags
                    .split(',')
                    .map(str::trim)
                    .filter(|tag| !tag.is_empty())
                    .map(|tag| Value::String(tag.to_string()))
                    .collect(),
            ),
        );
        record.insert(IMAGE.into(), text(&self.image));

        Value::Object(record)
    }
}

fn year_value(year: &str) -> Value {
    let year = year.trim();
    match year.parse::<u32>() {
        Ok(number) => Value::from(number),
        Err(_) => Value::String(year.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fills_form_from_record() {
        let form = CarForm::from_record(&json!({
            "znacka": "Audi",
            "model": "A4",
            "rok": 2018,
            "tagy": ["sedan", "mestske auto"]
        }));

        assert_eq!(form.brand, "Audi");
        assert_eq!(form.year, "2018");
        assert_eq!(form.tags, "sedan, mestske auto");
        assert_eq!(form.discount_price, "");
    }

    #[test]
    fn builds_new_record() {
        let mut form = CarForm::default();
        form.set(FormField::Brand, " Kia ".to_string());
        form.set(FormField::Year, "2020".to_string());
        form.set(FormField::Tags, "suv, , rodinne ".to_string());

        let record = form.to_record(None);

        assert_eq!(record["znacka"], json!("Kia"));
        assert_eq!(record["rok"], json!(2020));
        assert_eq!(record["tagy"], json!(["suv", "rodinne"]));
        assert_eq!(record["nova_cena"], json!(""));
    }

    #[test]
    fn keeps_unknown_fields_of_original() {
        let original = json!({"znacka": "Ford", "vin": "WF0XXX", "rok": "2015/2016"});
        let mut form = CarForm::from_record(&original);
        form.set(FormField::Model, "Focus".to_string());

        let record = form.to_record(Some(&original));

        assert_eq!(record["vin"], json!("WF0XXX"));
        assert_eq!(record["model"], json!("Focus"));
        assert_eq!(record["rok"], json!("2015/2016"));
        assert_eq!(form.get(FormField::Brand), "Ford");
    }
}
