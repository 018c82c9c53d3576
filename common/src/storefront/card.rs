use serde_json::Value;

use crate::model::car::Car;
use crate::storefront::price::PriceDisplay;

/// Placeholder for an empty spec chip.
const EMPTY_SPEC: &str = "-";

/// Everything a storefront card displays or is filtered on.
#[derive(Debug, Clone, PartialEq)]
pub struct CardData {
    /// Lower-cased brand, matched against filter values.
    pub make: String,
    /// Tag words, matched case-sensitively against filter values.
    pub tags: Vec<String>,
    pub heading: String,
    pub image: String,
    pub image_alt: String,
    /// Year, fuel and transmission chips.
    pub specs: [String; 3],
    pub price: PriceDisplay,
}

impl CardData {
    pub fn from_record(record: &Value) -> Self {
        CardData::from_car(&Car::from_record(record))
    }

    pub fn from_car(car: &Car) -> Self {
        let spec = |text: &str| {
            if text.is_empty() {
                EMPTY_SPEC.to_string()
            } else {
                text.to_string()
            }
        };

        CardData {
            make: car.brand.to_lowercase(),
            tags: car.tags.clone(),
            heading: format!("{} {} {}", car.year, car.brand.to_uppercase(), car.model),
            image: car.image.clone(),
            image_alt: format!("{} {} {}", car.year, car.brand, car.model),
            specs: [spec(&car.year), spec(&car.fuel), spec(&car.transmission)],
            price: PriceDisplay::for_car(car),
        }
    }

    /// Value of the card's `data-tags` attribute.
    pub fn data_tags(&self) -> String {
        self.tags.join(" ")
    }
}
