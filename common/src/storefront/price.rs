use crate::model::car::Car;

/// Label shown when a car has neither a base nor a discounted price.
pub const PRICE_ON_REQUEST: &str = "Cena na vyžiadanie";

/// How the price block of a card is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceDisplay {
    /// Struck-through base price next to a highlighted discounted price.
    Discounted { original: String, discounted: String },
    /// A single price, or the on-request label.
    Single(String),
}

impl PriceDisplay {
    pub fn for_car(car: &Car) -> Self {
        if !car.discount_price.trim().is_empty() {
            return PriceDisplay::Discounted {
                original: car.base_price.clone(),
                discounted: car.discount_price.clone(),
            };
        }

        if car.base_price.trim().is_empty() {
            PriceDisplay::Single(PRICE_ON_REQUEST.to_string())
        } else {
            PriceDisplay::Single(car.base_price.clone())
        }
    }
}
