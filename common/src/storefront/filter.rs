use crate::storefront::card::CardData;

/// Value of the control that clears all filtering.
pub const FILTER_ALL: &str = "all";

/// The active storefront filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    /// A brand (compared with the lower-cased make) or a tag.
    Value(String),
}

impl Filter {
    pub fn parse(value: &str) -> Self {
        if value == FILTER_ALL {
            Filter::All
        } else {
            Filter::Value(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Filter::All => FILTER_ALL,
            Filter::Value(value) => value,
        }
    }

    /// Whether `card` stays visible under this filter.
    pub fn reveals(&self, card: &CardData) -> bool {
        match self {
            Filter::All => true,
            Filter::Value(value) => card.make == *value || card.tags.iter().any(|t| t == value),
        }
    }
}

/// Filter controls for a loaded list: `all`, then every distinct make, then
/// every distinct tag, each in first-seen order.
pub fn filter_options(cards: &[CardData]) -> Vec<String> {
    let mut options = vec![FILTER_ALL.to_string()];
    let makes = cards.iter().map(|card| &card.make);
    let tags = cards.iter().flat_map(|card| card.tags.iter());

    for value in makes.chain(tags) {
        if !value.is_empty() && !options.contains(value) {
            options.push(value.clone());
        }
    }
    options
}
