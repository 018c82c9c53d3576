use common::storefront::card::CardData;
use common::storefront::filter::{filter_options, Filter};
use serde_json::Value;

/// State of the storefront: the rendered cards and the active filter.
pub struct StorefrontComponent {
    pub cards: Vec<CardData>,
    /// Filter controls derived from the loaded cards, `all` first.
    pub filter_values: Vec<String>,
    pub filter: Filter,
    /// Guard so the list is fetched once.
    pub loaded: bool,
}

impl StorefrontComponent {
    pub fn new() -> Self {
        Self {
            cards: Vec::new(),
            filter_values: Vec::new(),
            filter: Filter::All,
            loaded: false,
        }
    }

    /// Replaces all cards with one per record, in order.
    pub fn show(&mut self, records: &[Value]) {
        self.cards = records.iter().map(CardData::from_record).collect();
        self.filter_values = filter_options(&self.cards);
        self.filter = Filter::All;
    }

    pub fn select_filter(&mut self, value: &str) {
        self.filter = Filter::parse(value);
    }
}
