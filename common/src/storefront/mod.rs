//! Pure storefront logic shared with the frontend: how a record is priced,
//! which attributes its card carries, which cards a filter reveals, and how
//! the admin form maps to and from records.

pub mod card;
pub mod filter;
pub mod form;
pub mod price;
