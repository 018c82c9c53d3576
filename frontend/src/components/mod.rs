pub mod admin;
pub mod helpers;
pub mod storefront;
