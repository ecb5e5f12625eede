pub mod alerts;
pub mod catalog;
pub mod dashboard;
pub mod offers;
pub mod orders;
pub mod pharmacy;
pub mod stock;
pub mod storefront;
