// src/handlers.rs

pub mod dashboard;
pub mod orders;
pub mod storefront;
