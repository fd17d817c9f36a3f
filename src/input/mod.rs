//! Externally supplied static data: translations and currency tables.
pub mod currency;
pub mod translation;
