//! Types for the catalog endpoints.
//!
//! The catalog is read-only, so every type here is a response model. They still implement
//! [`serde::Serialize`] and carry [`bon`] builders, which makes them usable as fixtures.

pub mod response;

pub use response::{
    Blueprint, Placeholder, PrintProvider, Shipping, ShippingHandlingTime, ShippingProfile,
    ShippingProfileItem, Variant, VariantOptions,
};
