//! Types for the product endpoints.
//!
//! [`Product`] is used both as the response model and as the body of create and update calls;
//! read-only fields are optional and left out of the request when unset.
//!
//! ```
//! use printify_client_sdk::products::types::{
//!     PrintArea, PrintAreaPlaceholder, PrintImage, Product, ProductVariant,
//! };
//!
//! let product = Product::builder()
//!     .title("Logo tee")
//!     .description("Soft cotton t-shirt")
//!     .blueprint_id(384)
//!     .print_provider_id(1)
//!     .variants(vec![ProductVariant::builder().id(45740).price(400).build()])
//!     .print_areas(vec![
//!         PrintArea::builder()
//!             .variant_ids(vec![45740])
//!             .placeholders(vec![
//!                 PrintAreaPlaceholder::builder()
//!                     .position("front")
//!                     .images(vec![
//!                         PrintImage::builder()
//!                             .id("5d15ca551163cde90d7b2203")
//!                             .x(0.5)
//!                             .y(0.5)
//!                             .scale(1.0)
//!                             .angle(0.0)
//!                             .build(),
//!                     ])
//!                     .build(),
//!             ])
//!             .build(),
//!     ])
//!     .build();
//!
//! assert!(product.id.is_none());
//! ```

pub mod request;
pub mod response;

pub use request::{ProductsRequest, PublishingProperties};
pub use response::{
    External, MockupImage, OptionValue, PrintArea, PrintAreaPlaceholder, PrintDetails, PrintImage,
    Product, ProductOption, ProductVariant,
};
