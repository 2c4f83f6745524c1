pub mod response;

pub use response::Shop;
