pub mod request;
pub mod response;

pub use request::{UploadImageRequest, UploadsRequest};
pub use response::{Image, PagedImages};
