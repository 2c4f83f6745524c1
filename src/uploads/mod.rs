//! The image library of the account.
//!
//! **Feature flag:** `uploads` (enabled by default)
//!
//! Images are uploaded either by URL, which Printify downloads, or as base64 encoded contents
//! (see [`types::UploadImageRequest`]). Uploaded images are referenced by id from product print
//! areas.
//!
//! ## Available Endpoints
//!
//! | Endpoint | Description |
//! |----------|-------------|
//! | `GET uploads.json` | List uploaded images (paged) |
//! | `GET uploads/{id}.json` | Get an uploaded image by ID |
//! | `POST uploads/images.json` | Upload an image |
//! | `POST uploads/{id}/archive.json` | Archive an uploaded image |
//!
//! # Example
//!
//! ```no_run
//! use printify_client_sdk::Client;
//! use printify_client_sdk::uploads::types::UploadImageRequest;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::default().authenticate_from_env()?;
//!
//! let request = UploadImageRequest::from_bytes("logo.png", &std::fs::read("logo.png")?);
//! if let Some(image) = client.uploads().upload(&request).await? {
//!     println!("uploaded {} as {}", image.file_name, image.id);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod types;

pub use client::Uploads;
