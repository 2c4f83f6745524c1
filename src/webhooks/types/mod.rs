pub mod request;
pub mod response;

pub use request::{CreateWebhookRequest, ModifyWebhookRequest};
pub use response::Webhook;
