//! Webhook event entities.

pub mod model;
pub mod status;

pub use model::WebhookEvent;
pub use status::WebhookEventStatus;
