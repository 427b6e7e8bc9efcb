pub mod aggregate;

pub use aggregate::{
    Webhook, WebhookDto, WebhookEventType, WebhookListResponse, WebhookTestResponse,
    WebhookToggleResponse,
};
