use crate::domain::a002_webhook::api;
use crate::shared::api_utils::{error_display, show_error, ApiError, ErrorDisplay};
use contracts::domain::a002_webhook::{Webhook, WebhookDto, WebhookEventType};
use leptos::prelude::*;

/// Form fields as edited; the event type stays a raw select value until saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookForm {
    pub url: String,
    pub event_type: String,
    pub enabled: bool,
}

impl Default for WebhookForm {
    fn default() -> Self {
        Self {
            url: String::new(),
            event_type: String::new(),
            enabled: true,
        }
    }
}

impl From<&Webhook> for WebhookForm {
    fn from(w: &Webhook) -> Self {
        Self {
            url: w.url.clone(),
            event_type: w.event_type.as_str().to_string(),
            enabled: w.enabled,
        }
    }
}

impl WebhookForm {
    pub fn to_dto(&self) -> Result<WebhookDto, ApiError> {
        let url = self.url.trim();
        let event_type = WebhookEventType::from_str(&self.event_type);
        match event_type {
            Some(event_type) if !url.is_empty() => Ok(WebhookDto {
                url: url.to_string(),
                event_type,
                enabled: self.enabled,
            }),
            _ => Err(ApiError::Validation(
                "URL and Event Type are required".to_string(),
            )),
        }
    }
}

/// ViewModel for the webhook create / edit form
#[derive(Clone, Copy)]
pub struct WebhookDetailsViewModel {
    pub form: RwSignal<WebhookForm>,
    pub error: RwSignal<Option<String>>,
    pub is_saving: RwSignal<bool>,
    id: Option<i64>,
}

impl WebhookDetailsViewModel {
    pub fn new(existing: Option<Webhook>) -> Self {
        Self {
            form: RwSignal::new(existing.as_ref().map(WebhookForm::from).unwrap_or_default()),
            error: RwSignal::new(None),
            is_saving: RwSignal::new(false),
            id: existing.map(|w| w.id),
        }
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let dto = match self.form.get_untracked().to_dto() {
            Ok(dto) => dto,
            Err(e) => {
                self.error.set(Some(e.to_string()));
                return;
            }
        };

        let id = self.id;
        let error = self.error;
        let is_saving = self.is_saving;
        is_saving.set(true);
        error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            let result = match id {
                Some(id) => api::update_webhook(id, &dto).await,
                None => api::create_webhook(&dto).await,
            };
            is_saving.set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    match error_display(&e, "Failed to save webhook", "Error saving webhook") {
                        ErrorDisplay::Inline(text) => error.set(Some(text)),
                        ErrorDisplay::Alert(text) => show_error(&text),
                    }
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_requires_url_and_event() {
        let form = WebhookForm {
            url: "https://hooks.example.com".to_string(),
            ..Default::default()
        };
        assert_eq!(
            form.to_dto().unwrap_err().to_string(),
            "URL and Event Type are required"
        );

        let form = WebhookForm {
            url: "   ".to_string(),
            event_type: "all".to_string(),
            enabled: true,
        };
        assert!(form.to_dto().is_err());
    }

    #[test]
    fn test_form_to_dto() {
        let form = WebhookForm {
            url: " https://hooks.example.com/x ".to_string(),
            event_type: "product.deleted".to_string(),
            enabled: false,
        };
        let dto = form.to_dto().unwrap();
        assert_eq!(dto.url, "https://hooks.example.com/x");
        assert_eq!(dto.event_type, WebhookEventType::ProductDeleted);
        assert!(!dto.enabled);
    }

    #[test]
    fn test_new_form_is_enabled() {
        assert!(WebhookForm::default().enabled);
    }
}
