use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    Success,
    Error,
}

impl ResponseKind {
    pub fn class(&self) -> &'static str {
        match self {
            ResponseKind::Success => "response-message response-success",
            ResponseKind::Error => "response-message response-error",
        }
    }
}

/// Inline outcome shown under a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseState {
    pub kind: ResponseKind,
    pub text: String,
}

impl ResponseState {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: ResponseKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: ResponseKind::Error,
            text: text.into(),
        }
    }
}

#[component]
pub fn ResponseMessage(#[prop(into)] state: Signal<Option<ResponseState>>) -> impl IntoView {
    view! {
        {move || state.get().map(|s| view! {
            <div class=s.kind.class() style="white-space: pre-wrap;">{s.text}</div>
        })}
    }
}
