pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod first_wins;
pub mod icons;
pub mod modal;
pub mod number_format;
pub mod pagination;
pub mod sse;
pub mod store;
