pub mod api_response;
pub mod serde_helpers;

pub use api_response::MutationResponse;
