pub mod api;
pub mod progress;
pub mod view;

pub use view::UploadPage;
