pub mod events;

pub use events::UploadEvent;

use crate::usecases::common::UseCaseMetadata;

/// Multipart field name the upload endpoint expects
pub const CSV_FIELD_NAME: &str = "csv_file";

pub struct UploadProducts;

impl UseCaseMetadata for UploadProducts {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "upload_products"
    }

    fn display_name() -> &'static str {
        "Upload Products"
    }

    fn description() -> &'static str {
        "Bulk insert products from a CSV file with live batch progress"
    }
}
