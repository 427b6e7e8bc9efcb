pub mod response;

pub use response::DeleteAllResponse;

use crate::usecases::common::UseCaseMetadata;

pub struct DeleteAllProducts;

impl UseCaseMetadata for DeleteAllProducts {
    fn usecase_index() -> &'static str {
        "u502"
    }

    fn usecase_name() -> &'static str {
        "delete_all_products"
    }

    fn display_name() -> &'static str {
        "Delete Products"
    }

    fn description() -> &'static str {
        "Remove every product from the catalog"
    }
}
