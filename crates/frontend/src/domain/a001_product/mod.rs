pub mod api;
pub mod filters;
pub mod ui;

use crate::shared::store::Keyed;
use contracts::domain::a001_product::Product;

impl Keyed for Product {
    type Key = String;

    fn key(&self) -> String {
        self.sku.clone()
    }
}
