pub mod api;
pub mod state;
pub mod ui;

use crate::shared::store::Keyed;
use contracts::domain::a002_webhook::Webhook;

impl Keyed for Webhook {
    type Key = i64;

    fn key(&self) -> i64 {
        self.id
    }
}
