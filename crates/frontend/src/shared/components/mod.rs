pub mod page_header;
pub mod pagination_controls;
pub mod response_message;

pub use page_header::PageHeader;
pub use pagination_controls::PaginationControls;
pub use response_message::{ResponseKind, ResponseMessage, ResponseState};
