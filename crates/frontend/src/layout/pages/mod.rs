pub mod assets;
pub mod page;
pub mod registry;
pub mod session;

pub use page::PageHost;
pub use registry::{default_page, find_page, PageDescriptor, PAGES};
pub use session::{NavigationSessions, SessionToken};
