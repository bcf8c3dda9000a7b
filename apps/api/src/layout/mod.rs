// Layout engine: typography, visibility rules, the layout tree, the shared
// section composer, and A4 pagination for the export backend.
// Pagination is CPU-bound and runs inside tokio::task::spawn_blocking.

pub mod header;
pub mod paginate;
pub mod sections;
pub mod tree;
pub mod typography;
pub mod visibility;

// Re-export the public API consumed by templates and render backends.
pub use tree::{LayoutNode, LayoutTree};
pub use typography::{default_page_config, PageConfig};
pub use visibility::SectionKind;
