pub mod catalog;
pub mod preview;
pub mod reports;

pub use catalog::CatalogReport;
pub use preview::{PreviewObjective, draw_previews};
