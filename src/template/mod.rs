//! Template management
//!
//! A template is a named, persisted prompt configuration. The store merges
//! three sources: built-in defaults, custom records loaded from disk at
//! open, and records created at runtime through validate + save.

mod builtin;
mod musical;
mod record;
mod store;

pub use musical::install_musical_templates;
pub use record::{TemplateCategory, TemplateRecord};
pub use store::TemplateStore;
