//! sceneprops Editor - editor-side glue around the transformer registry.
//!
//! Binds property paths on a scene object to transformer kinds, describes
//! them for the UI and applies edits coming back.

pub mod config;
pub mod editor;
pub mod error;

pub use config::EditorConfig;
pub use editor::{DescribedProperty, PropertyBinding, PropertyEdit, PropertyEditor};
pub use error::EditorError;
