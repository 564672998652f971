#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod config;
pub mod editor;
pub mod element;
pub mod error;
pub mod input;
pub mod palette;
pub mod panels;
pub mod surface;
pub mod texture_manager;
pub mod tools;
pub mod view_transform;
pub mod workspace;

pub use app::MarkupApp;
pub use command::{Command, CommandHistory, ShapeStore};
pub use config::MarkupConfig;
pub use editor::Editor;
pub use element::{Shape, ShapeId, ShapeRef};
pub use error::{MarkupError, MarkupResult};
pub use input::{InputEvent, InputLocation};
pub use surface::DrawingSurface;
pub use tools::{Tool, ToolKind, ToolType};
pub use workspace::Workspace;
