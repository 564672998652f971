mod central_panel;
mod files_panel;
mod tools_panel;

pub use central_panel::central_panel;
pub use files_panel::files_panel;
pub use tools_panel::tools_panel;
