pub mod estimate_panel;
pub mod field;
pub mod timeline;
pub mod toast;
