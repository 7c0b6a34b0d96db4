// Template context structures for Askama templates, organized by domain.

mod student;

pub use student::*;

pub const APP_NAME: &str = "Alumnos";

/// Common context shared by all pages. Templates access it as `ctx.app_name`, etc.
pub struct PageContext {
    pub app_name: String,
    pub current_path: String,
}

impl PageContext {
    pub fn new(current_path: &str) -> Self {
        Self {
            app_name: APP_NAME.to_string(),
            current_path: current_path.to_string(),
        }
    }
}
