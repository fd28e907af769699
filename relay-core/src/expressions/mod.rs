mod path;
mod template;

pub use path::{extract, value_text};
pub use template::resolve;
