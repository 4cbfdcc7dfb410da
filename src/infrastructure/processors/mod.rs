// Processors module
pub mod css_processor;
pub mod html_processor;
pub mod js_processor;

pub use css_processor::*;
pub use html_processor::*;
pub use js_processor::*;
