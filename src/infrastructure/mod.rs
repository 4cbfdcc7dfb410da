// Infrastructure layer
pub mod processors;
pub mod registry;

pub use processors::*;
pub use registry::*;
