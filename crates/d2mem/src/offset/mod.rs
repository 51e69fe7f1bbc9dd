mod collection;
mod loader;
mod resolver;

pub use collection::*;
pub use loader::*;
pub use resolver::*;
