pub mod enrich;
pub mod project;
pub mod validate;

pub use enrich::*;
pub use project::*;
pub use validate::*;
