mod command;
mod error;
mod plan;

pub use command::*;
pub use error::*;
pub use plan::*;
