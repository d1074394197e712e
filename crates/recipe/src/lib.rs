mod error;
mod store;
mod types;

pub use error::*;
pub use store::*;
pub use types::*;
