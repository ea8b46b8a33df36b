mod error;
mod stores;
mod tables;

pub use error::*;
pub use stores::*;
pub use tables::*;
