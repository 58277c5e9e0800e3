pub mod backup;
pub mod common;
pub mod restore;

pub use backup::*;
pub use common::*;
pub use restore::*;
