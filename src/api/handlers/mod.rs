//! REST API handlers organized by operation.

pub mod health;
pub mod records;
pub mod upload;
pub mod verify;

pub use health::*;
pub use records::*;
pub use upload::*;
pub use verify::*;
