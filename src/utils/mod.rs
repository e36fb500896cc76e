// Shared utilities

pub mod constants;
pub mod storage;
pub mod scheduler;

pub use constants::*;
pub use storage::*;
pub use scheduler::*;
