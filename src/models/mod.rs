//! Data models for the open space management console.
//!
//! Field names serialize in camelCase to match the console's TypeScript types.

mod notification;
mod open_space;
mod report;

pub use notification::*;
pub use open_space::*;
pub use report::*;
