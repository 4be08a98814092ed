//! core
//!
//! Pure decision logic: the operation catalog, command resolution, and
//! invocation building. Nothing in this module touches the filesystem,
//! spawns processes, or talks to the OS window manager.

pub mod catalog;
pub mod invocation;
pub mod resolve;

pub use catalog::{Catalog, Operation};
pub use invocation::Invocation;
pub use resolve::resolve;
