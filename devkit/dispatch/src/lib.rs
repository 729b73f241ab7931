pub mod action;
pub mod exec;
pub mod invocation;

pub use action::{Action, Cli};
pub use exec::{DispatchError, execute};
pub use invocation::{Invocation, Toolchain};
