//! Selection state and the command/event seam used to change it.
//!
//! `SelectionState` holds the value; `Store` is how the owning screen mutates it.
//! Views never touch the state directly: they dispatch a `Command` and
//! re-render on the returned `Event`s.

pub mod errors;
pub mod events;
pub mod selection;
pub mod store;
pub mod types;

pub use errors::DispatchError;
pub use events::Event;
pub use selection::SelectionState;
pub use store::Store;
pub use types::Command;
