use super::events::Event;
use super::types::Command;

/// Trait for dispatching selection commands.
///
/// Decouples what a view asks for from how the owning screen applies it.
///
/// # Semantics
///
/// - **Ordering**: Commands execute in the order received. No implicit batching.
/// - **Idempotency**: Selecting the current item again succeeds and leaves the
///   selection unchanged.
/// - **Events**: On success, dispatch returns the events describing what
///   changed. The caller is responsible for triggering a re-render.
pub trait Store {
    type Error;
    fn dispatch(&mut self, cmd: Command) -> Result<Vec<Event>, Self::Error>;
}
