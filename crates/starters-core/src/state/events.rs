use serde::{Deserialize, Serialize};

use crate::catalog::Item;

/// State changes that result from a dispatched command.
///
/// Each variant describes what happened. Failures use the `Result` error
/// channel, not the event stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// The selection was replaced. `previous == current` when the same item
    /// was selected again.
    SelectionChanged { previous: Item, current: Item },
}

impl Event {
    /// Whether this event changes what readers of the selection see.
    pub fn is_visible_change(&self) -> bool {
        match self {
            Event::SelectionChanged { previous, current } => previous != current,
        }
    }
}
