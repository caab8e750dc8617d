use std::fmt;

use serde::{Deserialize, Serialize};

/// Notification emitted after every successful mutation
///
/// Carries the complete tag list, not a delta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagsChanged {
    pub tags: Vec<String>,
}

type Listener = Box<dyn FnMut(&TagsChanged)>;

/// Registry of "tags changed" listeners
///
/// Listeners run synchronously, in registration order, on the thread that
/// performed the mutation.
#[derive(Default)]
pub struct ChangeListeners {
    listeners: Vec<Listener>,
}

impl fmt::Debug for ChangeListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeListeners")
            .field("listener_count", &self.len())
            .finish()
    }
}

impl ChangeListeners {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a listener
    pub fn add<F>(&mut self, listener: F)
    where
        F: FnMut(&TagsChanged) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Deliver an event to every listener
    pub fn emit(&mut self, event: &TagsChanged) {
        for listener in &mut self.listeners {
            listener(event);
        }
    }

    /// Remove all listeners
    pub fn clear(&mut self) {
        self.listeners.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
