//! In-place patching of cached lists from realtime change notifications.
//!
//! The backend pushes row-level change events per subscription. Each event is
//! applied to the local list by primary key; conflicting writes on the same key
//! resolve as last write wins.

use serde::{Deserialize, Serialize};

use crate::entities::{Batch, Department, Procedure, QuotaTask};

/// A row type addressable by primary key.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Procedure {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Department {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for QuotaTask {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Batch {
    fn key(&self) -> &str {
        &self.id
    }
}

/// A single realtime change notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum ChangeEvent<T> {
    Insert { record: T },
    Update { record: T },
    Delete { id: String },
}

/// What applying an event did to the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Patch {
    Inserted,
    Replaced,
    Removed,
    Ignored,
}

impl Patch {
    /// A background refetch follows every change that touched the list.
    #[must_use]
    pub const fn needs_refetch(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// A locally cached list kept in sync with change events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LiveList<T> {
    items: Vec<T>,
}

impl<T> Default for LiveList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Keyed> LiveList<T> {
    #[must_use]
    pub const fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Apply one event. Inserts and updates both upsert; new rows are
    /// prepended so the newest sits first, as the dashboard lists them.
    pub fn apply(&mut self, event: ChangeEvent<T>) -> Patch {
        match event {
            ChangeEvent::Insert { record } | ChangeEvent::Update { record } => {
                self.upsert(record)
            }
            ChangeEvent::Delete { id } => {
                let before = self.items.len();
                self.items.retain(|item| item.key() != id);
                if self.items.len() == before {
                    tracing::debug!(%id, "delete for unknown key ignored");
                    Patch::Ignored
                } else {
                    Patch::Removed
                }
            }
        }
    }

    fn upsert(&mut self, record: T) -> Patch {
        if let Some(slot) = self.items.iter_mut().find(|item| item.key() == record.key()) {
            *slot = record;
            Patch::Replaced
        } else {
            self.items.insert(0, record);
            Patch::Inserted
        }
    }
}
