// In-memory task list synchronized with a persistence gateway

use crate::error::StoreError;
use crate::gateway::PersistenceGateway;
use crate::models::Task;
use tracing::debug;

/// Authoritative in-memory view of the task list.
///
/// Owns its gateway, handed in at construction; all mutations of the list go
/// through the four operations here and nowhere else. The UI layer renders
/// from `tasks()` after each operation.
///
/// Single-threaded and synchronous: every operation completes before the
/// next begins, so there is no locking.
pub struct TaskStore<G: PersistenceGateway> {
    gateway: G,
    tasks: Vec<Task>,
}

impl<G: PersistenceGateway> TaskStore<G> {
    /// Create an empty store over the given gateway. Call `load` to populate.
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            tasks: Vec::new(),
        }
    }

    /// Current ordered sequence.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks in the sequence.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Replace the sequence with the gateway's committed tasks, preserving
    /// the gateway's order.
    ///
    /// Idempotent and safe to call repeatedly. On a failed read the previous
    /// sequence is kept and the error is returned.
    pub fn load(&mut self) -> Result<(), StoreError> {
        let tasks = self.gateway.fetch_all()?;
        debug!(count = tasks.len(), "Loaded task list");
        self.tasks = tasks;
        Ok(())
    }

    /// Append a new task with the trimmed title and flush it.
    ///
    /// Returns the index of the new task (the previous length). A failed
    /// flush propagates and leaves the sequence unchanged.
    pub fn add(&mut self, title: &str) -> Result<usize, StoreError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(StoreError::EmptyTitle);
        }

        let task = self.gateway.create(title);
        if self.gateway.has_changes() {
            self.gateway.save_if_dirty()?;
        }

        debug!(id = %task.id, title, "Added task");
        self.tasks.push(task);
        Ok(self.tasks.len() - 1)
    }

    /// Remove the task at `index` from the gateway and the sequence, and
    /// return it.
    ///
    /// After the flush the sequence is re-fetched from the gateway rather
    /// than trusting the local removal alone (a guard against drift between
    /// the two). A failed flush leaves the sequence unchanged; a failed
    /// re-fetch propagates but keeps the local removal, so a task the caller
    /// was told is gone cannot reappear.
    pub fn delete(&mut self, index: usize) -> Result<Task, StoreError> {
        let len = self.tasks.len();
        if index >= len {
            return Err(StoreError::OutOfRange { index, len });
        }

        let task = self.tasks[index].clone();
        self.gateway.delete(&task);
        self.gateway.save_if_dirty()?;

        self.tasks.remove(index);
        debug!(id = %task.id, index, "Deleted task");

        self.tasks = self.gateway.fetch_all()?;
        Ok(task)
    }

    /// Move the task at `from` to position `to`, shifting the tasks between
    /// them.
    ///
    /// In-memory only: durable order is unchanged, and a later `load`
    /// restores the gateway's order.
    pub fn move_task(&mut self, from: usize, to: usize) -> Result<(), StoreError> {
        let len = self.tasks.len();
        if from >= len {
            return Err(StoreError::OutOfRange { index: from, len });
        }
        if to >= len {
            return Err(StoreError::OutOfRange { index: to, len });
        }

        let task = self.tasks.remove(from);
        self.tasks.insert(to, task);
        debug!(from, to, "Moved task");
        Ok(())
    }
}
