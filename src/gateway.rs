// Contract between the task store and durable storage

use crate::error::GatewayError;
use crate::models::Task;

/// Narrow interface the store requires from durable storage.
///
/// Implementations buffer creates and deletes as pending ("dirty") state and
/// apply them on `save_if_dirty`. `fetch_all` reads committed state only, in
/// a stable order of the implementation's choosing.
pub trait PersistenceGateway {
    /// All committed tasks, in the gateway's stable order.
    fn fetch_all(&self) -> Result<Vec<Task>, GatewayError>;

    /// Mint a task with a fresh id and buffer its insertion. Does not touch
    /// durable storage until the next flush.
    fn create(&mut self, title: &str) -> Task;

    /// Buffer removal of the given task.
    fn delete(&mut self, task: &Task);

    /// Whether any buffered operations await a flush.
    fn has_changes(&self) -> bool;

    /// Flush buffered operations to durable storage. No-op when clean. On
    /// failure the buffer must be retained so the flush can be retried.
    fn save_if_dirty(&mut self) -> Result<(), GatewayError>;
}
