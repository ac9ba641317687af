// SQLite-backed persistence gateway

use crate::error::GatewayError;
use crate::gateway::PersistenceGateway;
use crate::models::Task;
use rusqlite::Connection;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

const STORE_DIR: &str = ".tasklist";
const DB_FILE: &str = "tasks.db";

/// Pending mutation awaiting a flush
#[derive(Debug, Clone)]
enum PendingOp {
    Insert(Task),
    Delete(String),
}

/// Durable task store over a local SQLite database.
///
/// Creates and deletes accumulate in an in-memory pending buffer (the dirty
/// state) and are applied in a single transaction by `save_if_dirty`.
/// `fetch_all` sees committed rows only, ordered by creation time.
pub struct SqliteGateway {
    db: Connection,
    pending: Vec<PendingOp>,
}

impl SqliteGateway {
    /// Open or create a store in a `.tasklist` subdirectory of the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, GatewayError> {
        let base_path = path.as_ref().join(STORE_DIR);

        fs::create_dir_all(&base_path).map_err(GatewayError::read)?;

        let db_path = base_path.join(DB_FILE);
        let db = Connection::open(&db_path).map_err(GatewayError::read)?;

        let gateway = Self {
            db,
            pending: Vec::new(),
        };
        gateway.create_schema()?;

        Ok(gateway)
    }

    fn create_schema(&self) -> Result<(), GatewayError> {
        debug!("Creating database schema");

        self.db
            .execute_batch(
                r#"
                CREATE TABLE IF NOT EXISTS tasks (
                    id TEXT PRIMARY KEY,
                    data_json TEXT NOT NULL,
                    created_at INTEGER NOT NULL
                );

                CREATE INDEX IF NOT EXISTS idx_tasks_created_at ON tasks(created_at);
                "#,
            )
            .map_err(GatewayError::write)?;

        Ok(())
    }
}

impl PersistenceGateway for SqliteGateway {
    fn fetch_all(&self) -> Result<Vec<Task>, GatewayError> {
        let mut stmt = self
            .db
            .prepare("SELECT data_json FROM tasks ORDER BY created_at, id")
            .map_err(GatewayError::read)?;

        let rows = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(GatewayError::read)?;

        let mut tasks = Vec::new();
        for row_result in rows {
            let data_json = row_result.map_err(GatewayError::read)?;
            let task: Task = serde_json::from_str(&data_json).map_err(GatewayError::read)?;
            tasks.push(task);
        }

        debug!(count = tasks.len(), "Fetched committed tasks");
        Ok(tasks)
    }

    fn create(&mut self, title: &str) -> Task {
        let task = Task::new(title);
        debug!(id = %task.id, "Buffered insert");
        self.pending.push(PendingOp::Insert(task.clone()));
        task
    }

    fn delete(&mut self, task: &Task) {
        debug!(id = %task.id, "Buffered delete");
        self.pending.push(PendingOp::Delete(task.id.clone()));
    }

    fn has_changes(&self) -> bool {
        !self.pending.is_empty()
    }

    fn save_if_dirty(&mut self) -> Result<(), GatewayError> {
        if self.pending.is_empty() {
            return Ok(());
        }

        let tx = self.db.transaction().map_err(GatewayError::write)?;

        for op in &self.pending {
            match op {
                PendingOp::Insert(task) => {
                    let data_json =
                        serde_json::to_string(task).map_err(GatewayError::write)?;
                    tx.execute(
                        "INSERT OR REPLACE INTO tasks (id, data_json, created_at)
                         VALUES (?1, ?2, ?3)",
                        rusqlite::params![task.id, data_json, task.created_at],
                    )
                    .map_err(GatewayError::write)?;
                }
                PendingOp::Delete(id) => {
                    tx.execute("DELETE FROM tasks WHERE id = ?1", rusqlite::params![id])
                        .map_err(GatewayError::write)?;
                }
            }
        }

        tx.commit().map_err(GatewayError::write)?;

        // Clear only after a successful commit; a failed flush stays retryable.
        info!(count = self.pending.len(), "Flushed pending changes");
        self.pending.clear();

        Ok(())
    }
}
