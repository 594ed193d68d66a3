use std::time::Duration;

use bytes::Bytes;
use thiserror::Error as ThisError;
use tokio::sync::mpsc;
use tracing::{debug, error};

use crate::commands::executable::Executable;
use crate::commands::Command;
use crate::connection::ConnHandle;
use crate::frame::Frame;
use crate::store::Store;

pub const DEFAULT_QUEUE_CAPACITY: usize = 1024 * 1024;

/// How long a reader may wait for queue space before its connection is
/// declared too slow to serve.
const SUBMIT_TIMEOUT: Duration = Duration::from_millis(100);

/// One request waiting its turn: the raw decoded parts plus the handle to
/// reply through.
struct Job {
    conn: ConnHandle,
    parts: Vec<Bytes>,
}

/// Hands requests from all connections to the single worker task that owns
/// the `Store`. Serializing every command through one queue is what makes
/// the store safe without any locking.
#[derive(Clone)]
pub struct Executor {
    jobs: mpsc::Sender<Job>,
}

#[derive(Debug, ThisError, PartialEq)]
pub enum SubmitError {
    #[error("ERR server too busy")]
    Busy,
    #[error("execution worker is gone")]
    WorkerGone,
}

impl Executor {
    /// Spawns the worker task and returns the shared submission handle.
    pub fn start(queue_capacity: usize) -> Executor {
        let (jobs, rx) = mpsc::channel(queue_capacity);
        tokio::spawn(run_worker(rx));
        Executor { jobs }
    }

    /// Queues one request. A queue that stays full past the submit deadline
    /// means the server is saturated; the caller closes the connection
    /// rather than letting it pile up more work.
    pub async fn submit(&self, conn: ConnHandle, parts: Vec<Bytes>) -> Result<(), SubmitError> {
        self.jobs
            .send_timeout(Job { conn, parts }, SUBMIT_TIMEOUT)
            .await
            .map_err(|err| match err {
                mpsc::error::SendTimeoutError::Timeout(_) => SubmitError::Busy,
                mpsc::error::SendTimeoutError::Closed(_) => SubmitError::WorkerGone,
            })
    }
}

/// The single task with mutable access to the keyspace. Jobs run strictly
/// in arrival order, so each connection sees its replies in the order it
/// sent requests.
async fn run_worker(mut jobs: mpsc::Receiver<Job>) {
    let mut store = Store::new();

    while let Some(Job { conn, parts }) = jobs.recv().await {
        if conn.is_closed() {
            debug!(connection_id = %conn.id(), "dropping job for closed connection");
            continue;
        }

        let command = match Command::try_from(parts) {
            Ok(command) => command,
            Err(err) => {
                conn.write(Frame::Error(err.to_string()));
                continue;
            }
        };

        let quit = matches!(command, Command::Quit(_));
        match command.exec(&mut store) {
            Ok(frame) => conn.write(frame),
            Err(err) => {
                error!(connection_id = %conn.id(), "command execution failed: {}", err);
                conn.close();
                continue;
            }
        }

        if quit {
            conn.close();
        }
    }
}
