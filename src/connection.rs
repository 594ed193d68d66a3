use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::sync::Notify;
use uuid::Uuid;

use crate::frame::Frame;

/// A cloneable handle to one client connection: the reply sink plus a
/// close flag. The worker task holds one per in-flight job so it can reply
/// (or skip the work entirely) long after the reader moved on.
#[derive(Debug, Clone)]
pub struct ConnHandle {
    id: Uuid,
    outbound: UnboundedSender<Frame>,
    shared: Arc<Shared>,
}

#[derive(Debug)]
struct Shared {
    closed: AtomicBool,
    notify: Notify,
}

impl ConnHandle {
    /// Creates the handle together with the receiving end of its outbound
    /// queue, which the connection's writer task drains to the socket.
    pub fn new() -> (ConnHandle, UnboundedReceiver<Frame>) {
        let (outbound, rx) = mpsc::unbounded_channel();
        let handle = ConnHandle {
            id: Uuid::new_v4(),
            outbound,
            shared: Arc::new(Shared {
                closed: AtomicBool::new(false),
                notify: Notify::new(),
            }),
        };
        (handle, rx)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Queues a reply for the writer task. Frames sent after the writer is
    /// gone are dropped silently; the connection is on its way out anyway.
    pub fn write(&self, frame: Frame) {
        let _ = self.outbound.send(frame);
    }

    /// Marks the connection closed and wakes everyone waiting on `closed`.
    pub fn close(&self) {
        self.shared.closed.store(true, Ordering::SeqCst);
        self.shared.notify.notify_waiters();
    }

    pub fn is_closed(&self) -> bool {
        self.shared.closed.load(Ordering::SeqCst)
    }

    /// Resolves once `close` has been called, however long ago.
    pub async fn closed(&self) {
        loop {
            // Register before checking the flag so a close racing with this
            // call cannot be missed.
            let notified = self.shared.notify.notified();
            if self.is_closed() {
                return;
            }
            notified.await;
        }
    }
}
