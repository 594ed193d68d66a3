use std::net::SocketAddr;

use futures::{SinkExt, StreamExt};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio_util::codec::{FramedRead, FramedWrite};
use tracing::{debug, error, info, instrument};

use crate::codec::{self, RequestCodec};
use crate::connection::ConnHandle;
use crate::executor::{Executor, SubmitError};
use crate::frame::Frame;
use crate::Error;

pub async fn run(port: u16, queue_capacity: usize) -> Result<(), Error> {
    let _ = tracing_subscriber::fmt()
        .try_init()
        .map_err(|e| debug!("Failed to initialize global tracing: {}", e));

    let listener = TcpListener::bind(("127.0.0.1", port)).await?;
    let executor = Executor::start(queue_capacity);

    info!("Server listening on {}", listener.local_addr()?);

    loop {
        let (socket, client_address) = listener.accept().await?;
        let executor = executor.clone();
        info!("Accepted connection from {:?}", client_address);

        tokio::spawn(async move {
            if let Err(e) = handle_connection(socket, client_address, executor).await {
                error!(e);
            }
        });
    }
}

#[instrument(
    name = "connection",
    skip(stream, executor),
    fields(connection_id, client_address)
)]
async fn handle_connection(
    stream: TcpStream,
    client_address: SocketAddr,
    executor: Executor,
) -> Result<(), Error> {
    let (conn, outbound) = ConnHandle::new();

    tracing::Span::current()
        .record("connection_id", conn.id().to_string())
        .record("client_address", client_address.to_string());

    let (read_half, write_half) = stream.into_split();
    let writer = tokio::spawn(write_replies(write_half, outbound, conn.clone()));

    read_requests(read_half, &executor, &conn).await;

    conn.close();
    writer.await?;

    info!("Connection closed");
    Ok(())
}

/// Reads requests off the socket and queues them for execution until the
/// peer disconnects, the stream turns malformed, or the connection is
/// closed from the executor side (QUIT, hard failure).
async fn read_requests(read_half: OwnedReadHalf, executor: &Executor, conn: &ConnHandle) {
    let mut requests = FramedRead::new(read_half, RequestCodec);

    loop {
        let request = tokio::select! {
            request = requests.next() => request,
            _ = conn.closed() => return,
        };

        let parts = match request {
            Some(Ok(parts)) => parts,
            Some(Err(err)) => {
                // Best effort: tell the client what broke before hanging up.
                if let codec::Error::Protocol(_) = err {
                    conn.write(Frame::Error(err.to_string()));
                }
                return;
            }
            // Peer closed its end.
            None => return,
        };

        debug!("Received request: {:?}", parts);

        match executor.submit(conn.clone(), parts).await {
            Ok(()) => {}
            Err(err @ SubmitError::Busy) => {
                conn.write(Frame::Error(err.to_string()));
                return;
            }
            Err(SubmitError::WorkerGone) => return,
        }
    }
}

/// Drains the connection's outbound queue to the socket. After the close
/// signal, whatever is already queued (a QUIT reply, a final error) is
/// still flushed before the socket drops.
async fn write_replies(
    write_half: OwnedWriteHalf,
    mut outbound: UnboundedReceiver<Frame>,
    conn: ConnHandle,
) {
    let mut replies = FramedWrite::new(write_half, RequestCodec);

    loop {
        let frame = tokio::select! {
            biased;
            frame = outbound.recv() => frame,
            _ = conn.closed() => break,
        };

        let frame = match frame {
            Some(frame) => frame,
            None => return,
        };
        if replies.send(frame).await.is_err() {
            conn.close();
            return;
        }
    }

    while let Ok(frame) = outbound.try_recv() {
        if replies.send(frame).await.is_err() {
            return;
        }
    }
}
