use carmine::executor::DEFAULT_QUEUE_CAPACITY;
use carmine::{server, Error};
use clap::Parser;

const PORT: u16 = 6380;

#[derive(Parser, Debug)]
struct Args {
    /// The port to listen on
    #[arg(short, long, env = "PORT", default_value_t = PORT)]
    port: u16,

    /// How many commands may wait for the execution worker before new
    /// submissions are rejected
    #[arg(long, default_value_t = DEFAULT_QUEUE_CAPACITY)]
    queue_capacity: usize,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let args = Args::parse();

    server::run(args.port, args.queue_capacity).await
}
