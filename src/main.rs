use anyhow::Result;
use linekv::{Console, InMemoryStore, Server};
use structopt::StructOpt;
use tokio::net::TcpListener;
use tracing::info;

#[derive(StructOpt)]
struct Opts {
    #[structopt(short, long, default_value = "0.0.0.0:6379")]
    address: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logger();

    let opts = Opts::from_args();

    run_with(opts).await
}

async fn run_with(opts: Opts) -> Result<()> {
    let listener = TcpListener::bind(&opts.address).await?;

    info!("Listening at {}", opts.address);

    let store = InMemoryStore::new();

    tokio::spawn(Server::new(listener, store.clone()).start());

    // The console owns stdout for the life of the process; when its
    // input ends, so does the process, taking the server task with it.
    Console::stdio(store).run().await
}

fn init_logger() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init()
}
