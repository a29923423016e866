//! Flippo referee-protocol player

use flippo::protocol::Session;
use tracing_subscriber::EnvFilter;

fn main() {
    // stdout carries protocol output only; diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut session = Session::new();
    if let Err(err) = session.run() {
        tracing::error!(%err, "session ended with an I/O error");
    }
}
