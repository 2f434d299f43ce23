use clap::Parser;
use dirview_server::{log, server};

// Allow the server to return its version with a --version flag
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
struct Opts {
    #[clap(short, long)]
    version: bool,
    #[clap(short, long)]
    debug: bool,
    #[clap(short, long)]
    port: Option<u16>,
    /// Base URL of the backend that produces the path listing
    #[clap(short, long, default_value = "http://127.0.0.1:8000")]
    backend: String,
}

#[tokio::main]
async fn main() {
    let opts: Opts = Opts::parse();
    if opts.version {
        println!("{}", VERSION);
        return;
    }
    let _guard = log::init_logging(opts.debug);
    let srv = server::get_server(opts.port, &opts.backend).await;
    srv.start().await;
}
