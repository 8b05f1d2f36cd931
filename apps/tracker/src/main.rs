use stock::QuoteClient;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracker::{Error, Session, config::Config, repl};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let quotes = QuoteClient::new(config.quote_api.clone(), config.timeout)?;
    info!(quote_api = %config.quote_api, timeout = ?config.timeout, "starting");

    let mut session = Session::new(quotes);
    let mut lines = repl::spawn_stdin_reader();
    let shutdown = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    let mut stdout = std::io::stdout();

    repl::run(&mut session, &mut lines, shutdown, &mut stdout).await
}
