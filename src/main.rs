use clap::Parser;
use trivia_api::{
    db::{Db, MemoryDb},
    AppState,
};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// PostgreSQL connection string. Without it questions live in memory only.
    #[arg(long, env)]
    database_url: Option<String>,

    /// The address to bind to.
    #[arg(short, long, env, default_value = "127.0.0.1:5000")]
    address: String,

    /// Upper bound on pooled database connections.
    #[arg(long, env, default_value_t = 5)]
    max_connections: u32,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "tower=info,trivia_api=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let state = match &args.database_url {
        Some(url) => AppState::new(Db::new(url, args.max_connections).await?),
        None => {
            tracing::warn!("DATABASE_URL not set, serving from an in-memory store");
            AppState::new(MemoryDb::seeded())
        }
    };

    let address = args.address.parse::<std::net::SocketAddr>()?;
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!("listening on {address}");

    axum::serve(listener, trivia_api::router(state)).await?;

    Ok(())
}
