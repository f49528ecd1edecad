use anyhow::Result;
use enrolscraper::{
    fetch::{self, FetchConfig},
    render::{self, term::TermSurface},
};
use reqwest::Client;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();
    info!("startup");

    // ─── 2) configure the fetch ──────────────────────────────────────
    let use_proxy = std::env::args().any(|a| a == "--proxy");
    let config = FetchConfig {
        use_proxy,
        ..FetchConfig::default()
    };

    // ─── 3) one fetch, one render ────────────────────────────────────
    let client = Client::new();
    let outcome = fetch::fetch_result_set(&client, &config).await;

    let mut surface = TermSurface::new();
    surface.apply(&render::render(&outcome));
    surface.print();

    Ok(())
}
