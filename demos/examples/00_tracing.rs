use stockai_demos::common::dashboard;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=info,stockai=debug,stockai_http=trace
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let dash = dashboard()?;
    tracing::info!(connector = dash.connector_name(), "dashboard ready");

    dash.health().await?;
    let _ = dash.search("AAP").await?;
    let _ = dash.load_bars("AAPL.US").await?;
    let _ = dash.load_patterns(stockai_demos::common::today()).await?;

    Ok(())
}
