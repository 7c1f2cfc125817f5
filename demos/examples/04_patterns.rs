use stockai::Lookback;
use stockai_demos::common::{dashboard, today};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dash = dashboard()?;
    let _ = dash.load_bars("AAPL.US").await?;

    if let Some(card) = dash.open_series(Lookback::Year1, today()).await? {
        println!("AAPL.US opens: {} points ({})", card.opens.len(), card.change.label);
    }
    if let Some(start) = dash.current_trend_start().await? {
        println!("Current trend from {start}");
    }

    let found = dash.load_patterns(today()).await?;
    println!("Recent pattern matches: {:?}", found.applied());

    let page = dash.pattern_segments_page(0).await?;
    println!("{:<26} | {:>9} | {:>9} | Similarity", "Similar week", "Trend", "Next week");
    println!("{:-<27}|{:-<11}|{:-<11}|{:-<11}", "", "", "", "");
    for row in &page.rows {
        println!(
            "{:<26} | {:>9} | {:>9} | {:.1}",
            row.range_label(),
            row.trend_change().label,
            row.follow_on_change().label,
            row.similarity_score
        );
    }
    if page.has_next {
        println!("... {} more", page.total - page.rows.len());
    }

    Ok(())
}
