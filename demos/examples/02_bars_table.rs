use stockai::{ChangeTag, DisplayOrder};
use stockai_core::{format_date, format_price, format_time, format_volume};
use stockai_demos::common::dashboard;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dash = dashboard()?;

    let loaded = dash.load_bars("AAPL.US").await?;
    println!("Loaded {:?} bars for AAPL.US", loaded.applied());

    if let Some(stats) = dash.stats().await {
        println!(
            "High {} | Low {} | Last close {} | {} bars",
            format_price(stats.max_high),
            format_price(stats.min_low),
            format_price(stats.last_close),
            stats.total
        );
    }

    // Oldest first without another round trip.
    dash.set_display_order(DisplayOrder::Oldest).await;
    let page = dash.bars_page(0).await;
    println!("\nPage {} of {}", page.index + 1, page.page_count);
    println!(
        "{:<10} | {:<5} | {:>9} | {:>9} | {:>12} | Change",
        "Date", "Time", "Open", "Close", "Volume"
    );
    for bar in page.rows.iter().take(10) {
        let change = ChangeTag::new(bar.close, bar.open);
        println!(
            "{:<10} | {:<5} | {:>9} | {:>9} | {:>12} | {}",
            format_date(bar.date)?,
            format_time(bar.time)?,
            format_price(bar.open),
            format_price(bar.close),
            format_volume(bar.volume),
            change.label
        );
    }

    let more = dash.load_more_bars().await?;
    println!("\nAfter load more: {:?} bars", more.applied());

    Ok(())
}
