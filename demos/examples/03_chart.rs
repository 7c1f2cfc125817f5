use stockai::{ChangeTag, Lookback};
use stockai_core::{format_compact, format_price, thin_labels};
use stockai_demos::common::{dashboard, today};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dash = dashboard()?;
    let _ = dash.load_bars("MSFT.US").await?;

    for lookback in [Lookback::Week1, Lookback::Month3, Lookback::AllTime] {
        let Some(chart) = dash.chart_window(lookback, today()).await? else {
            println!("{lookback}: no data");
            continue;
        };
        let change = ChangeTag::from_pct(chart.price_change());
        let volume = ChangeTag::from_pct(chart.volume_change());
        println!(
            "{lookback:<9} {} | {} {} | close {} ({}) | avg volume {} ({})",
            chart.range_label,
            chart.bars_count,
            chart.unit_label(),
            format_price(chart.last_close),
            change.label,
            format_compact(chart.avg_volume),
            volume.label
        );
        println!(
            "          trend: {}% up of {} | axis: {}",
            chart.trend.up_percent(),
            chart.trend.total,
            thin_labels(&chart.labels)
                .into_iter()
                .filter(|l| !l.is_empty())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    Ok(())
}
