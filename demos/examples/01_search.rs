use stockai_demos::common::dashboard;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dash = dashboard()?;

    println!("Searching for 'aa'...");
    let found = dash.search("aa").await?.applied().unwrap_or_default();

    println!("\n## Search Results:");
    println!("{:<10} | {:<24} | Country", "Symbol", "Listing");
    println!("{:-<11}|{:-<26}|{:-<10}", "", "", "");
    for s in &found {
        println!(
            "{:<10} | {:<24} | {}",
            s.symbol,
            s.caption(),
            s.country.as_deref().unwrap_or("N/A")
        );
    }

    Ok(())
}
