use stockai_core::SymbolInfo;

const ROWS: &[(&str, &str, &str, &str)] = &[
    ("AA.US", "nyse", "stocks", "us"),
    ("AAL.US", "nasdaq", "stocks", "us"),
    ("AAPL.US", "nasdaq", "stocks", "us"),
    ("ABBV.US", "nyse", "stocks", "us"),
    ("AMZN.US", "nasdaq", "stocks", "us"),
    ("MSFT.US", "nasdaq", "stocks", "us"),
    ("QQQ.US", "nasdaq", "etfs", "us"),
    ("SPY.US", "nysearca", "etfs", "us"),
    ("TSLA.US", "nasdaq", "stocks", "us"),
];

/// Case-insensitive prefix match, ordered by symbol, capped at `limit`.
pub fn search(query: &str, limit: usize) -> Vec<SymbolInfo> {
    let q = query.to_ascii_uppercase();
    ROWS.iter()
        .filter(|(symbol, ..)| symbol.starts_with(&q))
        .take(limit)
        .map(|&(symbol, exchange, asset_type, country)| SymbolInfo {
            symbol: symbol.to_string(),
            exchange: Some(exchange.to_string()),
            asset_type: Some(asset_type.to_string()),
            country: Some(country.to_string()),
        })
        .collect()
}
