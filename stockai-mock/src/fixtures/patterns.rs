use stockai_core::StockPattern;

pub fn by_symbol(symbol: &str) -> Option<Vec<StockPattern>> {
    let rows: &[(i64, f64)] = match symbol {
        "AAPL.US" => &[
            (20_240_311, 93.4),
            (20_230_612, 91.2),
            (20_220_103, 88.7),
            (20_190_805, 86.1),
            (20_160_222, 84.9),
            (20_120_917, 83.0),
            (20_110_404, 82.5),
            (20_090_316, 81.7),
        ],
        "MSFT.US" => &[(20_231_030, 90.3), (20_200_323, 85.0)],
        "SPY.US" | "TSLA.US" => &[],
        _ => return None,
    };
    Some(
        rows.iter()
            .map(|&(starting_date, similarity_score)| StockPattern {
                starting_date,
                similarity_score,
            })
            .collect(),
    )
}
