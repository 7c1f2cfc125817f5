use chrono::NaiveDate;
use stockai_core::{Capability, PatternRequest, StockaiError, recent_patterns};

use crate::core::{Dashboard, Fetch};

impl Dashboard {
    /// Load pattern matches for the selected symbol and keep the recent ones.
    ///
    /// Matches starting more than `recent_pattern_days` before `today` are
    /// dropped. Returns the number kept; skipped when nothing is selected.
    ///
    /// # Errors
    /// Returns `Unsupported` if the connector serves no patterns, `Data` for
    /// an undecodable starting date, or the connector's error.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "stockai::dashboard", skip(self))
    )]
    pub async fn load_patterns(&self, today: NaiveDate) -> Result<Fetch<usize>, StockaiError> {
        let provider = self
            .connector
            .as_pattern_provider()
            .ok_or_else(|| StockaiError::unsupported(Capability::Patterns.as_str()))?;

        let (req, generation) = {
            let mut s = self.state.lock().await;
            let Some(symbol) = s.selected.clone() else {
                return Ok(Fetch::Skipped);
            };
            let req = PatternRequest::new(&symbol)?
                .with_trend_length(self.cfg.pattern_trend_length)?
                .with_similarity_score(self.cfg.pattern_similarity_score);
            s.loading_patterns = true;
            s.generations.patterns += 1;
            (req, s.generations.patterns)
        };

        let result = self
            .call_with_timeout(Capability::Patterns, provider.patterns(req))
            .await
            .and_then(|found| recent_patterns(&found, today, self.cfg.recent_pattern_days));

        let mut s = self.state.lock().await;
        if s.generations.patterns != generation {
            return Ok(Fetch::Superseded);
        }
        s.loading_patterns = false;
        match result {
            Ok(kept) => {
                let n = kept.len();
                s.patterns = kept;
                Ok(Fetch::Applied(n))
            }
            Err(e) => {
                s.error = Some(e.to_string());
                Err(e)
            }
        }
    }
}
