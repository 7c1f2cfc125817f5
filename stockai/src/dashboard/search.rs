use stockai_core::{Capability, StockaiError, SymbolInfo, SymbolSearchRequest};

use crate::core::{Dashboard, Fetch};

impl Dashboard {
    /// Search symbols by ticker prefix.
    ///
    /// Behavior:
    /// - A query that trims to empty is skipped without a request.
    /// - Clears the last error and raises the loading flag while in flight.
    /// - On success the result list is replaced. On failure the error
    ///   message is stored, prior results are kept and the error is returned.
    /// - A response overtaken by a newer search is discarded.
    ///
    /// # Errors
    /// Returns the connector's error, or `Unsupported` if it cannot search.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "stockai::dashboard",
            skip(self),
            fields(limit = self.cfg.search_limit),
        )
    )]
    pub async fn search(&self, query: &str) -> Result<Fetch<Vec<SymbolInfo>>, StockaiError> {
        if query.trim().is_empty() {
            return Ok(Fetch::Skipped);
        }
        let req = SymbolSearchRequest::new(query)?.with_limit(self.cfg.search_limit)?;
        let provider = self
            .connector
            .as_symbol_search_provider()
            .ok_or_else(|| StockaiError::unsupported(Capability::SymbolSearch.as_str()))?;

        let generation = {
            let mut s = self.state.lock().await;
            s.generations.search += 1;
            s.searching = true;
            s.error = None;
            s.generations.search
        };

        let result = self
            .call_with_timeout(Capability::SymbolSearch, provider.search_symbols(req))
            .await;

        let mut s = self.state.lock().await;
        if s.generations.search != generation {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                target: "stockai::dashboard",
                generation,
                "discarding superseded search"
            );
            return Ok(Fetch::Superseded);
        }
        s.searching = false;
        match result {
            Ok(found) => {
                s.symbols.clone_from(&found);
                Ok(Fetch::Applied(found))
            }
            Err(e) => {
                s.error = Some(e.to_string());
                Err(e)
            }
        }
    }
}
