use core::fmt;
use serde::{Deserialize, Serialize};

/// Capability labels used in errors and telemetry.
///
/// Each maps one-to-one to an API endpoint served by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Capability {
    /// Ticker lookup by symbol prefix (`/api/symbols`).
    SymbolSearch,
    /// Historical OHLCV bars (`/api/bars`).
    Bars,
    /// Historical pattern matches (`/api/getPatterns`).
    Patterns,
    /// Liveness probe (`/api/health`).
    Health,
}

impl Capability {
    /// Stable, kebab-case identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SymbolSearch => "symbol-search",
            Self::Bars => "bars",
            Self::Patterns => "patterns",
            Self::Health => "health",
        }
    }

    /// Path of the endpoint serving this capability, relative to the API base.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::SymbolSearch => "/api/symbols",
            Self::Bars => "/api/bars",
            Self::Patterns => "/api/getPatterns",
            Self::Health => "/api/health",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
