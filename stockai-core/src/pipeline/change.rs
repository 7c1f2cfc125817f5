/// Percentage change from `previous` to `current`.
///
/// `None` means "not available": either side is missing or `previous` is
/// zero. A real `Some(0.0)` is a flat change and is distinct from `None`.
///
/// ```
/// use stockai_core::pct_change;
///
/// assert_eq!(pct_change(Some(110.0), Some(100.0)), Some(10.0));
/// assert_eq!(pct_change(Some(5.0), Some(0.0)), None);
/// assert_eq!(pct_change(None, Some(1.0)), None);
/// ```
#[must_use]
pub fn pct_change(current: Option<f64>, previous: Option<f64>) -> Option<f64> {
    match (current, previous) {
        (Some(c), Some(p)) if p != 0.0 => Some((c - p) / p * 100.0),
        _ => None,
    }
}

/// Colour hint for a change tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Change is unavailable.
    Neutral,
    /// Zero or positive change.
    Positive,
    /// Negative change.
    Negative,
}

/// Formatted change label (`+1.2%`, `-0.4%`, `N/A`) with its tone.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChangeTag {
    /// Underlying percentage, if available.
    pub value: Option<f64>,
    /// Display label.
    pub label: String,
    /// Colour hint.
    pub tone: Tone,
}

impl ChangeTag {
    /// Tag for the change from `previous` to `current`.
    #[must_use]
    pub fn new(current: Option<f64>, previous: Option<f64>) -> Self {
        Self::from_pct(pct_change(current, previous))
    }

    /// Tag for an already computed percentage.
    #[must_use]
    pub fn from_pct(value: Option<f64>) -> Self {
        match value {
            None => Self {
                value,
                label: "N/A".to_string(),
                tone: Tone::Neutral,
            },
            Some(v) => {
                let sign = if v > 0.0 { "+" } else { "" };
                Self {
                    value,
                    label: format!("{sign}{v:.1}%"),
                    tone: if v >= 0.0 { Tone::Positive } else { Tone::Negative },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_and_tones() {
        let t = ChangeTag::new(Some(101.234), Some(100.0));
        assert_eq!(t.label, "+1.2%");
        assert_eq!(t.tone, Tone::Positive);

        let t = ChangeTag::new(Some(99.6), Some(100.0));
        assert_eq!(t.label, "-0.4%");
        assert_eq!(t.tone, Tone::Negative);

        let t = ChangeTag::new(Some(100.0), Some(100.0));
        assert_eq!(t.label, "0.0%");
        assert_eq!(t.tone, Tone::Positive);
        assert_eq!(t.value, Some(0.0));

        let t = ChangeTag::new(Some(1.0), Some(0.0));
        assert_eq!(t.label, "N/A");
        assert_eq!(t.tone, Tone::Neutral);
    }
}
