/// Target number of labelled ticks on the x-axis.
pub const TARGET_TICKS: usize = 6;

/// Stride between labelled ticks for `n` points: `max(1, ceil(n / 6))`.
#[must_use]
pub const fn tick_step(n: usize) -> usize {
    let step = n.div_ceil(TARGET_TICKS);
    if step == 0 { 1 } else { step }
}

/// Whether point `index` carries a label for the given stride.
#[must_use]
pub const fn is_tick(index: usize, step: usize) -> bool {
    step == 0 || index % step == 0
}

/// Keep every `tick_step(labels.len())`-th label and blank the rest.
#[must_use]
pub fn thin_labels<S: AsRef<str>>(labels: &[S]) -> Vec<&str> {
    let step = tick_step(labels.len());
    labels
        .iter()
        .enumerate()
        .map(|(i, l)| if is_tick(i, step) { l.as_ref() } else { "" })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps() {
        assert_eq!(tick_step(0), 1);
        assert_eq!(tick_step(6), 1);
        assert_eq!(tick_step(7), 2);
        assert_eq!(tick_step(100), 17);
    }

    #[test]
    fn thins_to_about_six() {
        let labels: Vec<String> = (0..13).map(|i| i.to_string()).collect();
        let thinned = thin_labels(&labels);
        let shown: Vec<&str> = thinned.into_iter().filter(|l| !l.is_empty()).collect();
        assert_eq!(shown, ["0", "3", "6", "9", "12"]);
    }
}
