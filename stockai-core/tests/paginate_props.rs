use proptest::prelude::*;
use stockai_core::{is_tick, paginate, tick_step};

proptest! {
    #[test]
    fn pages_reconstruct_the_list(n in 0usize..400, size in 1usize..80) {
        let rows: Vec<usize> = (0..n).collect();
        let first = paginate(&rows, size, 0);
        let mut joined = Vec::with_capacity(n);
        for i in 0..first.page_count {
            let page = paginate(&rows, size, i);
            prop_assert!(page.items.len() <= size);
            joined.extend_from_slice(page.items);
        }
        prop_assert_eq!(joined, rows);
    }

    #[test]
    fn index_is_clamped(n in 0usize..400, size in 1usize..80, index in 0usize..1000) {
        let rows: Vec<usize> = (0..n).collect();
        let page = paginate(&rows, size, index);
        prop_assert!(page.index < page.page_count);
        prop_assert_eq!(page.index, index.min(page.page_count - 1));
        prop_assert_eq!(page.has_next(), page.index + 1 < page.page_count);
    }

    #[test]
    fn tick_count_is_bounded(n in 1usize..5000) {
        let step = tick_step(n);
        let shown = (0..n).filter(|&i| is_tick(i, step)).count();
        prop_assert!(shown >= 1);
        prop_assert!(shown <= 6);
        prop_assert!(is_tick(0, step));
    }
}

#[test]
fn fifty_per_page() {
    let rows: Vec<u32> = (0..120).collect();
    let p = paginate(&rows, 50, 1);
    assert_eq!(p.page_count, 3);
    assert_eq!(p.items.first(), Some(&50));
    assert_eq!(p.items.len(), 50);
    assert!(p.has_previous());
    assert_eq!(p.label(), "Page 2 of 3");
}
