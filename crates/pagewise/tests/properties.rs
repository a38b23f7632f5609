use pagewise::{
    Entry, FixedLength, Layout, PaginationBehaviour, PaginationConfig, PaginationRequest,
};
use proptest::prelude::*;

/// `(total_pages, current_page, maximum_visible)` within the valid domain.
fn arb_input() -> impl Strategy<Value = (u64, u64, u64)> {
    (1u64..400, 7u64..40).prop_flat_map(|(total, maximum)| (Just(total), 1..=total, Just(maximum)))
}

fn arb_large_input() -> impl Strategy<Value = (u64, u64, u64)> {
    (1_000u64..u64::MAX / 2, 7u64..64)
        .prop_flat_map(|(total, maximum)| (Just(total), 1..=total, Just(maximum)))
}

/// Totals at the very top of `u64`, with the current page biased towards
/// either edge so every layout is reached.
fn arb_top_input() -> impl Strategy<Value = (u64, u64, u64)> {
    (u64::MAX - 1_000..=u64::MAX, 7u64..64).prop_flat_map(|(total, maximum)| {
        let current = prop_oneof![1..=64u64, total - 64..=total, 1..=total];
        (Just(total), current, Just(maximum))
    })
}

fn run(total: u64, current: u64, maximum: u64) -> (Layout, Vec<Entry>) {
    let request = PaginationRequest::new(total, current).unwrap();
    let config = PaginationConfig::new(maximum).unwrap();
    let data = FixedLength.compute(&request, &config).unwrap();
    (FixedLength::layout(&request, maximum), data.into_vec())
}

fn check(total: u64, current: u64, maximum: u64) -> Result<(), TestCaseError> {
    let (layout, entries) = run(total, current, maximum);
    let pages: Vec<u64> = entries.iter().filter_map(Entry::page).collect();
    let markers = entries.len() - pages.len();

    prop_assert!(pages.windows(2).all(|w| w[0] < w[1]));
    prop_assert_eq!(pages.first().copied(), Some(1));
    prop_assert_eq!(pages.last().copied(), Some(total));
    prop_assert!(pages.contains(&current));

    prop_assert_eq!(entries.len() as u64, total.min(maximum));
    prop_assert_eq!(markers, layout.omitted_chunks());
    prop_assert!(markers <= 2);

    // every marker hides at least one page
    for (idx, entry) in entries.iter().enumerate() {
        if entry.is_omitted() {
            let before = entries[idx - 1].page().unwrap();
            let after = entries[idx + 1].page().unwrap();
            prop_assert!(after - before >= 2);
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn invariants_hold(input in arb_input()) {
        let (total, current, maximum) = input;
        check(total, current, maximum)?;
    }

    #[test]
    fn invariants_hold_for_large_totals(input in arb_large_input()) {
        let (total, current, maximum) = input;
        check(total, current, maximum)?;
    }

    #[test]
    fn invariants_hold_at_top_of_range(input in arb_top_input()) {
        let (total, current, maximum) = input;
        check(total, current, maximum)?;
    }

    #[test]
    fn layout_matches_total_and_budget(input in arb_input()) {
        let (total, current, maximum) = input;
        let (layout, _) = run(total, current, maximum);
        prop_assert_eq!(layout == Layout::Full, total <= maximum);
    }

    #[test]
    fn compute_is_idempotent(input in arb_input()) {
        let (total, current, maximum) = input;
        prop_assert_eq!(run(total, current, maximum), run(total, current, maximum));
    }
}

#[test]
fn test_exhaustive_small_domain() {
    for maximum in 7..=25 {
        for total in 1..=60 {
            for current in 1..=total {
                check(total, current, maximum).unwrap();
            }
        }
    }
}
