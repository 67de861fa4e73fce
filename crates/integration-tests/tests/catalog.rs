//! Pagination completeness over the seed catalog.

use integration_tests::fresh_state;

#[tokio::test]
async fn concatenated_pages_reproduce_the_catalog_for_any_limit() {
    let state = fresh_state();
    let total = state.catalog.count().await.expect("count");

    for limit in 1..=total + 1 {
        let mut collected = Vec::new();
        let pages = total.div_ceil(limit);
        for page in 0..pages {
            let slice = state.catalog.page(page, limit).await.expect("page");
            assert!(
                slice.len() as u64 <= limit,
                "page larger than limit {limit}"
            );
            collected.extend(slice.into_iter().map(|l| l.id));
        }

        // No duplicates, no omissions, stable ascending order.
        let expected: Vec<u64> = (1..=total).collect();
        assert_eq!(collected, expected, "limit {limit} broke completeness");

        // The page after the last is empty, never an error.
        assert!(state.catalog.page(pages, limit).await.expect("page").is_empty());
    }
}

#[tokio::test]
async fn pages_far_beyond_the_end_are_empty() {
    let state = fresh_state();
    for page in [10, 1_000, u64::MAX] {
        assert!(state.catalog.page(page, 5).await.expect("page").is_empty());
    }
}

#[tokio::test]
async fn listings_carry_integer_minor_unit_prices() {
    let state = fresh_state();
    let all = state.catalog.page(0, 100).await.expect("page");
    assert!(!all.is_empty());
    for l in &all {
        let priced = state
            .catalog
            .price_per_night(l.id)
            .await
            .expect("price lookup");
        assert_eq!(priced, l.price_per_night);
    }
}
