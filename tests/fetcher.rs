// tests/fetcher.rs
//
// Fetcher behaviour against static HTML, no network.

mod common;

use std::sync::Arc;
use std::thread;

use coin_scrape::core::FetchError;
use coin_scrape::MarketRecord;

use common::*;

#[test]
fn top_fixture_skips_malformed_rows_and_keeps_order() {
    let fetcher = fetcher_over(fixture("cmc_top.html"));
    let records = fetcher.fetch_top(15).unwrap();

    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "Bitcoin", "Ethereum", "Tether USDt", "BNB", "Solana",
            "USDC", "XRP", "Dogecoin", "Toncoin", "Cardano",
        ]
    );
    assert_eq!(
        records[0],
        MarketRecord::full(
            "Bitcoin".into(),
            "$67,012.55".into(),
            "$31,245,876,120".into(),
            "$1.32T".into()
        )
    );
}

#[test]
fn limit_counts_rows_not_records() {
    // Rows 1..=5 include one malformed row, so only four records come back.
    let fetcher = fetcher_over(fixture("cmc_top.html"));
    let records = fetcher.fetch_top(5).unwrap();
    assert_eq!(records.len(), 4);
    assert_eq!(records.last().unwrap().name, "BNB");
}

#[test]
fn result_never_exceeds_limit() {
    let fetcher = fetcher_over(hundred_page(&[]));
    for limit in [0, 1, 3, 10] {
        let records = fetcher.fetch_top(limit).unwrap();
        assert!(records.len() <= limit, "limit {limit} gave {}", records.len());
    }
    assert_eq!(fetcher.fetch_top(10).unwrap().len(), 10);
    assert_eq!(fetcher.fetch_top(0).unwrap(), Vec::<MarketRecord>::new());
}

#[test]
fn values_are_passed_through_verbatim() {
    let html = page(&[top_row(1, "Weird", "  ¥1,2 3 4.5B ")]);
    let rec = fetcher_over(html).fetch_top(1).unwrap().remove(0);
    // Whitespace around text nodes is stripped; inner text is untouched.
    assert_eq!(rec.price, "¥1,2 3 4.5B");
    assert_eq!(rec.volume.as_deref(), Some("$2M"));
    assert_eq!(rec.market_cap.as_deref(), Some("$1B"));
}

#[test]
fn missing_table_gives_empty_listing() {
    let fetcher = fetcher_over("<html><body><table class=\"other\"><tr><td>x</td></tr></table></body></html>");
    assert!(fetcher.fetch_top(10).unwrap().is_empty());
    assert_eq!(fetcher.find_by_name_in_top("Bitcoin", 10).unwrap(), None);

    let garbage = fetcher_over("not even html <<<");
    assert!(garbage.fetch_top(10).unwrap().is_empty());
}

#[test]
fn name_lookup_is_case_insensitive() {
    let fetcher = fetcher_over(fixture("cmc_top.html"));
    let upper = fetcher.find_by_name_in_top("BITCOIN", 10).unwrap();
    let lower = fetcher.find_by_name_in_top("bitcoin", 10).unwrap();
    assert!(upper.is_some());
    assert_eq!(upper, lower);

    let padded = fetcher.find_by_name_in_top("  tether usdt ", 10).unwrap();
    assert_eq!(padded.unwrap().price, "$1.00");
}

#[test]
fn name_lookup_does_not_collapse_inner_spaces() {
    let fetcher = fetcher_over(fixture("cmc_top.html"));
    assert_eq!(fetcher.find_by_name_in_top("tether    usdt", 10).unwrap(), None);
    assert!(fetcher.find_by_name_in_top("Tether USDt", 10).unwrap().is_some());
}

#[test]
fn name_outside_window_is_absent() {
    let fetcher = fetcher_over(fixture("cmc_top.html"));
    // Cardano sits at table row 12, well past a window of 3.
    assert_eq!(fetcher.find_by_name_in_top("Cardano", 3).unwrap(), None);
    assert_eq!(fetcher.find_by_name_in_top("Broken One", 15).unwrap(), None);
    assert_eq!(fetcher.find_by_name_in_top("Nonexistent", 10).unwrap(), None);
}

#[test]
fn duplicate_names_first_rank_wins() {
    let html = page(&[top_row(1, "Twin", "$1"), top_row(2, "twin", "$2")]);
    let hit = fetcher_over(html).find_by_name_in_top("TWIN", 10).unwrap().unwrap();
    assert_eq!(hit.price, "$1");
}

#[test]
fn range_lookup_returns_name_and_price_only() {
    let fetcher = fetcher_over(hundred_page(&[(42, "SomeCoin")]));
    let hit = fetcher.find_by_name_in_range("somecoin", 11, 100).unwrap().unwrap();
    assert_eq!(hit, MarketRecord::brief("SomeCoin".into(), "$42.00".into()));
    assert!(hit.volume.is_none() && hit.market_cap.is_none());
}

#[test]
fn range_bounds_are_inclusive() {
    let fetcher = fetcher_over(hundred_page(&[(11, "Eleven"), (100, "Hundred")]));
    assert!(fetcher.find_by_name_in_range("Eleven", 11, 100).unwrap().is_some());
    assert!(fetcher.find_by_name_in_range("Hundred", 11, 100).unwrap().is_some());
    assert!(fetcher.find_by_name_in_range("Hundred", 11, 99).unwrap().is_none());
}

#[test]
fn range_excludes_the_top_ten() {
    let fetcher = fetcher_over(hundred_page(&[(1, "Bitcoin")]));
    assert_eq!(fetcher.find_by_name_in_range("Bitcoin", 11, 100).unwrap(), None);
    assert!(fetcher.find_by_name_in_top("Bitcoin", 10).unwrap().is_some());
}

#[test]
fn range_also_reads_fully_rendered_rows() {
    // If the page renders rank 11 fully, name and price are still found.
    let mut rows: Vec<String> = (1..=10).map(|r| top_row(r, &format!("Coin {r}"), "$1")).collect();
    rows.push(top_row(11, "Polkadot", "$6.10"));
    let hit = fetcher_over(page(&rows)).find_by_name_in_range("Polkadot", 11, 100).unwrap().unwrap();
    assert_eq!(hit, MarketRecord::brief("Polkadot".into(), "$6.10".into()));
}

#[test]
fn range_with_missing_table_is_an_error() {
    let fetcher = fetcher_over("<html><body><p>maintenance</p></body></html>");
    let err = fetcher.find_by_name_in_range("Dogecoin", 11, 100).unwrap_err();
    assert!(matches!(err, FetchError::TableNotFound(_)));
}

#[test]
fn invalid_range_is_rejected() {
    let fetcher = fetcher_over(hundred_page(&[]));
    assert!(matches!(
        fetcher.find_by_name_in_range("x", 0, 10),
        Err(FetchError::InvalidRange { start: 0, end: 10 })
    ));
    assert!(matches!(
        fetcher.find_by_name_in_range("x", 50, 20),
        Err(FetchError::InvalidRange { .. })
    ));
}

#[test]
fn transport_errors_propagate() {
    let fetcher = fetcher_down();
    assert!(matches!(fetcher.fetch_top(10), Err(FetchError::Status { status: 503, .. })));
    assert!(fetcher.find_by_name_in_top("Bitcoin", 10).is_err());
    assert!(fetcher.find_by_name_in_range("Bitcoin", 11, 100).is_err());
}

#[test]
fn repeated_calls_are_identical() {
    let fetcher = fetcher_over(fixture("cmc_top.html"));
    let a = fetcher.fetch_top(10).unwrap();
    let b = fetcher.fetch_top(10).unwrap();
    assert_eq!(a, b);
}

#[test]
fn shared_fetcher_is_safe_across_threads() {
    let fetcher = Arc::new(fetcher_over(hundred_page(&[(55, "Threaded")])));
    let expected = fetcher.fetch_top(10).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let f = Arc::clone(&fetcher);
            thread::spawn(move || {
                if i % 2 == 0 {
                    (f.fetch_top(10).unwrap(), None)
                } else {
                    (Vec::new(), f.find_by_name_in_range("threaded", 11, 100).unwrap())
                }
            })
        })
        .collect();

    for (i, h) in handles.into_iter().enumerate() {
        let (top, hit) = h.join().unwrap();
        if i % 2 == 0 {
            assert_eq!(top, expected);
        } else {
            assert_eq!(hit.unwrap().price, "$55.00");
        }
    }
}
