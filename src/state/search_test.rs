use super::*;

const SYMBOLS: &[&str] = &["ETH-USD", "BTC-USD", "Bitcoin Cash", "WBTC", "Solana", "USDT"];

#[test]
fn debouncer_latest_ticket_wins() {
    let mut gate = Debouncer::default();
    let first = gate.schedule();
    let second = gate.schedule();
    assert!(!gate.is_current(first));
    assert!(gate.is_current(second));
}

#[test]
fn debouncer_cancel_invalidates_all() {
    let mut gate = Debouncer::default();
    let ticket = gate.schedule();
    gate.cancel();
    assert!(!gate.is_current(ticket));
}

#[test]
fn blank_query_returns_leading_items() {
    assert_eq!(filter_items(SYMBOLS, "   ", 3), vec![0, 1, 2]);
    assert_eq!(filter_items(SYMBOLS, "", 100).len(), SYMBOLS.len());
}

#[test]
fn prefix_ranks_above_word_start_above_substring() {
    let hits = filter_items(SYMBOLS, "btc", 10);
    assert_eq!(hits, vec![1, 3]);

    let hits = filter_items(SYMBOLS, "usd", 10);
    // USDT is a prefix hit, the pairs match at a word start after '-'.
    assert_eq!(hits, vec![5, 0, 1]);
}

#[test]
fn matching_is_case_insensitive() {
    assert_eq!(filter_items(SYMBOLS, "SOL", 10), vec![4]);
    assert_eq!(filter_items(SYMBOLS, "cash", 10), vec![2]);
}

#[test]
fn limit_caps_results() {
    assert_eq!(filter_items(SYMBOLS, "usd", 1), vec![5]);
}

#[test]
fn match_rank_classifies() {
    assert_eq!(match_rank("Bitcoin Cash", "bit"), Some(MatchRank::Prefix));
    assert_eq!(match_rank("Bitcoin Cash", "cas"), Some(MatchRank::WordStart));
    assert_eq!(match_rank("Bitcoin Cash", "coin"), Some(MatchRank::Substring));
    assert_eq!(match_rank("Bitcoin Cash", "eth"), None);
}

#[test]
fn overlapping_occurrence_at_word_start_ranks_as_word_start() {
    assert_eq!(match_rank("xa-a-a", "a-a"), Some(MatchRank::WordStart));
    assert_eq!(match_rank("xa-ab", "a-a"), Some(MatchRank::Substring));
}
