//! Generator properties

use chrono::{Duration, Utc};
use lob_viz::generator::{
    build_order_book, build_trade_history, step_price, BookParams, TapeParams, MIN_LEVEL_VOLUME,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rust_decimal_macros::dec;

#[test]
fn test_dashboard_book_scenario() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let params = BookParams {
        spread_bps: 8.0,
        levels: 25,
        base_volume: 1000.0,
        volume_volatility: 0.02,
    };
    let book = build_order_book(&mut rng, 100.0, &params).unwrap();

    assert_eq!(book.bids.len(), 25);
    assert_eq!(book.asks.len(), 25);
    assert!((book.bids[0].price - 99.96).abs() < 1e-9);
    assert!((book.asks[0].price - 100.04).abs() < 1e-9);
    assert!(book.bids[24].price < book.bids[0].price);
    assert!(book.asks[24].price > book.asks[0].price);
    assert!(book.best_ask().unwrap() > book.best_bid().unwrap());
}

#[test]
fn test_dashboard_tape_scenario() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let params = TapeParams {
        trade_count: 10,
        price_volatility: 0.001,
    };
    let trades = build_trade_history(&mut rng, Utc::now(), 100.0, &params).unwrap();

    assert_eq!(trades.len(), 10);
    for trade in &trades {
        assert!(trade.price >= dec!(99.5) && trade.price <= dec!(100.5));
        assert!(trade.volume >= dec!(10) && trade.volume <= dec!(500));
    }
}

#[test]
fn test_zero_volatility_step() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    assert_eq!(step_price(&mut rng, 100.0, 0.0).unwrap(), 100.0);
}

proptest! {
    #[test]
    fn prop_book_invariants(
        seed in any::<u64>(),
        mid in 1.0f64..100_000.0,
        spread_bps in 0.5f64..100.0,
        levels in 1usize..60,
        base_volume in 1.0f64..50_000.0,
        volume_volatility in 0.0f64..1.0,
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let params = BookParams { spread_bps, levels, base_volume, volume_volatility };
        let book = build_order_book(&mut rng, mid, &params).unwrap();

        prop_assert_eq!(book.bids.len(), levels);
        prop_assert_eq!(book.asks.len(), levels);
        prop_assert!(book.best_ask().unwrap() > book.best_bid().unwrap());
        prop_assert_eq!(book.mid_price, mid);

        for pair in book.bids.windows(2) {
            prop_assert!(pair[1].price < pair[0].price);
        }
        for pair in book.asks.windows(2) {
            prop_assert!(pair[1].price > pair[0].price);
        }

        for levels in [&book.bids, &book.asks] {
            let mut sum = 0.0;
            let mut previous = 0.0;
            for level in levels.iter() {
                sum += level.volume;
                prop_assert!(level.volume >= MIN_LEVEL_VOLUME);
                prop_assert!((level.cumulative_volume - sum).abs() <= 1e-9 * sum);
                prop_assert!(level.cumulative_volume >= previous);
                previous = level.cumulative_volume;
            }
        }
    }

    #[test]
    fn prop_tape_invariants(
        seed in any::<u64>(),
        mid in 0.01f64..100_000.0,
        trade_count in 0usize..100,
        price_volatility in 0.0f64..0.05,
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let now = Utc::now();
        let params = TapeParams { trade_count, price_volatility };
        let trades = build_trade_history(&mut rng, now, mid, &params).unwrap();

        prop_assert_eq!(trades.len(), trade_count);
        for trade in &trades {
            prop_assert!(trade.timestamp <= now);
            prop_assert_eq!(trade.value, (trade.price * trade.volume).round_dp(2));
            prop_assert!(trade.volume >= dec!(10) && trade.volume <= dec!(500));
        }
        if let Some(newest) = trades.first() {
            prop_assert_eq!(newest.timestamp, now);
        }
        for pair in trades.windows(2) {
            prop_assert!(pair[0].timestamp - pair[1].timestamp >= Duration::milliseconds(500));
        }
    }

    #[test]
    fn prop_step_is_deterministic(seed in any::<u64>(), price in 0.01f64..1e6, vol in 0.0f64..0.01) {
        let a = step_price(&mut ChaCha8Rng::seed_from_u64(seed), price, vol).unwrap();
        let b = step_price(&mut ChaCha8Rng::seed_from_u64(seed), price, vol).unwrap();
        prop_assert_eq!(a, b);
        prop_assert!(a > 0.0);
    }
}
