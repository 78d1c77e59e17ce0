//! Refresh loop end to end through the JSON sink

use lob_viz::config::Config;
use lob_viz::driver::{DashboardFrame, Driver};
use lob_viz::sink::JsonSink;

#[tokio::test(start_paused = true)]
async fn test_stream_emits_one_frame_per_cycle() {
    let config = Config::default();
    let mut driver = Driver::from_config(&config, Some(17)).unwrap();
    let mut sink = JsonSink::new(Vec::new(), false);

    let summary = driver.run(&mut sink, Some(5)).await.unwrap();
    assert_eq!(summary.cycles, 5);
    assert_eq!(summary.render_failures, 0);

    let output = String::from_utf8(sink.into_inner()).unwrap();
    let frames: Vec<DashboardFrame> = output
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(frames.len(), 5);

    for (i, frame) in frames.iter().enumerate() {
        assert_eq!(frame.cycle, i as u64 + 1);
        assert_eq!(frame.book.bids.len(), 25);
        assert_eq!(frame.book.asks.len(), 25);
        assert_eq!(frame.trades.len(), 10);
        assert!(frame.book.best_ask().unwrap() > frame.book.best_bid().unwrap());
    }

    // the reference price drifts but stays near its start
    let mids: Vec<f64> = frames.iter().map(|f| f.book.mid_price).collect();
    assert!(mids.windows(2).any(|w| w[0] != w[1]));
    assert!(mids.iter().all(|m| (m - 100.0).abs() < 1.0));
}

#[tokio::test(start_paused = true)]
async fn test_seeded_runs_are_reproducible() {
    let config = Config::default();

    let mut first = Driver::from_config(&config, Some(99)).unwrap();
    let mut second = Driver::from_config(&config, Some(99)).unwrap();
    let mut sink_a = JsonSink::new(Vec::new(), false);
    let mut sink_b = JsonSink::new(Vec::new(), false);

    first.run(&mut sink_a, Some(3)).await.unwrap();
    second.run(&mut sink_b, Some(3)).await.unwrap();

    assert_eq!(first.reference_price(), second.reference_price());
}
