//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p reversi_core -- [depth] [board]
//!
//! Examples:
//!   # Default: depth 7 from every test position
//!   cargo flamegraph --example perft_bench -p reversi_core
//!
//!   # Custom depth
//!   cargo flamegraph --example perft_bench -p reversi_core -- 8
//!
//!   # Custom depth and position (64 cell characters, Black to move)
//!   cargo flamegraph --example perft_bench -p reversi_core -- 6 "..................WB.......WB......BW..........................."

use reversi_core::{Board, Player, perft};
use std::env;
use std::time::Instant;

/// Test positions for profiling, all with Black to move.
const TEST_POSITIONS: &[(&str, &str)] = &[
    (
        "Starting position",
        "...........................WB......BW...........................",
    ),
    (
        "After d3 c3",
        "..................WB.......WB......BW...........................",
    ),
    (
        "Open middle game",
        "..........W.....BBBW.....WBWB.....WWBW....B.WB.......W..........",
    ),
];

fn main() {
    let args: Vec<String> = env::args().collect();

    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(7);

    // If a board is provided, use single position mode
    if let Some(text) = args.get(2) {
        run_single_position(text, depth);
    } else {
        run_all_positions(depth);
    }
}

fn parse(text: &str) -> Option<Board> {
    match text.parse::<Board>() {
        Ok(b) => Some(b),
        Err(e) => {
            eprintln!("{e}");
            None
        }
    }
}

fn run_single_position(text: &str, depth: u8) {
    let Some(board) = parse(text) else {
        return;
    };

    println!("Position:\n{board}");
    println!("Depth: {depth}");
    println!();

    // Warm-up run at lower depth
    if depth > 2 {
        let _ = perft(&board, Player::Black, depth.saturating_sub(2));
    }

    let start = Instant::now();
    let nodes = perft(&board, Player::Black, depth);
    let elapsed = start.elapsed();

    let nps = if elapsed.as_secs_f64() > 0.0 {
        nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    };

    println!("Nodes: {nodes}");
    println!("Time: {elapsed:.3?}");
    println!("NPS: {nps:.0}");
}

fn run_all_positions(depth: u8) {
    println!("=== Perft Benchmark Suite ===");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = std::time::Duration::ZERO;

    for (name, text) in TEST_POSITIONS {
        let Some(board) = parse(text) else {
            continue;
        };

        print!("{name:.<30}");

        let start = Instant::now();
        let nodes = perft(&board, Player::Black, depth);
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;

        let nps = if elapsed.as_secs_f64() > 0.0 {
            nodes as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        println!(" {nodes:>12} nodes in {elapsed:>8.3?} ({nps:>10.0} nps)");
    }

    println!();
    println!("{:=<70}", "");
    let total_nps = if total_time.as_secs_f64() > 0.0 {
        total_nodes as f64 / total_time.as_secs_f64()
    } else {
        0.0
    };
    println!("TOTAL: {total_nodes} nodes in {total_time:.3?} ({total_nps:.0} nps)");
}
