#![allow(clippy::assertions_on_constants)]

use std::time::Instant;

use itertools::Itertools;

use mnk_game::ai::minimax::{search, search_exhaustive, SCORE_MAX, SCORE_MIN};
use mnk_game::board::Board;
use mnk_game::order::{IdentityOrder, ShuffleOrder};
use mnk_game::util::tiny::consistent_rng;

fn main() {
    let ttt = Board::new(3, 3);
    let wide = Board::with_win_length(3, 4, 3).unwrap();
    let square = Board::new(4, 4);

    bench("alpha_beta_3x3_full", || {
        search(&ttt, 9, SCORE_MIN, SCORE_MAX, true, &mut IdentityOrder).nodes
    });
    bench("alpha_beta_3x3_shuffled", || {
        search(&ttt, 9, SCORE_MIN, SCORE_MAX, true, &mut ShuffleOrder::new(consistent_rng())).nodes
    });
    bench("exhaustive_3x3_full", || search_exhaustive(&ttt, 9, true).nodes);
    bench("alpha_beta_3x4_depth_8", || {
        search(&wide, 8, SCORE_MIN, SCORE_MAX, true, &mut IdentityOrder).nodes
    });
    bench("alpha_beta_4x4_depth_6", || {
        search(&square, 6, SCORE_MIN, SCORE_MAX, true, &mut IdentityOrder).nodes
    });
}

const ITERATION_COUNT: usize = 10;
const REMOVED_OUTLIERS_PER_SIDE: usize = 1;

fn bench(name: &str, mut f: impl FnMut() -> u64) {
    assert!(ITERATION_COUNT > REMOVED_OUTLIERS_PER_SIDE * 2);
    println!("Running benchmark {}", name);

    // benchmark function
    let mut timings = vec![];
    let mut nodes = 0;

    for _ in 0..ITERATION_COUNT {
        let start = Instant::now();
        nodes = f();

        let end = Instant::now();
        timings.push(end - start);
    }

    // remove outliers
    for _ in 0..REMOVED_OUTLIERS_PER_SIDE {
        timings.remove(timings.iter().position_min().unwrap());
        timings.remove(timings.iter().position_max().unwrap());
    }

    // print results
    let timings = timings.iter().map(|d| d.as_secs_f32()).collect_vec();
    let mean = timings.iter().sum::<f32>() / timings.len() as f32;
    let stddev = (timings.iter().map(|&f| (f - mean).powi(2)).sum::<f32>() / timings.len() as f32).sqrt();

    println!(
        "  {:.2}ms\t +- {:.2}ms\t {} nodes, {:.0} nodes/s",
        mean * 1000.0,
        stddev * 1000.0,
        nodes,
        nodes as f32 / mean
    );
}
