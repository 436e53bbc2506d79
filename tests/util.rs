use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use itertools::Itertools;

/// Draw 1000 samples per expected value and check that each value shows up within 20% of that.
pub fn test_sampler_uniform<T: Eq + Hash + Debug + Copy>(expected: &[T], mut sampler: impl FnMut() -> T) {
    assert!(!expected.is_empty(), "nothing to sample");
    assert!(expected.iter().all_unique(), "duplicate expected values {:?}", expected);

    let per_value = 1000;
    let mut counts: HashMap<T, u32> = HashMap::new();
    for _ in 0..per_value * expected.len() {
        let sample = sampler();
        assert!(expected.contains(&sample), "sampled unexpected {:?}", sample);
        *counts.entry(sample).or_default() += 1;
    }

    for value in expected {
        let relative = counts.get(value).copied().unwrap_or(0) as f32 / per_value as f32;
        println!("  {:?} ~ {:.3}", value, relative);
        assert!((0.8..1.2).contains(&relative), "{:?} sampled at {} of uniform", value, relative);
    }
}
