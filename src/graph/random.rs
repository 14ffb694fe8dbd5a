//!
//! Random graph generation
//!
use super::GraphModel;
use crate::weight::INF;
use rand::prelude::*;
use rand_xoshiro::Xoshiro256PlusPlus;

/// largest weight of a random edge
pub const MAX_RANDOM_WEIGHT: i32 = 10;

///
/// Random graph with `n` vertices from seed.
///
/// Each ordered pair `i != j` has an edge with probability 1/2,
/// and its weight is uniform in `1..=MAX_RANDOM_WEIGHT`.
///
pub fn random_graph(n: usize, seed: u64) -> GraphModel<i32> {
    random_graph_with_density(n, 0.5, seed)
}

///
/// Random graph whose edges appear with probability `p_edge`.
///
/// # Panics
/// if `n == 0` or `p_edge` is not in `[0, 1]`.
///
pub fn random_graph_with_density(n: usize, p_edge: f64, seed: u64) -> GraphModel<i32> {
    assert!(n > 0, "random graph needs at least one vertex");
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let rows: Vec<Vec<i32>> = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| {
                    if i == j {
                        0
                    } else if rng.gen_bool(p_edge) {
                        rng.gen_range(1..=MAX_RANDOM_WEIGHT)
                    } else {
                        INF
                    }
                })
                .collect()
        })
        .collect();
    GraphModel::from_rows(rows).unwrap_or_else(|e| panic!("generated graph is invalid: {}", e))
}

//
// tests
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_graph_is_valid() {
        for seed in 0..20 {
            let g = random_graph(6, seed);
            assert_eq!(g.vertex_count(), 6);
            for i in 0..6 {
                assert_eq!(g.weight_at(i, i), 0);
            }
            for (_, _, w) in g.edges() {
                assert!((1..=MAX_RANDOM_WEIGHT).contains(&w));
            }
        }
    }

    #[test]
    fn reproducible() {
        assert_eq!(random_graph(8, 3), random_graph(8, 3));
        assert_ne!(random_graph(8, 3), random_graph(8, 4));
    }

    #[test]
    fn density_extremes() {
        assert_eq!(random_graph_with_density(5, 0.0, 0).n_edges(), 0);
        assert_eq!(random_graph_with_density(5, 1.0, 0).n_edges(), 20);
    }
}
