//!
//! All-pairs shortest paths computed independently of the stepwise engine
//!
//! Runs `petgraph::algo::dijkstra` from every vertex. `GraphModel` only holds
//! positive edge costs, which is what dijkstra needs.
//!
use crate::graph::GraphModel;
use crate::matrix::SquareMatrix;
use crate::weight::WeightLike;
use petgraph::algo::dijkstra;
use petgraph::graph::NodeIndex;

///
/// `d[i][j]` = length of the shortest path `i -> j`, or `W::infinity()` if unreachable.
///
pub fn all_pairs_shortest_paths<W: WeightLike>(graph: &GraphModel<W>) -> SquareMatrix<W> {
    let n = graph.vertex_count();
    let g = graph.to_digraph();
    let mut d = SquareMatrix::filled(n, W::infinity());
    for i in 0..n {
        let costs = dijkstra(&g, NodeIndex::new(i), None, |e| *e.weight());
        for (node, cost) in costs {
            d[(i, node.index())] = cost;
        }
    }
    d
}

///
/// List the cells where two distance matrices disagree.
///
pub fn mismatches<W: WeightLike>(
    a: &SquareMatrix<W>,
    b: &SquareMatrix<W>,
) -> Vec<(usize, usize, W, W)> {
    assert_eq!(a.dim(), b.dim());
    a.iter()
        .zip(b.iter())
        .filter(|((_, _, x), (_, _, y))| !x.sim_eq(*y))
        .map(|((i, j, x), (_, _, y))| (i, j, x, y))
        .collect()
}

//
// tests
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::samples::sample_graph;
    use crate::weight::INF;

    #[test]
    fn reference_on_sample1() {
        let d = all_pairs_shortest_paths(&sample_graph(0));
        assert_eq!(
            d.to_rows(),
            vec![
                vec![0, 5, 8, 14],
                vec![5, 0, 3, 9],
                vec![2, 7, 0, 6],
                vec![7, 2, 5, 0],
            ]
        );
    }

    #[test]
    fn reference_with_unreachable() {
        // sample 4 has sinks 2, 3, 4
        let d = all_pairs_shortest_paths(&sample_graph(3));
        assert_eq!(d[(2, 0)], INF);
        assert_eq!(d[(0, 2)], 6);
        assert_eq!(d[(1, 3)], 3);
        assert_eq!(d[(0, 3)], INF);
    }

    #[test]
    fn mismatch_listing() {
        let a = SquareMatrix::from_rows(&[vec![0, 1], vec![INF, 0]]);
        let b = SquareMatrix::from_rows(&[vec![0, 1], vec![3, 0]]);
        assert!(mismatches(&a, &a).is_empty());
        assert_eq!(mismatches(&a, &b), vec![(1, 0, INF, 3)]);
    }
}
