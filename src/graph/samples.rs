//!
//! Predefined small graphs cycled through by the visualizer
//!
use super::GraphModel;
use crate::weight::INF;

/// the number of predefined graphs
pub const N_SAMPLES: usize = 6;

fn sample_rows(index: usize) -> Vec<Vec<i32>> {
    match index {
        // 0->1 (5), 1->2 (3), 2->0 (2), 2->3 (6), 3->1 (2)
        0 => vec![
            vec![0, 5, INF, INF],
            vec![INF, 0, 3, INF],
            vec![2, INF, 0, 6],
            vec![INF, 2, INF, 0],
        ],
        1 => vec![
            vec![0, 5, INF, INF],
            vec![2, 0, 3, INF],
            vec![INF, INF, 0, 2],
            vec![INF, INF, INF, 0],
        ],
        2 => vec![
            vec![0, 4, INF, INF, INF],
            vec![INF, 0, 1, INF, 6],
            vec![2, INF, 0, 3, INF],
            vec![INF, INF, INF, 0, 4],
            vec![INF, INF, INF, INF, 0],
        ],
        3 => vec![
            vec![0, INF, 6, INF, 8],
            vec![INF, 0, 1, 3, INF],
            vec![INF, INF, 0, INF, INF],
            vec![INF, INF, INF, 0, INF],
            vec![INF, INF, INF, INF, 0],
        ],
        4 => vec![
            vec![0, 7, INF, 3],
            vec![INF, 0, 4, INF],
            vec![2, INF, 0, 5],
            vec![INF, INF, INF, 0],
        ],
        5 => vec![
            vec![0, 2, INF, INF, 5],
            vec![INF, 0, 3, INF, INF],
            vec![INF, INF, 0, 4, INF],
            vec![6, INF, INF, 0, 1],
            vec![INF, INF, INF, INF, 0],
        ],
        _ => unreachable!(),
    }
}

///
/// Get the `index`-th predefined graph. `index` wraps around `N_SAMPLES`.
///
pub fn sample_graph(index: usize) -> GraphModel<i32> {
    GraphModel::from_rows(sample_rows(index % N_SAMPLES))
        .unwrap_or_else(|e| panic!("sample graph #{} is invalid: {}", index, e))
}

///
/// All predefined graphs in order
///
pub fn sample_graphs() -> Vec<GraphModel<i32>> {
    (0..N_SAMPLES).map(sample_graph).collect()
}

//
// tests
//

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, 4, 5 ; "graph1")]
    #[test_case(1, 4, 4 ; "graph2")]
    #[test_case(2, 5, 6 ; "graph3")]
    #[test_case(3, 5, 4 ; "graph4")]
    #[test_case(4, 4, 5 ; "graph5")]
    #[test_case(5, 5, 6 ; "graph6")]
    fn sample_sizes(index: usize, n_vertices: usize, n_edges: usize) {
        let g = sample_graph(index);
        assert_eq!(g.vertex_count(), n_vertices);
        assert_eq!(g.n_edges(), n_edges);
    }

    #[test]
    fn wraps_around() {
        assert_eq!(sample_graph(N_SAMPLES), sample_graph(0));
        assert_eq!(sample_graph(N_SAMPLES + 2), sample_graph(2));
        assert_eq!(sample_graphs().len(), N_SAMPLES);
    }
}
