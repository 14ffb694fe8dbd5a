//!
//! Square matrix of weights
//!
use crate::weight::{DisplayWeight, WeightLike};
use itertools::Itertools;
use std::ops::{Index, IndexMut};

///
/// `N x N` matrix stored in row-major order.
///
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix<W> {
    n: usize,
    elements: Vec<W>,
}

impl<W: Copy> SquareMatrix<W> {
    /// matrix filled with `value`
    pub fn filled(n: usize, value: W) -> Self {
        SquareMatrix {
            n,
            elements: vec![value; n * n],
        }
    }
    ///
    /// Create from a list of rows.
    /// Caller must ensure that every row has length `rows.len()`.
    ///
    pub fn from_rows(rows: &[Vec<W>]) -> Self {
        let n = rows.len();
        let mut elements = Vec::with_capacity(n * n);
        for row in rows {
            assert_eq!(row.len(), n, "non-square rows");
            elements.extend_from_slice(row);
        }
        SquareMatrix { n, elements }
    }
    /// size of a side
    pub fn dim(&self) -> usize {
        self.n
    }
    /// slice of the i-th row
    pub fn row(&self, i: usize) -> &[W] {
        &self.elements[i * self.n..(i + 1) * self.n]
    }
    pub fn rows(&self) -> impl Iterator<Item = &[W]> + '_ {
        self.elements.chunks(self.n.max(1))
    }
    pub fn to_rows(&self) -> Vec<Vec<W>> {
        self.rows().map(|row| row.to_vec()).collect()
    }
    /// iterator over `(i, j, value)`
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, W)> + '_ {
        let n = self.n;
        self.elements
            .iter()
            .enumerate()
            .map(move |(x, &w)| (x / n, x % n, w))
    }
}

impl<W> Index<(usize, usize)> for SquareMatrix<W> {
    type Output = W;
    fn index(&self, (i, j): (usize, usize)) -> &W {
        assert!(i < self.n && j < self.n, "index ({}, {}) out of {}", i, j, self.n);
        &self.elements[i * self.n + j]
    }
}

impl<W> IndexMut<(usize, usize)> for SquareMatrix<W> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut W {
        assert!(i < self.n && j < self.n, "index ({}, {}) out of {}", i, j, self.n);
        &mut self.elements[i * self.n + j]
    }
}

impl<W: WeightLike> SquareMatrix<W> {
    ///
    /// Table view which renders the sentinel as `INF`
    ///
    pub fn display_with_inf(&self) -> DisplayMatrix<'_, W> {
        DisplayMatrix(self)
    }
}

///
/// ```text
///        0    1    2
///   0    0    5  INF
///   1  INF    0    3
///   2    2  INF    0
/// ```
///
pub struct DisplayMatrix<'a, W>(&'a SquareMatrix<W>);

const CELL_WIDTH: usize = 5;

impl<'a, W: WeightLike> std::fmt::Display for DisplayMatrix<'a, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let m = self.0;
        writeln!(
            f,
            "{:>w$}{}",
            "",
            (0..m.dim()).map(|j| format!("{:>w$}", j, w = CELL_WIDTH)).join(""),
            w = CELL_WIDTH
        )?;
        for (i, row) in m.rows().enumerate() {
            writeln!(
                f,
                "{:>w$}{}",
                i,
                row.iter()
                    .map(|&x| format!("{:>w$}", DisplayWeight(x), w = CELL_WIDTH))
                    .join(""),
                w = CELL_WIDTH
            )?;
        }
        Ok(())
    }
}

//
// tests
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weight::INF;

    #[test]
    fn indexing() {
        let mut m = SquareMatrix::from_rows(&[vec![0, 5, INF], vec![INF, 0, 3], vec![2, INF, 0]]);
        assert_eq!(m.dim(), 3);
        assert_eq!(m[(0, 1)], 5);
        assert_eq!(m[(2, 0)], 2);
        assert_eq!(m.row(1), &[INF, 0, 3]);
        m[(0, 2)] = 8;
        assert_eq!(m[(0, 2)], 8);
        assert_eq!(m.to_rows()[0], vec![0, 5, 8]);
        let cells: Vec<_> = m.iter().filter(|&(_, _, w)| w == INF).collect();
        assert_eq!(cells, vec![(1, 0, INF), (2, 1, INF)]);
    }

    #[test]
    #[should_panic]
    fn out_of_range() {
        let m = SquareMatrix::filled(2, 0);
        let _ = m[(2, 0)];
    }

    #[test]
    fn table() {
        let m = SquareMatrix::from_rows(&[vec![0, 5, INF], vec![INF, 0, 3], vec![2, INF, 0]]);
        let s = m.display_with_inf().to_string();
        println!("{}", s);
        assert_eq!(
            s,
            "         0    1    2\n    0    0    5  INF\n    1  INF    0    3\n    2    2  INF    0\n"
        );
    }
}
