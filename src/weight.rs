//!
//! Edge weight types
//!
//! A weight is either a finite edge cost (or path sum) or the reserved
//! "no known path" sentinel returned by `WeightLike::infinity`.
//!
use std::ops::Add;

/// sentinel used by the integer weight types (same value as the original visualizer)
pub const INF: i32 = 100_000_000;

///
/// generic edge weight
///
pub trait WeightLike:
    Copy + PartialEq + PartialOrd + Add<Output = Self> + Default + std::fmt::Debug + std::fmt::Display
{
    /// self-distance = 0
    fn zero() -> Self;
    /// the sentinel meaning "no edge" / "unreachable"
    fn infinity() -> Self;
    /// is this value the sentinel?
    fn is_infinite(self) -> bool {
        self == Self::infinity()
    }
    /// similary equal
    fn sim_eq(self, rhs: Self) -> bool;
}

impl WeightLike for i32 {
    fn zero() -> i32 {
        0
    }
    fn infinity() -> i32 {
        INF
    }
    fn sim_eq(self, rhs: Self) -> bool {
        self == rhs
    }
}

impl WeightLike for i64 {
    fn zero() -> i64 {
        0
    }
    fn infinity() -> i64 {
        INF as i64
    }
    fn sim_eq(self, rhs: Self) -> bool {
        self == rhs
    }
}

impl WeightLike for f64 {
    fn zero() -> f64 {
        0.0
    }
    fn infinity() -> f64 {
        f64::INFINITY
    }
    fn sim_eq(self, rhs: Self) -> bool {
        if self.is_infinite() || rhs.is_infinite() {
            self == rhs
        } else {
            abs_diff_eq!(self, rhs, epsilon = 0.000000001)
        }
    }
}

///
/// Convert the sentinel into `None`, finite values into `Some`.
///
pub fn to_option<W: WeightLike>(w: W) -> Option<W> {
    if w.is_infinite() {
        None
    } else {
        Some(w)
    }
}

///
/// Inverse of `to_option`
///
pub fn from_option<W: WeightLike>(w: Option<W>) -> W {
    w.unwrap_or_else(W::infinity)
}

///
/// Display wrapper showing the sentinel as `INF`.
///
#[derive(Clone, Copy, Debug)]
pub struct DisplayWeight<W>(pub W);

impl<W: WeightLike> std::fmt::Display for DisplayWeight<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.0.is_infinite() {
            f.pad("INF")
        } else {
            f.pad(&self.0.to_string())
        }
    }
}

//
// tests
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel() {
        assert!(INF.is_infinite());
        assert!(!5_i32.is_infinite());
        assert!((INF as i64).is_infinite());
        assert!(f64::INFINITY.is_infinite());
        assert!(!WeightLike::is_infinite(1.5_f64));
    }

    #[test]
    fn option_conversion() {
        assert_eq!(to_option(INF), None);
        assert_eq!(to_option(3_i32), Some(3));
        assert_eq!(from_option::<i32>(None), INF);
        assert_eq!(from_option(Some(7_i64)), 7);
    }

    #[test]
    fn display_inf() {
        assert_eq!(DisplayWeight(INF).to_string(), "INF");
        assert_eq!(DisplayWeight(12_i32).to_string(), "12");
        assert_eq!(format!("{:>5}", DisplayWeight(INF)), "  INF");
        assert_eq!(format!("{:>5}", DisplayWeight(3_i32)), "    3");
        assert_eq!(DisplayWeight(f64::INFINITY).to_string(), "INF");
    }

    #[test]
    fn float_sim_eq() {
        assert!((0.1_f64 + 0.2).sim_eq(0.3));
        assert!(!(0.1_f64).sim_eq(0.2));
        assert!(f64::INFINITY.sim_eq(f64::INFINITY));
        assert!(!f64::INFINITY.sim_eq(1.0));
    }
}
