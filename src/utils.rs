//!
//! Wall-clock measurement of engine runs
//!
use std::time::{Duration, Instant};

///
/// Run `f` once and return its value with the elapsed time.
///
pub fn timed<F, T>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let ret = f();
    (ret, start.elapsed())
}

///
/// Elapsed milli-seconds of `f`; used to check the cadence of `Driver::run`.
///
pub fn timer<F, T>(f: F) -> (T, u128)
where
    F: FnOnce() -> T,
{
    let (ret, elapsed) = timed(f);
    (ret, elapsed.as_millis())
}

///
/// Elapsed micro-seconds of `f`. An unpaced full run finishes well below a
/// milli-second on small graphs, so `cli::solve` reports it in this unit.
///
pub fn timer_us<F, T>(f: F) -> (T, u128)
where
    F: FnOnce() -> T,
{
    let (ret, elapsed) = timed(f);
    (ret, elapsed.as_micros())
}

//
// tests
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_returns_value() {
        let (x, ms) = timer(|| {
            std::thread::sleep(std::time::Duration::from_millis(2));
            10
        });
        assert_eq!(x, 10);
        assert!(ms >= 2);
        let (s, _) = timer_us(|| "ok".to_string());
        assert_eq!(s, "ok");
        let (n, elapsed) = timed(|| 1 + 1);
        assert_eq!(n, 2);
        assert!(elapsed < Duration::from_secs(1));
    }
}
