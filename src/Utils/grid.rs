//! Uniform grid construction for the spectrum generators.

/// Evenly spaced grid of `n` points from `start` to `stop`, both included.
/// The last point is pinned to `stop` so accumulated rounding never moves
/// the endpoint.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![start];
    }
    let step = (stop - start) / (n - 1) as f64;
    let mut grid: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
    grid[n - 1] = stop;
    grid
}
