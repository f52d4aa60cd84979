//! Small numeric helpers

/// Real roots of `a·x² + b·x + c = 0`.
///
/// Two roots are returned as `[(-b + √d) / 2a, (-b - √d) / 2a]`, a double root
/// once, and no roots when the discriminant is negative. With `a == 0` the
/// equation is solved as linear.
///
/// ```rust
/// use aoc_utils::math::solve_quadratic;
///
/// // Race of 7ms with a record of 9mm: hold times h with h * (7 - h) > 9
/// let roots = solve_quadratic(-1.0, 7.0, -9.0);
/// assert_eq!(roots.len(), 2);
/// assert!((roots[0] - 1.697).abs() < 1e-3);
/// assert!((roots[1] - 5.302).abs() < 1e-3);
/// ```
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Vec<f64> {
    if a == 0.0 {
        return if b == 0.0 { Vec::new() } else { vec![-c / b] };
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        Vec::new()
    } else if discriminant == 0.0 {
        vec![-b / (2.0 * a)]
    } else {
        let root = discriminant.sqrt();
        vec![(-b + root) / (2.0 * a), (-b - root) / (2.0 * a)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_counts() {
        assert_eq!(solve_quadratic(1.0, 0.0, 1.0), Vec::<f64>::new());
        assert_eq!(solve_quadratic(1.0, -2.0, 1.0), vec![1.0]);
        assert_eq!(solve_quadratic(1.0, -3.0, 2.0), vec![2.0, 1.0]);
    }

    #[test]
    fn test_root_order_follows_sign_of_a() {
        assert_eq!(solve_quadratic(-1.0, 3.0, -2.0), vec![1.0, 2.0]);
    }

    #[test]
    fn test_linear_fallback() {
        assert_eq!(solve_quadratic(0.0, 2.0, -8.0), vec![4.0]);
        assert!(solve_quadratic(0.0, 0.0, 5.0).is_empty());
    }
}
