use crate::core::HError;

/// Calculate the weights used by the HypE indicator `Ih_k`. The weight at position `i` is the
/// probability that a portion of space dominated by exactly `i + 1` points is lost when `k`
/// random points are removed from a front of `n` points, divided by the number of points
/// sharing it:
///
/// `alpha[0] = 1`, `alpha[i] = alpha[i - 1] * (k - i) / (n - i)` for `i` in `[1, k)`, `0` for
/// `i >= k`, and finally `alpha[i] /= i + 1`.
///
/// # Arguments
///
/// * `number_of_points`: The number of points `n` in the front.
/// * `k`: The number of points to remove. This must be between `1` and `n`.
///
/// returns: `Result<Vec<f64>, HError>`
pub fn alpha_weights(number_of_points: usize, k: usize) -> Result<Vec<f64>, HError> {
    if k == 0 || k > number_of_points {
        return Err(HError::InvalidRank(k, number_of_points));
    }

    let mut alpha = vec![0.0; number_of_points];
    alpha[0] = 1.0;
    for i in 1..k {
        alpha[i] = alpha[i - 1] * (k - i) as f64 / (number_of_points - i) as f64;
    }
    for (i, a) in alpha.iter_mut().enumerate() {
        *a /= (i + 1) as f64;
    }
    Ok(alpha)
}
