use crate::core::{Front, HError};

/// Calculate the contribution of each point to the additive epsilon indicator of the front. The
/// contribution of point `i` is the smallest amount the point must be translated by to be
/// weakly dominated by another point of the front:
///
/// `min_{j != i} max_d (p_i[d] - p_j[d])`
///
/// # Arguments
///
/// * `front`: The front.
///
/// returns: `Vec<f64>`. The contributions; this is `f64::INFINITY` for a front with one point.
pub fn additive_epsilon_contributions(front: &Front) -> Vec<f64> {
    contributions(front, |p_i, p_j| p_i - p_j)
}

/// Calculate the contribution of each point to the multiplicative epsilon indicator of the
/// front:
///
/// `min_{j != i} max_d (p_i[d] / p_j[d])`
///
/// # Arguments
///
/// * `front`: The front. All the coordinates must be strictly positive.
///
/// returns: `Result<Vec<f64>, HError>`. The contributions; this is `f64::INFINITY` for a front
/// with one point.
pub fn multiplicative_epsilon_contributions(front: &Front) -> Result<Vec<f64>, HError> {
    if let Some(point_idx) = front
        .points()
        .iter()
        .position(|p| p.iter().any(|v| *v <= 0.0))
    {
        return Err(HError::Metric(
            "Multiplicative epsilon".to_string(),
            format!(
                "The coordinates of point #{} must be strictly positive",
                point_idx
            ),
        ));
    }
    Ok(contributions(front, |p_i, p_j| p_i / p_j))
}

/// Reduce the pairwise coordinate differences between each point and all the others.
///
/// # Arguments
///
/// * `front`: The front.
/// * `distance`: The function comparing two coordinates.
///
/// returns: `Vec<f64>`
fn contributions(front: &Front, distance: impl Fn(f64, f64) -> f64) -> Vec<f64> {
    let points = front.points();
    points
        .iter()
        .enumerate()
        .map(|(i, p_i)| {
            points
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, p_j)| {
                    p_i.iter()
                        .zip(p_j)
                        .map(|(v_i, v_j)| distance(*v_i, *v_j))
                        .fold(f64::NEG_INFINITY, f64::max)
                })
                .fold(f64::INFINITY, f64::min)
        })
        .collect()
}
