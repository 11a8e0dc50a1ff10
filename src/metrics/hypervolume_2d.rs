use crate::core::HError;
use crate::metrics::hypervolume::check_args;
use crate::metrics::HyperVolumeCalculator;

/// Calculate the hyper-volume for a two-objective problem by summing the areas of the
/// rectangles between the Pareto front and the chosen `reference_point`.
///
/// **IMPLEMENTATION NOTES**:
/// 1) Points that are not strictly dominated by the reference point are excluded.
/// 2) Dominated points do not contribute to the area and do not need to be removed beforehand.
#[derive(Default, Debug, Clone, Copy)]
pub struct HyperVolume2D;

impl HyperVolumeCalculator for HyperVolume2D {
    fn compute(&self, points: &[Vec<f64>], reference_point: &[f64]) -> Result<f64, HError> {
        check_args(points, reference_point)?;
        if reference_point.len() != 2 {
            return Err(HError::Metric(
                self.name(),
                "This can only be used on a 2-objective problem.".to_string(),
            ));
        }
        Ok(volume_2d(points, reference_point))
    }

    fn name(&self) -> String {
        "2D Hyper-volume".to_string()
    }
}

/// Calculate the area dominated by the first two coordinates of `points`.
///
/// # Arguments
///
/// * `points`: The points. Only the first two coordinates are used.
/// * `reference_point`: The reference point.
///
/// returns: `f64`
pub(crate) fn volume_2d(points: &[Vec<f64>], reference_point: &[f64]) -> f64 {
    let (ref_x, ref_y) = (reference_point[0], reference_point[1]);
    let mut inside: Vec<(f64, f64)> = points
        .iter()
        .filter(|p| p[0] < ref_x && p[1] < ref_y)
        .map(|p| (p[0], p[1]))
        .collect();
    inside.sort_by(|(x1, y1), (x2, y2)| x1.total_cmp(x2).then(y1.total_cmp(y2)));

    // rectangle between the point x, the reference x and the last lowest y
    let mut area = 0.0;
    let mut prev_y = ref_y;
    for (x, y) in inside {
        if y < prev_y {
            area += (ref_x - x) * (prev_y - y);
            prev_y = y;
        }
    }
    area
}

#[cfg(test)]
/// Test the hyper-volume calculation in 2D. Expected value was manually calculated.
mod test {
    use crate::metrics::{HyperVolume2D, HyperVolumeCalculator};

    #[test]
    fn test_wrong_dimension() {
        let hv = HyperVolume2D.compute(&[vec![1.0, 1.0, 1.0]], &[2.0, 2.0, 2.0]);
        assert!(hv
            .unwrap_err()
            .to_string()
            .contains("This can only be used on a 2-objective problem."));
    }

    #[test]
    fn test_non_dominated_solutions() {
        let ref_point = [10.0, 10.0];
        let points = vec![vec![1.0, 2.0], vec![0.5, 4.0], vec![0.0, 6.0]];
        assert_eq!(HyperVolume2D.compute(&points, &ref_point).unwrap(), 77.0);
    }

    #[test]
    /// One solution is dominated
    fn test_dominated_solutions() {
        let ref_point = [10.0, 10.0];
        let points = vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![0.0, 6.0]];
        assert_eq!(HyperVolume2D.compute(&points, &ref_point).unwrap(), 76.0);
    }

    #[test]
    /// Points on or outside the reference box are ignored
    fn test_outside_reference_point() {
        let ref_point = [10.0, 10.0];
        let points = vec![vec![1.0, 9.0], vec![5.0, 5.0], vec![9.0, 1.0], vec![11.0, 0.0]];
        assert_eq!(HyperVolume2D.compute(&points, &ref_point).unwrap(), 33.0);

        let ref_point = [9.0, 9.0];
        assert_eq!(HyperVolume2D.compute(&points, &ref_point).unwrap(), 16.0);
    }

    #[test]
    fn test_duplicated_points() {
        let ref_point = [3.0, 3.0];
        let points = vec![vec![1.0, 1.0], vec![1.0, 1.0]];
        assert_eq!(HyperVolume2D.compute(&points, &ref_point).unwrap(), 4.0);
    }
}
