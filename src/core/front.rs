use log::warn;

use crate::core::{HError, ObjectiveDirection};
use crate::utils::{vector_max, vector_min};

/// A set of points in the objective space, all with the same number of objectives. Objectives
/// are always minimised: use [`Front::from_objectives`] to convert maximised objectives.
///
/// The points are expected to be mutually non-dominated. This is not checked: a front with
/// dominated points can still be used but the indicators calculated on it are not meaningful.
#[derive(Clone, Debug, PartialEq)]
pub struct Front {
    /// The point coordinates. The size of this vector corresponds to the number of points and the
    /// size of the nested vector corresponds to the number of objectives.
    points: Vec<Vec<f64>>,
    /// The number of objectives.
    number_of_objectives: usize,
}

impl Front {
    /// Create a new front of minimised objectives.
    ///
    /// # Arguments
    ///
    /// * `points`: The points. Each nested vector contains the objective values of one point.
    ///
    /// returns: `Result<Front, HError>`. This returns an error if there are no points, if the
    /// points have a different number of objectives or a value is NaN.
    pub fn new(points: Vec<Vec<f64>>) -> Result<Self, HError> {
        let number_of_objectives = points.first().ok_or(HError::EmptyFront)?.len();
        // a point needs at least one objective
        if number_of_objectives == 0 {
            return Err(HError::ShapeMismatch("point #0".to_string(), 0, 1));
        }

        for (point_idx, point) in points.iter().enumerate() {
            if point.len() != number_of_objectives {
                return Err(HError::ShapeMismatch(
                    format!("point #{}", point_idx),
                    point.len(),
                    number_of_objectives,
                ));
            }
            if point.iter().any(|v| v.is_nan()) {
                return Err(HError::NaN(point_idx));
            }
        }

        Ok(Self {
            points,
            number_of_objectives,
        })
    }

    /// Create a new front from objectives that may be minimised or maximised. The values of the
    /// maximised objectives are multiplied by -1 so that all the stored objectives are minimised.
    ///
    /// # Arguments
    ///
    /// * `objective_values`: The objective values of each point.
    /// * `directions`: The direction of each objective.
    ///
    /// returns: `Result<Front, HError>`
    pub fn from_objectives(
        objective_values: &[Vec<f64>],
        directions: &[ObjectiveDirection],
    ) -> Result<Self, HError> {
        let points = objective_values
            .iter()
            .enumerate()
            .map(|(point_idx, values)| {
                if values.len() != directions.len() {
                    return Err(HError::ShapeMismatch(
                        format!("point #{}", point_idx),
                        values.len(),
                        directions.len(),
                    ));
                }
                Ok(values
                    .iter()
                    .zip(directions)
                    .map(|(v, d)| v * d.sign())
                    .collect())
            })
            .collect::<Result<Vec<Vec<f64>>, HError>>()?;
        Self::new(points)
    }

    /// The number of points in the front.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the front has no points. A [`Front`] is never empty, this is only provided for
    /// completeness.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The number of objectives of each point.
    pub fn number_of_objectives(&self) -> usize {
        self.number_of_objectives
    }

    /// Get the coordinates of the point at `index`.
    ///
    /// # Arguments
    ///
    /// * `index`: The point index.
    ///
    /// returns: `Result<&[f64], HError>`
    pub fn point(&self, index: usize) -> Result<&[f64], HError> {
        self.points
            .get(index)
            .map(|p| p.as_slice())
            .ok_or(HError::Generic(format!(
                "The point index {} does not exist",
                index
            )))
    }

    /// All the points.
    pub fn points(&self) -> &[Vec<f64>] {
        &self.points
    }

    /// Get the points of the front except the one at `index`.
    ///
    /// # Arguments
    ///
    /// * `index`: The index of the point to exclude.
    ///
    /// returns: `Vec<Vec<f64>>`
    pub fn without(&self, index: usize) -> Vec<Vec<f64>> {
        self.points
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != index)
            .map(|(_, p)| p.clone())
            .collect()
    }

    /// Get the values of one objective for all the points.
    ///
    /// # Arguments
    ///
    /// * `objective_idx`: The objective index.
    ///
    /// returns: `Vec<f64>`
    pub fn objective_values(&self, objective_idx: usize) -> Vec<f64> {
        self.points.iter().map(|p| p[objective_idx]).collect()
    }

    /// The coordinate-wise minimum of the points (the ideal point).
    ///
    /// returns: `Result<Vec<f64>, HError>`
    pub fn lower_bounds(&self) -> Result<Vec<f64>, HError> {
        (0..self.number_of_objectives)
            .map(|obj_idx| vector_min(&self.objective_values(obj_idx)))
            .collect()
    }

    /// The coordinate-wise maximum of the points (the nadir point).
    ///
    /// returns: `Result<Vec<f64>, HError>`
    pub fn upper_bounds(&self) -> Result<Vec<f64>, HError> {
        (0..self.number_of_objectives)
            .map(|obj_idx| vector_max(&self.objective_values(obj_idx)))
            .collect()
    }

    /// Get the reference point to use in a calculation. When `reference_point` is given, its size
    /// is checked against the number of objectives; otherwise the coordinate-wise maximum of the
    /// points is returned. A warning is logged if any point is not bounded by the reference
    /// point, as the volumes calculated with it would not be meaningful.
    ///
    /// # Arguments
    ///
    /// * `reference_point`: The optional reference point.
    ///
    /// returns: `Result<Vec<f64>, HError>`
    pub fn reference_point(&self, reference_point: Option<&[f64]>) -> Result<Vec<f64>, HError> {
        let Some(reference_point) = reference_point else {
            return self.upper_bounds();
        };

        if reference_point.len() != self.number_of_objectives {
            return Err(HError::ShapeMismatch(
                "reference point".to_string(),
                reference_point.len(),
                self.number_of_objectives,
            ));
        }
        if reference_point.iter().any(|v| v.is_nan()) {
            return Err(HError::Metric(
                "reference point".to_string(),
                "NaN detected in the reference point".to_string(),
            ));
        }

        for (point_idx, point) in self.points.iter().enumerate() {
            if point.iter().zip(reference_point).any(|(v, r)| v > r) {
                warn!(
                    "Point #{} ({:?}) is not bounded by the reference point {:?}",
                    point_idx, point, reference_point
                );
            }
        }
        Ok(reference_point.to_vec())
    }
}

/// Calculate a reference point by taking the maximum of each objective, so that the point will
/// be dominated by all other points. An optional offset could be added to each coordinate to
/// enforce strict dominance.
///
/// # Arguments
///
/// * `front`: The front to use in the calculation.
/// * `offset`: The offset for each objective to add to the calculated reference point. This must
///   have a size equal to the number of objectives.
///
/// returns: `Result<Vec<f64>, HError>` The reference point. This returns an error if the size of
/// the offset does not match the number of objectives.
pub fn estimate_reference_point(front: &Front, offset: Option<&[f64]>) -> Result<Vec<f64>, HError> {
    let mut ref_point = front.upper_bounds()?;
    if let Some(offset) = offset {
        if offset.len() != front.number_of_objectives() {
            return Err(HError::ShapeMismatch(
                "offset".to_string(),
                offset.len(),
                front.number_of_objectives(),
            ));
        }
        ref_point
            .iter_mut()
            .zip(offset)
            .for_each(|(coordinate, o)| *coordinate += o);
    }

    Ok(ref_point)
}

#[cfg(test)]
mod test {
    use crate::core::{estimate_reference_point, Front, HError, ObjectiveDirection};

    #[test]
    /// Test the errors raised when creating a front
    fn test_front_errors() {
        assert!(matches!(Front::new(vec![]), Err(HError::EmptyFront)));

        let err = Front::new(vec![vec![1.0, 2.0], vec![1.0]]).unwrap_err();
        assert!(matches!(err, HError::ShapeMismatch(_, 1, 2)));
        assert_eq!(
            err.to_string(),
            "The size of the point #1 (1) does not match the number of objectives (2)"
        );

        assert!(matches!(
            Front::new(vec![vec![1.0, 2.0], vec![f64::NAN, 1.0]]),
            Err(HError::NaN(1))
        ));
        assert!(matches!(
            Front::new(vec![vec![]]),
            Err(HError::ShapeMismatch(_, 0, 1))
        ));
        assert!(matches!(
            Front::new(vec![vec![], vec![]]),
            Err(HError::ShapeMismatch(_, 0, 1))
        ));
    }

    #[test]
    /// Maximised objectives are converted to minimised ones
    fn test_from_objectives() {
        let front = Front::from_objectives(
            &[vec![1.0, 2.0], vec![3.0, -4.0]],
            &[ObjectiveDirection::Minimise, ObjectiveDirection::Maximise],
        )
        .unwrap();
        assert_eq!(front.points(), &[vec![1.0, -2.0], vec![3.0, 4.0]]);

        let err = Front::from_objectives(&[vec![1.0, 2.0]], &[ObjectiveDirection::Minimise]);
        assert!(matches!(err, Err(HError::ShapeMismatch(_, 2, 1))));
    }

    #[test]
    fn test_bounds() {
        let front = Front::new(vec![vec![1.0, 9.0], vec![5.0, 5.0], vec![9.0, 1.0]]).unwrap();
        assert_eq!(front.len(), 3);
        assert_eq!(front.number_of_objectives(), 2);
        assert_eq!(front.lower_bounds().unwrap(), vec![1.0, 1.0]);
        assert_eq!(front.upper_bounds().unwrap(), vec![9.0, 9.0]);
        assert_eq!(front.without(1), vec![vec![1.0, 9.0], vec![9.0, 1.0]]);
        assert!(front.point(3).is_err());
    }

    #[test]
    fn test_reference_point() {
        let front = Front::new(vec![vec![1.0, 9.0], vec![5.0, 5.0], vec![9.0, 1.0]]).unwrap();
        assert_eq!(front.reference_point(None).unwrap(), vec![9.0, 9.0]);
        assert_eq!(
            front.reference_point(Some(&[10.0, 10.0])).unwrap(),
            vec![10.0, 10.0]
        );
        assert!(matches!(
            front.reference_point(Some(&[10.0, 10.0, 10.0])),
            Err(HError::ShapeMismatch(_, 3, 2))
        ));
    }

    #[test]
    fn test_estimate_reference_point() {
        let front = Front::new(vec![vec![-1.0, -2.0], vec![3.0, 4.0], vec![0.0, 6.0]]).unwrap();
        assert_eq!(
            estimate_reference_point(&front, None).unwrap(),
            vec![3.0, 6.0]
        );
        assert_eq!(
            estimate_reference_point(&front, Some(&[1.0, 2.0])).unwrap(),
            vec![4.0, 8.0]
        );

        let err = estimate_reference_point(&front, Some(&[0.0]))
            .unwrap_err()
            .to_string();
        assert!(err.contains("The size of the offset (1) does not match the number of objectives (2)"));
    }
}
