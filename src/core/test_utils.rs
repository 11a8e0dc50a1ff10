use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

/// Check that two arrays are element-wise equal within a tolerance, as
/// `|calculated - expected| <= a_tol + r_tol * |expected|`.
///
/// # Arguments
///
/// * `calculated_values`: The calculated values.
/// * `expected_values`: The expected values.
/// * `r_tol`: The relative tolerance.
/// * `a_tol`: The absolute tolerance.
///
/// returns: `()`
pub(crate) fn assert_all_close(
    calculated_values: &[f64],
    expected_values: &[f64],
    r_tol: f64,
    a_tol: f64,
) {
    assert_eq!(
        calculated_values.len(),
        expected_values.len(),
        "the array sizes differ"
    );
    for (i, (calculated, expected)) in calculated_values.iter().zip(expected_values).enumerate() {
        if (calculated - expected).abs() > a_tol + r_tol * expected.abs() {
            panic!(
                r#"assertion failed on item #{i:?}
                    actual: `{calculated:?}`,
                    expected: `{expected:?}`"#,
            )
        }
    }
}

/// The expected indicator for one number of points to remove.
#[derive(Deserialize, Debug)]
pub(crate) struct HypETestCase {
    /// The number of points to remove.
    pub(crate) k: usize,
    /// The expected `Ih_k` value of each point.
    pub(crate) indicator: Vec<f64>,
}

/// Reference data for a front.
#[derive(Deserialize, Debug)]
pub(crate) struct HypETestData {
    /// The front points.
    pub(crate) points: Vec<Vec<f64>>,
    /// The reference point.
    pub(crate) reference_point: Vec<f64>,
    /// The hyper-volume of the whole front.
    pub(crate) hyper_volume: f64,
    /// The expected indicators.
    pub(crate) cases: Vec<HypETestCase>,
}

/// Parse a JSON file with the reference data of a front.
///
/// # Arguments
///
/// * `file`: The file name, without extension, in the `tests/test_data` folder.
///
/// returns: `Result<HypETestData, String>`
pub(crate) fn parse_test_data_file(file: &str) -> Result<HypETestData, String> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("test_data")
        .join(format!("{file}.json"));
    let data = fs::read_to_string(&path)
        .map_err(|e| format!("Cannot read {}: {}", path.display(), e))?;
    serde_json::from_str(&data).map_err(|e| format!("Cannot parse {}: {}", path.display(), e))
}
