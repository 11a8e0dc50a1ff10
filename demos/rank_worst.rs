use std::env;
use std::error::Error;
use std::path::PathBuf;

use log::{info, LevelFilter};
use rand::Rng;

use hype::core::{get_rng, Front};
use hype::operators::{ContributionSelector, HypESelector, HypESelectorArgs};

/// Rank the least contributing points of a front with 50 random points on the positive
/// orthant of the unit hypersphere. The selector options may be given in a JSON file
/// whose path is passed as first argument, for example:
///
/// `{"number_to_remove": 5, "dim_threshold": 4, "number_of_samples": 100000}`
///
/// Make sure to compile this in release mode to speed up the calculation:
///
/// `cargo run --example rank_worst --release -- options.json`
fn main() -> Result<(), Box<dyn Error>> {
    // Add log
    env_logger::builder().filter_level(LevelFilter::Debug).init();

    let args = match env::args().nth(1) {
        Some(file) => HypESelectorArgs::from_json_file(&PathBuf::from(file))?,
        None => HypESelectorArgs {
            number_to_remove: 5,
            ..HypESelectorArgs::default()
        },
    };
    info!("Using {:?}", args);

    // to reproduce results
    let mut rng = get_rng(Some(10));
    for number_of_objectives in 2..=5 {
        let points: Vec<Vec<f64>> = (0..50)
            .map(|_| {
                let point: Vec<f64> = (0..number_of_objectives)
                    .map(|_| rng.gen::<f64>() + 1e-6)
                    .collect();
                let norm = point.iter().map(|v| v * v).sum::<f64>().sqrt();
                point.iter().map(|v| v / norm).collect()
            })
            .collect();
        let front = Front::new(points)?;

        let selector = HypESelector::new(HypESelectorArgs {
            reference_point: Some(vec![1.0; number_of_objectives]),
            ..args.clone()
        })?;
        let worst = selector.select_worst(&front, &mut rng)?;
        info!(
            "Points to remove with {} objectives: {:?}",
            number_of_objectives, worst
        );
    }

    Ok(())
}
