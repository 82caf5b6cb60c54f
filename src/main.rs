use std::{env, error::Error, num::NonZeroUsize};

use log::info;

use linfit::{Dataset, DesignMatrix, Polynomial, TrainConfig, Trainer, solve};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let cfg = match env::args().nth(1) {
        Some(path) => TrainConfig::from_json_file(&path)?,
        None => TrainConfig::new(
            NonZeroUsize::new(1000).unwrap(),
            0.02,
            NonZeroUsize::new(100).unwrap(),
        ),
    };

    // Fit y = 2x + 10 on x = 0..9.
    let data = Dataset::from_fn((0..10).map(|i| i as f32).collect(), |x| 2.0 * x + 10.0)?;
    let design = DesignMatrix::new(&data, &Polynomial::line());

    let exact = solve::least_squares(&design)?;
    info!("least-squares solution: {:?}", exact.as_slice().unwrap());

    let fit = Trainer::gradient_descent(design, cfg)?.run()?;

    println!(
        "fitted weights: intercept {:.4}, slope {:.4}",
        fit.weights[0], fit.weights[1]
    );
    if let Some(loss) = fit.metrics.final_loss() {
        println!("final loss after {} steps: {loss:.6}", fit.metrics.steps());
    }

    Ok(())
}
