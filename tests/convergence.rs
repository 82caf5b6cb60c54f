use std::num::NonZeroUsize;

use ndarray::Array1;

use linfit::{
    Dataset, DesignMatrix, FitErr, GradientDescent, Mse, Polynomial, TrainConfig, Trainer, ops,
    solve,
};

fn nz(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

fn line_design() -> DesignMatrix {
    let data = Dataset::from_fn((0..10).map(|i| i as f32).collect(), |x| 2.0 * x + 10.0).unwrap();
    DesignMatrix::new(&data, &Polynomial::line())
}

#[test]
fn end_to_end_recovers_slope_and_intercept() {
    // X = 0..9, Y = 2X + 10, 1000 steps, lr 0.02, report every 100.
    let cfg = TrainConfig::new(nz(1000), 0.02, nz(100));
    let fit = Trainer::gradient_descent(line_design(), cfg)
        .unwrap()
        .run()
        .unwrap();

    let intercept = fit.weights[0];
    let slope = fit.weights[1];
    assert!((intercept - 10.0).abs() < 1e-2, "intercept {intercept}");
    assert!((slope - 2.0).abs() < 1e-2, "slope {slope}");

    let final_loss = fit.metrics.final_loss().unwrap();
    assert!(final_loss < 1e-3, "final loss {final_loss}");
    assert_eq!(fit.metrics.steps(), 1000);
    assert_eq!(fit.metrics.reports().len(), 10);
}

#[test]
fn reported_losses_never_increase() {
    let cfg = TrainConfig::new(nz(1000), 0.02, nz(100));
    let fit = Trainer::gradient_descent(line_design(), cfg)
        .unwrap()
        .run()
        .unwrap();

    let reports = fit.metrics.reports();
    for pair in reports.windows(2) {
        assert!(
            pair[1].loss <= pair[0].loss + 1e-6,
            "loss rose between steps {} and {}: {} -> {}",
            pair[0].step,
            pair[1].step,
            pair[0].loss,
            pair[1].loss
        );
    }
}

#[test]
fn identical_runs_produce_identical_weights() {
    let run = || {
        let cfg = TrainConfig::new(nz(500), 0.02, nz(100));
        Trainer::gradient_descent(line_design(), cfg)
            .unwrap()
            .run()
            .unwrap()
            .weights
    };

    let a = run();
    let b = run();
    assert_eq!(a, b);
}

#[test]
fn gradient_vanishes_at_least_squares_solution() {
    let design = line_design();
    let exact = solve::least_squares(&design).unwrap();

    let mut grad = Array1::zeros(design.dim());
    ops::gradient_into(&design, &Mse, exact.view(), &mut grad).unwrap();

    for (i, g) in grad.iter().enumerate() {
        assert!(g.abs() < 1e-3, "gradient component {i} is {g}");
    }
}

#[test]
fn descent_approaches_the_closed_form_minimizer() {
    // Noisy targets, so the minimizer is no longer the generating line.
    let data = Dataset::from_fn_noisy(
        (0..32).map(|i| i as f32 * 0.25).collect(),
        |x| 2.0 * x + 10.0,
        0.3,
        42,
    )
    .unwrap();
    let design = DesignMatrix::new(&data, &Polynomial::line());

    let exact = solve::least_squares(&design).unwrap();
    let cfg = TrainConfig::new(nz(20000), 0.02, nz(1000));
    let fit = Trainer::gradient_descent(design, cfg).unwrap().run().unwrap();

    for (w, e) in fit.weights.iter().zip(exact.iter()) {
        assert!((w - e).abs() < 1e-2, "fitted {w} vs exact {e}");
    }
}

#[test]
fn mismatched_weights_fail_fast() {
    let design = line_design();
    let gd = GradientDescent::new(0.02).unwrap();
    let cfg = TrainConfig::new(nz(10), 0.02, nz(10));

    let err = Trainer::with_weights(design, gd, Mse, cfg, vec![0.0, 0.0, 0.0]).unwrap_err();
    assert_eq!(
        err,
        FitErr::SizeMismatch {
            a: "weights",
            b: "features",
            got: 3,
            expected: 2,
        }
    );
}
