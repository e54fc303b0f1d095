//! Common test utilities and data generators.

#![allow(dead_code)]

use faer::Mat;
use vdp::core::DesignTable;

/// Install a test logger so `RUST_LOG=debug` shows pipeline output.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Deterministic pseudo-random values in [-1, 1).
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((self.0 >> 33) as f64) / (u32::MAX as f64) * 2.0 - 1.0
    }
}

/// Generate a table of independent noisy regressors named `x1..xp`.
pub fn generate_independent_table(n_samples: usize, n_features: usize, seed: u64) -> DesignTable {
    let mut rng = Lcg::new(seed);
    let mut x = Mat::zeros(n_samples, n_features);
    for i in 0..n_samples {
        for j in 0..n_features {
            x[(i, j)] = 5.0 + rng.next();
        }
    }
    DesignTable::new(feature_names(n_features), x).expect("valid table")
}

/// Generate a table where `x2` is `x1` up to a relative perturbation of
/// `noise` and `x3` is independent.
pub fn generate_collinear_table(n_samples: usize, noise: f64, seed: u64) -> DesignTable {
    let mut rng = Lcg::new(seed);
    let mut x = Mat::zeros(n_samples, 3);
    for i in 0..n_samples {
        let base = 10.0 + 3.0 * rng.next();
        x[(i, 0)] = base;
        x[(i, 1)] = base * (1.0 + noise * rng.next());
        x[(i, 2)] = 2.0 + rng.next();
    }
    DesignTable::new(feature_names(3), x).expect("valid table")
}

/// Columns of a scaled identity, stacked twice, so all columns are
/// mutually orthogonal and of equal length.
pub fn generate_orthogonal_table(n_features: usize) -> DesignTable {
    let x = Mat::from_fn(2 * n_features, n_features, |i, j| {
        if i % n_features == j {
            3.0
        } else {
            0.0
        }
    });
    DesignTable::new(feature_names(n_features), x).expect("valid table")
}

pub fn feature_names(n_features: usize) -> Vec<String> {
    (1..=n_features).map(|j| format!("x{j}")).collect()
}

/// Approximate equality check for floating point values.
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}
