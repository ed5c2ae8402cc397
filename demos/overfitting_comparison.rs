use ndarray::Array1;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Normal;
use rand::SeedableRng;
use rand::rngs::StdRng;
use shrinkage::{
    Dataset, FitConfig, Matrix, Penalty, PolynomialFeatures, StandardScaler, Vector, fit,
    metrics::r2_score,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== Overfitting and Regularization Comparison ===\n");

    // Noisy quadratic: y = 0.5*x^2 - x + 2 + noise.
    let n_samples = 60;
    let mut rng = StdRng::seed_from_u64(42);
    let x_raw: Vector = Array1::linspace(-3.0, 3.0, n_samples);
    let noise: Vector = Array1::random_using(n_samples, Normal::new(0.0, 1.0)?, &mut rng);
    let y: Vector = x_raw.mapv(|v| 0.5 * v * v - v + 2.0) + noise;

    // A degree-9 expansion gives ordinary least squares plenty of room to
    // chase the noise.
    let degree = 9;
    let x_col: Matrix = x_raw.clone().insert_axis(ndarray::Axis(1));
    let x_poly = PolynomialFeatures::new(degree).transform(&x_col)?;

    let dataset = Dataset::new(x_poly, y)?;
    let (train, test) = dataset.shuffled_split(0.3, 7)?;

    let mut scaler = StandardScaler::new();
    let train_features = scaler.fit_transform(&train.features)?;
    let test_features = scaler.transform(&test.features)?;

    println!(
        "{} train / {} test samples, polynomial degree {}\n",
        train.n_samples(),
        test.n_samples(),
        degree
    );

    let configs = [
        ("OLS", FitConfig::new(Penalty::None)),
        ("Ridge (λ=0.1)", FitConfig::new(Penalty::Ridge { lambda: 0.1 })),
        ("Ridge (λ=10)", FitConfig::new(Penalty::Ridge { lambda: 10.0 })),
        ("Lasso (λ=0.1)", FitConfig::new(Penalty::Lasso { lambda: 0.1 })),
        (
            "ElasticNet (λ=0.1, r=0.5)",
            FitConfig::new(Penalty::ElasticNet {
                lambda: 0.1,
                l1_ratio: 0.5,
            }),
        ),
    ];

    println!(
        "{:<28} {:>9} {:>9} {:>9} {:>7} {:>10}",
        "Model", "Train R²", "Test R²", "‖β‖₂", "Zeros", "Converged"
    );
    println!("{}", "-".repeat(78));

    for (name, config) in configs {
        let (model, diagnostics) = fit(&train_features, &train.labels, &config)?;

        let train_r2 = r2_score(&train.labels, &model.predict(&train_features)?)?;
        let test_r2 = r2_score(&test.labels, &model.predict(&test_features)?)?;
        let norm = model.coefficients.mapv(|c| c * c).sum().sqrt();
        let zeros = model.coefficients.iter().filter(|c| c.abs() < 1e-10).count();

        println!(
            "{:<28} {:>9.4} {:>9.4} {:>9.3} {:>7} {:>10}",
            name, train_r2, test_r2, norm, zeros, diagnostics.converged
        );
    }

    println!("\nObservations:");
    println!("• OLS on a high-degree expansion fits train noise, hurting test R²");
    println!("• Ridge shrinks every coefficient; larger λ shrinks harder");
    println!("• Lasso additionally zeroes out irrelevant powers");
    println!("• ElasticNet blends both effects");

    Ok(())
}
