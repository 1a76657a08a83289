use descent::{GdOptions, gradient_descent};

fn main() {
    // gradient of f(x) = ||x||^2
    let grad = |x: &[f64], g: &mut [f64]| {
        for (gi, xi) in g.iter_mut().zip(x) {
            *gi = 2.0 * xi;
        }
    };

    match gradient_descent(&grad, &[1.0, -1.0], &GdOptions::default()) {
        Ok((x, stats)) => println!("Approximate minimizer: {:?}, stats = {:?}", x, stats),
        Err(e) => eprintln!("GD failed: {e}"),
    }
}
