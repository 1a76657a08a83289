use descent::{CgOptions, DenseMatrix, conjugate_gradient};
use faer::Mat;

fn main() {
    // SPD system [[4,1],[1,3]] x = [1,2]
    let a: Mat<f64> = DenseMatrix::from_rows(&[[4.0, 1.0], [1.0, 3.0]]);
    let b = vec![1.0, 2.0];

    match conjugate_gradient(&a, &b, &CgOptions::default()) {
        Ok((x, stats)) => println!("Approximate solution: {:?}, stats = {:?}", x, stats),
        Err(e) => eprintln!("CG failed: {e}"),
    }
}
