extern crate grid_interpolation;

use grid_interpolation::{InterpolationEngine, SampleFunction};

fn main() {

    let a = -4.0;
    let b = 4.0;
    let engine = InterpolationEngine::new();

    println!("function;n;max|f-p_linear|;max|f-p_chebyshev|");
    for function in SampleFunction::all() {
        for n in (1..=30).step_by(4) {
            let result = engine.compute(a, b, n, |x| function.evaluate(x)).unwrap();
            println!(
                "{};{};{:.4e};{:.4e}",
                function,
                n,
                result.get_linear().max_abs_difference(),
                result.get_chebyshev().max_abs_difference()
            );
        }
    }
}
