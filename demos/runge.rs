extern crate grid_interpolation;

use grid_interpolation::{compute, SampleFunction};

fn main() {

    let a = -4.0;
    let b = 4.0;
    let n = 13;

    let function = SampleFunction::Runge;
    let result = compute(a, b, n, |x| function.evaluate(x)).unwrap();

    let linear = result.get_linear();
    let chebyshev = result.get_chebyshev();

    println!("x;f;p_linear;p_chebyshev;f-p_linear;f-p_chebyshev");
    for i in 0..result.get_test_points().len() {
        println!(
            "{:.4};{:.4};{:.4};{:.4};{:.4e};{:.4e}",
            result.get_test_points()[i],
            result.get_function_values()[i],
            linear.get_interpolated()[i],
            chebyshev.get_interpolated()[i],
            linear.get_difference()[i],
            chebyshev.get_difference()[i]
        );
    }
}
