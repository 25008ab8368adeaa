extern crate grid_interpolation;

use grid_interpolation::{compute, GridKind, SampleFunction};

fn main() {

    let a = -4.0;
    let b = 4.0;
    let n = 13;

    let function = SampleFunction::Gaussian;
    let result = compute(a, b, n, |x| function.evaluate(x)).unwrap();

    for kind in [GridKind::Linear, GridKind::Chebyshev] {
        let grid = result.get_grid(kind);

        println!("{} ({} nodes)", kind, grid.get_nodes().len());
        println!("x;f(x)");
        for (x, y) in grid.get_nodes().iter().zip(grid.get_node_values()) {
            println!("{:.4};{:.4}", x, y);
        }
        println!();
    }
}
