//! Library comparing polynomial interpolation of a function on a uniform grid and on
//! Chebyshev-Gauss grid (zeros of Chebyshev polynomial of the first kind).
//! Both interpolants and their differences from the function are sampled on a dense test grid,
//! ready to be plotted.
//!
//! # Example
//! ```
//! use grid_interpolation::{compute, SampleFunction};
//!
//! let runge = SampleFunction::Runge;
//! let result = compute(-4.0, 4.0, 30, |x| runge.evaluate(x)).unwrap();
//!
//! // uniform grid diverges near interval ends, Chebyshev grid does not
//! assert!(result.get_linear().max_abs_difference() > 1.0);
//! assert!(result.get_chebyshev().max_abs_difference() < 0.1);
//! ```

mod engine;
mod functions;
mod grid;
mod interpolant;
mod interval;
mod polynomial;

pub use engine::{compute, GridResult, InterpolationEngine, ResultBundle, DEFAULT_TEST_POINTS};
pub use functions::SampleFunction;
pub use grid::{GridKind, NodeSet, SampledFunction};
pub use interpolant::Interpolant;
pub use interval::{DomainError, Interval};
pub use polynomial::Polynomial;
