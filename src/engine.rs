use std::{error::Error, fmt::Display};

use crate::{
    grid::{dense_test_grid, GridKind, NodeSet, SampledFunction},
    interpolant::Interpolant,
    interval::Interval,
};

/// Default number of evenly spaced points used to sample function and interpolants.
pub const DEFAULT_TEST_POINTS: usize = 1000;

/// Computes linear and Chebyshev grid interpolants of a function and samples them on a dense
/// test grid. Engine keeps only configuration, every call to [InterpolationEngine::compute]
/// starts from scratch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterpolationEngine {
    number_of_test_points: usize,
}

impl InterpolationEngine {
    pub fn new() -> Self {
        InterpolationEngine { number_of_test_points: DEFAULT_TEST_POINTS }
    }

    /// Engine sampling results on `number_of_test_points` points.
    /// # Errors
    /// Error is returned when `number_of_test_points` is lower than 2.
    pub fn with_test_points(number_of_test_points: usize) -> Result<Self, Box<dyn Error>> {
        if number_of_test_points < 2 {
            return Err(Box::new(EngineError(
                "test grid must have at least 2 points".to_string(),
            )));
        }
        Ok(InterpolationEngine { number_of_test_points })
    }

    pub fn get_number_of_test_points(&self) -> usize {
        self.number_of_test_points
    }

    /// Interpolates `f` with `n` nodes on linear and Chebyshev grids over `[a, b]`.
    /// # Errors
    /// [crate::DomainError] is returned when `b <= a`, before any grid is generated.
    /// Error is also returned for `n = 0`.
    pub fn compute<F: Fn(f64) -> f64>(
        &self,
        a: f64,
        b: f64,
        n: usize,
        f: F,
    ) -> Result<ResultBundle, Box<dyn Error>> {
        let interval = Interval::new(a, b)?;

        let linear_nodes = NodeSet::linear(&interval, n)?;
        let chebyshev_nodes = NodeSet::chebyshev(&interval, n)?;

        let linear_sampled = SampledFunction::new(linear_nodes, &f);
        let chebyshev_sampled = SampledFunction::new(chebyshev_nodes, &f);

        let linear_interpolant = Interpolant::new(&linear_sampled)?;
        let chebyshev_interpolant = Interpolant::new(&chebyshev_sampled)?;

        let test_points = dense_test_grid(&interval, self.number_of_test_points);
        let function_values: Vec<f64> = test_points.iter().map(|x| f(*x)).collect();

        let linear = GridResult::new(
            linear_sampled,
            linear_interpolant,
            &test_points,
            &function_values,
        );
        let chebyshev = GridResult::new(
            chebyshev_sampled,
            chebyshev_interpolant,
            &test_points,
            &function_values,
        );

        Ok(ResultBundle {
            interval,
            test_points,
            function_values,
            linear,
            chebyshev,
        })
    }
}

impl Default for InterpolationEngine {
    fn default() -> Self {
        InterpolationEngine::new()
    }
}

/// Interpolates `f` with `n` nodes over `[a, b]` using engine with default test grid.
/// # Example
/// ```
/// use grid_interpolation::{compute, GridKind};
///
/// let result = compute(-4.0, 4.0, 13, |x| 1.0 / (1.0 + x * x)).unwrap();
///
/// assert_eq!(1000, result.get_test_points().len());
/// assert_eq!(13, result.get_grid(GridKind::Chebyshev).get_nodes().len());
/// assert!(compute(4.0, -4.0, 13, |x| x).is_err());
/// ```
pub fn compute<F: Fn(f64) -> f64>(
    a: f64,
    b: f64,
    n: usize,
    f: F,
) -> Result<ResultBundle, Box<dyn Error>> {
    InterpolationEngine::new().compute(a, b, n, f)
}

/// Interpolation data of one grid kind. Series `interpolated` and `difference` are aligned with
/// [ResultBundle::get_test_points].
#[derive(Debug, Clone, PartialEq)]
pub struct GridResult {
    sampled: SampledFunction,
    interpolant: Interpolant,
    interpolated: Vec<f64>,
    difference: Vec<f64>,
}

impl GridResult {
    fn new(
        sampled: SampledFunction,
        interpolant: Interpolant,
        test_points: &[f64],
        function_values: &[f64],
    ) -> Self {
        let interpolated = interpolant.batch_evaluate(test_points);
        let difference = function_values
            .iter()
            .zip(&interpolated)
            .map(|(f, p)| f - p)
            .collect();

        GridResult { sampled, interpolant, interpolated, difference }
    }

    pub fn get_kind(&self) -> GridKind {
        self.sampled.get_node_set().get_kind()
    }

    pub fn get_sampled(&self) -> &SampledFunction {
        &self.sampled
    }

    pub fn get_nodes(&self) -> &[f64] {
        self.sampled.get_nodes()
    }

    pub fn get_node_values(&self) -> &[f64] {
        self.sampled.get_values()
    }

    pub fn get_interpolant(&self) -> &Interpolant {
        &self.interpolant
    }

    /// Interpolant values on test grid.
    pub fn get_interpolated(&self) -> &[f64] {
        &self.interpolated
    }

    /// `f(x) - p(x)` on test grid.
    pub fn get_difference(&self) -> &[f64] {
        &self.difference
    }

    /// Maximum of `|f(x) - p(x)|` on test grid, NaN when any difference is NaN.
    pub fn max_abs_difference(&self) -> f64 {
        self.difference.iter().fold(0.0_f64, |max, d| {
            if max.is_nan() || d.is_nan() {
                f64::NAN
            } else {
                f64::max(max, d.abs())
            }
        })
    }
}

/// Everything needed to plot function, both interpolants and both difference curves.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultBundle {
    interval: Interval,
    test_points: Vec<f64>,
    function_values: Vec<f64>,
    linear: GridResult,
    chebyshev: GridResult,
}

impl ResultBundle {
    pub fn get_interval(&self) -> &Interval {
        &self.interval
    }

    pub fn get_test_points(&self) -> &[f64] {
        &self.test_points
    }

    /// Function values on test grid.
    pub fn get_function_values(&self) -> &[f64] {
        &self.function_values
    }

    pub fn get_linear(&self) -> &GridResult {
        &self.linear
    }

    pub fn get_chebyshev(&self) -> &GridResult {
        &self.chebyshev
    }

    pub fn get_grid(&self, kind: GridKind) -> &GridResult {
        match kind {
            GridKind::Linear => &self.linear,
            GridKind::Chebyshev => &self.chebyshev,
        }
    }
}

#[derive(Debug)]
struct EngineError(String);

impl Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in Engine: {}", self.0)
    }
}

impl Error for EngineError {}
