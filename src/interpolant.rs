use std::{error::Error, fmt::Display};

use nalgebra::{DMatrix, DVector};

use crate::{grid::SampledFunction, polynomial::Polynomial};

/// Polynomial of degree at most `n - 1` passing through all `n` points of a [SampledFunction].
///
/// Stored in barycentric Lagrange form, so the result does not depend on node ordering and
/// evaluation costs O(n).
#[derive(Debug, Clone, PartialEq)]
pub struct Interpolant {
    nodes: Vec<f64>,
    values: Vec<f64>,
    weights: Vec<f64>,
}

impl Interpolant {
    /// Builds interpolant through sampled function points.
    /// # Example
    /// ```
    /// use grid_interpolation::{Interpolant, Interval, NodeSet, SampledFunction};
    /// use assert_approx_eq::assert_approx_eq;
    ///
    /// let interval = Interval::new(0.0, 2.0).unwrap();
    /// let sampled = SampledFunction::new(NodeSet::linear(&interval, 3).unwrap(), |x| x * x);
    /// let interpolant = Interpolant::new(&sampled).unwrap();
    ///
    /// assert_approx_eq!(2.25, interpolant.evaluate(1.5), 1e-12);
    /// ```
    /// # Errors
    /// Error is returned when there are no points, when nodes and values lengths differ or when
    /// two nodes coincide.
    pub fn new(sampled: &SampledFunction) -> Result<Self, Box<dyn Error>> {
        Interpolant::from_points(sampled.get_nodes().to_vec(), sampled.get_values().to_vec())
    }

    /// Builds interpolant directly from node and value vectors.
    pub fn from_points(nodes: Vec<f64>, values: Vec<f64>) -> Result<Self, Box<dyn Error>> {
        if nodes.is_empty() {
            return Err(Box::new(InterpolantError(
                "Interpolant must have at least 1 node".to_string(),
            )));
        }
        if nodes.len() != values.len() {
            return Err(Box::new(InterpolantError(format!(
                "got {} nodes and {} values",
                nodes.len(),
                values.len()
            ))));
        }

        let weights = barycentric_weights(&nodes)?;
        Ok(Interpolant { nodes, values, weights })
    }

    /// Evaluates interpolant with the second barycentric formula
    /// `p(x) = Σ w_j y_j / (x - x_j) / Σ w_j / (x - x_j)`.
    pub fn evaluate(&self, x: f64) -> f64 {
        let mut numerator = 0.0;
        let mut denominator = 0.0;

        for ((node, value), weight) in self.nodes.iter().zip(&self.values).zip(&self.weights) {
            let diff = x - node;
            if diff == 0.0 {
                return *value;
            }
            let term = weight / diff;
            numerator += term * value;
            denominator += term;
        }
        numerator / denominator
    }

    pub fn batch_evaluate(&self, x_vector: &[f64]) -> Vec<f64> {
        x_vector.iter().map(|x| self.evaluate(*x)).collect()
    }

    /// Converts interpolant into monomial coefficients by solving Vandermonde system.
    /// Vandermonde matrix is badly conditioned, so coefficients lose accuracy quickly for larger
    /// number of nodes or nodes far from zero.
    /// # Example
    /// ```
    /// use grid_interpolation::Interpolant;
    /// use assert_approx_eq::assert_approx_eq;
    ///
    /// let nodes = vec![-1.0, 0.0, 1.0];
    /// let interpolant = Interpolant::from_points(nodes, vec![2.0, 1.0, 2.0]).unwrap();
    /// let polynomial = interpolant.to_polynomial().unwrap();
    ///
    /// assert_approx_eq!(1.0, polynomial.get_coefficients()[0], 1e-12);
    /// assert_approx_eq!(0.0, polynomial.get_coefficients()[1], 1e-12);
    /// assert_approx_eq!(1.0, polynomial.get_coefficients()[2], 1e-12);
    /// ```
    pub fn to_polynomial(&self) -> Result<Polynomial, Box<dyn Error>> {
        let size = self.nodes.len();

        let matrix = DMatrix::<f64>::from_fn(size, size, |row, power| {
            self.nodes[row].powi(power as i32)
        });
        let rhs = DVector::<f64>::from_column_slice(&self.values);

        let solution = match matrix.lu().solve(&rhs) {
            Some(solution) => solution,
            None => {
                return Err(Box::new(InterpolantError(
                    "Error while solving Vandermonde system".to_string(),
                )))
            }
        };

        Ok(Polynomial::new(solution.iter().copied().collect()))
    }

    pub fn get_nodes(&self) -> &[f64] {
        &self.nodes
    }

    pub fn get_values(&self) -> &[f64] {
        &self.values
    }

    /// Barycentric weights scaled so the largest has magnitude 1.
    pub fn get_weights(&self) -> &[f64] {
        &self.weights
    }

    /// Maximal possible degree of interpolating polynomial, `n - 1`.
    pub fn degree_bound(&self) -> usize {
        self.nodes.len() - 1
    }
}

/// `w_j = 1 / Π_{k != j} (x_j - x_k)` divided by the largest `|w_j|`.
///
/// Products are accumulated as sign and log magnitude, so raw weights that would overflow or
/// underflow for very short or very long intervals still give finite scaled weights.
fn barycentric_weights(nodes: &[f64]) -> Result<Vec<f64>, Box<dyn Error>> {
    let mut signs = vec![1.0_f64; nodes.len()];
    let mut log_magnitudes = vec![0.0_f64; nodes.len()];

    let accumulators = signs.iter_mut().zip(log_magnitudes.iter_mut());
    for (j, (sign, log_magnitude)) in accumulators.enumerate() {
        for (k, node) in nodes.iter().enumerate() {
            if k == j {
                continue;
            }
            let diff = nodes[j] - node;
            if diff == 0.0 {
                return Err(Box::new(InterpolantError(format!(
                    "Nodes have equal x values: {}",
                    node
                ))));
            }
            if diff < 0.0 {
                *sign = -*sign;
            }
            *log_magnitude -= diff.abs().ln();
        }
    }

    let max_log_magnitude = log_magnitudes.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let weights = signs
        .iter()
        .zip(&log_magnitudes)
        .map(|(sign, log_magnitude)| sign * (log_magnitude - max_log_magnitude).exp())
        .collect();
    Ok(weights)
}

#[derive(Debug)]
struct InterpolantError(String);

impl Display for InterpolantError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in Interpolant: {}", self.0)
    }
}

impl Error for InterpolantError {}
