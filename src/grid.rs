use std::{error::Error, f64::consts::PI, fmt::Display};

use crate::interval::Interval;

/// Kind of interpolation grid.
/// - `Linear` - uniformly spaced nodes including both interval ends,
/// - `Chebyshev` - zeros of Chebyshev polynomial of the first kind mapped onto interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridKind {
    Linear,
    Chebyshev,
}

impl GridKind {
    pub fn label(&self) -> &'static str {
        match self {
            GridKind::Linear => "Linear Grid",
            GridKind::Chebyshev => "Chebyshev-Gauss Grid",
        }
    }
}

impl Display for GridKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Ordered interpolation nodes of one [GridKind].
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSet {
    kind: GridKind,
    nodes: Vec<f64>,
}

impl NodeSet {
    /// Creates node set of given kind with `n` nodes over `interval`.
    pub fn new(kind: GridKind, interval: &Interval, n: usize) -> Result<Self, Box<dyn Error>> {
        match kind {
            GridKind::Linear => NodeSet::linear(interval, n),
            GridKind::Chebyshev => NodeSet::chebyshev(interval, n),
        }
    }

    /// `n` uniformly spaced nodes from `a` to `b`.
    /// For `n = 1` the only node is the interval midpoint.
    /// # Example
    /// ```
    /// use grid_interpolation::{Interval, NodeSet};
    ///
    /// let interval = Interval::new(0.0, 1.0).unwrap();
    /// let nodes = NodeSet::linear(&interval, 5).unwrap();
    /// assert_eq!(nodes.get_nodes(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
    ///
    /// let single = NodeSet::linear(&interval, 1).unwrap();
    /// assert_eq!(single.get_nodes(), &[0.5]);
    /// ```
    pub fn linear(interval: &Interval, n: usize) -> Result<Self, Box<dyn Error>> {
        check_node_count(n)?;

        let nodes = if n == 1 {
            vec![interval.get_midpoint()]
        } else {
            uniform_points(interval, n)
        };
        Ok(NodeSet { kind: GridKind::Linear, nodes })
    }

    /// `n` zeros of degree `n` Chebyshev polynomial, `cos((2i - 1)π / 2n)` for `i = 1..n`,
    /// mapped onto `interval`. Nodes are in decreasing order.
    pub fn chebyshev(interval: &Interval, n: usize) -> Result<Self, Box<dyn Error>> {
        check_node_count(n)?;

        let pi_div_two_n = PI / (2 * n) as f64;
        let nodes = (1..=n)
            .map(|i| ((2 * i - 1) as f64 * pi_div_two_n).cos())
            .map(|xi| interval.map_from_reference(xi))
            .collect();
        Ok(NodeSet { kind: GridKind::Chebyshev, nodes })
    }

    pub fn get_kind(&self) -> GridKind {
        self.kind
    }

    pub fn get_nodes(&self) -> &[f64] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Node set together with function values at its nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledFunction {
    node_set: NodeSet,
    values: Vec<f64>,
}

impl SampledFunction {
    pub fn new<F: Fn(f64) -> f64>(node_set: NodeSet, f: F) -> Self {
        let values = node_set.nodes.iter().map(|x| f(*x)).collect();
        SampledFunction { node_set, values }
    }

    pub fn get_node_set(&self) -> &NodeSet {
        &self.node_set
    }

    pub fn get_nodes(&self) -> &[f64] {
        &self.node_set.nodes
    }

    pub fn get_values(&self) -> &[f64] {
        &self.values
    }
}

/// Evenly spaced evaluation points over `interval`, both ends included.
/// Requires `number_of_points >= 2`.
pub(crate) fn dense_test_grid(interval: &Interval, number_of_points: usize) -> Vec<f64> {
    uniform_points(interval, number_of_points)
}

fn uniform_points(interval: &Interval, number_of_points: usize) -> Vec<f64> {
    let a = interval.get_a();
    let b = interval.get_b();
    let last = number_of_points - 1;
    let step = (b - a) / last as f64;

    // last point set explicitly so rounding never moves it past b
    (0..number_of_points)
        .map(|i| if i == last { b } else { a + step * i as f64 })
        .collect()
}

fn check_node_count(n: usize) -> Result<(), Box<dyn Error>> {
    if n == 0 {
        return Err(Box::new(GridError("grid must have at least 1 node".to_string())));
    }
    Ok(())
}

#[derive(Debug)]
struct GridError(String);

impl Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in Grid: {}", self.0)
    }
}

impl Error for GridError {}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    fn symmetric_interval() -> Interval {
        Interval::new(-4.0, 4.0).unwrap()
    }

    #[test]
    fn linear_nodes() {
        let interval = Interval::new(1.0, 3.0).unwrap();
        let node_set = NodeSet::linear(&interval, 5).unwrap();

        assert_eq!(GridKind::Linear, node_set.get_kind());
        assert_eq!(&[1.0, 1.5, 2.0, 2.5, 3.0], node_set.get_nodes());
    }

    #[test]
    fn linear_single_node_is_midpoint() {
        let interval = Interval::new(-1.0, 7.0).unwrap();
        let node_set = NodeSet::linear(&interval, 1).unwrap();

        assert_eq!(&[3.0], node_set.get_nodes());
    }

    #[test]
    fn linear_two_nodes_are_endpoints() {
        let interval = Interval::new(-0.3, 0.7).unwrap();
        let node_set = NodeSet::linear(&interval, 2).unwrap();

        assert_eq!(&[-0.3, 0.7], node_set.get_nodes());
    }

    #[test]
    fn chebyshev_nodes() {
        let interval = Interval::new(2.0, 6.0).unwrap();
        let n = 5;
        let node_set = NodeSet::chebyshev(&interval, n).unwrap();

        assert_eq!(GridKind::Chebyshev, node_set.get_kind());
        for (index, node) in node_set.get_nodes().iter().enumerate() {
            let i = index + 1;
            let xi = ((2 * i - 1) as f64 * PI / (2 * n) as f64).cos();
            assert_approx_eq!(4.0 + 2.0 * xi, *node, 1e-13);
        }
    }

    #[test]
    fn chebyshev_nodes_are_decreasing() {
        let node_set = NodeSet::chebyshev(&symmetric_interval(), 9).unwrap();

        assert!(node_set.get_nodes().windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn chebyshev_single_node_is_midpoint() {
        let interval = Interval::new(-1.0, 7.0).unwrap();
        let node_set = NodeSet::chebyshev(&interval, 1).unwrap();

        assert_eq!(1, node_set.len());
        assert_approx_eq!(3.0, node_set.get_nodes()[0], 1e-12);
    }

    #[test]
    fn node_count_and_range() {
        let interval = Interval::new(-2.5, 1.25).unwrap();

        for n in 1..=30 {
            for kind in [GridKind::Linear, GridKind::Chebyshev] {
                let node_set = NodeSet::new(kind, &interval, n).unwrap();
                assert_eq!(n, node_set.len());
                assert!(node_set.get_nodes().iter().all(|x| interval.contains(*x)));
            }
        }
    }

    #[test]
    fn chebyshev_nodes_are_interior() {
        let interval = Interval::new(-1.0, 1.0).unwrap();

        for n in 1..=30 {
            let node_set = NodeSet::chebyshev(&interval, n).unwrap();
            assert!(node_set.get_nodes().iter().all(|x| -1.0 < *x && *x < 1.0));
        }
    }

    #[test]
    fn symmetric_nodes() {
        let n = 13;

        for kind in [GridKind::Linear, GridKind::Chebyshev] {
            let node_set = NodeSet::new(kind, &symmetric_interval(), n).unwrap();
            let nodes = node_set.get_nodes();
            for i in 0..n {
                assert_approx_eq!(nodes[i], -nodes[n - 1 - i], 1e-12);
            }
        }
    }

    #[test]
    fn zero_nodes_error() {
        assert!(NodeSet::linear(&symmetric_interval(), 0).is_err());
        assert!(NodeSet::chebyshev(&symmetric_interval(), 0).is_err());
    }

    #[test]
    fn sampled_function_values() {
        let interval = Interval::new(0.0, 2.0).unwrap();
        let node_set = NodeSet::linear(&interval, 3).unwrap();
        let sampled = SampledFunction::new(node_set, |x| x * x);

        assert_eq!(&[0.0, 1.0, 2.0], sampled.get_nodes());
        assert_eq!(&[0.0, 1.0, 4.0], sampled.get_values());
        assert_eq!(GridKind::Linear, sampled.get_node_set().get_kind());
    }

    #[test]
    fn dense_test_grid_covers_interval() {
        let interval = Interval::new(-4.0, 4.0).unwrap();
        let points = dense_test_grid(&interval, 1000);

        assert_eq!(1000, points.len());
        assert_eq!(-4.0, points[0]);
        assert_eq!(4.0, points[999]);
        assert!(points.windows(2).all(|w| w[1] > w[0]));
        assert_approx_eq!(8.0 / 999.0, points[1] - points[0], 1e-12);
    }

    #[test]
    fn grid_kind_label() {
        assert_eq!("Linear Grid", GridKind::Linear.to_string());
        assert_eq!("Chebyshev-Gauss Grid", GridKind::Chebyshev.to_string());
    }
}
