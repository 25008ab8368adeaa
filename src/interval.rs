use std::{error::Error, fmt::Display};

/// Closed interval `[a, b]` over which a function is interpolated. Lower bound must be
/// strictly smaller than upper bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    a: f64,
    b: f64,
}

impl Interval {
    /// Creates new [Interval] from its bounds.
    /// # Example
    /// ```
    /// use grid_interpolation::Interval;
    ///
    /// let interval = Interval::new(-4.0, 4.0).unwrap();
    /// assert_eq!(interval.get_midpoint(), 0.0);
    /// assert_eq!(interval.get_half_length(), 4.0);
    /// ```
    /// # Errors
    /// [DomainError] is returned when `b` is not greater than `a`, when a bound is NaN or infinite
    /// or when `b - a` overflows.
    /// ```
    /// use grid_interpolation::{DomainError, Interval};
    ///
    /// let interval = Interval::new(4.0, -4.0);
    /// assert!(interval.unwrap_err().downcast_ref::<DomainError>().is_some());
    /// ```
    pub fn new(a: f64, b: f64) -> Result<Self, Box<dyn Error>> {
        if !a.is_finite() || !b.is_finite() || !(b - a).is_finite() {
            return Err(Box::new(DomainError(format!(
                "bounds and length must be finite, got [{}, {}]",
                a, b
            ))));
        }
        if !(a < b) {
            return Err(Box::new(DomainError(format!(
                "upper bound {} must be greater than lower bound {}",
                b, a
            ))));
        }
        Ok(Interval { a, b })
    }

    pub fn get_a(&self) -> f64 {
        self.a
    }

    pub fn get_b(&self) -> f64 {
        self.b
    }

    pub fn get_midpoint(&self) -> f64 {
        (self.a + self.b) / 2.0
    }

    pub fn get_half_length(&self) -> f64 {
        (self.b - self.a) / 2.0
    }

    pub fn contains(&self, x: f64) -> bool {
        self.a <= x && x <= self.b
    }

    /// Maps point `xi` of reference interval [-1, 1] onto this interval.
    pub fn map_from_reference(&self, xi: f64) -> f64 {
        self.get_midpoint() + self.get_half_length() * xi
    }
}

/// Interval bounds are empty, inverted, infinite or not numbers.
#[derive(Debug)]
pub struct DomainError(String);

impl Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in Domain: {}", self.0)
    }
}

impl Error for DomainError {}
