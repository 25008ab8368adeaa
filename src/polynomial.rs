/// Polynomial in monomial basis, `coefficients[i]` multiplies `x^i`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {

    pub fn new(coefficients: Vec<f64>) -> Self {
        Polynomial { coefficients }
    }

    /// Evaluates polynomial with Horner's scheme.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |result, coefficient| result * x + coefficient)
    }

    pub fn get_coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Number of coefficients minus one, trailing zeros are not trimmed.
    pub fn degree_bound(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }
}
