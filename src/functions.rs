use std::{error::Error, fmt::Display, str::FromStr};

/// Menu of functions offered for interpolation. Each variant ranges from discontinuous
/// (`Sign`) to analytic (`Runge`, `Gaussian`, `Quintic`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SampleFunction {
    Sign,
    Abs,
    AbsCubed,
    #[default]
    Runge,
    Gaussian,
    Quintic,
}

impl SampleFunction {
    /// All functions in menu order.
    pub fn all() -> [SampleFunction; 6] {
        [
            SampleFunction::Sign,
            SampleFunction::Abs,
            SampleFunction::AbsCubed,
            SampleFunction::Runge,
            SampleFunction::Gaussian,
            SampleFunction::Quintic,
        ]
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            SampleFunction::Sign => sign(x),
            SampleFunction::Abs => x.abs(),
            SampleFunction::AbsCubed => x.abs().powi(3),
            SampleFunction::Runge => 1.0 / (1.0 + x * x),
            SampleFunction::Gaussian => (-x * x).exp(),
            SampleFunction::Quintic => 0.001 * x.powi(5) + 0.02 * x.powi(3) - x,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SampleFunction::Sign => "sign(x)",
            SampleFunction::Abs => "abs(x)",
            SampleFunction::AbsCubed => "abs(x)^3",
            SampleFunction::Runge => "1/(1+x^2)",
            SampleFunction::Gaussian => "exp(-x^2)",
            SampleFunction::Quintic => "0.001*x^5 + 0.02*x^3 - x",
        }
    }
}

impl Display for SampleFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for SampleFunction {
    type Err = Box<dyn Error>;

    /// Parses function from its menu label.
    /// # Example
    /// ```
    /// use grid_interpolation::SampleFunction;
    ///
    /// let function: SampleFunction = "exp(-x^2)".parse().unwrap();
    /// assert_eq!(SampleFunction::Gaussian, function);
    /// assert!("tan(x)".parse::<SampleFunction>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SampleFunction::all()
            .into_iter()
            .find(|function| function.label() == s.trim())
            .ok_or_else(|| -> Box<dyn Error> {
                Box::new(FunctionError(format!("unknown function {}", s)))
            })
    }
}

/// Sign of `x` with `sign(0) = 0`, unlike [f64::signum].
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[derive(Debug)]
struct FunctionError(String);

impl Display for FunctionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in SampleFunction: {}", self.0)
    }
}

impl Error for FunctionError {}
