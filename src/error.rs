use crate::result::{IntegrationResult, IntegrationRetCode};
use std::error::Error;
use std::fmt;

/// Hard failures of an integration request. Soft conditions such as an
/// exhausted refinement cap are reported through [`IntegrationRetCode`]
/// instead.
#[derive(Clone, Debug, PartialEq)]
pub enum IntegrationError {
    /// Bounds are not an ordered pair of finite numbers, or violate a domain
    /// restriction of the integrand.
    InvalidBounds {
        a: f64,
        b: f64,
        reason: &'static str,
    },
    /// Requested precision is not a positive finite number.
    BadTolerance { epsilon: f64 },
    /// The convergence pre-check judged the improper integral divergent.
    Divergent { point: f64 },
    /// A quadrature rule produced a non-finite estimate where the integrand
    /// was expected to be bounded.
    NumericInstability { a: f64, b: f64, partitions: usize },
    /// The improper path was requested but no singularity was located.
    NoSingularity { a: f64, b: f64 },
}

impl Error for IntegrationError {}

impl fmt::Display for IntegrationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            IntegrationError::InvalidBounds { a, b, reason } => {
                write!(f, "Invalid integration bounds [{}, {}]: {}", a, b, reason)
            }
            IntegrationError::BadTolerance { epsilon } => write!(
                f,
                "Invalid tolerance {:e}: precision must be positive and finite",
                epsilon
            ),
            IntegrationError::Divergent { point } => write!(
                f,
                "Integral does not exist: integrand diverges near x = {}",
                point
            ),
            IntegrationError::NumericInstability { a, b, partitions } => write!(
                f,
                "Non-finite estimate on [{}, {}] with {} partitions",
                a, b, partitions
            ),
            IntegrationError::NoSingularity { a, b } => write!(
                f,
                "No singularity found on [{}, {}]; integrate it as a proper integral",
                a, b
            ),
        }
    }
}

/// Turn a soft-coded result into a strict one: anything other than
/// [`IntegrationRetCode::Success`] becomes an error carrying the code.
pub fn handle_error<T>(
    result: IntegrationResult<T>,
) -> std::result::Result<(T, usize), IntegrationRetCode> {
    match result.code {
        IntegrationRetCode::Success => Ok((result.val, result.partitions)),
        code => Err(code),
    }
}
