use log::warn;

/// Codes for the outcome of a refinement
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntegrationRetCode {
    /// Successive estimates agreed within tolerance
    Success,
    /// Iteration cap reached before successive estimates agreed
    TooManyIters,
    /// The excluded margin around a singularity vanished below
    /// floating-point resolution before successive estimates agreed
    RoundOff,
}

/// Structure for the result of an integration
#[derive(Clone, Debug, PartialEq)]
pub struct IntegrationResult<T> {
    /// Value of the integration
    pub val: T,
    /// Partition count of the accepted estimate
    pub partitions: usize,
    /// Return code
    pub code: IntegrationRetCode,
}

impl<T> IntegrationResult<T> {
    pub(crate) fn new(val: T, partitions: usize) -> Self {
        IntegrationResult {
            val,
            partitions,
            code: IntegrationRetCode::Success,
        }
    }

    /// True if the estimate was accepted by the successive-difference test.
    pub fn converged(&self) -> bool {
        self.code == IntegrationRetCode::Success
    }

    pub(crate) fn issue_warning(&self, epsilon: f64) {
        match self.code {
            IntegrationRetCode::Success => {}
            IntegrationRetCode::TooManyIters => warn!(
                "Tolerance {:e} not reached; returning estimate with {} partitions",
                epsilon, self.partitions
            ),
            IntegrationRetCode::RoundOff => warn!(
                "Excluded margin collapsed onto the singularity before tolerance {:e} \
                was reached ({} partitions)",
                epsilon, self.partitions
            ),
        }
    }
}
