pub use crate::catalog::{ImproperIntegrand, Integrand, ProperIntegrand};
pub use crate::convergence::{check_convergence, check_domain, is_divergent, Side};
pub use crate::error::{handle_error, IntegrationError};
pub use crate::improper::{integrate_around, integrate_at, integrate_improper};
pub use crate::onesided::{
    refine_excluding, refine_excluding_left, refine_excluding_right, Boundary,
};
pub use crate::quad::{
    compute_improper, compute_proper, QuadratureIntegrator, QuadratureIntegratorBuilder,
};
pub use crate::refine::refine;
pub use crate::result::{IntegrationResult, IntegrationRetCode};
pub use crate::rules::QuadratureRule;
pub use crate::singularity::{checked_eval, locate, Singularity};
pub use crate::utils::is_singular_value;
