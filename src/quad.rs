use crate::catalog::{ImproperIntegrand, Integrand, ProperIntegrand};
use crate::convergence::{check_convergence, check_domain};
use crate::error::IntegrationError;
use crate::improper::{integrate_at, integrate_improper};
use crate::refine::{check_bounds, check_tolerance, refine};
use crate::result::IntegrationResult;
use crate::rules::QuadratureRule;
use crate::utils::cast;
use num::Float;

#[derive(Clone, Debug)]
/// One-dimensional step-doubling integrator.
pub struct QuadratureIntegrator<T: Float> {
    /// Acceptance threshold for successive estimates.
    pub epsilon: T,
    /// Maximum number of partition doublings on the proper path.
    pub max_iter: usize,
    /// Rule producing each estimate.
    pub rule: QuadratureRule,
    /// Run the divergence pre-check before the improper path.
    pub precheck: bool,
}

impl<T: Float> QuadratureIntegrator<T> {
    /// Integrate a function `f`, bounded on `[a, b]`, returning the accepted
    /// estimate and its partition count.
    ///
    /// # Examples
    ///
    /// ```
    /// use stepwise_quadrature::prelude::*;
    /// let integrator = QuadratureIntegratorBuilder::default()
    ///     .epsilon(1e-8)
    ///     .rule(QuadratureRule::Simpson)
    ///     .build();
    /// let res = integrator.integrate(|x: f64| x * x, 0.0, 1.0).unwrap();
    /// assert!((res.val - 1.0 / 3.0).abs() < 1e-8);
    /// ```
    pub fn integrate<F>(&self, f: F, a: T, b: T) -> Result<IntegrationResult<T>, IntegrationError>
    where
        F: Fn(T) -> T,
    {
        refine(f, a, b, self.rule, self.epsilon, self.max_iter)
    }

    /// Integrate a function `f` with one singularity on `[a, b]`.
    ///
    /// With the pre-check enabled, integrals judged divergent are rejected
    /// with [`IntegrationError::Divergent`] before any refinement runs.
    ///
    /// # Examples
    ///
    /// ```
    /// use stepwise_quadrature::prelude::*;
    /// let integrator = QuadratureIntegratorBuilder::default().epsilon(1e-5).build();
    /// let res = integrator.integrate_improper(|x: f64| x.sqrt().recip(), 0.0, 1.0).unwrap();
    /// assert!((res.val - 2.0).abs() < 1e-3);
    ///
    /// let err = integrator.integrate_improper(|x: f64| x.recip(), 0.0, 1.0).unwrap_err();
    /// assert_eq!(err, IntegrationError::Divergent { point: 0.0 });
    /// ```
    pub fn integrate_improper<F>(
        &self,
        f: F,
        a: T,
        b: T,
    ) -> Result<IntegrationResult<T>, IntegrationError>
    where
        F: Fn(T) -> T,
    {
        if !self.precheck {
            return integrate_improper(f, a, b, self.rule, self.epsilon);
        }
        check_bounds(a, b)?;
        check_tolerance(self.epsilon)?;

        let singularity = check_convergence(&f, a, b)?;
        integrate_at(f, a, b, singularity, self.rule, self.epsilon)
    }
}

/// Builder struct used to construct an integrator with wanted parameters.
pub struct QuadratureIntegratorBuilder<T: Float> {
    /// Acceptance threshold for successive estimates.
    epsilon: Option<T>,
    /// Maximum number of partition doublings.
    max_iter: Option<usize>,
    /// Quadrature rule.
    rule: Option<QuadratureRule>,
    /// Whether to run the divergence pre-check.
    precheck: Option<bool>,
}

impl<T: Float> Default for QuadratureIntegratorBuilder<T> {
    fn default() -> Self {
        QuadratureIntegratorBuilder {
            epsilon: None,
            max_iter: None,
            rule: None,
            precheck: None,
        }
    }
}

impl<T: Float> QuadratureIntegratorBuilder<T> {
    /// Set the acceptance threshold.
    pub fn epsilon(mut self, epsilon: T) -> Self {
        self.epsilon = Some(epsilon);
        self
    }
    /// Set the maximum number of partition doublings.
    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = Some(max_iter);
        self
    }
    /// Set the quadrature rule.
    pub fn rule(mut self, rule: QuadratureRule) -> Self {
        self.rule = Some(rule);
        self
    }
    /// Enable or disable the divergence pre-check.
    pub fn precheck(mut self, precheck: bool) -> Self {
        self.precheck = Some(precheck);
        self
    }
    /// Build the integrator.
    pub fn build(self) -> QuadratureIntegrator<T> {
        QuadratureIntegrator {
            epsilon: self.epsilon.unwrap_or_else(|| cast(1e-6)),
            max_iter: self.max_iter.unwrap_or(20),
            rule: self.rule.unwrap_or(QuadratureRule::Simpson),
            precheck: self.precheck.unwrap_or(true),
        }
    }
}

/// Integrate a catalog integrand over `[a, b]` with `rule`.
pub fn compute_proper(
    function: ProperIntegrand,
    a: f64,
    b: f64,
    epsilon: f64,
    rule: QuadratureRule,
) -> Result<IntegrationResult<f64>, IntegrationError> {
    QuadratureIntegratorBuilder::default()
        .epsilon(epsilon)
        .rule(rule)
        .build()
        .integrate(|x| function.evaluate(x), a, b)
}

/// Integrate a singular catalog integrand over `[a, b]` with `rule`.
///
/// Bounds on the wrong side of the declared singular point are rejected
/// with [`IntegrationError::InvalidBounds`]; integrals the pre-check judges
/// divergent with [`IntegrationError::Divergent`].
pub fn compute_improper(
    function: ImproperIntegrand,
    a: f64,
    b: f64,
    epsilon: f64,
    rule: QuadratureRule,
) -> Result<IntegrationResult<f64>, IntegrationError> {
    check_bounds(a, b)?;
    check_domain(function.singular_point(), function.admissible_side(), a, b)?;

    QuadratureIntegratorBuilder::default()
        .epsilon(epsilon)
        .rule(rule)
        .precheck(true)
        .build()
        .integrate_improper(|x| function.evaluate(x), a, b)
}
