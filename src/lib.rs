pub mod catalog;
pub mod convergence;
pub mod error;
pub mod improper;
pub mod onesided;
pub mod prelude;
pub mod quad;
pub mod refine;
pub mod result;
pub mod rules;
pub mod singularity;
#[cfg(test)]
pub(crate) mod test_utils;
pub(crate) mod utils;
