//! # normflow-core
//!
//! Shared building blocks for the normflow layers: the [`TensorError`] taxonomy and
//! [`Result`] alias, shape validation for batch-major activations, and finite-difference
//! gradient checking used to verify hand-written backward passes.

pub mod error;
pub mod numerical_gradient;
pub mod shape;

pub use error::{Result, TensorError};
pub use numerical_gradient::{
    check_gradients, GradientCheckConfig, GradientCheckResult, NumericalGradientChecker,
};
