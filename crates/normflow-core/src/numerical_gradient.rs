//! Numerical Gradient Validation Utilities
//!
//! Tools for validating hand-derived backward passes by comparing analytical gradients
//! against finite-difference estimates of a scalar loss.
//!
//! # Overview
//!
//! ```text
//! dL/dx_i ≈ [L(x + ε·e_i) - L(x - ε·e_i)] / (2ε)
//! ```
//!
//! A layer's backward pass is usually checked by choosing a loss such as
//! `L(x) = sum(fprop(x) * R)` for a fixed random `R`, so that `dL/dy = R` can be fed
//! straight into `bprop`.
//!
//! # Example
//!
//! ```rust
//! use ndarray::array;
//! use normflow_core::numerical_gradient::{check_gradients, GradientCheckConfig};
//!
//! // L(x) = sum(x^2), dL/dx = 2x
//! let x = array![1.0_f64, -2.0, 3.0];
//! let result = check_gradients(
//!     &x,
//!     |x| Ok(x.mapv(|v| v * v).sum()),
//!     |x| Ok(x.mapv(|v| 2.0 * v)),
//!     &GradientCheckConfig::default(),
//! )
//! .unwrap();
//! assert!(result.passed, "{}", result.summary());
//! ```

use crate::{Result, TensorError};
use ndarray::{Array, Dimension};
use num_traits::{Float, FromPrimitive};
use std::marker::PhantomData;

/// Configuration for numerical gradient checking
#[derive(Debug, Clone)]
pub struct GradientCheckConfig {
    /// Epsilon for finite difference computation
    pub epsilon: f64,
    /// Relative tolerance for gradient comparison
    pub rtol: f64,
    /// Absolute tolerance for gradient comparison
    pub atol: f64,
    /// Record indices of failing elements
    pub check_elementwise: bool,
    /// Use central differences (more accurate but 2x slower)
    pub use_central_difference: bool,
}

impl Default for GradientCheckConfig {
    fn default() -> Self {
        Self {
            epsilon: 1e-5,
            rtol: 1e-3,
            atol: 1e-5,
            check_elementwise: false,
            use_central_difference: true,
        }
    }
}

impl GradientCheckConfig {
    /// Create a configuration for strict checking (tighter tolerances)
    pub fn strict() -> Self {
        Self {
            epsilon: 1e-6,
            rtol: 1e-4,
            atol: 1e-6,
            check_elementwise: true,
            use_central_difference: true,
        }
    }

    /// Create a configuration for relaxed checking (looser tolerances)
    pub fn relaxed() -> Self {
        Self {
            epsilon: 1e-4,
            rtol: 1e-2,
            atol: 1e-4,
            check_elementwise: false,
            use_central_difference: true,
        }
    }
}

/// Result of gradient checking
#[derive(Debug, Clone)]
pub struct GradientCheckResult {
    /// Whether the gradient check passed
    pub passed: bool,
    /// Maximum relative error found
    pub max_relative_error: f64,
    /// Maximum absolute error found
    pub max_absolute_error: f64,
    /// Number of elements checked
    pub num_elements_checked: usize,
    /// Number of elements that failed tolerance check
    pub num_failures: usize,
    /// Flat indices of failed elements (if check_elementwise is true)
    pub failed_indices: Vec<usize>,
    /// Detailed error message if check failed
    pub error_message: Option<String>,
}

impl GradientCheckResult {
    pub fn is_ok(&self) -> bool {
        self.passed
    }

    /// Percentage of elements that failed
    pub fn failure_rate(&self) -> f64 {
        if self.num_elements_checked == 0 {
            0.0
        } else {
            (self.num_failures as f64 / self.num_elements_checked as f64) * 100.0
        }
    }

    /// Generate a summary report
    pub fn summary(&self) -> String {
        if self.passed {
            format!(
                "Gradient check passed\n\
                 Elements checked: {}\n\
                 Max relative error: {:.2e}\n\
                 Max absolute error: {:.2e}",
                self.num_elements_checked, self.max_relative_error, self.max_absolute_error
            )
        } else {
            format!(
                "Gradient check FAILED\n\
                 Elements checked: {}\n\
                 Failures: {} ({:.2}%)\n\
                 Max relative error: {:.2e}\n\
                 Max absolute error: {:.2e}\n\
                 {}",
                self.num_elements_checked,
                self.num_failures,
                self.failure_rate(),
                self.max_relative_error,
                self.max_absolute_error,
                self.error_message.as_deref().unwrap_or("")
            )
        }
    }
}

/// Finite-difference gradient checker for scalar losses
pub struct NumericalGradientChecker<T> {
    config: GradientCheckConfig,
    _phantom: PhantomData<T>,
}

impl<T> NumericalGradientChecker<T>
where
    T: Float + FromPrimitive,
{
    pub fn new(config: GradientCheckConfig) -> Self {
        Self {
            config,
            _phantom: PhantomData,
        }
    }

    pub fn config(&self) -> &GradientCheckConfig {
        &self.config
    }

    /// Estimate `dL/dinput` by perturbing one element at a time
    pub fn compute_numerical_gradient<D, F>(&self, input: &Array<T, D>, loss: F) -> Result<Array<T, D>>
    where
        D: Dimension,
        F: Fn(&Array<T, D>) -> Result<T>,
    {
        let epsilon = T::from_f64(self.config.epsilon).ok_or_else(|| {
            TensorError::invalid_argument("numerical_gradient", "failed to convert epsilon")
        })?;

        let mut perturbed = input.as_standard_layout().into_owned();
        let baseline = if self.config.use_central_difference {
            None
        } else {
            Some(loss(&perturbed)?)
        };

        let mut gradient = Vec::with_capacity(perturbed.len());
        for i in 0..perturbed.len() {
            let original = flat_mut(&mut perturbed)?[i];

            flat_mut(&mut perturbed)?[i] = original + epsilon;
            let f_plus = loss(&perturbed)?;

            let grad = match baseline {
                // Forward difference: [L(x + ε) - L(x)] / ε
                Some(f_x) => (f_plus - f_x) / epsilon,
                // Central difference: [L(x + ε) - L(x - ε)] / (2ε)
                None => {
                    flat_mut(&mut perturbed)?[i] = original - epsilon;
                    let f_minus = loss(&perturbed)?;
                    (f_plus - f_minus) / (epsilon + epsilon)
                }
            };

            flat_mut(&mut perturbed)?[i] = original;
            gradient.push(grad);
        }

        Ok(Array::from_shape_vec(perturbed.raw_dim(), gradient)?)
    }

    /// Compare analytical and numerical gradients
    pub fn compare_gradients<D>(
        &self,
        numerical: &Array<T, D>,
        analytical: &Array<T, D>,
    ) -> Result<GradientCheckResult>
    where
        D: Dimension,
    {
        if numerical.shape() != analytical.shape() {
            return Err(TensorError::shape_mismatch(
                "compare_gradients",
                &format!("{:?}", numerical.shape()),
                &format!("{:?}", analytical.shape()),
            ));
        }

        let rtol = self.config.rtol;
        let atol = self.config.atol;

        let mut max_rel_error: f64 = 0.0;
        let mut max_abs_error: f64 = 0.0;
        let mut num_failures = 0;
        let mut failed_indices = Vec::new();

        for (i, (num, ana)) in numerical.iter().zip(analytical.iter()).enumerate() {
            let num_val = num.to_f64().unwrap_or(f64::NAN);
            let ana_val = ana.to_f64().unwrap_or(f64::NAN);

            let abs_error = (num_val - ana_val).abs();
            let rel_error = if ana_val.abs() > 1e-10 {
                abs_error / ana_val.abs()
            } else {
                abs_error
            };

            max_rel_error = max_rel_error.max(rel_error);
            max_abs_error = max_abs_error.max(abs_error);

            // NaN never satisfies a tolerance
            if !(rel_error <= rtol || abs_error <= atol) {
                num_failures += 1;
                if self.config.check_elementwise {
                    failed_indices.push(i);
                }
            }
        }

        let passed = num_failures == 0;
        let error_message = if !passed {
            Some(format!(
                "Gradient mismatch: {} of {} elements exceed tolerance (rtol={}, atol={})",
                num_failures,
                numerical.len(),
                rtol,
                atol
            ))
        } else {
            None
        };

        Ok(GradientCheckResult {
            passed,
            max_relative_error: max_rel_error,
            max_absolute_error: max_abs_error,
            num_elements_checked: numerical.len(),
            num_failures,
            failed_indices,
            error_message,
        })
    }

    /// Full gradient check: compute numerical gradient and compare
    pub fn check<D, F, G>(&self, input: &Array<T, D>, loss: F, gradient: G) -> Result<GradientCheckResult>
    where
        D: Dimension,
        F: Fn(&Array<T, D>) -> Result<T>,
        G: Fn(&Array<T, D>) -> Result<Array<T, D>>,
    {
        let numerical_grad = self.compute_numerical_gradient(input, loss)?;
        let analytical_grad = gradient(input)?;

        self.compare_gradients(&numerical_grad, &analytical_grad)
    }
}

fn flat_mut<T, D: Dimension>(array: &mut Array<T, D>) -> Result<&mut [T]> {
    array.as_slice_mut().ok_or_else(|| {
        TensorError::invalid_argument("numerical_gradient", "array is not contiguous")
    })
}

/// Convenience function for quick gradient checking
pub fn check_gradients<T, D, F, G>(
    input: &Array<T, D>,
    loss: F,
    gradient: G,
    config: &GradientCheckConfig,
) -> Result<GradientCheckResult>
where
    T: Float + FromPrimitive,
    D: Dimension,
    F: Fn(&Array<T, D>) -> Result<T>,
    G: Fn(&Array<T, D>) -> Result<Array<T, D>>,
{
    let checker = NumericalGradientChecker::new(config.clone());
    checker.check(input, loss, gradient)
}
