//! Batch Normalization layer implementation
//!
//! Batch Normalization normalizes each feature by subtracting the batch mean and dividing
//! by the batch standard deviation, then applies a learned scale (`gamma`) and shift
//! (`beta`):
//!
//! ```text
//! uhat = (x - mean(x)) / sqrt(var(x) + epsilon)
//! y    = gamma * uhat + beta
//! ```
//!
//! Statistics are computed over axis 0 (the batch) with population variance.

use crate::layers::{Layer, LayerWithParameters};
use ndarray::{Array1, Array2, Axis, ScalarOperand};
use normflow_core::shape::{
    validate_batch_features, validate_elementwise_shapes, validate_vector_len,
};
use normflow_core::{Result, TensorError};
use num_traits::{Float, FromPrimitive};
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// Added to the batch variance before taking the square root
pub const DEFAULT_EPSILON: f64 = 1e-8;

/// Construction parameters for [`BatchNorm`]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct BatchNormConfig {
    /// Numerical-stability term added to the variance
    pub epsilon: f64,
    /// Initial value of every scale entry
    pub gamma_init: f64,
    /// Initial value of every shift entry
    pub beta_init: f64,
}

impl Default for BatchNormConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            gamma_init: 1.0,
            beta_init: 0.0,
        }
    }
}

impl BatchNormConfig {
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_gamma_init(mut self, gamma_init: f64) -> Self {
        self.gamma_init = gamma_init;
        self
    }

    pub fn with_beta_init(mut self, beta_init: f64) -> Self {
        self.beta_init = beta_init;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(TensorError::invalid_configuration(
                "BatchNorm",
                &format!("epsilon must be positive and finite, got {}", self.epsilon),
            ));
        }
        if !self.gamma_init.is_finite() || !self.beta_init.is_finite() {
            return Err(TensorError::invalid_configuration(
                "BatchNorm",
                "initial gamma and beta must be finite",
            ));
        }
        Ok(())
    }
}

/// Values cached by a forward pass for the matching backward pass
#[derive(Debug, Clone)]
pub struct BatchNormContext<T> {
    std: Array1<T>,
    diff: Array2<T>,
    normalized: Array2<T>,
}

impl<T> BatchNormContext<T> {
    /// Per-feature `sqrt(var + epsilon)`
    pub fn std(&self) -> &Array1<T> {
        &self.std
    }

    /// Inputs minus the per-feature batch mean
    pub fn diff(&self) -> &Array2<T> {
        &self.diff
    }

    /// Zero-mean, unit-variance activations before scale and shift
    pub fn normalized(&self) -> &Array2<T> {
        &self.normalized
    }

    pub fn batch_size(&self) -> usize {
        self.diff.nrows()
    }

    fn ensure_matches(&self, operation: &str, inputs: &Array2<T>) -> Result<()> {
        if self.diff.shape() != inputs.shape() {
            return Err(TensorError::context_mismatch(
                operation,
                &format!(
                    "context was produced for a batch of shape {:?}, inputs have shape {:?}",
                    self.diff.shape(),
                    inputs.shape()
                ),
            ));
        }
        Ok(())
    }
}

/// Batch normalization over the features of 2D `(batch_size, input_dim)` activations
#[derive(Debug, Clone)]
pub struct BatchNorm<T> {
    input_dim: usize,
    output_dim: usize,
    gamma: Array1<T>,
    beta: Array1<T>,
    epsilon: T,
}

impl<T> BatchNorm<T>
where
    T: Float + FromPrimitive + ScalarOperand,
{
    /// Create a layer with `gamma = 1`, `beta = 0` and the default epsilon.
    ///
    /// Batch normalization cannot change dimensionality, so `output_dim` must equal
    /// `input_dim`.
    pub fn new(input_dim: usize, output_dim: usize) -> Result<Self> {
        Self::from_config(input_dim, output_dim, &BatchNormConfig::default())
    }

    pub fn from_config(input_dim: usize, output_dim: usize, config: &BatchNormConfig) -> Result<Self> {
        validate_dims(input_dim, output_dim)?;
        config.validate()?;

        let gamma_init = convert::<T>(config.gamma_init, "gamma_init")?;
        let beta_init = convert::<T>(config.beta_init, "beta_init")?;
        let epsilon = convert::<T>(config.epsilon, "epsilon")?;

        log::debug!(
            "Creating BatchNorm(input_dim={input_dim}, output_dim={output_dim}, epsilon={})",
            config.epsilon
        );

        Ok(Self {
            input_dim,
            output_dim,
            gamma: Array1::from_elem(input_dim, gamma_init),
            beta: Array1::from_elem(input_dim, beta_init),
            epsilon,
        })
    }

    /// Create a layer from explicit scale and shift vectors
    pub fn with_parameters(gamma: Array1<T>, beta: Array1<T>) -> Result<Self> {
        let input_dim = gamma.len();
        validate_dims(input_dim, input_dim)?;
        validate_vector_len("BatchNorm::with_parameters", "beta", beta.len(), input_dim)?;
        if !gamma.iter().chain(beta.iter()).all(|v| v.is_finite()) {
            return Err(TensorError::invalid_configuration(
                "BatchNorm",
                "initial gamma and beta must be finite",
            ));
        }
        let epsilon = convert::<T>(DEFAULT_EPSILON, "epsilon")?;

        Ok(Self {
            input_dim,
            output_dim: input_dim,
            gamma,
            beta,
            epsilon,
        })
    }

    /// Set the epsilon value for numerical stability
    pub fn with_epsilon(mut self, epsilon: T) -> Result<Self> {
        if !epsilon.is_finite() || epsilon <= T::zero() {
            return Err(TensorError::invalid_configuration(
                "BatchNorm",
                "epsilon must be positive and finite",
            ));
        }
        self.epsilon = epsilon;
        Ok(self)
    }

    pub fn epsilon(&self) -> T {
        self.epsilon
    }

    pub fn gamma(&self) -> &Array1<T> {
        &self.gamma
    }

    pub fn beta(&self) -> &Array1<T> {
        &self.beta
    }

    fn validate_grads(
        &self,
        operation: &str,
        context: &BatchNormContext<T>,
        inputs: &Array2<T>,
        grads_wrt_outputs: &Array2<T>,
    ) -> Result<()> {
        validate_batch_features(operation, inputs.shape(), self.input_dim)?;
        validate_elementwise_shapes(operation, inputs.shape(), grads_wrt_outputs.shape())?;
        context.ensure_matches(operation, inputs)
    }
}

impl<T> Layer<T> for BatchNorm<T>
where
    T: Float + FromPrimitive + ScalarOperand,
{
    type Context = BatchNormContext<T>;

    fn input_dim(&self) -> usize {
        self.input_dim
    }

    fn output_dim(&self) -> usize {
        self.output_dim
    }

    fn fprop(&self, inputs: &Array2<T>) -> Result<(Array2<T>, BatchNormContext<T>)> {
        validate_batch_features("BatchNorm::fprop", inputs.shape(), self.input_dim)?;
        log::trace!("BatchNorm::fprop on batch of shape {:?}", inputs.shape());

        let mean = inputs.mean_axis(Axis(0)).ok_or_else(|| {
            TensorError::invalid_shape("BatchNorm::fprop", "empty batch", inputs.shape())
        })?;
        let variance = inputs.var_axis(Axis(0), T::zero());
        let std = (variance + self.epsilon).mapv(T::sqrt);

        let diff = inputs - &mean;
        let normalized = &diff / &std;
        let outputs = &(&normalized * &self.gamma) + &self.beta;

        Ok((
            outputs,
            BatchNormContext {
                std,
                diff,
                normalized,
            },
        ))
    }

    fn bprop(
        &self,
        context: &BatchNormContext<T>,
        inputs: &Array2<T>,
        outputs: &Array2<T>,
        grads_wrt_outputs: &Array2<T>,
    ) -> Result<Array2<T>> {
        let operation = "BatchNorm::bprop";
        validate_elementwise_shapes(operation, outputs.shape(), grads_wrt_outputs.shape())?;
        self.validate_grads(operation, context, inputs, grads_wrt_outputs)?;
        log::trace!("BatchNorm::bprop on batch of shape {:?}", inputs.shape());

        let batch_size = convert::<T>(context.batch_size() as f64, "batch_size")?;
        let half = convert::<T>(0.5, "0.5")?;
        let two = convert::<T>(2.0, "2.0")?;

        let duhat = grads_wrt_outputs * &self.gamma;
        let variance = context.std.mapv(|s| s * s);

        let dvar = &(&duhat * &context.normalized).sum_axis(Axis(0)) / &variance * (-half);
        let dmu = (&duhat.sum_axis(Axis(0)) / &context.std).mapv(|v| -v);

        // The variance path's contribution to dmu is scaled by sum(diff), which is zero
        let direct = &duhat / &context.std;
        let through_var = &context.diff * &(dvar * (two / batch_size));
        let through_mean = dmu / batch_size;

        Ok(&(&direct + &through_var) + &through_mean)
    }
}

impl<T> LayerWithParameters<T> for BatchNorm<T>
where
    T: Float + FromPrimitive + ScalarOperand,
{
    /// Returns `[grads_wrt_gamma, grads_wrt_beta]`
    fn grads_wrt_params(
        &self,
        context: &BatchNormContext<T>,
        inputs: &Array2<T>,
        grads_wrt_outputs: &Array2<T>,
    ) -> Result<Vec<Array1<T>>> {
        self.validate_grads("BatchNorm::grads_wrt_params", context, inputs, grads_wrt_outputs)?;

        let grads_wrt_gamma = (grads_wrt_outputs * &context.normalized).sum_axis(Axis(0));
        let grads_wrt_beta = grads_wrt_outputs.sum_axis(Axis(0));
        Ok(vec![grads_wrt_gamma, grads_wrt_beta])
    }

    fn params_penalty(&self) -> T {
        T::zero()
    }

    /// Returns `[gamma, beta]`
    fn get_parameters(&self) -> Vec<&Array1<T>> {
        vec![&self.gamma, &self.beta]
    }

    fn set_parameters(&mut self, values: &[Array1<T>]) -> Result<()> {
        let operation = "BatchNorm::set_parameters";
        let [gamma, beta] = values else {
            return Err(TensorError::invalid_argument(
                operation,
                &format!("expected [gamma, beta], got {} arrays", values.len()),
            ));
        };
        validate_vector_len(operation, "gamma", gamma.len(), self.input_dim)?;
        validate_vector_len(operation, "beta", beta.len(), self.input_dim)?;

        log::debug!("Replacing BatchNorm parameters (input_dim={})", self.input_dim);
        self.gamma = gamma.clone();
        self.beta = beta.clone();
        Ok(())
    }
}

impl<T> fmt::Display for BatchNorm<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BatchNormLayer(input_dim={}, output_dim={})",
            self.input_dim, self.output_dim
        )
    }
}

fn validate_dims(input_dim: usize, output_dim: usize) -> Result<()> {
    if input_dim == 0 {
        return Err(TensorError::invalid_configuration(
            "BatchNorm",
            "input_dim must be positive",
        ));
    }
    if output_dim != input_dim {
        return Err(TensorError::invalid_configuration(
            "BatchNorm",
            &format!(
                "batch normalization preserves dimensionality: output_dim ({output_dim}) must equal input_dim ({input_dim})"
            ),
        ));
    }
    Ok(())
}

fn convert<T: FromPrimitive>(value: f64, name: &str) -> Result<T> {
    T::from_f64(value).ok_or_else(|| {
        TensorError::invalid_argument("BatchNorm", &format!("cannot represent {name} = {value}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    fn sample_batch() -> Array2<f64> {
        array![
            [1.0, 2.0, -3.0],
            [2.0, 4.0, 0.5],
            [3.0, 6.0, 1.5],
            [4.0, 9.0, 2.0]
        ]
    }

    #[test]
    fn test_batch_norm_creation() {
        let batch_norm = BatchNorm::<f64>::new(64, 64).unwrap();
        assert_eq!(batch_norm.input_dim(), 64);
        assert_eq!(batch_norm.output_dim(), 64);
        assert_eq!(batch_norm.gamma(), &Array1::<f64>::ones(64));
        assert_eq!(batch_norm.beta(), &Array1::<f64>::zeros(64));
        assert_eq!(batch_norm.epsilon(), DEFAULT_EPSILON);
    }

    #[test]
    fn test_mismatched_output_dim_is_rejected() {
        let err = BatchNorm::<f64>::new(3, 5).unwrap_err();
        assert!(matches!(err, TensorError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_zero_dim_is_rejected() {
        assert!(BatchNorm::<f32>::new(0, 0).is_err());
        assert!(BatchNorm::<f32>::with_parameters(Array1::zeros(0), Array1::zeros(0)).is_err());
    }

    #[test]
    fn test_config_builder() {
        let config = BatchNormConfig::default()
            .with_epsilon(1e-5)
            .with_gamma_init(0.5)
            .with_beta_init(0.1);
        let batch_norm = BatchNorm::<f64>::from_config(4, 4, &config).unwrap();

        assert_eq!(batch_norm.epsilon(), 1e-5);
        assert_eq!(batch_norm.gamma(), &Array1::from_elem(4, 0.5));
        assert_eq!(batch_norm.beta(), &Array1::from_elem(4, 0.1));
    }

    #[cfg(feature = "serialize")]
    #[test]
    fn test_config_from_json() {
        let config: BatchNormConfig =
            serde_json::from_str(r#"{"epsilon": 1e-5, "gamma_init": 0.5, "beta_init": 0.0}"#)
                .unwrap();
        assert_eq!(config, BatchNormConfig::default().with_epsilon(1e-5).with_gamma_init(0.5));
        assert!(BatchNorm::<f32>::from_config(3, 3, &config).is_ok());
    }

    #[test]
    fn test_invalid_epsilon_is_rejected() {
        let config = BatchNormConfig::default().with_epsilon(0.0);
        assert!(BatchNorm::<f64>::from_config(2, 2, &config).is_err());

        let config = BatchNormConfig::default().with_epsilon(f64::NAN);
        assert!(config.validate().is_err());

        let batch_norm = BatchNorm::<f64>::new(2, 2).unwrap();
        assert!(batch_norm.clone().with_epsilon(-1.0).is_err());
        assert_eq!(batch_norm.with_epsilon(1e-3).unwrap().epsilon(), 1e-3);
    }

    #[test]
    fn test_fprop_normalizes_each_feature() {
        let batch_norm = BatchNorm::<f64>::new(3, 3).unwrap();
        let (outputs, context) = batch_norm.fprop(&sample_batch()).unwrap();

        assert_eq!(outputs.shape(), &[4, 3]);
        assert_eq!(context.batch_size(), 4);

        let mean = outputs.mean_axis(Axis(0)).unwrap();
        let variance = outputs.var_axis(Axis(0), 0.0);
        for j in 0..3 {
            assert_abs_diff_eq!(mean[j], 0.0, epsilon = 1e-10);
            assert_abs_diff_eq!(variance[j], 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_fprop_applies_scale_and_shift() {
        let gamma = array![2.0, -1.0, 0.5];
        let beta = array![1.0, 0.0, -3.0];
        let batch_norm = BatchNorm::with_parameters(gamma.clone(), beta.clone()).unwrap();
        let (outputs, context) = batch_norm.fprop(&sample_batch()).unwrap();

        let expected = &(context.normalized() * &gamma) + &beta;
        for (y, e) in outputs.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(*y, *e, epsilon = 1e-12);
        }

        let mean = outputs.mean_axis(Axis(0)).unwrap();
        for j in 0..3 {
            assert_abs_diff_eq!(mean[j], beta[j], epsilon = 1e-10);
        }
    }

    #[test]
    fn test_context_contents() {
        let batch_norm = BatchNorm::<f64>::new(1, 1).unwrap();
        let inputs = array![[1.0], [3.0]];
        let (_, context) = batch_norm.fprop(&inputs).unwrap();

        assert_eq!(context.diff(), &array![[-1.0], [1.0]]);
        assert_abs_diff_eq!(context.std()[0], (1.0_f64 + 1e-8).sqrt(), epsilon = 1e-15);
        assert_abs_diff_eq!(context.normalized()[[0, 0]], -1.0, epsilon = 1e-7);
        assert_abs_diff_eq!(context.normalized()[[1, 0]], 1.0, epsilon = 1e-7);
    }

    #[test]
    fn test_zero_variance_feature_stays_finite() {
        let batch_norm = BatchNorm::<f64>::new(2, 2).unwrap();
        let inputs = array![[5.0, 1.0], [5.0, 2.0], [5.0, 3.0]];
        let (outputs, context) = batch_norm.fprop(&inputs).unwrap();

        assert!(outputs.iter().all(|v| v.is_finite()));
        assert_abs_diff_eq!(outputs[[0, 0]], 0.0);

        let grads = Array2::ones((3, 2));
        let grads_wrt_inputs = batch_norm.bprop(&context, &inputs, &outputs, &grads).unwrap();
        assert!(grads_wrt_inputs.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_single_row_batch() {
        let batch_norm = BatchNorm::<f32>::new(2, 2).unwrap();
        let inputs = array![[1.5_f32, -2.0]];
        let (outputs, _) = batch_norm.fprop(&inputs).unwrap();
        assert!(outputs.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_fprop_rejects_wrong_feature_count() {
        let batch_norm = BatchNorm::<f64>::new(3, 3).unwrap();
        let err = batch_norm.fprop(&Array2::zeros((4, 2))).unwrap_err();
        assert!(matches!(err, TensorError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_fprop_rejects_empty_batch() {
        let batch_norm = BatchNorm::<f64>::new(3, 3).unwrap();
        let err = batch_norm.fprop(&Array2::zeros((0, 3))).unwrap_err();
        assert!(matches!(err, TensorError::InvalidShape { .. }));
    }

    #[test]
    fn test_bprop_rejects_mismatched_gradients() {
        let batch_norm = BatchNorm::<f64>::new(3, 3).unwrap();
        let inputs = sample_batch();
        let (outputs, context) = batch_norm.fprop(&inputs).unwrap();

        let err = batch_norm
            .bprop(&context, &inputs, &outputs, &Array2::ones((3, 3)))
            .unwrap_err();
        assert!(matches!(err, TensorError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_grads_wrt_params_rejects_mismatched_gradients() {
        let batch_norm = BatchNorm::<f64>::new(3, 3).unwrap();
        let inputs = sample_batch();
        let (_, context) = batch_norm.fprop(&inputs).unwrap();

        let err = batch_norm
            .grads_wrt_params(&context, &inputs, &Array2::ones((4, 2)))
            .unwrap_err();
        assert!(matches!(err, TensorError::ShapeMismatch { .. }));

        let err = batch_norm
            .grads_wrt_params(&context, &inputs, &Array2::ones((5, 3)))
            .unwrap_err();
        assert!(matches!(err, TensorError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_non_finite_parameters_are_rejected() {
        let err = BatchNorm::with_parameters(array![1.0, f64::NAN], array![0.0, 0.0]).unwrap_err();
        assert!(matches!(err, TensorError::InvalidConfiguration { .. }));

        let err =
            BatchNorm::with_parameters(array![1.0, 1.0], array![f64::INFINITY, 0.0]).unwrap_err();
        assert!(matches!(err, TensorError::InvalidConfiguration { .. }));

        let config = BatchNormConfig::default().with_gamma_init(f64::NAN);
        assert!(matches!(
            BatchNorm::<f64>::from_config(2, 2, &config),
            Err(TensorError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_stale_context_is_rejected() {
        let batch_norm = BatchNorm::<f64>::new(3, 3).unwrap();
        let (_, small_context) = batch_norm.fprop(&Array2::ones((2, 3))).unwrap();

        let inputs = sample_batch();
        let (outputs, _) = batch_norm.fprop(&inputs).unwrap();
        let grads = Array2::ones((4, 3));

        let err = batch_norm
            .bprop(&small_context, &inputs, &outputs, &grads)
            .unwrap_err();
        assert!(matches!(err, TensorError::ContextMismatch { .. }));

        let err = batch_norm
            .grads_wrt_params(&small_context, &inputs, &grads)
            .unwrap_err();
        assert!(matches!(err, TensorError::ContextMismatch { .. }));
    }

    #[test]
    fn test_bprop_of_constant_gradient_is_zero() {
        // A shift of every output in a feature is undone by mean subtraction
        let batch_norm = BatchNorm::<f64>::new(3, 3).unwrap();
        let inputs = sample_batch();
        let (outputs, context) = batch_norm.fprop(&inputs).unwrap();

        let grads = Array2::from_elem((4, 3), 0.7);
        let grads_wrt_inputs = batch_norm.bprop(&context, &inputs, &outputs, &grads).unwrap();
        for v in grads_wrt_inputs.iter() {
            assert_abs_diff_eq!(*v, 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_grads_wrt_params() {
        let batch_norm = BatchNorm::<f64>::new(3, 3).unwrap();
        let inputs = sample_batch();
        let (_, context) = batch_norm.fprop(&inputs).unwrap();
        let grads = array![
            [1.0, 0.0, 2.0],
            [0.5, 1.0, 0.0],
            [0.0, -1.0, 1.0],
            [1.5, 2.0, -1.0]
        ];

        let param_grads = batch_norm.grads_wrt_params(&context, &inputs, &grads).unwrap();
        assert_eq!(param_grads.len(), 2);
        assert_eq!(param_grads[1], array![3.0, 2.0, 2.0]);

        let expected_gamma = (&grads * context.normalized()).sum_axis(Axis(0));
        for (g, e) in param_grads[0].iter().zip(expected_gamma.iter()) {
            assert_abs_diff_eq!(*g, *e, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_params_penalty_is_zero() {
        let batch_norm = BatchNorm::<f32>::new(8, 8).unwrap();
        assert_eq!(batch_norm.params_penalty(), 0.0);
    }

    #[test]
    fn test_set_parameters_round_trip() {
        let mut batch_norm =
            BatchNorm::with_parameters(array![1.0, 2.0, 3.0], array![-1.0, 0.0, 1.0]).unwrap();
        let before: Vec<Array1<f64>> = batch_norm.get_parameters().into_iter().cloned().collect();

        batch_norm.set_parameters(&before).unwrap();

        let after: Vec<Array1<f64>> = batch_norm.get_parameters().into_iter().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_set_parameters_replaces_values() {
        let mut batch_norm = BatchNorm::<f64>::new(2, 2).unwrap();
        batch_norm
            .set_parameters(&[array![3.0, 4.0], array![0.5, -0.5]])
            .unwrap();
        assert_eq!(batch_norm.gamma(), &array![3.0, 4.0]);
        assert_eq!(batch_norm.beta(), &array![0.5, -0.5]);
    }

    #[test]
    fn test_set_parameters_validation() {
        let mut batch_norm = BatchNorm::<f64>::new(2, 2).unwrap();

        let err = batch_norm.set_parameters(&[array![1.0, 1.0]]).unwrap_err();
        assert!(matches!(err, TensorError::InvalidArgument { .. }));

        let err = batch_norm
            .set_parameters(&[array![1.0, 1.0], array![0.0, 0.0, 0.0]])
            .unwrap_err();
        assert!(matches!(err, TensorError::ShapeMismatch { .. }));

        // Failed replacement leaves the parameters untouched
        assert_eq!(batch_norm.gamma(), &Array1::<f64>::ones(2));
        assert_eq!(batch_norm.beta(), &Array1::<f64>::zeros(2));
    }

    #[test]
    fn test_display() {
        let batch_norm = BatchNorm::<f64>::new(3, 3).unwrap();
        assert_eq!(
            batch_norm.to_string(),
            "BatchNormLayer(input_dim=3, output_dim=3)"
        );
    }
}
