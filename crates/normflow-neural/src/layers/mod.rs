pub mod cached;
pub mod normalization;

pub use cached::CachedLayer;
pub use normalization::{BatchNorm, BatchNormConfig, BatchNormContext};

use ndarray::{Array1, Array2};
use normflow_core::Result;

/// A transformation of `(batch_size, input_dim)` activations into
/// `(batch_size, output_dim)` activations.
///
/// `fprop` returns the values the backward pass needs as an explicit context instead of
/// stashing them on the layer, so a context can only be used with the batch that
/// produced it and the layer itself stays immutable during a pass.
pub trait Layer<T> {
    /// Intermediate values produced by `fprop` and consumed by the backward pass
    type Context;

    fn input_dim(&self) -> usize;
    fn output_dim(&self) -> usize;

    /// Forward propagates activations through the layer transformation
    fn fprop(&self, inputs: &Array2<T>) -> Result<(Array2<T>, Self::Context)>;

    /// Given gradients with respect to the outputs, computes gradients with respect to
    /// the inputs of the forward pass that produced `context`
    fn bprop(
        &self,
        context: &Self::Context,
        inputs: &Array2<T>,
        outputs: &Array2<T>,
        grads_wrt_outputs: &Array2<T>,
    ) -> Result<Array2<T>>;
}

/// A layer with learned parameters that an external optimizer updates
pub trait LayerWithParameters<T>: Layer<T> {
    /// Gradients with respect to each parameter, in `get_parameters` order
    fn grads_wrt_params(
        &self,
        context: &Self::Context,
        inputs: &Array2<T>,
        grads_wrt_outputs: &Array2<T>,
    ) -> Result<Vec<Array1<T>>>;

    /// Parameter dependent penalty term added to the training loss
    fn params_penalty(&self) -> T;

    fn get_parameters(&self) -> Vec<&Array1<T>>;

    /// Replace all parameters at once, e.g. after an optimizer step
    fn set_parameters(&mut self, values: &[Array1<T>]) -> Result<()>;
}
