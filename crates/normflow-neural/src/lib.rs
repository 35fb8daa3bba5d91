//! # normflow-neural
//!
//! Batch normalization for a host training framework. The framework owns the network
//! container, optimizer and training loop; this crate supplies the layer and the
//! contract it is driven through.
//!
//! ## Quick Start
//!
//! ```rust
//! use ndarray::array;
//! use normflow_neural::{BatchNorm, Layer, LayerWithParameters};
//!
//! # fn main() -> normflow_core::Result<()> {
//! let mut layer = BatchNorm::<f64>::new(3, 3)?;
//! let inputs = array![[1.0, 2.0, 3.0], [2.0, 0.0, 1.0], [0.0, 4.0, -1.0]];
//!
//! // Forward pass returns the context the backward pass needs
//! let (outputs, context) = layer.fprop(&inputs)?;
//!
//! let grads_wrt_outputs = &outputs * 2.0;
//! let grads_wrt_inputs = layer.bprop(&context, &inputs, &outputs, &grads_wrt_outputs)?;
//! let param_grads = layer.grads_wrt_params(&context, &inputs, &grads_wrt_outputs)?;
//! assert_eq!(grads_wrt_inputs.shape(), inputs.shape());
//!
//! // An external optimizer step
//! let updated: Vec<_> = layer
//!     .get_parameters()
//!     .into_iter()
//!     .zip(&param_grads)
//!     .map(|(p, g)| p - &(g * 0.1))
//!     .collect();
//! layer.set_parameters(&updated)?;
//! # Ok(())
//! # }
//! ```
//!
//! Frameworks that call `bprop(inputs, outputs, grads)` without threading a context can
//! wrap the layer in [`CachedLayer`].

pub mod layers;

pub use layers::normalization::{BatchNorm, BatchNormConfig, BatchNormContext};
pub use layers::{CachedLayer, Layer, LayerWithParameters};
