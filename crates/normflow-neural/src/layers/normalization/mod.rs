//! Normalization Layers Module
//!
//! # Available Normalization Layers
//!
//! - **BatchNorm**: Batch Normalization over the batch axis of 2D activations, with an
//!   explicit forward context threaded into the backward pass
//!
//! # Usage
//!
//! ```rust
//! use ndarray::array;
//! use normflow_neural::layers::{BatchNorm, Layer};
//!
//! let batch_norm = BatchNorm::<f64>::new(2, 2)?;
//! let inputs = array![[1.0, 10.0], [3.0, 30.0]];
//! let (outputs, context) = batch_norm.fprop(&inputs)?;
//! assert_eq!(outputs.shape(), &[2, 2]);
//! assert_eq!(context.batch_size(), 2);
//! # Ok::<(), normflow_core::TensorError>(())
//! ```

pub mod batch_norm;

pub use batch_norm::{BatchNorm, BatchNormConfig, BatchNormContext, DEFAULT_EPSILON};
