//! Shape validation for batch-major 2-D activations.
//!
//! Layers in this workspace consume `(batch_size, features)` matrices. These helpers
//! turn the common mismatch cases into [`TensorError`] values instead of letting
//! `ndarray` broadcasting panic or silently stretch a dimension.

use crate::{Result, TensorError};

/// Validate that a batch has at least one row and exactly `features` columns
pub fn validate_batch_features(operation: &str, shape: &[usize], features: usize) -> Result<()> {
    if shape.len() != 2 {
        return Err(TensorError::invalid_shape(
            operation,
            &format!("expected 2D input (batch, features), got {}D", shape.len()),
            shape,
        ));
    }

    if shape[1] != features {
        return Err(TensorError::shape_mismatch(
            operation,
            &format!("[_, {features}]"),
            &format!("{shape:?}"),
        ));
    }

    if shape[0] == 0 {
        return Err(TensorError::invalid_shape(
            operation,
            "batch must contain at least one row",
            shape,
        ));
    }

    Ok(())
}

/// Validate that two arrays taking part in an elementwise operation have identical shapes
pub fn validate_elementwise_shapes(operation: &str, expected: &[usize], got: &[usize]) -> Result<()> {
    if expected != got {
        Err(TensorError::shape_mismatch(
            operation,
            &format!("{expected:?}"),
            &format!("{got:?}"),
        ))
    } else {
        Ok(())
    }
}

/// Validate the length of a per-feature vector such as a scale or shift parameter
pub fn validate_vector_len(operation: &str, name: &str, len: usize, expected: usize) -> Result<()> {
    if len != expected {
        return Err(TensorError::shape_mismatch(
            operation,
            &format!("{name} of length {expected}"),
            &format!("{name} of length {len}"),
        ));
    }
    Ok(())
}
