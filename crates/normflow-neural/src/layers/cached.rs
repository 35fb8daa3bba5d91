//! Single-slot context cache for frameworks that drive layers with the classic
//! `fprop(inputs)` / `bprop(inputs, outputs, grads)` calling convention.
//!
//! The wrapper keeps the context of the most recent forward pass. Calls must follow
//! `fprop` then `bprop`/`grads_wrt_params` for the same batch; a later `fprop`
//! replaces the cached context.

use crate::layers::{Layer, LayerWithParameters};
use ndarray::{Array1, Array2};
use normflow_core::{Result, TensorError};
use std::fmt;
use std::marker::PhantomData;

pub struct CachedLayer<L, T>
where
    L: Layer<T>,
{
    layer: L,
    context: Option<L::Context>,
    _phantom: PhantomData<T>,
}

impl<L, T> CachedLayer<L, T>
where
    L: Layer<T>,
{
    pub fn new(layer: L) -> Self {
        Self {
            layer,
            context: None,
            _phantom: PhantomData,
        }
    }

    pub fn inner(&self) -> &L {
        &self.layer
    }

    pub fn into_inner(self) -> L {
        self.layer
    }

    /// Context of the most recent forward pass, if any
    pub fn context(&self) -> Option<&L::Context> {
        self.context.as_ref()
    }

    /// Drop the cached context
    pub fn clear(&mut self) {
        self.context = None;
    }

    pub fn fprop(&mut self, inputs: &Array2<T>) -> Result<Array2<T>> {
        let (outputs, context) = self.layer.fprop(inputs)?;
        self.context = Some(context);
        Ok(outputs)
    }

    pub fn bprop(
        &self,
        inputs: &Array2<T>,
        outputs: &Array2<T>,
        grads_wrt_outputs: &Array2<T>,
    ) -> Result<Array2<T>> {
        let context = self.cached_context("bprop")?;
        self.layer.bprop(context, inputs, outputs, grads_wrt_outputs)
    }

    fn cached_context(&self, operation: &str) -> Result<&L::Context> {
        self.context.as_ref().ok_or_else(|| {
            TensorError::not_initialized(operation, "fprop must be called before the backward pass")
        })
    }
}

impl<L, T> CachedLayer<L, T>
where
    L: LayerWithParameters<T>,
{
    pub fn grads_wrt_params(
        &self,
        inputs: &Array2<T>,
        grads_wrt_outputs: &Array2<T>,
    ) -> Result<Vec<Array1<T>>> {
        let context = self.cached_context("grads_wrt_params")?;
        self.layer.grads_wrt_params(context, inputs, grads_wrt_outputs)
    }

    pub fn params_penalty(&self) -> T {
        self.layer.params_penalty()
    }

    pub fn get_parameters(&self) -> Vec<&Array1<T>> {
        self.layer.get_parameters()
    }

    /// Replace the wrapped layer's parameters. The cached context is kept as is, so
    /// a layer whose context depends on its parameters needs a fresh `fprop` first.
    pub fn set_parameters(&mut self, values: &[Array1<T>]) -> Result<()> {
        self.layer.set_parameters(values)
    }
}

impl<L, T> fmt::Display for CachedLayer<L, T>
where
    L: Layer<T> + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.layer, f)
    }
}
