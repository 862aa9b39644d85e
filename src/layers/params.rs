use crate::error::{Error, Result};
use crate::tensor::Tensor;

/// A named parameter together with its accumulated gradient.
#[derive(Clone, Debug)]
struct Param {
    name: String,
    value: Tensor,
    grad: Tensor,
}

/// Parameter and gradient storage owned by a layer.
///
/// Values and gradients are kept side by side so the `params` and `grads`
/// views always expose the same names in registration order.  Registering a
/// parameter creates its gradient as zeros of the same shape.
#[derive(Clone, Debug, Default)]
pub struct Parameters {
    entries: Vec<Param>,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a trainable tensor under `name`.
    pub fn register(&mut self, name: impl Into<String>, value: Tensor) -> Result<()> {
        let name = name.into();
        if self.entry(&name).is_some() {
            return Err(Error::DuplicateParameter(name));
        }
        let grad = Tensor::zeros_like(&value);
        self.entries.push(Param { name, value, grad });
        Ok(())
    }

    /// Number of registered parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of scalar values across all parameters.
    pub fn num_elements(&self) -> usize {
        self.entries.iter().map(|p| p.value.len()).sum()
    }

    /// The `params` view: name to current value.
    pub fn params(&self) -> impl Iterator<Item = (&str, &Tensor)> + '_ {
        self.entries.iter().map(|p| (p.name.as_str(), &p.value))
    }

    /// The `grads` view: name to accumulated gradient.
    pub fn grads(&self) -> impl Iterator<Item = (&str, &Tensor)> + '_ {
        self.entries.iter().map(|p| (p.name.as_str(), &p.grad))
    }

    pub fn param(&self, name: &str) -> Option<&Tensor> {
        self.entry(name).map(|p| &p.value)
    }

    pub fn param_mut(&mut self, name: &str) -> Option<&mut Tensor> {
        self.entry_mut(name).map(|p| &mut p.value)
    }

    pub fn grad(&self, name: &str) -> Option<&Tensor> {
        self.entry(name).map(|p| &p.grad)
    }

    pub fn grad_mut(&mut self, name: &str) -> Option<&mut Tensor> {
        self.entry_mut(name).map(|p| &mut p.grad)
    }

    /// Add `delta` into the gradient stored for `name`.
    pub fn accumulate_grad(&mut self, name: &str, delta: &Tensor) -> Result<()> {
        let entry = self
            .entry_mut(name)
            .ok_or_else(|| Error::UnknownParameter(name.to_string()))?;
        entry.grad.add_assign(delta)
    }

    /// Yield `(name, value, grad)` with the value mutable so an optimizer can
    /// update it in place from the paired gradient.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Tensor, &Tensor)> + '_ {
        self.entries
            .iter_mut()
            .map(|p| (p.name.as_str(), &mut p.value, &p.grad))
    }

    /// Reset every gradient to zeros shaped like its parameter.
    pub fn zero_grad(&mut self) {
        for p in self.entries.iter_mut() {
            if p.grad.shape == p.value.shape {
                p.grad.zero();
            } else {
                p.grad = Tensor::zeros_like(&p.value);
            }
        }
    }

    fn entry(&self, name: &str) -> Option<&Param> {
        self.entries.iter().find(|p| p.name == name)
    }

    fn entry_mut(&mut self, name: &str) -> Option<&mut Param> {
        self.entries.iter_mut().find(|p| p.name == name)
    }
}
