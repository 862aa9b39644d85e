use super::layer::Layer;
use super::params::Parameters;
use crate::error::Result;
use crate::tensor::Tensor;

/// Pass-through layer without parameters.
#[derive(Debug, Default)]
pub struct Identity {
    params: Parameters,
}

impl Identity {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Layer for Identity {
    fn forward(&mut self, x: &Tensor) -> Result<Tensor> {
        Ok(x.clone())
    }

    fn backward(&mut self, grad_out: &Tensor) -> Result<Tensor> {
        Ok(grad_out.clone())
    }

    fn parameters(&self) -> &Parameters {
        &self.params
    }

    fn parameters_mut(&mut self) -> &mut Parameters {
        &mut self.params
    }

    fn name(&self) -> &str {
        "identity"
    }
}
