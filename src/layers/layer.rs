use super::params::Parameters;
use crate::error::Result;
use crate::tensor::Tensor;

/// Common interface for network layers.
pub trait Layer {
    /// Forward pass.  Implementations may cache whatever the matching
    /// backward call needs.
    fn forward(&mut self, x: &Tensor) -> Result<Tensor>;

    /// Backward pass returning gradient with respect to the layer input.
    /// Parameter gradients are accumulated into [`Layer::parameters_mut`].
    fn backward(&mut self, grad_out: &Tensor) -> Result<Tensor>;

    /// Trainable parameters and their gradients.
    fn parameters(&self) -> &Parameters;

    /// Mutable access to parameters for optimisation.
    fn parameters_mut(&mut self) -> &mut Parameters;

    /// Zero any accumulated gradients.
    fn zero_grad(&mut self) {
        self.parameters_mut().zero_grad();
    }

    /// Short label used in log output.
    fn name(&self) -> &str {
        "layer"
    }
}
