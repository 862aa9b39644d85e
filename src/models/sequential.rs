use crate::config::Config;
use crate::error::Result;
use crate::layers::Layer;
use crate::tensor::Tensor;
use crate::util::logging;
use std::fmt;

/// A parameter paired with its gradient, as yielded by
/// [`Sequential::named_params_and_grads`].
///
/// `layer` and `name` form a stable handle that stays valid across steps, so
/// an optimizer can key per-parameter state on them instead of on references.
#[derive(Debug)]
pub struct ParamGrad<'a> {
    /// Position of the owning layer in forward order.
    pub layer: usize,
    /// Name of the parameter inside its layer.
    pub name: &'a str,
    /// Live parameter value, updated in place by the optimizer.
    pub param: &'a mut Tensor,
    /// Gradient accumulated for `param`.
    pub grad: &'a Tensor,
}

impl ParamGrad<'_> {
    /// `"{layer}.{name}"`, unique within a container.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.layer, self.name)
    }
}

/// A container that applies layers sequentially.
///
/// The layer order is fixed at construction.  `forward` walks it front to
/// back, `backward` walks it back to front.  The container holds no numeric
/// state of its own; every tensor it hands out lives inside a layer.
pub struct Sequential {
    layers: Vec<Box<dyn Layer>>,
    config: Config,
}

impl Sequential {
    /// Build a container over `layers` with default options.
    ///
    /// An empty list is allowed; forward and backward then return their
    /// input unchanged.
    pub fn new(layers: Vec<Box<dyn Layer>>) -> Self {
        Self::with_config(layers, Config::default())
    }

    pub fn with_config(layers: Vec<Box<dyn Layer>>, config: Config) -> Self {
        let model = Self { layers, config };
        logging::log_model_summary(
            &model.config.name,
            model.len(),
            model.param_count(),
            model.num_elements(),
        );
        model
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Number of layers.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Layers in forward order.
    pub fn layers(&self) -> &[Box<dyn Layer>] {
        &self.layers
    }

    pub fn layer(&self, index: usize) -> Option<&dyn Layer> {
        self.layers.get(index).map(|l| l.as_ref())
    }

    pub fn layer_mut(&mut self, index: usize) -> Option<&mut (dyn Layer + 'static)> {
        self.layers.get_mut(index).map(|l| l.as_mut())
    }

    /// Forward pass feeding each layer's output into the next.
    pub fn forward(&mut self, x: &Tensor) -> Result<Tensor> {
        let mut out = x.clone();
        for (i, layer) in self.layers.iter_mut().enumerate() {
            out = layer.forward(&out)?;
            if self.config.log_shapes {
                logging::log_layer_shape("forward", i, layer.name(), &out.shape);
            }
        }
        Ok(out)
    }

    /// Backward pass returning gradient with respect to the input.
    ///
    /// Must follow the `forward` call it differentiates; layers rely on the
    /// state cached there.
    pub fn backward(&mut self, grad_out: &Tensor) -> Result<Tensor> {
        let mut grad = grad_out.clone();
        for (i, layer) in self.layers.iter_mut().enumerate().rev() {
            grad = layer.backward(&grad)?;
            if self.config.log_shapes {
                logging::log_layer_shape("backward", i, layer.name(), &grad.shape);
            }
        }
        Ok(grad)
    }

    /// Every parameter paired with its gradient, layers in forward order and
    /// parameters in registration order.
    ///
    /// The pairs borrow the layers' live storage, so writing through the
    /// parameter reference updates the layer.  Call again after each step;
    /// the iterator is not a snapshot.
    pub fn params_and_grads(&mut self) -> impl Iterator<Item = (&mut Tensor, &Tensor)> + '_ {
        self.layers.iter_mut().flat_map(|layer| {
            layer
                .parameters_mut()
                .iter_mut()
                .map(|(_, param, grad)| (param, grad))
        })
    }

    /// Same walk as [`Sequential::params_and_grads`], with the owning layer
    /// index and parameter name attached to each pair.
    pub fn named_params_and_grads(&mut self) -> impl Iterator<Item = ParamGrad<'_>> + '_ {
        self.layers
            .iter_mut()
            .enumerate()
            .flat_map(|(index, layer)| {
                layer
                    .parameters_mut()
                    .iter_mut()
                    .map(move |(name, param, grad)| ParamGrad {
                        layer: index,
                        name,
                        param,
                        grad,
                    })
            })
    }

    /// Zero any accumulated gradients in all layers.
    pub fn zero_grad(&mut self) {
        for layer in self.layers.iter_mut() {
            layer.zero_grad();
        }
    }

    /// Number of (parameter, gradient) pairs across all layers.
    pub fn param_count(&self) -> usize {
        self.layers.iter().map(|l| l.parameters().len()).sum()
    }

    /// Total number of scalar parameter values across all layers.
    pub fn num_elements(&self) -> usize {
        self.layers
            .iter()
            .map(|l| l.parameters().num_elements())
            .sum()
    }
}

impl FromIterator<Box<dyn Layer>> for Sequential {
    fn from_iter<I: IntoIterator<Item = Box<dyn Layer>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Debug for Sequential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.layers.iter().map(|l| l.name()).collect();
        f.debug_struct("Sequential")
            .field("name", &self.config.name)
            .field("layers", &names)
            .finish()
    }
}
