#![allow(dead_code)]

use kinpnosis::{Error, Layer, Parameters, Result, Tensor};
use rand::{rngs::StdRng, SeedableRng};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Shared record of layer calls, in the order they happened.
pub type CallLog = Rc<RefCell<Vec<String>>>;

pub fn call_log() -> CallLog {
    Rc::new(RefCell::new(Vec::new()))
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Create a [`StdRng`] seeded from the `SEED` environment variable.
pub fn rng_from_env() -> StdRng {
    let base = std::env::var("SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0);
    StdRng::seed_from_u64(base)
}

pub fn vector(values: &[f32]) -> Tensor {
    Tensor::new(values.to_vec(), vec![values.len()]).unwrap()
}

pub fn assert_close(actual: &Tensor, expected: &Tensor) {
    assert_eq!(actual.shape, expected.shape);
    for (a, b) in actual.data.iter().zip(expected.data.iter()) {
        assert!((a - b).abs() <= 1e-4 * (1.0 + b.abs()), "{:?} != {:?}", actual.data, expected.data);
    }
}

fn cached<'a>(last_x: &'a Option<Tensor>) -> Result<&'a Tensor> {
    last_x
        .as_ref()
        .ok_or_else(|| Error::layer("backward called before forward"))
}

/// `y = w * x` with a single scalar parameter `w`.
pub struct Scale {
    params: Parameters,
    last_x: Option<Tensor>,
}

impl Scale {
    pub fn new(w: f32) -> Self {
        let mut params = Parameters::new();
        params.register("w", Tensor::scalar(w)).unwrap();
        Self {
            params,
            last_x: None,
        }
    }

    fn w(&self) -> f32 {
        self.params.param("w").map(|t| t.data[0]).unwrap_or_default()
    }
}

impl Layer for Scale {
    fn forward(&mut self, x: &Tensor) -> Result<Tensor> {
        let w = self.w();
        self.last_x = Some(x.clone());
        let data = x.data.iter().map(|v| v * w).collect();
        Tensor::new(data, x.shape.clone())
    }

    fn backward(&mut self, grad_out: &Tensor) -> Result<Tensor> {
        let x = cached(&self.last_x)?;
        let grad_w: f32 = grad_out.data.iter().zip(x.data.iter()).map(|(g, x)| g * x).sum();
        self.params.accumulate_grad("w", &Tensor::scalar(grad_w))?;
        let w = self.w();
        let data = grad_out.data.iter().map(|g| g * w).collect();
        Tensor::new(data, grad_out.shape.clone())
    }

    fn parameters(&self) -> &Parameters {
        &self.params
    }

    fn parameters_mut(&mut self) -> &mut Parameters {
        &mut self.params
    }

    fn name(&self) -> &str {
        "scale"
    }
}

/// `y = x + b` with a single scalar parameter `b`.
pub struct Shift {
    params: Parameters,
}

impl Shift {
    pub fn new(b: f32) -> Self {
        let mut params = Parameters::new();
        params.register("b", Tensor::scalar(b)).unwrap();
        Self { params }
    }
}

impl Layer for Shift {
    fn forward(&mut self, x: &Tensor) -> Result<Tensor> {
        let b = self.params.param("b").map(|t| t.data[0]).unwrap_or_default();
        let data = x.data.iter().map(|v| v + b).collect();
        Tensor::new(data, x.shape.clone())
    }

    fn backward(&mut self, grad_out: &Tensor) -> Result<Tensor> {
        let grad_b: f32 = grad_out.data.iter().sum();
        self.params.accumulate_grad("b", &Tensor::scalar(grad_b))?;
        Ok(grad_out.clone())
    }

    fn parameters(&self) -> &Parameters {
        &self.params
    }

    fn parameters_mut(&mut self) -> &mut Parameters {
        &mut self.params
    }

    fn name(&self) -> &str {
        "shift"
    }
}

/// `y = w * x + b` over vectors, registering `w` before `b`.
pub struct Affine {
    params: Parameters,
    last_x: Option<Tensor>,
}

impl Affine {
    pub fn new(w: &[f32], b: &[f32]) -> Self {
        assert_eq!(w.len(), b.len());
        let mut params = Parameters::new();
        params.register("w", vector(w)).unwrap();
        params.register("b", vector(b)).unwrap();
        Self {
            params,
            last_x: None,
        }
    }

    fn tensor(&self, name: &str) -> Result<&Tensor> {
        self.params
            .param(name)
            .ok_or_else(|| Error::UnknownParameter(name.to_string()))
    }
}

impl Layer for Affine {
    fn forward(&mut self, x: &Tensor) -> Result<Tensor> {
        let (w, b) = (self.tensor("w")?, self.tensor("b")?);
        if x.shape != w.shape {
            return Err(Error::ShapeMismatch {
                expected: w.shape.clone(),
                actual: x.shape.clone(),
            });
        }
        let data = x
            .data
            .iter()
            .zip(w.data.iter().zip(b.data.iter()))
            .map(|(x, (w, b))| w * x + b)
            .collect();
        let out = Tensor::new(data, x.shape.clone())?;
        self.last_x = Some(x.clone());
        Ok(out)
    }

    fn backward(&mut self, grad_out: &Tensor) -> Result<Tensor> {
        let x = cached(&self.last_x)?.clone();
        let grad_w = grad_out
            .data
            .iter()
            .zip(x.data.iter())
            .map(|(g, x)| g * x)
            .collect();
        self.params
            .accumulate_grad("w", &Tensor::new(grad_w, x.shape.clone())?)?;
        self.params.accumulate_grad("b", grad_out)?;
        let w = self.tensor("w")?;
        let data = grad_out.data.iter().zip(w.data.iter()).map(|(g, w)| g * w).collect();
        Tensor::new(data, grad_out.shape.clone())
    }

    fn parameters(&self) -> &Parameters {
        &self.params
    }

    fn parameters_mut(&mut self) -> &mut Parameters {
        &mut self.params
    }

    fn name(&self) -> &str {
        "affine"
    }
}

/// Wraps a layer and records every forward, backward and zero_grad call.
pub struct Probe<L> {
    tag: String,
    log: CallLog,
    inner: L,
}

impl<L: Layer> Probe<L> {
    pub fn new(tag: &str, log: &CallLog, inner: L) -> Self {
        Self {
            tag: tag.to_string(),
            log: Rc::clone(log),
            inner,
        }
    }

    fn record(&self, call: &str) {
        self.log.borrow_mut().push(format!("{}.{}", self.tag, call));
    }
}

impl<L: Layer> Layer for Probe<L> {
    fn forward(&mut self, x: &Tensor) -> Result<Tensor> {
        self.record("forward");
        self.inner.forward(x)
    }

    fn backward(&mut self, grad_out: &Tensor) -> Result<Tensor> {
        self.record("backward");
        self.inner.backward(grad_out)
    }

    fn parameters(&self) -> &Parameters {
        self.inner.parameters()
    }

    fn parameters_mut(&mut self) -> &mut Parameters {
        self.inner.parameters_mut()
    }

    fn zero_grad(&mut self) {
        self.record("zero_grad");
        self.inner.zero_grad();
    }

    fn name(&self) -> &str {
        &self.tag
    }
}

#[derive(Debug)]
pub struct Boom;

impl fmt::Display for Boom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "boom")
    }
}

impl std::error::Error for Boom {}

/// Fails every call with [`Boom`].
#[derive(Default)]
pub struct Failing {
    params: Parameters,
}

impl Layer for Failing {
    fn forward(&mut self, _x: &Tensor) -> Result<Tensor> {
        Err(Error::layer(Boom))
    }

    fn backward(&mut self, _grad_out: &Tensor) -> Result<Tensor> {
        Err(Error::layer(Boom))
    }

    fn parameters(&self) -> &Parameters {
        &self.params
    }

    fn parameters_mut(&mut self) -> &mut Parameters {
        &mut self.params
    }
}
