//! Sequential layer container for small neural-network training loops.
//!
//! A [`Sequential`] chains [`Layer`]s: `forward` runs them in order,
//! `backward` runs them in reverse, and `params_and_grads` hands every
//! parameter together with its gradient to an external optimizer, which
//! updates the parameter in place.
//!
//! ```
//! use kinpnosis::{Identity, Layer, Sequential, Tensor};
//!
//! let mut net = Sequential::new(vec![
//!     Box::new(Identity::new()) as Box<dyn Layer>,
//!     Box::new(Identity::new()),
//! ]);
//! let x = Tensor::new(vec![1.0, 2.0], vec![2]).unwrap();
//! let y = net.forward(&x).unwrap();
//! let dx = net.backward(&y).unwrap();
//! assert_eq!(dx, x);
//! assert_eq!(net.params_and_grads().count(), 0);
//! ```

pub mod config;
pub mod error;
pub mod layers;
pub mod models;
pub mod tensor;
pub mod util;

pub use config::Config;
pub use error::{Error, Result};
pub use layers::{Identity, Layer, Parameters};
pub use models::{ParamGrad, Sequential};
pub use tensor::Tensor;
