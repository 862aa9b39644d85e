pub mod sequential;

pub use sequential::{ParamGrad, Sequential};
