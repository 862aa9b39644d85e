pub mod identity;
pub mod layer;
pub mod params;

pub use identity::Identity;
pub use layer::Layer;
pub use params::Parameters;
