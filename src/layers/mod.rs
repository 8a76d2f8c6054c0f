pub mod cache;
pub mod dense;

pub use cache::{ActivationCache, LayerCache, LayerGradients, LinearCache};
pub use dense::{DenseLayer, WEIGHT_SCALE};
