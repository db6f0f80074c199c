// Domain layer: models and ports. No dependencies on the HTTP adapters.

pub mod model;
pub mod ports;
