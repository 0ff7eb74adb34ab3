// Domain layer: core models and ports (interfaces). No dependencies on
// concrete adapters.

pub mod model;
pub mod ports;
