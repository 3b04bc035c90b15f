// Domain layer: core models and ports. No dependency on the HTTP adapter.

pub mod model;
pub mod ports;
