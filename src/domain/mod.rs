// Domain layer: asset models and the storage port. No filesystem access here.

pub mod model;
pub mod ports;
