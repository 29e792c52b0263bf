// Domain layer: part/job models and the ports the generation engine talks to.

pub mod model;
pub mod ports;
