// Domain layer: calculation types and the ports presentation code depends on.

pub mod model;
pub mod ports;
