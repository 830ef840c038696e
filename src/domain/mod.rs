// Domain layer: readings, report rendering and ports. No I/O here.

pub mod model;
pub mod ports;
