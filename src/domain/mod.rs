// Domain layer: payload, page and strip models plus the print service port.

pub mod model;
pub mod ports;
pub mod strip;
pub mod template;
