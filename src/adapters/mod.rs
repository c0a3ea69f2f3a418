// Adapters layer: concrete print services.

pub mod lp;

pub use lp::LpSpooler;
