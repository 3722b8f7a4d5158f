// Domain layer: plain values passed between the driver and its callers.

pub mod model;
