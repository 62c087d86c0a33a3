// Domain layer: record shapes and the traits the client is built against.

pub mod model;
pub mod ports;
