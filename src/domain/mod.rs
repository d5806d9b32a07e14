// Domain layer: ISBN value types and the input boundary. No I/O.

pub mod model;
pub mod ports;
