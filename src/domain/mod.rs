// Domain layer: value types shared by the utility functions. No I/O here.

pub mod model;
