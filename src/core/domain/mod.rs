pub mod error;
pub mod model;
pub mod ports;
pub mod value_object;
