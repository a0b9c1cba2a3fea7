//! Infrastructure - configuration, ports, and adapters.

pub mod marker_sink;
pub mod ports;
pub mod settings;
