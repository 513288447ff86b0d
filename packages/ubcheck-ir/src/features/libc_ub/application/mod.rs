//! Libc UB application layer

pub mod registry;

pub use registry::{HandlerRegistry, RegisteredHandler};
