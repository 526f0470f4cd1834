pub mod aggregate;

pub use aggregate::{Environment, PageType, Service};
