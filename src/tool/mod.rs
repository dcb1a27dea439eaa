// ABOUTME: Tool module - defines tools, registry, and the typed function adapter.
// ABOUTME: Core abstraction for agent capabilities.

mod function;
mod registry;
mod result;
mod traits;

pub use function::*;
pub use registry::*;
pub use result::*;
pub use traits::*;

#[cfg(test)]
mod registry_test;
