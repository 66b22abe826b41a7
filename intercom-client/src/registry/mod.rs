mod call_registry;

pub use call_registry::CallRegistry;
