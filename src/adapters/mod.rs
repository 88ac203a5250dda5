// Adapters layer: concrete implementations for external systems (storage, data sources, renderers)

pub mod render;
pub mod source;
pub mod storage;
