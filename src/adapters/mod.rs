// Adapters layer: concrete implementations for external systems (storage, output formats).

pub mod output;
pub mod storage;
