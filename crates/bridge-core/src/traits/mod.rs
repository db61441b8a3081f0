//! Store traits (ports) implemented by the backend connectors

mod stores;

pub use stores::{ChatwootStore, LibreChatStore, StoreResult};
