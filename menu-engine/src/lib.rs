//! Taqueria menu engine
//!
//! Domain engine behind a single-device food-ordering app: ingredient
//! catalog, composition engine (cost/price/allergen/spice derivation), menu
//! item store with undo/redo and bulk operations, and a session cart store.
//!
//! Stores are explicit service objects constructed once at startup and
//! passed by reference to whatever consumes them. They mutate in-memory
//! state synchronously; persistence is a best-effort JSON mirror written
//! through a pluggable key-value adapter after each mutation.

pub mod cart;
pub mod catalog;
pub mod composition;
pub mod config;
pub mod logger;
pub mod menu;
pub mod money;
pub mod storage;

pub use cart::CartStore;
pub use catalog::IngredientCatalog;
pub use composition::{Composer, Composition, CompositionError};
pub use config::EngineConfig;
pub use menu::{ExportFormat, ImportReport, MenuQuery, MenuStore, MenuStoreError, MergeStrategy,
    SortDirection, SortKey};
pub use storage::{KvStore, MemoryStore, RedbStore, StorageError};
