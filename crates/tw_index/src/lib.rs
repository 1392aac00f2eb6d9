pub mod entry;
pub mod index;
pub mod loader;
pub mod plugin_map;

// Re-export main types
pub use entry::{EntryError, LookupEntry};
pub use index::{Category, LookupTable, Section};
pub use loader::{default_table, load_from_json};
pub use plugin_map::get_arbitrary_property;
