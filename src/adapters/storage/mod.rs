//! Storage adapters for the theme preference.

mod file_theme_store;
mod in_memory_theme_store;

pub use file_theme_store::FileThemeStore;
pub use in_memory_theme_store::InMemoryThemeStore;
