//! System Theme Signal Port - Interface for the ambient theme preference.

use crate::domain::theme::ColorScheme;

/// Port for the environment's light/dark preference.
///
/// Consulted only when no stored preference exists. Infallible: an
/// implementation that cannot detect anything returns its configured
/// fallback.
pub trait SystemThemeSignal: Send + Sync {
    /// The scheme the surrounding system currently prefers.
    fn current(&self) -> ColorScheme;
}
