/// Default bound for [`StickyHeaderOptions::max_cached_headers`].
pub const DEFAULT_MAX_CACHED_HEADERS: usize = 100;

/// Configuration for [`crate::StickyHeaderOverlay`].
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`, so it can live in
/// an app's settings next to the rest of its list configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StickyHeaderOptions {
    /// Upper bound on realized header views kept alive.
    ///
    /// When an insert would make the cache reach this size, every cached header is dropped
    /// first (clear-all, not LRU). `0` is accepted and clears on every insert.
    pub max_cached_headers: usize,

    /// Whether the overlay draws at all. When disabled, draw passes are no-ops but the cache
    /// and hit-testing keep working.
    pub enabled: bool,
}

impl StickyHeaderOptions {
    pub fn new() -> Self {
        Self {
            max_cached_headers: DEFAULT_MAX_CACHED_HEADERS,
            enabled: true,
        }
    }

    pub fn with_max_cached_headers(mut self, max_cached_headers: usize) -> Self {
        self.max_cached_headers = max_cached_headers;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl Default for StickyHeaderOptions {
    fn default() -> Self {
        Self::new()
    }
}
