//! A headless sticky-header overlay for list hosts.
//!
//! For dataset binding glue, see the `sticky-headers-binding` crate.
//!
//! This crate keeps the header that covers the first visible item pinned to the top of a
//! scrolling list: it resolves which header applies, realizes its view on demand, caches views
//! per header key under a configurable bound, and computes the push-off offset when the next
//! header is about to take over.
//!
//! It is UI-agnostic. A GUI/TUI layer is expected to provide:
//! - a [`ListHost`] (viewport size, padding, visible children and their positions)
//! - a [`HeaderDataSource`] (header coverage, header positions, view creation and binding)
//! - a [`Canvas`] to draw realized [`HeaderView`]s into
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod cache;
mod host;
mod key;
mod options;
mod overlay;
mod types;


pub use cache::HeaderCache;
pub use host::{
    Canvas, ChildView, DrawOverlay, HeaderDataSource, HeaderView, HostGeometry, ListHost,
};
pub use key::HeaderKey;
pub use options::{DEFAULT_MAX_CACHED_HEADERS, StickyHeaderOptions};
pub use overlay::StickyHeaderOverlay;
pub use types::{
    Bounds, Dimension, LayoutParams, ListState, MeasureSpec, Padding, Size, Translation,
};
