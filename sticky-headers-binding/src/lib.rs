//! Dataset binding glue for the `sticky-headers` crate.
//!
//! UI toolkits usually attach an adapter to a list host once and then push new item lists into
//! it from declarative bindings. This crate provides that last step:
//!
//! - [`bind_items`] forwards a new dataset to the adapter attached to a host, failing with
//!   [`BindingError`] when no adapter, or an adapter of the wrong kind, is attached
//! - [`replace_data_set`] does the same and then drops the overlay's cached header views,
//!   which would otherwise keep showing content from the old dataset
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod binding;
mod error;

#[cfg(test)]
mod tests;

pub use binding::{AdapterHost, UpdateDataSet, bind_items, replace_data_set};
pub use error::{BindingError, Result};
