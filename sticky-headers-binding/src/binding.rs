use std::any::{Any, type_name};

use sticky_headers::{HeaderDataSource, StickyHeaderOverlay};

use crate::{BindingError, Result};

/// An adapter that can swap its whole dataset.
pub trait UpdateDataSet<T> {
    fn update_data_set(&mut self, items: Vec<T>);
}

/// A list host that may have an adapter attached.
pub trait AdapterHost {
    fn adapter_mut(&mut self) -> Option<&mut dyn Any>;
}

/// Forwards `items` to the adapter attached to `host`, which must be an `A`.
pub fn bind_items<A, T, H>(host: &mut H, items: Vec<T>) -> Result<()>
where
    A: UpdateDataSet<T> + 'static,
    H: AdapterHost + ?Sized,
{
    let expected = type_name::<A>();
    let Some(adapter) = host.adapter_mut() else {
        bwarn!(expected, "bind_items: no adapter attached");
        return Err(BindingError::MissingAdapter { expected });
    };
    let Some(adapter) = adapter.downcast_mut::<A>() else {
        bwarn!(
            expected,
            found = ?Any::type_id(&*adapter),
            "bind_items: adapter kind mismatch"
        );
        return Err(BindingError::AdapterMismatch { expected });
    };

    bdebug!(expected, len = items.len(), "bind_items");
    adapter.update_data_set(items);
    Ok(())
}

/// Binds `items` like [`bind_items`], then clears the overlay's header cache.
///
/// On error the overlay is left untouched.
pub fn replace_data_set<A, T, H, S>(
    host: &mut H,
    items: Vec<T>,
    overlay: &mut StickyHeaderOverlay<S>,
) -> Result<()>
where
    A: UpdateDataSet<T> + 'static,
    H: AdapterHost + ?Sized,
    S: HeaderDataSource,
{
    bind_items::<A, T, H>(host, items)?;
    overlay.clear_cache();
    Ok(())
}
