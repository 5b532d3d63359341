use alloc::rc::Rc;
use core::fmt;

use crate::cache::HeaderCache;
use crate::host::{Canvas, ChildView, DrawOverlay, HeaderDataSource, HeaderView, ListHost};
use crate::{Bounds, ListState, MeasureSpec, StickyHeaderOptions};

type Cache<S> = HeaderCache<<S as HeaderDataSource>::Key, <S as HeaderDataSource>::View>;

/// Pins the header covering the first visible item to the top of a list host.
///
/// The overlay holds no UI objects besides the header views it realizes. The host drives it by
/// calling [`DrawOverlay::on_draw_over`] after drawing its own children each frame. Header
/// views are realized lazily through the data source, cached per key, and reused until the
/// cache is cleared explicitly or by reaching `max_cached_headers`.
///
/// When the second visible child belongs to a different header, the next header is realized
/// too and may push the current one up and out of the viewport.
pub struct StickyHeaderOverlay<S: HeaderDataSource> {
    data_source: S,
    options: StickyHeaderOptions,
    cache: Cache<S>,
}

impl<S: HeaderDataSource> StickyHeaderOverlay<S> {
    pub fn new(data_source: S, options: StickyHeaderOptions) -> Self {
        shdebug!(
            max_cached_headers = options.max_cached_headers,
            enabled = options.enabled,
            "StickyHeaderOverlay::new"
        );
        Self {
            data_source,
            cache: HeaderCache::new(options.max_cached_headers),
            options,
        }
    }

    pub fn with_max_cached_headers(data_source: S, max_cached_headers: usize) -> Self {
        Self::new(
            data_source,
            StickyHeaderOptions::new().with_max_cached_headers(max_cached_headers),
        )
    }

    pub fn data_source(&self) -> &S {
        &self.data_source
    }

    pub fn options(&self) -> &StickyHeaderOptions {
        &self.options
    }

    /// Replaces the options. A changed cache bound drops every cached header.
    pub fn set_options(&mut self, options: StickyHeaderOptions) {
        if options.max_cached_headers != self.cache.max_len() {
            self.cache = HeaderCache::new(options.max_cached_headers);
        }
        self.options = options;
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.options.enabled = enabled;
    }

    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_cached(&self, key: &S::Key) -> bool {
        self.cache.contains(key)
    }

    pub fn cached_header(&self, key: &S::Key) -> Option<&S::View> {
        self.cache.get(key)
    }

    /// Drops every cached header view. They are realized again on the next draw.
    ///
    /// Call this after replacing the dataset, otherwise stale headers keep being drawn.
    pub fn clear_cache(&mut self) {
        shdebug!(len = self.cache.len(), "clear_cache");
        self.cache.clear();
    }

    /// Returns the header view for the header covering `position`, realizing and caching it
    /// on a miss.
    ///
    /// Returns `None` when no header covers `position`, or when the data source cannot locate
    /// the header's own item. Neither case touches the cache.
    pub fn resolve_header<H: ListHost>(&mut self, host: &H, position: usize) -> Option<&S::View> {
        self.resolve_shared(host, position).map(|view| &**view)
    }

    fn resolve_shared<H: ListHost>(
        &mut self,
        host: &H,
        position: usize,
    ) -> Option<&Rc<S::View>> {
        let key = self.data_source.header_key_at(position)?;
        if self.cache.contains(&key) {
            return self.cache.get_shared(&key);
        }

        let Some(header_position) = self.data_source.absolute_position_of(&key) else {
            shwarn!(?key, position, "resolve_header: header has no absolute position");
            return None;
        };

        let view = self.realize(host, header_position);
        shdebug!(?key, position, header_position, "resolve_header: realized");
        Some(self.cache.insert(key, view))
    }

    fn realize<H: ListHost>(&self, host: &H, position: usize) -> S::View {
        let geometry = host.geometry();
        let view_type = self.data_source.item_view_type(position);
        let mut view = self.data_source.create_view(&geometry, view_type);
        self.data_source.bind_view(&mut view, position);

        let params = view.layout_params();
        let width = MeasureSpec::child(
            MeasureSpec::Exactly(geometry.width),
            geometry.padding.horizontal(),
            params.width,
        );
        let height = MeasureSpec::child(
            MeasureSpec::Unspecified(geometry.height),
            geometry.padding.vertical(),
            params.height,
        );
        view.measure(width, height);
        view.layout(Bounds::from_size(view.measured_size()));
        view
    }

    /// Computes where the current header's top edge goes.
    ///
    /// The header follows the first child down while that child is below the top, and sticks
    /// at `0` once it scrolls past. If the second child starts a different header whose view
    /// sits above its own height, that negative offset is returned instead.
    pub fn header_top<H: ListHost>(
        &mut self,
        host: &H,
        first_child: &H::Child,
        position: usize,
    ) -> i32 {
        let top = (first_child.y() as i32).max(0);

        let Some(current) = self.data_source.header_key_at(position) else {
            return top;
        };
        if host.child_count() < 1 {
            return top;
        }

        let Some(next_position) = host.child_at(1).and_then(|next| host.child_position(next))
        else {
            return top;
        };
        let Some(next) = self.data_source.header_key_at(next_position) else {
            return top;
        };
        if next == current {
            return top;
        }

        let Some(next_view) = self.resolve_header(host, next_position) else {
            return top;
        };
        let offset = (next_view.y() as i32).saturating_sub(next_view.height());
        if offset < 0 {
            shtrace!(?current, ?next, offset, "header_top: push-off");
            return offset;
        }
        top
    }

    /// Returns the key of the first cached header whose translated bounds contain `(x, y)`.
    ///
    /// Entries are scanned in the cache's native order, so overlapping headers give no
    /// ordering guarantee.
    pub fn find_header_under(&self, x: f32, y: f32) -> Option<&S::Key> {
        self.cache
            .iter()
            .find(|(_, view)| view.bounds().contains_translated(view.translation(), x, y))
            .map(|(key, _)| key)
    }
}

impl<S: HeaderDataSource + fmt::Debug> fmt::Debug for StickyHeaderOverlay<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StickyHeaderOverlay")
            .field("data_source", &self.data_source)
            .field("options", &self.options)
            .field("cached_len", &self.cache.len())
            .finish_non_exhaustive()
    }
}

impl<S: HeaderDataSource, H: ListHost> DrawOverlay<H> for StickyHeaderOverlay<S> {
    type Canvas = <S::View as HeaderView>::Canvas;

    fn on_draw_over(&mut self, canvas: &mut Self::Canvas, host: &H, _state: &ListState) {
        if !self.options.enabled || host.child_count() == 0 {
            return;
        }
        let Some(child) = host.child_at(0) else {
            return;
        };
        let Some(position) = host.child_position(child) else {
            return;
        };
        // Held across `header_top`, whose next-header insert may clear the cache.
        let Some(view) = self.resolve_shared(host, position).map(Rc::clone) else {
            return;
        };

        let top = self.header_top(host, child, position);
        let left = child.left();
        shtrace!(position, left, top, "on_draw_over");
        canvas.save();
        canvas.translate(left as f32, top as f32);
        view.draw(canvas);
        canvas.restore();
    }
}
