//! Traits the host toolkit implements so the overlay can read its viewport, realize header
//! views and draw them.

use crate::{Bounds, LayoutParams, ListState, MeasureSpec, Padding, Size, Translation};

/// A drawing surface that supports a saved transform stack.
pub trait Canvas {
    fn save(&mut self);
    fn translate(&mut self, dx: f32, dy: f32);
    fn restore(&mut self);
}

/// A visible child of the list host.
pub trait ChildView {
    /// Left edge in host coordinates.
    fn left(&self) -> i32;
    /// Current vertical coordinate (layout top plus any translation).
    fn y(&self) -> f32;
}

/// A scrollable list container.
pub trait ListHost {
    type Child: ChildView;

    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn padding(&self) -> Padding;

    fn child_count(&self) -> usize;
    fn child_at(&self, index: usize) -> Option<&Self::Child>;
    /// Absolute list position of a visible child, or `None` when the child is not bound to a
    /// position (e.g. it is being removed).
    fn child_position(&self, child: &Self::Child) -> Option<usize>;

    /// Snapshot of the geometry header views are realized against.
    fn geometry(&self) -> HostGeometry {
        HostGeometry {
            width: self.width(),
            height: self.height(),
            padding: self.padding(),
        }
    }
}

/// Host geometry captured at realization time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HostGeometry {
    pub width: u32,
    pub height: u32,
    pub padding: Padding,
}

/// A realized header display object.
pub trait HeaderView {
    /// The surface this view draws into.
    type Canvas: Canvas + ?Sized;

    fn layout_params(&self) -> LayoutParams {
        LayoutParams::default()
    }

    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec);
    fn measured_size(&self) -> Size;

    fn layout(&mut self, bounds: Bounds);
    fn bounds(&self) -> Bounds;

    fn translation(&self) -> Translation {
        Translation::default()
    }

    /// Current vertical coordinate: layout top plus translation.
    fn y(&self) -> f32 {
        self.bounds().top as f32 + self.translation().y
    }

    fn height(&self) -> i32 {
        self.bounds().height()
    }

    fn draw(&self, canvas: &mut Self::Canvas);
}

/// Answers header-coverage queries and realizes header views.
pub trait HeaderDataSource {
    type Key: crate::HeaderKey;
    type View: HeaderView;
    type ViewType: Copy;

    /// Key of the header that logically covers `position`, if any.
    fn header_key_at(&self, position: usize) -> Option<Self::Key>;
    /// Absolute position of the header's own item, or `None` when it cannot be found.
    fn absolute_position_of(&self, key: &Self::Key) -> Option<usize>;
    fn item_view_type(&self, position: usize) -> Self::ViewType;
    fn create_view(&self, parent: &HostGeometry, view_type: Self::ViewType) -> Self::View;
    fn bind_view(&self, view: &mut Self::View, position: usize);
}

macro_rules! forward_data_source {
    ($($ptr:ty),* $(,)?) => {
        $(
            impl<S: HeaderDataSource + ?Sized> HeaderDataSource for $ptr {
                type Key = S::Key;
                type View = S::View;
                type ViewType = S::ViewType;

                fn header_key_at(&self, position: usize) -> Option<Self::Key> {
                    (**self).header_key_at(position)
                }

                fn absolute_position_of(&self, key: &Self::Key) -> Option<usize> {
                    (**self).absolute_position_of(key)
                }

                fn item_view_type(&self, position: usize) -> Self::ViewType {
                    (**self).item_view_type(position)
                }

                fn create_view(
                    &self,
                    parent: &HostGeometry,
                    view_type: Self::ViewType,
                ) -> Self::View {
                    (**self).create_view(parent, view_type)
                }

                fn bind_view(&self, view: &mut Self::View, position: usize) {
                    (**self).bind_view(view, position)
                }
            }
        )*
    };
}

forward_data_source!(&S, alloc::rc::Rc<S>, alloc::sync::Arc<S>);

/// A hook the host calls once per frame after its own items have been drawn.
pub trait DrawOverlay<H: ListHost> {
    type Canvas: Canvas + ?Sized;

    fn on_draw_over(&mut self, canvas: &mut Self::Canvas, host: &H, state: &ListState);
}
