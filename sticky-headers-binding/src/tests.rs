use crate::*;

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use sticky_headers::{
    Bounds, Canvas, HeaderDataSource, HeaderView, HostGeometry, ListHost, MeasureSpec, Padding,
    Size, StickyHeaderOverlay,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Row {
    section: u32,
    header: bool,
}

fn rows(sections: &[(u32, usize)]) -> Vec<Row> {
    let mut out = Vec::new();
    for &(section, items) in sections {
        out.push(Row {
            section,
            header: true,
        });
        out.extend((0..items).map(|_| Row {
            section,
            header: false,
        }));
    }
    out
}

type Shared = Rc<RefCell<Vec<Row>>>;

struct RowsAdapter {
    rows: Shared,
    updates: usize,
}

impl UpdateDataSet<Row> for RowsAdapter {
    fn update_data_set(&mut self, items: Vec<Row>) {
        *self.rows.borrow_mut() = items;
        self.updates += 1;
    }
}

struct NullCanvas;

impl Canvas for NullCanvas {
    fn save(&mut self) {}
    fn translate(&mut self, _dx: f32, _dy: f32) {}
    fn restore(&mut self) {}
}

struct Label {
    section: u32,
    bounds: Bounds,
}

impl HeaderView for Label {
    type Canvas = NullCanvas;

    fn measure(&mut self, _width: MeasureSpec, _height: MeasureSpec) {}

    fn measured_size(&self) -> Size {
        Size {
            width: 100,
            height: 16,
        }
    }

    fn layout(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn draw(&self, _canvas: &mut NullCanvas) {}
}

struct RowsSource {
    rows: Shared,
}

impl HeaderDataSource for RowsSource {
    type Key = u32;
    type View = Label;
    type ViewType = bool;

    fn header_key_at(&self, position: usize) -> Option<u32> {
        self.rows.borrow().get(position).map(|r| r.section)
    }

    fn absolute_position_of(&self, key: &u32) -> Option<usize> {
        self.rows
            .borrow()
            .iter()
            .position(|r| r.header && r.section == *key)
    }

    fn item_view_type(&self, position: usize) -> bool {
        self.rows.borrow().get(position).is_some_and(|r| r.header)
    }

    fn create_view(&self, _parent: &HostGeometry, _view_type: bool) -> Label {
        Label {
            section: u32::MAX,
            bounds: Bounds::default(),
        }
    }

    fn bind_view(&self, view: &mut Label, position: usize) {
        if let Some(row) = self.rows.borrow().get(position) {
            view.section = row.section;
        }
    }
}

struct NoChild;

impl sticky_headers::ChildView for NoChild {
    fn left(&self) -> i32 {
        0
    }

    fn y(&self) -> f32 {
        0.0
    }
}

#[derive(Default)]
struct Host {
    adapter: Option<Box<dyn Any>>,
}

impl AdapterHost for Host {
    fn adapter_mut(&mut self) -> Option<&mut dyn Any> {
        self.adapter.as_deref_mut()
    }
}

impl ListHost for Host {
    type Child = NoChild;

    fn width(&self) -> u32 {
        100
    }

    fn height(&self) -> u32 {
        200
    }

    fn padding(&self) -> Padding {
        Padding::default()
    }

    fn child_count(&self) -> usize {
        0
    }

    fn child_at(&self, _index: usize) -> Option<&NoChild> {
        None
    }

    fn child_position(&self, _child: &NoChild) -> Option<usize> {
        None
    }
}

fn setup(initial: Vec<Row>) -> (Host, Shared, StickyHeaderOverlay<RowsSource>) {
    let shared: Shared = Rc::new(RefCell::new(initial));
    let host = Host {
        adapter: Some(Box::new(RowsAdapter {
            rows: Rc::clone(&shared),
            updates: 0,
        })),
    };
    let overlay = StickyHeaderOverlay::with_max_cached_headers(
        RowsSource {
            rows: Rc::clone(&shared),
        },
        10,
    );
    (host, shared, overlay)
}

fn updates(host: &mut Host) -> usize {
    host.adapter_mut()
        .and_then(|a| a.downcast_mut::<RowsAdapter>())
        .map(|a| a.updates)
        .unwrap_or_default()
}

#[test]
fn bind_items_forwards_the_dataset() {
    let (mut host, shared, _overlay) = setup(rows(&[(0, 2)]));

    bind_items::<RowsAdapter, _, _>(&mut host, rows(&[(0, 1), (1, 1)])).unwrap();

    assert_eq!(shared.borrow().len(), 4);
    assert_eq!(updates(&mut host), 1);
}

#[test]
fn bind_items_rejects_a_foreign_adapter() {
    let mut host = Host {
        adapter: Some(Box::new(String::from("not an adapter"))),
    };

    let err = bind_items::<RowsAdapter, _, _>(&mut host, rows(&[(0, 1)])).unwrap_err();
    assert!(matches!(
        err,
        BindingError::AdapterMismatch { expected } if expected.ends_with("RowsAdapter")
    ));
    assert!(err.to_string().starts_with("binding works only with"));
}

#[test]
fn bind_items_rejects_a_host_without_adapter() {
    let mut host = Host::default();

    let err = bind_items::<RowsAdapter, _, _>(&mut host, Vec::<Row>::new()).unwrap_err();
    assert!(matches!(err, BindingError::MissingAdapter { .. }));
}

#[test]
fn replace_data_set_drops_stale_headers() {
    let (mut host, shared, mut overlay) = setup(rows(&[(0, 2), (1, 2)]));
    let probe = Host::default();

    assert_eq!(overlay.resolve_header(&probe, 1).unwrap().section, 0);
    assert_eq!(overlay.resolve_header(&probe, 4).unwrap().section, 1);
    assert_eq!(overlay.cached_len(), 2);

    // Section 1 now comes first.
    replace_data_set::<RowsAdapter, _, _, _>(&mut host, rows(&[(1, 1), (0, 3)]), &mut overlay)
        .unwrap();

    assert_eq!(shared.borrow()[0].section, 1);
    assert_eq!(overlay.cached_len(), 0);
    assert_eq!(overlay.resolve_header(&probe, 1).unwrap().section, 1);
    assert_eq!(overlay.data_source().absolute_position_of(&0), Some(2));
}

#[test]
fn failed_replace_keeps_the_cache() {
    let (_, _shared, mut overlay) = setup(rows(&[(0, 2)]));
    let probe = Host::default();
    overlay.resolve_header(&probe, 0);

    let mut foreign = Host {
        adapter: Some(Box::new(7u8)),
    };
    let err =
        replace_data_set::<RowsAdapter, _, _, _>(&mut foreign, rows(&[(3, 1)]), &mut overlay)
            .unwrap_err();

    assert!(matches!(err, BindingError::AdapterMismatch { .. }));
    assert_eq!(overlay.cached_len(), 1);
}
