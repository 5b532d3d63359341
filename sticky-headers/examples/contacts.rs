// Example: an alphabetical contact list with one sticky header per initial letter.
use sticky_headers::{
    Bounds, Canvas, ChildView, DrawOverlay, HeaderDataSource, HeaderView, HostGeometry, ListHost,
    ListState, MeasureSpec, Padding, Size, StickyHeaderOverlay,
};

const ROW_HEIGHT: f32 = 20.0;

enum Row {
    Letter(char),
    Contact(&'static str),
}

struct Contacts {
    rows: Vec<Row>,
}

impl Contacts {
    fn new(names: &[&'static str]) -> Self {
        let mut rows = Vec::new();
        let mut last = None;
        for &name in names {
            let initial = name.chars().next().unwrap_or('#');
            if last != Some(initial) {
                rows.push(Row::Letter(initial));
                last = Some(initial);
            }
            rows.push(Row::Contact(name));
        }
        Self { rows }
    }
}

#[derive(Clone, Copy)]
enum RowKind {
    Letter,
    Contact,
}

struct LetterView {
    letter: char,
    measured: Size,
    bounds: Bounds,
}

impl HeaderView for LetterView {
    type Canvas = TextCanvas;

    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) {
        self.measured = Size {
            width: width.resolve(80),
            height: height.resolve(ROW_HEIGHT as u32),
        };
    }

    fn measured_size(&self) -> Size {
        self.measured
    }

    fn layout(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn draw(&self, canvas: &mut TextCanvas) {
        canvas.print(&format!("[{}]", self.letter));
    }
}

impl HeaderDataSource for Contacts {
    type Key = char;
    type View = LetterView;
    type ViewType = RowKind;

    fn header_key_at(&self, position: usize) -> Option<char> {
        self.rows
            .iter()
            .take(position.saturating_add(1))
            .rev()
            .find_map(|row| match row {
                Row::Letter(c) => Some(*c),
                Row::Contact(_) => None,
            })
    }

    fn absolute_position_of(&self, key: &char) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| matches!(row, Row::Letter(c) if c == key))
    }

    fn item_view_type(&self, position: usize) -> RowKind {
        match self.rows.get(position) {
            Some(Row::Letter(_)) => RowKind::Letter,
            _ => RowKind::Contact,
        }
    }

    fn create_view(&self, _parent: &HostGeometry, _view_type: RowKind) -> LetterView {
        LetterView {
            letter: '?',
            measured: Size::default(),
            bounds: Bounds::default(),
        }
    }

    fn bind_view(&self, view: &mut LetterView, position: usize) {
        if let Some(Row::Letter(c)) = self.rows.get(position) {
            view.letter = *c;
        }
    }
}

struct Child {
    position: usize,
    y: f32,
}

impl ChildView for Child {
    fn left(&self) -> i32 {
        0
    }

    fn y(&self) -> f32 {
        self.y
    }
}

/// A viewport showing `visible` rows starting at a fractional scroll offset.
struct Viewport {
    children: Vec<Child>,
}

impl Viewport {
    fn scrolled_to(offset: f32, visible: usize, count: usize) -> Self {
        let first = (offset / ROW_HEIGHT) as usize;
        let children = (first..(first + visible).min(count))
            .map(|position| Child {
                position,
                y: position as f32 * ROW_HEIGHT - offset,
            })
            .collect();
        Self { children }
    }
}

impl ListHost for Viewport {
    type Child = Child;

    fn width(&self) -> u32 {
        320
    }

    fn height(&self) -> u32 {
        (self.children.len() as f32 * ROW_HEIGHT) as u32
    }

    fn padding(&self) -> Padding {
        Padding::default()
    }

    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn child_at(&self, index: usize) -> Option<&Child> {
        self.children.get(index)
    }

    fn child_position(&self, child: &Child) -> Option<usize> {
        Some(child.position)
    }
}

#[derive(Default)]
struct TextCanvas {
    dy: f32,
    stack: Vec<f32>,
}

impl TextCanvas {
    fn print(&self, text: &str) {
        println!("  draw {text} at y={}", self.dy);
    }
}

impl Canvas for TextCanvas {
    fn save(&mut self) {
        self.stack.push(self.dy);
    }

    fn translate(&mut self, _dx: f32, dy: f32) {
        self.dy += dy;
    }

    fn restore(&mut self) {
        self.dy = self.stack.pop().unwrap_or(0.0);
    }
}

fn main() {
    let contacts = Contacts::new(&["Ada", "Alan", "Barbara", "Brian", "Claude", "Dennis"]);
    let count = contacts.rows.len();
    let mut overlay = StickyHeaderOverlay::with_max_cached_headers(contacts, 8);
    let state = ListState { item_count: count };

    for offset in [0.0f32, 10.0, 30.0, 45.0, 60.0, 75.0] {
        let viewport = Viewport::scrolled_to(offset, 4, count);
        println!("scroll offset {offset}:");
        let mut canvas = TextCanvas::default();
        overlay.on_draw_over(&mut canvas, &viewport, &state);
    }
    println!("cached headers: {}", overlay.cached_len());
}
