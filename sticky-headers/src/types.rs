/// A layout rectangle in host coordinates (edges, not origin + size).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Bounds {
    /// Bounds anchored at the origin with the given size.
    pub fn from_size(size: Size) -> Self {
        Self {
            left: 0,
            top: 0,
            right: i32::try_from(size.width).unwrap_or(i32::MAX),
            bottom: i32::try_from(size.height).unwrap_or(i32::MAX),
        }
    }

    pub fn width(&self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Inclusive containment test after shifting the bounds by `translation`.
    pub fn contains_translated(&self, translation: Translation, x: f32, y: f32) -> bool {
        x >= self.left as f32 + translation.x
            && x <= self.right as f32 + translation.x
            && y >= self.top as f32 + translation.y
            && y <= self.bottom as f32 + translation.y
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Padding {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Padding {
    pub fn horizontal(&self) -> u32 {
        self.left.saturating_add(self.right)
    }

    pub fn vertical(&self) -> u32 {
        self.top.saturating_add(self.bottom)
    }
}

/// Post-layout offset applied to a view when it is drawn or hit-tested.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Translation {
    pub x: f32,
    pub y: f32,
}

/// The size a view asks for along one axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dimension {
    Exact(u32),
    MatchParent,
    #[default]
    WrapContent,
}

/// Requested width and height of a view, as declared by the view itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutParams {
    pub width: Dimension,
    pub height: Dimension,
}

/// A measurement constraint along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MeasureSpec {
    /// The view must be exactly this size.
    Exactly(u32),
    /// The view may be at most this size.
    AtMost(u32),
    /// No constraint; the value is a hint only.
    Unspecified(u32),
}

impl MeasureSpec {
    pub fn size(self) -> u32 {
        match self {
            Self::Exactly(n) | Self::AtMost(n) | Self::Unspecified(n) => n,
        }
    }

    /// Derives the spec for a child from the parent's spec, the parent's padding along the
    /// axis, and the dimension the child requests.
    pub fn child(parent: MeasureSpec, padding: u32, requested: Dimension) -> MeasureSpec {
        let available = parent.size().saturating_sub(padding);
        match (parent, requested) {
            (_, Dimension::Exact(n)) => Self::Exactly(n),
            (Self::Exactly(_), Dimension::MatchParent) => Self::Exactly(available),
            (Self::Exactly(_), Dimension::WrapContent) => Self::AtMost(available),
            (Self::AtMost(_), _) => Self::AtMost(available),
            (Self::Unspecified(_), _) => Self::Unspecified(available),
        }
    }

    /// Resolves the size a view ends up with given the size it would like.
    pub fn resolve(self, desired: u32) -> u32 {
        match self {
            Self::Exactly(n) => n,
            Self::AtMost(n) => desired.min(n),
            Self::Unspecified(_) => desired,
        }
    }
}

/// Per-frame list state forwarded by the host alongside a draw pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListState {
    /// Number of items in the adapter backing the host.
    pub item_count: usize,
}
