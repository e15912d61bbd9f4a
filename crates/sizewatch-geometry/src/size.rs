//! Size and rectangle value types reported to resize observers.
//!
//! [Resize Observer § 3.3 `ResizeObserverSize`](https://drafts.csswg.org/resize-observer/#resizeobserversize)
//! [Geometry Interfaces § 4 `DOMRectReadOnly`](https://drafts.fxtf.org/geometry/#DOMRect)

use serde::{Deserialize, Serialize};

/// [§ 3.3 `ResizeObserverSize`](https://drafts.csswg.org/resize-observer/#resizeobserversize)
///
/// "The length of the observed box in the inline dimension" and "the length
/// of the observed box in the block dimension". Writing modes are not
/// modelled, so inline is always horizontal.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxSize {
    /// Horizontal extent.
    pub inline_size: f64,
    /// Vertical extent.
    pub block_size: f64,
}

impl BoxSize {
    /// A zero-area size.
    pub const ZERO: Self = Self {
        inline_size: 0.0,
        block_size: 0.0,
    };

    /// Create a size from its inline and block lengths.
    #[must_use]
    pub const fn new(inline_size: f64, block_size: f64) -> Self {
        Self {
            inline_size,
            block_size,
        }
    }

    /// Component-wise multiplication, used for device-pixel sizes.
    #[must_use]
    pub fn scale(self, ratio: f64) -> Self {
        Self {
            inline_size: self.inline_size * ratio,
            block_size: self.block_size * ratio,
        }
    }
}

/// Per-side lengths for padding or border widths.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeSizes {
    /// Top edge size.
    pub top: f64,
    /// Right edge size.
    pub right: f64,
    /// Bottom edge size.
    pub bottom: f64,
    /// Left edge size.
    pub left: f64,
}

impl EdgeSizes {
    /// All four edges zero.
    pub const ZERO: Self = Self {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    /// `left + right`
    #[must_use]
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// `top + bottom`
    #[must_use]
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

/// [§ 4 `DOMRectReadOnly`](https://drafts.fxtf.org/geometry/#DOMRect)
///
/// An immutable rectangle. The edge accessors follow the geometry spec for
/// non-negative sizes: `top`/`left` are the origin and `bottom`/`right` add
/// the height/width.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(into = "DomRectJson")]
pub struct DomRectReadOnly {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl DomRectReadOnly {
    /// "The `DOMRectReadOnly(x, y, width, height)` constructor"
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// "The `fromRect(other)` static method"
    #[must_use]
    pub const fn from_rect(other: &Self) -> Self {
        Self::new(other.x, other.y, other.width, other.height)
    }

    /// Horizontal origin.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Vertical origin.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Width of the rectangle.
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Height of the rectangle.
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Same as `y`.
    #[must_use]
    pub const fn top(&self) -> f64 {
        self.y
    }

    /// Same as `x`.
    #[must_use]
    pub const fn left(&self) -> f64 {
        self.x
    }

    /// `top + height`
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top() + self.height
    }

    /// `left + width`
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left() + self.width
    }

    /// The `toJSON()` shape of the rectangle.
    #[must_use]
    pub fn to_json(&self) -> DomRectJson {
        DomRectJson::from(*self)
    }
}

/// Serialized form of a [`DomRectReadOnly`], with every derived edge spelled out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DomRectJson {
    /// Horizontal origin.
    pub x: f64,
    /// Vertical origin.
    pub y: f64,
    /// Top edge.
    pub top: f64,
    /// Right edge.
    pub right: f64,
    /// Bottom edge.
    pub bottom: f64,
    /// Left edge.
    pub left: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl From<DomRectReadOnly> for DomRectJson {
    fn from(rect: DomRectReadOnly) -> Self {
        Self {
            x: rect.x(),
            y: rect.y(),
            top: rect.top(),
            right: rect.right(),
            bottom: rect.bottom(),
            left: rect.left(),
            width: rect.width(),
            height: rect.height(),
        }
    }
}
