//! Box sizes of an observed element.
//!
//! [Resize Observer § 4.4 Calculate box size](https://drafts.csswg.org/resize-observer/#calculate-box-size)

use std::rc::Rc;

use serde::Serialize;
use strum_macros::{Display, EnumString};

use sizewatch_dom::NodeId;

use crate::cache::BoxSizeCache;
use crate::host::LayoutHost;
use crate::profile::EngineProfile;
use crate::size::{BoxSize, DomRectReadOnly, EdgeSizes};
use crate::style::{BoxSizing, ComputedStyleDeclaration, parse_dimension};

/// [§ 3.1 `ResizeObserverBoxOptions`](https://drafts.csswg.org/resize-observer/#resize-observer-box-options)
///
/// "`ResizeObserver` can observe different kinds of CSS sizes." The keyword
/// form (`"border-box"`, ...) is what callers pass when observing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum ObservedBox {
    /// "Size of the box's content area as defined in CSS2."
    #[default]
    ContentBox,
    /// "Size of the box's border area as defined in CSS2."
    BorderBox,
    /// Content area plus padding: the scrollable area.
    ScrollBox,
    /// Border area scaled to device pixels.
    DevicePixelBorderBox,
}

impl ObservedBox {
    /// Parse a box option keyword, falling back to `content-box` for anything
    /// unrecognized.
    #[must_use]
    pub fn from_option(keyword: &str) -> Self {
        keyword.trim().parse().unwrap_or_default()
    }
}

/// Every box an observation can report for one element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxSizeCollection {
    /// Content + padding + border.
    pub border_box_size: BoxSize,
    /// Content only.
    pub content_box_size: BoxSize,
    /// Content + padding.
    pub scroll_box_size: BoxSize,
    /// Border box scaled by the device pixel ratio.
    pub device_pixel_border_box_size: BoxSize,
    /// [§ 3.4 `ResizeObserverEntry` `contentRect`](https://drafts.csswg.org/resize-observer/#dom-resizeobserverentry-contentrect)
    ///
    /// "Element's content rect when `ResizeObserverCallback` is invoked."
    /// Positioned at the padding offset.
    pub content_rect: DomRectReadOnly,
}

/// Raw layout inputs for one element, as read from a [`LayoutHost`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ElementMetrics {
    /// The element's computed style.
    pub style: ComputedStyleDeclaration,
    /// Intrinsic bounding box, present only for vector-graphics elements.
    pub graphics_bbox: Option<BoxSize>,
}

impl ElementMetrics {
    /// Query `host` for everything the calculation needs about `element`.
    ///
    /// # Errors
    ///
    /// Any error from the host's queries, unchanged.
    pub fn read<H: LayoutHost>(host: &H, element: NodeId) -> Result<Self, H::Error> {
        let graphics_bbox = host.graphics_bbox(element)?;
        let style = host.computed_style(element)?;
        Ok(Self {
            style,
            graphics_bbox,
        })
    }
}

impl BoxSizeCollection {
    /// Derive all boxes from the content size outward.
    ///
    /// ```text
    /// content = width x height
    /// scroll  = content + padding
    /// border  = content + padding + border
    /// device  = border * device_pixel_ratio
    /// ```
    ///
    /// Hidden elements and vector-graphics elements contribute no padding
    /// or border. Hidden elements have no size; vector-graphics elements take
    /// their size from the bounding box. Otherwise, `border-box` sizing on a
    /// modern engine subtracts padding and border from the computed size to
    /// recover the content size.
    #[must_use]
    pub fn from_metrics(
        metrics: &ElementMetrics,
        profile: EngineProfile,
        device_pixel_ratio: f64,
    ) -> Self {
        let style = &metrics.style;
        let hidden = style.is_display_none();
        let ignores_box_model = hidden || metrics.graphics_bbox.is_some();

        let (padding, border) = if ignores_box_model {
            (EdgeSizes::ZERO, EdgeSizes::ZERO)
        } else {
            (style.padding_edges(), style.border_edges())
        };
        let horizontal_padding = padding.horizontal();
        let vertical_padding = padding.vertical();
        let horizontal_border = border.horizontal();
        let vertical_border = border.vertical();

        let remove_padding =
            !profile.legacy_box_sizing && style.parsed_box_sizing() == BoxSizing::BorderBox;
        let (width_reduction, height_reduction) = if remove_padding {
            (
                horizontal_padding + horizontal_border,
                vertical_padding + vertical_border,
            )
        } else {
            (0.0, 0.0)
        };

        let content = match (hidden, metrics.graphics_bbox) {
            (true, _) => BoxSize::ZERO,
            (false, Some(bbox)) => bbox,
            (false, None) => BoxSize::new(
                parse_dimension(&style.width) - width_reduction,
                parse_dimension(&style.height) - height_reduction,
            ),
        };

        let border_box_size = BoxSize::new(
            content.inline_size + horizontal_padding + horizontal_border,
            content.block_size + vertical_padding + vertical_border,
        );

        Self {
            border_box_size,
            content_box_size: content,
            scroll_box_size: BoxSize::new(
                content.inline_size + horizontal_padding,
                content.block_size + vertical_padding,
            ),
            device_pixel_border_box_size: border_box_size.scale(device_pixel_ratio),
            content_rect: DomRectReadOnly::new(
                padding.left,
                padding.top,
                content.inline_size,
                content.block_size,
            ),
        }
    }

    /// Project the size for one observed box.
    #[must_use]
    pub const fn select(&self, observed_box: ObservedBox) -> BoxSize {
        match observed_box {
            ObservedBox::BorderBox => self.border_box_size,
            ObservedBox::ScrollBox => self.scroll_box_size,
            ObservedBox::DevicePixelBorderBox => self.device_pixel_border_box_size,
            ObservedBox::ContentBox => self.content_box_size,
        }
    }
}

/// All box sizes of `element`, computed once and then served from `cache`.
///
/// A cached entry is returned as-is even if the element's layout has changed
/// since; invalidate it in `cache` to force a fresh read.
///
/// # Errors
///
/// Any error from the host's queries, unchanged. Nothing is cached on error.
pub fn calculate_box_sizes<H: LayoutHost>(
    host: &H,
    profile: EngineProfile,
    cache: &mut BoxSizeCache,
    element: NodeId,
) -> Result<Rc<BoxSizeCollection>, H::Error> {
    if let Some(cached) = cache.get(element) {
        return Ok(cached);
    }
    let metrics = ElementMetrics::read(host, element)?;
    let sizes = BoxSizeCollection::from_metrics(&metrics, profile, host.device_pixel_ratio());
    Ok(cache.insert(element, sizes))
}

/// [§ 4.4 Calculate box size](https://drafts.csswg.org/resize-observer/#calculate-box-size)
///
/// The size of `element`'s `observed_box`.
///
/// # Errors
///
/// Any error from the host's queries, unchanged.
pub fn calculate_box_size<H: LayoutHost>(
    host: &H,
    profile: EngineProfile,
    cache: &mut BoxSizeCache,
    element: NodeId,
    observed_box: ObservedBox,
) -> Result<BoxSize, H::Error> {
    let sizes = calculate_box_sizes(host, profile, cache, element)?;
    Ok(sizes.select(observed_box))
}
