//! Layout queries the box-size calculation consumes from its environment.

use std::collections::HashMap;

use thiserror::Error;

use sizewatch_dom::{DomTree, ElementData, NodeId};

use crate::size::BoxSize;
use crate::style::ComputedStyleDeclaration;

/// The layout primitives a resize observer reads from the rendering engine.
///
/// Errors are the host's own and pass through the calculation untouched.
pub trait LayoutHost {
    /// Failure reported by the host's queries.
    type Error;

    /// [CSSOM § 6.7 `getComputedStyle()`](https://drafts.csswg.org/cssom/#dom-window-getcomputedstyle)
    ///
    /// # Errors
    ///
    /// Host-defined, e.g. when `element` does not exist.
    fn computed_style(&self, element: NodeId) -> Result<ComputedStyleDeclaration, Self::Error>;

    /// [SVG 2 § 5.13 `getBBox()`](https://www.w3.org/TR/SVG2/types.html#__svg__SVGGraphicsElement__getBBox)
    ///
    /// `Some` only for vector-graphics elements that expose an intrinsic
    /// bounding box; `None` for elements governed by the CSS box model.
    ///
    /// # Errors
    ///
    /// Host-defined, e.g. when `element` does not exist.
    fn graphics_bbox(&self, element: NodeId) -> Result<Option<BoxSize>, Self::Error>;

    /// [CSSOM View § 4 `devicePixelRatio`](https://drafts.csswg.org/cssom-view/#dom-window-devicepixelratio)
    fn device_pixel_ratio(&self) -> f64;
}

/// Failure to answer a layout query from a [`StaticLayoutHost`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutHostError {
    /// The id does not address a node in the tree.
    #[error("no node with id {0:?}")]
    UnknownNode(NodeId),
    /// The node exists but is not an element, so it has no computed style.
    #[error("node {0:?} is not an element")]
    NotAnElement(NodeId),
}

/// A host whose layout answers are stored up front.
///
/// Used by the CLI to replay fixtures and by tests to drive the calculation
/// without a rendering engine. Elements with no stored style report an empty
/// declaration; SVG graphics elements with no stored bounding box report a
/// zero box.
#[derive(Debug, Clone)]
pub struct StaticLayoutHost {
    dom: DomTree,
    styles: HashMap<NodeId, ComputedStyleDeclaration>,
    bboxes: HashMap<NodeId, BoxSize>,
    device_pixel_ratio: f64,
}

impl StaticLayoutHost {
    /// A host over `dom` with a device pixel ratio of 1.
    #[must_use]
    pub fn new(dom: DomTree) -> Self {
        Self {
            dom,
            styles: HashMap::new(),
            bboxes: HashMap::new(),
            device_pixel_ratio: 1.0,
        }
    }

    /// The element tree.
    #[must_use]
    pub const fn dom(&self) -> &DomTree {
        &self.dom
    }

    /// Mutable access to the element tree, for adding elements.
    pub const fn dom_mut(&mut self) -> &mut DomTree {
        &mut self.dom
    }

    /// Replace the computed style reported for `element`.
    pub fn set_style(&mut self, element: NodeId, style: ComputedStyleDeclaration) {
        let _previous = self.styles.insert(element, style);
    }

    /// Replace the bounding box reported for an SVG graphics `element`.
    pub fn set_bbox(&mut self, element: NodeId, bbox: BoxSize) {
        let _previous = self.bboxes.insert(element, bbox);
    }

    /// Change the reported device pixel ratio.
    pub const fn set_device_pixel_ratio(&mut self, ratio: f64) {
        self.device_pixel_ratio = ratio;
    }

    fn element(&self, id: NodeId) -> Result<&ElementData, LayoutHostError> {
        if self.dom.get(id).is_none() {
            return Err(LayoutHostError::UnknownNode(id));
        }
        self.dom
            .as_element(id)
            .ok_or(LayoutHostError::NotAnElement(id))
    }
}

impl LayoutHost for StaticLayoutHost {
    type Error = LayoutHostError;

    fn computed_style(&self, element: NodeId) -> Result<ComputedStyleDeclaration, Self::Error> {
        let _data = self.element(element)?;
        Ok(self.styles.get(&element).cloned().unwrap_or_default())
    }

    fn graphics_bbox(&self, element: NodeId) -> Result<Option<BoxSize>, Self::Error> {
        let data = self.element(element)?;
        if !data.is_svg_graphics() {
            return Ok(None);
        }
        Ok(Some(self.bboxes.get(&element).copied().unwrap_or_default()))
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }
}
