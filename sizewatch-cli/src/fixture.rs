//! Layout fixtures: an element tree with the answers a layout engine would
//! give for it.

use serde::Deserialize;

use sizewatch_dom::{DomTree, ElementData, Namespace, NodeId};
use sizewatch_geometry::{BoxSize, ComputedStyleDeclaration, StaticLayoutHost};

/// Top-level fixture document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixture {
    /// `window.devicePixelRatio`; 1 when absent.
    pub device_pixel_ratio: Option<f64>,
    /// `navigator.userAgent`, used for engine detection.
    pub user_agent: Option<String>,
    /// Root elements, in document order.
    #[serde(default)]
    pub elements: Vec<FixtureElement>,
}

/// One element and its subtree.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureElement {
    /// Value of the id attribute.
    pub id: Option<String>,
    /// Local name.
    pub tag: String,
    /// `html` (default) or `svg`.
    #[serde(default)]
    pub namespace: FixtureNamespace,
    /// Computed style, keyed by camel-cased property names.
    #[serde(default)]
    pub style: ComputedStyleDeclaration,
    /// `getBBox()` answer for SVG graphics elements.
    pub bbox: Option<BoxSize>,
    /// Child elements, in tree order.
    #[serde(default)]
    pub children: Vec<FixtureElement>,
}

/// Namespace keyword accepted in fixtures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FixtureNamespace {
    /// HTML namespace.
    #[default]
    Html,
    /// SVG namespace.
    Svg,
}

impl From<FixtureNamespace> for Namespace {
    fn from(namespace: FixtureNamespace) -> Self {
        match namespace {
            FixtureNamespace::Html => Self::Html,
            FixtureNamespace::Svg => Self::Svg,
        }
    }
}

impl Fixture {
    /// Parse a fixture from JSON text.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Build a layout host answering with this fixture's values.
    pub fn build_host(&self) -> StaticLayoutHost {
        let mut host = StaticLayoutHost::new(DomTree::new());
        host.set_device_pixel_ratio(self.device_pixel_ratio.unwrap_or(1.0));
        for element in &self.elements {
            add_element(&mut host, NodeId::ROOT, element);
        }
        host
    }
}

fn add_element(host: &mut StaticLayoutHost, parent: NodeId, element: &FixtureElement) {
    let mut data = ElementData {
        tag_name: element.tag.clone(),
        namespace: element.namespace.into(),
        ..ElementData::default()
    };
    if let Some(id) = &element.id {
        let _previous = data.attrs.insert("id".to_string(), id.clone());
    }

    let node = host.dom_mut().append_element(parent, data);
    host.set_style(node, element.style.clone());
    if let Some(bbox) = element.bbox {
        host.set_bbox(node, bbox);
    }
    for child in &element.children {
        add_element(host, node, child);
    }
}
