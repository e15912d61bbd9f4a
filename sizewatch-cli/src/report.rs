//! Measuring fixture elements and printing the results.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde::Serialize;

use sizewatch_dom::NodeId;
use sizewatch_geometry::{
    BoxSize, BoxSizeCache, BoxSizeCollection, EngineProfile, ObservedBox, StaticLayoutHost,
    calculate_box_sizes,
};

/// Box sizes of one element.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportEntry {
    /// `#id` when the element has one, otherwise `tag[node]`.
    pub label: String,
    /// Which box `observed_size` reports.
    pub observed_box: String,
    /// The selected box.
    pub observed_size: BoxSize,
    /// Every box.
    pub boxes: BoxSizeCollection,
}

/// Measure every element of `host`, in allocation order.
///
/// # Errors
///
/// The first host error, with the label of the node that caused it.
pub fn measure(
    host: &StaticLayoutHost,
    profile: EngineProfile,
    cache: &mut BoxSizeCache,
    observed_box: ObservedBox,
) -> Result<Vec<ReportEntry>> {
    let elements: Vec<NodeId> = host.dom().elements().collect();
    measure_nodes(host, profile, cache, observed_box, &elements)
}

/// Measure `nodes` of `host`, in the order given.
///
/// # Errors
///
/// The first host error, with the label of the node that caused it.
pub fn measure_nodes(
    host: &StaticLayoutHost,
    profile: EngineProfile,
    cache: &mut BoxSizeCache,
    observed_box: ObservedBox,
    nodes: &[NodeId],
) -> Result<Vec<ReportEntry>> {
    let mut entries = Vec::with_capacity(nodes.len());
    for &node in nodes {
        let boxes = calculate_box_sizes(host, profile, cache, node)
            .with_context(|| format!("measuring {}", label(host, node)))?;
        entries.push(ReportEntry {
            label: label(host, node),
            observed_box: observed_box.to_string(),
            observed_size: boxes.select(observed_box),
            boxes: *boxes,
        });
    }
    Ok(entries)
}

fn label(host: &StaticLayoutHost, node: NodeId) -> String {
    host.dom().as_element(node).map_or_else(
        || format!("[{}]", node.0),
        |data| {
            data.id().map_or_else(
                || format!("{}[{}]", data.tag_name, node.0),
                |id| format!("#{id}"),
            )
        },
    )
}

fn format_size(size: BoxSize) -> String {
    format!("{} x {}", size.inline_size, size.block_size)
}

/// Print entries as an aligned, colored table.
pub fn print_table(entries: &[ReportEntry]) {
    for entry in entries {
        println!(
            "{}  {} {}",
            entry.label.bold().cyan(),
            entry.observed_box.dimmed(),
            format_size(entry.observed_size).green()
        );
        let boxes = &entry.boxes;
        println!("    content-box             {}", format_size(boxes.content_box_size));
        println!("    scroll-box              {}", format_size(boxes.scroll_box_size));
        println!("    border-box              {}", format_size(boxes.border_box_size));
        println!(
            "    device-pixel-border-box {}",
            format_size(boxes.device_pixel_border_box_size)
        );
        let rect = boxes.content_rect;
        println!(
            "    content-rect            ({}, {}) {} x {}",
            rect.x(),
            rect.y(),
            rect.width(),
            rect.height()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sizewatch_dom::{DomTree, ElementData};
    use sizewatch_geometry::{ComputedStyleDeclaration, LayoutHostError};

    /// Helper: a body holding `<div id="card">` and an anonymous `<span>`.
    fn two_element_host() -> (StaticLayoutHost, NodeId, NodeId) {
        let mut dom = DomTree::new();
        let root = dom.root();
        let mut card = ElementData::html("div");
        let _previous = card.attrs.insert("id".to_owned(), "card".to_owned());
        let card = dom.append_element(root, card);
        let span = dom.append_element(root, ElementData::html("span"));

        let mut host = StaticLayoutHost::new(dom);
        host.set_style(
            card,
            ComputedStyleDeclaration::default()
                .display("block")
                .size("40px", "30px"),
        );
        (host, card, span)
    }

    #[test]
    fn test_labels_use_id_then_tag_and_node() {
        let (host, card, span) = two_element_host();

        assert_eq!(label(&host, card), "#card");
        assert_eq!(label(&host, span), format!("span[{}]", span.0));
        assert_eq!(label(&host, host.dom().root()), "[0]");
    }

    #[test]
    fn test_measure_reports_every_element_in_order() {
        let (host, _card, span) = two_element_host();
        let mut cache = BoxSizeCache::new();

        let entries =
            measure(&host, EngineProfile::MODERN, &mut cache, ObservedBox::BorderBox).unwrap();

        let labels: Vec<String> = entries.iter().map(|entry| entry.label.clone()).collect();
        assert_eq!(labels, vec!["#card".to_owned(), format!("span[{}]", span.0)]);
        assert_eq!(entries[0].observed_box, "border-box");
        assert_eq!(entries[0].observed_size, BoxSize::new(40.0, 30.0));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_measure_propagates_unknown_node() {
        let (host, card, _span) = two_element_host();
        let mut cache = BoxSizeCache::new();
        let missing = NodeId(99);

        let error = measure_nodes(
            &host,
            EngineProfile::MODERN,
            &mut cache,
            ObservedBox::ContentBox,
            &[card, missing],
        )
        .unwrap_err();

        assert_eq!(
            error.downcast_ref::<LayoutHostError>(),
            Some(&LayoutHostError::UnknownNode(missing))
        );
        assert!(error.to_string().contains("[99]"));
        assert!(!cache.contains(missing));
    }

    #[test]
    fn test_measure_rejects_non_element_node() {
        let (host, _card, _span) = two_element_host();
        let mut cache = BoxSizeCache::new();
        let root = host.dom().root();

        let error = measure_nodes(
            &host,
            EngineProfile::MODERN,
            &mut cache,
            ObservedBox::ContentBox,
            &[root],
        )
        .unwrap_err();

        assert_eq!(
            error.downcast_ref::<LayoutHostError>(),
            Some(&LayoutHostError::NotAnElement(root))
        );
    }
}
