//! Integration tests for box-size calculation against a static layout host.
#![allow(clippy::float_cmp)]

use std::rc::Rc;

use sizewatch_dom::{DomTree, ElementData, NodeId, NodeType};
use sizewatch_geometry::{
    BoxSize, BoxSizeCache, ComputedStyleDeclaration, EngineProfile, LayoutHostError,
    ObservedBox, StaticLayoutHost, calculate_box_size, calculate_box_sizes,
};

/// Helper: a host containing one HTML element with the given style.
fn host_with_style(style: ComputedStyleDeclaration) -> (StaticLayoutHost, NodeId) {
    let mut dom = DomTree::new();
    let div = dom.append_element(NodeId::ROOT, ElementData::html("div"));
    let mut host = StaticLayoutHost::new(dom);
    host.set_style(div, style);
    (host, div)
}

/// Helper: padding 10px, border 2px, 100px x 50px.
fn padded_style(box_sizing: &str) -> ComputedStyleDeclaration {
    ComputedStyleDeclaration::default()
        .display("block")
        .box_sizing(box_sizing)
        .padding("10px")
        .border_width("2px")
        .size("100px", "50px")
}

#[test]
fn test_content_box_scenario() {
    let (host, div) = host_with_style(padded_style("content-box"));
    let mut cache = BoxSizeCache::new();

    let sizes = calculate_box_sizes(&host, EngineProfile::MODERN, &mut cache, div).unwrap();

    assert_eq!(sizes.content_box_size, BoxSize::new(100.0, 50.0));
    assert_eq!(sizes.scroll_box_size, BoxSize::new(120.0, 70.0));
    assert_eq!(sizes.border_box_size, BoxSize::new(124.0, 74.0));
    assert_eq!(sizes.device_pixel_border_box_size, BoxSize::new(124.0, 74.0));
}

#[test]
fn test_content_rect_sits_at_padding_offset() {
    let style = padded_style("content-box");
    let style = ComputedStyleDeclaration {
        padding_left: "7px".to_string(),
        padding_top: "3px".to_string(),
        ..style
    };
    let (host, div) = host_with_style(style);
    let mut cache = BoxSizeCache::new();

    let rect = calculate_box_sizes(&host, EngineProfile::MODERN, &mut cache, div)
        .unwrap()
        .content_rect;

    assert_eq!(rect.x(), 7.0);
    assert_eq!(rect.y(), 3.0);
    assert_eq!(rect.width(), 100.0);
    assert_eq!(rect.height(), 50.0);
}

#[test]
fn test_border_box_sizing_subtracts_padding_and_border() {
    let (host, div) = host_with_style(padded_style("border-box"));
    let mut cache = BoxSizeCache::new();

    let sizes = calculate_box_sizes(&host, EngineProfile::MODERN, &mut cache, div).unwrap();

    assert_eq!(sizes.content_box_size, BoxSize::new(76.0, 26.0));
    // The computed size is recovered as the border box.
    assert_eq!(sizes.border_box_size, BoxSize::new(100.0, 50.0));
}

#[test]
fn test_legacy_engine_ignores_box_sizing() {
    let (host, div) = host_with_style(padded_style("border-box"));
    let mut cache = BoxSizeCache::new();

    let sizes = calculate_box_sizes(&host, EngineProfile::LEGACY, &mut cache, div).unwrap();

    assert_eq!(sizes.content_box_size, BoxSize::new(100.0, 50.0));
    assert_eq!(sizes.border_box_size, BoxSize::new(124.0, 74.0));
}

#[test]
fn test_hidden_element_is_zero_everywhere() {
    let (host, div) = host_with_style(padded_style("content-box").display("none"));
    let mut cache = BoxSizeCache::new();

    let sizes = calculate_box_sizes(&host, EngineProfile::MODERN, &mut cache, div).unwrap();

    assert_eq!(sizes.content_box_size, BoxSize::ZERO);
    assert_eq!(sizes.scroll_box_size, BoxSize::ZERO);
    assert_eq!(sizes.border_box_size, BoxSize::ZERO);
    assert_eq!(sizes.device_pixel_border_box_size, BoxSize::ZERO);
    assert_eq!(sizes.content_rect.x(), 0.0);
    assert_eq!(sizes.content_rect.y(), 0.0);
    assert_eq!(sizes.content_rect.width(), 0.0);
    assert_eq!(sizes.content_rect.height(), 0.0);
}

#[test]
fn test_svg_graphics_uses_bounding_box() {
    let mut dom = DomTree::new();
    let svg = dom.append_element(NodeId::ROOT, ElementData::svg("svg"));
    let rect = dom.append_element(svg, ElementData::svg("rect"));
    let mut host = StaticLayoutHost::new(dom);
    host.set_style(rect, padded_style("content-box"));
    host.set_bbox(rect, BoxSize::new(40.0, 30.0));
    let mut cache = BoxSizeCache::new();

    let sizes = calculate_box_sizes(&host, EngineProfile::MODERN, &mut cache, rect).unwrap();

    // Padding and border are ignored for graphics elements.
    assert_eq!(sizes.content_box_size, BoxSize::new(40.0, 30.0));
    assert_eq!(sizes.border_box_size, BoxSize::new(40.0, 30.0));
    assert_eq!(sizes.scroll_box_size, BoxSize::new(40.0, 30.0));
    assert_eq!(sizes.content_rect.x(), 0.0);
}

#[test]
fn test_hidden_svg_graphics_is_zero() {
    let mut dom = DomTree::new();
    let circle = dom.append_element(NodeId::ROOT, ElementData::svg("circle"));
    let mut host = StaticLayoutHost::new(dom);
    host.set_style(circle, ComputedStyleDeclaration::default().display("none"));
    host.set_bbox(circle, BoxSize::new(10.0, 10.0));
    let mut cache = BoxSizeCache::new();

    let sizes = calculate_box_sizes(&host, EngineProfile::MODERN, &mut cache, circle).unwrap();

    assert_eq!(sizes.border_box_size, BoxSize::ZERO);
}

#[test]
fn test_non_graphics_svg_uses_css_box_model() {
    let mut dom = DomTree::new();
    let defs = dom.append_element(NodeId::ROOT, ElementData::svg("defs"));
    let mut host = StaticLayoutHost::new(dom);
    host.set_style(defs, padded_style("content-box"));
    host.set_bbox(defs, BoxSize::new(1.0, 1.0));
    let mut cache = BoxSizeCache::new();

    let sizes = calculate_box_sizes(&host, EngineProfile::MODERN, &mut cache, defs).unwrap();

    assert_eq!(sizes.border_box_size, BoxSize::new(124.0, 74.0));
}

#[test]
fn test_device_pixel_ratio_scales_border_box() {
    let (mut host, div) = host_with_style(padded_style("content-box"));
    host.set_device_pixel_ratio(1.5);
    let mut cache = BoxSizeCache::new();

    let sizes = calculate_box_sizes(&host, EngineProfile::MODERN, &mut cache, div).unwrap();

    assert_eq!(sizes.device_pixel_border_box_size, BoxSize::new(186.0, 111.0));
}

#[test]
fn test_malformed_values_degrade_to_zero() {
    let style = ComputedStyleDeclaration::default()
        .padding("garbage")
        .border_width("")
        .size("auto", "12px");
    let (host, div) = host_with_style(style);
    let mut cache = BoxSizeCache::new();

    let sizes = calculate_box_sizes(&host, EngineProfile::MODERN, &mut cache, div).unwrap();

    assert_eq!(sizes.content_box_size, BoxSize::new(0.0, 12.0));
    assert_eq!(sizes.border_box_size, BoxSize::new(0.0, 12.0));
}

#[test]
fn test_element_without_style_is_zero() {
    let mut dom = DomTree::new();
    let span = dom.append_element(NodeId::ROOT, ElementData::html("span"));
    let host = StaticLayoutHost::new(dom);
    let mut cache = BoxSizeCache::new();

    let sizes = calculate_box_sizes(&host, EngineProfile::MODERN, &mut cache, span).unwrap();

    assert_eq!(sizes.border_box_size, BoxSize::ZERO);
}

#[test]
fn test_second_call_returns_cached_allocation() {
    let (mut host, div) = host_with_style(padded_style("content-box"));
    let mut cache = BoxSizeCache::new();

    let first = calculate_box_sizes(&host, EngineProfile::MODERN, &mut cache, div).unwrap();
    host.set_style(div, padded_style("content-box").size("300px", "300px"));
    let second = calculate_box_sizes(&host, EngineProfile::MODERN, &mut cache, div).unwrap();

    assert!(Rc::ptr_eq(&first, &second));
    assert_eq!(second.content_box_size, BoxSize::new(100.0, 50.0));
}

#[test]
fn test_invalidate_forces_fresh_read() {
    let (mut host, div) = host_with_style(padded_style("content-box"));
    let mut cache = BoxSizeCache::new();

    let first = calculate_box_sizes(&host, EngineProfile::MODERN, &mut cache, div).unwrap();
    host.set_style(div, padded_style("content-box").size("300px", "300px"));
    assert!(cache.invalidate(div));
    let second = calculate_box_sizes(&host, EngineProfile::MODERN, &mut cache, div).unwrap();

    assert!(!Rc::ptr_eq(&first, &second));
    assert_eq!(second.content_box_size, BoxSize::new(300.0, 300.0));
}

#[test]
fn test_select_each_observed_box() {
    let (mut host, div) = host_with_style(padded_style("content-box"));
    host.set_device_pixel_ratio(2.0);
    let mut cache = BoxSizeCache::new();
    let mut size = |observed_box| {
        calculate_box_size(&host, EngineProfile::MODERN, &mut cache, div, observed_box).unwrap()
    };

    assert_eq!(size(ObservedBox::ContentBox), BoxSize::new(100.0, 50.0));
    assert_eq!(size(ObservedBox::ScrollBox), BoxSize::new(120.0, 70.0));
    assert_eq!(size(ObservedBox::BorderBox), BoxSize::new(124.0, 74.0));
    assert_eq!(
        size(ObservedBox::DevicePixelBorderBox),
        BoxSize::new(248.0, 148.0)
    );
}

#[test]
fn test_unknown_box_option_selects_content_box() {
    let (host, div) = host_with_style(padded_style("content-box"));
    let mut cache = BoxSizeCache::new();

    let unknown = ObservedBox::from_option("margin-box");
    let fallback = calculate_box_size(&host, EngineProfile::MODERN, &mut cache, div, unknown);
    let content = calculate_box_size(
        &host,
        EngineProfile::MODERN,
        &mut cache,
        div,
        ObservedBox::ContentBox,
    );

    assert_eq!(fallback, content);
}

#[test]
fn test_host_errors_propagate_and_are_not_cached() {
    let mut dom = DomTree::new();
    let text = dom.alloc(NodeType::Text("hi".to_string()));
    dom.append_child(NodeId::ROOT, text);
    let host = StaticLayoutHost::new(dom);
    let mut cache = BoxSizeCache::new();

    assert_eq!(
        calculate_box_sizes(&host, EngineProfile::MODERN, &mut cache, NodeId(99)),
        Err(LayoutHostError::UnknownNode(NodeId(99)))
    );
    assert_eq!(
        calculate_box_sizes(&host, EngineProfile::MODERN, &mut cache, text),
        Err(LayoutHostError::NotAnElement(text))
    );
    assert!(cache.is_empty());
}
