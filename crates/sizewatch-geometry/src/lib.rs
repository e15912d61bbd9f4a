//! `ResizeObserver` box-size geometry for sizewatch.
//!
//! # Scope
//!
//! This crate implements:
//! - **Box sizes** ([Resize Observer § 4.4](https://drafts.csswg.org/resize-observer/#calculate-box-size))
//!   - content, scroll, border, and device-pixel border boxes
//!   - the content rect reported on observer entries
//! - **Computed style reading** with lenient `parseFloat`-style lengths
//! - **Engine profiles** for engines whose computed sizes ignore `box-sizing`
//! - **An owned cache** keyed by element identity, with explicit invalidation
//! - **A static layout host** for replaying stored layout answers
//!
//! # Not Implemented
//!
//! - Writing modes (inline is always horizontal)
//! - Observer registration and entry delivery

/// Box-size collection, observed box options, and the calculation entry points.
pub mod box_sizes;
/// Identity-keyed memoization of box sizes.
pub mod cache;
/// The layout-query seam and an in-memory implementation of it.
pub mod host;
/// Injected engine capabilities.
pub mod profile;
/// Size and rectangle value types.
pub mod size;
/// Computed style declarations and length parsing.
pub mod style;

pub use box_sizes::{
    BoxSizeCollection, ElementMetrics, ObservedBox, calculate_box_size, calculate_box_sizes,
};
pub use cache::BoxSizeCache;
pub use host::{LayoutHost, LayoutHostError, StaticLayoutHost};
pub use profile::EngineProfile;
pub use size::{BoxSize, DomRectJson, DomRectReadOnly, EdgeSizes};
pub use style::{BoxSizing, ComputedStyleDeclaration, parse_dimension};
