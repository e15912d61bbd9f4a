//! Rendering-engine capabilities that change how computed sizes are read.

/// Engine quirks injected into the box-size calculation.
///
/// Detection lives in [`EngineProfile::detect`], so the calculation itself
/// never looks at a user-agent string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineProfile {
    /// Computed `width`/`height` already describe the border box and must not
    /// be reduced by padding and border, whatever `box-sizing` says.
    pub legacy_box_sizing: bool,
}

impl EngineProfile {
    /// A standards-conforming engine.
    pub const MODERN: Self = Self {
        legacy_box_sizing: false,
    };

    /// An engine whose computed sizes ignore `box-sizing`.
    pub const LEGACY: Self = Self {
        legacy_box_sizing: true,
    };

    /// Identify the engine from a navigator user-agent string.
    ///
    /// Trident-based engines (`MSIE`, `Trident`) get the legacy profile.
    #[must_use]
    pub fn detect(user_agent: &str) -> Self {
        let ua = user_agent.to_ascii_lowercase();
        if ua.contains("msie") || ua.contains("trident") {
            Self::LEGACY
        } else {
            Self::MODERN
        }
    }
}
