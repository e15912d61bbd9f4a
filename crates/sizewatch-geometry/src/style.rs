//! Computed style as the host reports it, and the lenient number parsing
//! applied to it.
//!
//! [CSSOM § 6.7 `getComputedStyle()`](https://drafts.csswg.org/cssom/#dom-window-getcomputedstyle)

use serde::Deserialize;
use strum_macros::{Display, EnumString};

use sizewatch_common::warning::warn_once;

use crate::size::EdgeSizes;

/// The subset of a `CSSStyleDeclaration` the box-size calculation reads.
///
/// Values are kept as the strings a computed style would return
/// (`"10px"`, `"border-box"`, `"none"`). Missing properties are empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComputedStyleDeclaration {
    /// `display`
    pub display: String,
    /// `box-sizing`
    pub box_sizing: String,
    /// `padding-top`
    pub padding_top: String,
    /// `padding-right`
    pub padding_right: String,
    /// `padding-bottom`
    pub padding_bottom: String,
    /// `padding-left`
    pub padding_left: String,
    /// `border-top-width`
    pub border_top_width: String,
    /// `border-right-width`
    pub border_right_width: String,
    /// `border-bottom-width`
    pub border_bottom_width: String,
    /// `border-left-width`
    pub border_left_width: String,
    /// `width`
    pub width: String,
    /// `height`
    pub height: String,
}

impl ComputedStyleDeclaration {
    /// Set `display`.
    #[must_use]
    pub fn display(mut self, value: &str) -> Self {
        self.display = value.to_string();
        self
    }

    /// Set `box-sizing`.
    #[must_use]
    pub fn box_sizing(mut self, value: &str) -> Self {
        self.box_sizing = value.to_string();
        self
    }

    /// Set all four `padding-*` longhands to the same value.
    #[must_use]
    pub fn padding(mut self, value: &str) -> Self {
        self.padding_top = value.to_string();
        self.padding_right = value.to_string();
        self.padding_bottom = value.to_string();
        self.padding_left = value.to_string();
        self
    }

    /// Set all four `border-*-width` longhands to the same value.
    #[must_use]
    pub fn border_width(mut self, value: &str) -> Self {
        self.border_top_width = value.to_string();
        self.border_right_width = value.to_string();
        self.border_bottom_width = value.to_string();
        self.border_left_width = value.to_string();
        self
    }

    /// Set `width` and `height`.
    #[must_use]
    pub fn size(mut self, width: &str, height: &str) -> Self {
        self.width = width.to_string();
        self.height = height.to_string();
        self
    }

    /// [§ 2.5 Box Generation](https://www.w3.org/TR/css-display-3/#box-generation)
    ///
    /// "`none`: The element and its descendants generate no boxes or text runs."
    #[must_use]
    pub fn is_display_none(&self) -> bool {
        self.display.trim() == "none"
    }

    /// The parsed `box-sizing` value.
    #[must_use]
    pub fn parsed_box_sizing(&self) -> BoxSizing {
        BoxSizing::from_computed(&self.box_sizing)
    }

    /// Padding widths, unparseable sides reading as zero.
    #[must_use]
    pub fn padding_edges(&self) -> EdgeSizes {
        EdgeSizes {
            top: parse_dimension(&self.padding_top),
            right: parse_dimension(&self.padding_right),
            bottom: parse_dimension(&self.padding_bottom),
            left: parse_dimension(&self.padding_left),
        }
    }

    /// Border widths, unparseable sides reading as zero.
    #[must_use]
    pub fn border_edges(&self) -> EdgeSizes {
        EdgeSizes {
            top: parse_dimension(&self.border_top_width),
            right: parse_dimension(&self.border_right_width),
            bottom: parse_dimension(&self.border_bottom_width),
            left: parse_dimension(&self.border_left_width),
        }
    }
}

/// [§ 4.4 box-sizing](https://www.w3.org/TR/css-sizing-3/#box-sizing)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum BoxSizing {
    /// "This is the behavior of width and height as specified by CSS2.1.
    /// The specified width and height apply to the width and height
    /// respectively of the content box of the element."
    #[default]
    ContentBox,
    /// "Length and percentages values for width and height on this element
    /// determine the border box of the element."
    BorderBox,
}

impl BoxSizing {
    /// Parse a computed `box-sizing` string. Anything unrecognized is the
    /// initial value, `content-box`.
    #[must_use]
    pub fn from_computed(value: &str) -> Self {
        value.trim().parse().unwrap_or_default()
    }
}

/// Parse the leading number of a computed length such as `"12.5px"`.
///
/// Follows `parseFloat`: leading whitespace is skipped and everything after
/// the longest numeric prefix is ignored. An empty value is zero. A value
/// with no numeric prefix (`"auto"`) is also zero, and is reported once.
#[must_use]
pub fn parse_dimension(value: &str) -> f64 {
    let trimmed = value.trim_start();
    if trimmed.is_empty() {
        return 0.0;
    }
    leading_number(trimmed).unwrap_or_else(|| {
        warn_once(
            "Geometry",
            &format!("unparseable dimension '{value}', using 0"),
        );
        0.0
    })
}

fn leading_number(input: &str) -> Option<f64> {
    let bytes = input.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if input[end..].starts_with("Infinity") {
        let sign = if bytes[0] == b'-' { -1.0 } else { 1.0 };
        return Some(sign * f64::INFINITY);
    }

    let integer_digits = digits_from(end);
    end += integer_digits;

    let mut fraction_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction_digits = digits_from(end + 1);
        if integer_digits > 0 || fraction_digits > 0 {
            end += 1 + fraction_digits;
        }
    }
    if integer_digits == 0 && fraction_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
            exponent_end += 1;
        }
        let exponent_digits = digits_from(exponent_end);
        if exponent_digits > 0 {
            end = exponent_end + exponent_digits;
        }
    }

    input[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_number_forms() {
        assert_eq!(leading_number("10px"), Some(10.0));
        assert_eq!(leading_number("-3.5em"), Some(-3.5));
        assert_eq!(leading_number(".5"), Some(0.5));
        assert_eq!(leading_number("5."), Some(5.0));
        assert_eq!(leading_number("1e2px"), Some(100.0));
        assert_eq!(leading_number("2e"), Some(2.0));
        assert_eq!(leading_number("+Infinity"), Some(f64::INFINITY));
        assert_eq!(leading_number("auto"), None);
        assert_eq!(leading_number("."), None);
        assert_eq!(leading_number("-"), None);
    }
}
