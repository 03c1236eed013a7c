//! Color conversion helpers for theme palettes.

/// A palette color broken into channels for `rgba()` composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Fallback when a palette value cannot be parsed.
const FALLBACK_BLUE: Rgb = Rgb {
    r: 59,
    g: 130,
    b: 246,
};

/// Parse `#rrggbb` (leading `#` optional). Malformed input yields the
/// fallback blue rather than an error; a broken palette entry should never
/// take the page down.
pub fn hex_to_rgb(hex: &str) -> Rgb {
    parse_hex(hex).unwrap_or(FALLBACK_BLUE)
}

/// Channel triple as `"r,g,b"`, the form CSS `rgba(var(--x), a)` expects.
/// Strings already in `rgb(...)` form pass through with the wrapper stripped.
pub fn rgb_string(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.starts_with("rgb") {
        return trimmed
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == ',')
            .collect();
    }

    let rgb = hex_to_rgb(trimmed);
    format!("{},{},{}", rgb.r, rgb.g, rgb.b)
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    let digits = hex.trim().strip_prefix('#').unwrap_or_else(|| hex.trim());
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();

    Some(Rgb {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_with_and_without_hash() {
        assert_eq!(
            hex_to_rgb("#2563eb"),
            Rgb {
                r: 37,
                g: 99,
                b: 235
            }
        );
        assert_eq!(
            hex_to_rgb("2563eb"),
            Rgb {
                r: 37,
                g: 99,
                b: 235
            }
        );
    }

    #[test]
    fn malformed_input_falls_back_to_blue() {
        assert_eq!(hex_to_rgb(""), FALLBACK_BLUE);
        assert_eq!(hex_to_rgb("#12"), FALLBACK_BLUE);
        assert_eq!(hex_to_rgb("#zzzzzz"), FALLBACK_BLUE);
    }

    #[test]
    fn rgb_string_formats_channels() {
        assert_eq!(rgb_string("#0ea5e9"), "14,165,233");
    }

    #[test]
    fn rgb_string_passes_through_rgb_form() {
        assert_eq!(rgb_string("rgb(14, 165, 233)"), "14,165,233");
    }
}
