use std::fmt::Display;

const ASCII_MARKERS: [&str; 2] = ["ascii-display", "const grid=Array(size)"];
const CANVAS_MARKER: &str = "<canvas";

/// The renderer that produced a token's animation HTML.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Renderer {
    Ascii,
    Pixelated,
    Unknown,
}

impl Renderer {
    /// Ascii markers are checked first, so HTML carrying both kinds of
    /// markers is classified as `Ascii`.
    pub fn classify(html: &str) -> Self {
        if ASCII_MARKERS.iter().any(|marker| html.contains(marker)) {
            Renderer::Ascii
        } else if html.contains(CANVAS_MARKER) {
            Renderer::Pixelated
        } else {
            Renderer::Unknown
        }
    }

    pub fn banner(&self) -> &'static str {
        match self {
            Self::Ascii => "✓✓✓ ASCII RENDERER ✓✓✓",
            Self::Pixelated => "✗✗✗ PIXELATED RENDERER (OLD) ✗✗✗",
            Self::Unknown => "??? UNKNOWN ???",
        }
    }
}

impl Display for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Ascii => "ascii",
            Self::Pixelated => "pixelated",
            Self::Unknown => "unknown",
        };

        write!(f, "{label}")
    }
}

/// True when the HTML contains a doubled backslash, a sign of over-escaping
/// in the generating contract.
pub fn has_escaped_backslashes(html: &str) -> bool {
    html.contains("\\\\")
}
