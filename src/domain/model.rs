use serde::{Deserialize, Serialize};

/// The text to print. Built once by the argument resolver, read-only after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload(String);

impl Payload {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

/// Axis-aligned rectangle in PostScript points, origin at the top-left of the
/// page and y growing downwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin_left: f32,
    pub margin_top: f32,
    pub margin_right: f32,
    pub margin_bottom: f32,
}

impl Default for PageGeometry {
    /// US Letter with one inch margins.
    fn default() -> Self {
        Self {
            width: 612.0,
            height: 792.0,
            margin_left: 72.0,
            margin_top: 72.0,
            margin_right: 72.0,
            margin_bottom: 72.0,
        }
    }
}

impl PageGeometry {
    /// The printable margin rectangle. Collapses to zero size rather than
    /// going negative when the margins overlap.
    pub fn margin_bounds(&self) -> Rect {
        Rect {
            left: self.margin_left,
            top: self.margin_top,
            width: (self.width - self.margin_left - self.margin_right).max(0.0),
            height: (self.height - self.margin_top - self.margin_bottom).max(0.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSpec {
    pub name: String,
    pub size: f32,
    pub line_spacing: f32,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            name: "Courier".to_string(),
            size: 9.0,
            line_spacing: 1.2,
        }
    }
}

impl FontSpec {
    /// Distance between consecutive baselines.
    pub fn leading(&self) -> f32 {
        self.size * self.line_spacing
    }
}

/// One primitive of the rendered page, in page coordinates (top-left origin).
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    SetFont { name: String, size: f32 },
    Clip(Rect),
    /// Draw `text` with its baseline starting at (`x`, `baseline`).
    Text { x: f32, baseline: f32, text: String },
}

/// A rendered single-page document ready for the print service.
#[derive(Debug, Clone)]
pub struct PrintJob {
    pub title: String,
    pub document: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobReceipt {
    /// Spooler job id, when the service announced one.
    pub job_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margin_bounds_for_letter() {
        let bounds = PageGeometry::default().margin_bounds();
        assert_eq!(bounds.left, 72.0);
        assert_eq!(bounds.top, 72.0);
        assert_eq!(bounds.width, 468.0);
        assert_eq!(bounds.height, 648.0);
        assert_eq!(bounds.right(), 540.0);
        assert_eq!(bounds.bottom(), 720.0);
    }

    #[test]
    fn test_margin_bounds_never_negative() {
        let page = PageGeometry {
            width: 100.0,
            height: 100.0,
            margin_left: 60.0,
            margin_top: 60.0,
            margin_right: 60.0,
            margin_bottom: 60.0,
        };
        let bounds = page.margin_bounds();
        assert_eq!(bounds.width, 0.0);
        assert_eq!(bounds.height, 0.0);
    }

    #[test]
    fn test_payload_blankness() {
        assert!(Payload::new("").is_blank());
        assert!(Payload::new(" \t\r\n").is_blank());
        assert!(!Payload::new("  x ").is_blank());
        assert_eq!(Payload::new("  x ").as_str(), "  x ");
    }
}
