//! The stroke geometry payload.

use serde::Deserialize;
use serde::Serialize;

/// The coordinate system dimensions of a glyph.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewBox {
    /// The width of the coordinate system.
    pub width: f64,

    /// The height of the coordinate system.
    pub height: f64,
}

impl Default for ViewBox {
    fn default() -> Self {
        // Make Me a Hanzi glyphs are drawn on a 1024x1024 canvas.
        Self {
            width: 1024.0,
            height: 1024.0,
        }
    }
}

/// Stroke geometry for one character.
///
/// This is the shape of the `strokeOrder` field of a deck document's
/// character entries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrokeOrder {
    /// SVG path strings, one per stroke, in drawing order.
    pub strokes: Vec<String>,

    /// Median points for each stroke, as `[x, y]` pairs.
    pub medians: Option<Vec<Vec<[f64; 2]>>>,

    /// The dataset the geometry came from.
    pub source: String,

    /// The coordinate system of the stroke paths.
    pub view_box: ViewBox,
}
