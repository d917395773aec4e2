use plotters::style::{RGBAColor, RGBColor};

use crate::types::Theme;

/// Series colors, assigned by selection index and cycled.
pub const VARIATION_COLORS: [RGBColor; 4] = [
    RGBColor(0x3b, 0x82, 0xf6), // blue
    RGBColor(0x10, 0xb9, 0x81), // emerald
    RGBColor(0xf5, 0x9e, 0x0b), // amber
    RGBColor(0xef, 0x44, 0x44), // red
];

pub fn variation_color(index: usize) -> RGBColor {
    VARIATION_COLORS[index % VARIATION_COLORS.len()]
}

/// Chart theme configuration
#[derive(Clone, Copy, Debug)]
pub struct ChartTheme {
    pub background_color: RGBAColor,
    pub text_color: RGBAColor,
    pub grid_color: RGBAColor,
    pub axis_color: RGBAColor,
    /// Fill of the point markers
    pub marker_fill: RGBAColor,
}

impl ChartTheme {
    pub fn light() -> Self {
        Self {
            background_color: RGBAColor(255, 255, 255, 1.0),
            text_color: RGBAColor(0x6b, 0x72, 0x80, 1.0),
            grid_color: RGBAColor(0xf0, 0xf0, 0xf0, 1.0),
            axis_color: RGBAColor(0xe5, 0xe7, 0xeb, 1.0),
            marker_fill: RGBAColor(255, 255, 255, 1.0),
        }
    }

    pub fn dark() -> Self {
        Self {
            background_color: RGBAColor(0x1b, 0x1b, 0x1f, 1.0),
            text_color: RGBAColor(255, 255, 255, 0.8),
            grid_color: RGBAColor(255, 255, 255, 0.15),
            axis_color: RGBAColor(255, 255, 255, 0.8),
            marker_fill: RGBAColor(0x1b, 0x1b, 0x1f, 1.0),
        }
    }

    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::light(),
            Theme::Dark => Self::dark(),
        }
    }
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self::light()
    }
}

/// Chart style configuration
#[derive(Clone, Copy, Debug)]
pub struct ChartStyle {
    pub line_width: u32,
    pub font_size: u32,
    pub margin: u32,
    pub label_area_size: u32,
    pub marker_radius: u32,
    /// Opacity of the fill under an area series
    pub area_opacity: f64,
    /// Interpolated samples between two points of a smooth series
    pub curve_samples: usize,
}

impl ChartStyle {
    /// The same style for a raster `factor` times larger.
    pub fn scaled(self, factor: u32) -> Self {
        let factor = factor.max(1);
        Self {
            line_width: self.line_width * factor,
            font_size: self.font_size * factor,
            margin: self.margin * factor,
            label_area_size: self.label_area_size * factor,
            marker_radius: self.marker_radius * factor,
            ..self
        }
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            line_width: 2,
            font_size: 12,
            margin: 10,
            label_area_size: 50,
            marker_radius: 3,
            area_opacity: 0.1,
            curve_samples: 12,
        }
    }
}
