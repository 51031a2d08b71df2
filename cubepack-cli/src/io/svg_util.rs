use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SvgDrawOptions {
    #[serde(default)]
    pub theme: SvgLayoutTheme,
    /// The plane the bin is projected on
    #[serde(default)]
    pub projection: Projection,
    /// Writes the id of every item on its face
    #[serde(default = "default_draw_labels")]
    pub draw_labels: bool,
}

fn default_draw_labels() -> bool {
    true
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutTheme::default(),
            projection: Projection::default(),
            draw_labels: default_draw_labels(),
        }
    }
}

/// Orthographic projection of a bin onto one of its faces.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum Projection {
    /// Looking along the depth: x to the right, y up
    #[default]
    Front,
    /// Looking down from above: x to the right, z up
    Top,
    /// Looking along the width: z to the right, y up
    Side,
}

impl Projection {
    /// Indices of the horizontal and vertical axis of the drawing, and the viewing axis
    pub fn axes(&self) -> (usize, usize, usize) {
        match self {
            Projection::Front => (0, 1, 2),
            Projection::Top => (0, 2, 1),
            Projection::Side => (2, 1, 0),
        }
    }

    /// Distance between the viewer and the face of a cuboid closest to it, along the viewing axis
    pub fn distance(&self, position: [u64; 3], dims: [u64; 3], bin_dims: [u64; 3]) -> u64 {
        match self {
            Projection::Front => position[2],
            Projection::Top => bin_dims[1].saturating_sub(position[1] + dims[1]),
            Projection::Side => position[0],
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub enum SvgLayoutTheme {
    #[default]
    EarthTones,
    Gray,
}

impl SvgLayoutTheme {
    pub fn colors(&self) -> SvgColors {
        match self {
            SvgLayoutTheme::EarthTones => EARTH_TONES_THEME,
            SvgLayoutTheme::Gray => GRAY_THEME,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SvgColors {
    pub stroke_width_multiplier: f64,
    pub bin_fill: &'static str,
    pub item_fill: &'static str,
}

pub static EARTH_TONES_THEME: SvgColors = SvgColors {
    stroke_width_multiplier: 2.0,
    bin_fill: "#CC824A",
    item_fill: "#FFC879",
};

pub static GRAY_THEME: SvgColors = SvgColors {
    stroke_width_multiplier: 2.5,
    bin_fill: "#C3C3C3",
    item_fill: "#8F8F8F",
};

/// Scales the brightness of a `#RRGGBB` color by `fraction`.
pub fn change_brightness(color: &str, fraction: f64) -> String {
    let color = color.trim_start_matches('#');
    let channel = |i: usize| {
        let c = u8::from_str_radix(&color[i..i + 2], 16).unwrap_or(0);
        (c as f64 * fraction).clamp(0.0, 255.0) as u8
    };
    format!("#{:02X}{:02X}{:02X}", channel(0), channel(2), channel(4))
}
