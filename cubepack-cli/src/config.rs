use serde::{Deserialize, Serialize};

use crate::io::svg_util::SvgDrawOptions;

/// Configuration of the runner
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct CubepackConfig {
    /// Write an SVG projection of every packed bin next to the solution
    #[serde(default = "default_svg_export")]
    pub svg_export: bool,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

fn default_svg_export() -> bool {
    true
}

impl Default for CubepackConfig {
    fn default() -> Self {
        Self {
            svg_export: default_svg_export(),
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
