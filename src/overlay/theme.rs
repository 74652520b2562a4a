use crate::foundation::core::Rgba8;

/// Colour tokens of the overlay. Defaults follow the site's dark-steel palette
/// with a red accent.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Theme {
    pub panel_light: Rgba8,
    pub panel_dark: Rgba8,
    pub primary: Rgba8,
    pub muted: Rgba8,
    pub emblem_light: Rgba8,
    pub emblem_dark: Rgba8,
    pub grid: Rgba8,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            panel_light: Rgba8::from_hsl(0.0, 0.0, 0.12),
            panel_dark: Rgba8::from_hsl(0.0, 0.0, 0.08),
            primary: Rgba8::from_hsl(0.0, 0.83, 0.50),
            muted: Rgba8::from_hsl(0.0, 0.0, 0.45),
            emblem_light: Rgba8::from_hsl(0.0, 0.0, 0.25),
            emblem_dark: Rgba8::from_hsl(0.0, 0.0, 0.15),
            grid: Rgba8 {
                r: 255,
                g: 255,
                b: 255,
                a: 8,
            },
        }
    }
}
