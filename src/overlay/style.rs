use crate::{
    foundation::core::{Affine, Point, Rect, Vec2, Viewport},
    foundation::error::{RouteFxError, RouteFxResult},
    overlay::layers::{ClipShape, Fill, Layer, LayerKind, PanelSide, Z_BACKGROUND},
    overlay::theme::Theme,
};

/// How the background panels sweep across the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WipeStyle {
    /// Two half-width panels slide in from the left and right edges and meet
    /// in the middle.
    #[default]
    SplitPanels,
    /// A single panel whose leading edge is a diagonal sweeping from the
    /// top-left corner.
    DiagonalCut,
    /// A disc growing from the viewport centre.
    RadialBurst,
}

pub fn parse_wipe_style(kind: &str) -> RouteFxResult<WipeStyle> {
    let kind = kind.trim().to_ascii_lowercase();
    if kind.is_empty() {
        return Err(RouteFxError::config("wipe style must be non-empty"));
    }
    match kind.as_str() {
        "split_panels" | "splitpanels" | "split" | "panels" => Ok(WipeStyle::SplitPanels),
        "diagonal_cut" | "diagonalcut" | "diagonal" => Ok(WipeStyle::DiagonalCut),
        "radial_burst" | "radialburst" | "radial" => Ok(WipeStyle::RadialBurst),
        other => Err(RouteFxError::config(format!("unknown wipe style '{other}'"))),
    }
}

impl std::str::FromStr for WipeStyle {
    type Err = RouteFxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_wipe_style(s)
    }
}

impl WipeStyle {
    /// Background layers at `coverage` in `[0, 1]`: 0 leaves the viewport
    /// untouched, 1 hides it completely.
    pub fn background_layers(self, coverage: f64, viewport: Viewport, theme: &Theme) -> Vec<Layer> {
        let coverage = coverage.clamp(0.0, 1.0);
        if coverage <= 0.0 {
            return Vec::new();
        }
        let (w, h) = (viewport.width, viewport.height);
        match self {
            Self::SplitPanels => {
                let travel = (1.0 - coverage) * w * 0.5;
                let left = Layer::new(
                    LayerKind::Panel {
                        side: PanelSide::Left,
                    },
                    Z_BACKGROUND,
                    Rect::new(0.0, 0.0, w * 0.5, h),
                    Fill::LinearGradient {
                        from: theme.panel_light,
                        to: theme.panel_dark,
                        angle_deg: 135.0,
                    },
                )
                .with_transform(Affine::translate(Vec2::new(-travel, 0.0)));
                let right = Layer::new(
                    LayerKind::Panel {
                        side: PanelSide::Right,
                    },
                    Z_BACKGROUND,
                    Rect::new(w * 0.5, 0.0, w, h),
                    Fill::LinearGradient {
                        from: theme.panel_dark,
                        to: theme.panel_light,
                        angle_deg: 135.0,
                    },
                )
                .with_transform(Affine::translate(Vec2::new(travel, 0.0)));
                vec![left, right]
            }
            Self::DiagonalCut => {
                // Half-plane x/w + y/h <= 2 * coverage, intersected with the viewport.
                let points = clip_viewport_diagonal(w, h, 2.0 * coverage);
                vec![
                    full_panel(viewport, theme).with_clip(ClipShape::Polygon { points }),
                ]
            }
            Self::RadialBurst => {
                let center = viewport.center();
                let radius = coverage * (w * w + h * h).sqrt() * 0.5;
                vec![full_panel(viewport, theme).with_clip(ClipShape::Circle { center, radius })]
            }
        }
    }
}

fn full_panel(viewport: Viewport, theme: &Theme) -> Layer {
    Layer::new(
        LayerKind::Panel {
            side: PanelSide::Full,
        },
        Z_BACKGROUND,
        viewport.rect(),
        Fill::LinearGradient {
            from: theme.panel_light,
            to: theme.panel_dark,
            angle_deg: 135.0,
        },
    )
}

/// Viewport rectangle clipped to `x/w + y/h <= s`, as a convex polygon.
fn clip_viewport_diagonal(w: f64, h: f64, s: f64) -> Vec<Point> {
    let corners = [
        Point::new(0.0, 0.0),
        Point::new(w, 0.0),
        Point::new(w, h),
        Point::new(0.0, h),
    ];
    let side = |p: Point| s - (p.x / w + p.y / h);
    let mut out = Vec::with_capacity(5);
    for i in 0..corners.len() {
        let a = corners[i];
        let b = corners[(i + 1) % corners.len()];
        let (da, db) = (side(a), side(b));
        if da >= 0.0 {
            out.push(a);
        }
        if (da > 0.0 && db < 0.0) || (da < 0.0 && db > 0.0) {
            let t = da / (da - db);
            out.push(a.lerp(b, t));
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/style.rs"]
mod tests;
