use crate::{
    config::OVERLAY_Z_INDEX,
    foundation::core::{Affine, Point, Rect, Rgba8, SessionId},
    timeline::model::Phase,
};

/// Stacking bands inside the overlay, painted in ascending order.
pub const Z_BACKGROUND: i32 = 0;
pub const Z_PARTICLES: i32 = 10;
pub const Z_EMBLEM: i32 = 20;
pub const Z_CORNERS: i32 = 30;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelSide {
    Left,
    Right,
    Full,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayerKind {
    Panel { side: PanelSide },
    Grid,
    Particle { id: u32 },
    Gear { index: u8 },
    Emblem,
    Ring,
    Corner { corner: Corner },
    ProgressBar,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Fill {
    Solid { color: Rgba8 },
    LinearGradient { from: Rgba8, to: Rgba8, angle_deg: f64 },
    Stroke { color: Rgba8, width: f64 },
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClipShape {
    Polygon { points: Vec<Point> },
    Circle { center: Point, radius: f64 },
}

/// One paintable element of the overlay.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Layer {
    pub kind: LayerKind,
    pub z: i32,
    /// Untransformed bounds in viewport coordinates.
    pub bounds: Rect,
    pub transform: Affine,
    pub clip: Option<ClipShape>,
    pub opacity: f64, // [0, 1]
    pub fill: Fill,
    // Overlay layers never take pointer or keyboard focus.
    interactive: bool,
}

impl Layer {
    pub fn new(kind: LayerKind, z: i32, bounds: Rect, fill: Fill) -> Self {
        Self {
            kind,
            z,
            bounds,
            transform: Affine::IDENTITY,
            clip: None,
            opacity: 1.0,
            fill,
            interactive: false,
        }
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn with_transform(mut self, transform: Affine) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_clip(mut self, clip: ClipShape) -> Self {
        self.clip = Some(clip);
        self
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}

/// Everything the host paints for one instant, above all page content.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct OverlayFrame {
    pub session: Option<SessionId>,
    pub phase: Option<Phase>,
    /// Stacking priority of the overlay root relative to page content.
    pub z_index: i32,
    /// Sorted by `z`, painter's order.
    pub layers: Vec<Layer>,
    full_cover: bool,
}

impl OverlayFrame {
    /// Nothing to paint; the page is fully exposed.
    pub fn empty() -> Self {
        Self {
            session: None,
            phase: None,
            z_index: OVERLAY_Z_INDEX,
            layers: Vec::new(),
            full_cover: false,
        }
    }

    pub(crate) fn new(
        session: SessionId,
        phase: Phase,
        mut layers: Vec<Layer>,
        full_cover: bool,
    ) -> Self {
        layers.retain(Layer::is_visible);
        layers.sort_by_key(|l| l.z);
        let full_cover = full_cover && !layers.is_empty();
        Self {
            session: Some(session),
            phase: Some(phase),
            z_index: OVERLAY_Z_INDEX,
            layers,
            full_cover,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Topmost overlay layer that would capture a pointer event at `point`.
    /// Overlay layers are never hit-testable, so input always reaches the page.
    pub fn hit_test(&self, point: Point) -> Option<&Layer> {
        self.layers
            .iter()
            .rev()
            .find(|l| l.is_interactive() && l.transform.transform_rect_bbox(l.bounds).contains(point))
    }

    pub fn blocks_input(&self) -> bool {
        self.layers.iter().any(Layer::is_interactive)
    }

    /// The deliberate full-cover window: the viewport is entirely hidden by
    /// background panels while the route swaps underneath.
    pub fn covers_viewport(&self) -> bool {
        self.full_cover
    }

    pub fn layers_of(&self, pred: impl Fn(&LayerKind) -> bool) -> impl Iterator<Item = &Layer> {
        self.layers.iter().filter(move |l| pred(&l.kind))
    }
}
