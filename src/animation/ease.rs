/// Easing curve mapping linear progress in `[0, 1]` to eased progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    /// CSS `cubic-bezier(x1, y1, x2, y2)`; `x1`/`x2` are clamped into `[0, 1]`.
    CubicBezier { x1: f64, y1: f64, x2: f64, y2: f64 },
    /// Pulls back below zero before shooting to the target: the reversed
    /// `cubic-bezier(0.33, 1.53, 0.69, 0.99)` back curve, then expo-out.
    Anticipate,
}

impl Ease {
    /// The "expo in-out" bezier used by the panel wipes.
    pub const WIPE: Self = Self::CubicBezier {
        x1: 0.76,
        y1: 0.0,
        x2: 0.24,
        y2: 1.0,
    };

    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::CubicBezier { x1, y1, x2, y2 } => cubic_bezier(t, x1, y1, x2, y2),
            Self::Anticipate => anticipate(t),
        }
    }
}

// Back-out bezier; back-in is its time reversal.
const BACK_OUT: (f64, f64, f64, f64) = (0.33, 1.53, 0.69, 0.99);

fn back_in(t: f64) -> f64 {
    let (x1, y1, x2, y2) = BACK_OUT;
    1.0 - cubic_bezier(1.0 - t, x1, y1, x2, y2)
}

fn anticipate(t: f64) -> f64 {
    if t >= 1.0 {
        return 1.0;
    }
    let p = t * 2.0;
    if p < 1.0 {
        0.5 * back_in(p)
    } else {
        0.5 * (2.0 - 2f64.powf(-10.0 * (p - 1.0)))
    }
}

fn cubic_bezier(x: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }
    let x1 = x1.clamp(0.0, 1.0);
    let x2 = x2.clamp(0.0, 1.0);

    // Newton-Raphson on the x polynomial, bisection if the slope flattens out.
    let mut s = x;
    for _ in 0..8 {
        let err = bezier_coord(s, x1, x2) - x;
        if err.abs() < 1e-7 {
            return bezier_coord(s, y1, y2);
        }
        let slope = bezier_slope(s, x1, x2);
        if slope.abs() < 1e-6 {
            break;
        }
        s = (s - err / slope).clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    s = x;
    for _ in 0..32 {
        let v = bezier_coord(s, x1, x2);
        if (v - x).abs() < 1e-7 {
            break;
        }
        if v < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) * 0.5;
    }
    bezier_coord(s, y1, y2)
}

fn bezier_coord(s: f64, p1: f64, p2: f64) -> f64 {
    let ms = 1.0 - s;
    3.0 * ms * ms * s * p1 + 3.0 * ms * s * s * p2 + s * s * s
}

fn bezier_slope(s: f64, p1: f64, p2: f64) -> f64 {
    let ms = 1.0 - s;
    3.0 * ms * ms * p1 + 6.0 * ms * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
