//! Mapping from plot coordinates `(t, y)` to render space.
//!
//! The renderer owns the actual pixel layout; this module only provides the
//! `CoordinateSystem` seam the curve binding and axis labels are placed through,
//! and `Axes`, a linear implementation centred on the render-space origin.
//! Tick and gridline layout belong to the renderer.

use crate::{Error, Result};

/// A point in render space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RenderPoint {
    pub x: f64,
    pub y: f64,
}

impl RenderPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Text naming an axis, placed next to the axis end it describes.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabel {
    pub text: String,
    pub anchor: RenderPoint,
}

/// Maps domain coordinates to render-space coordinates.
pub trait CoordinateSystem {
    /// Converts a plot coordinate `(t, y)` into render space.
    fn to_render(&self, t: f64, y: f64) -> RenderPoint;

    /// Anchor for the horizontal axis label.
    fn x_label_anchor(&self) -> RenderPoint;

    /// Anchor for the vertical axis label.
    fn y_label_anchor(&self) -> RenderPoint;

    /// Places labels for both axes.
    fn axis_labels(&self, x_label: &str, y_label: &str) -> [AxisLabel; 2] {
        [
            AxisLabel {
                text: x_label.to_string(),
                anchor: self.x_label_anchor(),
            },
            AxisLabel {
                text: y_label.to_string(),
                anchor: self.y_label_anchor(),
            },
        ]
    }
}

/// Inclusive value range of one axis, with the spacing the renderer uses for ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl AxisRange {
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    fn span(&self) -> f64 {
        self.max - self.min
    }

    fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Where the perpendicular axis crosses this one: zero if in range,
    /// otherwise the nearest end.
    fn origin(&self) -> f64 {
        0.0_f64.clamp(self.min, self.max)
    }

    fn validate(&self, axis: &str) -> Result<()> {
        // Infinite bounds make the span non-finite too
        let finite =
            self.span().is_finite() && self.midpoint().is_finite() && self.step.is_finite();
        if !finite || self.min >= self.max || self.step <= 0.0 {
            return Err(Error::InvalidAxes {
                message: format!(
                    "{axis} range [{}, {}, {}] must be finite, increasing, with a positive step",
                    self.min, self.max, self.step
                ),
            });
        }
        Ok(())
    }
}

/// A pair of linear axes whose combined extent is centred on the origin.
///
/// # Examples
///
/// ```
/// use wavescene::coords::{Axes, AxisRange, CoordinateSystem, RenderPoint};
///
/// let axes = Axes::new(
///     AxisRange::new(0.0, 10.0, 1.0),
///     AxisRange::new(-3.0, 3.0, 1.0),
///     10.0,
///     6.0,
/// )
/// .unwrap();
///
/// assert_eq!(axes.to_render(0.0, 0.0), RenderPoint::new(-5.0, 0.0));
/// assert_eq!(axes.to_render(10.0, 3.0), RenderPoint::new(5.0, 3.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axes {
    x_range: AxisRange,
    y_range: AxisRange,
    x_length: f64,
    y_length: f64,
}

impl Axes {
    /// Creates axes covering `x_range` × `y_range`, drawn `x_length` wide and
    /// `y_length` tall in render units.
    pub fn new(
        x_range: AxisRange,
        y_range: AxisRange,
        x_length: f64,
        y_length: f64,
    ) -> Result<Self> {
        x_range.validate("x")?;
        y_range.validate("y")?;
        for (axis, length) in [("x", x_length), ("y", y_length)] {
            if !length.is_finite() || length <= 0.0 {
                return Err(Error::InvalidAxes {
                    message: format!("{axis} length must be finite and positive, got {length}"),
                });
            }
        }

        Ok(Self {
            x_range,
            y_range,
            x_length,
            y_length,
        })
    }

    pub fn x_range(&self) -> AxisRange {
        self.x_range
    }

    pub fn y_range(&self) -> AxisRange {
        self.y_range
    }

    /// Render-space width and height of the axes.
    pub fn extent(&self) -> (f64, f64) {
        (self.x_length, self.y_length)
    }
}

impl CoordinateSystem for Axes {
    fn to_render(&self, t: f64, y: f64) -> RenderPoint {
        RenderPoint {
            x: (t - self.x_range.midpoint()) * self.x_length / self.x_range.span(),
            y: (y - self.y_range.midpoint()) * self.y_length / self.y_range.span(),
        }
    }

    fn x_label_anchor(&self) -> RenderPoint {
        self.to_render(self.x_range.max, self.y_range.origin())
    }

    fn y_label_anchor(&self) -> RenderPoint {
        self.to_render(self.x_range.origin(), self.y_range.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene_axes() -> Axes {
        Axes::new(
            AxisRange::new(0.0, 10.0, 1.0),
            AxisRange::new(-3.0, 3.0, 1.0),
            10.0,
            6.0,
        )
        .unwrap()
    }

    #[test]
    fn test_mapping_is_centred() {
        let axes = scene_axes();
        assert_eq!(axes.to_render(5.0, 0.0), RenderPoint::new(0.0, 0.0));
        assert_eq!(axes.to_render(0.0, -3.0), RenderPoint::new(-5.0, -3.0));
    }

    #[test]
    fn test_ranges_are_kept() {
        let axes = scene_axes();
        assert_eq!(axes.x_range(), AxisRange::new(0.0, 10.0, 1.0));
        assert_eq!(axes.y_range().step, 1.0);
        assert_eq!(axes.extent(), (10.0, 6.0));
    }

    #[test]
    fn test_mapping_scales() {
        let axes = Axes::new(
            AxisRange::new(0.0, 10.0, 1.0),
            AxisRange::new(-1.0, 1.0, 0.5),
            5.0,
            4.0,
        )
        .unwrap();
        assert_eq!(axes.to_render(10.0, 1.0), RenderPoint::new(2.5, 2.0));
    }

    #[test]
    fn test_label_anchors() {
        let axes = scene_axes();
        // x axis crosses y at 0, y axis sits at t = 0
        assert_eq!(axes.x_label_anchor(), RenderPoint::new(5.0, 0.0));
        assert_eq!(axes.y_label_anchor(), RenderPoint::new(-5.0, 3.0));

        let [t, amplitude] = axes.axis_labels("t", "Amplitude");
        assert_eq!(t.text, "t");
        assert_eq!(t.anchor, axes.x_label_anchor());
        assert_eq!(amplitude.anchor, RenderPoint::new(-5.0, 3.0));
    }

    #[test]
    fn test_rejects_bad_ranges() {
        let y = AxisRange::new(-3.0, 3.0, 1.0);
        assert!(Axes::new(AxisRange::new(10.0, 0.0, 1.0), y, 10.0, 6.0).is_err());
        assert!(Axes::new(AxisRange::new(0.0, 10.0, 0.0), y, 10.0, 6.0).is_err());
        assert!(Axes::new(AxisRange::new(0.0, f64::NAN, 1.0), y, 10.0, 6.0).is_err());
        assert!(Axes::new(AxisRange::new(-1e308, 1e308, 1.0), y, 10.0, 6.0).is_err());
        assert!(matches!(
            Axes::new(AxisRange::new(0.0, 10.0, 1.0), y, -1.0, 6.0),
            Err(Error::InvalidAxes { .. })
        ));
    }
}
