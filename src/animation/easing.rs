//! Rate functions for parameter interpolation.
//!
//! An easing maps normalised phase progress in [0, 1] to normalised
//! interpolation progress in [0, 1], shaping how a parameter travels from its
//! starting value to its scripted target.

/// Rate function applied to an interpolation's progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    /// Constant rate of change
    #[default]
    Linear,

    /// Ease in and out (smoothstep). Scripted scenes use this for every
    /// parameter change.
    Smooth,

    /// Slow start, fast finish; the parameter is the exponent
    Exponential(f64),

    /// Fast start, slow finish; the mirror image of `Exponential`
    Logarithmic(f64),
}

impl Easing {
    /// Applies the rate function to `alpha`, clamped to [0, 1].
    ///
    /// # Examples
    ///
    /// ```
    /// use wavescene::animation::Easing;
    ///
    /// assert_eq!(Easing::Linear.apply(0.5), 0.5);
    /// assert_eq!(Easing::Exponential(2.0).apply(0.5), 0.25);
    /// assert_eq!(Easing::Smooth.apply(1.0), 1.0);
    /// ```
    pub fn apply(&self, alpha: f64) -> f64 {
        let alpha = alpha.clamp(0.0, 1.0);
        match self {
            Easing::Linear => alpha,
            Easing::Smooth => alpha * alpha * (3.0 - 2.0 * alpha),
            Easing::Exponential(exp) => alpha.powf(*exp),
            Easing::Logarithmic(exp) => 1.0 - (1.0 - alpha).powf(*exp),
        }
    }

    /// Value between `from` and `to` at progress `alpha`.
    ///
    /// The end points are exact: `alpha <= 0` yields `from` and `alpha >= 1`
    /// yields `to`, regardless of floating-point rounding in between.
    ///
    /// # Examples
    ///
    /// ```
    /// use wavescene::animation::Easing;
    ///
    /// assert_eq!(Easing::Linear.interpolate(1.0, 2.0, 0.5), 1.5);
    /// assert_eq!(Easing::Smooth.interpolate(0.1, 0.3, 1.0), 0.3);
    /// ```
    pub fn interpolate(&self, from: f64, to: f64, alpha: f64) -> f64 {
        if alpha <= 0.0 {
            return from;
        }
        if alpha >= 1.0 {
            return to;
        }
        from + self.apply(alpha) * (to - from)
    }
}
