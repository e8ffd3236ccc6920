//! Values that are displayed symbolically rather than as decimals.

/// A scripted value with a fixed symbolic rendering, such as `π/2`.
///
/// Symbolic forms are never inferred from a number. A script registers each
/// value it will reach together with its symbol, and the label formatter only
/// uses the symbol on an exact match. With the `macros` feature,
/// `wavescene::symbolic!` builds these from a string at compile time.
///
/// # Examples
///
/// ```
/// use std::f64::consts::FRAC_PI_2;
/// use wavescene::labels::Symbolic;
///
/// let half_pi = Symbolic::new(FRAC_PI_2, r"\pi/2", "π/2");
/// assert!(half_pi.matches(FRAC_PI_2));
/// assert!(!half_pi.matches(1.5708));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Symbolic {
    /// Numeric value the symbol stands for
    pub value: f64,
    /// TeX markup handed to the typesetter
    pub tex: &'static str,
    /// Plain-text rendering
    pub text: &'static str,
}

impl Symbolic {
    pub const fn new(value: f64, tex: &'static str, text: &'static str) -> Self {
        Self { value, tex, text }
    }

    /// True only when `value` is exactly the scripted value.
    pub fn matches(&self, value: f64) -> bool {
        self.value == value
    }
}
