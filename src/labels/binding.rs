//! Label formatting and the per-parameter label slots.

use std::fmt;

use super::Symbolic;
use crate::{Parameter, ParameterStore};

/// TeX for the equation shown above the plot.
pub const EQUATION_TEX: &str = r"y(t) = A \, \sin(2\pi f t + \phi)";

/// Plain-text form of the equation.
pub const EQUATION_TEXT: &str = "y(t) = A sin(2π f t + φ)";

/// Where a label sits on screen. Exact offsets are up to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Centred against the top edge
    TopEdge,
    /// Upper-left corner
    UpperLeft,
    /// Directly below another parameter's label
    Below(Parameter),
}

impl Placement {
    /// Stacking used by the parameter readouts: amplitude in the corner, phase
    /// under it, frequency under phase.
    pub fn for_parameter(parameter: Parameter) -> Self {
        match parameter {
            Parameter::Amplitude => Placement::UpperLeft,
            Parameter::Phase => Placement::Below(Parameter::Amplitude),
            Parameter::Frequency => Placement::Below(Parameter::Phase),
        }
    }
}

/// A formatted block of text. Labels are replaced, never edited in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    /// Parameter this label reads out, `None` for the equation
    pub parameter: Option<Parameter>,
    /// Markup for the typesetter
    pub tex: String,
    /// Plain-text rendering
    pub text: String,
    pub placement: Placement,
}

impl Label {
    /// The equation label `y(t) = A sin(2π f t + φ)`.
    pub fn equation() -> Self {
        Self {
            parameter: None,
            tex: EQUATION_TEX.to_string(),
            text: EQUATION_TEXT.to_string(),
            placement: Placement::TopEdge,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// An old label morphing into a new one over `duration`.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelTransition {
    pub parameter: Parameter,
    pub from: Label,
    pub to: Label,
    pub duration: f64,
}

/// Formats parameter readouts and owns the label currently shown for each
/// parameter.
///
/// Decimal values use Rust's shortest round-trip formatting (`1`, `2`, `0.5`).
/// Values registered with `register_symbol` are shown symbolically instead, but
/// only for that parameter and only on an exact match.
///
/// # Examples
///
/// ```
/// use std::f64::consts::FRAC_PI_2;
/// use wavescene::labels::{LabelBinding, Symbolic};
/// use wavescene::{Parameter, ParameterStore};
///
/// let store = ParameterStore::default();
/// let labels = LabelBinding::new(&store)
///     .with_symbol(Parameter::Phase, Symbolic::new(FRAC_PI_2, r"\pi/2", "π/2"));
///
/// assert_eq!(labels.current(Parameter::Amplitude).text, "A = 1");
/// assert_eq!(labels.format_value(Parameter::Phase, FRAC_PI_2).text, "φ = π/2");
/// assert_eq!(labels.format_value(Parameter::Frequency, 2.0).text, "f = 2 Hz");
/// ```
#[derive(Debug, Clone)]
pub struct LabelBinding {
    symbols: Vec<(Parameter, Symbolic)>,
    current: [Label; 3],
}

fn slot(parameter: Parameter) -> usize {
    match parameter {
        Parameter::Amplitude => 0,
        Parameter::Phase => 1,
        Parameter::Frequency => 2,
    }
}

fn decimal(value: f64) -> String {
    // `-0` reads badly on screen
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

impl LabelBinding {
    /// Creates labels for the store's current values, with no symbolic forms.
    pub fn new(store: &ParameterStore) -> Self {
        let readout = |parameter| format_label(&[], parameter, store.get(parameter));
        Self {
            symbols: Vec::new(),
            current: Parameter::ALL.map(readout),
        }
    }

    /// Builder form of `register_symbol`.
    pub fn with_symbol(mut self, parameter: Parameter, symbolic: Symbolic) -> Self {
        self.register_symbol(parameter, symbolic);
        self
    }

    /// Registers a symbolic rendering for one scripted value of `parameter`.
    ///
    /// Labels already on screen are left alone; the symbol takes effect the
    /// next time that value is formatted.
    pub fn register_symbol(&mut self, parameter: Parameter, symbolic: Symbolic) {
        self.symbols.push((parameter, symbolic));
    }

    /// Formats `value` as a readout for `parameter`.
    pub fn format_value(&self, parameter: Parameter, value: f64) -> Label {
        format_label(&self.symbols, parameter, value)
    }

    /// Formats the store's current value of `parameter`.
    pub fn format(&self, parameter: Parameter, store: &ParameterStore) -> Label {
        self.format_value(parameter, store.get(parameter))
    }

    /// The label currently on screen for `parameter`.
    pub fn current(&self, parameter: Parameter) -> &Label {
        &self.current[slot(parameter)]
    }

    /// Replaces the label for `parameter` with one showing `value`, returning
    /// the old/new pair for the renderer to morph between.
    pub fn transition_to(
        &mut self,
        parameter: Parameter,
        value: f64,
        duration: f64,
    ) -> LabelTransition {
        let to = self.format_value(parameter, value);
        let from = std::mem::replace(&mut self.current[slot(parameter)], to.clone());
        LabelTransition {
            parameter,
            from,
            to,
            duration,
        }
    }
}

fn format_label(symbols: &[(Parameter, Symbolic)], parameter: Parameter, value: f64) -> Label {
    let symbol = symbols
        .iter()
        .find(|(p, symbolic)| *p == parameter && symbolic.matches(value))
        .map(|(_, symbolic)| symbolic);

    let (tex_value, text_value) = match symbol {
        Some(symbolic) => (format!(r"\, {}", symbolic.tex), symbolic.text.to_string()),
        None => (decimal(value), decimal(value)),
    };

    let (tex, text) = match parameter {
        Parameter::Amplitude => (format!("A = {tex_value}"), format!("A = {text_value}")),
        Parameter::Phase => (format!(r"\phi = {tex_value}"), format!("φ = {text_value}")),
        Parameter::Frequency => (
            format!(r"f = {tex_value} \, Hz"),
            format!("f = {text_value} Hz"),
        ),
    };

    Label {
        parameter: Some(parameter),
        tex,
        text,
        placement: Placement::for_parameter(parameter),
    }
}
