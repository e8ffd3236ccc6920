use proc_macro::TokenStream;
use quote::quote;
use syn::{LitStr, parse_macro_input};

/// Creates a `Symbolic` value for a fraction of π at compile time.
///
/// The string is parsed when the crate is compiled and expands to a
/// `wavescene::labels::Symbolic::new(value, tex, text)` call, so the numeric
/// value and both renderings always agree.
///
/// # Format
///
/// `[-][coefficient]pi[/denominator]` where:
/// - `pi` may also be written `π`
/// - `coefficient` and `denominator` are positive integers, defaulting to 1
///
/// # Examples
///
/// ```ignore
/// use wavescene::symbolic;
///
/// let half = symbolic!("pi/2");     // value π/2, text "π/2", tex "\pi/2"
/// let three = symbolic!("3π/4");    // value 3π/4, text "3π/4"
/// let neg = symbolic!("-pi");       // value -π, text "-π"
/// ```
#[proc_macro]
pub fn symbolic(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as LitStr);
    let source = input.value();

    match parse_fraction(&source) {
        Ok(fraction) => {
            // Literal tokens stay non-negative; the sign is emitted separately
            let magnitude = fraction.value().abs();
            let value = if fraction.negative {
                quote! { -#magnitude }
            } else {
                quote! { #magnitude }
            };
            let tex = fraction.render(r"\pi");
            let text = fraction.render("π");

            let expanded = quote! {
                ::wavescene::labels::Symbolic::new(#value, #tex, #text)
            };
            TokenStream::from(expanded)
        }
        Err(e) => {
            let error_msg = format!("Invalid π fraction '{}': {}", source, e);
            let expanded = quote! {
                compile_error!(#error_msg)
            };
            TokenStream::from(expanded)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fraction {
    negative: bool,
    coefficient: u32,
    denominator: u32,
}

impl Fraction {
    fn value(&self) -> f64 {
        let magnitude = std::f64::consts::PI * self.coefficient as f64 / self.denominator as f64;
        if self.negative { -magnitude } else { magnitude }
    }

    fn render(&self, pi: &str) -> String {
        let mut out = String::new();
        if self.negative {
            out.push('-');
        }
        if self.coefficient != 1 {
            out.push_str(&self.coefficient.to_string());
        }
        out.push_str(pi);
        if self.denominator != 1 {
            out.push('/');
            out.push_str(&self.denominator.to_string());
        }
        out
    }
}

fn parse_positive(s: &str, what: &str) -> Result<u32, String> {
    let n = s
        .parse::<u32>()
        .map_err(|_| format!("invalid {} '{}'", what, s))?;
    if n == 0 {
        return Err(format!("{} must be non-zero", what));
    }
    Ok(n)
}

fn parse_fraction(s: &str) -> Result<Fraction, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty string".to_string());
    }

    let (negative, rest) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };

    let (numerator, denominator) = match rest.split_once('/') {
        Some((numerator, denominator)) => {
            let denominator = parse_positive(denominator.trim(), "denominator")?;
            (numerator, denominator)
        }
        None => (rest, 1),
    };

    let numerator = numerator.trim();
    let coefficient = numerator
        .strip_suffix("pi")
        .or_else(|| numerator.strip_suffix('π'))
        .ok_or_else(|| "expected 'pi' or 'π'".to_string())?;

    let coefficient = match coefficient.trim() {
        "" => 1,
        digits => parse_positive(digits, "coefficient")?,
    };

    Ok(Fraction {
        negative,
        coefficient,
        denominator,
    })
}
