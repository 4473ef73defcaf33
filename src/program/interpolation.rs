//! Interpolated output text
//!
//! An [`InterpolatedString`] is a template containing placeholders:
//!
//! - `{name}` substitutes the value of variable `name`
//! - `{name[index]}` substitutes element `index` of array `name`, where `index` is the
//!   name of another variable holding an integer
//!
//! Placeholders that cannot be resolved (unknown variable, a non-array used with an
//! index, a non-integer or out-of-range index) are copied to the output unchanged.
//! Text inside braces that is not a placeholder at all is plain text.

use super::render::Notation;
use crate::memory::Environment;

/// Output template with `{name}` / `{name[index]}` placeholders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpolatedString {
    text: String,
}

/// A piece of a parsed template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Placeholder(Placeholder<'a>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder<'a> {
    /// Placeholder as written, braces included
    pub raw: &'a str,
    pub name: &'a str,
    pub index: Option<&'a str>,
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

impl<'a> Placeholder<'a> {
    fn parse(raw: &'a str) -> Option<Self> {
        let inner = &raw[1..raw.len() - 1];
        let (name, index) = match inner.find('[') {
            Some(bracket) => {
                let index = inner[bracket + 1..].strip_suffix(']')?;
                if !is_identifier(index) {
                    return None;
                }
                (&inner[..bracket], Some(index))
            }
            None => (inner, None),
        };
        if !is_identifier(name) {
            return None;
        }
        Some(Placeholder { raw, name, index })
    }

    /// Placeholder without its braces, e.g. `xs[i]`
    pub fn token(&self) -> &'a str {
        &self.raw[1..self.raw.len() - 1]
    }

    /// Look up the substituted text, `None` if the placeholder is unresolved
    pub fn resolve(&self, env: &Environment) -> Option<String> {
        let value = env.get(self.name)?;
        match self.index {
            None => Some(value.to_string()),
            Some(index_name) => {
                let items = value.as_array()?;
                let index = env.get(index_name)?.as_int()?;
                let index = usize::try_from(index).ok()?;
                items.get(index).map(ToString::to_string)
            }
        }
    }
}

impl InterpolatedString {
    pub fn new(text: impl Into<String>) -> Self {
        InterpolatedString { text: text.into() }
    }

    /// Split the template into literal text and placeholders
    pub fn segments(&self) -> Vec<Segment<'_>> {
        let text = self.text.as_str();
        let mut segments = Vec::new();
        let mut text_start = 0;
        let mut search_from = 0;

        while let Some(offset) = text[search_from..].find('{') {
            let open = search_from + offset;
            search_from = open + 1;

            let after = &text[open + 1..];
            let Some(len) = after.find(['{', '}']) else {
                break;
            };
            if after.as_bytes()[len] != b'}' {
                continue;
            }

            let close = open + 1 + len;
            if let Some(placeholder) = Placeholder::parse(&text[open..=close]) {
                if text_start < open {
                    segments.push(Segment::Text(&text[text_start..open]));
                }
                segments.push(Segment::Placeholder(placeholder));
                text_start = close + 1;
                search_from = close + 1;
            }
        }

        if text_start < text.len() {
            segments.push(Segment::Text(&text[text_start..]));
        }
        segments
    }

    /// Substitute all resolvable placeholders
    pub fn interpolate(&self, env: &Environment) -> String {
        let mut output = String::with_capacity(self.text.len());
        for segment in self.segments() {
            match segment {
                Segment::Text(text) => output.push_str(text),
                Segment::Placeholder(placeholder) => match placeholder.resolve(env) {
                    Some(resolved) => output.push_str(&resolved),
                    None => output.push_str(placeholder.raw),
                },
            }
        }
        output
    }

    /// Render for a diagram: text as-is, placeholders as typewriter tokens
    pub fn render(&self, notation: Notation) -> String {
        self.segments()
            .into_iter()
            .map(|segment| match segment {
                Segment::Text(text) => notation.text(text),
                Segment::Placeholder(placeholder) => notation.placeholder(placeholder.token()),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::Value;

    fn env() -> Environment {
        [
            ("n", Value::Integer(6)),
            ("i", Value::Integer(1)),
            ("big", Value::Integer(9)),
            ("x", Value::Float(2.5)),
            ("xs", Value::array([10_i64, 20, 30])),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_simple_placeholders() {
        let s = InterpolatedString::new("n = {n}, x = {x}");
        assert_eq!(s.interpolate(&env()), "n = 6, x = 2.5");
    }

    #[test]
    fn test_indexed_placeholder() {
        let s = InterpolatedString::new("xs[i] = {xs[i]}; all: {xs}");
        assert_eq!(s.interpolate(&env()), "xs[i] = 20; all: [10, 20, 30]");
    }

    // Unresolved placeholders are passed through verbatim on purpose.
    #[test]
    fn test_unresolved_placeholders_pass_through() {
        let s = InterpolatedString::new("{missing} {n[i]} {xs[big]} {xs[x]} {xs[nope]}");
        assert_eq!(
            s.interpolate(&env()),
            "{missing} {n[i]} {xs[big]} {xs[x]} {xs[nope]}"
        );
    }

    #[test]
    fn test_non_placeholder_braces_are_text() {
        let s = InterpolatedString::new("{ } {1a} {{n}} {n");
        assert_eq!(s.interpolate(&env()), "{ } {1a} {6} {n");
    }

    #[test]
    fn test_render_placeholders_as_tokens() {
        let s = InterpolatedString::new("Sum of {xs[i]}: {total_sum}");
        assert_eq!(s.render(Notation::Plain), "Sum of `xs[i]`: `total_sum`");
        assert_eq!(
            s.render(Notation::Latex),
            r"Sum of \texttt{xs[i]}: \texttt{total\_sum}"
        );
    }
}
