//! Instruction templates with named `{parameter}` placeholders.
//!
//! Placeholders are `{name}` where `name` is lowercase ASCII letters, digits
//! or underscores starting with a letter or underscore. `{{` and `}}` render
//! as literal braces. Any other brace is copied through unchanged, so prose
//! and JSON snippets inside a template never need escaping.

use std::borrow::Cow;
use std::collections::BTreeMap;

use super::{ComposedPrompt, PromptError};

/// Named values interpolated into a template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitutions(BTreeMap<String, String>);

impl Substitutions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value, replacing any previous value for `name`.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for Substitutions
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    Literal(&'a str),
    Placeholder(&'a str),
}

/// A fixed prompt template for a single-shot task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionTemplate {
    source: Cow<'static, str>,
}

impl InstructionTemplate {
    /// Wraps a compile-time template.
    pub const fn from_static(source: &'static str) -> Self {
        Self {
            source: Cow::Borrowed(source),
        }
    }

    /// Wraps a template built at runtime.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: Cow::Owned(source.into()),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Parameter names the template needs, in first-use order.
    pub fn required_parameters(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for segment in segments(&self.source) {
            if let Segment::Placeholder(name) = segment {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// Interpolates `substitutions` into the template.
    ///
    /// Every placeholder must have a non-blank value. Extra substitutions
    /// are ignored. Values are inserted verbatim.
    pub fn render(&self, substitutions: &Substitutions) -> Result<ComposedPrompt, PromptError> {
        let mut out = String::with_capacity(self.source.len());
        for segment in segments(&self.source) {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => match substitutions.get(name) {
                    Some(value) if !value.trim().is_empty() => out.push_str(value),
                    _ => return Err(PromptError::missing_parameter(name)),
                },
            }
        }
        Ok(ComposedPrompt::new(out))
    }
}

fn segments(source: &str) -> Vec<Segment<'_>> {
    let bytes = source.as_bytes();
    let mut segments = Vec::new();
    let mut literal_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'{' | b'}' if bytes.get(i + 1) == Some(&bytes[i]) => {
                // Keep one brace of the doubled pair.
                push_literal(&mut segments, &source[literal_start..=i]);
                i += 2;
                literal_start = i;
            }
            b'{' => match placeholder_len(&source[i + 1..]) {
                Some(len) => {
                    push_literal(&mut segments, &source[literal_start..i]);
                    segments.push(Segment::Placeholder(&source[i + 1..i + 1 + len]));
                    i += len + 2;
                    literal_start = i;
                }
                None => i += 1,
            },
            _ => i += 1,
        }
    }
    push_literal(&mut segments, &source[literal_start..]);
    segments
}

fn push_literal<'a>(segments: &mut Vec<Segment<'a>>, text: &'a str) {
    if !text.is_empty() {
        segments.push(Segment::Literal(text));
    }
}

/// Length of a valid placeholder name at the start of `rest`, if it is
/// followed by a closing brace.
fn placeholder_len(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    let first = *bytes.first()?;
    if !(first.is_ascii_lowercase() || first == b'_') {
        return None;
    }
    let len = bytes
        .iter()
        .take_while(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || **b == b'_')
        .count();
    (bytes.get(len) == Some(&b'}')).then_some(len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_named_parameters() {
        let template = InstructionTemplate::from_static("Define \"{word}\" for a {level} learner.");
        let subs = Substitutions::new()
            .with("word", "serendipity")
            .with("level", "beginner");

        let prompt = template.render(&subs).unwrap();
        assert_eq!(
            prompt.as_str(),
            "Define \"serendipity\" for a beginner learner."
        );
    }

    #[test]
    fn repeated_placeholders_render_each_time() {
        let template = InstructionTemplate::from_static("{a} and {a}");
        let prompt = template.render(&Substitutions::new().with("a", "x")).unwrap();
        assert_eq!(prompt.as_str(), "x and x");
    }

    #[test]
    fn missing_parameter_is_reported_by_name() {
        let template = InstructionTemplate::from_static("Topic: {topic}, level: {level}");
        let err = template
            .render(&Substitutions::new().with("topic", "travel"))
            .unwrap_err();
        assert_eq!(err, PromptError::missing_parameter("level"));
    }

    #[test]
    fn blank_parameter_counts_as_missing() {
        let template = InstructionTemplate::from_static("Word: {word}");
        let err = template
            .render(&Substitutions::new().with("word", "   "))
            .unwrap_err();
        assert_eq!(err, PromptError::missing_parameter("word"));
    }

    #[test]
    fn extra_substitutions_are_ignored() {
        let template = InstructionTemplate::from_static("Hello {name}");
        let subs = Substitutions::new().with("name", "Ada").with("unused", "x");
        assert_eq!(template.render(&subs).unwrap().as_str(), "Hello Ada");
    }

    #[test]
    fn doubled_braces_are_literal() {
        let template = InstructionTemplate::from_static("{{not_a_param}} {x}");
        let prompt = template.render(&Substitutions::new().with("x", "1")).unwrap();
        assert_eq!(prompt.as_str(), "{not_a_param} 1");
    }

    #[test]
    fn non_placeholder_braces_pass_through() {
        let template = InstructionTemplate::from_static("{\"key\": 1} { spaced } {Upper} {x");
        let prompt = template.render(&Substitutions::new()).unwrap();
        assert_eq!(prompt.as_str(), "{\"key\": 1} { spaced } {Upper} {x");
    }

    #[test]
    fn values_are_inserted_verbatim() {
        let template = InstructionTemplate::from_static("Text:\n---\n{text}\n---");
        let subs = Substitutions::new().with("text", "Corrected Text: {x}\nUser: hi");
        assert_eq!(
            template.render(&subs).unwrap().as_str(),
            "Text:\n---\nCorrected Text: {x}\nUser: hi\n---"
        );
    }

    #[test]
    fn required_parameters_in_first_use_order() {
        let template = InstructionTemplate::from_static("{b} {a} {b} {{c}}");
        assert_eq!(template.required_parameters(), vec!["b", "a"]);
    }

    #[test]
    fn template_without_parameters_renders_unchanged() {
        let template = InstructionTemplate::new("Just do it.");
        assert!(template.required_parameters().is_empty());
        assert_eq!(
            template.render(&Substitutions::new()).unwrap().as_str(),
            "Just do it."
        );
    }

    #[test]
    fn substitutions_collect_from_pairs() {
        let subs: Substitutions = vec![("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(subs.get("a"), Some("1"));
        assert_eq!(subs.get("b"), Some("2"));
        assert_eq!(subs.get("c"), None);
    }
}
