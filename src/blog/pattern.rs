//! `{token}` path patterns for blog sources and permalinks.
//!
//! A pattern is literal text with placeholders drawn from a fixed set:
//! `{year}`, `{month}`, `{day}`, `{title}`. The same pattern both parses
//! a path (via a compiled regex) and renders one.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::utils::date::Date;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("pattern is empty")]
    Empty,
    #[error("unknown token {{{0}}} (expected year, month, day or title)")]
    UnknownToken(String),
    #[error("token {{{0}}} appears more than once")]
    DuplicateToken(String),
    #[error("unclosed '{{' at byte {0}")]
    Unclosed(usize),
    #[error("unmatched '}}' at byte {0}")]
    Unmatched(usize),
    #[error("pattern does not compile: {0}")]
    Regex(#[from] regex::Error),
}

/// A placeholder in a [`PathPattern`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Year,
    Month,
    Day,
    Title,
}

impl Token {
    fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "year" => Self::Year,
            "month" => Self::Month,
            "day" => Self::Day,
            "title" => Self::Title,
            _ => return None,
        })
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Title => "title",
        }
    }

    const fn regex(self) -> &'static str {
        match self {
            Self::Year => "[0-9]{4}",
            Self::Month | Self::Day => "[0-9]{1,2}",
            Self::Title => r"[^/]+",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Token(Token),
}

/// Values substituted into a pattern by [`PathPattern::render`].
#[derive(Debug, Clone, Copy)]
pub struct PatternValues<'a> {
    pub date: Date,
    pub title: &'a str,
}

/// Fields captured from a path by [`PathPattern::captures`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captured {
    pub date: Option<Date>,
    pub title: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
    regex: Regex,
}

impl PathPattern {
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        if raw.is_empty() {
            return Err(PatternError::Empty);
        }

        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = raw;
        let mut offset = 0;

        while let Some(pos) = rest.find(['{', '}']) {
            if rest.as_bytes()[pos] == b'}' {
                return Err(PatternError::Unmatched(offset + pos));
            }
            literal.push_str(&rest[..pos]);

            let after = &rest[pos + 1..];
            let end = after
                .find('}')
                .ok_or(PatternError::Unclosed(offset + pos))?;
            let name = &after[..end];
            let token =
                Token::from_name(name).ok_or_else(|| PatternError::UnknownToken(name.into()))?;
            if segments.contains(&Segment::Token(token)) {
                return Err(PatternError::DuplicateToken(name.into()));
            }

            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(Segment::Token(token));

            let consumed = pos + 1 + end + 1;
            offset += consumed;
            rest = &rest[consumed..];
        }
        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        let regex = Regex::new(&Self::regex_source(&segments))?;
        Ok(Self {
            raw: raw.to_string(),
            segments,
            regex,
        })
    }

    fn regex_source(segments: &[Segment]) -> String {
        let mut source = String::from("^");
        for segment in segments {
            match segment {
                Segment::Literal(text) => source.push_str(&regex::escape(text)),
                Segment::Token(token) => {
                    source.push_str(&format!("(?P<{}>{})", token.name(), token.regex()));
                }
            }
        }
        source.push('$');
        source
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn has_token(&self, name: &str) -> bool {
        self.tokens().any(|t| t.name() == name)
    }

    pub fn tokens(&self) -> impl Iterator<Item = Token> + '_ {
        self.segments.iter().filter_map(|s| match s {
            Segment::Token(t) => Some(*t),
            Segment::Literal(_) => None,
        })
    }

    /// Match `path` (forward slashes) against the whole pattern.
    ///
    /// Returns `None` when the path does not match or the captured date
    /// is not a real calendar day.
    pub fn captures(&self, path: &str) -> Option<Captured> {
        let caps = self.regex.captures(path)?;
        let part = |name: &str| caps.name(name).map(|m| m.as_str());

        let date = match (part("year"), part("month"), part("day")) {
            (Some(y), Some(m), Some(d)) => Some(Date::from_parts(y, m, d)?),
            _ => None,
        };
        Some(Captured {
            date,
            title: part("title").map(String::from),
        })
    }

    /// Substitute `values` into the pattern. Month and day are zero-padded.
    pub fn render(&self, values: PatternValues<'_>) -> String {
        let mut out = String::with_capacity(self.raw.len() + values.title.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Token(Token::Year) => out.push_str(&format!("{:04}", values.date.year)),
                Segment::Token(Token::Month) => {
                    out.push_str(&format!("{:02}", values.date.month));
                }
                Segment::Token(Token::Day) => out.push_str(&format!("{:02}", values.date.day)),
                Segment::Token(Token::Title) => out.push_str(values.title),
            }
        }
        out
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for PathPattern {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT: &str = "{year}-{month}-{day}-{title}.html";

    #[test]
    fn test_parse_tokens() {
        let pattern = PathPattern::parse(DEFAULT).unwrap();
        let names: Vec<_> = pattern.tokens().map(Token::name).collect();
        assert_eq!(names, ["year", "month", "day", "title"]);
        assert!(pattern.has_token("title"));
        assert!(!pattern.has_token("slug"));
        assert_eq!(pattern.to_string(), DEFAULT);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(PathPattern::parse(""), Err(PatternError::Empty)));
        assert!(matches!(
            PathPattern::parse("{year}/{slug}.html"),
            Err(PatternError::UnknownToken(t)) if t == "slug"
        ));
        assert!(matches!(
            PathPattern::parse("{title}-{title}"),
            Err(PatternError::DuplicateToken(_))
        ));
        assert!(matches!(
            PathPattern::parse("{year-{title}"),
            Err(PatternError::UnknownToken(_))
        ));
        assert!(matches!(
            PathPattern::parse("{title"),
            Err(PatternError::Unclosed(0))
        ));
        assert!(matches!(
            PathPattern::parse("a}{title}"),
            Err(PatternError::Unmatched(1))
        ));
    }

    #[test]
    fn test_literal_only_pattern() {
        let pattern = PathPattern::parse("index.html").unwrap();
        assert_eq!(pattern.tokens().count(), 0);
        assert!(pattern.captures("index.html").is_some());
        assert!(pattern.captures("indexxhtml").is_none());
    }

    #[test]
    fn test_captures() {
        let pattern = PathPattern::parse(DEFAULT).unwrap();
        let caps = pattern.captures("2024-03-05-hello-world.html").unwrap();
        assert_eq!(caps.date, Some(Date::new(2024, 3, 5)));
        assert_eq!(caps.title.as_deref(), Some("hello-world"));

        assert!(pattern.captures("hello-world.html").is_none());
        assert!(pattern.captures("2024-13-05-bad-month.html").is_none());
        assert!(pattern.captures("2024-03-05-hello.xml").is_none());
        assert!(pattern.captures("drafts/2024-03-05-hello.html").is_none());
    }

    #[test]
    fn test_captures_nested_source() {
        let pattern = PathPattern::parse("{year}/{month}-{day}-{title}.html").unwrap();
        let caps = pattern.captures("2023/12-31-year-end.html").unwrap();
        assert_eq!(caps.date, Some(Date::new(2023, 12, 31)));
        assert_eq!(caps.title.as_deref(), Some("year-end"));
    }

    #[test]
    fn test_render() {
        let values = PatternValues {
            date: Date::new(2024, 3, 5),
            title: "hello-world",
        };
        assert_eq!(
            PathPattern::parse(DEFAULT).unwrap().render(values),
            "2024-03-05-hello-world.html"
        );
        assert_eq!(
            PathPattern::parse("{year}/{month}/{title}/index.html")
                .unwrap()
                .render(values),
            "2024/03/hello-world/index.html"
        );
    }
}
