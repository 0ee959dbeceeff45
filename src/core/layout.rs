//! Compiled `[[page]]` layout rules.

use anyhow::{Context, Result};
use globset::{Glob, GlobMatcher};
use serde::Serialize;

use crate::config::{LayoutSetting, PageRule};

/// Layout a page is rendered with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "name")]
pub enum LayoutChoice {
    /// The theme's default layout.
    Default,
    /// No layout wrapper.
    None,
    /// A named layout from the theme's layouts dir.
    Named(String),
}

impl From<&LayoutSetting> for LayoutChoice {
    fn from(setting: &LayoutSetting) -> Self {
        match setting {
            LayoutSetting::Enabled(true) => Self::Default,
            LayoutSetting::Enabled(false) => Self::None,
            LayoutSetting::Named(name) => Self::Named(name.clone()),
        }
    }
}

/// Ordered glob rules; the first rule matching an output path wins.
#[derive(Debug, Clone)]
pub struct LayoutRules {
    rules: Vec<(GlobMatcher, LayoutChoice)>,
}

impl LayoutRules {
    pub fn compile(rules: &[PageRule]) -> Result<Self> {
        let rules = rules
            .iter()
            .map(|rule| {
                let matcher = Glob::new(&rule.glob)
                    .with_context(|| format!("invalid page glob '{}'", rule.glob))?
                    .compile_matcher();
                Ok((matcher, LayoutChoice::from(&rule.layout)))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// Layout for a site-absolute output path such as `/sitemap.xml`.
    pub fn resolve(&self, output: &str) -> LayoutChoice {
        self.rules
            .iter()
            .find(|(matcher, _)| matcher.is_match(output))
            .map(|(_, choice)| choice.clone())
            .unwrap_or(LayoutChoice::Default)
    }
}
