//! Configuration section definitions.
//!
//! Each module corresponds to a section in `site.toml`:
//!
//! | Module        | TOML Section       | Purpose                              |
//! |---------------|--------------------|--------------------------------------|
//! | `theme`       | `[theme]`          | Active theme and theme root          |
//! | `page`        | `[[page]]`         | Per-page layout rules                |
//! | `helpers`     | `[helpers]`        | Custom helper modules                |
//! | `markdown`    | `[markdown]`       | Markdown engine and options          |
//! | `plugins`     | `[plugins.*]`      | Typed plugin options                 |
//! | `environment` | `[environment.*]`  | Build/development plugin activation  |

mod environment;
mod helpers;
mod markdown;
pub mod page;
pub mod plugins;
mod theme;

pub use environment::{EnvironmentConfig, EnvironmentsConfig};
pub use helpers::HelpersConfig;
pub use markdown::{MarkdownConfig, MarkdownEngine};
pub use page::{LayoutSetting, PageRule};
pub use plugins::{
    AssetHashConfig, BlogConfig, I18nConfig, LiveReloadConfig, MinifyCssConfig,
    MinifyJavascriptConfig, NavTreeConfig, PluginName, PluginsConfig, SyntaxConfig,
};
pub use theme::ThemeConfig;
