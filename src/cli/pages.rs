//! `pages`: list what a build of the selected environment would produce.

use anyhow::Result;
use owo_colors::OwoColorize;

use super::common::plural_count;
use crate::config::SiteConfig;
use crate::core::{Environment, LayoutChoice};
use crate::site::Site;
use crate::sitemap::{NavPlacement, Page, Sitemap, discover};
use crate::utils::date::Date;

fn layout_label(layout: &LayoutChoice) -> String {
    match layout {
        LayoutChoice::Default => "default".into(),
        LayoutChoice::None => "none".into(),
        LayoutChoice::Named(name) => name.clone(),
    }
}

fn page_line(page: &Page) -> String {
    let mut line = format!("{}  layout={}", page.url, layout_label(&page.layout));
    match page.nav {
        Some(NavPlacement::Promoted) => line.push_str("  nav=promoted"),
        Some(NavPlacement::Hidden) => line.push_str("  nav=hidden"),
        Some(NavPlacement::Listed) | None => {}
    }
    line
}

/// Plain-text listing of `sitemap`, grouped by kind.
pub fn format_sitemap(sitemap: &Sitemap, all: bool) -> String {
    let mut lines = Vec::new();

    let pages: Vec<_> = sitemap.content_pages().collect();
    lines.push(plural_count(pages.len(), "page").bold().to_string());
    lines.extend(pages.into_iter().map(|page| format!("  {}", page_line(page))));

    let posts: Vec<_> = sitemap.posts().collect();
    lines.push(plural_count(posts.len(), "post").bold().to_string());
    for page in posts {
        let date = page.post.as_ref().map(|p| p.date.to_string()).unwrap_or_default();
        lines.push(format!("  {date}  {}", page_line(page)));
    }

    lines.push(plural_count(sitemap.assets.len(), "asset").bold().to_string());
    for asset in &sitemap.assets {
        let mut line = format!("  {}", asset.output_url());
        if asset.hashed_url.is_some() {
            line.push_str(&format!("  (from {})", asset.url));
        }
        if asset.minify {
            line.push_str("  minify");
        }
        lines.push(line);
    }

    if all {
        lines.push(plural_count(sitemap.skipped.len(), "skipped file").bold().to_string());
        lines.extend(sitemap.skipped.iter().map(|skipped| {
            format!(
                "  {}  {}",
                skipped.source.display(),
                skipped.reason.to_string().dimmed()
            )
        }));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// List the sitemap for `env` as it stands on `today`.
pub fn list_pages(config: &SiteConfig, env: Environment, all: bool, today: Date) -> Result<()> {
    let site = Site::new(config.clone(), env)?;
    let sitemap = discover(&site, today)?;
    print!("{}", format_sitemap(&sitemap, all));
    Ok(())
}
