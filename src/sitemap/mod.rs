//! Source tree discovery.
//!
//! Walks the source directory once and sorts every file into pages,
//! assets or skipped entries, applying the site's filters in order:
//!
//! 1. theme ignore filter (inactive themes)
//! 2. named sitemap matchers (layout files)
//! 3. active theme: page sources outside `stylesheets/` and `javascripts/`
//!    are skipped, every other theme file is an asset
//! 4. blog posts under the blog prefix, gated by publish date
//! 5. other page sources (templates, plain `.html`, `.xml`, ...) become
//!    pages, everything else an asset
//!
//! In the `build` environment asset hashes are computed in parallel.

mod entry;

pub use entry::{Asset, NavPlacement, Page, SkipReason, Skipped};

use anyhow::{Result, bail};
use jwalk::WalkDir;
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::core::template::{is_page_source, output_name};
use crate::core::LayoutChoice;
use crate::site::Site;
use crate::utils::date::Date;
use crate::utils::hash;
use crate::utils::path::to_slash;
use crate::{debug, log};

/// Everything discovered under the source directory.
#[derive(Debug, Default, Serialize)]
pub struct Sitemap {
    pub pages: Vec<Page>,
    pub assets: Vec<Asset>,
    pub skipped: Vec<Skipped>,
}

impl Sitemap {
    pub fn posts(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter().filter(|p| p.is_post())
    }

    pub fn content_pages(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter().filter(|p| !p.is_post())
    }
}

enum Entry {
    Page(Page),
    Asset(Asset),
    Skipped(SkipReason),
}

/// Discover the site's source tree as of `today`.
pub fn discover(site: &Site, today: Date) -> Result<Sitemap> {
    let source = site.source();
    if !source.is_dir() {
        bail!("source directory '{}' does not exist", source.display());
    }

    let files = collect_files(source);
    debug!("scan"; "{} files under {}", files.len(), source.display());

    let mut sitemap = Sitemap::default();
    for rel in files {
        match classify(site, &rel, today) {
            Entry::Page(page) => sitemap.pages.push(page),
            Entry::Asset(asset) => sitemap.assets.push(asset),
            Entry::Skipped(reason) => {
                debug!("scan"; "skip {} ({reason})", rel.display());
                sitemap.skipped.push(Skipped { source: rel, reason });
            }
        }
    }

    if site.plugins().asset_hash().is_some() {
        fingerprint_assets(site, &mut sitemap.assets)?;
    }

    log!(
        "scan";
        "{} pages, {} posts, {} assets, {} skipped",
        sitemap.content_pages().count(),
        sitemap.posts().count(),
        sitemap.assets.len(),
        sitemap.skipped.len()
    );
    Ok(sitemap)
}

/// Files under `source`, relative to it, in sorted order. Dotfiles and
/// anything under a dot-directory are skipped.
fn collect_files(source: &Path) -> Vec<PathBuf> {
    WalkDir::new(source)
        .sort(true)
        .skip_hidden(false)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.path().strip_prefix(source).ok().map(Path::to_path_buf))
        .filter(|rel| !is_hidden(rel))
        .collect()
}

fn is_hidden(rel: &Path) -> bool {
    rel.components()
        .any(|c| c.as_os_str().to_str().is_some_and(|s| s.starts_with('.')))
}

fn classify(site: &Site, rel: &Path, today: Date) -> Entry {
    if site.is_ignored(rel) {
        return Entry::Skipped(SkipReason::InactiveTheme);
    }
    if let Some(name) = site.sitemap_matchers().matching(rel) {
        return Entry::Skipped(SkipReason::Matcher(name));
    }

    let name = rel.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    let theme_root = site.ignore_filter().root();
    if rel.starts_with(&theme_root) {
        let in_assets = site.theme().asset_dirs().iter().any(|dir| rel.starts_with(dir));
        return if in_assets || !is_page_source(name) {
            Entry::Asset(asset(site, rel, true))
        } else {
            Entry::Skipped(SkipReason::ThemeFile)
        };
    }

    if !is_page_source(name) {
        return Entry::Asset(asset(site, rel, false));
    }

    let post = site
        .plugins()
        .blog()
        .and_then(|blog| blog.parse_post(rel).map(|post| (blog, post)));
    if let Some((blog, post)) = post {
        if !blog.is_published(&post, today) {
            return Entry::Skipped(SkipReason::FutureDated);
        }
        let url = post.url();
        let layout = match blog.layout() {
            Some(layout) => LayoutChoice::Named(layout.to_string()),
            None => site.layout_for(&url),
        };
        return Entry::Page(Page {
            source: rel.to_path_buf(),
            url,
            layout,
            nav: nav_placement(site, rel),
            post: Some(post),
        });
    }

    let url = match rel.parent().map(to_slash) {
        Some(dir) if !dir.is_empty() => format!("/{dir}/{}", output_name(name)),
        _ => format!("/{}", output_name(name)),
    };
    Entry::Page(Page {
        source: rel.to_path_buf(),
        layout: site.layout_for(&url),
        url,
        nav: nav_placement(site, rel),
        post: None,
    })
}

fn nav_placement(site: &Site, rel: &Path) -> Option<NavPlacement> {
    let navtree = site.plugins().navtree()?;
    Some(if navtree.is_ignored(rel) {
        NavPlacement::Hidden
    } else if navtree.is_promoted(rel) {
        NavPlacement::Promoted
    } else {
        NavPlacement::Listed
    })
}

fn asset(site: &Site, rel: &Path, theme: bool) -> Asset {
    let plugins = site.plugins();
    let slash = to_slash(rel);
    let ext = rel.extension().and_then(|e| e.to_str()).unwrap_or_default();

    let minify = match ext.to_ascii_lowercase().as_str() {
        "css" => plugins
            .minify_css()
            .is_some_and(|m| !m.ignore_set().is_match(&slash)),
        "js" => plugins
            .minify_javascript()
            .is_some_and(|m| !m.ignore_set().is_match(&slash)),
        _ => false,
    };

    Asset {
        source: rel.to_path_buf(),
        url: format!("/{slash}"),
        hashed_url: None,
        minify,
        theme,
    }
}

/// Fill `hashed_url` for every asset the asset_hash plugin covers.
fn fingerprint_assets(site: &Site, assets: &mut [Asset]) -> Result<()> {
    let Some(config) = site.plugins().asset_hash() else {
        return Ok(());
    };
    let ignore = config.ignore_set();
    let source = site.source();

    assets
        .par_iter_mut()
        .filter(|a| config.hashes_ext(&a.source) && !ignore.is_match(to_slash(&a.source)))
        .try_for_each(|asset| -> Result<()> {
            let fingerprint = hash::compute_file(&source.join(&asset.source))?.fingerprint();
            let name = hash::fingerprinted_name(&asset.source, &fingerprint);
            asset.hashed_url = Some(match asset.url.rsplit_once('/') {
                Some((dir, _)) => format!("{dir}/{name}"),
                None => format!("/{name}"),
            });
            Ok(())
        })
}
