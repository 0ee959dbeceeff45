//! Template file names and the output names they render to.
//!
//! A source file like `index.html.haml` renders to `index.html`: every
//! trailing template extension is stripped. A file with no output
//! extension left (`about.md`) renders to `about.html`.
//!
//! Plain files with a page output extension (`contact.html`, `feed.xml`)
//! are page sources too: they get a layout and can be blog posts.

/// Extensions handled by a template engine rather than copied verbatim.
pub const TEMPLATE_EXTS: &[&str] = &["md", "markdown", "haml", "erb", "slim", "liquid", "builder"];

/// Output extensions a plain (non-template) file is treated as a page for.
pub const PAGE_EXTS: &[&str] = &["html", "htm", "xml", "json", "txt"];

const DEFAULT_OUTPUT_EXT: &str = "html";

fn split_ext(name: &str) -> Option<(&str, &str)> {
    let (stem, ext) = name.rsplit_once('.')?;
    (!stem.is_empty()).then_some((stem, ext))
}

fn is_template_ext(ext: &str) -> bool {
    TEMPLATE_EXTS.iter().any(|t| t.eq_ignore_ascii_case(ext))
}

/// Whether `name` ends in a template extension.
pub fn is_template(name: &str) -> bool {
    split_ext(name).is_some_and(|(_, ext)| is_template_ext(ext))
}

/// Whether `name` is a page source: a template or a page output file.
pub fn is_page_source(name: &str) -> bool {
    is_template(name)
        || split_ext(name).is_some_and(|(_, ext)| PAGE_EXTS.iter().any(|p| p.eq_ignore_ascii_case(ext)))
}

/// `name` with every trailing template extension removed.
pub fn strip_template_exts(name: &str) -> &str {
    let mut current = name;
    while let Some((stem, ext)) = split_ext(current) {
        if !is_template_ext(ext) {
            break;
        }
        current = stem;
    }
    current
}

/// File name a template renders to.
pub fn output_name(name: &str) -> String {
    let stripped = strip_template_exts(name);
    if split_ext(stripped).is_some() {
        stripped.to_string()
    } else {
        format!("{stripped}.{DEFAULT_OUTPUT_EXT}")
    }
}
