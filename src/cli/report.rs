//! Dead-link report grouped by source file.

use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};

use owo_colors::{OwoColorize, Stream, Style};

use crate::utils::plural_s;
use crate::wikilink::DeadLink;

/// Dead links of a build, grouped by source document.
#[derive(Debug, Default)]
pub struct DeadLinkReport {
    files: BTreeMap<String, Vec<DeadLink>>,
}

impl DeadLinkReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, dead_link: DeadLink) {
        self.files
            .entry(dead_link.source.clone())
            .or_default()
            .push(dead_link);
    }

    pub fn extend(&mut self, dead_links: impl IntoIterator<Item = DeadLink>) {
        for dead_link in dead_links {
            self.add(dead_link);
        }
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn link_count(&self) -> usize {
        self.files.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Print every dead link, one group per file, to stderr.
    pub fn print(&self) {
        self.write_to(&mut io::stderr().lock()).ok();
    }

    fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        if self.is_empty() {
            return Ok(());
        }
        writeln!(out)?;

        let file_count = self.file_count();
        let link_count = self.link_count();
        let counts = format!(
            "({file_count} file{}, {link_count} link{})",
            plural_s(file_count),
            plural_s(link_count)
        );
        writeln!(
            out,
            "{} {}",
            "dead wikilinks"
                .if_supports_color(Stream::Stderr, |t| t.style(Style::new().red().bold())),
            counts.if_supports_color(Stream::Stderr, |t| t.dimmed())
        )?;

        for (path, dead_links) in &self.files {
            writeln!(
                out,
                "{}{}{}",
                "[".if_supports_color(Stream::Stderr, |t| t.dimmed()),
                path.if_supports_color(Stream::Stderr, |t| t.cyan()),
                "]".if_supports_color(Stream::Stderr, |t| t.dimmed())
            )?;
            for dead_link in dead_links {
                writeln!(
                    out,
                    "{} {}",
                    "→".if_supports_color(Stream::Stderr, |t| t.red()),
                    dead_link
                )?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for DeadLinkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.link_count();
        if total == 0 {
            write!(
                f,
                "{}",
                "no dead wikilinks".if_supports_color(Stream::Stderr, |t| t.green())
            )
        } else {
            write!(
                f,
                "{} {} {}",
                "found".if_supports_color(Stream::Stderr, |t| t.dimmed()),
                total.if_supports_color(Stream::Stderr, |t| t.style(Style::new().red().bold())),
                format!("dead wikilink{}", plural_s(total))
                    .if_supports_color(Stream::Stderr, |t| t.dimmed())
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dead(source: &str, page: &str) -> DeadLink {
        DeadLink {
            source: source.to_string(),
            raw: format!("[[{page}]]"),
            page: page.to_string(),
        }
    }

    #[test]
    fn test_grouping_and_counts() {
        let mut report = DeadLinkReport::new();
        assert!(report.is_empty());

        report.extend([dead("b.md", "X"), dead("a.md", "Y"), dead("b.md", "Z")]);
        assert_eq!(report.file_count(), 2);
        assert_eq!(report.link_count(), 3);

        let files: Vec<_> = report.files.keys().map(String::as_str).collect();
        assert_eq!(files, ["a.md", "b.md"]);
        let pages: Vec<_> = report.files["b.md"].iter().map(|d| d.page.as_str()).collect();
        assert_eq!(pages, ["X", "Z"]);
    }

    #[test]
    fn test_summary() {
        owo_colors::set_override(false);
        let mut report = DeadLinkReport::new();
        assert_eq!(report.to_string(), "no dead wikilinks");

        report.add(dead("a.md", "X"));
        assert_eq!(report.to_string(), "found 1 dead wikilink");
        report.add(dead("a.md", "Y"));
        assert_eq!(report.to_string(), "found 2 dead wikilinks");
    }

    #[test]
    fn test_write_grouped_without_color() {
        owo_colors::set_override(false);
        let mut report = DeadLinkReport::new();
        report.extend([dead("b.md", "X"), dead("a.md", "Y")]);

        let mut out = Vec::new();
        report.write_to(&mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(
            out,
            concat!(
                "\n",
                "dead wikilinks (2 files, 2 links)\n",
                "[a.md]\n",
                "→ Dead wikilink: [[Y]] - page \"Y\" not found\n",
                "[b.md]\n",
                "→ Dead wikilink: [[X]] - page \"X\" not found\n",
            )
        );
    }

    #[test]
    fn test_write_empty_report() {
        let mut out = Vec::new();
        DeadLinkReport::new().write_to(&mut out).unwrap();
        assert!(out.is_empty());
    }
}
