//! Dead-link check command.

use anyhow::{Result, bail};

use super::common::compile_site;
use super::report::DeadLinkReport;
use crate::config::{CheckLevel, SiteConfig};
use crate::log;
use crate::utils::plural_count;

/// Compile every page without writing output and report dead wikilinks.
///
/// Fails when dead links exist and the level is `error`.
pub fn check_site(config: &SiteConfig) -> Result<()> {
    let site = compile_site(config);
    site.report.print();
    log!("check"; "{}", site.report);
    verdict(&site.report, config.check.level)
}

fn verdict(report: &DeadLinkReport, level: CheckLevel) -> Result<()> {
    if report.is_empty() || !level.is_error() {
        return Ok(());
    }
    bail!(
        "found {} in {}",
        plural_count(report.link_count(), "dead wikilink"),
        plural_count(report.file_count(), "file")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wikilink::DeadLink;
    use std::fs;
    use tempfile::TempDir;

    fn report_with(n: usize) -> DeadLinkReport {
        let mut report = DeadLinkReport::new();
        for i in 0..n {
            report.add(DeadLink {
                source: "a.md".into(),
                raw: format!("[[p{i}]]"),
                page: format!("p{i}"),
            });
        }
        report
    }

    #[test]
    fn test_verdict() {
        assert!(verdict(&report_with(0), CheckLevel::Error).is_ok());
        assert!(verdict(&report_with(2), CheckLevel::Warn).is_ok());

        let err = verdict(&report_with(2), CheckLevel::Error).unwrap_err();
        assert_eq!(err.to_string(), "found 2 dead wikilinks in 1 file");
    }

    #[test]
    fn test_check_site() {
        let temp = TempDir::new().unwrap();
        let content = temp.path().join("content");
        fs::create_dir_all(&content).unwrap();
        fs::write(content.join("a.md"), "[[b]] and [[nowhere-at-all]]").unwrap();
        fs::write(content.join("b.md"), "[[a]]").unwrap();

        let mut config = SiteConfig::default();
        config.build.content = content;
        config.build.output = temp.path().join("public");

        assert!(check_site(&config).is_err());
        assert!(!config.build.output.exists());

        config.check.level = CheckLevel::Warn;
        assert!(check_site(&config).is_ok());

        fs::write(temp.path().join("content/a.md"), "[[b]]").unwrap();
        config.check.level = CheckLevel::Error;
        assert!(check_site(&config).is_ok());
    }
}
