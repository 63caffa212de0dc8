//! Read-only check of which icon files are already present.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::config::GeneratorConfig;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconStatus {
    pub size: u32,
    pub file_name: String,
    pub present: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub output_dir: String,
    pub icons: Vec<IconStatus>,
    /// Sorted entry names, `None` when the directory does not exist.
    pub listing: Option<Vec<String>>,
}

impl StatusReport {
    pub fn is_complete(&self) -> bool {
        self.icons.iter().all(|s| s.present)
    }

    pub fn missing(&self) -> impl Iterator<Item = &IconStatus> {
        self.icons.iter().filter(|s| !s.present)
    }
}

pub fn check_icons(root: &Path, config: &GeneratorConfig) -> Result<StatusReport> {
    let icons = config
        .sizes
        .iter()
        .map(|&size| IconStatus {
            size,
            file_name: config.file_name(size),
            present: config.output_path(root, size).is_file(),
        })
        .collect();

    let dir = root.join(&config.output_dir);
    let listing = if dir.is_dir() {
        let mut names = fs::read_dir(&dir)?
            .map(|e| e.map(|e| e.file_name().to_string_lossy().into_owned()))
            .collect::<io::Result<Vec<_>>>()?;
        names.sort();
        Some(names)
    } else {
        None
    };

    let report = StatusReport { output_dir: config.output_dir.clone(), icons, listing };
    log::debug!("status: {} of {} icons present", report.icons.len() - report.missing().count(), report.icons.len());
    Ok(report)
}

pub fn write_report<W: Write>(report: &StatusReport, out: &mut W) -> io::Result<()> {
    writeln!(out, "Required icon sizes:")?;
    for s in &report.icons {
        if s.present {
            writeln!(out, "  [ok] {} - exists", s.file_name)?;
        } else {
            writeln!(out, "  [missing] {} - missing", s.file_name)?;
        }
    }
    match &report.listing {
        Some(names) => {
            writeln!(out, "Contents of {}/:", report.output_dir)?;
            for name in names {
                writeln!(out, "  - {}", name)?;
            }
        }
        None => writeln!(out, "Directory {}/ does not exist", report.output_dir)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("shield-icons-status-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn reports_present_and_missing() {
        let root = scratch_dir("partial");
        fs::create_dir(root.join("icons")).unwrap();
        fs::write(root.join("icons/icon16.png"), b"x").unwrap();
        fs::write(root.join("icons/logo.png"), b"x").unwrap();
        // A directory with an icon's name does not count.
        fs::create_dir(root.join("icons/icon48.png")).unwrap();

        let report = check_icons(&root, &GeneratorConfig::default()).unwrap();
        assert!(!report.is_complete());
        let missing: Vec<u32> = report.missing().map(|s| s.size).collect();
        assert_eq!(missing, vec![32, 48, 128]);
        assert_eq!(
            report.listing,
            Some(vec!["icon16.png".to_string(), "icon48.png".to_string(), "logo.png".to_string()])
        );

        let mut out = Vec::new();
        write_report(&report, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("  [ok] icon16.png - exists\n"));
        assert!(text.contains("  [missing] icon128.png - missing\n"));
        assert!(text.contains("Contents of icons/:\n  - icon16.png\n"));
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn absent_directory_has_no_listing() {
        let root = scratch_dir("absent");
        let report = check_icons(&root, &GeneratorConfig::default()).unwrap();
        assert_eq!(report.listing, None);
        assert_eq!(report.missing().count(), 4);

        let mut out = Vec::new();
        write_report(&report, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().ends_with("Directory icons/ does not exist\n"));
        let _ = fs::remove_dir_all(&root);
    }
}
