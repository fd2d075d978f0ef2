//! Plain-text export of a candidate report.

use std::path::{Path, PathBuf};

use anyhow::Context;
use ghscore_client::Report;

const SECTION_RULE: &str = "-----------------------";

/// Serializes a report into the fixed plain-text layout: header, identity
/// block, three bulleted sections, then the summary verbatim.
pub(crate) fn report_text(report: &Report) -> String {
    let mut text = String::new();
    text.push_str("GITHUB CANDIDATE REPORT\n");
    text.push_str("=======================\n\n");
    text.push_str(&format!("Candidate: {}\n", report.candidate_name));
    text.push_str(&format!("Score:     {}/100\n", report.technical_score));
    text.push_str(&format!("Level:     {}\n", report.estimated_level));
    text.push_str(&format!("Verdict:   {}\n\n", report.hiring_verdict));

    push_section(&mut text, "PRIMARY LANGUAGES", &report.primary_languages);
    push_section(&mut text, "TECHNICAL STRENGTHS", &report.technical_strengths);
    push_section(&mut text, "RED FLAGS", &report.red_flags);

    text.push_str(&format!("{SECTION_RULE}\nSUMMARY\n{SECTION_RULE}\n"));
    text.push_str(&report.summary_report);
    text.push('\n');
    text
}

fn push_section(out: &mut String, title: &str, items: &[String]) {
    out.push_str(&format!("{SECTION_RULE}\n{title}\n{SECTION_RULE}\n"));
    for item in items {
        out.push_str(&format!("- {item}\n"));
    }
    out.push('\n');
}

/// File name for an exported report, keyed by the analyzed username.
pub(crate) fn export_file_name(username: &str) -> String {
    format!("github-report-{username}.txt")
}

/// Writes the report text into `dir` and returns the written path.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub(crate) fn write_report(report: &Report, username: &str, dir: &Path) -> anyhow::Result<PathBuf> {
    let path = dir.join(export_file_name(username));
    std::fs::write(&path, report_text(report))
        .with_context(|| format!("writing report to {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> Report {
        Report {
            candidate_name: "Octo Cat".to_owned(),
            technical_score: 85,
            estimated_level: "Senior".to_owned(),
            hiring_verdict: "Strong Hire".to_owned(),
            primary_languages: vec!["Rust".to_owned(), "Python".to_owned()],
            technical_strengths: vec!["Clean code".to_owned(), "Good documentation".to_owned()],
            red_flags: vec!["None".to_owned()],
            summary_report: "Excellent candidate with strong technical skills.".to_owned(),
        }
    }

    #[test]
    fn report_text_opens_with_the_fixed_header() {
        let text = report_text(&sample_report());
        assert!(text.starts_with("GITHUB CANDIDATE REPORT\n=======================\n\n"));
    }

    #[test]
    fn report_text_contains_identity_block() {
        let text = report_text(&sample_report());
        assert!(text.contains("Candidate: Octo Cat\n"));
        assert!(text.contains("Score:     85/100\n"));
        assert!(text.contains("Level:     Senior\n"));
        assert!(text.contains("Verdict:   Strong Hire\n"));
    }

    #[test]
    fn report_text_lists_every_item_as_a_dash_line_in_order() {
        let mut report = sample_report();
        report.red_flags = vec!["Low test coverage".to_owned(), "No CI".to_owned()];
        let text = report_text(&report);

        for item in [
            "- Rust",
            "- Python",
            "- Clean code",
            "- Good documentation",
            "- Low test coverage",
            "- No CI",
        ] {
            assert!(
                text.lines().any(|line| line == item),
                "expected line {item:?} in:\n{text}"
            );
        }

        let rust = text.find("- Rust").expect("first language missing");
        let python = text.find("- Python").expect("second language missing");
        assert!(rust < python, "items must keep input order");
    }

    #[test]
    fn report_text_ends_with_the_summary_verbatim() {
        let text = report_text(&sample_report());
        assert!(text.ends_with(
            "SUMMARY\n-----------------------\nExcellent candidate with strong technical skills.\n"
        ));
    }

    #[test]
    fn export_file_name_is_keyed_by_username() {
        assert_eq!(export_file_name("octocat"), "github-report-octocat.txt");
    }

    #[test]
    fn write_report_creates_the_named_file() {
        let dir = std::env::temp_dir().join(format!("ghscore-export-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("temp dir");

        let report = sample_report();
        let path = write_report(&report, "octocat", &dir).expect("write should succeed");

        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some("github-report-octocat.txt")
        );
        let written = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(written, report_text(&report));

        std::fs::remove_dir_all(&dir).ok();
    }
}
