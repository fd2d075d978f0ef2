//! Terminal projection of profile and report data.
//!
//! Everything here is a pure mapping from the wire models to strings; the
//! only printing happens in [`ConsoleView`]. The flow controller talks to a
//! view through the [`AnalysisView`] seam so tests can record the exact
//! sequence of phase and progress transitions.

use chrono::Utc;
use ghscore_client::{Profile, Report};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::analyze::UiPhase;

/// Sentinel entry in `red_flags` meaning the backend found nothing.
const NO_FLAGS_SENTINEL: &str = "None";

/// Step names printed as each analysis phase completes.
const STEP_LABELS: [&str; 4] = [
    "profile fetched",
    "repositories scanned",
    "code quality reviewed",
    "report generated",
];

/// Sink for everything the analysis flow wants to show the user.
pub(crate) trait AnalysisView {
    fn phase(&mut self, phase: UiPhase);
    fn progress(&mut self, completed: u8);
    fn profile(&mut self, profile: &Profile);
    fn report(&mut self, report: &Report);
    fn error(&mut self, message: &str);
}

/// Renders the analysis to stdout/stderr.
pub(crate) struct ConsoleView;

impl AnalysisView for ConsoleView {
    fn phase(&mut self, phase: UiPhase) {
        match phase {
            UiPhase::Loading => println!("analyzing candidate..."),
            UiPhase::Idle | UiPhase::Results | UiPhase::Error => {}
        }
    }

    fn progress(&mut self, completed: u8) {
        // 0 is the starting state; 1..=4 announce the step that finished.
        if completed >= 1 {
            if let Some(label) = STEP_LABELS.get(usize::from(completed) - 1) {
                println!("[{completed}/4] {label}");
            }
        }
    }

    fn profile(&mut self, profile: &Profile) {
        println!();
        print!("{}", format_profile(profile));
    }

    fn report(&mut self, report: &Report) {
        println!();
        print!("{}", format_report(report));
    }

    fn error(&mut self, message: &str) {
        eprintln!("error: {message}");
    }
}

/// Color/style grouping applied to a hiring verdict label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum VerdictBand {
    Positive,
    Warning,
    Negative,
}

impl VerdictBand {
    /// Exact-match mapping: `"Strong Hire"` is positive, `"Lean Hire"` gets
    /// a warning band, and any other label is negative.
    pub(crate) fn for_verdict(verdict: &str) -> Self {
        match verdict {
            "Strong Hire" => VerdictBand::Positive,
            "Lean Hire" => VerdictBand::Warning,
            _ => VerdictBand::Negative,
        }
    }

    fn marker(self) -> &'static str {
        match self {
            VerdictBand::Positive => "+",
            VerdictBand::Warning => "~",
            VerdictBand::Negative => "!",
        }
    }
}

/// Star rating derived from the score: one star per full 20 points.
pub(crate) fn star_count(score: u8) -> u8 {
    score.min(100) / 20
}

/// Proportion for the score gauge; the 0–100 score maps straight to percent.
pub(crate) fn ring_percent(score: u8) -> u8 {
    score.min(100)
}

fn stars(score: u8) -> String {
    "\u{2b50}".repeat(usize::from(star_count(score)))
}

fn score_gauge(score: u8) -> String {
    const WIDTH: usize = 20;
    let percent = usize::from(ring_percent(score));
    let filled = percent * WIDTH / 100;
    format!(
        "[{}{}] {percent}%",
        "#".repeat(filled),
        "-".repeat(WIDTH - filled)
    )
}

/// Placeholder avatar keyed by display name, for profiles without one.
fn placeholder_avatar(name: &str) -> String {
    format!(
        "https://ui-avatars.com/api/?name={}&size=120",
        utf8_percent_encode(name, NON_ALPHANUMERIC)
    )
}

/// `true` when the flag list should render as the single reassuring item.
fn red_flags_clear(flags: &[String]) -> bool {
    flags.is_empty() || flags.iter().any(|f| f == NO_FLAGS_SENTINEL)
}

pub(crate) fn format_profile(profile: &Profile) -> String {
    let bio = profile.bio.as_deref().unwrap_or("\u{2014}");
    let avatar = profile
        .avatar_url
        .clone()
        .unwrap_or_else(|| placeholder_avatar(&profile.name));

    let mut out = String::new();
    out.push_str(&format!("Candidate: {}\n", profile.name));
    out.push_str(&format!("Bio:       {bio}\n"));
    out.push_str(&format!(
        "Repos:     {:<8}Followers: {}\n",
        profile.public_repos, profile.followers
    ));
    out.push_str(&format!("Avatar:    {avatar}\n"));
    out
}

pub(crate) fn format_report(report: &Report) -> String {
    let now = Utc::now().format("%Y-%m-%d %H:%M UTC");
    let band = VerdictBand::for_verdict(&report.hiring_verdict);

    let mut out = String::new();
    out.push_str("# Candidate Report\n");
    out.push('\n');
    out.push_str(&format!("**Generated**: {now}\n"));
    out.push('\n');
    out.push_str(&format!(
        "Score:     {}/100  {}\n",
        report.technical_score,
        score_gauge(report.technical_score)
    ));
    out.push_str(&format!("Stars:     {}\n", stars(report.technical_score)));
    out.push_str(&format!(
        "Verdict:   [{}] {}\n",
        band.marker(),
        report.hiring_verdict
    ));
    out.push_str(&format!("Level:     {}\n", report.estimated_level));
    out.push('\n');

    let tags: Vec<String> = report
        .primary_languages
        .iter()
        .map(|lang| format!("[{lang}]"))
        .collect();
    out.push_str(&format!("Languages: {}\n", tags.join(" ")));
    out.push('\n');

    out.push_str("Strengths:\n");
    for strength in &report.technical_strengths {
        out.push_str(&format!("  \u{2714} {strength}\n"));
    }
    out.push('\n');

    out.push_str("Red flags:\n");
    if red_flags_clear(&report.red_flags) {
        out.push_str("  \u{2714} no significant red flags detected\n");
    } else {
        for flag in &report.red_flags {
            out.push_str(&format!("  \u{26a0} {flag}\n"));
        }
    }
    out.push('\n');

    out.push_str("Summary:\n");
    out.push_str(&report.summary_report);
    out.push('\n');
    out
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
