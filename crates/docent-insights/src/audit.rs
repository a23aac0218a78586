//! Mock compliance audit for uploaded UI screenshots.
//!
//! The report is canned: three findings every screenshot gets plus one
//! role-specific finding. Only the upload validation touches the filesystem.

use std::path::Path;

use docent_core::entities::{AuditIssue, AuditReport};
use docent_core::enums::{IssueSeverity, Role};

use crate::error::AuditError;

/// Extensions accepted as image uploads, compared case-insensitively.
pub const IMAGE_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "gif", "webp", "svg", "bmp"];

const ERROR_PENALTY: u32 = 15;
const WARNING_PENALTY: u32 = 5;

/// Check that `path` names a readable image file.
///
/// # Errors
///
/// Returns `AuditError::UnsupportedFile` for a non-image extension and
/// `AuditError::Io` when the file cannot be read.
pub fn validate_upload(path: &Path) -> Result<(), AuditError> {
    let is_image = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(ext))
        });
    if !is_image {
        return Err(AuditError::UnsupportedFile {
            path: path.to_path_buf(),
        });
    }

    let metadata = std::fs::metadata(path).map_err(|source| AuditError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if !metadata.is_file() {
        return Err(AuditError::UnsupportedFile {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

fn issue(severity: IssueSeverity, message: &str, suggestion: &str) -> AuditIssue {
    AuditIssue {
        severity,
        message: message.to_string(),
        suggestion: suggestion.to_string(),
    }
}

/// Findings for a screenshot, tailored to the viewer's role when known.
#[must_use]
pub fn audit_issues(role: Option<Role>) -> Vec<AuditIssue> {
    let mut issues = vec![
        issue(
            IssueSeverity::Error,
            "Border radius detected: 8px",
            "Carbon uses square corners (0px border-radius). Update to match design system standards.",
        ),
        issue(
            IssueSeverity::Warning,
            "Non-standard spacing: 18px",
            "Use Carbon spacing tokens ($spacing-05 = 16px or $spacing-06 = 24px) for consistency.",
        ),
        issue(
            IssueSeverity::Info,
            "Color contrast: 4.8:1",
            "Meets WCAG AA standards. Consider increasing to 7:1 for AAA compliance.",
        ),
    ];

    match role {
        Some(Role::Developer) => issues.push(issue(
            IssueSeverity::Warning,
            "Custom button styling detected",
            "Use @carbon/react Button component for consistency and built-in accessibility.",
        )),
        Some(Role::Designer) => issues.push(issue(
            IssueSeverity::Warning,
            "Font weight 600 detected",
            "Carbon uses specific weights: 400 (Regular), 600 (Semi-Bold). Ensure Figma styles match.",
        )),
        Some(Role::Guardian) | None => {}
    }
    issues
}

/// `max(0, 100 - 15 * errors - 5 * warnings)`. Info findings are free.
#[must_use]
pub fn compliance_score(issues: &[AuditIssue]) -> u32 {
    let penalty: u32 = issues
        .iter()
        .map(|issue| match issue.severity {
            IssueSeverity::Error => ERROR_PENALTY,
            IssueSeverity::Warning => WARNING_PENALTY,
            IssueSeverity::Info => 0,
        })
        .sum();
    100u32.saturating_sub(penalty)
}

/// Qualitative band for a score: 90 and up is good, 70 and up fair.
#[must_use]
pub const fn score_band(score: u32) -> &'static str {
    match score {
        90.. => "good",
        70..=89 => "fair",
        _ => "poor",
    }
}

#[must_use]
pub fn generate_audit(role: Option<Role>) -> AuditReport {
    let issues = audit_issues(role);
    let score = compliance_score(&issues);
    tracing::debug!(?role, score, issues = issues.len(), "generated audit report");
    AuditReport { score, issues }
}
