// SPDX-License-Identifier: MIT
//
// Dismissible user-facing notices.
//
// Every collaborator failure is caught at the orchestrator boundary and
// converted into one of these — none propagate further and none crash the
// navigation state machine.

use crate::error::ScandeckError;

/// How a notice should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Confirmation of a completed action ("Text copied").
    Info,
    /// Worth retrying as-is.
    Transient,
    /// The user must change something first (grant a permission, etc.).
    ActionRequired,
    /// Retrying won't help.
    Permanent,
}

/// A dismissible, plain-English notice shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Short summary (shown as the heading).
    pub message: String,
    /// What the user should do next (shown as body text; may be empty).
    pub suggestion: String,
    pub severity: Severity,
}

impl Notice {
    /// An informational confirmation with no suggestion text.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            suggestion: String::new(),
            severity: Severity::Info,
        }
    }
}

/// Convert a `ScandeckError` into the notice the UI presents for it.
pub fn for_error(err: &ScandeckError) -> Notice {
    match err {
        ScandeckError::CapabilityDenied(capability) => Notice {
            message: "Permission denied.".into(),
            suggestion: format!(
                "Access to the {capability} is required to scan documents. \
                 You can grant it in your device settings."
            ),
            severity: Severity::ActionRequired,
        },

        ScandeckError::Recognition(_) => Notice {
            message: "Text recognition didn't work on this document.".into(),
            suggestion: "Try scanning the page again with better lighting, making sure \
                         the text is sharp and in focus."
                .into(),
            severity: Severity::Transient,
        },

        ScandeckError::Render(_) => Notice {
            message: "The PDF could not be created.".into(),
            suggestion: "The scanned image may be damaged. Try scanning the page again."
                .into(),
            severity: Severity::Transient,
        },

        ScandeckError::Image(_) => Notice {
            message: "There's a problem with this image.".into(),
            suggestion: "The file may be damaged or in an unusual format.".into(),
            severity: Severity::Permanent,
        },

        ScandeckError::Share(detail) => Notice {
            message: "Sharing didn't work.".into(),
            suggestion: format!("Please try again. ({detail})"),
            severity: Severity::Transient,
        },

        ScandeckError::Persistence(_) | ScandeckError::Io(_) => Notice {
            message: "Your documents could not be saved.".into(),
            suggestion: "Check that the device has free storage space, then try again."
                .into(),
            severity: Severity::Transient,
        },

        ScandeckError::Serialization(_) => Notice {
            message: "Stored documents could not be read.".into(),
            suggestion: "The saved list may be damaged. New scans will still be saved."
                .into(),
            severity: Severity::Permanent,
        },

        ScandeckError::Bridge(detail) => Notice {
            message: "Something went wrong talking to the device.".into(),
            suggestion: format!("Please try again. ({detail})"),
            severity: Severity::Transient,
        },

        ScandeckError::PlatformUnavailable => Notice {
            message: "This feature isn't available on this device.".into(),
            suggestion: String::new(),
            severity: Severity::Permanent,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn denied_capability_names_the_capability() {
        let notice = for_error(&ScandeckError::CapabilityDenied("camera".into()));
        assert_eq!(notice.severity, Severity::ActionRequired);
        assert!(notice.suggestion.contains("camera"));
    }

    #[test]
    fn info_notice_has_no_suggestion() {
        let notice = Notice::info("Text copied to clipboard.");
        assert_eq!(notice.severity, Severity::Info);
        assert!(notice.suggestion.is_empty());
    }

    #[test]
    fn every_error_maps_to_a_nonempty_message() {
        let errors = [
            ScandeckError::CapabilityDenied("camera".into()),
            ScandeckError::Recognition("boom".into()),
            ScandeckError::Render("boom".into()),
            ScandeckError::Image("boom".into()),
            ScandeckError::Share("boom".into()),
            ScandeckError::Persistence("boom".into()),
            ScandeckError::Bridge("boom".into()),
            ScandeckError::PlatformUnavailable,
        ];
        for err in &errors {
            assert!(!for_error(err).message.is_empty(), "no message for {err:?}");
        }
    }
}
