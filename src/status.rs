use serde::Deserialize;

const PREFIX: &str = "Sending: ";
const IN_PROGRESS: &str = "In progress...";
const ERROR_TEXT: &str = "Sending: Error";

/// Payload served by `GET /status/sending`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SendingStatus {
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub progress: Option<String>,
}

impl SendingStatus {
    /// Progress text, with the empty string treated the same as a missing field.
    fn progress(&self) -> Option<&str> {
        self.progress.as_deref().filter(|p| !p.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeStyle {
    #[default]
    Neutral,
    Connected,
    Disconnected,
}

impl BadgeStyle {
    pub fn class_name(self) -> &'static str {
        match self {
            BadgeStyle::Neutral => "badge",
            BadgeStyle::Connected => "badge connected",
            BadgeStyle::Disconnected => "badge disconnected",
        }
    }
}

/// What the badge shows after a poll.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BadgeView {
    pub text: String,
    pub style: BadgeStyle,
}

impl BadgeView {
    pub fn from_status(status: &SendingStatus) -> Self {
        if status.active {
            return Self {
                text: format!("{}{}", PREFIX, status.progress().unwrap_or(IN_PROGRESS)),
                style: BadgeStyle::Connected,
            };
        }

        match status.progress() {
            Some(progress) => Self {
                text: format!("{}{}", PREFIX, progress),
                style: BadgeStyle::Neutral,
            },
            None => Self::default(),
        }
    }

    pub fn error() -> Self {
        Self {
            text: ERROR_TEXT.to_string(),
            style: BadgeStyle::Disconnected,
        }
    }

    pub fn class_name(&self) -> &'static str {
        self.style.class_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> SendingStatus {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_active_with_progress() {
        let view = BadgeView::from_status(&parse(r#"{"active": true, "progress": "45%"}"#));
        assert_eq!(view.text, "Sending: 45%");
        assert_eq!(view.class_name(), "badge connected");
    }

    #[test]
    fn test_active_without_progress_falls_back() {
        let view = BadgeView::from_status(&parse(r#"{"active": true}"#));
        assert_eq!(view.text, "Sending: In progress...");
        assert_eq!(view.class_name(), "badge connected");

        let view = BadgeView::from_status(&parse(r#"{"active": true, "progress": ""}"#));
        assert_eq!(view.text, "Sending: In progress...");
        assert_eq!(view.style, BadgeStyle::Connected);
    }

    #[test]
    fn test_idle_with_progress_is_neutral() {
        let view = BadgeView::from_status(&parse(r#"{"active": false, "progress": "Done: 12/12"}"#));
        assert_eq!(view.text, "Sending: Done: 12/12");
        assert_eq!(view.class_name(), "badge");
    }

    #[test]
    fn test_idle_without_progress_is_blank() {
        for json in [
            r#"{"active": false}"#,
            r#"{"active": false, "progress": ""}"#,
            r#"{"active": false, "progress": null}"#,
        ] {
            let view = BadgeView::from_status(&parse(json));
            assert_eq!(view.text, "", "payload {}", json);
            assert_eq!(view.class_name(), "badge");
        }
    }

    #[test]
    fn test_active_always_prefixed() {
        for progress in [None, Some(""), Some("1 of 3"), Some("Sending: nested")] {
            let status = SendingStatus {
                active: true,
                progress: progress.map(str::to_string),
            };
            let view = BadgeView::from_status(&status);
            assert!(view.text.starts_with("Sending: "));
            assert_eq!(view.style, BadgeStyle::Connected);
        }
    }

    #[test]
    fn test_error_view() {
        let view = BadgeView::error();
        assert_eq!(view.text, "Sending: Error");
        assert_eq!(view.class_name(), "badge disconnected");
    }

    #[test]
    fn test_payload_shape() {
        let status = parse(r#"{"active": true, "progress": "3/4", "queued": 7}"#);
        assert_eq!(status.progress.as_deref(), Some("3/4"));

        assert!(serde_json::from_str::<SendingStatus>(r#"{"active": "yes"}"#).is_err());
        assert!(serde_json::from_str::<SendingStatus>(r#"{"active": true, "progress": 3}"#).is_err());
    }

    #[test]
    fn test_missing_active_is_idle() {
        let view = BadgeView::from_status(&parse("{}"));
        assert_eq!(view.text, "");
        assert_eq!(view.class_name(), "badge");

        let view = BadgeView::from_status(&parse(r#"{"progress": "3/4"}"#));
        assert_eq!(view.text, "Sending: 3/4");
        assert_eq!(view.class_name(), "badge");
    }
}
