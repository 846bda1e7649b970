use crate::{checker::Report, core::check_result::CheckResult};

pub const BANNER: &str = "🔍 Checking OpenAI API keys...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    /// One JSON object per line.
    Json,
}

/// Header printed before any report, if the format has one.
pub fn header(format: Format) -> Option<String> {
    match format {
        Format::Text => Some(format!("{BANNER}\n")),
        Format::Json => None,
    }
}

pub fn render(format: Format, report: &Report) -> serde_json::Result<String> {
    match format {
        Format::Text => Ok(render_line(report)),
        Format::Json => serde_json::to_string(report),
    }
}

/// `[<glyph>] <prefix>... <detail>`
///
/// Control characters in the prefix or detail are escaped so every report
/// stays on one line.
pub fn render_line(report: &Report) -> String {
    let prefix = escape_controls(&report.credential);
    match &report.result {
        CheckResult::Valid => format!("[✅ VALID]   {prefix}... is working."),
        CheckResult::Invalid { code, reason } => {
            let reason = escape_controls(reason);
            format!("[❌ INVALID] {prefix}... -> {code} | {reason}")
        }
        CheckResult::Errored { reason } => {
            let reason = escape_controls(reason);
            format!("[⚠️ ERROR]   {prefix}... -> {reason}")
        }
    }
}

fn escape_controls(s: &str) -> String {
    s.chars().fold(String::with_capacity(s.len()), |mut acc, c| {
        if c.is_control() {
            acc.extend(c.escape_default());
        } else {
            acc.push(c);
        }
        acc
    })
}

#[cfg(test)]
mod test {
    use super::*;

    fn report(result: CheckResult) -> Report {
        Report {
            credential: "sk-abcdef1".into(),
            result,
        }
    }

    #[test]
    fn text_lines() {
        assert_eq!(
            render_line(&report(CheckResult::Valid)),
            "[✅ VALID]   sk-abcdef1... is working."
        );
        assert_eq!(
            render_line(&report(CheckResult::Invalid {
                code: 401,
                reason: "Invalid API key".into()
            })),
            "[❌ INVALID] sk-abcdef1... -> 401 | Invalid API key"
        );
        assert_eq!(
            render_line(&report(CheckResult::Errored {
                reason: "request timed out after 10s".into()
            })),
            "[⚠️ ERROR]   sk-abcdef1... -> request timed out after 10s"
        );
    }

    #[test]
    fn control_characters_stay_on_one_line() {
        let multiline = Report {
            credential: "bad\nkey\r\t".into(),
            result: CheckResult::Errored {
                reason: "unable to build request: failed to parse header value".into(),
            },
        };
        let line = render_line(&multiline);
        assert_eq!(line.lines().count(), 1);
        assert_eq!(
            line,
            "[⚠️ ERROR]   bad\\nkey\\r\\t... -> unable to build request: failed to parse header value"
        );

        let remote = render_line(&Report {
            credential: "sk-abcdef1".into(),
            result: CheckResult::Invalid {
                code: 400,
                reason: "first\nsecond".into(),
            },
        });
        assert_eq!(remote, "[❌ INVALID] sk-abcdef1... -> 400 | first\\nsecond");
    }

    #[test]
    fn json_lines() {
        let line = render(
            Format::Json,
            &report(CheckResult::Invalid {
                code: 429,
                reason: "Unknown error".into(),
            }),
        )
        .unwrap();
        assert_eq!(
            line,
            r#"{"credential":"sk-abcdef1","status":"invalid","code":429,"reason":"Unknown error"}"#
        );
        assert!(!line.contains('\n'));
    }

    #[test]
    fn header_only_for_text() {
        assert_eq!(
            header(Format::Text).as_deref(),
            Some("🔍 Checking OpenAI API keys...\n")
        );
        assert_eq!(header(Format::Json), None);
    }
}
