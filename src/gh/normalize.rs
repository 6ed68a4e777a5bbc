//! Output normalization
//!
//! gh subcommands disagree about what success looks like: some print a
//! JSON object, some a JSON array, some a bare resource URL, some a plain
//! confirmation line or nothing at all. Each tool declares the shape its
//! subcommand produces, and `normalize` turns the execution outcome into
//! either a parsed payload or an error envelope. A shape mismatch is a
//! loud `UNEXPECTED_OUTPUT_FORMAT` error, never a guess.

use serde::Serialize;
use serde_json::Value;

use super::error::{ErrorEnvelope, GhError, GhResult};

/// Declared output shape of a gh subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputShape {
    /// `--json`/`--format json` output that must be a JSON object
    JsonObject,
    /// `--json` output that must be a JSON array
    JsonArray,
    /// A single resource URL (create/comment subcommands)
    BareUrl,
    /// Free text, possibly empty (close/edit/diff subcommands)
    PlainText,
}

impl OutputShape {
    fn expected(&self) -> &'static str {
        match self {
            OutputShape::JsonObject => "JSON object",
            OutputShape::JsonArray => "JSON array",
            OutputShape::BareUrl => "bare URL",
            OutputShape::PlainText => "plain text",
        }
    }
}

/// Normalized success payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Json(Value),
    Text(String),
}

/// Turn an execution outcome into a payload or an error envelope.
///
/// Pure function of its inputs; never panics. Failure envelopes carry
/// stderr/exit code or the raw output in their details when available.
pub fn normalize(outcome: GhResult<String>, shape: OutputShape) -> Result<Payload, ErrorEnvelope> {
    let stdout = match outcome {
        Ok(stdout) => stdout,
        Err(err) => return Err(err.to_envelope()),
    };

    match shape {
        OutputShape::PlainText => Ok(Payload::Text(stdout)),
        OutputShape::BareUrl => {
            if is_bare_url(&stdout) {
                Ok(Payload::Text(stdout))
            } else {
                Err(mismatch(shape, stdout))
            }
        }
        OutputShape::JsonObject => match serde_json::from_str::<Value>(&stdout) {
            Ok(value) if value.is_object() => Ok(Payload::Json(value)),
            _ => Err(mismatch(shape, stdout)),
        },
        OutputShape::JsonArray => match serde_json::from_str::<Value>(&stdout) {
            Ok(value) if value.is_array() => Ok(Payload::Json(value)),
            _ => Err(mismatch(shape, stdout)),
        },
    }
}

fn mismatch(shape: OutputShape, raw: String) -> ErrorEnvelope {
    GhError::UnexpectedOutputFormat {
        expected: shape.expected(),
        raw,
    }
    .to_envelope()
}

/// A single http(s) URL with no surrounding text.
fn is_bare_url(s: &str) -> bool {
    !s.is_empty()
        && (s.starts_with("https://") || s.starts_with("http://"))
        && !s.contains(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn failure_outcome_becomes_envelope() {
        let outcome = Err(GhError::CommandFailed {
            code: 2,
            stderr: "bad flag".into(),
        });
        let envelope = normalize(outcome, OutputShape::PlainText).unwrap_err();
        assert_eq!(envelope.code, "GH_COMMAND_FAILED");
        let details = envelope.details.unwrap();
        assert_eq!(details["exit_code"], 2);
        assert_eq!(details["stderr"], "bad flag");
    }

    #[test]
    fn json_object_parses() {
        let got = normalize(
            Ok(r#"{"number":5,"title":"t"}"#.into()),
            OutputShape::JsonObject,
        )
        .unwrap();
        assert_eq!(got, Payload::Json(json!({"number": 5, "title": "t"})));
    }

    #[test]
    fn json_array_parses() {
        let got = normalize(Ok(r#"[{"number":1},{"number":2}]"#.into()), OutputShape::JsonArray)
            .unwrap();
        assert_eq!(got, Payload::Json(json!([{"number": 1}, {"number": 2}])));
    }

    #[test]
    fn malformed_json_keeps_raw_output_verbatim() {
        let raw = "To https://github.com ... done";
        let envelope = normalize(Ok(raw.into()), OutputShape::JsonObject).unwrap_err();
        assert_eq!(envelope.code, "UNEXPECTED_OUTPUT_FORMAT");
        assert_eq!(envelope.details.unwrap()["raw"], raw);
    }

    #[test]
    fn wrong_json_container_is_a_mismatch() {
        let envelope = normalize(Ok(r#"{"a":1}"#.into()), OutputShape::JsonArray).unwrap_err();
        assert_eq!(envelope.code, "UNEXPECTED_OUTPUT_FORMAT");

        let envelope = normalize(Ok("[1,2]".into()), OutputShape::JsonObject).unwrap_err();
        assert_eq!(envelope.code, "UNEXPECTED_OUTPUT_FORMAT");
    }

    #[test]
    fn json_scalar_is_a_mismatch() {
        let envelope = normalize(Ok("42".into()), OutputShape::JsonObject).unwrap_err();
        assert_eq!(envelope.code, "UNEXPECTED_OUTPUT_FORMAT");
    }

    #[test]
    fn bare_url_passes_through_unchanged() {
        let url = "https://host/owner/repo/issues/42";
        let got = normalize(Ok(url.into()), OutputShape::BareUrl).unwrap();
        assert_eq!(got, Payload::Text(url.into()));
    }

    #[test]
    fn non_url_text_fails_the_bare_url_shape() {
        for raw in ["Issue closed", "", "https://a b", "see https://x"] {
            let envelope = normalize(Ok(raw.into()), OutputShape::BareUrl).unwrap_err();
            assert_eq!(envelope.code, "UNEXPECTED_OUTPUT_FORMAT", "raw: {raw:?}");
        }
    }

    #[test]
    fn plain_text_passes_through_even_when_empty() {
        assert_eq!(
            normalize(Ok(String::new()), OutputShape::PlainText).unwrap(),
            Payload::Text(String::new())
        );
        assert_eq!(
            normalize(Ok("✓ Closed issue #3".into()), OutputShape::PlainText).unwrap(),
            Payload::Text("✓ Closed issue #3".into())
        );
    }

    #[test]
    fn payload_serializes_untagged() {
        let json = serde_json::to_value(Payload::Json(json!({"a": 1}))).unwrap();
        assert_eq!(json, json!({"a": 1}));
        let text = serde_json::to_value(Payload::Text("hi".into())).unwrap();
        assert_eq!(text, json!("hi"));
    }
}
