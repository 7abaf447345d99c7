use serde_json::{Map, Value};

/// What the user asked the `parameters` command to do.
///
/// Classification happens before any storage access, so a malformed input
/// can never reach the store.
#[derive(Debug, Clone, PartialEq)]
pub enum ParametersInput {
    /// Clear the stored parameters, falling back to endpoint defaults.
    Reset,
    /// Display the stored parameters without touching them.
    Show,
    /// Replace the stored parameters wholesale with this object.
    Set(Map<String, Value>),
}

#[derive(Debug, thiserror::Error)]
pub enum ParametersInputError {
    #[error(":warning: Please use a code block (`` eg. ```json ``)")]
    NotACodeBlock,
    #[error("Invalid JSON format!")]
    InvalidJson(#[source] serde_json::Error),
}

impl ParametersInput {
    /// Classifies a raw `parameters` argument.
    ///
    /// Sentinel keywords are matched case-sensitively; anything else must be
    /// a triple-backtick code block containing a JSON object.
    pub fn parse(raw: &str) -> Result<Self, ParametersInputError> {
        match raw {
            "reset" | "clear" => Ok(Self::Reset),
            "show" | "list" => Ok(Self::Show),
            raw => {
                let json = strip_fence(raw).ok_or(ParametersInputError::NotACodeBlock)?;

                serde_json::from_str(json)
                    .map(Self::Set)
                    .map_err(ParametersInputError::InvalidJson)
            }
        }
    }
}

/// Strips the leading fence (with an optional `json` language tag) and the
/// trailing fence when present. `None` if the input is not fenced at all.
fn strip_fence(raw: &str) -> Option<&str> {
    let inner = raw.strip_prefix("```")?;
    let inner = inner.strip_prefix("json").unwrap_or(inner);

    Some(inner.trim_end().strip_suffix("```").unwrap_or(inner))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn sentinels_classify() {
        assert_eq!(ParametersInput::parse("reset").unwrap(), ParametersInput::Reset);
        assert_eq!(ParametersInput::parse("clear").unwrap(), ParametersInput::Reset);
        assert_eq!(ParametersInput::parse("show").unwrap(), ParametersInput::Show);
        assert_eq!(ParametersInput::parse("list").unwrap(), ParametersInput::Show);
    }

    #[test]
    fn sentinels_are_case_sensitive() {
        assert!(matches!(
            ParametersInput::parse("Reset"),
            Err(ParametersInputError::NotACodeBlock)
        ));
    }

    #[test]
    fn fenced_object_parses() {
        let parsed = ParametersInput::parse("```{\"frequency_penalty\": 2.0}```").unwrap();

        assert_eq!(
            parsed,
            ParametersInput::Set(object(json!({"frequency_penalty": 2.0})))
        );
    }

    #[test]
    fn json_language_tag_is_stripped() {
        let parsed =
            ParametersInput::parse("```json\n{\"max_tokens\": 200, \"logit_bias\": {\"88\": -100}}\n```")
                .unwrap();

        assert_eq!(
            parsed,
            ParametersInput::Set(object(json!({"max_tokens": 200, "logit_bias": {"88": -100}})))
        );
    }

    #[test]
    fn missing_trailing_fence_is_tolerated() {
        let parsed = ParametersInput::parse("```{\"temperature\": 0.7}").unwrap();

        assert_eq!(
            parsed,
            ParametersInput::Set(object(json!({"temperature": 0.7})))
        );
    }

    #[test]
    fn unfenced_input_is_a_usage_error() {
        assert!(matches!(
            ParametersInput::parse("not a fence"),
            Err(ParametersInputError::NotACodeBlock)
        ));
        assert!(matches!(
            ParametersInput::parse("{\"max_tokens\": 100}"),
            Err(ParametersInputError::NotACodeBlock)
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            ParametersInput::parse("```{not json}```"),
            Err(ParametersInputError::InvalidJson(_))
        ));
    }

    #[test]
    fn non_object_json_is_a_parse_error() {
        assert!(matches!(
            ParametersInput::parse("```[1, 2, 3]```"),
            Err(ParametersInputError::InvalidJson(_))
        ));
        assert!(matches!(
            ParametersInput::parse("```\"just a string\"```"),
            Err(ParametersInputError::InvalidJson(_))
        ));
    }

    #[test]
    fn error_messages_are_user_facing() {
        let why = ParametersInput::parse("oops").unwrap_err();
        assert_eq!(why.to_string(), ":warning: Please use a code block (`` eg. ```json ``)");

        let why = ParametersInput::parse("```oops```").unwrap_err();
        assert_eq!(why.to_string(), "Invalid JSON format!");
    }
}
