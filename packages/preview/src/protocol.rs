//! Wire shapes posted from the preview to the host

use crate::PreviewError;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleKind {
    Log,
    Error,
    Warn,
    Info,
}

impl ConsoleKind {
    pub const ALL: [ConsoleKind; 4] = [ConsoleKind::Log, ConsoleKind::Error, ConsoleKind::Warn, ConsoleKind::Info];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConsoleKind::Log => "log",
            ConsoleKind::Error => "error",
            ConsoleKind::Warn => "warn",
            ConsoleKind::Info => "info",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for ConsoleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One console call made inside the preview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsoleMessage {
    #[serde(rename = "type")]
    pub kind: ConsoleKind,

    #[serde(rename = "message")]
    pub args: Vec<Value>,

    pub timestamp: String,
}

impl ConsoleMessage {
    /// Render arguments as a console line: composites as pretty JSON,
    /// strings raw, joined by spaces
    pub fn display(&self) -> String {
        self.args
            .iter()
            .map(|arg| match arg {
                Value::String(s) => s.clone(),
                Value::Array(_) | Value::Object(_) => {
                    serde_json::to_string_pretty(arg).unwrap_or_else(|_| arg.to_string())
                }
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BridgeMessage {
    /// `{"command": "clear"}`, sent once when a preview boots
    Clear,
    Console(ConsoleMessage),
}

impl BridgeMessage {
    pub fn to_value(&self) -> Value {
        match self {
            BridgeMessage::Clear => json!({ "command": "clear" }),
            BridgeMessage::Console(message) => json!({
                "type": message.kind,
                "message": message.args,
                "timestamp": message.timestamp,
            }),
        }
    }

    pub fn to_json(&self) -> String {
        self.to_value().to_string()
    }

    pub fn from_json(json: &str) -> Result<Self, PreviewError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    /// Accept only a clear command or a console message with a known type
    /// and an argument array (empty for a bare `console.log()`)
    pub fn from_value(value: &Value) -> Result<Self, PreviewError> {
        let object = value
            .as_object()
            .ok_or_else(|| PreviewError::Malformed("payload is not an object".to_string()))?;

        if object.get("command").and_then(Value::as_str) == Some("clear") {
            return Ok(BridgeMessage::Clear);
        }

        let kind = field_str(object, "type")?;
        let kind = ConsoleKind::parse(kind)
            .ok_or_else(|| PreviewError::Malformed(format!("unknown message type `{}`", kind)))?;

        let args = match object.get("message") {
            Some(Value::Array(args)) => args.clone(),
            _ => return Err(PreviewError::Malformed("missing message".to_string())),
        };

        let timestamp = object
            .get("timestamp")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        Ok(BridgeMessage::Console(ConsoleMessage { kind, args, timestamp }))
    }
}

fn field_str<'a>(object: &'a Map<String, Value>, name: &str) -> Result<&'a str, PreviewError> {
    object
        .get(name)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| PreviewError::Malformed(format!("missing {}", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_wire_shape() {
        assert_eq!(BridgeMessage::Clear.to_json(), r#"{"command":"clear"}"#);
        assert_eq!(BridgeMessage::from_json(r#"{"command":"clear"}"#).unwrap(), BridgeMessage::Clear);
    }

    #[test]
    fn test_console_wire_shape() {
        let json = r#"{"type":"warn","message":["low", 3],"timestamp":"10:00:00"}"#;
        let BridgeMessage::Console(message) = BridgeMessage::from_json(json).unwrap() else {
            panic!("expected console message");
        };
        assert_eq!(message.kind, ConsoleKind::Warn);
        assert_eq!(message.args, vec![json!("low"), json!(3)]);

        let value = BridgeMessage::Console(message).to_value();
        assert_eq!(value["type"], "warn");
        assert_eq!(value["message"][1], 3);
    }

    #[test]
    fn test_empty_argument_list_accepted() {
        let Ok(BridgeMessage::Console(message)) = BridgeMessage::from_json(r#"{"type":"log","message":[]}"#)
        else {
            panic!("expected console message");
        };
        assert!(message.args.is_empty());
        assert_eq!(message.kind, ConsoleKind::Log);
    }

    #[test]
    fn test_malformed_payloads_rejected() {
        for json in [
            r#"{"message":["x"]}"#,
            r#"{"type":"log"}"#,
            r#"{"type":"log","message":"x"}"#,
            r#"{"type":"log","message":null}"#,
            r#"{"type":"debug","message":["x"]}"#,
            r#"{"command":"reload"}"#,
            r#"[1,2]"#,
        ] {
            assert!(
                matches!(BridgeMessage::from_json(json), Err(PreviewError::Malformed(_))),
                "{}",
                json
            );
        }
        assert!(matches!(BridgeMessage::from_json("{"), Err(PreviewError::Json(_))));
    }

    #[test]
    fn test_display_mixes_strings_and_json() {
        let message = ConsoleMessage {
            kind: ConsoleKind::Log,
            args: vec![json!("count"), json!(2), json!({"a": 1})],
            timestamp: String::new(),
        };
        assert_eq!(message.display(), "count 2 {\n  \"a\": 1\n}");
    }
}
