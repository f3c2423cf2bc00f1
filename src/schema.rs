//! Field descriptors and loadable binding schemas
//!
//! A [`FieldSpec`] is the metadata record for one configuration field: its
//! external option name, kind tag, textual default, required flag, and help
//! text. A [`BindSchema`] is an ordered set of field specs plus program
//! identity, and can be written in code or loaded from a TOML/JSON manifest.
//!
//! # Example
//!
//! ```
//! use argbind::BindSchema;
//!
//! let schema = BindSchema::from_toml_str(r#"
//!     program = "daemond"
//!
//!     [[fields]]
//!     name = "daemon"
//!     kind = "bool"
//!     default = "false"
//!     required = true
//!     description = "Run the application in daemon mode"
//! "#)?;
//!
//! let values = schema.parse_from(["--daemon=true"])?;
//! assert_eq!(values.get("daemon").and_then(|v| v.as_bool()), Some(true));
//! # Ok::<(), argbind::BindError>(())
//! ```

use std::ffi::OsString;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::binder::Binder;
use crate::error::{BindError, BindResult};
use crate::value::{Value, ValueMap};

/// Supported option kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Boolean flag; accepts bare `--name` as true
    Bool,
    /// Elapsed time in `humantime` notation, e.g. `250ms` or `1h30m`
    Duration,
    /// 64-bit floating point number
    Float,
    /// Signed 32-bit integer
    Int32,
    /// Signed 64-bit integer
    Int64,
    /// Unsigned 32-bit integer
    UInt32,
    /// Unsigned 64-bit integer
    UInt64,
    /// UTF-8 text
    Text,
}

impl FieldKind {
    /// Resolve a textual kind tag to a kind, accepting common aliases
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "bool" | "boolean" => Some(Self::Bool),
            "duration" => Some(Self::Duration),
            "float" | "float64" | "f64" => Some(Self::Float),
            "int32" | "i32" => Some(Self::Int32),
            "int64" | "i64" => Some(Self::Int64),
            "uint32" | "u32" => Some(Self::UInt32),
            "uint64" | "u64" => Some(Self::UInt64),
            "string" | "str" | "text" => Some(Self::Text),
            _ => None,
        }
    }

    /// Canonical tag for this kind
    pub fn tag(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Duration => "duration",
            Self::Float => "float",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::UInt32 => "uint32",
            Self::UInt64 => "uint64",
            Self::Text => "string",
        }
    }

    /// Textual form of the kind's zero value, used when a field declares
    /// no default
    pub(crate) fn zero_text(self) -> &'static str {
        match self {
            Self::Bool => "false",
            Self::Duration => "0s",
            Self::Float => "0",
            Self::Int32 | Self::Int64 | Self::UInt32 | Self::UInt64 => "0",
            Self::Text => "",
        }
    }

    /// Parse `text` into this kind's native representation
    pub(crate) fn parse_text(self, text: &str) -> Result<Value, String> {
        match self {
            Self::Bool => text.parse().map(Value::Bool).map_err(stringify_err),
            Self::Duration => humantime::parse_duration(text)
                .map(Value::Duration)
                .map_err(stringify_err),
            Self::Float => text.parse().map(Value::Float).map_err(stringify_err),
            Self::Int32 => text.parse().map(Value::Int32).map_err(stringify_err),
            Self::Int64 => text.parse().map(Value::Int64).map_err(stringify_err),
            Self::UInt32 => text.parse().map(Value::UInt32).map_err(stringify_err),
            Self::UInt64 => text.parse().map(Value::UInt64).map_err(stringify_err),
            Self::Text => Ok(Value::Text(text.to_string())),
        }
    }
}

fn stringify_err<E: fmt::Display>(err: E) -> String {
    err.to_string()
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Metadata describing one configuration field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    /// External option name (unique within one binding session)
    pub name: String,

    /// Kind tag, e.g. `"bool"` or `"uint64"`. On the typed surface this may
    /// be omitted and is inferred from the field's storage slot.
    #[serde(default)]
    pub kind: Option<String>,

    /// Textual default value; omitted means the kind's zero value
    #[serde(default)]
    pub default: Option<String>,

    /// Whether the option must appear literally among the parsed arguments.
    /// A value equal to the default does not satisfy the constraint unless
    /// the flag was explicitly passed.
    #[serde(default)]
    pub required: bool,

    /// Help text shown in usage output; must be non-empty
    pub description: String,
}

impl FieldSpec {
    /// Create a descriptor with the given option name and help text
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: None,
            default: None,
            required: false,
            description: description.into(),
        }
    }

    /// Set the kind tag explicitly
    pub fn with_kind(mut self, tag: impl Into<String>) -> Self {
        self.kind = Some(tag.into());
        self
    }

    /// Set the textual default value
    pub fn default_value(mut self, text: impl Into<String>) -> Self {
        self.default = Some(text.into());
        self
    }

    /// Mark the option as required (or not)
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}

/// An ordered set of field descriptors plus program identity, bindable
/// through [`Binder::parse_from`] into a [`ValueMap`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BindSchema {
    /// Program name used in usage output
    pub program: String,

    /// One-line about text shown in usage output
    #[serde(default)]
    pub about: Option<String>,

    /// Field descriptors in declaration order
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

impl BindSchema {
    /// Create an empty schema for the given program name
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            about: None,
            fields: Vec::new(),
        }
    }

    /// Set the about text
    pub fn about(mut self, text: impl Into<String>) -> Self {
        self.about = Some(text.into());
        self
    }

    /// Append a field descriptor
    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    /// Load a schema from a TOML string
    pub fn from_toml_str(content: &str) -> BindResult<Self> {
        toml::from_str(content).map_err(|e| BindError::schema(format!("Failed to parse TOML: {}", e)))
    }

    /// Load a schema from a TOML file
    pub fn from_toml_file(path: impl AsRef<Path>) -> BindResult<Self> {
        Self::from_toml_str(&read_schema_file(path.as_ref())?)
    }

    /// Load a schema from a JSON string
    pub fn from_json_str(content: &str) -> BindResult<Self> {
        serde_json::from_str(content)
            .map_err(|e| BindError::schema(format!("Failed to parse JSON: {}", e)))
    }

    /// Load a schema from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> BindResult<Self> {
        Self::from_json_str(&read_schema_file(path.as_ref())?)
    }

    /// Auto-detect format by extension and load a schema, trying TOML and
    /// then JSON when the extension is unknown
    pub fn from_file(path: impl AsRef<Path>) -> BindResult<Self> {
        let path = path.as_ref();
        match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => Self::from_toml_file(path),
            Some("json") => Self::from_json_file(path),
            _ => Self::from_toml_file(path).or_else(|_| Self::from_json_file(path)),
        }
    }

    /// Bind the live process argument vector against this schema
    pub fn parse(&self) -> BindResult<ValueMap> {
        self.binder().parse(&self.fields)
    }

    /// Bind `args` (program name excluded) against this schema
    pub fn parse_from<I, T>(&self, args: I) -> BindResult<ValueMap>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        self.binder().parse_from(&self.fields, args)
    }

    fn binder(&self) -> Binder {
        let binder = Binder::new(&self.program);
        match &self.about {
            Some(about) => binder.about(about),
            None => binder,
        }
    }
}

fn read_schema_file(path: &Path) -> BindResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| BindError::schema(format!("Failed to read schema file: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_tags_resolve() {
        assert_eq!(FieldKind::from_tag("bool"), Some(FieldKind::Bool));
        assert_eq!(FieldKind::from_tag("boolean"), Some(FieldKind::Bool));
        assert_eq!(FieldKind::from_tag("duration"), Some(FieldKind::Duration));
        assert_eq!(FieldKind::from_tag("float64"), Some(FieldKind::Float));
        assert_eq!(FieldKind::from_tag("i32"), Some(FieldKind::Int32));
        assert_eq!(FieldKind::from_tag("uint64"), Some(FieldKind::UInt64));
        assert_eq!(FieldKind::from_tag("string"), Some(FieldKind::Text));
    }

    #[test]
    fn unknown_kind_tag_does_not_resolve() {
        assert_eq!(FieldKind::from_tag("map"), None);
        assert_eq!(FieldKind::from_tag("strings"), None);
        assert_eq!(FieldKind::from_tag(""), None);
    }

    #[test]
    fn parse_text_round_trips_each_kind() {
        assert_eq!(
            FieldKind::Bool.parse_text("true").unwrap(),
            Value::Bool(true)
        );
        assert_eq!(
            FieldKind::Duration.parse_text("90s").unwrap(),
            Value::Duration(std::time::Duration::from_secs(90))
        );
        assert_eq!(
            FieldKind::Float.parse_text("2.5").unwrap(),
            Value::Float(2.5)
        );
        assert_eq!(
            FieldKind::Int32.parse_text("-7").unwrap(),
            Value::Int32(-7)
        );
        assert_eq!(
            FieldKind::UInt64.parse_text("18446744073709551615").unwrap(),
            Value::UInt64(u64::MAX)
        );
        assert_eq!(
            FieldKind::Text.parse_text("x").unwrap(),
            Value::Text("x".to_string())
        );
    }

    #[test]
    fn parse_text_rejects_malformed_input() {
        assert!(FieldKind::Bool.parse_text("yes").is_err());
        assert!(FieldKind::Int32.parse_text("abc").is_err());
        assert!(FieldKind::UInt32.parse_text("-1").is_err());
        assert!(FieldKind::Duration.parse_text("fast").is_err());
    }

    #[test]
    fn spec_builder_fills_defaults() {
        let spec = FieldSpec::new("config", "Path to the configuration file");
        assert_eq!(spec.name, "config");
        assert_eq!(spec.kind, None);
        assert_eq!(spec.default, None);
        assert!(!spec.required);
    }

    #[test]
    fn parse_minimal_toml_schema() {
        let toml = r#"
            program = "daemond"

            [[fields]]
            name = "config"
            kind = "string"
            default = "/etc/daemon.conf"
            description = "Path to the configuration file"
        "#;

        let schema = BindSchema::from_toml_str(toml).unwrap();
        assert_eq!(schema.program, "daemond");
        assert_eq!(schema.fields.len(), 1);
        assert_eq!(schema.fields[0].name, "config");
        assert_eq!(schema.fields[0].kind.as_deref(), Some("string"));
        assert!(!schema.fields[0].required);
    }

    #[test]
    fn parse_json_schema() {
        let json = r#"{
            "program": "daemond",
            "fields": [
                {
                    "name": "daemon",
                    "kind": "bool",
                    "default": "false",
                    "required": true,
                    "description": "Run the application in daemon mode"
                }
            ]
        }"#;

        let schema = BindSchema::from_json_str(json).unwrap();
        assert_eq!(schema.fields.len(), 1);
        assert!(schema.fields[0].required);
    }

    #[test]
    fn malformed_toml_is_a_schema_error() {
        match BindSchema::from_toml_str("not toml at all [") {
            Err(BindError::Schema(_)) => {}
            other => panic!("Unexpected result: {:?}", other),
        }
    }
}
