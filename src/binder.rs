//! The argument binding engine
//!
//! [`Binder`] runs one binding session: describe the fields, register a
//! typed option per field, parse the argument vector, enforce `required`
//! constraints, and hand the resolved values back. The session is linear
//! (`Describe -> Register -> Parse -> Validate-required -> Done`); any
//! failure is terminal for the call and leaves a typed target's fields in
//! an unspecified state.

use std::collections::BTreeSet;
use std::ffi::OsString;
use std::time::Duration;

use clap::parser::{ArgMatches, ValueSource};
use tracing::debug;

use crate::builder::{self, Descriptor};
use crate::error::{BindError, BindResult};
use crate::schema::{FieldKind, FieldSpec};
use crate::target::{BindTarget, Slot};
use crate::value::{Value, ValueMap};

/// Binds command-line arguments to declaratively described fields
///
/// A `Binder` carries only program identity. Each binding call builds its
/// own option registry and pending-required set and discards both when the
/// call returns, so concurrent calls on different targets are independent;
/// only calls that consume the live process argument vector need to be
/// serialized by the caller.
pub struct Binder {
    program: String,
    about: Option<String>,
}

impl Binder {
    /// Create a binder for the given program name
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            about: None,
        }
    }

    /// Set the about text shown in usage output
    pub fn about(mut self, text: impl Into<String>) -> Self {
        self.about = Some(text.into());
        self
    }

    /// Bind the live process argument vector into `target`'s fields
    pub fn bind(&self, target: &mut dyn BindTarget) -> BindResult<()> {
        self.bind_from(target, std::env::args_os().skip(1))
    }

    /// Bind `args` (program name excluded) into `target`'s fields
    ///
    /// On success every described field holds either the supplied value or
    /// its declared default. On failure the fields are in an unspecified
    /// state and must not be relied upon.
    pub fn bind_from<I, T>(&self, target: &mut dyn BindTarget, args: I) -> BindResult<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut bindings = target.bindings();
        if bindings.is_empty() {
            return Err(BindError::invalid_target(
                "target describes no bindable fields",
            ));
        }

        let descriptors = builder::resolve_all(
            bindings
                .iter()
                .map(|binding| (&binding.spec, Some(binding.slot.kind()))),
        )?;
        let matches = self.run_session(&descriptors, args)?;

        for (binding, descriptor) in bindings.iter_mut().zip(&descriptors) {
            let name = descriptor.name.as_str();
            match &mut binding.slot {
                Slot::Bool(slot) => {
                    if let Some(v) = matches.get_one::<bool>(name) {
                        **slot = *v;
                    }
                }
                Slot::Duration(slot) => {
                    if let Some(v) = matches.get_one::<Duration>(name) {
                        **slot = *v;
                    }
                }
                Slot::Float(slot) => {
                    if let Some(v) = matches.get_one::<f64>(name) {
                        **slot = *v;
                    }
                }
                Slot::Int32(slot) => {
                    if let Some(v) = matches.get_one::<i32>(name) {
                        **slot = *v;
                    }
                }
                Slot::Int64(slot) => {
                    if let Some(v) = matches.get_one::<i64>(name) {
                        **slot = *v;
                    }
                }
                Slot::UInt32(slot) => {
                    if let Some(v) = matches.get_one::<u32>(name) {
                        **slot = *v;
                    }
                }
                Slot::UInt64(slot) => {
                    if let Some(v) = matches.get_one::<u64>(name) {
                        **slot = *v;
                    }
                }
                Slot::Text(slot) => {
                    if let Some(v) = matches.get_one::<String>(name) {
                        **slot = v.clone();
                    }
                }
            }
        }

        Ok(())
    }

    /// Bind the live process argument vector against `fields`
    pub fn parse(&self, fields: &[FieldSpec]) -> BindResult<ValueMap> {
        self.parse_from(fields, std::env::args_os().skip(1))
    }

    /// Bind `args` (program name excluded) against `fields`, producing an
    /// ordered name-to-value record
    pub fn parse_from<I, T>(&self, fields: &[FieldSpec], args: I) -> BindResult<ValueMap>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        if fields.is_empty() {
            return Err(BindError::invalid_target("schema describes no fields"));
        }

        let descriptors = builder::resolve_all(fields.iter().map(|spec| (spec, None)))?;
        let matches = self.run_session(&descriptors, args)?;

        let mut values = ValueMap::default();
        for descriptor in &descriptors {
            let name = descriptor.name.as_str();
            let value = match descriptor.kind {
                FieldKind::Bool => matches.get_one::<bool>(name).copied().map(Value::Bool),
                FieldKind::Duration => matches
                    .get_one::<Duration>(name)
                    .copied()
                    .map(Value::Duration),
                FieldKind::Float => matches.get_one::<f64>(name).copied().map(Value::Float),
                FieldKind::Int32 => matches.get_one::<i32>(name).copied().map(Value::Int32),
                FieldKind::Int64 => matches.get_one::<i64>(name).copied().map(Value::Int64),
                FieldKind::UInt32 => matches.get_one::<u32>(name).copied().map(Value::UInt32),
                FieldKind::UInt64 => matches.get_one::<u64>(name).copied().map(Value::UInt64),
                FieldKind::Text => matches
                    .get_one::<String>(name)
                    .cloned()
                    .map(Value::Text),
            };
            if let Some(value) = value {
                values.insert(name, value);
            }
        }

        Ok(values)
    }

    /// Register, parse, and validate-required for one session
    fn run_session<I, T>(&self, descriptors: &[Descriptor], args: I) -> BindResult<ArgMatches>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut cmd = builder::build_command(&self.program, self.about.as_deref(), descriptors);
        let usage = cmd.render_help().to_string();
        debug!(
            program = %self.program,
            options = descriptors.len(),
            "option registry initialized"
        );

        let matches = cmd.try_get_matches_from(args)?;

        let mut pending: BTreeSet<&str> = descriptors
            .iter()
            .filter(|d| d.required)
            .map(|d| d.name.as_str())
            .collect();
        for descriptor in descriptors {
            if matches.value_source(&descriptor.name) == Some(ValueSource::CommandLine) {
                pending.remove(descriptor.name.as_str());
            }
        }
        if !pending.is_empty() {
            debug!(missing = pending.len(), "required options absent");
            return Err(BindError::MissingRequired {
                names: pending.into_iter().map(String::from).collect(),
                usage,
            });
        }

        Ok(matches)
    }
}
