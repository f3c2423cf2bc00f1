//! Option registry construction
//!
//! Validates field descriptors and turns them into a configured
//! `clap::Command`. The registry is rebuilt from scratch on every binding
//! call; nothing here outlives a single bind.

use std::collections::HashSet;

use clap::builder::ValueParser;
use clap::{Arg, ArgAction, Command};

use crate::error::{BindError, BindResult};
use crate::schema::{FieldKind, FieldSpec};

/// A validated descriptor, ready for registration
#[derive(Debug)]
pub(crate) struct Descriptor {
    pub(crate) name: String,
    pub(crate) kind: FieldKind,
    pub(crate) help: String,
    pub(crate) default: String,
    pub(crate) required: bool,
}

/// Validate one field descriptor against its optional storage kind
///
/// Checks run in the same order for every field: description, kind, default.
/// A default that does not parse into the resolved kind is a hard error, not
/// a silent zero.
pub(crate) fn resolve(spec: &FieldSpec, storage: Option<FieldKind>) -> BindResult<Descriptor> {
    if spec.description.is_empty() {
        return Err(BindError::MissingDescription {
            field: spec.name.clone(),
        });
    }

    let kind = match (&spec.kind, storage) {
        (Some(tag), storage) => {
            let declared = FieldKind::from_tag(tag).ok_or_else(|| BindError::UnsupportedKind {
                field: spec.name.clone(),
                kind: tag.clone(),
            })?;
            if let Some(storage) = storage {
                if storage != declared {
                    return Err(BindError::KindMismatch {
                        field: spec.name.clone(),
                        declared,
                        storage,
                    });
                }
            }
            declared
        }
        (None, Some(storage)) => storage,
        (None, None) => {
            return Err(BindError::UnsupportedKind {
                field: spec.name.clone(),
                kind: "(unspecified)".to_string(),
            });
        }
    };

    let default = match &spec.default {
        Some(text) => {
            kind.parse_text(text)
                .map_err(|_| BindError::InvalidDefault {
                    field: spec.name.clone(),
                    kind,
                    value: text.clone(),
                })?;
            text.clone()
        }
        None => kind.zero_text().to_string(),
    };

    Ok(Descriptor {
        name: spec.name.clone(),
        kind,
        help: spec.description.clone(),
        default,
        required: spec.required,
    })
}

/// Validate a whole descriptor set, rejecting duplicate option names
pub(crate) fn resolve_all<'a, I>(specs: I) -> BindResult<Vec<Descriptor>>
where
    I: IntoIterator<Item = (&'a FieldSpec, Option<FieldKind>)>,
{
    let mut seen = HashSet::new();
    let mut descriptors = Vec::new();
    for (spec, storage) in specs {
        let descriptor = resolve(spec, storage)?;
        if !seen.insert(descriptor.name.clone()) {
            return Err(BindError::DuplicateOption {
                name: descriptor.name,
            });
        }
        descriptors.push(descriptor);
    }
    Ok(descriptors)
}

/// Build the option registry for one binding call
///
/// Registration order follows the descriptor set, which follows field
/// declaration order. The binary name is excluded from parsing, matching
/// the binder's argument-vector contract.
pub(crate) fn build_command(
    program: &str,
    about: Option<&str>,
    descriptors: &[Descriptor],
) -> Command {
    let mut cmd = Command::new(program.to_string()).no_binary_name(true);
    if let Some(about) = about {
        cmd = cmd.about(about.to_string());
    }
    for descriptor in descriptors {
        cmd = cmd.arg(build_arg(descriptor));
    }
    cmd
}

fn build_arg(descriptor: &Descriptor) -> Arg {
    let arg = Arg::new(descriptor.name.clone())
        .long(descriptor.name.clone())
        .help(descriptor.help.clone())
        .action(ArgAction::Set)
        .default_value(descriptor.default.clone());

    match descriptor.kind {
        // Bare `--name` reads as true, like a conventional switch
        FieldKind::Bool => arg
            .value_parser(clap::value_parser!(bool))
            .num_args(0..=1)
            .default_missing_value("true"),
        FieldKind::Duration => arg.value_parser(ValueParser::new(humantime::parse_duration)),
        FieldKind::Float => arg.value_parser(clap::value_parser!(f64)),
        FieldKind::Int32 => arg.value_parser(clap::value_parser!(i32)),
        FieldKind::Int64 => arg.value_parser(clap::value_parser!(i64)),
        FieldKind::UInt32 => arg.value_parser(clap::value_parser!(u32)),
        FieldKind::UInt64 => arg.value_parser(clap::value_parser!(u64)),
        FieldKind::Text => arg.value_parser(clap::value_parser!(String)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(name: &str) -> FieldSpec {
        FieldSpec::new(name, "help text")
    }

    #[test]
    fn resolve_infers_kind_from_storage() {
        let descriptor = resolve(&spec("daemon"), Some(FieldKind::Bool)).unwrap();
        assert_eq!(descriptor.kind, FieldKind::Bool);
        assert_eq!(descriptor.default, "false");
    }

    #[test]
    fn resolve_rejects_empty_description() {
        let bad = FieldSpec::new("daemon", "");
        match resolve(&bad, Some(FieldKind::Bool)) {
            Err(BindError::MissingDescription { field }) => assert_eq!(field, "daemon"),
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[test]
    fn resolve_rejects_unknown_kind_tag() {
        let bad = spec("routes").with_kind("map");
        match resolve(&bad, None) {
            Err(BindError::UnsupportedKind { field, kind }) => {
                assert_eq!(field, "routes");
                assert_eq!(kind, "map");
            }
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[test]
    fn resolve_rejects_missing_kind_without_storage() {
        match resolve(&spec("port"), None) {
            Err(BindError::UnsupportedKind { field, .. }) => assert_eq!(field, "port"),
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[test]
    fn resolve_rejects_tag_storage_mismatch() {
        let bad = spec("port").with_kind("string");
        match resolve(&bad, Some(FieldKind::UInt32)) {
            Err(BindError::KindMismatch {
                field,
                declared,
                storage,
            }) => {
                assert_eq!(field, "port");
                assert_eq!(declared, FieldKind::Text);
                assert_eq!(storage, FieldKind::UInt32);
            }
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[test]
    fn unparseable_default_is_a_hard_error() {
        // Never substituted with the kind's zero value.
        let bad = spec("port").with_kind("uint32").default_value("not-a-number");
        match resolve(&bad, None) {
            Err(BindError::InvalidDefault { field, kind, value }) => {
                assert_eq!(field, "port");
                assert_eq!(kind, FieldKind::UInt32);
                assert_eq!(value, "not-a-number");
            }
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[test]
    fn omitted_default_becomes_kind_zero() {
        let descriptor = resolve(&spec("timeout").with_kind("duration"), None).unwrap();
        assert_eq!(descriptor.default, "0s");
        let descriptor = resolve(&spec("name").with_kind("string"), None).unwrap();
        assert_eq!(descriptor.default, "");
    }

    #[test]
    fn resolve_all_rejects_duplicate_names() {
        let one = spec("config").with_kind("string");
        let two = spec("config").with_kind("bool");
        let result = resolve_all([(&one, None), (&two, None)]);
        match result {
            Err(BindError::DuplicateOption { name }) => assert_eq!(name, "config"),
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[test]
    fn build_registers_one_option_per_descriptor() {
        let one = spec("config").with_kind("string");
        let two = spec("daemon").with_kind("bool");
        let descriptors = resolve_all([(&one, None), (&two, None)]).unwrap();
        let cmd = build_command("daemond", Some("demo daemon"), &descriptors);

        let registered: Vec<&str> = cmd
            .get_arguments()
            .map(|a| a.get_id().as_str())
            .collect();
        assert_eq!(registered, vec!["config", "daemon"]);
    }
}
