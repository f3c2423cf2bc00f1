//! argbind - Declarative command-line argument binding
//!
//! `argbind` binds process arguments to a statically declared configuration
//! structure using per-field metadata (name, kind, default, required flag,
//! description) instead of flag-by-flag wiring. A single binding call
//! registers one typed option per described field, parses the argument
//! vector, enforces `required` constraints, and writes the resolved values
//! back into the caller's fields.
//!
//! # Surfaces
//!
//! - **Typed**: implement [`BindTarget`] for your configuration struct and
//!   hand each field's storage to the binder through a [`Slot`]. The binder
//!   writes parsed values in place; it never copies or rebuilds the struct.
//! - **Dynamic**: describe the fields in a [`BindSchema`] (in code, or loaded
//!   from a TOML/JSON manifest) and receive an ordered [`ValueMap`].
//!
//! # Example
//!
//! ```
//! use argbind::{BindTarget, Binder, FieldBinding, FieldSpec, Slot};
//!
//! #[derive(Default)]
//! struct DaemonArgs {
//!     configfile: String,
//!     daemon: bool,
//! }
//!
//! impl BindTarget for DaemonArgs {
//!     fn bindings(&mut self) -> Vec<FieldBinding<'_>> {
//!         vec![
//!             FieldBinding::new(
//!                 FieldSpec::new("config", "Path to the configuration file")
//!                     .default_value("/etc/daemon.conf"),
//!                 Slot::Text(&mut self.configfile),
//!             ),
//!             FieldBinding::new(
//!                 FieldSpec::new("daemon", "Run the application in daemon mode")
//!                     .default_value("false")
//!                     .required(true),
//!                 Slot::Bool(&mut self.daemon),
//!             ),
//!         ]
//!     }
//! }
//!
//! let mut args = DaemonArgs::default();
//! Binder::new("daemond").bind_from(&mut args, ["--daemon=true"])?;
//! assert_eq!(args.configfile, "/etc/daemon.conf");
//! assert!(args.daemon);
//! # Ok::<(), argbind::BindError>(())
//! ```
//!
//! Binding is a one-shot, synchronous operation. Every call builds its own
//! private option registry, so repeated calls never accumulate stale option
//! definitions; calls that consume the live process argument vector must be
//! serialized by the caller.

#![warn(missing_docs)]

/// The argument binding engine
pub mod binder;

/// Error types for binding operations
pub mod error;

/// Terminal failure reporting for binder consumers
pub mod report;

/// Field descriptors, kind tags, and loadable binding schemas
pub mod schema;

/// Typed write-in-place binding surface
pub mod target;

/// Tagged runtime values and the ordered name-to-value record
pub mod value;

mod builder;

pub use binder::Binder;
pub use error::{BindError, BindResult};
pub use schema::{BindSchema, FieldKind, FieldSpec};
pub use target::{BindTarget, FieldBinding, Slot};
pub use value::{Value, ValueMap};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::binder::Binder;
    pub use crate::error::{BindError, BindResult};
    pub use crate::schema::{BindSchema, FieldKind, FieldSpec};
    pub use crate::target::{BindTarget, FieldBinding, Slot};
    pub use crate::value::{Value, ValueMap};
}
