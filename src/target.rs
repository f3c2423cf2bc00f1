//! Typed write-in-place binding surface
//!
//! Configuration structs implement [`BindTarget`] to describe their fields.
//! Each field contributes a [`FieldBinding`]: a [`FieldSpec`] paired with a
//! [`Slot`], a tagged mutable reference to the field's storage. The binder
//! writes parsed values straight into the slots; the struct is never copied
//! or reconstructed, and a mutable borrow of it is required by construction.

use std::time::Duration;

use crate::schema::{FieldKind, FieldSpec};

/// A tagged mutable reference to one field of a configuration struct
///
/// The variant set is exactly the supported option kinds; dispatching on it
/// replaces runtime type introspection.
pub enum Slot<'a> {
    /// Storage for a boolean flag
    Bool(&'a mut bool),
    /// Storage for an elapsed-time option
    Duration(&'a mut Duration),
    /// Storage for a 64-bit float option
    Float(&'a mut f64),
    /// Storage for a signed 32-bit integer option
    Int32(&'a mut i32),
    /// Storage for a signed 64-bit integer option
    Int64(&'a mut i64),
    /// Storage for an unsigned 32-bit integer option
    UInt32(&'a mut u32),
    /// Storage for an unsigned 64-bit integer option
    UInt64(&'a mut u64),
    /// Storage for a text option
    Text(&'a mut String),
}

impl Slot<'_> {
    /// The kind this storage accepts
    pub fn kind(&self) -> FieldKind {
        match self {
            Slot::Bool(_) => FieldKind::Bool,
            Slot::Duration(_) => FieldKind::Duration,
            Slot::Float(_) => FieldKind::Float,
            Slot::Int32(_) => FieldKind::Int32,
            Slot::Int64(_) => FieldKind::Int64,
            Slot::UInt32(_) => FieldKind::UInt32,
            Slot::UInt64(_) => FieldKind::UInt64,
            Slot::Text(_) => FieldKind::Text,
        }
    }
}

/// One field's metadata paired with the storage it populates
pub struct FieldBinding<'a> {
    pub(crate) spec: FieldSpec,
    pub(crate) slot: Slot<'a>,
}

impl<'a> FieldBinding<'a> {
    /// Pair a descriptor with the field it populates
    ///
    /// The descriptor's kind tag may be omitted; the binder infers it from
    /// the slot. A tag that is present must agree with the slot's kind.
    pub fn new(spec: FieldSpec, slot: Slot<'a>) -> Self {
        Self { spec, slot }
    }
}

/// Implemented by configuration structs whose fields bind to command-line
/// options
pub trait BindTarget {
    /// Field bindings in declaration order
    fn bindings(&mut self) -> Vec<FieldBinding<'_>>;
}
