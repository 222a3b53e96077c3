use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::common::value::Value;
use crate::format::errors::FormatError;
use crate::format::formatter::SlotResolver;
use crate::format::template::SlotExpr;
use crate::holder::holder::ValueHolder;
use crate::runtime::errors::NamespaceError;

#[derive(Debug, Clone)]
pub enum Binding {
    Scalar(Value),
    Holder(ValueHolder),
}

/// Process-wide symbol table. Bindings are added, never replaced.
#[derive(Debug, Default)]
pub struct Namespace {
    bindings: HashMap<String, Binding>,
}

impl Namespace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn define(&mut self, name: impl Into<String>, binding: Binding) -> Result<(), NamespaceError> {
        match self.bindings.entry(name.into()) {
            Entry::Occupied(e) => Err(NamespaceError::AlreadyDefined(e.key().clone())),
            Entry::Vacant(e) => {
                e.insert(binding);
                Ok(())
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }

    pub fn holder(&self, name: &str) -> Option<&ValueHolder> {
        match self.bindings.get(name) {
            Some(Binding::Holder(h)) => Some(h),
            _ => None,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Sorted, for stable listings.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.bindings.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl SlotResolver for Namespace {
    fn resolve(&self, slot: &SlotExpr) -> Result<Value, FormatError> {
        let binding = self
            .get(&slot.name)
            .ok_or_else(|| FormatError::UnboundName(slot.name.clone()))?;

        match (binding, slot.index) {
            (Binding::Scalar(v), None) => Ok(v.clone()),
            (Binding::Scalar(_), Some(_)) => Err(FormatError::NotIndexable(slot.name.clone())),
            (Binding::Holder(h), Some(i)) => Ok(h.get(i)?.clone()),
            (Binding::Holder(_), None) => {
                Err(FormatError::HolderRequiresIndex(slot.name.clone()))
            }
        }
    }
}
