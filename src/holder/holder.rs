use crate::common::value::Value;
use crate::holder::errors::HolderError;

/// Ordered, heterogeneous sequence fixed at construction.
///
/// The holder owns the vector it was built from and only ever hands out
/// borrowed views of it; element order and kinds are never touched.
#[derive(Clone, Debug)]
pub struct ValueHolder {
    elements: Vec<Value>,
}

impl ValueHolder {
    pub fn new(elements: Vec<Value>) -> Self {
        Self { elements }
    }

    pub fn elements(&self) -> &[Value] {
        &self.elements
    }

    /// Indexed read. Negative indices are out of range, not offsets from the end.
    pub fn get(&self, index: i64) -> Result<&Value, HolderError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.elements.get(i))
            .ok_or(HolderError::OutOfRange {
                index,
                len: self.elements.len(),
            })
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
