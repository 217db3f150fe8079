use crate::value::Value;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

// Manual implementation of Clone trait: clones the handle, never the node.
impl Clone for Value {
    fn clone(&self) -> Self {
        Value {
            data: Rc::clone(&self.data),
        }
    }
}

/// Two handles are equal iff they point to the same graph node.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node_id().hash(state);
    }
}
