// src/value/debug.rs
use crate::value::Value;
use std::fmt;

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data.try_borrow() {
            Ok(guard) => {
                write!(f, "Value(data={}, grad={}", guard.data, guard.grad)?;
                if let Some(op) = guard.op {
                    write!(f, ", op={:?}", op)?;
                }
                if let Some(label) = &guard.label {
                    write!(f, ", label={:?}", label)?;
                }
                write!(f, ")")
            }
            // Only reachable while a gradient update holds the node.
            Err(_) => write!(f, "Value(<borrowed>)"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        write!(f, "Value(data={}, grad={})", guard.data, guard.grad)
    }
}
