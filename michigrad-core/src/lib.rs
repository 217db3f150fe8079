//! # Michigrad core
//!
//! A scalar-valued reverse-mode automatic differentiation engine.
//!
//! Every arithmetic operation on a [`Value`] records how its result was
//! produced, building a computation graph as a side effect of ordinary
//! arithmetic. Calling [`Value::backward`] on any node of that graph walks it
//! in reverse topological order and accumulates `d(root)/d(node)` into the
//! `grad` field of every node it reaches.
//!
//! ```
//! use michigrad_core::Value;
//!
//! let a = Value::new(2.0);
//! let b = Value::new(-3.0);
//! let c = Value::new(10.0);
//! let e = (&a * &b + &c).relu();
//! e.backward().unwrap();
//!
//! assert_eq!(e.data(), 4.0);
//! assert_eq!(a.grad(), -3.0);
//! assert_eq!(b.grad(), 2.0);
//! assert_eq!(c.grad(), 1.0);
//! ```

pub mod autograd;
pub mod error;
pub mod nn;
pub mod ops;
pub mod utils;
pub mod value;
pub mod value_data;
pub mod viz;

// Re-export the main types so they are reachable as `michigrad_core::Value`.
pub use error::MichigradError;
pub use ops::arithmetic::pow::Exponent;
pub use value::Value;
// Re-export traits required by public functions/structs
pub use num_traits;
