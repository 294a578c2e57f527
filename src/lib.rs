//! Example Module - Documentation and Testing Template
//!
//! A deliberately small crate showing how a type, its methods and its
//! errors are documented, cross-referenced and tested.
//!
//! ```
//! use example_module::ExampleClass;
//!
//! let my_instance = ExampleClass::new(42, 3.14);
//! println!("{}", my_instance.describe());
//! assert_eq!(my_instance.get_formatted_description(None).unwrap(), "x=42, y=3.14");
//! ```

pub mod error;
pub mod value;
pub mod example_class;
pub mod cross_refs;
pub mod logging;
pub mod cli;

pub use error::{ExampleError, Result};
pub use value::{Kwargs, Value};
pub use example_class::{ExampleClass, NestedClass};
pub use cross_refs::{LinkAnotherClass, LinkToLibraryObjects};

pub const MODULE_VERSION: &str = env!("CARGO_PKG_VERSION");
