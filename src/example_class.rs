//! The example class and its nested holder
//!
//! Shows the layout used for documenting a type: attributes on the struct,
//! constants on the `impl`, one summary line per method, then details,
//! errors and examples where they add something.

use serde::{Deserialize, Serialize};

use crate::error::{ExampleError, Result};
use crate::value::{render_float, Kwargs, Value};

/// Description of the type. Instance attributes are documented here.
///
/// * `x`: number of something.
/// * `y`: value of something else.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExampleClass {
    pub x: i64,
    pub y: f64,
}

impl ExampleClass {
    /// Type-level constant, shared by every instance.
    pub const SOME_VALUE: i64 = 1;

    /// Build an instance. Neither attribute is validated.
    pub fn new(x: i64, y: f64) -> Self {
        Self { x, y }
    }

    /// Describe the instance as `<prefix>x=<x>, y=<y>`.
    ///
    /// `prefix` defaults to the empty string when `None`. It is accepted as a
    /// [`Value`] because callers may hand over anything; only strings are
    /// valid.
    ///
    /// # Errors
    ///
    /// [`ExampleError::TypeError`] if `prefix` is not a string.
    ///
    /// # Example
    ///
    /// ```
    /// use example_module::{ExampleClass, Value};
    ///
    /// let instance = ExampleClass::new(42, 3.14);
    /// let prefix = Value::from("values: ");
    /// assert_eq!(
    ///     instance.get_formatted_description(Some(&prefix)).unwrap(),
    ///     "values: x=42, y=3.14",
    /// );
    /// ```
    pub fn get_formatted_description(&self, prefix: Option<&Value>) -> Result<String> {
        let prefix = match prefix {
            None => "",
            Some(value) => value.as_str().ok_or_else(|| {
                tracing::debug!(got = value.type_name(), "rejecting non-string prefix");
                ExampleError::TypeError {
                    name: "prefix",
                    expected: "str",
                    got: value.type_name(),
                }
            })?,
        };

        Ok(format!("{}{}", prefix, self.describe()))
    }

    /// `x=<x>, y=<y>` with no prefix.
    pub fn describe(&self) -> String {
        format!("x={}, y={}", self.x, render_float(self.y))
    }

    /// `y` raised to the power `x`, with IEEE `pow` semantics.
    pub fn compute_y_power_x(&self) -> f64 {
        self.y.powf(self.x as f64)
    }

    /// Documents a function taking extra positional and named arguments.
    ///
    /// * `value`: regular parameter.
    /// * `args`: additional unnamed arguments.
    /// * `kwargs`: additional named arguments. Accepted names:
    ///   * `x`: one option.
    ///   * `y`: another option. Longer descriptions continue on the next
    ///     line, aligned with the text above.
    ///   * `z`: last option.
    ///
    /// Nothing is done with the arguments.
    pub fn function_with_args_and_kwargs(&self, value: i64, args: &[Value], kwargs: &Kwargs) {
        let _ = (value, args, kwargs);
    }
}

/// Pure data scoped next to [`ExampleClass`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NestedClass;

impl NestedClass {
    /// An attribute of the nested holder.
    pub const NESTED: &'static str = "nested class attribute";
}
