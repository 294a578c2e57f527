//! Cross-reference examples
//!
//! These types carry no behaviour; their docs show the intra-doc link forms.

/// Links to other items of this crate.
///
/// The syntax is ``[`title`](target)`` or just ``[`target`]``:
///
/// * ``[`ExampleClass`]`` becomes a link: [`ExampleClass`].
/// * ``[`ExampleClass::compute_y_power_x`]`` also becomes a link:
///   [`ExampleClass::compute_y_power_x`].
/// * ``[`get_formatted_description`](ExampleClass::get_formatted_description)``
///   shows only the last component:
///   [`get_formatted_description`].
/// * ``[another text](NestedClass::NESTED)`` changes the link text to
///   [another text](crate::NestedClass::NESTED).
///
/// [`ExampleClass`]: crate::ExampleClass
/// [`ExampleClass::compute_y_power_x`]: crate::ExampleClass::compute_y_power_x
/// [`get_formatted_description`]: crate::ExampleClass::get_formatted_description
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkAnotherClass;

/// Links to the standard library and to dependencies.
///
/// Paths are resolved from the crate's dependency graph, so no extra
/// configuration is needed. Prefer fully qualified paths:
///
/// * ``[`std::path::Path`]`` becomes a link: [`std::path::Path`].
/// * ``[`serde::Serialize`]`` becomes a link: [`serde::Serialize`].
///
/// The syntax is the same as in [`LinkAnotherClass`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkToLibraryObjects;
