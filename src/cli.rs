//! Command surface of `example-cli`
//!
//! Each command returns its JSON body and exit status; the binary only
//! prints them.

use clap::{Parser, Subcommand};
use serde_json::json;

use crate::error::{ExampleError, Result};
use crate::example_class::{ExampleClass, NestedClass};
use crate::value::{render_float, Kwargs, Value};

pub const EXIT_OK: u8 = 0;
pub const EXIT_INVALID_PAYLOAD: u8 = 1;
pub const EXIT_TYPE_ERROR: u8 = 2;

#[derive(Parser)]
#[command(name = "example-cli", version)]
#[command(about = "Example Module CLI - exercise ExampleClass from the command line")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log filter directive (falls back to RUST_LOG, then "warn")
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Format the instance description
    Describe {
        #[arg(long, allow_hyphen_values = true)]
        x: i64,

        #[arg(long, allow_hyphen_values = true)]
        y: f64,

        /// JSON value prepended to the description (must be a string)
        #[arg(short, long, allow_hyphen_values = true)]
        prefix: Option<String>,
    },

    /// Compute y to the power x
    Power {
        #[arg(long, allow_hyphen_values = true)]
        x: i64,

        #[arg(long, allow_hyphen_values = true)]
        y: f64,
    },

    /// Call the pass-through function with extra arguments
    Forward {
        #[arg(long, allow_hyphen_values = true)]
        x: i64,

        #[arg(long, allow_hyphen_values = true)]
        y: f64,

        #[arg(long, allow_hyphen_values = true)]
        value: i64,

        /// JSON array of positional arguments
        #[arg(short, long)]
        args: Option<String>,

        /// JSON object of named arguments
        #[arg(short, long)]
        kwargs: Option<String>,
    },

    /// Show the type-level constants
    Constants,
}

/// What a command prints and how the process exits.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutput {
    pub body: serde_json::Value,
    pub status: u8,
}

impl CommandOutput {
    fn ok(body: serde_json::Value) -> Self {
        Self { body, status: EXIT_OK }
    }

    fn error(e: &ExampleError, status: u8) -> Self {
        Self {
            body: json!({ "error": e.to_string() }),
            status,
        }
    }
}

fn parse_payload<T: serde::de::DeserializeOwned>(payload: Option<&str>) -> Result<Option<T>> {
    Ok(payload.map(serde_json::from_str::<T>).transpose()?)
}

/// JSON has no non-finite numbers; those are emitted as their rendered
/// string (`"inf"`, `"-inf"`, `"nan"`) instead of `null`.
pub fn float_json(value: f64) -> serde_json::Value {
    if value.is_finite() {
        json!(value)
    } else {
        json!(render_float(value))
    }
}

pub fn run(command: Commands) -> CommandOutput {
    match command {
        Commands::Describe { x, y, prefix } => describe(x, y, prefix.as_deref()),
        Commands::Power { x, y } => power(x, y),
        Commands::Forward { x, y, value, args, kwargs } => {
            forward(x, y, value, args.as_deref(), kwargs.as_deref())
        }
        Commands::Constants => constants(),
    }
}

pub fn describe(x: i64, y: f64, prefix: Option<&str>) -> CommandOutput {
    tracing::trace!(x, y, "describe");
    let prefix: Option<Value> = match parse_payload(prefix) {
        Ok(p) => p,
        Err(e) => return CommandOutput::error(&e, EXIT_INVALID_PAYLOAD),
    };

    match ExampleClass::new(x, y).get_formatted_description(prefix.as_ref()) {
        Ok(description) => CommandOutput::ok(json!({ "description": description })),
        Err(e) => CommandOutput::error(&e, EXIT_TYPE_ERROR),
    }
}

pub fn power(x: i64, y: f64) -> CommandOutput {
    tracing::trace!(x, y, "power");
    let instance = ExampleClass::new(x, y);
    CommandOutput::ok(json!({
        "x": instance.x,
        "y": float_json(instance.y),
        "result": float_json(instance.compute_y_power_x()),
    }))
}

pub fn forward(x: i64, y: f64, value: i64, args: Option<&str>, kwargs: Option<&str>) -> CommandOutput {
    let args: Vec<Value> = match parse_payload(args) {
        Ok(a) => a.unwrap_or_default(),
        Err(e) => return CommandOutput::error(&e, EXIT_INVALID_PAYLOAD),
    };
    let kwargs: Kwargs = match parse_payload(kwargs) {
        Ok(k) => k.unwrap_or_default(),
        Err(e) => return CommandOutput::error(&e, EXIT_INVALID_PAYLOAD),
    };
    tracing::trace!(value, args = args.len(), kwargs = kwargs.len(), "forward");

    ExampleClass::new(x, y).function_with_args_and_kwargs(value, &args, &kwargs);

    CommandOutput::ok(json!({
        "forwarded": true,
        "args": args.len(),
        "kwargs": kwargs.keys().collect::<Vec<_>>(),
    }))
}

pub fn constants() -> CommandOutput {
    CommandOutput::ok(json!({
        "some_value": ExampleClass::SOME_VALUE,
        "nested": NestedClass::NESTED,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Commands {
        let mut argv = vec!["example-cli"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap().command
    }

    #[test]
    fn test_describe_with_string_prefix() {
        let out = describe(42, 3.14, Some(r#""values: ""#));
        assert_eq!(out.status, EXIT_OK);
        assert_eq!(out.body, json!({ "description": "values: x=42, y=3.14" }));
    }

    #[test]
    fn test_describe_without_prefix() {
        let out = run(parse(&["describe", "--x", "42", "--y", "3.14"]));
        assert_eq!(out, CommandOutput::ok(json!({ "description": "x=42, y=3.14" })));
    }

    #[test]
    fn test_describe_non_string_prefix_exits_2() {
        let out = describe(42, 3.14, Some("12345678"));
        assert_eq!(out.status, EXIT_TYPE_ERROR);
        assert_eq!(
            out.body,
            json!({ "error": "'prefix' should be of type 'str' instead of type 'int'." })
        );
    }

    #[test]
    fn test_describe_invalid_json_exits_1() {
        let out = describe(42, 3.14, Some("values: "));
        assert_eq!(out.status, EXIT_INVALID_PAYLOAD);
        let message = out.body["error"].as_str().unwrap();
        assert!(message.starts_with("Invalid payload:"));
    }

    #[test]
    fn test_negative_values_parse() {
        let out = run(parse(&["describe", "--x", "-3", "--y", "-2.5", "--prefix", "-5"]));
        assert_eq!(out.status, EXIT_TYPE_ERROR);

        match parse(&["power", "--x", "-1", "--y", "-0.5"]) {
            Commands::Power { x, y } => {
                assert_eq!(x, -1);
                assert_eq!(y, -0.5);
            }
            other => panic!("expected power, got {:?}", other),
        }
    }

    #[test]
    fn test_power_output() {
        let out = run(parse(&["power", "--x", "2", "--y", "2.5"]));
        assert_eq!(out, CommandOutput::ok(json!({ "x": 2, "y": 2.5, "result": 6.25 })));
    }

    #[test]
    fn test_power_non_finite_result_is_string() {
        let out = power(-1, 0.0);
        assert_eq!(out.status, EXIT_OK);
        assert_eq!(out.body["result"], json!("inf"));

        let out = power(1, f64::NAN);
        assert_eq!(out.body["y"], json!("nan"));
        assert_eq!(out.body["result"], json!("nan"));
    }

    #[test]
    fn test_forward_output() {
        let out = run(parse(&[
            "forward", "--x", "1", "--y", "2.0", "--value", "-7",
            "--args", r#"[1, "a", null]"#,
            "--kwargs", r#"{"z": 1, "x": true}"#,
        ]));
        assert_eq!(
            out,
            CommandOutput::ok(json!({ "forwarded": true, "args": 3, "kwargs": ["z", "x"] }))
        );
    }

    #[test]
    fn test_forward_defaults_and_bad_payload() {
        let out = forward(1, 2.0, 0, None, None);
        assert_eq!(out.body, json!({ "forwarded": true, "args": 0, "kwargs": [] }));

        let out = forward(1, 2.0, 0, Some("{}"), None);
        assert_eq!(out.status, EXIT_INVALID_PAYLOAD);

        let out = forward(1, 2.0, 0, None, Some("[1]"));
        assert_eq!(out.status, EXIT_INVALID_PAYLOAD);
    }

    #[test]
    fn test_constants_output() {
        let out = run(parse(&["constants"]));
        assert_eq!(
            out,
            CommandOutput::ok(json!({ "some_value": 1, "nested": "nested class attribute" }))
        );
    }
}
