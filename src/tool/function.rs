// ABOUTME: FunctionTool - registers a plain Rust function with typed input and
// ABOUTME: output as a Tool. Faults are folded into the output, never returned.

use std::marker::PhantomData;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{Tool, ToolResult};
use crate::error::ToolError;

/// Output of a function tool.
///
/// The output type owns its error shape: any fault raised while decoding the
/// arguments or running the function is turned into a value of this type, so
/// the model always receives a structured result.
pub trait ToolOutput: Serialize + Send {
    /// Build the error-shaped output for a fault.
    fn from_fault(error: &anyhow::Error) -> Self;

    /// Whether this output reports success.
    fn is_success(&self) -> bool;
}

/// A tool backed by a function `I -> Result<O>`.
pub struct FunctionTool<I, O, F> {
    name: String,
    description: String,
    schema: serde_json::Value,
    func: F,
    _marker: PhantomData<fn(I) -> O>,
}

impl<I, O, F> FunctionTool<I, O, F>
where
    I: DeserializeOwned,
    O: ToolOutput,
    F: Fn(I) -> Result<O, anyhow::Error>,
{
    /// Create a function tool with the given name, description and input schema.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schema: serde_json::Value,
        func: F,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schema,
            func,
            _marker: PhantomData,
        }
    }

    /// Decode the arguments and run the function, folding any fault into `O`.
    pub fn call(&self, params: serde_json::Value) -> O {
        let input: I = match serde_json::from_value(params) {
            Ok(input) => input,
            Err(e) => {
                let fault = anyhow::Error::new(ToolError::InvalidParams(e.to_string()));
                return O::from_fault(&fault);
            }
        };

        match (self.func)(input) {
            Ok(output) => output,
            Err(e) => O::from_fault(&e),
        }
    }
}

#[async_trait]
impl<I, O, F> Tool for FunctionTool<I, O, F>
where
    I: DeserializeOwned + 'static,
    O: ToolOutput + 'static,
    F: Fn(I) -> Result<O, anyhow::Error> + Send + Sync + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn schema(&self) -> serde_json::Value {
        self.schema.clone()
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        let output = self.call(params);
        let is_error = !output.is_success();

        match ToolResult::json(&output, is_error) {
            Ok(result) => Ok(result),
            Err(e) => Ok(ToolResult::error(format!("Error: {}", e))),
        }
    }
}
