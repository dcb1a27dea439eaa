// ABOUTME: Tests for tool Registry - registration, lookup, definitions.
// ABOUTME: Uses a mock tool for testing.

use super::*;

/// A tool with a configurable name.
struct NamedTool(&'static str);

#[async_trait::async_trait]
impl Tool for NamedTool {
    fn name(&self) -> &str {
        self.0
    }

    fn description(&self) -> &str {
        "Echoes input back"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "message": { "type": "string" }
            },
            "required": ["message"]
        })
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        let message = params["message"].as_str().unwrap_or("");
        Ok(ToolResult::json(&message, false)?)
    }
}

#[tokio::test]
async fn test_register_and_get() {
    let registry = Registry::new();
    registry.register(NamedTool("echo")).await;

    let tool = registry.get("echo").await;
    assert!(tool.is_some());
    assert_eq!(tool.unwrap().name(), "echo");
}

#[tokio::test]
async fn test_get_nonexistent() {
    let registry = Registry::new();
    assert!(registry.get("nonexistent").await.is_none());
}

#[tokio::test]
async fn test_register_replaces_same_name() {
    let registry = Registry::new();
    registry.register(NamedTool("echo")).await;
    registry.register(NamedTool("echo")).await;
    assert_eq!(registry.list().await, vec!["echo"]);
}

#[tokio::test]
async fn test_list_sorted() {
    let registry = Registry::new();
    registry.register(NamedTool("zeta")).await;
    registry.register(NamedTool("alpha")).await;

    assert_eq!(registry.list().await, vec!["alpha", "zeta"]);
}

#[tokio::test]
async fn test_to_definitions_sorted() {
    let registry = Registry::new();
    registry.register(NamedTool("zeta")).await;
    registry.register(NamedTool("alpha")).await;

    let defs = registry.to_definitions().await;
    assert_eq!(defs.len(), 2);
    assert_eq!(defs[0].name, "alpha");
    assert_eq!(defs[1].name, "zeta");
    assert_eq!(defs[0].description, "Echoes input back");
    assert!(defs[0].input_schema["properties"]["message"].is_object());
}

#[tokio::test]
async fn test_clone_shares_state() {
    let registry = Registry::new();
    let clone = registry.clone();

    registry.register(NamedTool("echo")).await;
    assert_eq!(clone.list().await, vec!["echo"]);
    assert!(clone.get("echo").await.is_some());
}
