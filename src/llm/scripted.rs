// ABOUTME: ScriptedClient - an LlmClient that replays canned responses.
// ABOUTME: Records every request so tests can inspect what the runner sent.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{LlmClient, Request, Response};
use crate::error::LlmError;

/// Replays a fixed queue of responses, one per `create_message` call.
#[derive(Debug, Default)]
pub struct ScriptedClient {
    responses: Mutex<VecDeque<Response>>,
    requests: Mutex<Vec<Request>>,
}

impl ScriptedClient {
    /// Create a client that will answer with `responses` in order.
    pub fn new(responses: impl IntoIterator<Item = Response>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<Request> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    /// Number of responses not yet consumed.
    pub fn remaining(&self) -> usize {
        self.responses.lock().map(|r| r.len()).unwrap_or(0)
    }
}

#[async_trait]
impl LlmClient for ScriptedClient {
    async fn create_message(&self, req: &Request) -> Result<Response, LlmError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(req.clone());
        }

        let next = self
            .responses
            .lock()
            .map_err(|_| LlmError::Configuration("scripted client lock poisoned".to_string()))?
            .pop_front();

        next.ok_or_else(|| LlmError::Configuration("scripted client has no responses left".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replays_in_order_then_errors() {
        let client = ScriptedClient::new([
            Response::text_only("m", "first"),
            Response::text_only("m", "second"),
        ]);
        let req = Request::new("m");

        assert_eq!(client.create_message(&req).await.unwrap().text(), "first");
        assert_eq!(client.remaining(), 1);
        assert_eq!(client.create_message(&req).await.unwrap().text(), "second");

        let err = client.create_message(&req).await.unwrap_err();
        assert!(matches!(err, LlmError::Configuration(_)));
        assert_eq!(client.requests().len(), 3);
    }
}
