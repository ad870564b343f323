use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;
use unicex::core::errors::ExchangeError;
use unicex::core::kernel::RestClient;

/// One request as the connector issued it.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: String,
    pub endpoint: String,
    pub params: Vec<(String, String)>,
}

/// Stub transport: records every request and replays canned responses in
/// FIFO order. Wrap in `Arc` to satisfy the connectors' `Clone` bound.
#[derive(Debug)]
pub struct StubRest {
    responses: Mutex<VecDeque<Value>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubRest {
    pub fn new(responses: Vec<Value>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record_and_reply(
        &self,
        method: &str,
        endpoint: &str,
        params: &[(String, String)],
    ) -> Result<Value, ExchangeError> {
        self.calls.lock().unwrap().push(RecordedCall {
            method: method.to_string(),
            endpoint: endpoint.to_string(),
            params: params.to_vec(),
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| ExchangeError::NetworkError("stub transport exhausted".to_string()))
    }
}

#[async_trait]
impl RestClient for StubRest {
    async fn get(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> Result<Value, ExchangeError> {
        self.record_and_reply("GET", endpoint, params)
    }

    async fn post(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> Result<Value, ExchangeError> {
        self.record_and_reply("POST", endpoint, params)
    }
}

/// Convenience lookup for asserting on sent parameters.
pub fn param<'a>(call: &'a RecordedCall, key: &str) -> Option<&'a str> {
    call.params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}
