//! Shared helpers for gateway integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::Mutex;
use strapi_mesh_gateway::{DataRequest, DataResource, GatewayError, GatewayResult};

/// Builds `count` entry rows with document ids `doc-{start}..`.
pub fn rows(start: usize, count: usize) -> Vec<Value> {
    (start..start + count)
        .map(|i| {
            json!({
                "id": i,
                "documentId": format!("doc-{i}"),
                "publishedAt": "2025-01-01T12:00:00.000Z",
                "title": format!("Entry {i}")
            })
        })
        .collect()
}

/// One listing page with pagination metadata.
pub fn page(rows: Vec<Value>, page: u32, page_count: u32, total: u64) -> Value {
    json!({
        "data": rows,
        "meta": {
            "pagination": {
                "page": page,
                "pageSize": 100,
                "pageCount": page_count,
                "total": total
            }
        }
    })
}

/// In-memory [`DataResource`] that replays scripted responses and records
/// every request it receives.
#[derive(Default)]
pub struct ScriptedResource {
    responses: Mutex<VecDeque<GatewayResult<Value>>>,
    requests: Mutex<Vec<DataRequest>>,
}

impl ScriptedResource {
    pub fn new(responses: Vec<GatewayResult<Value>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<DataRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl DataResource for ScriptedResource {
    async fn get_data_resource(&self, request: DataRequest) -> GatewayResult<Value> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Network("no scripted response".into())))
    }
}
