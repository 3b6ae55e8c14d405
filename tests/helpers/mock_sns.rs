//! A mock SNS publisher for testing the publish pipeline.

use anyhow::Result;
use async_trait::async_trait;
use snsnotify::notification::sns::{PublishRequest, SnsPublisher};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct MockSnsPublisher {
    requests: Arc<Mutex<Vec<PublishRequest>>>,
}

impl MockSnsPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    // A test helper to get the requests that were "published".
    pub fn requests(&self) -> Vec<PublishRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl SnsPublisher for MockSnsPublisher {
    async fn publish(&self, request: PublishRequest) -> Result<String> {
        self.requests.lock().unwrap().push(request);
        Ok("94f20ce6-13c5-43a0-9a9e-ca52d816e90b".to_string())
    }
}
