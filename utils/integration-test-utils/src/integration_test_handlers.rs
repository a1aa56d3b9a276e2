/********************************************************************************
 * Copyright (c) 2024 Contributors to the Eclipse Foundation
 *
 * See the NOTICE file(s) distributed with this work for additional
 * information regarding copyright ownership.
 *
 * This program and the accompanying materials are made available under the
 * terms of the Apache License Version 2.0 which is available at
 * https://www.apache.org/licenses/LICENSE-2.0
 *
 * SPDX-License-Identifier: Apache-2.0
 ********************************************************************************/

use async_trait::async_trait;
use message_router::{HandlerError, HeaderFields, MessageHandler};
use std::sync::Arc;
use tokio::sync::{Mutex, Notify};
use tracing::debug;

/// Remembers every message it processed and answers `"<name>:<control id>"`.
pub struct RecordingHandler {
    name: String,
    processed: Mutex<Vec<HeaderFields>>,
}

impl RecordingHandler {
    pub fn new(name: &str) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            processed: Mutex::new(Vec::new()),
        })
    }

    pub async fn processed(&self) -> Vec<HeaderFields> {
        self.processed.lock().await.clone()
    }

    pub async fn processed_count(&self) -> usize {
        self.processed.lock().await.len()
    }
}

#[async_trait]
impl MessageHandler<HeaderFields, String> for RecordingHandler {
    async fn process_message(&self, message: HeaderFields) -> Result<String, HandlerError> {
        debug!("{}: processing {message:?}", self.name);
        let control_id = message.message_control_id.clone().unwrap_or_default();
        self.processed.lock().await.push(message);
        Ok(format!("{}:{control_id}", self.name))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Always fails with the configured reason.
pub struct FailingHandler {
    name: String,
    reason: String,
}

impl FailingHandler {
    pub fn new(name: &str, reason: &str) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            reason: reason.to_string(),
        })
    }
}

#[async_trait]
impl MessageHandler<HeaderFields, String> for FailingHandler {
    async fn process_message(&self, message: HeaderFields) -> Result<String, HandlerError> {
        debug!("{}: failing {message:?}", self.name);
        Err(self.reason.clone().into())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Parks inside `process_message` until released, so tests can act while a dispatch is
/// in flight.
pub struct GatedHandler {
    name: String,
    entered: Notify,
    gate: Notify,
}

impl GatedHandler {
    pub fn new(name: &str) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            entered: Notify::new(),
            gate: Notify::new(),
        })
    }

    /// Resolves once a dispatch has entered the handler.
    pub async fn wait_until_entered(&self) {
        self.entered.notified().await;
    }

    /// Lets the parked dispatch finish.
    pub fn release(&self) {
        self.gate.notify_one();
    }
}

#[async_trait]
impl MessageHandler<HeaderFields, String> for GatedHandler {
    async fn process_message(&self, _message: HeaderFields) -> Result<String, HandlerError> {
        self.entered.notify_one();
        self.gate.notified().await;
        Ok(self.name.clone())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
