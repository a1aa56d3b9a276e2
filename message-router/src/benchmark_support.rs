/********************************************************************************
 * Copyright (c) 2026 Contributors to the Eclipse Foundation
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

//! Deterministic benchmark fixtures for the Criterion harness.

use crate::error::{RegistrationError, RoutingError};
use crate::handler::{HandlerError, MessageHandler};
use crate::message::MessageFields;
use crate::router::MessageTypeRouter;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

struct CountingHandler {
    processed: AtomicUsize,
}

#[async_trait]
impl MessageHandler<MessageFields, usize> for CountingHandler {
    async fn process_message(&self, _message: MessageFields) -> Result<usize, HandlerError> {
        Ok(self.processed.fetch_add(1, Ordering::Relaxed) + 1)
    }

    fn name(&self) -> &str {
        "benchmark_counting_handler"
    }
}

fn message_type(index: usize) -> String {
    format!("T{index:03}")
}

/// A router loaded with `rows` rules, each for a distinct message type, where every message
/// type has a generic rule and a rule pinned to one sending application.
pub struct RoutingScanFixture {
    router: MessageTypeRouter<MessageFields, usize>,
    first_rule_message: MessageFields,
    last_rule_message: MessageFields,
    full_match_message: MessageFields,
    unmatched_message: MessageFields,
}

impl RoutingScanFixture {
    pub async fn new(rows: usize) -> Result<Self, RegistrationError> {
        let router = MessageTypeRouter::new("benchmark");
        let handler: Arc<dyn MessageHandler<MessageFields, usize>> = Arc::new(CountingHandler {
            processed: AtomicUsize::new(0),
        });

        for index in 0..rows {
            let message_type = message_type(index);
            router
                .register(
                    Some(&message_type),
                    Some("R0[0-9]"),
                    None,
                    None,
                    handler.clone(),
                )
                .await?;
            router
                .register(
                    Some(&message_type),
                    Some("R01"),
                    Some("APP-[0-9]+"),
                    Some("CTRL-.*"),
                    handler.clone(),
                )
                .await?;
        }

        let last = rows.saturating_sub(1);
        Ok(Self {
            router,
            first_rule_message: MessageFields::new(&message_type(0), "R01", "APP-7", "X"),
            last_rule_message: MessageFields::new(&message_type(last), "R01", "APP-7", "X"),
            full_match_message: MessageFields::new(&message_type(0), "R01", "APP-7", "CTRL-1"),
            unmatched_message: MessageFields::new("ZZZ", "R01", "APP-7", "X"),
        })
    }

    /// Partial match that must scan the whole table.
    pub async fn dispatch_partial_match(&self) -> Result<usize, RoutingError> {
        self.router
            .process_message(self.first_rule_message.clone())
            .await
    }

    /// Partial match whose best rule sits at the end of the scan.
    pub async fn dispatch_last_rule(&self) -> Result<usize, RoutingError> {
        self.router
            .process_message(self.last_rule_message.clone())
            .await
    }

    /// Full match near the start of the scan; exits early.
    pub async fn dispatch_full_match(&self) -> Result<usize, RoutingError> {
        self.router
            .process_message(self.full_match_message.clone())
            .await
    }

    pub async fn probe_unmatched(&self) -> bool {
        self.router.can_process(&self.unmatched_message).await
    }
}
