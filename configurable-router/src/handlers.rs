/********************************************************************************
 * Copyright (c) 2025 Contributors to the Eclipse Foundation
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

//! Built-in handlers selectable from the config file by [`HandlerKind`].

use crate::config::HandlerKind;
use async_trait::async_trait;
use message_router::{HandlerError, HeaderFields, MessageHandler, StrategyRegistry};
use std::sync::Arc;
use tracing::info;

pub(crate) type HeaderHandler = dyn MessageHandler<HeaderFields, String>;

fn describe(message: &HeaderFields) -> String {
    format!(
        "{}^{} {}",
        message.message_type.as_deref().unwrap_or_default(),
        message.trigger_event.as_deref().unwrap_or_default(),
        message.message_control_id.as_deref().unwrap_or_default()
    )
}

/// Accepts the message: `AA <type>^<event> <control id>`.
struct AcknowledgeHandler;

#[async_trait]
impl MessageHandler<HeaderFields, String> for AcknowledgeHandler {
    async fn process_message(&self, message: HeaderFields) -> Result<String, HandlerError> {
        Ok(format!("AA {}", describe(&message)))
    }

    fn name(&self) -> &str {
        "acknowledge"
    }
}

/// Refuses the message with an application reject.
struct RejectHandler;

#[async_trait]
impl MessageHandler<HeaderFields, String> for RejectHandler {
    async fn process_message(&self, message: HeaderFields) -> Result<String, HandlerError> {
        Err(format!("AR {} rejected by configuration", describe(&message)).into())
    }

    fn name(&self) -> &str {
        "reject"
    }
}

struct LogHandler;

#[async_trait]
impl MessageHandler<HeaderFields, String> for LogHandler {
    async fn process_message(&self, message: HeaderFields) -> Result<String, HandlerError> {
        let description = describe(&message);
        info!("received {description}");
        Ok(format!("LOGGED {description}"))
    }

    fn name(&self) -> &str {
        "log"
    }
}

pub(crate) fn builtin_handlers() -> StrategyRegistry<HandlerKind, HeaderHandler> {
    let mut registry: StrategyRegistry<HandlerKind, HeaderHandler> =
        StrategyRegistry::new("builtin_handlers");
    for kind in HandlerKind::ALL {
        let handler: Arc<HeaderHandler> = match kind {
            HandlerKind::Acknowledge => Arc::new(AcknowledgeHandler),
            HandlerKind::Reject => Arc::new(RejectHandler),
            HandlerKind::Log => Arc::new(LogHandler),
        };
        registry.register(kind, handler);
    }
    registry
}
