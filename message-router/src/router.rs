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

use crate::control_plane::route_table::{ResolvedRoute, RoutingTable};
use crate::control_plane::routing_key::RoutingKey;
use crate::error::{RegistrationError, RoutingError};
use crate::handler::MessageHandler;
use crate::message::{ClassificationField, MessageFields, RoutableMessage};
use crate::observability::{events, fields};
use std::sync::Arc;
use tracing::{debug, error, warn, Level};

const COMPONENT: &str = "message_type_router";

type HandlerRef<M, R> = Arc<dyn MessageHandler<M, R>>;

/// Routes each inbound message to the single registered handler whose rule matches it most
/// specifically.
///
/// Rules are scored by how many leading fields match, in the order message type, trigger
/// event, sending application, message control id. Ties go to the rule registered first. A rule
/// matching all four fields wins as soon as the scan reaches it.
pub struct MessageTypeRouter<M, R> {
    name: String,
    routing_table: RoutingTable<dyn MessageHandler<M, R>>,
}

impl<M, R> MessageTypeRouter<M, R>
where
    M: RoutableMessage,
{
    pub fn new(name: &str) -> Self {
        debug!(
            event = events::ROUTER_CREATED,
            component = COMPONENT,
            router = name,
            "router created with an empty routing table"
        );

        Self {
            name: name.to_string(),
            routing_table: RoutingTable::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registers `handler` for messages matching the four patterns.
    ///
    /// Each pattern is a regular expression matched against the whole field value. An absent
    /// pattern only matches an empty field; it is not a wildcard. Registering a rule that already
    /// exists replaces its handler and logs a warning.
    pub async fn register(
        &self,
        message_type: Option<&str>,
        trigger_event: Option<&str>,
        sending_application: Option<&str>,
        message_control_id: Option<&str>,
        handler: HandlerRef<M, R>,
    ) -> Result<(), RegistrationError> {
        let key = RoutingKey::new(
            message_type,
            trigger_event,
            sending_application,
            message_control_id,
        )
        .map_err(|err| {
            warn!(
                event = events::RULE_REGISTER_FAILED,
                component = COMPONENT,
                router = self.name.as_str(),
                handler = handler.name(),
                err = %err,
                "rejecting routing rule"
            );
            err
        })?;

        self.register_key(key, handler).await;
        Ok(())
    }

    /// Registers `handler` under an already compiled key. Last write wins.
    pub async fn register_key(&self, key: RoutingKey, handler: HandlerRef<M, R>) {
        let rule = key.to_string();
        let handler_name = handler.name().to_string();

        if self.routing_table.insert(key, handler).await.is_some() {
            warn!(
                event = events::RULE_REGISTER_OVERWRITE,
                component = COMPONENT,
                router = self.name.as_str(),
                rule = rule.as_str(),
                handler = handler_name.as_str(),
                "routing rule now handled by {handler_name}"
            );
        } else {
            debug!(
                event = events::RULE_REGISTER_OK,
                component = COMPONENT,
                router = self.name.as_str(),
                rule = rule.as_str(),
                handler = handler_name.as_str(),
                "registered routing rule"
            );
        }
    }

    /// Whether some registered rule would take `message`. Never fails.
    pub async fn can_process(&self, message: &M) -> bool {
        match self.resolve(message).await {
            Ok(_) => true,
            Err(err) => {
                debug!(
                    event = events::CAN_PROCESS_REJECTED,
                    component = COMPONENT,
                    router = self.name.as_str(),
                    err = %err,
                    "message cannot be routed"
                );
                false
            }
        }
    }

    /// Hands `message` to the most specific handler and returns its response unchanged.
    ///
    /// The routing table lock is released before the handler runs. Handler failures are wrapped
    /// with the matched rule and never retried against a less specific rule.
    pub async fn process_message(&self, message: M) -> Result<R, RoutingError> {
        let resolved = self.resolve(&message).await?;
        let rule = resolved.key.to_string();
        let handler_name = resolved.handler.name().to_string();

        debug!(
            event = events::DISPATCH_START,
            component = COMPONENT,
            router = self.name.as_str(),
            rule = rule.as_str(),
            handler = handler_name.as_str(),
            specificity = resolved.specificity.score(),
            "dispatching message"
        );

        match resolved.handler.process_message(message).await {
            Ok(response) => {
                debug!(
                    event = events::DISPATCH_OK,
                    component = COMPONENT,
                    router = self.name.as_str(),
                    rule = rule.as_str(),
                    handler = handler_name.as_str(),
                    "handler processed message"
                );
                Ok(response)
            }
            Err(source) => {
                error!(
                    event = events::DISPATCH_FAILED,
                    component = COMPONENT,
                    router = self.name.as_str(),
                    rule = rule.as_str(),
                    handler = handler_name.as_str(),
                    err = %source,
                    "handler failed to process message"
                );
                Err(RoutingError::Handler {
                    rule,
                    handler: handler_name,
                    source,
                })
            }
        }
    }

    /// Number of registered rules.
    pub async fn rule_count(&self) -> usize {
        self.routing_table.len().await
    }

    /// Registered rules in the order the matching scan visits them.
    pub async fn registered_rules(&self) -> Vec<RoutingKey> {
        self.routing_table.keys().await
    }

    async fn resolve(
        &self,
        message: &M,
    ) -> Result<ResolvedRoute<dyn MessageHandler<M, R>>, RoutingError> {
        let message_fields = message.classification_fields().map_err(|err| {
            debug!(
                event = events::ROUTE_FIELDS_UNAVAILABLE,
                component = COMPONENT,
                router = self.name.as_str(),
                reason = fields::REASON_FIELDS_UNAVAILABLE,
                err = %err,
                "unable to read classification fields"
            );
            RoutingError::from(err)
        })?;

        let Some(resolved) = self.routing_table.resolve(&message_fields).await else {
            if tracing::enabled!(Level::DEBUG) {
                debug!(
                    event = events::ROUTE_MATCH_NONE,
                    component = COMPONENT,
                    router = self.name.as_str(),
                    msg_type = message_value(&message_fields, ClassificationField::MessageType),
                    trigger_event =
                        message_value(&message_fields, ClassificationField::TriggerEvent),
                    sending_app =
                        message_value(&message_fields, ClassificationField::SendingApplication),
                    control_id =
                        message_value(&message_fields, ClassificationField::MessageControlId),
                    reason = fields::REASON_NO_MATCH,
                    "no routing rule matched"
                );
            }
            return Err(RoutingError::NoMatch {
                fields: message_fields,
            });
        };

        if tracing::enabled!(Level::DEBUG) {
            debug!(
                event = events::ROUTE_MATCH_OK,
                component = COMPONENT,
                router = self.name.as_str(),
                rule = %resolved.key,
                specificity = resolved.specificity.score(),
                msg_type = message_value(&message_fields, ClassificationField::MessageType),
                trigger_event = message_value(&message_fields, ClassificationField::TriggerEvent),
                "resolved routing rule"
            );
        }

        Ok(resolved)
    }
}

fn message_value(message_fields: &MessageFields, field: ClassificationField) -> &str {
    fields::format_message_field(message_fields, field)
}
