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
use std::error::Error;

/// Opaque failure raised by a handler. The router wraps it and never inspects it.
pub type HandlerError = Box<dyn Error + Send + Sync + 'static>;

///
/// [`MessageHandler`] is the capability a [`MessageTypeRouter`][crate::MessageTypeRouter]
/// dispatches to: business logic for one family of messages.
///
/// `M` is the inbound message and `R` the response handed back to the caller unchanged.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use message_router::{
///     ClassificationField, HandlerError, MessageFields, MessageHandler, RoutableMessage,
/// };
///
/// struct Acknowledge;
///
/// #[async_trait]
/// impl MessageHandler<MessageFields, String> for Acknowledge {
///     async fn process_message(&self, message: MessageFields) -> Result<String, HandlerError> {
///         let control_id = message.field(ClassificationField::MessageControlId)?;
///         Ok(format!("AA {control_id}"))
///     }
/// }
/// ```
#[async_trait]
pub trait MessageHandler<M, R>: Send + Sync {
    async fn process_message(&self, message: M) -> Result<R, HandlerError>;

    /// Label used in routing events. Defaults to the implementing type's name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
