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

//! Failures surfaced by registration and dispatch.

use crate::handler::HandlerError;
use crate::message::{ClassificationField, FieldExtractionError, MessageFields};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// A routing rule could not be registered.
#[derive(Debug)]
pub enum RegistrationError {
    InvalidPattern {
        field: ClassificationField,
        pattern: String,
        source: regex::Error,
    },
}

impl Display for RegistrationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistrationError::InvalidPattern { field, pattern, .. } => {
                write!(f, "invalid pattern {pattern:?} for {field}")
            }
        }
    }
}

impl Error for RegistrationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RegistrationError::InvalidPattern { source, .. } => Some(source),
        }
    }
}

/// A message was not delivered.
#[derive(Debug)]
pub enum RoutingError {
    /// The message does not expose the classification fields.
    FieldExtraction(FieldExtractionError),
    /// No registered rule matched the message type.
    NoMatch { fields: MessageFields },
    /// The matched handler failed while processing the message.
    Handler {
        rule: String,
        handler: String,
        source: HandlerError,
    },
}

impl Display for RoutingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RoutingError::FieldExtraction(err) => {
                write!(f, "error internally routing message: {err}")
            }
            RoutingError::NoMatch { fields } => {
                write!(f, "could not find a handler for {fields}")
            }
            RoutingError::Handler {
                rule,
                handler,
                source,
            } => write!(
                f,
                "handler {handler} registered for rule {rule} failed: {source}"
            ),
        }
    }
}

impl Error for RoutingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RoutingError::FieldExtraction(err) => Some(err),
            RoutingError::NoMatch { .. } => None,
            RoutingError::Handler { source, .. } => Some(&**source),
        }
    }
}

impl From<FieldExtractionError> for RoutingError {
    fn from(err: FieldExtractionError) -> Self {
        RoutingError::FieldExtraction(err)
    }
}
