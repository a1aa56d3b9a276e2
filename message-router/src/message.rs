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

//! Inbound message contract consumed by the router.
//!
//! The router never parses wire messages. It asks an already-parsed message for the four
//! classification fields through [`RoutableMessage`].

use std::error::Error;
use std::fmt::{Display, Formatter};

/// The four header fields a routing rule discriminates on, in matching order.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ClassificationField {
    MessageType,
    TriggerEvent,
    SendingApplication,
    MessageControlId,
}

impl ClassificationField {
    /// Matching order. A rule only gets credit for a field once every field before it matched.
    pub const ORDER: [ClassificationField; 4] = [
        ClassificationField::MessageType,
        ClassificationField::TriggerEvent,
        ClassificationField::SendingApplication,
        ClassificationField::MessageControlId,
    ];

    /// Well-known header path of the field.
    pub fn path(self) -> &'static str {
        match self {
            ClassificationField::MessageType => "MSH-9-1",
            ClassificationField::TriggerEvent => "MSH-9-2",
            ClassificationField::SendingApplication => "MSH-3",
            ClassificationField::MessageControlId => "MSH-10",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ClassificationField::MessageType => "message_type",
            ClassificationField::TriggerEvent => "trigger_event",
            ClassificationField::SendingApplication => "sending_application",
            ClassificationField::MessageControlId => "message_control_id",
        }
    }
}

impl Display for ClassificationField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.path())
    }
}

/// Failure to read a classification field from a message.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldExtractionError {
    Missing(ClassificationField),
    Malformed {
        field: ClassificationField,
        reason: String,
    },
}

impl Display for FieldExtractionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldExtractionError::Missing(field) => write!(f, "missing field {field}"),
            FieldExtractionError::Malformed { field, reason } => {
                write!(f, "malformed field {field}: {reason}")
            }
        }
    }
}

impl Error for FieldExtractionError {}

/// Actual classification values of one message. Empty strings are legitimate values.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MessageFields {
    pub message_type: String,
    pub trigger_event: String,
    pub sending_application: String,
    pub message_control_id: String,
}

impl MessageFields {
    pub fn new(
        message_type: &str,
        trigger_event: &str,
        sending_application: &str,
        message_control_id: &str,
    ) -> Self {
        Self {
            message_type: message_type.to_string(),
            trigger_event: trigger_event.to_string(),
            sending_application: sending_application.to_string(),
            message_control_id: message_control_id.to_string(),
        }
    }

    pub fn get(&self, field: ClassificationField) -> &str {
        match field {
            ClassificationField::MessageType => &self.message_type,
            ClassificationField::TriggerEvent => &self.trigger_event,
            ClassificationField::SendingApplication => &self.sending_application,
            ClassificationField::MessageControlId => &self.message_control_id,
        }
    }
}

impl Display for MessageFields {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "type={:?} trigger_event={:?} sending_application={:?} message_control_id={:?}",
            self.message_type,
            self.trigger_event,
            self.sending_application,
            self.message_control_id
        )
    }
}

/// An already-parsed message that can answer classification field queries.
pub trait RoutableMessage: Send + Sync {
    /// Reads one classification field. A present but empty field is `Ok("")`.
    fn field(&self, field: ClassificationField) -> Result<String, FieldExtractionError>;

    /// Reads all four fields, failing on the first one that cannot be extracted.
    fn classification_fields(&self) -> Result<MessageFields, FieldExtractionError> {
        Ok(MessageFields {
            message_type: self.field(ClassificationField::MessageType)?,
            trigger_event: self.field(ClassificationField::TriggerEvent)?,
            sending_application: self.field(ClassificationField::SendingApplication)?,
            message_control_id: self.field(ClassificationField::MessageControlId)?,
        })
    }
}

impl RoutableMessage for MessageFields {
    fn field(&self, field: ClassificationField) -> Result<String, FieldExtractionError> {
        Ok(self.get(field).to_string())
    }
}

/// Header values handed over by an external parser. A `None` field was absent from the header.
///
/// ```
/// use message_router::{ClassificationField, HeaderFields, RoutableMessage};
///
/// let header = HeaderFields::new("ORU", "R01", "FORMENTRY", "CTRL1");
/// assert_eq!(header.field(ClassificationField::SendingApplication).unwrap(), "FORMENTRY");
///
/// let truncated = HeaderFields {
///     message_control_id: None,
///     ..header
/// };
/// assert!(truncated.classification_fields().is_err());
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct HeaderFields {
    pub message_type: Option<String>,
    pub trigger_event: Option<String>,
    pub sending_application: Option<String>,
    pub message_control_id: Option<String>,
}

impl HeaderFields {
    pub fn new(
        message_type: &str,
        trigger_event: &str,
        sending_application: &str,
        message_control_id: &str,
    ) -> Self {
        Self {
            message_type: Some(message_type.to_string()),
            trigger_event: Some(trigger_event.to_string()),
            sending_application: Some(sending_application.to_string()),
            message_control_id: Some(message_control_id.to_string()),
        }
    }
}

impl RoutableMessage for HeaderFields {
    fn field(&self, field: ClassificationField) -> Result<String, FieldExtractionError> {
        let value = match field {
            ClassificationField::MessageType => self.message_type.as_ref(),
            ClassificationField::TriggerEvent => self.trigger_event.as_ref(),
            ClassificationField::SendingApplication => self.sending_application.as_ref(),
            ClassificationField::MessageControlId => self.message_control_id.as_ref(),
        };

        value
            .cloned()
            .ok_or(FieldExtractionError::Missing(field))
    }
}

#[cfg(test)]
mod tests {
    use super::{ClassificationField, FieldExtractionError, HeaderFields, RoutableMessage};

    #[test]
    fn classification_fields_reads_all_four_in_order() {
        let header = HeaderFields::new("ADT", "A01", "REGISTRATION", "42");
        let fields = header
            .classification_fields()
            .expect("all fields are present");

        let values: Vec<&str> = ClassificationField::ORDER
            .iter()
            .map(|field| fields.get(*field))
            .collect();
        assert_eq!(values, vec!["ADT", "A01", "REGISTRATION", "42"]);
    }

    #[test]
    fn classification_fields_reports_first_missing_field() {
        let header = HeaderFields {
            message_type: Some("ADT".to_string()),
            trigger_event: None,
            sending_application: None,
            message_control_id: Some("42".to_string()),
        };

        assert_eq!(
            header.classification_fields(),
            Err(FieldExtractionError::Missing(
                ClassificationField::TriggerEvent
            ))
        );
    }

    #[test]
    fn empty_field_is_a_value_not_a_failure() {
        let header = HeaderFields::new("ORU", "R01", "", "");

        assert_eq!(
            header.field(ClassificationField::SendingApplication),
            Ok(String::new())
        );
    }

    #[test]
    fn extraction_error_display_names_the_header_path() {
        let error = FieldExtractionError::Missing(ClassificationField::MessageControlId);

        assert_eq!(
            error.to_string(),
            "missing field message_control_id (MSH-10)"
        );
    }
}
