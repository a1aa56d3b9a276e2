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

//! Routing rule identity: four field patterns and their derived dedupe key.

use crate::error::RegistrationError;
use crate::message::{ClassificationField, MessageFields};
use crate::observability::fields;
use crate::routing::pattern::FieldPattern;
use crate::routing::specificity::Specificity;
use std::fmt::{Display, Formatter};

/// Joins pattern texts into the derived key. ASCII unit separator, never part of a header value.
const KEY_SEPARATOR: char = '\u{1f}';

///
/// [`RoutingKey`] is the left-hand side of a routing rule: one pattern per
/// [`ClassificationField`], each matched against the whole field value.
///
/// Absent patterns only match empty fields.
///
/// # Examples
///
/// ```
/// use message_router::{MessageFields, RoutingKey, Specificity};
///
/// let key = RoutingKey::new(Some("OR."), Some("R01"), None, None).unwrap();
///
/// let with_application = MessageFields::new("ORU", "R01", "FORMENTRY", "CTRL1");
/// assert_eq!(key.specificity(&with_application), Specificity::TriggerEvent);
///
/// let bare = MessageFields::new("ORU", "R01", "", "");
/// assert_eq!(key.specificity(&bare), Specificity::Full);
/// ```
#[derive(Clone, Debug)]
pub struct RoutingKey {
    message_type: FieldPattern,
    trigger_event: FieldPattern,
    sending_application: FieldPattern,
    message_control_id: FieldPattern,
}

impl RoutingKey {
    /// Compiles the four patterns. Fails on the first pattern that is not a valid regex.
    pub fn new(
        message_type: Option<&str>,
        trigger_event: Option<&str>,
        sending_application: Option<&str>,
        message_control_id: Option<&str>,
    ) -> Result<Self, RegistrationError> {
        Ok(Self {
            message_type: FieldPattern::compile(ClassificationField::MessageType, message_type)?,
            trigger_event: FieldPattern::compile(
                ClassificationField::TriggerEvent,
                trigger_event,
            )?,
            sending_application: FieldPattern::compile(
                ClassificationField::SendingApplication,
                sending_application,
            )?,
            message_control_id: FieldPattern::compile(
                ClassificationField::MessageControlId,
                message_control_id,
            )?,
        })
    }

    /// The pattern registered for `field`, `None` when it was absent.
    pub fn pattern(&self, field: ClassificationField) -> Option<&str> {
        self.field_pattern(field).source()
    }

    /// How far along the field order this key matches `fields`.
    pub fn specificity(&self, fields: &MessageFields) -> Specificity {
        Specificity::of(self, fields)
    }

    pub(crate) fn field_pattern(&self, field: ClassificationField) -> &FieldPattern {
        match field {
            ClassificationField::MessageType => &self.message_type,
            ClassificationField::TriggerEvent => &self.trigger_event,
            ClassificationField::SendingApplication => &self.sending_application,
            ClassificationField::MessageControlId => &self.message_control_id,
        }
    }

    /// Storage identity. Two keys with the same derived key are the same rule.
    pub(crate) fn derived_key(&self) -> String {
        let mut derived = String::new();
        for (position, field) in ClassificationField::ORDER.iter().enumerate() {
            if position > 0 {
                derived.push(KEY_SEPARATOR);
            }
            derived.push_str(self.field_pattern(*field).key_text());
        }
        derived
    }
}

impl PartialEq for RoutingKey {
    fn eq(&self, other: &Self) -> bool {
        ClassificationField::ORDER.iter().all(|field| {
            self.field_pattern(*field).key_text() == other.field_pattern(*field).key_text()
        })
    }
}

impl Eq for RoutingKey {}

impl Display for RoutingKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}|{}|{}|{}",
            fields::format_pattern(self.message_type.source()),
            fields::format_pattern(self.trigger_event.source()),
            fields::format_pattern(self.sending_application.source()),
            fields::format_pattern(self.message_control_id.source()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{RoutingKey, KEY_SEPARATOR};
    use crate::message::ClassificationField;

    fn key(
        message_type: Option<&str>,
        trigger_event: Option<&str>,
        sending_application: Option<&str>,
        message_control_id: Option<&str>,
    ) -> RoutingKey {
        RoutingKey::new(
            message_type,
            trigger_event,
            sending_application,
            message_control_id,
        )
        .expect("key should compile")
    }

    #[test]
    fn derived_key_joins_patterns_in_field_order() {
        let routing_key = key(Some("ORU"), Some("R01"), Some("FORMENTRY"), None);

        assert_eq!(
            routing_key.derived_key(),
            format!("ORU{KEY_SEPARATOR}R01{KEY_SEPARATOR}FORMENTRY{KEY_SEPARATOR}")
        );
    }

    #[test]
    fn derived_key_does_not_collide_on_underscores() {
        let left = key(Some("A_B"), Some("C"), None, None);
        let right = key(Some("A"), Some("B_C"), None, None);

        assert_ne!(left.derived_key(), right.derived_key());
        assert_ne!(left, right);
    }

    #[test]
    fn absent_and_empty_patterns_are_the_same_rule() {
        let absent = key(Some("ADT"), None, None, None);
        let empty = key(Some("ADT"), Some(""), None, Some(""));

        assert_eq!(absent.derived_key(), empty.derived_key());
        assert_eq!(absent, empty);
        assert_eq!(absent.pattern(ClassificationField::TriggerEvent), None);
        assert_eq!(empty.pattern(ClassificationField::TriggerEvent), Some(""));
    }

    #[test]
    fn display_marks_absent_patterns() {
        let routing_key = key(Some("ORU"), Some("R01"), None, None);

        assert_eq!(routing_key.to_string(), "ORU|R01|<empty>|<empty>");
    }

    #[test]
    fn invalid_pattern_fails_construction() {
        assert!(RoutingKey::new(Some("ORU"), Some("[R01"), None, None).is_err());
    }

    #[test]
    fn stray_closing_paren_is_rejected_instead_of_matching_a_prefix() {
        assert!(RoutingKey::new(Some("ORU)|(ADT"), None, None, None).is_err());
        assert!(RoutingKey::new(None, Some("R01)|(.*"), None, None).is_err());
    }
}
