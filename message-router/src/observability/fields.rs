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

//! Canonical structured field values and value-format helpers.

use crate::message::{ClassificationField, MessageFields};

pub const EMPTY_PATTERN: &str = "<empty>";
pub const EMPTY_VALUE: &str = "\"\"";
pub const REASON_NO_MATCH: &str = "no_match";
pub const REASON_FIELDS_UNAVAILABLE: &str = "fields_unavailable";

/// Renders a rule pattern. Absent and empty patterns are the same rule and render alike.
pub fn format_pattern(pattern: Option<&str>) -> &str {
    match pattern {
        Some(pattern) if !pattern.is_empty() => pattern,
        _ => EMPTY_PATTERN,
    }
}

/// Renders an actual field value so that empty values stay visible in log lines.
pub fn format_field_value(value: &str) -> &str {
    if value.is_empty() {
        EMPTY_VALUE
    } else {
        value
    }
}

pub fn format_message_field(fields: &MessageFields, field: ClassificationField) -> &str {
    format_field_value(fields.get(field))
}
