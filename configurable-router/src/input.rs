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

use message_router::HeaderFields;
use std::error::Error;
use std::fmt::{Display, Formatter};

const FIELD_SEPARATOR: char = '|';
const COMMENT_PREFIX: char = '#';
const MAX_FIELDS: usize = 4;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InputLineError {
    TooManyFields { count: usize },
}

impl Display for InputLineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            InputLineError::TooManyFields { count } => write!(
                f,
                "expected at most {MAX_FIELDS} '{FIELD_SEPARATOR}'-separated fields, found {count}"
            ),
        }
    }
}

impl Error for InputLineError {}

/// Parses `TYPE|EVENT|APP|CONTROL`.
///
/// Blank lines and `#` comments yield `None`. Trailing fields may be left off; they stay unset
/// so the router reports them as missing.
pub fn parse_header_line(line: &str) -> Result<Option<HeaderFields>, InputLineError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
        return Ok(None);
    }

    let segments: Vec<&str> = line.split(FIELD_SEPARATOR).map(str::trim).collect();
    if segments.len() > MAX_FIELDS {
        return Err(InputLineError::TooManyFields {
            count: segments.len(),
        });
    }

    let segment = |index: usize| segments.get(index).map(|value| value.to_string());
    Ok(Some(HeaderFields {
        message_type: segment(0),
        trigger_event: segment(1),
        sending_application: segment(2),
        message_control_id: segment(3),
    }))
}
