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

//! Compiled per-field pattern used by routing rules.

use crate::error::RegistrationError;
use crate::message::ClassificationField;
use regex::Regex;
use std::fmt::{Debug, Formatter};

/// A regular expression that must match the *whole* field value.
///
/// An absent pattern is NOT a wildcard. It compiles to the empty pattern, which only matches an
/// empty field. A rule registered without a sending application therefore never matches a
/// message that carries one.
#[derive(Clone)]
pub(crate) struct FieldPattern {
    source: Option<String>,
    regex: Regex,
}

impl FieldPattern {
    pub(crate) fn compile(
        field: ClassificationField,
        pattern: Option<&str>,
    ) -> Result<Self, RegistrationError> {
        let body = pattern.unwrap_or_default();
        let invalid = |source| RegistrationError::InvalidPattern {
            field,
            pattern: body.to_string(),
            source,
        };
        // The body must stand on its own, or a stray `)` could close the anchoring group.
        Regex::new(body).map_err(invalid)?;
        let regex = Regex::new(&format!("^(?:{body})$")).map_err(invalid)?;

        Ok(Self {
            source: pattern.map(str::to_string),
            regex,
        })
    }

    #[inline(always)]
    pub(crate) fn matches(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }

    /// The pattern as registered, `None` when it was absent.
    pub(crate) fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// The pattern text used in the derived key. Absent and empty patterns are the same rule.
    pub(crate) fn key_text(&self) -> &str {
        self.source.as_deref().unwrap_or_default()
    }
}

impl Debug for FieldPattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("FieldPattern").field(&self.source).finish()
    }
}
