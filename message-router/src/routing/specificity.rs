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

//! Specificity scoring and most-specific rule selection.

use crate::control_plane::routing_key::RoutingKey;
use crate::message::{ClassificationField, MessageFields};

/// Length of the contiguous matching prefix of a key against a message, in field order.
///
/// This is not a count of matching fields: once a field fails, later fields are never
/// consulted.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Specificity {
    #[default]
    None,
    MessageType,
    TriggerEvent,
    SendingApplication,
    Full,
}

impl Specificity {
    pub(crate) fn of(key: &RoutingKey, fields: &MessageFields) -> Self {
        let mut specificity = Specificity::None;
        for field in ClassificationField::ORDER {
            if !key.field_pattern(field).matches(fields.get(field)) {
                break;
            }
            specificity = specificity.next();
        }
        specificity
    }

    /// Number of leading fields matched, `0..=4`.
    pub fn score(self) -> u8 {
        self as u8
    }

    fn next(self) -> Self {
        match self {
            Specificity::None => Specificity::MessageType,
            Specificity::MessageType => Specificity::TriggerEvent,
            Specificity::TriggerEvent => Specificity::SendingApplication,
            Specificity::SendingApplication | Specificity::Full => Specificity::Full,
        }
    }
}

/// Picks the candidate whose key scores highest against `fields`.
///
/// Ties keep the first candidate in iteration order. A [`Specificity::Full`] match ends the scan,
/// so later candidates are never scored. Candidates scoring [`Specificity::None`] are never
/// selected.
pub(crate) fn select_most_specific<'a, T, I>(
    candidates: I,
    fields: &MessageFields,
) -> Option<(T, Specificity)>
where
    I: IntoIterator<Item = (&'a RoutingKey, T)>,
{
    let mut best: Option<(T, Specificity)> = None;

    for (key, candidate) in candidates {
        let specificity = key.specificity(fields);
        let best_specificity = best
            .as_ref()
            .map(|(_, specificity)| *specificity)
            .unwrap_or_default();

        if specificity > best_specificity {
            best = Some((candidate, specificity));
        }
        if specificity == Specificity::Full {
            break;
        }
    }

    best
}
