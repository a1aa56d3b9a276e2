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

//! Instance-owned registry of pluggable strategies keyed by an explicit kind tag.

use crate::observability::events;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::hash::Hash;
use std::sync::Arc;
use tracing::{debug, warn};

const COMPONENT: &str = "strategy_registry";

/// Lookup of a kind that has no registered strategy.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RegistryError<K> {
    NotRegistered(K),
}

impl<K: Display> Display for RegistryError<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::NotRegistered(kind) => {
                write!(f, "no strategy registered for {kind}")
            }
        }
    }
}

impl<K: Debug + Display> Error for RegistryError<K> {}

///
/// [`StrategyRegistry`] maps a kind tag `K`, usually a closed enum, to one shared
/// implementation of `S`.
///
/// The registry is an ordinary value: the service that owns it builds it at start-up and drops
/// or [`clear`](StrategyRegistry::clear)s it at teardown.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use message_router::{RegistryError, StrategyRegistry};
///
/// #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
/// enum Codec {
///     Pipe,
///     Xml,
/// }
///
/// impl std::fmt::Display for Codec {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "{self:?}")
///     }
/// }
///
/// let mut registry: StrategyRegistry<Codec, str> = StrategyRegistry::new("codecs");
/// registry.register(Codec::Pipe, Arc::from("er7"));
///
/// assert_eq!(registry.get(&Codec::Pipe).unwrap().as_ref(), "er7");
/// assert_eq!(
///     registry.get(&Codec::Xml).unwrap_err(),
///     RegistryError::NotRegistered(Codec::Xml)
/// );
/// ```
pub struct StrategyRegistry<K, S: ?Sized> {
    name: String,
    strategies: HashMap<K, Arc<S>>,
}

impl<K, S> StrategyRegistry<K, S>
where
    K: Clone + Eq + Hash + Display,
    S: ?Sized,
{
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            strategies: HashMap::new(),
        }
    }

    /// Registers `strategy` for `kind`, returning the strategy it replaced.
    pub fn register(&mut self, kind: K, strategy: Arc<S>) -> Option<Arc<S>> {
        let strategy_kind = kind.to_string();
        let replaced = self.strategies.insert(kind, strategy);

        if replaced.is_some() {
            warn!(
                event = events::STRATEGY_REGISTER_REPLACED,
                component = COMPONENT,
                registry = self.name.as_str(),
                strategy_kind = strategy_kind.as_str(),
                "strategy replaced"
            );
        } else {
            debug!(
                event = events::STRATEGY_REGISTER_OK,
                component = COMPONENT,
                registry = self.name.as_str(),
                strategy_kind = strategy_kind.as_str(),
                "strategy registered"
            );
        }

        replaced
    }

    pub fn get(&self, kind: &K) -> Result<Arc<S>, RegistryError<K>> {
        match self.strategies.get(kind) {
            Some(strategy) => Ok(strategy.clone()),
            None => {
                debug!(
                    event = events::STRATEGY_LOOKUP_MISSING,
                    component = COMPONENT,
                    registry = self.name.as_str(),
                    strategy_kind = %kind,
                    "no strategy registered"
                );
                Err(RegistryError::NotRegistered(kind.clone()))
            }
        }
    }

    pub fn remove(&mut self, kind: &K) -> Option<Arc<S>> {
        let removed = self.strategies.remove(kind);
        if removed.is_some() {
            debug!(
                event = events::STRATEGY_REMOVE,
                component = COMPONENT,
                registry = self.name.as_str(),
                strategy_kind = %kind,
                "strategy removed"
            );
        }
        removed
    }

    pub fn contains(&self, kind: &K) -> bool {
        self.strategies.contains_key(kind)
    }

    /// Registered kinds, in no particular order.
    pub fn kinds(&self) -> Vec<K> {
        self.strategies.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Drops every registered strategy.
    pub fn clear(&mut self) {
        debug!(
            event = events::STRATEGY_CLEAR,
            component = COMPONENT,
            registry = self.name.as_str(),
            count = self.strategies.len(),
            "clearing strategies"
        );
        self.strategies.clear();
    }
}
