//! Routing-table data model and storage owner for rule identity.

use crate::control_plane::routing_key::RoutingKey;
use crate::message::MessageFields;
use crate::routing::specificity::{select_most_specific, Specificity};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// A handler resolved for one message, cloned out of the table.
pub(crate) struct ResolvedRoute<H: ?Sized> {
    pub(crate) key: Arc<RoutingKey>,
    pub(crate) handler: Arc<H>,
    pub(crate) specificity: Specificity,
}

struct RoutingEntry<H: ?Sized> {
    key: Arc<RoutingKey>,
    handler: Arc<H>,
}

/// Entries in insertion order plus a derived-key index for dedupe.
struct RoutingEntries<H: ?Sized> {
    entries: Vec<RoutingEntry<H>>,
    positions: HashMap<String, usize>,
}

/// Rule storage owner. One lock covers both insertion and the matching scan.
pub(crate) struct RoutingTable<H: ?Sized> {
    rules: Mutex<RoutingEntries<H>>,
}

impl<H: ?Sized> RoutingTable<H> {
    /// Creates an empty routing table.
    pub(crate) fn new() -> Self {
        Self {
            rules: Mutex::new(RoutingEntries {
                entries: Vec::new(),
                positions: HashMap::new(),
            }),
        }
    }

    /// Inserts or overwrites the rule for `key`. Returns the handler it replaced, if any.
    ///
    /// An overwritten rule keeps its original position in the scan order.
    pub(crate) async fn insert(&self, key: RoutingKey, handler: Arc<H>) -> Option<Arc<H>> {
        let derived_key = key.derived_key();
        let entry = RoutingEntry {
            key: Arc::new(key),
            handler,
        };

        let mut rules = self.rules.lock().await;
        match rules.positions.get(&derived_key).copied() {
            Some(position) => {
                let replaced = std::mem::replace(&mut rules.entries[position], entry);
                Some(replaced.handler)
            }
            None => {
                let position = rules.entries.len();
                rules.entries.push(entry);
                rules.positions.insert(derived_key, position);
                None
            }
        }
    }

    /// Scans every rule in insertion order and resolves the most specific one.
    pub(crate) async fn resolve(&self, fields: &MessageFields) -> Option<ResolvedRoute<H>> {
        let rules = self.rules.lock().await;
        let candidates = rules
            .entries
            .iter()
            .map(|entry| (entry.key.as_ref(), entry));

        select_most_specific(candidates, fields).map(|(entry, specificity)| ResolvedRoute {
            key: entry.key.clone(),
            handler: entry.handler.clone(),
            specificity,
        })
    }

    pub(crate) async fn len(&self) -> usize {
        self.rules.lock().await.entries.len()
    }

    /// Registered keys in scan order.
    pub(crate) async fn keys(&self) -> Vec<RoutingKey> {
        let rules = self.rules.lock().await;
        rules
            .entries
            .iter()
            .map(|entry| entry.key.as_ref().clone())
            .collect()
    }
}
