//! Routing and rule-matching layer.
//!
//! Encapsulates per-field pattern compilation, the ordered-prefix specificity score, and the
//! most-specific selection policy the router applies to every inbound message.
//!
//! ```
//! use message_router::{MessageFields, RoutingKey, Specificity};
//!
//! let generic = RoutingKey::new(Some("ORU"), Some("R01"), None, None).unwrap();
//! let formentry = RoutingKey::new(Some("ORU"), Some("R01"), Some("FORMENTRY"), None).unwrap();
//!
//! let fields = MessageFields::new("ORU", "R01", "FORMENTRY", "CTRL1");
//! assert!(formentry.specificity(&fields) > generic.specificity(&fields));
//!
//! // A type mismatch scores nothing, whatever the other fields say.
//! let adt = RoutingKey::new(Some("ADT"), Some("R01"), Some("FORMENTRY"), Some("CTRL1")).unwrap();
//! assert_eq!(adt.specificity(&fields), Specificity::None);
//! ```

pub(crate) mod pattern;
pub(crate) mod specificity;
