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

//! # message-router
//!
//! `message-router` dispatches already-parsed inbound messages to exactly one registered
//! handler, picked by the most specific matching rule over four header fields: message type,
//! trigger event, sending application and message control id.
//!
//! Typical usage is API-first and remains centered on [`MessageTypeRouter`],
//! [`MessageHandler`] and [`RoutableMessage`].
//!
//! ## Quick start
//!
//! ```
//! use std::sync::Arc;
//! use message_router::{HeaderFields, MessageTypeRouter};
//!
//! # pub mod handlers {
//! #     use async_trait::async_trait;
//! #     use message_router::{HandlerError, HeaderFields, MessageHandler};
//! #
//! #     pub struct Labelled(pub &'static str);
//! #
//! #     #[async_trait]
//! #     impl MessageHandler<HeaderFields, String> for Labelled {
//! #         async fn process_message(&self, _message: HeaderFields) -> Result<String, HandlerError> {
//! #             Ok(self.0.to_string())
//! #         }
//! #     }
//! # }
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let router: MessageTypeRouter<HeaderFields, String> = MessageTypeRouter::new("quick-start");
//!
//! router
//!     .register(
//!         Some("ORU"),
//!         Some("R01"),
//!         Some("FORMENTRY"),
//!         None,
//!         Arc::new(handlers::Labelled("formentry")),
//!     )
//!     .await
//!     .unwrap();
//! router
//!     .register(Some("ORU"), Some("R01"), None, None, Arc::new(handlers::Labelled("generic")))
//!     .await
//!     .unwrap();
//!
//! let message = HeaderFields::new("ORU", "R01", "FORMENTRY", "CTRL1");
//! assert!(router.can_process(&message).await);
//! assert_eq!(router.process_message(message).await.unwrap(), "formentry");
//! # });
//! ```
//!
//! ## Routing contract
//!
//! - Patterns are regular expressions matched against the whole field value.
//! - An absent pattern is the empty pattern: it matches an empty field and nothing else. It is
//!   not a wildcard; use `".*"` for that.
//! - A rule scores the length of its contiguous matching prefix in field order. A rule whose
//!   message type does not match scores zero, whatever its other patterns say.
//! - The highest score wins. Ties go to the rule registered first, and re-registering a rule
//!   keeps its original position. A rule matching all four fields ends the scan.
//! - No match, an unreadable field, or a failing handler is an error from
//!   [`MessageTypeRouter::process_message`] and `false` from
//!   [`MessageTypeRouter::can_process`].
//!
//! ```
//! use std::sync::Arc;
//! use message_router::{HandlerError, MessageFields, MessageHandler, MessageTypeRouter, RoutingError};
//!
//! # struct Unreachable;
//! #
//! # #[async_trait::async_trait]
//! # impl MessageHandler<MessageFields, ()> for Unreachable {
//! #     async fn process_message(&self, _message: MessageFields) -> Result<(), HandlerError> {
//! #         unreachable!("no message should route here")
//! #     }
//! # }
//! #
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let router: MessageTypeRouter<MessageFields, ()> = MessageTypeRouter::new("contract");
//! router
//!     .register(Some("ORU"), Some("R01"), None, None, Arc::new(Unreachable))
//!     .await
//!     .unwrap();
//!
//! // Nothing registered for ADT: the message type scores zero against the ORU rule.
//! let adt = MessageFields::new("ADT", "A01", "", "");
//! assert!(!router.can_process(&adt).await);
//! assert!(matches!(
//!     router.process_message(adt).await,
//!     Err(RoutingError::NoMatch { .. })
//! ));
//! # });
//! ```
//!
//! ## Internal architecture map
//!
//! - API facade: outward `MessageTypeRouter` surface
//! - Control plane: rule registration and routing-table ownership
//! - Routing: field patterns, specificity scoring and most-specific selection
//! - Registry: instance-owned strategy lookup by kind tag
//!
//! ## Observability model
//!
//! The workspace uses `tracing` for logs/events.
//! Library code emits events/spans and does not unconditionally initialize a global
//! subscriber. Binaries and tests are responsible for one-time
//! `tracing_subscriber` initialization at process boundaries.

mod control_plane;
pub use control_plane::routing_key::RoutingKey;

mod error;
pub use error::{RegistrationError, RoutingError};

mod handler;
pub use handler::{HandlerError, MessageHandler};

mod message;
pub use message::{
    ClassificationField, FieldExtractionError, HeaderFields, MessageFields, RoutableMessage,
};

#[doc(hidden)]
pub mod benchmark_support;
#[doc(hidden)]
pub mod observability;

mod registry;
pub use registry::{RegistryError, StrategyRegistry};

mod routing;
pub use routing::specificity::Specificity;

mod router;
pub use router::MessageTypeRouter;
