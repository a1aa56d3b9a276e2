//! Control-plane layer.
//!
//! Owns rule registration and the routing-table identity model: how a rule is keyed, when a
//! registration overwrites an earlier one, and the insertion order the matching scan walks.
//!
//! ```
//! use std::sync::Arc;
//! use async_trait::async_trait;
//! use message_router::{HandlerError, HeaderFields, MessageHandler, MessageTypeRouter};
//!
//! # struct Noop;
//! #
//! # #[async_trait]
//! # impl MessageHandler<HeaderFields, ()> for Noop {
//! #     async fn process_message(&self, _message: HeaderFields) -> Result<(), HandlerError> {
//! #         Ok(())
//! #     }
//! # }
//! #
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let router: MessageTypeRouter<HeaderFields, ()> = MessageTypeRouter::new("control-plane-doc");
//!
//! // Registering the same rule twice overwrites it instead of failing.
//! router
//!     .register(Some("ORU"), Some("R01"), None, None, Arc::new(Noop))
//!     .await
//!     .unwrap();
//! router
//!     .register(Some("ORU"), Some("R01"), None, None, Arc::new(Noop))
//!     .await
//!     .unwrap();
//! assert_eq!(router.rule_count().await, 1);
//! # });
//! ```

pub(crate) mod route_table;
pub(crate) mod routing_key;
