use message_router::{HeaderFields, MessageHandler, MessageTypeRouter};
use std::sync::Arc;

pub(crate) type Router = MessageTypeRouter<HeaderFields, String>;

pub(crate) fn make_router(name: &str) -> Router {
    MessageTypeRouter::new(name)
}

pub(crate) async fn assert_register_ok(
    router: &Router,
    rule: [Option<&str>; 4],
    handler: Arc<dyn MessageHandler<HeaderFields, String>>,
) {
    let [message_type, trigger_event, sending_application, message_control_id] = rule;
    assert!(router
        .register(
            message_type,
            trigger_event,
            sending_application,
            message_control_id,
            handler,
        )
        .await
        .is_ok());
}
