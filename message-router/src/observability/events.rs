//! Canonical structured event names used across `message-router`.

// Rule registration events.
pub const ROUTER_CREATED: &str = "router_created";
pub const RULE_REGISTER_OK: &str = "rule_register_ok";
pub const RULE_REGISTER_OVERWRITE: &str = "rule_register_overwrite";
pub const RULE_REGISTER_FAILED: &str = "rule_register_failed";

// Matching events.
pub const ROUTE_MATCH_OK: &str = "route_match_ok";
pub const ROUTE_MATCH_NONE: &str = "route_match_none";
pub const ROUTE_FIELDS_UNAVAILABLE: &str = "route_fields_unavailable";
pub const CAN_PROCESS_REJECTED: &str = "can_process_rejected";

// Dispatch events.
pub const DISPATCH_START: &str = "dispatch_start";
pub const DISPATCH_OK: &str = "dispatch_ok";
pub const DISPATCH_FAILED: &str = "dispatch_failed";

// Strategy registry lifecycle events.
pub const STRATEGY_REGISTER_OK: &str = "strategy_register_ok";
pub const STRATEGY_REGISTER_REPLACED: &str = "strategy_register_replaced";
pub const STRATEGY_REMOVE: &str = "strategy_remove";
pub const STRATEGY_LOOKUP_MISSING: &str = "strategy_lookup_missing";
pub const STRATEGY_CLEAR: &str = "strategy_clear";
