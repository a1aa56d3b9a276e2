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

mod support;

use integration_test_utils::{
    header, header_without_control_id, oru_r01_formentry, oru_r01_without_application,
    FailingHandler, RecordingHandler,
};
use message_router::{MessageFields, RoutingError, RoutingKey, Specificity};
use std::error::Error;

#[tokio::test(flavor = "multi_thread")]
async fn re_registering_a_rule_overwrites_without_failing() {
    integration_test_utils::init_logging();

    let router = support::make_router("re-register");
    let first = RecordingHandler::new("first");
    let second = RecordingHandler::new("second");

    support::assert_register_ok(&router, [Some("ORU"), Some("R01"), None, None], first.clone())
        .await;
    support::assert_register_ok(&router, [Some("ORU"), Some("R01"), None, None], second.clone())
        .await;

    assert_eq!(router.rule_count().await, 1);
    assert_eq!(
        router
            .process_message(oru_r01_without_application("CTRL1"))
            .await
            .expect("message should route"),
        "second:CTRL1"
    );
    assert_eq!(first.processed_count().await, 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn sending_application_rule_beats_generic_rule() {
    integration_test_utils::init_logging();

    let router = support::make_router("prefix-specificity");
    let formentry = RecordingHandler::new("formentry");
    let generic = RecordingHandler::new("generic");

    support::assert_register_ok(
        &router,
        [Some("ORU"), Some("R01"), Some("FORMENTRY"), None],
        formentry.clone(),
    )
    .await;
    support::assert_register_ok(&router, [Some("ORU"), Some("R01"), None, None], generic.clone())
        .await;

    let response = router
        .process_message(oru_r01_formentry("CTRL1"))
        .await
        .expect("message should route");

    assert_eq!(response, "formentry:CTRL1");
    assert_eq!(formentry.processed().await, vec![oru_r01_formentry("CTRL1")]);
    assert_eq!(generic.processed_count().await, 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn registration_order_does_not_change_most_specific_choice() {
    integration_test_utils::init_logging();

    let router = support::make_router("prefix-specificity-reversed");
    let formentry = RecordingHandler::new("formentry");
    let generic = RecordingHandler::new("generic");

    support::assert_register_ok(&router, [Some("ORU"), Some("R01"), None, None], generic.clone())
        .await;
    support::assert_register_ok(
        &router,
        [Some("ORU"), Some("R01"), Some("FORMENTRY"), None],
        formentry.clone(),
    )
    .await;

    assert_eq!(
        router
            .process_message(oru_r01_formentry("X"))
            .await
            .expect("message should route"),
        "formentry:X"
    );
    assert_eq!(generic.processed_count().await, 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn unknown_message_type_is_not_routed() {
    integration_test_utils::init_logging();

    let router = support::make_router("no-match");
    let admission = RecordingHandler::new("admission");
    support::assert_register_ok(&router, [Some("ADT"), Some("A01"), None, None], admission.clone())
        .await;

    let message = oru_r01_formentry("CTRL1");
    assert!(!router.can_process(&message).await);

    let error = router
        .process_message(message)
        .await
        .expect_err("ORU must not route to the ADT rule");
    match error {
        RoutingError::NoMatch { fields } => {
            assert_eq!(fields, MessageFields::new("ORU", "R01", "FORMENTRY", "CTRL1"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(admission.processed_count().await, 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn full_match_is_selected_over_partial_matches() {
    integration_test_utils::init_logging();

    let router = support::make_router("full-match");
    let partial = RecordingHandler::new("partial");
    let full = RecordingHandler::new("full");
    let shadowed = RecordingHandler::new("shadowed");

    support::assert_register_ok(
        &router,
        [Some("ORU"), Some("R01"), Some("FORMENTRY"), None],
        partial.clone(),
    )
    .await;
    support::assert_register_ok(
        &router,
        [Some("ORU"), Some("R01"), Some("FORMENTRY"), Some("CTRL[0-9]+")],
        full.clone(),
    )
    .await;
    support::assert_register_ok(
        &router,
        [Some("ORU"), Some("R0."), Some("FORM.*"), Some("CTRL1")],
        shadowed.clone(),
    )
    .await;

    assert_eq!(
        router
            .process_message(oru_r01_formentry("CTRL1"))
            .await
            .expect("message should route"),
        "full:CTRL1"
    );
    assert_eq!(partial.processed_count().await, 0);
    assert_eq!(shadowed.processed_count().await, 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn type_pattern_is_a_regex_over_the_field() {
    integration_test_utils::init_logging();

    let router = support::make_router("regex-type");
    let observations = RecordingHandler::new("observations");
    support::assert_register_ok(&router, [Some("OR."), Some("R01"), None, None], observations)
        .await;

    assert!(router.can_process(&header("ORU", "R01", "", "")).await);
    assert!(router.can_process(&header("ORM", "R01", "", "")).await);
    assert!(!router.can_process(&header("ORUX", "R01", "", "")).await);
    assert!(!router.can_process(&header("ADT", "R01", "", "")).await);
}

#[test]
fn trigger_event_mismatch_stops_scoring() {
    let key = RoutingKey::new(Some("ADT"), Some("A01"), Some("X"), Some("Y"))
        .expect("key should compile");

    let specificity = key.specificity(&MessageFields::new("ADT", "A02", "X", "Y"));

    assert_eq!(specificity, Specificity::MessageType);
    assert_eq!(specificity.score(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn type_only_match_still_routes() {
    integration_test_utils::init_logging();

    let router = support::make_router("type-only");
    let admission = RecordingHandler::new("admission");
    support::assert_register_ok(&router, [Some("ADT"), Some("A01"), Some("X"), Some("Y")], admission)
        .await;

    assert_eq!(
        router
            .process_message(header("ADT", "A02", "X", "Y"))
            .await
            .expect("a type match is enough to route"),
        "admission:Y"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn absent_pattern_only_matches_empty_field() {
    integration_test_utils::init_logging();

    let router = support::make_router("absent-pattern");
    let bare = RecordingHandler::new("bare");
    support::assert_register_ok(&router, [Some("ORU"), Some("R01"), None, None], bare.clone())
        .await;

    let key = RoutingKey::new(Some("ORU"), Some("R01"), None, None).expect("key should compile");
    assert_eq!(
        key.specificity(&MessageFields::new("ORU", "R01", "FORMENTRY", "")),
        Specificity::TriggerEvent
    );
    assert_eq!(
        key.specificity(&MessageFields::new("ORU", "R01", "", "")),
        Specificity::Full
    );

    // With a single rule both still route; the application field only changes the score.
    assert!(router.can_process(&oru_r01_formentry("CTRL1")).await);
    assert!(router.can_process(&oru_r01_without_application("")).await);
}

#[tokio::test(flavor = "multi_thread")]
async fn ties_go_to_the_rule_registered_first() {
    integration_test_utils::init_logging();

    let router = support::make_router("tie-break");
    let earlier = RecordingHandler::new("earlier");
    let later = RecordingHandler::new("later");

    support::assert_register_ok(&router, [Some("ORU"), Some("R.."), None, None], earlier.clone())
        .await;
    support::assert_register_ok(&router, [Some("OR."), Some("R01"), None, None], later.clone())
        .await;

    for control_id in ["1", "2", "3"] {
        assert_eq!(
            router
                .process_message(oru_r01_formentry(control_id))
                .await
                .expect("message should route"),
            format!("earlier:{control_id}")
        );
    }
    assert_eq!(later.processed_count().await, 0);

    // Re-registering the earlier rule keeps its place at the front of the scan.
    let replacement = RecordingHandler::new("replacement");
    support::assert_register_ok(
        &router,
        [Some("ORU"), Some("R.."), None, None],
        replacement.clone(),
    )
    .await;
    assert_eq!(
        router
            .process_message(oru_r01_formentry("4"))
            .await
            .expect("message should route"),
        "replacement:4"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn handler_failure_is_surfaced_without_fallback() {
    integration_test_utils::init_logging();

    let router = support::make_router("handler-failure");
    let generic = RecordingHandler::new("generic");
    support::assert_register_ok(
        &router,
        [Some("ORU"), Some("R01"), Some("FORMENTRY"), None],
        FailingHandler::new("formentry", "concept 5497 not found"),
    )
    .await;
    support::assert_register_ok(&router, [Some("ORU"), Some("R01"), None, None], generic.clone())
        .await;

    let error = router
        .process_message(oru_r01_formentry("CTRL1"))
        .await
        .expect_err("handler failure should surface");

    match &error {
        RoutingError::Handler { rule, handler, .. } => {
            assert_eq!(rule, "ORU|R01|FORMENTRY|<empty>");
            assert_eq!(handler, "formentry");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(
        error
            .source()
            .expect("handler cause should be preserved")
            .to_string(),
        "concept 5497 not found"
    );
    assert_eq!(generic.processed_count().await, 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_field_fails_dispatch_and_probe() {
    integration_test_utils::init_logging();

    let router = support::make_router("missing-field");
    support::assert_register_ok(
        &router,
        [Some(".*"), Some(".*"), Some(".*"), Some(".*")],
        RecordingHandler::new("catch-all"),
    )
    .await;

    let message = header_without_control_id("ORU", "R01", "FORMENTRY");
    assert!(!router.can_process(&message).await);
    assert!(matches!(
        router.process_message(message).await,
        Err(RoutingError::FieldExtraction(_))
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn registered_rules_are_listed_in_scan_order() {
    integration_test_utils::init_logging();

    let router = support::make_router("introspection");
    let handler = RecordingHandler::new("handler");
    support::assert_register_ok(&router, [Some("ADT"), Some("A0[1-4]"), None, None], handler.clone())
        .await;
    support::assert_register_ok(&router, [Some("ORU"), Some("R01"), Some("LAB"), None], handler)
        .await;

    let rules: Vec<String> = router
        .registered_rules()
        .await
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        rules,
        vec![
            "ADT|A0[1-4]|<empty>|<empty>".to_string(),
            "ORU|R01|LAB|<empty>".to_string()
        ]
    );
}
