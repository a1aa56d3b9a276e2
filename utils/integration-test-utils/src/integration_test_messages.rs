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

use message_router::HeaderFields;

pub fn header(
    message_type: &str,
    trigger_event: &str,
    sending_application: &str,
    message_control_id: &str,
) -> HeaderFields {
    HeaderFields::new(
        message_type,
        trigger_event,
        sending_application,
        message_control_id,
    )
}

/// Observation result sent by the form-entry application.
pub fn oru_r01_formentry(message_control_id: &str) -> HeaderFields {
    header("ORU", "R01", "FORMENTRY", message_control_id)
}

/// Observation result whose sending application field is present but empty.
pub fn oru_r01_without_application(message_control_id: &str) -> HeaderFields {
    header("ORU", "R01", "", message_control_id)
}

/// A header the parser could not fill in completely.
pub fn header_without_control_id(
    message_type: &str,
    trigger_event: &str,
    sending_application: &str,
) -> HeaderFields {
    HeaderFields {
        message_control_id: None,
        ..header(message_type, trigger_event, sending_application, "")
    }
}
