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

mod integration_test_handlers;
pub use integration_test_handlers::{FailingHandler, GatedHandler, RecordingHandler};
mod integration_test_messages;
pub use integration_test_messages::{
    header, header_without_control_id, oru_r01_formentry, oru_r01_without_application,
};

/// Installs the fmt subscriber once per test binary. Later calls are no-ops.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}
