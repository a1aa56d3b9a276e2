/********************************************************************************
 * Copyright (c) 2025 Contributors to the Eclipse Foundation
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

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub(crate) router_config: RouterConfig,
    #[serde(default)]
    pub(crate) rules: Vec<RuleConfig>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct RouterConfig {
    pub(crate) name: String,
}

/// One routing rule. An omitted pattern only matches an empty field.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct RuleConfig {
    #[serde(default)]
    pub(crate) message_type: Option<String>,
    #[serde(default)]
    pub(crate) trigger_event: Option<String>,
    #[serde(default)]
    pub(crate) sending_application: Option<String>,
    #[serde(default)]
    pub(crate) message_control_id: Option<String>,
    pub(crate) handler: HandlerKind,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, Eq, Hash, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum HandlerKind {
    Acknowledge,
    Reject,
    Log,
}

impl HandlerKind {
    pub(crate) const ALL: [HandlerKind; 3] =
        [HandlerKind::Acknowledge, HandlerKind::Reject, HandlerKind::Log];
}

impl Display for HandlerKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            HandlerKind::Acknowledge => "acknowledge",
            HandlerKind::Reject => "reject",
            HandlerKind::Log => "log",
        };
        f.write_str(name)
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Unable to read config file {path}: {e}"))?;
        let config = json5::from_str(&contents)
            .map_err(|e| format!("Unable to parse config file {path}: {e}"))?;
        Ok(config)
    }
}
