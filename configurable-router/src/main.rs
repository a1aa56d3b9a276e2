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

mod config;
mod handlers;
mod input;

use crate::config::{Config, HandlerKind};
use crate::handlers::{builtin_handlers, HeaderHandler};
use crate::input::parse_header_line;
use clap::Parser;
use message_router::{HeaderFields, MessageTypeRouter, StrategyRegistry};
use std::error::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{info, warn};

#[derive(Parser)]
#[command()]
struct RouterArgs {
    #[arg(short, long, value_name = "FILE")]
    config: String,
    /// Header lines to route; stdin when omitted.
    #[arg(short, long, value_name = "FILE")]
    input: Option<String>,
}

type HeaderRouter = MessageTypeRouter<HeaderFields, String>;

async fn build_router(
    config: &Config,
    handlers: &StrategyRegistry<HandlerKind, HeaderHandler>,
) -> Result<HeaderRouter, Box<dyn Error>> {
    let router = MessageTypeRouter::new(&config.router_config.name);

    for rule in &config.rules {
        let handler = handlers.get(&rule.handler)?;
        router
            .register(
                rule.message_type.as_deref(),
                rule.trigger_event.as_deref(),
                rule.sending_application.as_deref(),
                rule.message_control_id.as_deref(),
                handler,
            )
            .await?;
    }

    Ok(router)
}

async fn route_lines<I, O>(
    router: &HeaderRouter,
    input: I,
    output: &mut O,
) -> Result<(), Box<dyn Error>>
where
    I: AsyncBufRead + Unpin,
    O: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    let mut line_number = 0usize;

    while let Some(line) = lines.next_line().await? {
        line_number += 1;
        let header = match parse_header_line(&line) {
            Ok(Some(header)) => header,
            Ok(None) => continue,
            Err(e) => {
                warn!("skipping input line {line_number}: {e}");
                output
                    .write_all(format!("{line_number}: ERROR {e}\n").as_bytes())
                    .await?;
                continue;
            }
        };

        let outcome = match router.process_message(header).await {
            Ok(response) => format!("{line_number}: {response}\n"),
            Err(e) => format!("{line_number}: ERROR {e}\n"),
        };
        output.write_all(outcome.as_bytes()).await?;
    }

    output.flush().await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let _ = tracing_subscriber::fmt::try_init();

    info!("Started configurable-router");

    let args = RouterArgs::parse();
    let config = Config::load(&args.config)?;

    let mut handlers = builtin_handlers();
    let router = build_router(&config, &handlers).await?;
    info!(
        "Router {} loaded {} rules",
        router.name(),
        router.rule_count().await
    );

    let mut stdout = tokio::io::stdout();
    match args.input {
        Some(path) => {
            let file = tokio::fs::File::open(&path)
                .await
                .map_err(|e| format!("Unable to open input file {path}: {e}"))?;
            route_lines(&router, BufReader::new(file), &mut stdout).await?;
        }
        None => route_lines(&router, BufReader::new(tokio::io::stdin()), &mut stdout).await?,
    }

    handlers.clear();
    Ok(())
}
