mod args;
mod terminal;

use std::io::{stdout, IsTerminal, Stdout};
use std::sync::Arc;

use clap::Parser;
use common_libs::{configure_log4rs, files::save};
use etymo_client::handler::FormSubmissionHandler;
use etymo_client::http_handler;
use etymo_client::model::RenderedPanel;
use etymo_client::transport::HttpTransport;
use etymo_client::view::FormBinding;
use log::{error, info};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::Mutex;

use args::Args;
use terminal::TerminalView;

type TerminalHandler = FormSubmissionHandler<HttpTransport, TerminalView<Stdout>>;

async fn submit(handler: &TerminalHandler, word: &str, panels: &mut Vec<RenderedPanel>) {
    let outcome = handler.submit_word(word).await;
    info!("[{}] => {:?}", word, outcome.state);
    if let Some(panel) = outcome.panel {
        panels.push(panel);
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let config = match args.client_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err.message);
            std::process::exit(2);
        }
    };
    if let Err(err) = configure_log4rs(&config.log_config) {
        eprintln!("{}", err.message);
    }
    info!("etymology service: {} ({} schema)", config.base_url, config.schema);

    let colours = stdout().is_terminal();
    let view = Arc::new(Mutex::new(TerminalView::new(
        FormBinding::for_schema(config.schema),
        stdout(),
        colours,
    )));
    let handler = match http_handler(&config, view) {
        Ok(handler) => handler,
        Err(err) => {
            eprintln!("{}", err.message);
            std::process::exit(2);
        }
    };

    let mut panels = Vec::new();
    if !args.words.is_empty() {
        for word in &args.words {
            submit(&handler, word, &mut panels).await;
        }
    } else {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => submit(&handler, &line, &mut panels).await,
                Ok(None) => break,
                Err(err) => {
                    error!("failed.reading.stdin: {}", err);
                    break;
                }
            }
        }
    }

    if let Some(output) = &args.output {
        match save(output, &panels) {
            Ok(()) => info!("{} panels saved to {}", panels.len(), output),
            Err(err) => {
                eprintln!("{}", err.message);
                std::process::exit(1);
            }
        }
    }
}
