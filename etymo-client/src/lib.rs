pub mod config;
pub mod constants;
pub mod handler;
pub mod model;
pub mod renderer;
pub mod transport;
pub mod validation;
pub mod view;

use std::sync::Arc;

use common_libs::error::FormResult;
use tokio::sync::Mutex;

use config::ClientConfig;
use handler::FormSubmissionHandler;
use transport::HttpTransport;
use view::{FormBinding, FormView};

/// Builds a handler that talks HTTP to the service named in `config`,
/// bound to the default element ids of the configured schema.
pub fn http_handler<V: FormView>(
    config: &ClientConfig,
    view: Arc<Mutex<V>>,
) -> FormResult<FormSubmissionHandler<HttpTransport, V>> {
    let transport = HttpTransport::new(&config.base_url, config.timeout())?;
    Ok(FormSubmissionHandler::new(
        transport,
        view,
        FormBinding::for_schema(config.schema),
        config.schema,
    ))
}
