use std::sync::Arc;

use common_libs::error::{FormError, FormErrorKind};
use log::{debug, info, warn};
use serde::Serialize;
use tokio::sync::Mutex;

use crate::constants::{INVALID_RESPONSE_PREFIX, TRANSPORT_FAILURE_PREFIX};
use crate::model::{RenderedPanel, SchemaVersion, WordRequest};
use crate::renderer::render;
use crate::transport::EtymologyTransport;
use crate::validation::Word;
use crate::view::{FormBinding, FormView};

/// Where one submit cycle is, or where it ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HandlerState {
    Idle,
    Validating,
    Rejected,
    Requesting,
    ErrorShown,
    Rendered,
    Failed,
}

impl HandlerState {
    pub fn is_final(&self) -> bool {
        matches!(
            self,
            HandlerState::Rejected
                | HandlerState::ErrorShown
                | HandlerState::Rendered
                | HandlerState::Failed
        )
    }
}

/// Result of one submit: the final state plus what was rendered, if anything.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    pub state: HandlerState,
    pub panel: Option<RenderedPanel>,
    pub error: Option<FormError>,
}

impl SubmitOutcome {
    fn rendered(panel: RenderedPanel) -> Self {
        SubmitOutcome {
            state: HandlerState::Rendered,
            panel: Some(panel),
            error: None,
        }
    }

    fn failed(state: HandlerState, error: FormError) -> Self {
        SubmitOutcome {
            state,
            panel: None,
            error: Some(error),
        }
    }
}

fn state_for(error: &FormError) -> HandlerState {
    match error.error_kind {
        FormErrorKind::InvalidInput => HandlerState::Rejected,
        FormErrorKind::Application => HandlerState::ErrorShown,
        FormErrorKind::Transport | FormErrorKind::InvalidData => HandlerState::Failed,
    }
}

/// Text the user sees for an error. Validation and application messages are
/// shown verbatim, the rest get a prefix naming what failed.
pub fn alert_message(error: &FormError) -> String {
    match error.error_kind {
        FormErrorKind::InvalidInput | FormErrorKind::Application => error.message.clone(),
        FormErrorKind::Transport => format!("{}: {}", TRANSPORT_FAILURE_PREFIX, error.message),
        FormErrorKind::InvalidData => format!("{}: {}", INVALID_RESPONSE_PREFIX, error.message),
    }
}

/// Validates the bound input, posts it and renders the answer into the view.
///
/// Submissions are not serialised: the view is locked only while the input is
/// read and while results are written, so concurrent submits race and the
/// response that arrives last wins.
pub struct FormSubmissionHandler<T: EtymologyTransport, V: FormView> {
    transport: T,
    view: Arc<Mutex<V>>,
    binding: FormBinding,
    schema: SchemaVersion,
}

impl<T: EtymologyTransport, V: FormView> FormSubmissionHandler<T, V> {
    pub fn new(transport: T, view: Arc<Mutex<V>>, binding: FormBinding, schema: SchemaVersion) -> Self {
        FormSubmissionHandler {
            transport,
            view,
            binding,
            schema,
        }
    }

    pub fn view(&self) -> Arc<Mutex<V>> {
        Arc::clone(&self.view)
    }

    /// Types `word` into the bound input, then submits the form.
    pub async fn submit_word(&self, word: &str) -> SubmitOutcome {
        {
            let mut view = self.view.lock().await;
            view.set_input_value(&self.binding.input, word.to_string());
        }
        self.submit().await
    }

    /// One submit event.
    pub async fn submit(&self) -> SubmitOutcome {
        debug!("{} submitted, state: {:?}", self.binding.form, HandlerState::Validating);
        let input = {
            let view = self.view.lock().await;
            view.input_value(&self.binding.input)
        };

        let word = match Word::parse(&input) {
            Ok(word) => word,
            Err(err) => {
                warn!("rejected input {:?}", input);
                return self.fail(err).await;
            }
        };

        let request = WordRequest::new(&word);
        info!("requesting etymology for [{}] ({} schema)", word.as_str(), self.schema);
        debug!("state: {:?}", HandlerState::Requesting);
        let answer = match self.transport.post_word(&request).await {
            Ok(answer) => answer,
            Err(err) => {
                warn!("request for [{}] failed: {}", word.as_str(), err.message);
                return self.fail(err).await;
            }
        };

        let panel = match render(word.as_str(), self.schema, &self.binding, answer) {
            Ok(panel) => panel,
            Err(err) => {
                warn!("response for [{}] not rendered: {}", word.as_str(), err.message);
                return self.fail(err).await;
            }
        };

        {
            let mut view = self.view.lock().await;
            // render() yields one output per bound element, in binding order
            for (element, output) in self.binding.outputs.iter().zip(&panel.outputs) {
                view.set_text(element, output.text.clone());
            }
            view.show(&self.binding.panel);
        }
        info!("rendered [{}] into {}", word.as_str(), self.binding.panel);
        SubmitOutcome::rendered(panel)
    }

    async fn fail(&self, error: FormError) -> SubmitOutcome {
        let state = state_for(&error);
        {
            let mut view = self.view.lock().await;
            view.alert(alert_message(&error));
        }
        SubmitOutcome::failed(state, error)
    }
}
