use common_libs::error::{FormError, FormErrorKind, FormResult};
use common_libs::utils::{from_binary, is_truthy, js_display};
use serde_json::Value;

use crate::constants::MISSING_FIELD;
use crate::model::{
    LegacyResponse, RenderedOutput, RenderedPanel, SchemaVersion, ServiceAnswer,
    SimilarityResponse,
};
use crate::view::FormBinding;

const SIMILARITY_LABELS: [&str; 6] = [
    "Most similar word",
    "Similarity score",
    "Origin language",
    "Noun meaning",
    "Adjective meaning",
    "Verb meaning",
];

fn field(value: &Option<Value>) -> String {
    match value {
        Some(v) => js_display(v),
        None => MISSING_FIELD.to_string(),
    }
}

fn application_error(error: &Option<Value>) -> Option<FormError> {
    match error {
        Some(v) if is_truthy(v) => Some(FormError::throw(&js_display(v), FormErrorKind::Application)),
        _ => None,
    }
}

fn texts(schema: SchemaVersion, body: Vec<u8>) -> FormResult<Vec<String>> {
    match schema {
        SchemaVersion::Legacy => {
            let response: LegacyResponse = from_binary(body)?;
            if let Some(err) = application_error(&response.error) {
                return Err(err);
            }
            Ok(vec![field(&response.word), field(&response.etymology)])
        }
        SchemaVersion::Similarity => {
            let response: SimilarityResponse = from_binary(body)?;
            if let Some(err) = application_error(&response.error) {
                return Err(err);
            }
            let values = [
                &response.most_similar_word,
                &response.similarity_score,
                &response.origin_language,
                &response.noun_meaning,
                &response.adj_meaning,
                &response.verb_meaning,
            ];
            Ok(SIMILARITY_LABELS
                .iter()
                .zip(values)
                .map(|(label, value)| format!("{}: {}", label, field(value)))
                .collect())
        }
        SchemaVersion::Undefined => Err(FormError::throw(
            "schema.undefined",
            FormErrorKind::InvalidData,
        )),
    }
}

/// A non 2xx answer is never rendered. Its body still wins when it carries a
/// truthy `error`; otherwise the status is reported.
fn failed_status(answer: &ServiceAnswer) -> FormError {
    let error = serde_json::from_slice::<Value>(&answer.body)
        .ok()
        .and_then(|body| body.get("error").cloned());
    match application_error(&error) {
        Some(err) => err,
        None => {
            let msg = format!("nok.status.code: {}", answer.status);
            FormError::throw(&msg, FormErrorKind::Transport)
        }
    }
}

/// Turns an answer into the text writes for `binding`'s outputs.
pub fn render(
    word: &str,
    schema: SchemaVersion,
    binding: &FormBinding,
    answer: ServiceAnswer,
) -> FormResult<RenderedPanel> {
    if !answer.is_success() {
        return Err(failed_status(&answer));
    }
    let texts = texts(schema, answer.body)?;
    if texts.len() != binding.outputs.len() {
        let msg = format!(
            "binding.mismatch: {} outputs bound, {} rendered",
            binding.outputs.len(),
            texts.len()
        );
        return Err(FormError::throw(&msg, FormErrorKind::InvalidData));
    }

    let outputs = binding
        .outputs
        .iter()
        .zip(texts)
        .map(|(element, text)| RenderedOutput {
            element: element.as_str().to_string(),
            text,
        })
        .collect();
    Ok(RenderedPanel {
        word: word.to_string(),
        schema,
        outputs,
    })
}
