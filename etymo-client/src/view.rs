use std::collections::{HashMap, HashSet};
use std::fmt::{Display, Formatter};

use common_libs::error::FmtResult;
use serde::{Deserialize, Serialize};

use crate::constants::{
    ETYMOLOGY_OUTPUT_ID, FORM_ID, INPUT_ID, PANEL_ID, SIMILARITY_OUTPUT_IDS, WORD_OUTPUT_ID,
};
use crate::model::SchemaVersion;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(String);

impl ElementId {
    pub fn new<S: AsRef<str>>(id: S) -> Self {
        ElementId(id.as_ref().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ElementId {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "#{}", self.0)
    }
}

/// The elements a handler reads from and writes to. The handler never looks
/// anything up by itself; whoever builds it hands these in.
#[derive(Debug, Clone, PartialEq)]
pub struct FormBinding {
    pub form: ElementId,
    pub input: ElementId,
    pub panel: ElementId,
    pub outputs: Vec<ElementId>,
}

impl FormBinding {
    pub fn similarity() -> Self {
        let mut outputs = vec![ElementId::new(WORD_OUTPUT_ID)];
        outputs.extend(SIMILARITY_OUTPUT_IDS.iter().map(ElementId::new));
        FormBinding {
            form: ElementId::new(FORM_ID),
            input: ElementId::new(INPUT_ID),
            panel: ElementId::new(PANEL_ID),
            outputs,
        }
    }

    pub fn legacy() -> Self {
        FormBinding {
            form: ElementId::new(FORM_ID),
            input: ElementId::new(INPUT_ID),
            panel: ElementId::new(PANEL_ID),
            outputs: vec![ElementId::new(WORD_OUTPUT_ID), ElementId::new(ETYMOLOGY_OUTPUT_ID)],
        }
    }

    pub fn for_schema(schema: SchemaVersion) -> Self {
        match schema {
            SchemaVersion::Legacy => FormBinding::legacy(),
            _ => FormBinding::similarity(),
        }
    }
}

/// What the handler needs from a page.
pub trait FormView {
    fn input_value(&self, input: &ElementId) -> String;
    fn set_input_value(&mut self, input: &ElementId, value: String);
    fn set_text(&mut self, element: &ElementId, text: String);
    fn show(&mut self, element: &ElementId);
    /// Blocking user notification, one per call.
    fn alert(&mut self, message: String);
}

/// A page held in memory. Every element starts empty and hidden.
#[derive(Debug, Clone, Default)]
pub struct MemoryView {
    values: HashMap<ElementId, String>,
    texts: HashMap<ElementId, String>,
    visible: HashSet<ElementId>,
    alerts: Vec<String>,
}

impl MemoryView {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn text(&self, element: &ElementId) -> Option<&str> {
        self.texts.get(element).map(String::as_str)
    }

    pub fn is_visible(&self, element: &ElementId) -> bool {
        self.visible.contains(element)
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }
}

impl FormView for MemoryView {
    fn input_value(&self, input: &ElementId) -> String {
        self.values.get(input).cloned().unwrap_or_default()
    }

    fn set_input_value(&mut self, input: &ElementId, value: String) {
        self.values.insert(input.clone(), value);
    }

    fn set_text(&mut self, element: &ElementId, text: String) {
        self.texts.insert(element.clone(), text);
    }

    fn show(&mut self, element: &ElementId) {
        self.visible.insert(element.clone());
    }

    fn alert(&mut self, message: String) {
        self.alerts.push(message);
    }
}
