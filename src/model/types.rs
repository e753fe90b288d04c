use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaInput {
    pub question: String,
    pub context: String,
}

/// A single extractive answer. The provider may leave out any field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QaOutput {
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub start: Option<usize>,
    #[serde(default)]
    pub end: Option<usize>,
}

impl QaInput {
    pub fn new(question: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            context: context.into(),
        }
    }
}

impl QaOutput {
    pub fn with_answer(answer: impl Into<String>) -> Self {
        Self {
            answer: Some(answer.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct InferenceRequest<'a> {
    pub inputs: &'a QaInput,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum InferenceResponse {
    Error { error: String },
    Batch(Vec<QaOutput>),
    Single(QaOutput),
}
