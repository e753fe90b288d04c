use async_trait::async_trait;
use qa_service::{
    Error, Result,
    model::{QaInput, QaModel, QaOutput},
};
use std::sync::{Arc, Mutex};

/// Mock QA model for testing
#[derive(Debug, Default)]
pub struct MockQaModel {
    pub output: QaOutput,
    pub requests: Arc<Mutex<Vec<QaInput>>>,
    pub error: Option<String>,
}

impl MockQaModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_answer(mut self, answer: &str) -> Self {
        self.output = QaOutput::with_answer(answer);
        self
    }

    pub fn with_output(mut self, output: QaOutput) -> Self {
        self.output = output;
        self
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn get_requests(&self) -> Vec<QaInput> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl QaModel for MockQaModel {
    async fn answer(&self, input: QaInput) -> Result<QaOutput> {
        self.requests.lock().unwrap().push(input);

        if let Some(ref error) = self.error {
            return Err(Error::inference(error.clone()));
        }

        Ok(self.output.clone())
    }
}

/// Naive extractive model that answers with the first capitalized context word.
#[derive(Debug, Default)]
pub struct FirstCapitalizedWordModel;

#[async_trait]
impl QaModel for FirstCapitalizedWordModel {
    async fn answer(&self, input: QaInput) -> Result<QaOutput> {
        let answer = input
            .context
            .split_whitespace()
            .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
            .find(|word| word.chars().next().is_some_and(char::is_uppercase));

        Ok(QaOutput {
            answer: answer.map(str::to_string),
            ..QaOutput::default()
        })
    }
}
