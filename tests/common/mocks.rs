use async_trait::async_trait;
use sketch2site::{
    Error, Result,
    genai::{GenerateRequest, GenerativeClient},
};
use std::sync::{Arc, Mutex};

/// Mock generation client for testing
#[derive(Debug)]
pub struct MockGenerativeClient {
    pub answers: Arc<Mutex<Vec<String>>>,
    pub requests: Arc<Mutex<Vec<GenerateRequest>>>,
    pub error: Option<String>,
}

impl MockGenerativeClient {
    pub fn new() -> Self {
        Self {
            answers: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_answer(self, answer: &str) -> Self {
        self.answers.lock().unwrap().push(answer.to_string());
        self
    }

    pub fn with_error(mut self, error: String) -> Self {
        self.error = Some(error);
        self
    }

    pub fn get_requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerativeClient for MockGenerativeClient {
    async fn generate(&self, request: GenerateRequest) -> Result<String> {
        self.requests.lock().unwrap().push(request);

        if let Some(ref error) = self.error {
            return Err(Error::api(503, error.clone()));
        }

        let mut answers = self.answers.lock().unwrap();
        if answers.is_empty() {
            return Err(Error::api(500, "No more mock answers available"));
        }

        Ok(answers.remove(0))
    }
}

impl Default for MockGenerativeClient {
    fn default() -> Self {
        Self::new()
    }
}
