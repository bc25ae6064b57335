use crate::domain::AppError;
use crate::ports::{GenerationClient, GenerationRequest};
use std::sync::{Arc, Mutex};

/// Records every request and answers with a canned result.
#[derive(Clone)]
pub struct FakeGenerationClient {
    pub requests: Arc<Mutex<Vec<GenerationRequest>>>,
    pub response: Result<String, (String, Option<u16>)>,
}

impl FakeGenerationClient {
    pub fn new(response: impl Into<String>) -> Self {
        Self { requests: Arc::new(Mutex::new(vec![])), response: Ok(response.into()) }
    }

    pub fn failing(message: impl Into<String>, status: Option<u16>) -> Self {
        Self { requests: Arc::new(Mutex::new(vec![])), response: Err((message.into(), status)) }
    }

    pub fn get_requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl GenerationClient for FakeGenerationClient {
    fn generate(&self, request: &GenerationRequest) -> Result<String, AppError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.response {
            Ok(text) => Ok(text.clone()),
            Err((message, status)) => {
                Err(AppError::GeminiApiError { message: message.clone(), status: *status })
            }
        }
    }
}
