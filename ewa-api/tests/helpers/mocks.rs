//! Test doubles for the two external services
//!
//! Both count calls so tests can assert that nothing went upstream.

use async_trait::async_trait;
use ewa_api::classify::{ClassifyError, Classifier, ImageUpload};
use ewa_api::relay::{FragmentStream, GenerationError, Generator, Prompt};
use ewa_common::models::ClassificationResult;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// What the mock classifier answers
pub enum ClassifierOutcome {
    Success(ClassificationResult),
    Failure(fn() -> ClassifyError),
}

pub struct MockClassifier {
    calls: AtomicUsize,
    outcome: ClassifierOutcome,
    last_upload: Mutex<Option<ImageUpload>>,
}

impl MockClassifier {
    pub fn returning(class_id: u32, class_name: &str, confidence: f64) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            outcome: ClassifierOutcome::Success(ClassificationResult {
                class_id,
                class_name: class_name.to_string(),
                confidence,
            }),
            last_upload: Mutex::new(None),
        })
    }

    pub fn failing(error: fn() -> ClassifyError) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            outcome: ClassifierOutcome::Failure(error),
            last_upload: Mutex::new(None),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_upload(&self) -> Option<ImageUpload> {
        self.last_upload.lock().unwrap().clone()
    }
}

#[async_trait]
impl Classifier for MockClassifier {
    async fn classify(&self, upload: ImageUpload) -> Result<ClassificationResult, ClassifyError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_upload.lock().unwrap() = Some(upload);
        match &self.outcome {
            ClassifierOutcome::Success(result) => Ok(result.clone()),
            ClassifierOutcome::Failure(make_error) => Err(make_error()),
        }
    }
}

/// How the mock generator behaves
#[derive(Clone)]
pub enum GeneratorScript {
    /// Yield these fragments, then end normally
    Fragments(Vec<&'static str>),
    /// Yield these fragments, then a stream error
    FailAfter(Vec<&'static str>),
    /// Refuse to start
    FailToStart,
}

pub struct MockGenerator {
    calls: AtomicUsize,
    script: GeneratorScript,
    last_prompt: Mutex<Option<Prompt>>,
}

impl MockGenerator {
    pub fn new(script: GeneratorScript) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            script,
            last_prompt: Mutex::new(None),
        })
    }

    pub fn yielding(fragments: Vec<&'static str>) -> Arc<Self> {
        Self::new(GeneratorScript::Fragments(fragments))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<Prompt> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl Generator for MockGenerator {
    async fn generate(&self, prompt: &Prompt) -> Result<FragmentStream, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.clone());

        let items: Vec<Result<String, GenerationError>> = match &self.script {
            GeneratorScript::FailToStart => {
                return Err(GenerationError::Status {
                    status: 503,
                    body: "overloaded".to_string(),
                })
            }
            GeneratorScript::Fragments(fragments) => {
                fragments.iter().map(|f| Ok(f.to_string())).collect()
            }
            GeneratorScript::FailAfter(fragments) => fragments
                .iter()
                .map(|f| Ok(f.to_string()))
                .chain(std::iter::once(Err(GenerationError::Network(
                    "connection reset".to_string(),
                ))))
                .collect(),
        };

        Ok(Box::pin(futures::stream::iter(items)))
    }
}
