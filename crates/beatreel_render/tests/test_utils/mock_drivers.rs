//! Mock rendering and stitching capabilities.

use async_trait::async_trait;
use beatreel_core::{RenderClip, RenderPrompt};
use beatreel_error::{RenderError, RenderErrorKind, StitchError, StitchErrorKind};
use beatreel_interface::{RenderDriver, StitchDriver};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// How the mock answers one call.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Succeed with a reference derived from the beat id
    Success,
    /// Succeed after sleeping
    Delayed(Duration),
    /// Fail with the given error
    Error(RenderErrorKind),
    /// Succeed with an empty reference
    EmptyUrl,
    /// Never answer
    Hang,
    /// Panic inside the render call
    Panic,
}

/// Mock render driver with per-beat behavior and call tracking.
pub struct MockRenderDriver {
    default: MockBehavior,
    per_beat: HashMap<String, MockBehavior>,
    call_count: Arc<Mutex<usize>>,
    prompts: Arc<Mutex<Vec<RenderPrompt>>>,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl MockRenderDriver {
    fn with_default(default: MockBehavior) -> Self {
        Self {
            default,
            per_beat: HashMap::new(),
            call_count: Arc::new(Mutex::new(0)),
            prompts: Arc::new(Mutex::new(Vec::new())),
            in_flight: AtomicUsize::new(0),
            peak_in_flight: AtomicUsize::new(0),
        }
    }

    /// Mock that renders every beat successfully.
    pub fn new_success() -> Self {
        Self::with_default(MockBehavior::Success)
    }

    /// Mock that fails every beat with the given error.
    pub fn new_error(error: RenderErrorKind) -> Self {
        Self::with_default(MockBehavior::Error(error))
    }

    /// Mock that sleeps before every successful render.
    pub fn new_delayed(delay: Duration) -> Self {
        Self::with_default(MockBehavior::Delayed(delay))
    }

    /// Override the behavior for one beat.
    pub fn with_beat(mut self, beat_id: &str, behavior: MockBehavior) -> Self {
        self.per_beat.insert(beat_id.to_string(), behavior);
        self
    }

    /// Number of render calls received.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().expect("call count lock")
    }

    /// Prompts received, in arrival order.
    pub fn prompts(&self) -> Vec<RenderPrompt> {
        self.prompts.lock().expect("prompts lock").clone()
    }

    /// Highest number of calls observed in flight at once.
    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }

    /// Reference the mock returns for a beat.
    pub fn url_for(beat_id: &str) -> String {
        format!("https://cdn.test/{beat_id}.mp4")
    }
}

struct InFlight<'a>(&'a AtomicUsize);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl RenderDriver for MockRenderDriver {
    async fn render(&self, prompt: &RenderPrompt) -> Result<RenderClip, RenderError> {
        *self.call_count.lock().expect("call count lock") += 1;
        self.prompts
            .lock()
            .expect("prompts lock")
            .push(prompt.clone());

        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(current, Ordering::SeqCst);
        let _guard = InFlight(&self.in_flight);

        let behavior = self
            .per_beat
            .get(prompt.beat_id())
            .unwrap_or(&self.default)
            .clone();
        let url = Self::url_for(prompt.beat_id());
        match behavior {
            MockBehavior::Success => {
                tokio::task::yield_now().await;
                Ok(RenderClip::new(url, None))
            }
            MockBehavior::Delayed(delay) => {
                tokio::time::sleep(delay).await;
                Ok(RenderClip::new(url, Some(format!("job-{}", prompt.beat_id()))))
            }
            MockBehavior::Error(kind) => Err(RenderError::new(kind)),
            MockBehavior::EmptyUrl => Ok(RenderClip::new("", None)),
            MockBehavior::Hang => {
                std::future::pending::<()>().await;
                unreachable!("pending never resolves")
            }
            MockBehavior::Panic => panic!("render driver exploded"),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

/// Mock stitch driver recording what it was asked to combine.
pub struct MockStitchDriver {
    error: Option<StitchErrorKind>,
    url: String,
    call_count: Arc<Mutex<usize>>,
    received: Arc<Mutex<Vec<Vec<String>>>>,
}

impl MockStitchDriver {
    /// Mock that returns `url` for every call.
    pub fn new_success(url: impl Into<String>) -> Self {
        Self {
            error: None,
            url: url.into(),
            call_count: Arc::new(Mutex::new(0)),
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Mock that fails every call.
    pub fn new_error(error: StitchErrorKind) -> Self {
        Self {
            error: Some(error),
            ..Self::new_success("")
        }
    }

    /// Number of stitch calls received.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().expect("call count lock")
    }

    /// Clip lists received, one per call.
    pub fn received(&self) -> Vec<Vec<String>> {
        self.received.lock().expect("received lock").clone()
    }
}

#[async_trait]
impl StitchDriver for MockStitchDriver {
    async fn stitch(&self, clips: &[String]) -> Result<String, StitchError> {
        *self.call_count.lock().expect("call count lock") += 1;
        self.received
            .lock()
            .expect("received lock")
            .push(clips.to_vec());
        match &self.error {
            Some(kind) => Err(StitchError::new(kind.clone())),
            None => Ok(self.url.clone()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}
