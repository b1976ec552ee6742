//! Streaming explanation relay
//!
//! Given a location and an item category, builds a prompt from the disposal
//! reference data, opens a generation stream upstream and re-emits each
//! fragment as a [`RelayEvent`], ending with exactly one terminal event.
//!
//! Streaming is at-most-once: a failed upstream call is reported, not retried.

mod gemini;
mod generator;
mod prompt;
mod session;
mod sse_decoder;

pub use gemini::{GeminiClient, GEMINI_API_URL};
pub use generator::{FragmentStream, GenerationError, Generator, UnconfiguredGenerator};
pub use prompt::{ExplanationRequest, Prompt, ResolvedReference, DEFAULT_LANGUAGE};
pub use session::{RelayState, StreamSession};
pub use sse_decoder::SseDecoder;

use ewa_common::sse::RelayEvent;
use ewa_common::DisposalDirectory;
use futures::stream::{Stream, StreamExt};
use std::sync::Arc;

/// Run one relay session to completion as a stream of events
///
/// The upstream call starts when the stream is first polled. Dropping the
/// stream (client disconnect) drops the upstream call with it.
pub fn relay_stream(
    request: ExplanationRequest,
    directory: Arc<DisposalDirectory>,
    generator: Arc<dyn Generator>,
) -> impl Stream<Item = RelayEvent> + Send {
    async_stream::stream! {
        let reference = ResolvedReference::resolve(&request, &directory);
        let prompt = Prompt::build(&request, &reference);

        let mut session = StreamSession::new(request);
        session.begin();

        let mut fragments = match generator.generate(&prompt).await {
            Ok(fragments) => fragments,
            Err(e) => {
                if let Some(event) = session.on_failure(&e.to_string()) {
                    yield event;
                }
                return;
            }
        };

        loop {
            match fragments.next().await {
                Some(Ok(text)) => {
                    if let Some(event) = session.on_fragment(text) {
                        yield event;
                    }
                }
                Some(Err(e)) => {
                    if let Some(event) = session.on_failure(&e.to_string()) {
                        yield event;
                    }
                    break;
                }
                None => {
                    if let Some(event) = session.on_complete() {
                        yield event;
                    }
                    break;
                }
            }
        }
    }
}
