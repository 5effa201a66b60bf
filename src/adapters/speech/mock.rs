//! Mock speech synthesizer for testing.

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream;
use std::sync::{Arc, Mutex, PoisonError};

use crate::ports::{AudioStream, SpeechError, SpeechRequest, SpeechSynthesizer};

/// Returns fixed audio chunks, or a configured error, and records requests.
#[derive(Debug, Clone, Default)]
pub struct MockSpeechSynthesizer {
    chunks: Vec<Bytes>,
    error: Option<SpeechError>,
    requests: Arc<Mutex<Vec<SpeechRequest>>>,
}

impl MockSpeechSynthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Audio returned by every call, split into the given chunks.
    pub fn with_chunks<I, B>(mut self, chunks: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<Bytes>,
    {
        self.chunks = chunks.into_iter().map(Into::into).collect();
        self
    }

    /// Every call fails with this error.
    pub fn with_error(mut self, error: SpeechError) -> Self {
        self.error = Some(error);
        self
    }

    pub fn requests(&self) -> Vec<SpeechRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl SpeechSynthesizer for MockSpeechSynthesizer {
    async fn synthesize(&self, request: SpeechRequest) -> Result<AudioStream, SpeechError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);

        if let Some(err) = &self.error {
            return Err(err.clone());
        }

        let chunks: Vec<Result<Bytes, SpeechError>> =
            self.chunks.iter().cloned().map(Ok).collect();
        Ok(Box::pin(stream::iter(chunks)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::VoiceSettings;
    use futures::StreamExt;

    #[tokio::test]
    async fn streams_configured_chunks() {
        let synth = MockSpeechSynthesizer::new().with_chunks(vec![&b"ID3"[..], &b"data"[..]]);
        let request = SpeechRequest::new("Hi", VoiceSettings::default()).unwrap();

        let chunks: Vec<_> = synth.synthesize(request).await.unwrap().collect().await;

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].as_ref().unwrap(), &Bytes::from_static(b"ID3"));
        assert_eq!(synth.requests()[0].text, "Hi");
    }

    #[tokio::test]
    async fn returns_configured_error() {
        let synth = MockSpeechSynthesizer::new().with_error(SpeechError::provider(401, "bad key"));
        let request = SpeechRequest::new("Hi", VoiceSettings::default()).unwrap();

        let result = synth.synthesize(request).await;

        assert!(matches!(result, Err(SpeechError::Provider { status: 401, .. })));
    }
}
