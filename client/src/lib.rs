mod pb {
    include!("pb/mod.rs");
}

use pb::contextengine::v1::context_engine_client::ContextEngineClient;
use pb::contextengine::v1::ProcessTextRequest;

use anyhow::Result;
use tonic::transport::{Channel, Uri};

/// Caller-side handle for the `ContextEngine` service.
///
/// Cheap to clone; clones share the underlying channel, so concurrent calls
/// go through independent clones.
#[derive(Clone)]
pub struct Client {
    stub: ContextEngineClient<Channel>,
}

impl Client {
    pub async fn new(uri: Uri) -> Result<Self> {
        let channel = Channel::builder(uri).connect().await?;

        Ok(Self {
            stub: ContextEngineClient::new(channel),
        })
    }

    /// Sends `text` through `ProcessText` and returns the processed text.
    pub async fn process_text(&mut self, text: impl Into<String>) -> Result<String> {
        let request = ProcessTextRequest { text: text.into() };
        let response = self.stub.process_text(request).await?;

        Ok(response.into_inner().processed_text)
    }
}
