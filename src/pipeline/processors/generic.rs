use async_trait::async_trait;
use tracing::info;

use crate::data_model::FetchedDocument;
use crate::error::Result;
use crate::pipeline::processors::TypeProcessor;

/// Fallback handler for unrecognized type tags. Accepts any content.
#[derive(Default)]
pub struct GenericProcessor;

impl GenericProcessor {
    pub fn new() -> Self {
        GenericProcessor
    }
}

#[async_trait]
impl TypeProcessor for GenericProcessor {
    fn name(&self) -> &'static str {
        "GenericProcessor"
    }

    async fn process(&self, document: &FetchedDocument, user_id: i64) -> Result<()> {
        info!(
            user_id,
            type_tag = %document.type_tag,
            size_bytes = document.size_bytes,
            "Generic document recorded"
        );
        Ok(())
    }
}
