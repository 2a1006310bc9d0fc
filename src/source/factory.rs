use std::sync::Arc;

use super::cloudwatch::CloudWatchSource;
use super::config::{SourceConfig, SourceType};
use super::error::SourceResult;
use super::provider::SampleSource;

/// Factory for creating sample sources
pub struct SampleSourceFactory;

impl SampleSourceFactory {
    /// Create a sample source from a configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - The source configuration specifying the backend type and options
    ///
    /// # Returns
    ///
    /// A `Result` containing:
    /// * `Ok(Arc<dyn SampleSource>)` - A thread-safe reference to the initialized source
    /// * `Err(SourceError)` - If the source cannot be created
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// * A numeric option is malformed
    /// * The backend client cannot be initialized
    pub async fn from_config(config: SourceConfig) -> SourceResult<Arc<dyn SampleSource>> {
        match config.source_type {
            SourceType::CloudWatch => Ok(Arc::new(CloudWatchSource::new(config).await?)),
        }
    }
}
