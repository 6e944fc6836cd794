use serde::{Deserialize, Serialize};

use crate::shared::artifact::ArtifactId;

/// JSON body posted by the decode page to its own path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodeRequest {
    pub save_path: ArtifactId,
}

impl DecodeRequest {
    pub fn new(save_path: ArtifactId) -> Self {
        Self { save_path }
    }
}
