use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::text::NormalizedText;

/// Content hash of the normalized text an analysis was computed over.
///
/// Two inputs that normalize to the same letters share a digest, so
/// `"Hello, World!"` and `"helloworld"` identify the same ciphertext.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TextDigest(String);

impl TextDigest {
    pub fn from_text(text: &NormalizedText) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(text.as_str().as_bytes());

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        TextDigest(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
