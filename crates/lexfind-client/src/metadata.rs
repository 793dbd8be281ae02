//! Client for the source-metadata service.

use lexfind_core::SourceRef;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::info;

use crate::ClientError;

/// Display metadata for a cited source document.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceMeta {
    pub url: String,
    pub summary: String,
}

/// Client for the metadata service's `/documents/{id}` endpoint.
///
/// The service fronts the documents warehouse; lookups key on the
/// canonical document id from [`SourceRef`].
pub struct MetadataClient {
    client: reqwest::Client,
    base_url: String,
}

impl MetadataClient {
    /// Create a client for the given metadata service base URL (no
    /// trailing slash).
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Look up display metadata for a source. Returns `None` when the
    /// service has no row for the document id; the caller substitutes
    /// placeholders.
    pub async fn lookup(&self, source: &SourceRef) -> Result<Option<SourceMeta>, ClientError> {
        let url = format!("{}/documents/{}", self.base_url, source.document_id);

        info!(url = %url, "looking up source metadata");
        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            info!(document_id = %source.document_id, "no metadata for source");
            return Ok(None);
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let meta: SourceMeta = resp.json().await?;
        Ok(Some(meta))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_meta_json_parse() {
        let json = r#"{
            "url": "https://www.agenziaentrate.gov.it/circolari/2024/12",
            "summary": "Chiarimenti in materia di IVA."
        }"#;
        let parsed: SourceMeta = serde_json::from_str(json).unwrap();
        assert_eq!(
            parsed.url,
            "https://www.agenziaentrate.gov.it/circolari/2024/12"
        );
        assert_eq!(parsed.summary, "Chiarimenti in materia di IVA.");
    }

    #[test]
    fn metadata_client_trims_trailing_slash() {
        let client = MetadataClient::new("http://localhost:8080/".into());
        assert_eq!(client.base_url, "http://localhost:8080");
    }
}
