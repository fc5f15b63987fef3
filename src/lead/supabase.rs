use gloo_net::http::Request;

use crate::config;
use crate::lead::controller::{LeadRecord, LeadSink};

/// Thin client for the hosted table API. One operation: insert a row.
pub struct SupabaseClient {
    url: &'static str,
    anon_key: &'static str,
}

impl SupabaseClient {
    /// `None` when the build carries no endpoint/key pair; the controller
    /// then fails fast instead of attempting the request.
    pub fn from_config() -> Option<Self> {
        config::supabase().map(|cfg| Self {
            url: cfg.url,
            anon_key: cfg.anon_key,
        })
    }
}

impl LeadSink for SupabaseClient {
    async fn insert(&self, table: &str, record: &LeadRecord) -> Result<(), String> {
        let endpoint = format!("{}/rest/v1/{}", self.url.trim_end_matches('/'), table);
        let response = Request::post(&endpoint)
            .header("apikey", self.anon_key)
            .header("Authorization", &format!("Bearer {}", self.anon_key))
            .header("Content-Type", "application/json")
            .header("Prefer", "return=minimal")
            .json(record)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if response.ok() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(format!("insert returned {}: {}", response.status(), body))
        }
    }
}
