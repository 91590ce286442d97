//! # molar-functions
//!
//! HTTP client for the hosted serverless functions that wrap the language
//! model:
//! - `correct-transcript`: fixes disfluencies and misheard clinical terms
//! - `parse-procedure`: extracts department, task, and supervisor from a note
//!
//! Calls are single-shot. This crate never retries and never falls back; the
//! caller decides what a failure means.

pub mod correct;
pub mod extract;

mod error;
mod http;

pub use error::FunctionError;
pub use extract::RemoteFields;

use molar_config::FunctionsConfig;
use serde::Serialize;

/// HTTP client for invoking the hosted functions.
#[derive(Debug, Clone)]
pub struct FunctionsClient {
    http: reqwest::Client,
    anon_key: String,
    correct_url: String,
    extract_url: String,
}

impl FunctionsClient {
    /// Build a client from the `functions` config section.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionError::NotConfigured`] if the URL or key is missing,
    /// or [`FunctionError::Http`] if the underlying client fails to build.
    pub fn new(config: &FunctionsConfig) -> Result<Self, FunctionError> {
        if !config.is_configured() {
            return Err(FunctionError::NotConfigured(
                "set functions.url and functions.anon_key".to_string(),
            ));
        }
        let endpoint = |name: &str| {
            config
                .endpoint(name)
                .map_err(|e| FunctionError::NotConfigured(e.to_string()))
        };

        Ok(Self {
            http: reqwest::Client::builder()
                .user_agent("molar/0.1")
                .timeout(config.timeout())
                .build()?,
            anon_key: config.anon_key.clone(),
            correct_url: endpoint(&config.correct_function)?,
            extract_url: endpoint(&config.extract_function)?,
        })
    }

    /// POST a JSON body to a function endpoint with the project credentials.
    async fn invoke<B: Serialize + Sync>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<reqwest::Response, FunctionError> {
        tracing::debug!(%url, "invoking function");
        let resp = self
            .http
            .post(url)
            .bearer_auth(&self.anon_key)
            .header("apikey", &self.anon_key)
            .json(body)
            .send()
            .await?;
        http::check_response(resp).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> FunctionsConfig {
        FunctionsConfig {
            url: "https://clinic.supabase.co".into(),
            anon_key: "anon".into(),
            ..Default::default()
        }
    }

    #[test]
    fn unconfigured_client_is_rejected() {
        let err = FunctionsClient::new(&FunctionsConfig::default()).unwrap_err();
        assert!(matches!(err, FunctionError::NotConfigured(_)));
    }

    #[test]
    fn endpoints_follow_function_names() {
        let mut config = configured();
        config.extract_function = "extract-v2".into();
        let client = FunctionsClient::new(&config).unwrap();
        assert_eq!(
            client.correct_url,
            "https://clinic.supabase.co/functions/v1/correct-transcript"
        );
        assert_eq!(
            client.extract_url,
            "https://clinic.supabase.co/functions/v1/extract-v2"
        );
    }
}
