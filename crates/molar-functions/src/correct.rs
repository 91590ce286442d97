//! `correct-transcript` function call.

use serde::{Deserialize, Serialize};

use crate::{FunctionError, FunctionsClient, http::decode_json};

#[derive(Serialize)]
struct CorrectRequest<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CorrectResponse {
    #[serde(default)]
    corrected_text: Option<String>,
}

impl FunctionsClient {
    /// Ask the correction function to clean up `text`.
    ///
    /// Returns the corrected text as sent back, which may be empty.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionError`] if the request fails, the function returns a
    /// non-success status, or the body is not `{ correctedText }`.
    pub async fn correct_transcript(&self, text: &str) -> Result<String, FunctionError> {
        let resp = self
            .invoke(&self.correct_url, &CorrectRequest { text })
            .await?;
        let data: CorrectResponse = decode_json(resp).await?;
        Ok(data.corrected_text.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_shape() {
        let json = serde_json::to_value(CorrectRequest { text: "did an exo" }).unwrap();
        assert_eq!(json, serde_json::json!({ "text": "did an exo" }));
    }

    #[test]
    fn parses_corrected_text() {
        let data: CorrectResponse =
            serde_json::from_str(r#"{"correctedText":"Did an extraction with Dr. Lee"}"#)
                .unwrap();
        assert_eq!(
            data.corrected_text.as_deref(),
            Some("Did an extraction with Dr. Lee")
        );
    }

    #[test]
    fn missing_field_is_none() {
        let data: CorrectResponse = serde_json::from_str(r#"{"error":"quota"}"#).unwrap();
        assert!(data.corrected_text.is_none());
    }

    #[tokio::test]
    #[ignore] // requires network and MOLAR_FUNCTIONS__* credentials
    async fn live_correct_transcript() {
        let config = molar_config::MolarConfig::load_with_dotenv().unwrap();
        let client = FunctionsClient::new(&config.functions).unwrap();
        let corrected = client
            .correct_transcript("um did a root canal with doctor khan")
            .await
            .unwrap();
        println!("corrected: {corrected}");
    }
}
