//! Contact enrichment: one call to the people-data API per lookup,
//! by profile URL or by structured person parameters.

use axum::{extract::State, Json};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnrichQuery {
    pub profile_url: Option<String>,
    pub name: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub title: Option<String>,
    pub industry: Option<String>,
}

impl EnrichQuery {
    /// A lookup needs an anchor: either a profile URL or at least a name.
    pub fn is_resolvable(&self) -> bool {
        let has = |field: &Option<String>| {
            field.as_deref().map(str::trim).filter(|v| !v.is_empty()).is_some()
        };
        has(&self.profile_url) || has(&self.name)
    }
}

#[derive(Debug, Deserialize)]
struct EnrichApiResponse {
    work_email: Option<String>,
    #[serde(default)]
    personal_emails: Vec<String>,
    mobile_phone: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnrichedContact {
    pub work_email: Option<String>,
    pub personal_emails: Vec<String>,
    pub mobile_phone: Option<String>,
    /// Derived locally: true iff any contact field came back.
    pub has_contact_info: bool,
}

impl From<EnrichApiResponse> for EnrichedContact {
    fn from(response: EnrichApiResponse) -> Self {
        let has_contact_info = response.work_email.is_some()
            || !response.personal_emails.is_empty()
            || response.mobile_phone.is_some();
        EnrichedContact {
            work_email: response.work_email,
            personal_emails: response.personal_emails,
            mobile_phone: response.mobile_phone,
            has_contact_info,
        }
    }
}

#[derive(Clone)]
pub struct EnrichClient {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl EnrichClient {
    pub fn new(api_key: String, endpoint: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            endpoint,
        }
    }

    pub async fn lookup(&self, query: &EnrichQuery) -> Result<EnrichedContact, AppError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(query)
            .send()
            .await
            .map_err(|e| AppError::Enrich(format!("enrichment request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Enrich(format!(
                "enrichment API returned {status}: {body}"
            )));
        }

        let parsed: EnrichApiResponse = response
            .json()
            .await
            .map_err(|e| AppError::Enrich(format!("enrichment response parse failed: {e}")))?;

        Ok(EnrichedContact::from(parsed))
    }
}

/// POST /api/v1/enrich
pub async fn handle_enrich(
    State(state): State<AppState>,
    Json(query): Json<EnrichQuery>,
) -> Result<Json<EnrichedContact>, AppError> {
    if !query.is_resolvable() {
        return Err(AppError::Validation(
            "either profile_url or name is required".to_string(),
        ));
    }
    let contact = state.enrich.lookup(&query).await?;
    Ok(Json(contact))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_contact_info_false_when_everything_is_empty() {
        let contact = EnrichedContact::from(EnrichApiResponse {
            work_email: None,
            personal_emails: vec![],
            mobile_phone: None,
        });
        assert!(!contact.has_contact_info);
    }

    #[test]
    fn test_has_contact_info_true_for_any_single_field() {
        let by_work_email = EnrichedContact::from(EnrichApiResponse {
            work_email: Some("jane@acme.com".to_string()),
            personal_emails: vec![],
            mobile_phone: None,
        });
        assert!(by_work_email.has_contact_info);

        let by_personal_email = EnrichedContact::from(EnrichApiResponse {
            work_email: None,
            personal_emails: vec!["jane@gmail.com".to_string()],
            mobile_phone: None,
        });
        assert!(by_personal_email.has_contact_info);

        let by_phone = EnrichedContact::from(EnrichApiResponse {
            work_email: None,
            personal_emails: vec![],
            mobile_phone: Some("+1 555 0100".to_string()),
        });
        assert!(by_phone.has_contact_info);
    }

    #[test]
    fn test_api_response_defaults_missing_personal_emails() {
        let parsed: EnrichApiResponse =
            serde_json::from_str(r#"{"work_email": "jane@acme.com"}"#).unwrap();
        assert!(parsed.personal_emails.is_empty());
    }

    #[test]
    fn test_query_resolvable_by_url_or_name_only() {
        let by_url = EnrichQuery {
            profile_url: Some("https://linkedin.com/in/janedoe".to_string()),
            ..Default::default()
        };
        assert!(by_url.is_resolvable());

        let by_name = EnrichQuery {
            name: Some("Jane Doe".to_string()),
            company: Some("Acme".to_string()),
            ..Default::default()
        };
        assert!(by_name.is_resolvable());

        let unanchored = EnrichQuery {
            company: Some("Acme".to_string()),
            location: Some("Austin".to_string()),
            ..Default::default()
        };
        assert!(!unanchored.is_resolvable());

        let blank_url = EnrichQuery {
            profile_url: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(!blank_url.is_resolvable());
    }
}
