use std::rc::Rc;

use chrono::Utc;
use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen_futures::spawn_local;

use super::Lead;
use crate::config;

/// Where completed leads go once the form accepts them.
#[cfg_attr(test, mockall::automock)]
pub trait LeadSink {
    fn deliver(&self, lead: Lead);
}

/// Logs the lead and drops it. Used whenever no endpoint is configured.
#[derive(Debug, Default)]
pub struct LogLeadSink;

impl LeadSink for LogLeadSink {
    fn deliver(&self, lead: Lead) {
        tracing::info!(
            name = %lead.name,
            email = %lead.email,
            phone = %lead.phone,
            organization = %lead.organization,
            requirement = %lead.requirement,
            "lead captured"
        );
    }
}

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("lead request failed: {0}")]
    Request(#[from] gloo_net::Error),
    #[error("lead endpoint answered {0}")]
    Status(u16),
}

#[derive(Serialize)]
struct LeadPayload<'a> {
    #[serde(flatten)]
    lead: &'a Lead,
    submitted_at: String,
}

/// POSTs each lead as JSON to a fixed endpoint.
#[derive(Debug, Clone)]
pub struct HttpLeadSink {
    endpoint: String,
}

impl HttpLeadSink {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    async fn post(endpoint: &str, lead: &Lead) -> Result<(), SinkError> {
        let payload = LeadPayload {
            lead,
            submitted_at: Utc::now().to_rfc3339(),
        };
        let response = Request::post(endpoint)
            .header("Content-Type", "application/json")
            .json(&payload)?
            .send()
            .await?;
        if !response.ok() {
            return Err(SinkError::Status(response.status()));
        }
        Ok(())
    }
}

impl LeadSink for HttpLeadSink {
    fn deliver(&self, lead: Lead) {
        let endpoint = self.endpoint.clone();
        spawn_local(async move {
            match Self::post(&endpoint, &lead).await {
                Ok(()) => tracing::info!(endpoint = %endpoint, "lead delivered"),
                Err(err) => {
                    // the visitor already saw the acknowledgment, so this stays in the console
                    gloo_console::error!(format!("Failed to deliver lead: {}", err));
                }
            }
        });
    }
}

/// Sink handle handed down through a `ContextProvider`.
#[derive(Clone)]
pub struct SharedLeadSink(Rc<dyn LeadSink>);

impl SharedLeadSink {
    pub fn new(sink: impl LeadSink + 'static) -> Self {
        Self(Rc::new(sink))
    }

    /// HTTP delivery when an endpoint is configured, console logging otherwise.
    pub fn from_config() -> Self {
        match config::lead_endpoint() {
            Some(endpoint) => {
                log::info!("Leads will be posted to {}", endpoint);
                Self::new(HttpLeadSink::new(endpoint))
            }
            None => Self::new(LogLeadSink),
        }
    }

    pub fn sink(&self) -> &dyn LeadSink {
        self.0.as_ref()
    }
}

impl Default for SharedLeadSink {
    fn default() -> Self {
        Self::new(LogLeadSink)
    }
}

impl PartialEq for SharedLeadSink {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_flattens_lead_fields() {
        let lead = Lead {
            name: "A".into(),
            email: "a@b.com".into(),
            phone: "123".into(),
            ..Lead::default()
        };
        let payload = LeadPayload {
            lead: &lead,
            submitted_at: "2025-01-01T00:00:00+00:00".into(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["name"], "A");
        assert_eq!(json["email"], "a@b.com");
        assert_eq!(json["organization"], "");
        assert_eq!(json["submitted_at"], "2025-01-01T00:00:00+00:00");
    }

    #[test]
    fn shared_sinks_compare_by_identity() {
        let a = SharedLeadSink::default();
        let b = a.clone();
        let c = SharedLeadSink::default();
        assert!(a == b);
        assert!(a != c);
    }
}
