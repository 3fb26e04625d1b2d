use reqwest::Client;
use serde::Serialize;
use url::Url;

use crate::config::EmailConfig;
use crate::error::{Error, Result};
use crate::models::candidate::Candidate;
use crate::models::interview_schedule::InterviewSchedule;
use crate::utils::time::{long_date, short_time};

#[derive(Debug, Serialize)]
struct EmailRequest<'a, P: Serialize> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: P,
}

#[derive(Debug, Serialize)]
pub struct InterviewInvitationParams {
    pub to_name: String,
    pub to_email: String,
    pub interview_date: String,
    pub interview_time: String,
    pub interview_location: String,
}

#[derive(Debug, Serialize)]
pub struct OfferLetterParams {
    pub to_name: String,
    pub to_email: String,
    pub offer_content: String,
}

/// Client for the EmailJS-compatible transactional email endpoint.
#[derive(Clone)]
pub struct EmailService {
    client: Client,
    config: EmailConfig,
}

impl EmailService {
    pub fn new(client: Client, config: EmailConfig) -> Self {
        Self { client, config }
    }

    pub fn invitation_params(
        &self,
        candidate: &Candidate,
        schedule: &InterviewSchedule,
    ) -> InterviewInvitationParams {
        InterviewInvitationParams {
            to_name: candidate.name.clone(),
            to_email: candidate.email.clone(),
            interview_date: long_date(schedule.date),
            interview_time: short_time(schedule.date),
            interview_location: self.config.interview_location.clone(),
        }
    }

    pub async fn send_interview_invitation(
        &self,
        candidate: &Candidate,
        schedule: &InterviewSchedule,
    ) -> Result<()> {
        let params = self.invitation_params(candidate, schedule);
        self.send(&self.config.interview_template_id, &params).await?;
        tracing::info!(candidate = %candidate.id, schedule = %schedule.id, "interview invitation sent");
        Ok(())
    }

    pub async fn send_offer_letter(&self, candidate: &Candidate, offer_content: &str) -> Result<()> {
        let params = OfferLetterParams {
            to_name: candidate.name.clone(),
            to_email: candidate.email.clone(),
            offer_content: offer_content.to_string(),
        };
        self.send(&self.config.offer_template_id, &params).await?;
        tracing::info!(candidate = %candidate.id, "offer letter sent");
        Ok(())
    }

    async fn send<P: Serialize>(&self, template_id: &str, params: P) -> Result<()> {
        let body = EmailRequest {
            service_id: &self.config.service_id,
            template_id,
            user_id: &self.config.user_id,
            template_params: params,
        };

        let url: Url = self.config.api_url.clone();
        let res = self.client.post(url).json(&body).send().await;
        match res {
            Ok(resp) if resp.status().is_success() => Ok(()),
            Ok(resp) => {
                let status = resp.status();
                let text = resp.text().await.unwrap_or_default();
                tracing::warn!(template = template_id, %status, body = %text, "email rejected");
                Err(Error::EmailDeliveryFailed {
                    template: template_id.to_string(),
                    status: Some(status.as_u16()),
                    message: if text.is_empty() {
                        status.to_string()
                    } else {
                        text
                    },
                })
            }
            Err(err) => {
                tracing::warn!(template = template_id, error = %err, "email service unreachable");
                Err(Error::EmailDeliveryFailed {
                    template: template_id.to_string(),
                    status: None,
                    message: err.to_string(),
                })
            }
        }
    }
}
