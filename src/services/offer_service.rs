use crate::dto::interview_dto::NotificationOutcome;
use crate::dto::offer_dto::{GenerateOfferRequest, GeneratedOffer, SendOfferRequest, SendOfferResponse};
use crate::error::{Error, Result};
use crate::models::candidate::{Candidate, InterviewStatus};
use crate::models::entity::EntityId;
use crate::services::email_service::EmailService;
use crate::services::template_service::{offer_variables, render};
use crate::store::AppStore;
use crate::utils::validation::validate;

/// Only candidates who finished at least one interview round get offers.
const OFFER_STAGES: [InterviewStatus; 2] = [
    InterviewStatus::FirstInterviewComplete,
    InterviewStatus::SecondInterviewComplete,
];

#[derive(Clone)]
pub struct OfferService {
    store: AppStore,
    email: EmailService,
}

impl OfferService {
    pub fn new(store: AppStore, email: EmailService) -> Self {
        Self { store, email }
    }

    /// Fills the chosen template with the candidate's name, the position and
    /// the salary (the candidate's expected salary unless overridden).
    pub async fn generate(&self, request: GenerateOfferRequest) -> Result<GeneratedOffer> {
        validate(&request)?;
        let template = self
            .store
            .offer_templates
            .get_or_fetch(&request.template_id)
            .await?;
        let candidate = self.offer_candidate(&request.candidate_id).await?;

        let salary = request
            .salary
            .as_deref()
            .unwrap_or(&candidate.expected_salary);
        let content = render(
            &template.content,
            offer_variables(&candidate.name, &request.position, salary),
        );
        tracing::debug!(template = %template.id, candidate = %candidate.id, "offer generated");

        Ok(GeneratedOffer {
            template_id: template.id,
            candidate_id: candidate.id,
            content,
        })
    }

    /// Emails an already rendered offer. Delivery failures come back as an
    /// error so the caller sees nothing was sent.
    pub async fn send(&self, request: SendOfferRequest) -> Result<SendOfferResponse> {
        validate(&request)?;
        let candidate = self.offer_candidate(&request.candidate_id).await?;
        if candidate.email.trim().is_empty() {
            return Err(Error::BadRequest(format!(
                "Candidate {} has no email address",
                candidate.id
            )));
        }

        self.email
            .send_offer_letter(&candidate, &request.offer_content)
            .await?;
        Ok(SendOfferResponse {
            candidate_id: candidate.id,
            delivery: NotificationOutcome::Sent,
        })
    }

    async fn offer_candidate(&self, id: &EntityId) -> Result<Candidate> {
        let candidate = self.store.candidates.get_or_fetch(id).await?;
        if !OFFER_STAGES.contains(&candidate.interview_status) {
            tracing::warn!(id = %candidate.id, status = %candidate.interview_status, "offer refused");
            return Err(Error::BadRequest(format!(
                "Candidate {} is {}; offers go to candidates who completed an interview round",
                candidate.id, candidate.interview_status
            )));
        }
        Ok(candidate)
    }
}
