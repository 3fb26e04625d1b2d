use crate::dto::interview_dto::{
    InterviewSchedulePayload, NotificationOutcome, ScheduleInterviewRequest,
    ScheduleInterviewResponse,
};
use crate::error::Result;
use crate::models::entity::EntityId;
use crate::models::interview_schedule::InterviewSchedule;
use crate::services::email_service::EmailService;
use crate::store::AppStore;
use crate::utils::validation::validate;

#[derive(Clone)]
pub struct InterviewService {
    store: AppStore,
    email: EmailService,
}

impl InterviewService {
    pub fn new(store: AppStore, email: EmailService) -> Self {
        Self { store, email }
    }

    pub async fn list(&self) -> Result<Vec<InterviewSchedule>> {
        self.store.interview_schedules.list_all().await
    }

    /// Persists the schedule, then optionally emails the candidate.
    ///
    /// The invitation is best effort: a failed email is reported in the
    /// response while the schedule stays stored.
    pub async fn schedule(&self, request: ScheduleInterviewRequest) -> Result<ScheduleInterviewResponse> {
        validate(&request.schedule)?;
        let candidate = self
            .store
            .candidates
            .get_or_fetch(&request.schedule.candidate_id)
            .await?;

        let schedule = self
            .store
            .interview_schedules
            .create(&request.schedule)
            .await?;
        tracing::info!(id = %schedule.id, candidate = %candidate.id, "interview scheduled");

        let invitation = if !request.send_invitation {
            NotificationOutcome::Skipped
        } else {
            match self.email.send_interview_invitation(&candidate, &schedule).await {
                Ok(()) => NotificationOutcome::Sent,
                Err(err) => NotificationOutcome::Failed {
                    error: err.to_string(),
                },
            }
        };

        Ok(ScheduleInterviewResponse {
            schedule,
            invitation,
        })
    }

    pub async fn update(
        &self,
        id: &EntityId,
        payload: InterviewSchedulePayload,
    ) -> Result<InterviewSchedule> {
        validate(&payload)?;
        let record = InterviewSchedule {
            id: id.clone(),
            candidate_id: payload.candidate_id,
            date: payload.date,
            interviewers: payload.interviewers,
            notes: payload.notes,
        };
        let saved = self.store.interview_schedules.update(&record).await?;
        tracing::info!(id = %saved.id, "interview rescheduled");
        Ok(saved)
    }

    pub async fn delete(&self, id: &EntityId) -> Result<()> {
        self.store.interview_schedules.delete(id).await?;
        tracing::info!(%id, "interview cancelled");
        Ok(())
    }
}
