use crate::dto::candidate_dto::{CandidatePayload, CandidateQuery};
use crate::error::{Error, Result};
use crate::models::candidate::{Candidate, InterviewStatus, Technology};
use crate::models::entity::EntityId;
use crate::models::{Assessment, Evaluation, InterviewSchedule};
use crate::services::workflow_service::check_transition;
use crate::store::AppStore;
use crate::utils::validation::validate;

#[derive(Clone)]
pub struct CandidateService {
    store: AppStore,
}

impl CandidateService {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }

    /// Refreshes the candidate list and applies the dashboard filters.
    pub async fn list(&self, query: &CandidateQuery) -> Result<Vec<Candidate>> {
        let technology = query
            .technology
            .as_deref()
            .filter(|t| !t.is_empty() && *t != "all")
            .map(|t| t.parse::<Technology>().map_err(Error::BadRequest))
            .transpose()?;
        let status = query
            .status
            .as_deref()
            .filter(|s| !s.is_empty() && *s != "all")
            .map(|s| s.parse::<InterviewStatus>().map_err(Error::BadRequest))
            .transpose()?;

        let candidates = self.store.candidates.list_all().await?;
        Ok(filter_candidates(
            &candidates,
            query.search.as_deref(),
            technology,
            status,
        ))
    }

    pub async fn get(&self, id: &EntityId) -> Result<Candidate> {
        self.store.candidates.get_by_id(id).await
    }

    pub async fn create(&self, payload: CandidatePayload) -> Result<Candidate> {
        validate(&payload)?;
        let candidate = self.store.candidates.create(&payload).await?;
        tracing::info!(id = %candidate.id, name = %candidate.name, "candidate added");
        Ok(candidate)
    }

    /// Full edit of a candidate record. A status change goes through the
    /// workflow guard against the currently known status.
    pub async fn update(&self, id: &EntityId, payload: CandidatePayload) -> Result<Candidate> {
        validate(&payload)?;
        let current = self.store.candidates.get_or_fetch(id).await?;
        if current.interview_status != payload.interview_status {
            self.guard(&current, payload.interview_status)?;
        }

        let updated = Candidate {
            id: current.id.clone(),
            name: payload.name,
            phone: payload.phone,
            email: payload.email,
            technology: payload.technology,
            level: payload.level,
            experience: payload.experience,
            expected_salary: payload.expected_salary,
            interview_status: payload.interview_status,
            references: payload.references,
            notes: payload.notes,
            cv: payload.cv,
        };
        let saved = self.store.candidates.update(&updated).await?;
        tracing::info!(id = %saved.id, "candidate updated");
        Ok(saved)
    }

    /// Moves a candidate to `requested` if the workflow allows it; on
    /// rejection nothing is sent and the cache is unchanged.
    pub async fn change_status(
        &self,
        id: &EntityId,
        requested: InterviewStatus,
    ) -> Result<Candidate> {
        let current = self.store.candidates.get_or_fetch(id).await?;
        self.guard(&current, requested)?;

        let from = current.interview_status;
        let updated = Candidate {
            interview_status: requested,
            ..current
        };
        let saved = self.store.candidates.update(&updated).await?;
        tracing::info!(id = %saved.id, %from, to = %requested, "candidate status changed");
        Ok(saved)
    }

    /// Removes the candidate only; dependent records are left in place.
    pub async fn delete(&self, id: &EntityId) -> Result<()> {
        self.store.candidates.delete(id).await?;
        tracing::info!(%id, "candidate deleted");
        Ok(())
    }

    pub async fn assessments(&self, id: &EntityId) -> Result<Vec<Assessment>> {
        self.store.assessments.list_by_foreign_key(id).await
    }

    pub async fn evaluations(&self, id: &EntityId) -> Result<Vec<Evaluation>> {
        self.store.evaluations.list_by_foreign_key(id).await
    }

    pub async fn interviews(&self, id: &EntityId) -> Result<Vec<InterviewSchedule>> {
        self.store.interview_schedules.list_by_foreign_key(id).await
    }

    fn guard(&self, current: &Candidate, requested: InterviewStatus) -> Result<()> {
        check_transition(current.interview_status, requested).map_err(|err| {
            tracing::warn!(id = %current.id, error = %err, "status change rejected");
            Error::from(err)
        })
    }
}

/// Search matches name or email case-insensitively, or phone as typed.
pub fn filter_candidates(
    candidates: &[Candidate],
    search: Option<&str>,
    technology: Option<Technology>,
    status: Option<InterviewStatus>,
) -> Vec<Candidate> {
    let needle = search
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    candidates
        .iter()
        .filter(|c| {
            needle.as_deref().map_or(true, |n| {
                c.name.to_lowercase().contains(n)
                    || c.email.to_lowercase().contains(n)
                    || c.phone.contains(n)
            })
        })
        .filter(|c| technology.map_or(true, |t| c.technology == t))
        .filter(|c| status.map_or(true, |s| c.interview_status == s))
        .cloned()
        .collect()
}
