use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::dto::dashboard_dto::{DashboardStats, InterviewSummary, StatusCount};
use crate::error::Result;
use crate::models::candidate::{Candidate, InterviewStatus};
use crate::models::entity::EntityId;
use crate::models::interview_schedule::InterviewSchedule;
use crate::store::AppStore;
use crate::utils::time::now;

const RECENT_CANDIDATES: usize = 4;

#[derive(Clone)]
pub struct DashboardService {
    store: AppStore,
}

impl DashboardService {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }

    /// Reloads candidates and interview schedules, then summarizes them.
    pub async fn stats(&self) -> Result<DashboardStats> {
        let (candidates, schedules) = tokio::try_join!(
            self.store.candidates.list_all(),
            self.store.interview_schedules.list_all(),
        )?;
        Ok(summarize(&candidates, &schedules, now()))
    }
}

/// Builds the dashboard read model as of `now` (days are UTC days).
///
/// Interviews whose candidate is unknown are skipped.
pub fn summarize(
    candidates: &[Candidate],
    schedules: &[InterviewSchedule],
    now: DateTime<Utc>,
) -> DashboardStats {
    let status_counts = InterviewStatus::ALL
        .into_iter()
        .map(|status| StatusCount {
            status,
            count: candidates
                .iter()
                .filter(|c| c.interview_status == status)
                .count(),
        })
        .collect();

    let by_id: HashMap<&EntityId, &Candidate> = candidates.iter().map(|c| (&c.id, c)).collect();
    let today = now.date_naive();

    let mut joined: Vec<InterviewSummary> = schedules
        .iter()
        .filter_map(|schedule| {
            let candidate = by_id.get(&schedule.candidate_id)?;
            Some(InterviewSummary {
                schedule_id: schedule.id.clone(),
                candidate_id: candidate.id.clone(),
                candidate_name: candidate.name.clone(),
                date: schedule.date,
                interviewers: schedule.interviewers.clone(),
            })
        })
        .collect();
    joined.sort_by_key(|summary| summary.date);

    let (today_interviews, rest): (Vec<_>, Vec<_>) = joined
        .into_iter()
        .partition(|summary| summary.date.date_naive() == today);
    let upcoming_interviews = rest
        .into_iter()
        .filter(|summary| summary.date > now)
        .collect();

    let mut recent_candidates = candidates.to_vec();
    recent_candidates.sort_by_key(|c| std::cmp::Reverse(c.id.as_number().unwrap_or(i64::MIN)));
    recent_candidates.truncate(RECENT_CANDIDATES);

    DashboardStats {
        total_candidates: candidates.len(),
        status_counts,
        today_interviews,
        upcoming_interviews,
        recent_candidates,
    }
}
