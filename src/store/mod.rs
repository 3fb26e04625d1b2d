pub mod auth_slice;
pub mod slice;

pub use auth_slice::{AuthSlice, AuthState};
pub use slice::{Scope, Slice, SliceState};

use crate::models::{Assessment, Candidate, Evaluation, InterviewSchedule, OfferTemplate};
use crate::services::collection_service::{CollectionApi, CollectionBackend};

/// Client-side cache of all five collections plus the signed-in identity.
///
/// Built once and handed to whoever needs it; clones share the same state.
/// Slices never coordinate: deleting a candidate leaves its assessments,
/// evaluations and interviews in place, and readers that join on candidates
/// skip records whose candidate is unknown.
#[derive(Clone)]
pub struct Store<C> {
    pub candidates: Slice<Candidate, C>,
    pub assessments: Slice<Assessment, C>,
    pub evaluations: Slice<Evaluation, C>,
    pub interview_schedules: Slice<InterviewSchedule, C>,
    pub offer_templates: Slice<OfferTemplate, C>,
    pub auth: AuthSlice,
}

impl<C: CollectionApi> Store<C> {
    pub fn new(api: C) -> Self {
        Self {
            candidates: Slice::new(api.clone()),
            assessments: Slice::new(api.clone()),
            evaluations: Slice::new(api.clone()),
            interview_schedules: Slice::new(api.clone()),
            offer_templates: Slice::new(api),
            auth: AuthSlice::new(),
        }
    }
}

pub type AppStore = Store<CollectionBackend>;
