//! In-memory export job tracking.
//!
//! A job is keyed by a fingerprint of its input snapshot. While a job for a
//! snapshot is pending, resubmitting the same snapshot is rejected; once it
//! reaches a terminal state the snapshot may be submitted again.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::export::ExportArtifact;
use super::RenderPass;
use crate::models::profile::ProfileData;
use crate::templates::TemplateId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportStatus {
    Pending,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone)]
pub struct ExportJob {
    pub id: Uuid,
    pub fingerprint: u64,
    pub template: TemplateId,
    pub filename: String,
    pub status: ExportStatus,
    pub error_message: Option<String>,
    pub artifact: Option<ExportArtifact>,
    pub created_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl ExportJob {
    fn expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        match self.finished_at {
            Some(finished) => (now - finished).to_std().map_or(false, |age| age >= ttl),
            None => false,
        }
    }
}

/// Status payload returned to clients; never carries the artifact bytes.
#[derive(Debug, Clone, Serialize)]
pub struct ExportJobView {
    pub job_id: Uuid,
    pub status: ExportStatus,
    pub template: TemplateId,
    pub filename: String,
    pub error_message: Option<String>,
    pub page_count: Option<usize>,
    pub created_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl From<&ExportJob> for ExportJobView {
    fn from(job: &ExportJob) -> Self {
        Self {
            job_id: job.id,
            status: job.status,
            template: job.template,
            filename: job.filename.clone(),
            error_message: job.error_message.clone(),
            page_count: job.artifact.as_ref().map(|a| a.page_count),
            created_at: job.created_at,
            finished_at: job.finished_at,
        }
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("An export of this document is already pending: {0}")]
    AlreadyPending(Uuid),
}

#[derive(Clone)]
pub struct ExportJobs {
    inner: Arc<RwLock<HashMap<Uuid, ExportJob>>>,
    ttl: Duration,
}

impl ExportJobs {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Registers a pending job for `fingerprint`. Expired finished jobs are
    /// pruned under the same lock.
    pub async fn submit(
        &self,
        fingerprint: u64,
        template: TemplateId,
        filename: &str,
    ) -> Result<Uuid, SubmitError> {
        let now = Utc::now();
        let mut jobs = self.inner.write().await;

        jobs.retain(|_, job| !job.expired(now, self.ttl));

        if let Some(pending) = jobs
            .values()
            .find(|j| j.fingerprint == fingerprint && j.status == ExportStatus::Pending)
        {
            return Err(SubmitError::AlreadyPending(pending.id));
        }

        let id = Uuid::new_v4();
        jobs.insert(
            id,
            ExportJob {
                id,
                fingerprint,
                template,
                filename: filename.to_string(),
                status: ExportStatus::Pending,
                error_message: None,
                artifact: None,
                created_at: now,
                finished_at: None,
            },
        );
        Ok(id)
    }

    /// Moves a pending job to its terminal state. A job finishes once; later
    /// calls are ignored.
    pub async fn finish(&self, id: Uuid, outcome: Result<ExportArtifact, String>) {
        let mut jobs = self.inner.write().await;
        let Some(job) = jobs.get_mut(&id) else {
            return;
        };
        if job.status != ExportStatus::Pending {
            return;
        }
        match outcome {
            Ok(artifact) => {
                job.status = ExportStatus::Succeeded;
                job.artifact = Some(artifact);
            }
            Err(message) => {
                job.status = ExportStatus::Failed;
                job.error_message = Some(message);
            }
        }
        job.finished_at = Some(Utc::now());
    }

    pub async fn view(&self, id: Uuid) -> Option<ExportJobView> {
        self.inner.read().await.get(&id).map(ExportJobView::from)
    }

    pub async fn get(&self, id: Uuid) -> Option<ExportJob> {
        self.inner.read().await.get(&id).cloned()
    }
}

/// Identity of an export input snapshot.
pub fn fingerprint(profile: &ProfileData, pass: &RenderPass, filename: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    profile.hash(&mut hasher);
    pass.template.hash(&mut hasher);
    pass.accent.hash(&mut hasher);
    filename.hash(&mut hasher);
    hasher.finish()
}
