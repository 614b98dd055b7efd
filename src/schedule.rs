// src/schedule.rs
//
// Periodic digest job on a `tokio-cron-scheduler` JobScheduler.
// The job itself is blocking (HTTP + parse + sends), so each run goes through
// `spawn_blocking` and never stalls the scheduler's ticker.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio_cron_scheduler::{Job, JobScheduler};

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("job creation failed: {0}")]
    JobCreation(String),

    #[error("job registration failed: {0}")]
    JobRegistration(String),

    #[error("scheduler error: {0}")]
    Scheduler(String),
}

pub struct Scheduler {
    inner: JobScheduler,
}

impl Scheduler {
    /// Run `job` every `every`, first run after one full interval.
    /// Must be called from inside a multi-threaded tokio runtime.
    pub async fn start<F>(every: Duration, job: F) -> Result<Self, ScheduleError>
    where
        F: Fn() + Send + Sync + 'static,
    {
        let mut inner = JobScheduler::new().await.map_err(|e| ScheduleError::Scheduler(e.to_string()))?;
        let job = Arc::new(job);

        let task = Job::new_repeated_async(every, move |_uuid, _lock| {
            let job = Arc::clone(&job);
            Box::pin(async move {
                if let Err(e) = tokio::task::spawn_blocking(move || (*job)()).await {
                    loge!("Scheduled job failed: {e}");
                }
            })
        })
        .map_err(|e| ScheduleError::JobCreation(e.to_string()))?;

        let job_id = inner.add(task).await.map_err(|e| ScheduleError::JobRegistration(e.to_string()))?;
        if let Err(e) = inner.start().await {
            let _ = inner.shutdown().await;
            return Err(ScheduleError::Scheduler(e.to_string()));
        }

        logf!("Scheduler started, job {job_id} every {:?}", every);
        Ok(Self { inner })
    }

    /// Stop ticking. A run already handed to `spawn_blocking` still finishes.
    pub async fn shutdown(mut self) -> Result<(), ScheduleError> {
        self.inner.shutdown().await.map_err(|e| ScheduleError::Scheduler(e.to_string()))?;
        logf!("Scheduler stopped");
        Ok(())
    }
}
