use crate::api::{ApiClient, Transport};
use crate::interactive::domain::models::{ApiJob, JobOutcome};
use tracing::{debug, error};

/// Runs API jobs for the interactive UI. Called from worker threads.
pub struct RegistryService<T: Transport> {
    client: ApiClient<T>,
}

impl<T: Transport> RegistryService<T> {
    pub fn new(client: ApiClient<T>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient<T> {
        &self.client
    }

    pub fn execute(&self, job: ApiJob) -> JobOutcome {
        debug!(?job, "executing api job");
        match job {
            ApiJob::LoadAll => JobOutcome::Loaded(self.client.load_all()),
            ApiJob::CreateProgram { name } => {
                JobOutcome::ProgramCreated(self.client.create_program(&name))
            }
            ApiJob::DeleteProgram { id } => {
                let result = self.client.delete_program(id);
                if let Err(e) = &result {
                    error!(program_id = id, error = %e, "delete program failed");
                }
                JobOutcome::ProgramDeleted(result)
            }
            ApiJob::CreateClient(client) => {
                JobOutcome::ClientCreated(self.client.create_client(&client))
            }
            ApiJob::DeleteClient { id } => {
                let result = self.client.delete_client(id);
                if let Err(e) = &result {
                    error!(client_id = id, error = %e, "delete client failed");
                }
                JobOutcome::ClientDeleted(result)
            }
            ApiJob::Search { id, query } => JobOutcome::Searched {
                id,
                result: self.client.search_clients(&query),
            },
        }
    }
}
