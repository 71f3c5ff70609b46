//! Request dispatcher.
//!
//! Routes a typed request through the validation stage to its single
//! handler. Validators registered for the request's kind all run first;
//! any violation aborts dispatch with the aggregated failure and the
//! handler never executes. A kind with no registered validators proceeds
//! straight to its handler after a soft warning.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use tracing::warn;

use crate::ports::StorageError;

use super::handlers::advisor::{
    CreateAdvisorHandler, DeleteAdvisorHandler, GetAdvisorByIdHandler, ListAdvisorsHandler,
    UpdateAdvisorHandler,
};
use super::request::{AdvisorReply, AdvisorRequest, RequestKind};
use super::validation::{
    CreateAdvisorValidator, DeleteAdvisorValidator, GetAdvisorByIdValidator, RequestValidator,
    UpdateAdvisorValidator, ValidationFailure,
};

/// Failure modes of a dispatched request.
///
/// "Not found" is not among them: handlers report it through their reply
/// value (`false` / `None`), never as an error.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("{0}")]
    Validation(ValidationFailure),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Stateless router from request kind to validators and handler.
///
/// The kind-to-handler mapping is fixed at 1:1 by construction; only the
/// validator side is an open registry.
pub struct Dispatcher {
    validators: HashMap<RequestKind, Vec<Arc<dyn RequestValidator>>>,
    create: Arc<CreateAdvisorHandler>,
    update: Arc<UpdateAdvisorHandler>,
    delete: Arc<DeleteAdvisorHandler>,
    get_by_id: Arc<GetAdvisorByIdHandler>,
    list: Arc<ListAdvisorsHandler>,
}

impl Dispatcher {
    /// Builds a dispatcher with the standard rule sets registered.
    ///
    /// `ListAdvisors` deliberately has no validator; it carries nothing
    /// to validate.
    pub fn new(
        create: Arc<CreateAdvisorHandler>,
        update: Arc<UpdateAdvisorHandler>,
        delete: Arc<DeleteAdvisorHandler>,
        get_by_id: Arc<GetAdvisorByIdHandler>,
        list: Arc<ListAdvisorsHandler>,
    ) -> Self {
        let mut dispatcher = Self {
            validators: HashMap::new(),
            create,
            update,
            delete,
            get_by_id,
            list,
        };
        dispatcher.register_validator(RequestKind::Create, Arc::new(CreateAdvisorValidator));
        dispatcher.register_validator(RequestKind::Update, Arc::new(UpdateAdvisorValidator));
        dispatcher.register_validator(RequestKind::Delete, Arc::new(DeleteAdvisorValidator));
        dispatcher.register_validator(RequestKind::GetById, Arc::new(GetAdvisorByIdValidator));
        dispatcher
    }

    /// Registers an additional validator for a request kind.
    pub fn register_validator(&mut self, kind: RequestKind, validator: Arc<dyn RequestValidator>) {
        self.validators.entry(kind).or_default().push(validator);
    }

    /// Runs the pipeline for one request.
    pub async fn dispatch(&self, request: AdvisorRequest) -> Result<AdvisorReply, DispatchError> {
        let kind = request.kind();

        match self.validators.get(&kind) {
            Some(validators) if !validators.is_empty() => {
                let violations: Vec<_> = validators
                    .iter()
                    .flat_map(|v| v.validate(&request))
                    .collect();
                if !violations.is_empty() {
                    return Err(DispatchError::Validation(ValidationFailure::new(violations)));
                }
            }
            _ => warn!(request = %kind, "no validator registered for request kind"),
        }

        let reply = match request {
            AdvisorRequest::Create(cmd) => AdvisorReply::Created(self.create.handle(cmd).await?),
            AdvisorRequest::Update(cmd) => AdvisorReply::Updated(self.update.handle(cmd).await?),
            AdvisorRequest::Delete(cmd) => AdvisorReply::Deleted(self.delete.handle(cmd).await?),
            AdvisorRequest::GetById(query) => {
                AdvisorReply::Advisor(self.get_by_id.handle(query).await?)
            }
            AdvisorRequest::List(query) => AdvisorReply::Advisors(self.list.handle(query).await?),
        };
        Ok(reply)
    }
}
