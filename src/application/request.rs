//! Typed requests routed through the dispatcher.

use std::fmt;

use super::handlers::advisor::{
    AdvisorView, CreateAdvisorCommand, CreateAdvisorResult, DeleteAdvisorCommand,
    GetAdvisorByIdQuery, ListAdvisorsQuery, UpdateAdvisorCommand,
};

/// The sum of every request the registry accepts.
///
/// Each variant maps to exactly one handler; the dispatcher routes by
/// variant, so two handlers for one request shape cannot be configured.
#[derive(Debug, Clone)]
pub enum AdvisorRequest {
    Create(CreateAdvisorCommand),
    Update(UpdateAdvisorCommand),
    Delete(DeleteAdvisorCommand),
    GetById(GetAdvisorByIdQuery),
    List(ListAdvisorsQuery),
}

impl AdvisorRequest {
    /// The discriminant used to look up registered validators.
    pub fn kind(&self) -> RequestKind {
        match self {
            AdvisorRequest::Create(_) => RequestKind::Create,
            AdvisorRequest::Update(_) => RequestKind::Update,
            AdvisorRequest::Delete(_) => RequestKind::Delete,
            AdvisorRequest::GetById(_) => RequestKind::GetById,
            AdvisorRequest::List(_) => RequestKind::List,
        }
    }
}

/// Request discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    Create,
    Update,
    Delete,
    GetById,
    List,
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RequestKind::Create => "CreateAdvisor",
            RequestKind::Update => "UpdateAdvisor",
            RequestKind::Delete => "DeleteAdvisor",
            RequestKind::GetById => "GetAdvisorById",
            RequestKind::List => "ListAdvisors",
        };
        f.write_str(s)
    }
}

/// Result of a dispatched request, one variant per request kind.
#[derive(Debug, Clone)]
pub enum AdvisorReply {
    Created(CreateAdvisorResult),
    Updated(bool),
    Deleted(bool),
    Advisor(Option<AdvisorView>),
    Advisors(Vec<AdvisorView>),
}
