use crate::error::BacklogError;
use crate::options::{ApplyOption, RequestOption};
use crate::params::RequestParams;

/// Options accepted when creating, updating, or deleting wiki pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WikiOption(RequestOption);

impl WikiOption {
    pub fn name(name: impl Into<String>) -> Self {
        Self(RequestOption::Name(name.into()))
    }

    pub fn content(content: impl Into<String>) -> Self {
        Self(RequestOption::Content(content.into()))
    }

    pub fn mail_notify(enabled: bool) -> Self {
        Self(RequestOption::MailNotify(enabled))
    }
}

impl ApplyOption for WikiOption {
    #[track_caller]
    fn apply(&self, params: &mut RequestParams) -> Result<(), BacklogError> {
        self.0.apply(params)
    }
}
