use courier_models::{
    message::{MessageBody, ReceiverRow},
    template::Template,
};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait MessageService: Send + Sync + 'static {
    /// Create an empty receiver row with one blank value per template param.
    fn new_row(&self, params: &[String]) -> ReceiverRow;

    /// Render the template content with the sample values of the first row.
    fn preview(&self, template: &Template, rows: &[ReceiverRow]) -> String;

    /// Validate the receiver rows and assemble the dispatch payload.
    fn build_message(
        &self,
        template: &Template,
        rows: &[ReceiverRow],
    ) -> Result<MessageBody, MessageBuildError>;
}

/// Receiver rows are numbered from 1, as shown in the receiver table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageBuildError {
    #[error("At least one receiver is required.")]
    NoDestinations,
    #[error("Receiver {row} has no phone number.")]
    MissingPhoneNumber { row: usize },
    #[error("Receiver {row} has an invalid phone number `{phone_number}`.")]
    InvalidPhoneNumber { row: usize, phone_number: String },
    #[error("Receiver {row} has no value for {param}.")]
    MissingParam { row: usize, param: String },
}

