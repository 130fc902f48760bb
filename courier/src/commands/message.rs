use std::{collections::BTreeMap, path::PathBuf};

use anyhow::Context;
use clap::Subcommand;
use courier_core_message_contracts::MessageService;
use courier_core_message_impl::MessageServiceImpl;
use courier_core_template_impl::TemplateServiceImpl;
use courier_models::{
    message::{MessageBody, ReceiverRow},
    template::{placeholder_name, Template},
};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Subcommand)]
pub enum MessageCommand {
    /// Validate a dispatch file and print the message request body
    #[command(aliases(["b"]))]
    Build {
        /// JSON file with a `template` and its `receivers`
        path: PathBuf,
    },
}

impl MessageCommand {
    pub fn invoke(self) -> anyhow::Result<()> {
        match self {
            MessageCommand::Build { path } => {
                let content = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                let file = serde_json::from_str::<DispatchFile>(&content)
                    .with_context(|| format!("Failed to parse {}", path.display()))?;

                let messages = MessageServiceImpl::new(TemplateServiceImpl);
                let body = build(&messages, &file)?;
                println!("{}", serde_json::to_string_pretty(&body)?);
            }
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct DispatchFile {
    template: Template,
    #[serde(default)]
    receivers: Vec<Receiver>,
}

#[derive(Debug, Deserialize)]
struct Receiver {
    #[serde(default)]
    phone_number: String,
    /// Sample values keyed by placeholder name, without braces.
    #[serde(default)]
    params: BTreeMap<String, String>,
}

fn build(messages: &impl MessageService, file: &DispatchFile) -> anyhow::Result<MessageBody> {
    let rows = file
        .receivers
        .iter()
        .map(|receiver| receiver_row(messages, &file.template, receiver))
        .collect::<Vec<_>>();

    info!(
        template = %file.template.body.name.as_str(),
        preview = %messages.preview(&file.template, &rows),
        "building message"
    );

    Ok(messages.build_message(&file.template, &rows)?)
}

fn receiver_row(
    messages: &impl MessageService,
    template: &Template,
    receiver: &Receiver,
) -> ReceiverRow {
    let mut row = messages.new_row(&template.body.params);
    row.phone_number.clone_from(&receiver.phone_number);
    for (token, value) in &mut row.list_param {
        let name = placeholder_name(token).unwrap_or(token);
        if let Some(sample) = receiver.params.get(name) {
            value.clone_from(sample);
        }
    }
    row
}

#[cfg(test)]
mod tests {
    use courier_core_message_contracts::MessageBuildError;
    use courier_demo::template::OTP;
    use courier_utils::assert_matches;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn dispatch_file(receivers: serde_json::Value) -> DispatchFile {
        serde_json::from_value(json!({
            "template": &*OTP,
            "receivers": receivers,
        }))
        .unwrap()
    }

    fn sut() -> MessageServiceImpl<TemplateServiceImpl> {
        MessageServiceImpl::new(TemplateServiceImpl)
    }

    #[test]
    fn build_ok() {
        // Arrange
        let file = dispatch_file(json!([
            {"phone_number": "0912345678", "params": {"name": "An", "code": "1234"}},
            {"phone_number": "+84987654321", "params": {"name": "Binh", "code": "4242", "extra": "x"}},
        ]));

        // Act
        let result = build(&sut(), &file);

        // Assert
        let value = serde_json::to_value(result.unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "template_id": OTP.id,
                "destinations": [
                    {"phone_number": "0912345678", "list_param": {"{{code}}": "1234", "{{name}}": "An"}},
                    {"phone_number": "+84987654321", "list_param": {"{{code}}": "4242", "{{name}}": "Binh"}},
                ],
            })
        );
    }

    #[test]
    fn template_round_trips() {
        let file = dispatch_file(json!([]));

        assert_eq!(file.template, *OTP);
    }

    #[test]
    fn no_receivers() {
        let file = dispatch_file(json!([]));

        let err = build(&sut(), &file).unwrap_err();

        assert_eq!(
            err.downcast::<MessageBuildError>().unwrap(),
            MessageBuildError::NoDestinations
        );
    }

    #[test]
    fn missing_param() {
        let file = dispatch_file(json!([
            {"phone_number": "0912345678", "params": {"name": "An", "code": "1"}},
            {"phone_number": "0912345679", "params": {"name": "Binh"}},
        ]));

        let err = build(&sut(), &file).unwrap_err();

        assert_matches!(
            err.downcast::<MessageBuildError>(),
            Ok(MessageBuildError::MissingParam { row: 2, param }) if param == "{{code}}"
        );
    }

    #[test]
    fn receiver_row_fills_known_params() {
        let receiver = Receiver {
            phone_number: "0912345678".into(),
            params: [("name".to_owned(), "An".to_owned())].into(),
        };

        let row = receiver_row(&sut(), &OTP, &receiver);

        assert_eq!(row.phone_number, "0912345678");
        assert_eq!(
            row.list_param,
            BTreeMap::from([
                ("{{code}}".to_owned(), String::new()),
                ("{{name}}".to_owned(), "An".to_owned()),
            ])
        );
    }
}
