use std::collections::BTreeMap;

use courier_core_message_contracts::{MessageBuildError, MessageService};
use courier_core_template_contracts::TemplateService;
use courier_models::{
    message::{Destination, MessageBody, PhoneNumber, ReceiverRow},
    template::{placeholder_name, Template},
};
use courier_utils::trace_instrument;
use tracing::debug;
use uuid::Uuid;


#[derive(Debug, Clone, Default)]
pub struct MessageServiceImpl<TemplateS> {
    template: TemplateS,
}

impl<TemplateS> MessageServiceImpl<TemplateS> {
    pub fn new(template: TemplateS) -> Self {
        Self { template }
    }
}

impl<TemplateS> MessageService for MessageServiceImpl<TemplateS>
where
    TemplateS: TemplateService,
{
    #[trace_instrument(skip(self))]
    fn new_row(&self, params: &[String]) -> ReceiverRow {
        ReceiverRow {
            id: Uuid::new_v4().into(),
            phone_number: String::new(),
            list_param: params
                .iter()
                .map(|param| (param.clone(), String::new()))
                .collect(),
        }
    }

    #[trace_instrument(skip(self))]
    fn preview(&self, template: &Template, rows: &[ReceiverRow]) -> String {
        let params = rows
            .first()
            .map(|row| {
                row.list_param
                    .iter()
                    .map(|(token, value)| {
                        let name = placeholder_name(token).unwrap_or(token);
                        (name.to_owned(), value.clone())
                    })
                    .collect::<BTreeMap<_, _>>()
            })
            .unwrap_or_default();

        self.template.preview(&template.body.content, &params)
    }

    #[trace_instrument(skip(self))]
    fn build_message(
        &self,
        template: &Template,
        rows: &[ReceiverRow],
    ) -> Result<MessageBody, MessageBuildError> {
        if rows.is_empty() {
            return Err(MessageBuildError::NoDestinations);
        }

        let destinations = rows
            .iter()
            .enumerate()
            .map(|(index, row)| build_destination(index + 1, &template.body.params, row))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            template_id = %template.id,
            destinations = destinations.len(),
            "message ready for dispatch"
        );

        Ok(MessageBody {
            template_id: template.id,
            destinations,
        })
    }
}

fn build_destination(
    row_number: usize,
    params: &[String],
    row: &ReceiverRow,
) -> Result<Destination, MessageBuildError> {
    if row.phone_number.trim().is_empty() {
        return Err(MessageBuildError::MissingPhoneNumber { row: row_number });
    }

    let phone_number = PhoneNumber::try_new(row.phone_number.as_str()).map_err(|_| {
        MessageBuildError::InvalidPhoneNumber {
            row: row_number,
            phone_number: row.phone_number.clone(),
        }
    })?;

    let list_param = params
        .iter()
        .map(|param| match row.list_param.get(param) {
            Some(value) if !value.is_empty() => Ok((param.clone(), value.clone())),
            _ => Err(MessageBuildError::MissingParam {
                row: row_number,
                param: param.clone(),
            }),
        })
        .collect::<Result<BTreeMap<_, _>, _>>()?;

    Ok(Destination {
        phone_number,
        list_param,
    })
}
