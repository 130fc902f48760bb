use std::collections::BTreeMap;

use clap::Subcommand;
use courier_core_template_contracts::TemplateService;
use courier_core_template_impl::TemplateServiceImpl;
use courier_utils::parse_key_value;

#[derive(Debug, Subcommand)]
pub enum TemplateCommand {
    /// List the placeholder tokens of a template content
    #[command(aliases(["p"]))]
    Params { content: String },
    /// Render a template content with sample values
    Preview {
        content: String,
        /// A sample value for a placeholder, e.g. `--param name=An`
        #[arg(short, long = "param", value_parser = parse_key_value)]
        params: Vec<(String, String)>,
    },
}

impl TemplateCommand {
    pub fn invoke(self) -> anyhow::Result<()> {
        let output = match self {
            TemplateCommand::Params { content } => params(&TemplateServiceImpl, &content),
            TemplateCommand::Preview { content, params } => {
                preview(&TemplateServiceImpl, &content, params)
            }
        };
        println!("{output}");
        Ok(())
    }
}

fn params(template: &impl TemplateService, content: &str) -> String {
    template.extract_params(content).join("\n")
}

fn preview(
    template: &impl TemplateService,
    content: &str,
    params: Vec<(String, String)>,
) -> String {
    let params = params.into_iter().collect::<BTreeMap<_, _>>();
    template.preview(content, &params)
}
