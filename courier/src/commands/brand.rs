use anyhow::Context;
use clap::Subcommand;
use courier_models::brand::{BrandBody, BrandDescription, BrandName, Channel};

#[derive(Debug, Subcommand)]
pub enum BrandCommand {
    /// Validate a brand form and print the resulting request body
    #[command(aliases(["c"]))]
    Check {
        #[arg(short, long)]
        name: String,
        #[arg(short, long, default_value = "")]
        description: String,
        /// One of sms, zns, email
        #[arg(short, long)]
        channel: Channel,
    },
    /// List the supported channels
    Channels,
}

impl BrandCommand {
    pub fn invoke(self) -> anyhow::Result<()> {
        match self {
            BrandCommand::Check {
                name,
                description,
                channel,
            } => {
                let body = check(&name, &description, channel)?;
                println!("{}", serde_json::to_string_pretty(&body)?);
            }
            BrandCommand::Channels => {
                for channel in Channel::ALL {
                    println!("{channel}");
                }
            }
        }
        Ok(())
    }
}

fn check(name: &str, description: &str, channel: Channel) -> anyhow::Result<BrandBody> {
    Ok(BrandBody {
        name: BrandName::try_new(name).context("Invalid brand name")?,
        description: BrandDescription::try_new(description)
            .context("Invalid brand description")?,
        channel,
    })
}
