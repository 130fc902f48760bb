use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use courier::commands::{
    brand::BrandCommand, message::MessageCommand, paginate::PaginateCommand,
    template::TemplateCommand,
};
use courier_utils::courier_version;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Command::Completion { shell } = cli.command {
        clap_complete::generate(
            shell,
            &mut Cli::command(),
            env!("CARGO_BIN_NAME"),
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    init_tracing();

    let config = courier_config::load().context("Failed to load config")?;

    match cli.command {
        Command::Paginate(command) => command.invoke(&config)?,
        Command::Template { command } => command.invoke()?,
        Command::Brand { command } => command.invoke()?,
        Command::Message { command } => command.invoke()?,
        Command::CheckConfig { verbose } => {
            verbose.then(|| println!("{config:#?}"));
        }
        Command::Completion { .. } => unreachable!(),
    }

    Ok(())
}

#[derive(Debug, Parser)]
#[command(version = courier_version())]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the navigation bar of a paginated list
    #[command(aliases(["page", "p"]))]
    Paginate(PaginateCommand),
    /// Inspect message templates
    #[command(aliases(["t"]))]
    Template {
        #[command(subcommand)]
        command: TemplateCommand,
    },
    /// Validate brand forms
    #[command(aliases(["b"]))]
    Brand {
        #[command(subcommand)]
        command: BrandCommand,
    },
    /// Prepare manual message dispatches
    #[command(aliases(["m"]))]
    Message {
        #[command(subcommand)]
        command: MessageCommand,
    },
    /// Validate configuration
    CheckConfig {
        /// Print a debug representation of the config
        #[arg(short, long)]
        verbose: bool,
    },
    /// Generate shell completions
    Completion {
        /// The shell to generate completions for
        #[clap(value_enum)]
        shell: Shell,
    },
}

fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    #[cfg(tracing_pretty)]
    let fmt_layer = fmt_layer.pretty();

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(EnvFilter::from_default_env()))
        .init();
}
