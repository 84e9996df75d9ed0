use stackstart::cli::commands::{CliArgs, Commands};
use stackstart::cli::handlers::{handle_detect, handle_init, handle_templates};
use stackstart::util::logging::{init_logging, resolve_level, LoggingConfig};
use stackstart::VERSION;

use clap::Parser;
use tracing::debug;

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();
    let level = resolve_level(args.log_level.as_deref(), args.verbose, args.quiet);
    init_logging(&LoggingConfig::with_level(level));

    debug!("stackstart v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match &args.command {
        Commands::Detect(detect_args) => handle_detect(detect_args, args.quiet),
        Commands::Templates(templates_args) => handle_templates(templates_args),
        Commands::Init(init_args) => handle_init(init_args, args.quiet).await,
    };

    std::process::exit(exit_code);
}
