use clap::Parser;
use miette::Result;
use smtgen::cli::{Cli, Commands, GenerateCommands};

fn main() -> Result<()> {
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(cmd) => match cmd {
            GenerateCommands::Line(args) => smtgen::cli::commands::generate::run_line(args),
            GenerateCommands::Assembly(args) => smtgen::cli::commands::generate::run_assembly(args),
        },
        Commands::Scan(args) => smtgen::cli::commands::scan::run(args),
        Commands::Train(args) => smtgen::cli::commands::train::run(args),
    }
}
