use anyhow::Result;
use clap::{Parser, Subcommand};
use hop::areas::repository::Repository;
use hop::{Direction, ViewOptions};

#[derive(Parser)]
#[command(
    name = "hop",
    version = "0.1.0",
    about = "Step through a branch's commit history",
    long_about = "This tool walks the linear commit history of a git branch one \
    commit at a time, checking out the previous, next, or first commit, \
    or jumping straight to a hash prefix. The back command returns to \
    wherever you were before the last checkout.",
    disable_version_flag = true,
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        long,
        global = true,
        help = "Echo each git invocation to stderr before it runs"
    )]
    verbose: bool,
    #[arg(
        short = 'v',
        long = "version",
        action = clap::ArgAction::Version,
        help = "Print version"
    )]
    version: Option<bool>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "view",
        about = "Check out another commit of a branch's history",
        long_about = "This command lists the commits of the given branch oldest first, \
        locates the current HEAD among them, and checks out the commit in the requested \
        direction, or the first commit matching the given hash prefix.",
        disable_help_flag = true
    )]
    View {
        #[arg(short, long, help = "The branch whose history to browse")]
        branch: String,
        #[arg(
            short,
            long,
            value_enum,
            required_unless_present = "hash",
            help = "Where to move relative to the current commit"
        )]
        direction: Option<Direction>,
        #[arg(
            short = 'h',
            long,
            help = "Jump to the oldest commit whose id starts with this prefix"
        )]
        hash: Option<String>,
        #[arg(long = "help", action = clap::ArgAction::HelpLong, help = "Print help")]
        help: Option<bool>,
    },
    #[command(
        name = "back",
        about = "Return to the commit checked out before the last checkout",
        long_about = "This command scans the reflog for the most recent checkout entry \
        and checks out the position it moved away from."
    )]
    Back,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let pwd = std::env::current_dir()?;
    let mut repository = Repository::new(
        &pwd.to_string_lossy(),
        Box::new(std::io::stdout()),
        cli.verbose,
    )?;

    match &cli.command {
        Commands::View {
            branch,
            direction,
            hash,
            ..
        } => {
            let opts = ViewOptions {
                branch: branch.clone(),
                direction: *direction,
                hash: hash.clone(),
            };

            repository.view(&opts).await?
        }
        Commands::Back => repository.back().await?,
    }

    Ok(())
}
