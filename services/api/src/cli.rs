use crate::commands::{run_catalog, run_match, CatalogArgs, MatchArgs};
use crate::server;
use career_match::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Career Match",
    about = "Serve or run the career matching engine from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Rank the career catalog against a set of skills
    Match(MatchArgs),
    /// Print the career profiles and their required skills
    Catalog(CatalogArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Match(args) => run_match(args),
        Command::Catalog(args) => run_catalog(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["career-match-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn match_accepts_repeated_skills() {
        let cli = Cli::try_parse_from([
            "career-match-api",
            "match",
            "--skill",
            "React",
            "--skill",
            "System Design",
            "--experience",
            "5-10",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Match(args)) => {
                assert_eq!(args.skills, vec!["React", "System Design"]);
                assert_eq!(args.experience, "5-10");
                assert_eq!(args.education, "bachelors");
                assert!(!args.explain);
            }
            other => panic!("expected match command, got {other:?}"),
        }
    }

    #[test]
    fn match_accepts_json_with_explain() {
        let cli = Cli::try_parse_from(["career-match-api", "match", "--json", "--explain"])
            .expect("parses");

        match cli.command {
            Some(Command::Match(args)) => {
                assert!(args.json && args.explain);
                assert!(args.skills.is_empty());
            }
            other => panic!("expected match command, got {other:?}"),
        }
    }
}
