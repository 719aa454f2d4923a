//! Command-line definition (clap builder API)

use clap::{Arg, ArgAction, Command};

/// Build the top-level CLI.
pub fn build_cli() -> Command {
    Command::new("bizproc")
        .about("Relevance search over a business-process catalog")
        .arg(
            Arg::new("catalog")
                .long("catalog")
                .value_name("PATH")
                .env("BIZPROC_CATALOG")
                .default_value("data/processes.json")
                .help("Path to the catalog JSON file"),
        )
        .subcommand(
            Command::new("search").about("Search the catalog").arg(
                Arg::new("query")
                    .required(true)
                    .num_args(1..)
                    .action(ArgAction::Append)
                    .help("Free-text query"),
            ),
        )
        .subcommand(
            Command::new("get").about("Show one process by id").arg(
                Arg::new("id")
                    .required(true)
                    .help("Exact catalog id, e.g. B1.6"),
            ),
        )
        .subcommand(Command::new("list").about("List all processes"))
        .subcommand(
            Command::new("suggest").about("Leave feedback").arg(
                Arg::new("text")
                    .required(true)
                    .num_args(1..)
                    .action(ArgAction::Append)
                    .help("Suggestion text"),
            ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_search() {
        let matches = build_cli()
            .try_get_matches_from(["bizproc", "search", "пустая", "упаковка"])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "search");
        let words: Vec<_> = sub.get_many::<String>("query").unwrap().collect();
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn test_cli_parses_get_with_catalog_flag() {
        let matches = build_cli()
            .try_get_matches_from(["bizproc", "--catalog", "/tmp/p.json", "get", "B1.6"])
            .unwrap();
        assert_eq!(matches.get_one::<String>("catalog").unwrap(), "/tmp/p.json");
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "get");
        assert_eq!(sub.get_one::<String>("id").unwrap(), "B1.6");
    }

    #[test]
    fn test_cli_search_requires_query() {
        assert!(build_cli()
            .try_get_matches_from(["bizproc", "search"])
            .is_err());
    }
}
