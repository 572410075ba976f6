use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bookshelf", version)]
#[command(about = "Personal book catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Interactive menu (default)
    Shell,

    /// Print every book in the library
    #[command(alias = "ls")]
    List,

    /// Print books whose title (or author) contains the query
    Search {
        /// Match against the author instead of the title
        #[arg(short, long)]
        author: bool,

        /// Case-insensitive substring to look for
        #[arg(default_value = "")]
        query: String,
    },

    /// Print reading statistics
    Stats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_shell() {
        let cli = Cli::try_parse_from(["bookshelf"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn parses_search_by_author() {
        let cli = Cli::try_parse_from(["bookshelf", "search", "--author", "herbert"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Search {
                author: true,
                query: "herbert".to_string()
            })
        );
    }

    #[test]
    fn search_query_defaults_to_empty() {
        let cli = Cli::try_parse_from(["bookshelf", "search"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Search {
                author: false,
                query: String::new()
            })
        );
    }

    #[test]
    fn verbose_is_global() {
        let cli = Cli::try_parse_from(["bookshelf", "stats", "-v"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.command, Some(Commands::Stats));
    }

    #[test]
    fn list_alias() {
        let cli = Cli::try_parse_from(["bookshelf", "ls"]).unwrap();
        assert_eq!(cli.command, Some(Commands::List));
    }
}
