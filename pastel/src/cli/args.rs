//! CLI argument definitions.

use clap::{Parser, Subcommand};

use pastel::config::{
    SynthConfig, DEFAULT_MAX_DELAY_MS, DEFAULT_MIN_DELAY_MS, DEFAULT_SEARCH_DELAY_MS,
};

/// PastelAI - search and chat with a canned assistant
#[derive(Parser, Debug)]
#[command(name = "pastel")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Seed for reproducible replies
    #[arg(long, global = true, env = "PASTEL_SEED")]
    pub seed: Option<u64>,

    /// Shortest simulated thinking time, in milliseconds
    #[arg(long, global = true, env = "PASTEL_MIN_DELAY_MS", default_value_t = DEFAULT_MIN_DELAY_MS)]
    pub min_delay_ms: u64,

    /// Longest simulated thinking time (exclusive), in milliseconds
    #[arg(long, global = true, env = "PASTEL_MAX_DELAY_MS", default_value_t = DEFAULT_MAX_DELAY_MS)]
    pub max_delay_ms: u64,

    /// Loading time before search results are shown, in milliseconds
    #[arg(long, global = true, env = "PASTEL_SEARCH_DELAY_MS", default_value_t = DEFAULT_SEARCH_DELAY_MS)]
    pub search_delay_ms: u64,

    /// Skip all simulated delays
    #[arg(long, global = true, env = "PASTEL_NO_DELAY")]
    pub no_delay: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Synthesizer settings described by the flags.
    pub fn synth_config(&self) -> SynthConfig {
        let config = SynthConfig {
            min_delay_ms: self.min_delay_ms,
            max_delay_ms: self.max_delay_ms,
            search_delay_ms: self.search_delay_ms,
            seed: self.seed,
        };
        if self.no_delay {
            config.without_delay()
        } else {
            config
        }
    }
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search and show mock results
    Search {
        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// Continue into a chat seeded with the query
        #[arg(long, conflicts_with = "json")]
        chat: bool,

        /// Continue into a chat asking for more on the query
        #[arg(long, conflicts_with_all = ["json", "chat"])]
        follow_up: bool,

        /// Continue into a chat with related question N (1-3)
        #[arg(long, value_name = "N", conflicts_with_all = ["json", "chat", "follow_up"],
              value_parser = clap::value_parser!(u8).range(1..=3))]
        ask: Option<u8>,

        /// Query to search for
        #[arg(required = true, trailing_var_arg = true)]
        query: Vec<String>,
    },

    /// Start a chat session
    Chat {
        /// First message to send
        #[arg(trailing_var_arg = true)]
        message: Vec<String>,
    },

    /// List suggested queries
    Suggestions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_delay_zeroes_timings() {
        let cli = Cli::parse_from(["pastel", "--no-delay", "--seed", "4", "suggestions"]);
        let config = cli.synth_config();
        assert!(config.reply_delay_ms().is_empty());
        assert_eq!(config.search_delay_ms, 0);
        assert_eq!(config.seed, Some(4));
    }

    #[test]
    fn test_search_collects_query_words() {
        let cli = Cli::parse_from(["pastel", "search", "--json", "Climate", "change"]);
        match cli.command {
            Some(Commands::Search { json, chat, follow_up, ask, query }) => {
                assert!(json);
                assert!(!chat);
                assert!(!follow_up);
                assert_eq!(ask, None);
                assert_eq!(query.join(" "), "Climate change");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_ask_takes_question_number() {
        let cli = Cli::parse_from(["pastel", "search", "--ask", "2", "quantum", "computing"]);
        assert!(matches!(cli.command, Some(Commands::Search { ask: Some(2), .. })));

        assert!(Cli::try_parse_from(["pastel", "search", "--ask", "4", "q"]).is_err());
        assert!(Cli::try_parse_from(["pastel", "search", "--ask", "1", "--follow-up", "q"]).is_err());
    }

    #[test]
    fn test_default_delays() {
        let cli = Cli::parse_from(["pastel", "chat"]);
        assert_eq!(cli.synth_config().reply_delay_ms(), 1000..3000);
    }
}
