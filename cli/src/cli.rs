use clap::{Parser, Subcommand, ValueEnum};
use udc_console::{DataSource, ModelType};

#[derive(Parser)]
#[command(name = "udc")]
#[command(
    author,
    version,
    about = "Terminal console for the Universal Data Connector"
)]
pub struct Cli {
    /// Configuration file path (defaults to ./udc.toml, then the user config directory)
    #[clap(short, long, global = true)]
    pub config: Option<String>,

    /// Connector service base URL, overriding the configuration file
    #[clap(long, global = true)]
    pub api: Option<String>,

    /// Output format for results
    #[clap(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Enable verbose output with additional information
    #[clap(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check whether the connector service is reachable
    Health,

    /// Poll the connector service health and report status changes
    Watch {
        /// Seconds between checks (defaults to health.interval_seconds)
        #[clap(short, long)]
        interval: Option<u64>,
    },

    /// Upload a JSON or CSV file as the data for a source
    Upload {
        /// Source that receives the data
        #[clap(value_parser = parse_source)]
        source: DataSource,

        /// File to upload (.json or .csv)
        file: String,

        /// Render the parsed records locally instead of uploading
        #[clap(long, default_value_t = false)]
        preview: bool,
    },

    /// Ask the service to analyze the uploaded data
    Analyze {
        /// Question about the data
        query: Vec<String>,

        /// Analysis model to use
        #[clap(short, long, value_parser = parse_model, default_value = "auto")]
        model: ModelType,

        /// Speak the analysis after it is shown
        #[clap(long, default_value_t = false)]
        speak: bool,

        /// Dictate the question (appended to any typed words)
        #[clap(long, default_value_t = false)]
        listen: bool,
    },

    /// Fetch filtered records from a source
    Fetch {
        /// Source to read from
        #[clap(value_parser = parse_source)]
        source: DataSource,

        /// Number of records to request (defaults to fetch.limit)
        #[clap(short, long)]
        limit: Option<u32>,

        /// Request voice-optimized results (defaults to fetch.voice)
        #[clap(long, default_value_t = false, conflicts_with = "no_voice")]
        voice: bool,

        /// Request plain results even when fetch.voice is set
        #[clap(long, default_value_t = false)]
        no_voice: bool,

        /// Status filter (crm: active|inactive, support: open|closed)
        #[clap(long)]
        status: Option<String>,

        /// Priority filter (support only)
        #[clap(long)]
        priority: Option<String>,

        /// Metric filter (analytics only)
        #[clap(long)]
        metric: Option<String>,
    },

    /// Start an interactive session with all console actions
    Console,

    /// Generate a default configuration file
    Init {
        /// Where to write the file (defaults to ./udc.toml)
        #[clap(long, default_value = "udc.toml")]
        path: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Boxed terminal tables
    Table,

    /// HTML fragment for the web console
    Html,

    /// Structured JSON of the rendered view
    Json,
}

fn parse_source(value: &str) -> Result<DataSource, String> {
    value.parse()
}

fn parse_model(value: &str) -> Result<ModelType, String> {
    value.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_arguments() {
        let cli = Cli::try_parse_from([
            "udc", "fetch", "support", "--status", "open", "--priority", "high", "--limit", "5", "--voice",
        ])
        .unwrap();

        match cli.command {
            Commands::Fetch {
                source,
                limit,
                voice,
                no_voice,
                status,
                priority,
                metric,
            } => {
                assert_eq!(source, DataSource::Support);
                assert_eq!(limit, Some(5));
                assert!(voice);
                assert!(!no_voice);
                assert_eq!(status.as_deref(), Some("open"));
                assert_eq!(priority.as_deref(), Some("high"));
                assert_eq!(metric, None);
            }
            _ => panic!("Expected Fetch command"),
        }
        assert_eq!(cli.format, OutputFormat::Table);
    }

    #[test]
    fn test_analyze_arguments() {
        let cli = Cli::try_parse_from([
            "udc", "--format", "json", "analyze", "which", "tickets", "are", "open", "-m", "table_qa",
        ])
        .unwrap();

        match cli.command {
            Commands::Analyze { query, model, speak, listen } => {
                assert_eq!(query.join(" "), "which tickets are open");
                assert_eq!(model, ModelType::TableQa);
                assert!(!speak);
                assert!(!listen);
            }
            _ => panic!("Expected Analyze command"),
        }
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_no_voice_flag() {
        let cli = Cli::try_parse_from(["udc", "fetch", "crm", "--no-voice"]).unwrap();
        match cli.command {
            Commands::Fetch { voice, no_voice, .. } => {
                assert!(!voice);
                assert!(no_voice);
            }
            _ => panic!("Expected Fetch command"),
        }

        assert!(Cli::try_parse_from(["udc", "fetch", "crm", "--voice", "--no-voice"]).is_err());
    }

    #[test]
    fn test_invalid_source_is_rejected() {
        assert!(Cli::try_parse_from(["udc", "fetch", "billing"]).is_err());
        assert!(Cli::try_parse_from(["udc", "upload", "crm"]).is_err());
    }

    #[test]
    fn test_global_options() {
        let cli = Cli::try_parse_from(["udc", "health", "--api", "http://10.1.1.1:8000", "-v"]).unwrap();
        assert_eq!(cli.api.as_deref(), Some("http://10.1.1.1:8000"));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Health));
    }
}
