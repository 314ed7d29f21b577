use clap::builder::TypedValueParser as _;
use clap::Parser;
use dotenvy::dotenv;
use log::LevelFilter;

/// Default Daily.co API base URL used when `DAILYCO_BASE_URL` is not set.
pub const DEFAULT_DAILYCO_BASE_URL: &str = "https://api.daily.co/v1/";

#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// The API token to use when calling the Daily.co API.
    #[arg(long, env)]
    dailyco_token: Option<String>,

    /// The base URL of the Daily.co API.
    /// Override in tests to point at a mock server.
    #[arg(long, env, default_value = DEFAULT_DAILYCO_BASE_URL)]
    dailyco_base_url: String,

    /// Privacy of the rooms created by the demo, passed through to the API
    /// (`private` or `public`).
    #[arg(long, env, default_value = "private")]
    room_privacy: String,

    /// Lifetime in seconds of the meeting tokens minted by the demo (default: 1 day)
    #[arg(long, env, default_value_t = 86400)]
    pub meeting_token_ttl_secs: i64,

    /// Set the log level verbosity threshold (level) to control what gets displayed on console output
    #[arg(
        short,
        long,
        env,
        default_value_t = LevelFilter::Info,
        value_parser = clap::builder::PossibleValuesParser::new(["OFF", "ERROR", "WARN", "INFO", "DEBUG", "TRACE"])
            .map(|s| s.parse::<LevelFilter>().unwrap()),
        )]
    pub log_level_filter: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        // Load .env file first
        dotenv().ok();
        // Then parse the command line parameters and flags
        Config::parse()
    }

    /// Returns the Daily.co API token, if configured.
    pub fn dailyco_token(&self) -> Option<String> {
        self.dailyco_token.clone()
    }

    pub fn set_dailyco_token(mut self, dailyco_token: String) -> Self {
        self.dailyco_token = Some(dailyco_token);
        self
    }

    /// Returns the Daily.co API base URL.
    pub fn dailyco_base_url(&self) -> &str {
        &self.dailyco_base_url
    }

    pub fn room_privacy(&self) -> &str {
        &self.room_privacy
    }
}
