use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "tomata")]
#[command(about = "A Pomodoro focus timer for the terminal")]
#[command(long_about = "tomata - A Pomodoro focus timer for the terminal

An interactive countdown timer that cycles through work and break
periods, records finished sessions, and reports on your focus time.

QUICK START:
  tomata timer              Start a 25-minute work timer
  tomata timer -w 50m       Work in 50-minute periods
  tomata history            Show recent sessions
  tomata report             Weekly focus report

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  tomata <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive focus timer
    ///
    /// Opens a full-screen countdown cycling through work and break
    /// periods. Every 4th completed work period earns a long break.
    /// Finished periods are recorded to the session history.
    ///
    /// # Keybindings
    ///
    ///   Space   Start / pause
    ///   r       Reset the current period
    ///   s       Skip to the next period
    ///   q/Esc   Quit
    ///
    /// # Examples
    ///
    ///   tomata timer                  Classic 25/5/15 cadence
    ///   tomata timer -w 50m -b 10m    Longer periods
    ///   tomata timer --sessions 2     Long break every 2nd work period
    ///   tomata timer --mute           No terminal bell
    #[command(alias = "t")]
    Timer(TimerArgs),

    /// View session history
    ///
    /// Shows recently finished work and break periods, newest first.
    ///
    /// # Examples
    ///
    ///   tomata history                Last 10 sessions
    ///   tomata history -n 25          Last 25 sessions
    ///   tomata history --kind work    Work periods only
    ///   tomata history -o json        Output as JSON
    #[command(alias = "h")]
    History(HistoryArgs),

    /// Generate a focus report
    ///
    /// Summarizes completed focus time for a period: totals, averages,
    /// daily breakdown, and your current streak.
    ///
    /// # Examples
    ///
    ///   tomata report                 This week
    ///   tomata report -p today        Today only
    ///   tomata report -p all -o json  Everything, as JSON
    Report(ReportArgs),

    /// Manage configuration
    ///
    /// Settings live in ~/.tomata/config.yaml. Timer flags override
    /// the file for a single run.
    ///
    /// # Subcommands
    ///
    ///   show   Print the effective configuration
    ///   init   Write a default config file
    ///   path   Print the config file path
    ///
    /// # Examples
    ///
    ///   tomata config show
    ///   tomata config init
    ///   $EDITOR $(tomata config path)
    Config(ConfigArgs),

    /// Generate shell completions
    ///
    /// Outputs a completion script for the specified shell.
    /// Redirect to a file or source directly.
    ///
    /// # Examples
    ///
    ///   tomata completions bash > ~/.bash_completion.d/tomata
    ///   tomata completions zsh > ~/.zfunc/_tomata
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the interactive timer.
#[derive(Args)]
pub struct TimerArgs {
    /// Work period duration (e.g., 25m, 1h, 50)
    ///
    /// A bare number is taken as minutes. Overrides the config file.
    #[arg(long, short = 'w')]
    pub work: Option<String>,

    /// Short break duration (e.g., 5m, 300s)
    #[arg(long, short = 'b', visible_alias = "short-break")]
    pub break_duration: Option<String>,

    /// Long break duration (e.g., 15m)
    #[arg(long, visible_alias = "long-break")]
    pub long_break_duration: Option<String>,

    /// Work periods before a long break
    #[arg(long)]
    pub sessions: Option<u32>,

    /// Disable the terminal bell on period completion
    #[arg(long, short = 'm')]
    pub mute: bool,
}

/// Arguments for session history.
#[derive(Args)]
pub struct HistoryArgs {
    /// Number of sessions to show
    #[arg(long, short = 'n', default_value = "10")]
    pub limit: usize,

    /// Filter by session kind (work, short, long)
    #[arg(long, short = 'k')]
    pub kind: Option<String>,
}

/// Arguments for focus reports.
#[derive(Args)]
pub struct ReportArgs {
    /// Time period (today, week, month, all)
    #[arg(long, short = 'p', default_value = "week")]
    pub period: String,
}

/// Arguments for configuration management.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Configuration subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    ///
    /// Shows the merged result of defaults and the config file.
    Show,

    /// Write a default config file
    ///
    /// Creates ~/.tomata/config.yaml with the default settings.
    /// Refuses to overwrite an existing file unless --force is given.
    Init {
        /// Overwrite an existing config file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the config file path
    Path,
}
