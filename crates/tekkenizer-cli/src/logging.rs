use stderrlog::Timestamp;

/// Logging setup arg group.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages.
    #[clap(short, long, global = true)]
    pub quiet: bool,

    /// Turn debugging information on (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count, default_value = None)]
    verbose: Option<u8>,

    /// Timestamp resolution for log lines.
    #[arg(long, global = true, value_enum, default_value_t = TimestampArg::None)]
    pub ts: TimestampArg,
}

/// Log timestamp resolution.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampArg {
    None,
    Sec,
    Ms,
    Us,
    Ns,
}

impl From<TimestampArg> for Timestamp {
    fn from(ts: TimestampArg) -> Self {
        match ts {
            TimestampArg::None => Timestamp::Off,
            TimestampArg::Sec => Timestamp::Second,
            TimestampArg::Ms => Timestamp::Millisecond,
            TimestampArg::Us => Timestamp::Microsecond,
            TimestampArg::Ns => Timestamp::Nanosecond,
        }
    }
}

impl LogArgs {
    /// Install the stderr logger.
    ///
    /// `default` is the verbosity used when no `-v` is given.
    pub fn setup_logging(
        &self,
        default: u8,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let level = if let Some(verbose) = self.verbose
            && verbose > 0
        {
            verbose.saturating_add(default)
        } else {
            default
        };

        let log_level = match level {
            0 => stderrlog::LogLevelNum::Off,
            1 => stderrlog::LogLevelNum::Error,
            2 => stderrlog::LogLevelNum::Warn,
            3 => stderrlog::LogLevelNum::Info,
            4 => stderrlog::LogLevelNum::Debug,
            _ => stderrlog::LogLevelNum::Trace,
        };

        stderrlog::new()
            .quiet(self.quiet)
            .verbosity(log_level)
            .timestamp(self.ts.into())
            .init()?;

        Ok(())
    }
}
