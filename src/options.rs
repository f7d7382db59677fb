use anyhow::{Context, bail};
use rowca::{RuleTable, Seed};
use std::time::Duration;

/// Row length used outside console mode
const DEFAULT_WIDTH: usize = 80;
/// Number of generations printed in text mode
const DEFAULT_GENERATIONS: u64 = 1000;
/// Pacing of animated output
const DEFAULT_SLEEP_MILLIS: u64 = 150;
/// Pixels per data pin on the LED strip
const DEFAULT_SEGMENT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Text,
    Digits,
    Console,
    Led,
}

pub struct Args {
    matches: getopts::Matches,
}

impl Args {
    fn new<T: AsRef<str>>(args: &[T]) -> anyhow::Result<Option<Self>> {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optflag("c", "console", "run in console mode");
        opts.optflag("l", "led", "drive an LED strip frame instead of text");
        opts.optflag("d", "digits", "print rows as 0/1 digits");
        opts.optopt("r", "rule", "rule number or 8 table digits", "RULE");
        opts.optopt("o", "output", "write the final row as RLE", "FILE");
        opts.optopt("i", "input", "read the initial row from a file", "FILE");
        opts.optopt("w", "width", "set row length", "WIDTH");
        opts.optopt("f", "fill", "set fill type", "TYPE");
        opts.optopt(
            "s",
            "sleep",
            "the amount of time to sleep between generations",
            "MILLIS",
        );
        opts.optopt("g", "gens", "max number of generations", "COUNT");
        opts.optopt("", "segment", "LEDs per data pin", "COUNT");
        opts.optopt("", "stats", "write stats csv to file", "FILE");

        let matches = opts
            .parse(args.iter().map(T::as_ref))
            .context("invalid arguments")?;
        if matches.opt_present("help") {
            println!("{}", opts.usage("usage: rowca [options]"));
            Ok(None)
        } else {
            Ok(Some(Self { matches }))
        }
    }
    pub fn from_env() -> anyhow::Result<Option<Self>> {
        let env = std::env::args().collect::<Vec<_>>();
        Self::new(&env[1..])
    }

    fn get<T: std::str::FromStr>(&self, name: &str) -> anyhow::Result<Option<T>>
    where
        T::Err: std::fmt::Display,
    {
        self.matches
            .opt_get(name)
            .map_err(|e| anyhow::anyhow!("invalid --{name}: {e}"))
    }

    pub fn output(&self) -> Output {
        if self.matches.opt_present("console") {
            Output::Console
        } else if self.matches.opt_present("led") {
            Output::Led
        } else if self.matches.opt_present("digits") {
            Output::Digits
        } else {
            Output::Text
        }
    }

    /// Animated outputs run forever unless a limit is given
    pub fn generations(&self) -> anyhow::Result<Option<u64>> {
        Ok(match self.get("gens")? {
            Some(gens) => Some(gens),
            None if self.animated() => None,
            None => Some(DEFAULT_GENERATIONS),
        })
    }

    pub fn sleep(&self) -> anyhow::Result<Option<Duration>> {
        Ok(match self.get("sleep")? {
            Some(millis) => Some(Duration::from_millis(millis)),
            None if self.animated() => Some(Duration::from_millis(DEFAULT_SLEEP_MILLIS)),
            None => None,
        })
    }

    fn animated(&self) -> bool {
        matches!(self.output(), Output::Console | Output::Led)
    }

    pub fn rule(&self) -> anyhow::Result<RuleTable> {
        match self.matches.opt_str("rule") {
            Some(rule) => Ok(rule.parse()?),
            None => Ok(RuleTable::from(30)),
        }
    }

    /// The width given on the command line, if any
    pub fn width_arg(&self) -> anyhow::Result<Option<usize>> {
        self.get("width")
    }

    pub fn width(&self) -> anyhow::Result<usize> {
        if let Some(width) = self.width_arg()? {
            return Ok(width);
        }
        if self.output() == Output::Console {
            let (cols, _) = crossterm::terminal::size().context("query terminal size")?;
            return Ok(cols as usize);
        }
        Ok(DEFAULT_WIDTH)
    }

    pub fn segment(&self) -> anyhow::Result<usize> {
        Ok(self.get("segment")?.unwrap_or(DEFAULT_SEGMENT).max(1))
    }

    pub fn seed(&self) -> anyhow::Result<Seed> {
        let Some(mode) = self.matches.opt_str("fill") else {
            return Ok(Seed::default());
        };
        match Seed::new(&mode) {
            Some(seed) => Ok(seed),
            None => bail!("unknown fill type {mode:?}"),
        }
    }

    pub fn output_file(&self) -> Option<String> {
        self.matches.opt_str("output")
    }
    pub fn input_file(&self) -> Option<String> {
        self.matches.opt_str("input")
    }

    pub fn stats_file(&self) -> Option<String> {
        self.matches.opt_str("stats")
    }
}
