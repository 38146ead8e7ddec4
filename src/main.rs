//! retrospeak command line
//!
//! Speaks text, or the current time and date, through an SP0256-AL2 board.

use anyhow::{bail, Context};
use log::{debug, error, info};
use retrospeak::clock::{date_to_speak, time_to_speak};
use retrospeak::config::Config;
use retrospeak::phonemes::PhonemeMap;
use retrospeak::speech::device::MAX_BOARD;
use retrospeak::speech::speaker::{MAX_CLOCK_MHZ, MIN_CLOCK_MHZ};
use retrospeak::speech::{create_device, Speaker};
use retrospeak::translate::{Translator, WordTranslator};
use std::process;

const USAGE: &str = "\
usage: retrospeak [-h] [-c MHZ] [-b BOARD] [-v] [-s] [-j] [-t] [-d] [--debug] [TEXT ...]

Speaks English text using the SP0256-AL2 allophone chip

options:
  -h, --help             show this help message and exit
  -c, --clock MHZ        clock speed in MHz - range 1.0 to 5.1
  -b, --board BOARD      select retroSpeak device 0-3
  -v, --verbose          print allophones
  -s, --silent           do not speak, print allophones
  -j, --json             print per-word translations as JSON, do not speak
  -t, --time             speak the time
  -d, --date             speak the date
      --debug            write debug log to retrospeak.log";

/// Parsed command line
#[derive(Debug, Default)]
struct Options {
    clock: Option<f32>,
    board: Option<u8>,
    verbose: bool,
    silent: bool,
    json: bool,
    time: bool,
    date: bool,
    debug: bool,
    help: bool,
    text: Vec<String>,
}

impl Options {
    /// Time and date mode; with neither flag given text is spoken instead
    fn clock_mode(&self) -> bool {
        self.time || self.date
    }
}

fn parse_clock(value: &str) -> Result<f32, String> {
    let mhz: f32 = value
        .parse()
        .map_err(|_| format!("invalid clock value: '{}'", value))?;
    if !(MIN_CLOCK_MHZ..=MAX_CLOCK_MHZ).contains(&mhz) {
        return Err(format!(
            "{} not in range [{}, {}]",
            value, MIN_CLOCK_MHZ, MAX_CLOCK_MHZ
        ));
    }
    Ok(mhz)
}

fn parse_board(value: &str) -> Result<u8, String> {
    value
        .parse::<u8>()
        .ok()
        .filter(|&board| board <= MAX_BOARD)
        .ok_or_else(|| format!("invalid board: '{}' (choose from 0-{})", value, MAX_BOARD))
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Options, String> {
    let mut options = Options::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        if !options.text.is_empty() {
            options.text.push(arg);
            continue;
        }

        match arg.as_str() {
            "-h" | "--help" => options.help = true,
            "-c" | "--clock" => {
                let value = args.next().ok_or("-c/--clock expects a value")?;
                options.clock = Some(parse_clock(&value)?);
            }
            "-b" | "--board" => {
                let value = args.next().ok_or("-b/--board expects a value")?;
                options.board = Some(parse_board(&value)?);
            }
            "-v" | "--verbose" => options.verbose = true,
            "-s" | "--silent" => options.silent = true,
            "-j" | "--json" => options.json = true,
            "-t" | "--time" => options.time = true,
            "-d" | "--date" => options.date = true,
            "--debug" => options.debug = true,
            "--" => options.text.extend(args.by_ref()),
            other if other.starts_with('-') && other.len() > 1 => {
                return Err(format!("unrecognized argument: {}", other));
            }
            _ => options.text.push(arg),
        }
    }

    Ok(options)
}

fn init_logging(debug_mode: bool) {
    if debug_mode {
        // Debug mode: write to retrospeak.log
        use std::fs::OpenOptions;
        match OpenOptions::new()
            .create(true)
            .append(true)
            .open("retrospeak.log")
        {
            Ok(log_file) => {
                env_logger::Builder::new()
                    .filter_level(log::LevelFilter::Debug)
                    .target(env_logger::Target::Pipe(Box::new(log_file)))
                    .init();
            }
            Err(e) => {
                eprintln!("Warning: Failed to open retrospeak.log for debug logging: {}", e);
                env_logger::Builder::new()
                    .filter_level(log::LevelFilter::Warn)
                    .init();
            }
        }

        info!(
            "retrospeak version {} starting (debug mode, logging to retrospeak.log)",
            retrospeak::VERSION
        );
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Error)
            .init();
    }
}

fn main() {
    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", USAGE);
            eprintln!("retrospeak: error: {}", message);
            process::exit(2);
        }
    };

    if options.help {
        println!("{}", USAGE);
        return;
    }

    if !options.clock_mode() && options.text.is_empty() {
        eprintln!("{}", USAGE);
        eprintln!("retrospeak: error: nothing to speak");
        process::exit(2);
    }

    init_logging(options.debug);

    if let Err(e) = run(&options) {
        error!("Fatal error: {:#}", e);
        eprintln!("retrospeak: {:#}", e);
        process::exit(1);
    }
}

fn run(options: &Options) -> anyhow::Result<()> {
    let config = Config::load().context("Failed to load configuration")?;
    info!("Configuration loaded from {:?}", config.path());

    let clock = options.clock.unwrap_or_else(|| config.clock());
    let board = options.board.unwrap_or_else(|| config.board());
    let verbose = options.verbose || config.verbose();

    let translator = Translator::new(
        WordTranslator::english(),
        config.vocabulary(),
        PhonemeMap::sp0256(),
    )
    .with_separator(&config.separator());

    let phrases = if options.clock_mode() {
        clock_phrases(options, &translator)?
    } else if options.json {
        let words = translator
            .translate_detailed(&options.text.join(" "))
            .context("Translation failed")?;
        println!("{}", serde_json::to_string_pretty(&words)?);
        return Ok(());
    } else {
        let allophones = translator
            .translate_words(&options.text)
            .context("Translation failed")?;
        vec![allophones.join(" ")]
    };

    if options.json {
        println!("{}", serde_json::to_string_pretty(&phrases)?);
        return Ok(());
    }

    if verbose || options.silent {
        for phrase in &phrases {
            println!("{}", phrase);
        }
    }

    if options.silent {
        return Ok(());
    }

    let device = create_device(board).context("Failed to open speech board")?;
    let speaker = Speaker::new(device, clock).context("Failed to start speaker")?;
    for phrase in &phrases {
        debug!("Speaking: {}", phrase);
        speaker.speak_and_wait(phrase);
    }

    Ok(())
}

/// Allophones for the current time and/or date
fn clock_phrases(options: &Options, translator: &Translator) -> anyhow::Result<Vec<String>> {
    if !options.text.is_empty() {
        bail!("text cannot be combined with --time or --date");
    }

    let now = chrono::Local::now().naive_local();
    let vocabulary = translator.vocabulary();
    let mut phrases = Vec::new();
    if options.time {
        phrases.push(time_to_speak(now.time(), vocabulary)?);
    }
    if options.date {
        phrases.push(date_to_speak(now.date(), vocabulary)?);
    }
    Ok(phrases)
}
