use crate::source::batch::DEFAULT_BATCH_LIMIT;
use crate::source::decode::ColorMode;
use crate::source::DEFAULT_TIMEOUT_SECONDS;
use crate::{Arguments, Mode, DEFAULT_REPETITIONS};
use clap::{
    arg, builder::RangedU64ValueParser, crate_authors, crate_description, crate_name,
    crate_version, value_parser, Arg, ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_image_arguments(command);
        let command = Self::register_batch_argument(command);
        let command = Self::register_batch_limit_argument(command);
        let command = Self::register_repetitions_argument(command);
        let command = Self::register_threads_argument(command);
        let command = Self::register_color_mode_argument(command);
        Self::register_timeout_argument(command)
    }

    fn register_image_arguments(command: Command) -> Command {
        command
            .arg(Self::create_base_image_argument())
            .arg(Self::create_comparison_image_argument())
    }

    fn register_batch_argument(command: Command) -> Command {
        command.arg(Self::create_batch_argument())
    }

    fn register_batch_limit_argument(command: Command) -> Command {
        command.arg(Self::create_batch_limit_argument())
    }

    fn register_repetitions_argument(command: Command) -> Command {
        command.arg(Self::create_repetitions_argument())
    }

    fn register_threads_argument(command: Command) -> Command {
        command.arg(Self::create_threads_argument())
    }

    fn register_color_mode_argument(command: Command) -> Command {
        command.arg(Self::create_color_mode_argument())
    }

    fn register_timeout_argument(command: Command) -> Command {
        command.arg(Self::create_timeout_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_base_image_argument() -> Arg {
        Arg::new("base_image")
            .help("URL or path of the base image")
            .required_unless_present("batch")
            .conflicts_with("batch")
    }

    fn create_comparison_image_argument() -> Arg {
        Arg::new("comparison_image")
            .help("URL or path of the image compared against the base image")
            .required_unless_present("batch")
            .conflicts_with("batch")
    }

    fn create_batch_argument() -> Arg {
        arg!(batch: -b --batch <FILE> "JSON file listing pairs of image URLs")
            .value_parser(value_parser!(PathBuf))
            .required(false)
    }

    fn create_batch_limit_argument() -> Arg {
        arg!(batch_limit: -l --batch_limit <PAIRS> "Maximum number of pairs loaded from the batch file")
            .default_value(DEFAULT_BATCH_LIMIT.to_string())
            .value_parser(value_parser!(usize))
    }

    fn create_repetitions_argument() -> Arg {
        arg!(-r --repetitions <REPETITIONS> "Number of timing-only passes after the first pass")
            .default_value(DEFAULT_REPETITIONS.to_string())
            .value_parser(value_parser!(u32))
    }

    fn create_threads_argument() -> Arg {
        arg!(-t --threads <THREADS> "Number of threads for the first comparison pass")
            .default_value("1")
            .required(false)
            .value_parser(RangedU64ValueParser::<usize>::new().range(1..))
    }

    fn create_color_mode_argument() -> Arg {
        arg!(color_mode: -c --color_mode <MODE> "Pixel layout images are decoded to")
            .default_value("rgb")
            .value_parser(value_parser!(ColorMode))
    }

    fn create_timeout_argument() -> Arg {
        arg!(--timeout <SECONDS> "Timeout for downloading a single image")
            .default_value(DEFAULT_TIMEOUT_SECONDS.to_string())
            .value_parser(value_parser!(u64))
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            mode: Self::extract_mode_argument(matches),
            batch_limit: Self::extract_batch_limit_argument(matches),
            repetitions: Self::extract_repetitions_argument(matches),
            number_of_threads: Self::extract_threads_argument(matches),
            color_mode: Self::extract_color_mode_argument(matches),
            timeout: Self::extract_timeout_argument(matches),
        }
    }

    fn extract_mode_argument(matches: &ArgMatches) -> Mode {
        if let Some(batch_file) = matches.get_one::<PathBuf>("batch") {
            return Mode::Batch {
                batch_file: batch_file.clone(),
            };
        }
        Mode::SinglePair {
            base_image: matches
                .get_one::<String>("base_image")
                .expect("Required argument base_image not provided")
                .clone(),
            comparison_image: matches
                .get_one::<String>("comparison_image")
                .expect("Required argument comparison_image not provided")
                .clone(),
        }
    }

    fn extract_batch_limit_argument(matches: &ArgMatches) -> usize {
        matches
            .get_one::<usize>("batch_limit")
            .expect("Batch limit must be provided, but was unset.")
            .to_owned()
    }

    fn extract_repetitions_argument(matches: &ArgMatches) -> u32 {
        matches
            .get_one::<u32>("repetitions")
            .expect("Repetitions must be provided, but was unset.")
            .to_owned()
    }

    fn extract_threads_argument(matches: &ArgMatches) -> usize {
        matches
            .get_one::<usize>("threads")
            .expect("Required argument threads not provided")
            .to_owned()
    }

    fn extract_color_mode_argument(matches: &ArgMatches) -> ColorMode {
        matches
            .get_one::<ColorMode>("color_mode")
            .expect("Color mode must be provided, but was unset.")
            .to_owned()
    }

    fn extract_timeout_argument(matches: &ArgMatches) -> Duration {
        let seconds = matches
            .get_one::<u64>("timeout")
            .expect("Timeout must be provided, but was unset.");
        Duration::from_secs(*seconds)
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}
