#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the command-line front end of the `md4sum` binary. It
//! hashes command-line strings, files, and standard input with the MD4
//! implementation from the [`checksums`] crate and prints one
//! `<hex>  <name>` line per input.
//!
//! # Design
//!
//! The crate exposes [`run`] as the primary entry point. The function accepts
//! an iterator of arguments together with handles for standard output and
//! error, so the binary and the tests drive exactly the same code. A
//! [`clap`](https://docs.rs/clap/) builder definition performs the parse;
//! `--help` and `--version` are handled here rather than by clap so their
//! output stays deterministic.
//!
//! Diagnostics are produced through the [`logging`] crate. `-v`, `--info`,
//! and `--debug` build a [`logging::VerbosityConfig`]; the events collected
//! while hashing an input are drained and written to standard error before
//! the next input starts.
//!
//! # Invariants
//!
//! - `run` never panics; failures surface as non-zero exit codes.
//! - `--string` inputs are printed before file operands, each group in
//!   argument order.
//! - An unreadable input is reported and skipped; the remaining inputs are
//!   still hashed.
//!
//! # Errors
//!
//! Usage errors (unknown options, malformed `--info`/`--debug` tokens, a zero
//! `--chunk-size`) print `md4sum: <message>` plus a `--help` hint and return
//! `1`. Input failures are reported as `md4sum: <path>: <error>` and also
//! yield `1` once every input has been processed.
//!
//! # Examples
//!
//! ```
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let exit_code = cli::run(["md4sum", "--string", "abc"], &mut stdout, &mut stderr);
//!
//! assert_eq!(exit_code, 0);
//! assert_eq!(
//!     String::from_utf8(stdout).unwrap(),
//!     "a448017aaf21d8525fc10ae87aa6729d  \"abc\"\n"
//! );
//! assert!(stderr.is_empty());
//! ```

use std::ffi::{OsStr, OsString};
use std::fs::File;
use std::io::{self, Read, Write};
use std::num::NonZeroUsize;
use std::path::Path;

use checksums::strong::Md4;
use checksums::{DEFAULT_CHUNK_SIZE, Md4Digest, digest_reader};
use clap::{Arg, ArgAction, Command, builder::OsStringValueParser};
use logging::{VerbosityConfig, debug_log, drain_events, trace_name, trace_stats};

/// Maximum exit code representable by a Unix process.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

/// Program name used in diagnostics.
const PROGRAM_NAME: &str = "md4sum";

/// Operand naming standard input.
const STDIN_OPERAND: &str = "-";

/// Deterministic help text describing the command-line surface.
const HELP_TEXT: &str = concat!(
    "md4sum ",
    env!("CARGO_PKG_VERSION"),
    "\n",
    "\n",
    "Usage: md4sum [OPTIONS] [FILE]...\n",
    "\n",
    "Print the MD4 (RFC 1320) digest of each FILE. With no FILE and no\n",
    "--string, or when FILE is -, read standard input.\n",
    "\n",
    "Options:\n",
    "  -s, --string TEXT     Hash the UTF-8 bytes of TEXT (repeatable).\n",
    "      --chunk-size BYTES  Read inputs in chunks of BYTES (default 8192).\n",
    "  -v, --verbose         Increase diagnostic verbosity (repeatable).\n",
    "      --info FLAGS      Enable info diagnostics (name, stats, all, none).\n",
    "      --debug FLAGS     Enable debug diagnostics (hash, io, all, none).\n",
    "  -q, --quiet           Suppress diagnostics; errors are still reported.\n",
    "  -h, --help            Show this help message and exit.\n",
    "  -V, --version         Output version information and exit.\n",
    "\n",
    "FLAGS is a comma-separated list; a trailing digit sets the level\n",
    "(for example --info=stats2 or --debug=io2).\n",
);

/// Parsed command produced by [`parse_args`].
#[derive(Debug)]
struct ParsedArgs {
    show_help: bool,
    show_version: bool,
    quiet: bool,
    strings: Vec<String>,
    files: Vec<OsString>,
    chunk_size: NonZeroUsize,
    verbosity: VerbosityConfig,
}

/// Builds the `clap` command used for parsing.
fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg_required_else_help(false)
        .arg(
            Arg::new("help")
                .long("help")
                .short('h')
                .help("Show this help message and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .short('V')
                .help("Output version information and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("string")
                .long("string")
                .short('s')
                .value_name("TEXT")
                .help("Hash the UTF-8 bytes of TEXT.")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("chunk-size")
                .long("chunk-size")
                .value_name("BYTES")
                .help("Read inputs in chunks of BYTES.")
                .value_parser(parse_chunk_size)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase diagnostic verbosity.")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("info")
                .long("info")
                .value_name("FLAGS")
                .help("Enable info diagnostics.")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .value_name("FLAGS")
                .help("Enable debug diagnostics.")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Suppress diagnostics.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("files")
                .value_name("FILE")
                .help("Files to hash; - reads standard input.")
                .value_parser(OsStringValueParser::new())
                .num_args(0..)
                .action(ArgAction::Append),
        )
}

fn parse_chunk_size(value: &str) -> Result<NonZeroUsize, String> {
    value
        .parse::<NonZeroUsize>()
        .map_err(|_| "chunk size must be a positive integer".to_string())
}

/// Parses command-line arguments into a [`ParsedArgs`] structure.
///
/// Errors are returned as the one-line message printed after `md4sum: `.
fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, String>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();

    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }

    let mut matches = clap_command()
        .try_get_matches_from(args)
        .map_err(|error| clap_error_summary(&error))?;

    let show_help = matches.get_flag("help");
    let show_version = matches.get_flag("version");
    let quiet = matches.get_flag("quiet");
    let strings = matches
        .remove_many::<String>("string")
        .map(|values| values.collect())
        .unwrap_or_default();
    let files = matches
        .remove_many::<OsString>("files")
        .map(|values| values.collect())
        .unwrap_or_default();
    let chunk_size = matches
        .remove_one::<NonZeroUsize>("chunk-size")
        .unwrap_or(DEFAULT_CHUNK_SIZE);

    let mut verbosity = VerbosityConfig::from_verbose_level(matches.get_count("verbose"));
    for list in matches
        .remove_many::<String>("info")
        .into_iter()
        .flatten()
    {
        verbosity
            .apply_info_flags(&list)
            .map_err(|error| format!("--info: {error}"))?;
    }
    for list in matches
        .remove_many::<String>("debug")
        .into_iter()
        .flatten()
    {
        verbosity
            .apply_debug_flags(&list)
            .map_err(|error| format!("--debug: {error}"))?;
    }

    Ok(ParsedArgs {
        show_help,
        show_version,
        quiet,
        strings,
        files,
        chunk_size,
        verbosity,
    })
}

/// Reduces a clap error to its first line without the `error: ` prefix.
fn clap_error_summary(error: &clap::Error) -> String {
    let rendered = error.to_string();
    let first_line = rendered.lines().next().unwrap_or_default();
    first_line
        .strip_prefix("error: ")
        .unwrap_or(first_line)
        .to_string()
}

/// Renders the help text describing the supported options.
fn render_help() -> String {
    HELP_TEXT.to_string()
}

/// Renders the version banner.
fn render_version() -> String {
    format!("{PROGRAM_NAME} {}\n", env!("CARGO_PKG_VERSION"))
}

/// Runs the CLI using the provided argument iterator and output handles.
///
/// The function returns the process exit code that should be used by the
/// caller: `0` when every input was hashed, `1` on a usage error or when any
/// input could not be read.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    match parse_args(arguments) {
        Ok(parsed) => execute(parsed, stdout, stderr),
        Err(message) => {
            let _ = writeln!(stderr, "{PROGRAM_NAME}: {message}");
            let _ = writeln!(
                stderr,
                "Try '{PROGRAM_NAME} --help' for more information."
            );
            1
        }
    }
}

fn execute<Out, Err>(parsed: ParsedArgs, stdout: &mut Out, stderr: &mut Err) -> i32
where
    Out: Write,
    Err: Write,
{
    if parsed.show_help {
        return write_or_report(stdout, stderr, &render_help());
    }
    if parsed.show_version {
        return write_or_report(stdout, stderr, &render_version());
    }

    logging::init_tracing(parsed.verbosity.clone());
    // Events left over from an earlier run on this thread belong to nobody.
    drain_events();

    match hash_inputs(&parsed, stdout, stderr) {
        Ok(summary) => i32::from(summary.failures > 0),
        Err(error) => {
            let _ = writeln!(stderr, "{PROGRAM_NAME}: error writing output: {error}");
            1
        }
    }
}

fn write_or_report<Out, Err>(stdout: &mut Out, stderr: &mut Err, text: &str) -> i32
where
    Out: Write,
    Err: Write,
{
    match stdout.write_all(text.as_bytes()) {
        Ok(()) => 0,
        Err(error) => {
            let _ = writeln!(stderr, "{PROGRAM_NAME}: error writing output: {error}");
            1
        }
    }
}

/// Counters reported through the `stats` info flag.
#[derive(Debug, Default)]
struct RunSummary {
    inputs: u64,
    bytes: u64,
    failures: u64,
}

impl RunSummary {
    const fn record(&mut self, bytes: u64) {
        self.inputs += 1;
        self.bytes = self.bytes.saturating_add(bytes);
    }
}

/// Hashes every input in order. Only errors writing to `stdout` or `stderr`
/// abort the run.
fn hash_inputs<Out, Err>(
    parsed: &ParsedArgs,
    stdout: &mut Out,
    stderr: &mut Err,
) -> io::Result<RunSummary>
where
    Out: Write,
    Err: Write,
{
    let mut summary = RunSummary::default();

    for text in &parsed.strings {
        trace_name!("hashing string \"{text}\"");
        let digest = Md4::digest(text.as_bytes());
        writeln!(stdout, "{digest}  \"{text}\"")?;
        summary.record(text.len() as u64);
        flush_diagnostics(stderr, parsed.quiet)?;
    }

    let default_operands = [OsString::from(STDIN_OPERAND)];
    let operands = if parsed.files.is_empty() && parsed.strings.is_empty() {
        &default_operands[..]
    } else {
        &parsed.files[..]
    };

    for operand in operands {
        let label = Path::new(operand).display();
        trace_name!("hashing {label}");
        match hash_operand(operand, parsed.chunk_size) {
            Ok((digest, bytes)) => {
                writeln!(stdout, "{digest}  {label}")?;
                summary.record(bytes);
            }
            Err(error) => {
                writeln!(stderr, "{PROGRAM_NAME}: {label}: {error}")?;
                summary.failures += 1;
            }
        }
        flush_diagnostics(stderr, parsed.quiet)?;
    }

    trace_stats!(
        inputs = summary.inputs,
        bytes = summary.bytes,
        failures = summary.failures,
        "hashed {} inputs ({} bytes), {} failed",
        summary.inputs,
        summary.bytes,
        summary.failures
    );
    flush_diagnostics(stderr, parsed.quiet)?;
    stdout.flush()?;

    Ok(summary)
}

fn hash_operand(operand: &OsStr, chunk_size: NonZeroUsize) -> io::Result<(Md4Digest, u64)> {
    if operand == STDIN_OPERAND {
        debug_log!(Io, 1, "reading standard input in {chunk_size}-byte chunks");
        return with_standard_input(|reader| digest_reader(reader, chunk_size));
    }

    let file = File::open(operand)?;
    debug_log!(
        Io,
        1,
        "reading {} in {chunk_size}-byte chunks",
        Path::new(operand).display()
    );
    digest_reader(file, chunk_size)
}

fn with_standard_input<T>(hash: impl FnOnce(&mut dyn Read) -> T) -> T {
    #[cfg(test)]
    if let Some(data) = take_stdin_input() {
        return hash(&mut io::Cursor::new(data));
    }

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    hash(&mut reader)
}

/// Writes the diagnostics collected on this thread to `stderr`.
///
/// Events are drained even when `quiet` is set so they do not leak into the
/// next input's output.
fn flush_diagnostics<Err: Write>(stderr: &mut Err, quiet: bool) -> io::Result<()> {
    let events = drain_events();
    if quiet {
        return Ok(());
    }
    for event in events {
        writeln!(stderr, "{PROGRAM_NAME}: {event}")?;
    }
    Ok(())
}

/// Converts a numeric exit code into an [`std::process::ExitCode`].
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    std::process::ExitCode::from(u8::try_from(clamped).unwrap_or(u8::MAX))
}

#[cfg(test)]
thread_local! {
    static STDIN_INPUT: std::cell::RefCell<Option<Vec<u8>>> = const {
        std::cell::RefCell::new(None)
    };
}

#[cfg(test)]
fn take_stdin_input() -> Option<Vec<u8>> {
    STDIN_INPUT.with(|slot| slot.borrow_mut().take())
}

#[cfg(test)]
fn set_stdin_input(data: Vec<u8>) {
    STDIN_INPUT.with(|slot| *slot.borrow_mut() = Some(data));
}

#[cfg(test)]
mod tests;
