use super::*;
use checksums::md4;
use std::ffi::OsString;
use tempfile::tempdir;

const EMPTY_DIGEST: &str = "31d6cfe0d16ae931b73c59d7e0c089c0";
const ABC_DIGEST: &str = "a448017aaf21d8525fc10ae87aa6729d";
const MESSAGE_DIGEST: &str = "d9130a8164549fe818874806e1c7014b";

fn run_with_args<I, S>(args: I) -> (i32, String, String)
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let code = run(args, &mut stdout, &mut stderr);
    (
        code,
        String::from_utf8(stdout).expect("stdout is UTF-8"),
        String::from_utf8(stderr).expect("stderr is UTF-8"),
    )
}

#[test]
fn version_flag_renders_banner() {
    let (code, stdout, stderr) = run_with_args(["md4sum", "--version"]);

    assert_eq!(code, 0);
    assert!(stderr.is_empty());
    assert_eq!(stdout, render_version());
    assert!(stdout.starts_with("md4sum "));
}

#[test]
fn short_version_flag_renders_banner() {
    let (code, stdout, _) = run_with_args(["md4sum", "-V"]);

    assert_eq!(code, 0);
    assert_eq!(stdout, render_version());
}

#[test]
fn help_flag_renders_static_help_snapshot() {
    let (code, stdout, stderr) = run_with_args(["md4sum", "--help"]);

    assert_eq!(code, 0);
    assert!(stderr.is_empty());
    assert_eq!(stdout, render_help());
}

#[test]
fn short_help_flag_wins_over_inputs() {
    let (code, stdout, _) = run_with_args(["md4sum", "-h", "--string", "abc"]);

    assert_eq!(code, 0);
    assert_eq!(stdout, render_help());
}

#[test]
fn string_input_prints_quoted_text() {
    let (code, stdout, stderr) = run_with_args(["md4sum", "--string", "abc"]);

    assert_eq!(code, 0);
    assert!(stderr.is_empty());
    assert_eq!(stdout, format!("{ABC_DIGEST}  \"abc\"\n"));
}

#[test]
fn repeated_strings_keep_argument_order() {
    let (code, stdout, _) = run_with_args(["md4sum", "-s", "message digest", "-s", ""]);

    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        format!("{MESSAGE_DIGEST}  \"message digest\"\n{EMPTY_DIGEST}  \"\"\n")
    );
}

#[test]
fn files_are_hashed_after_strings() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("abc.txt");
    std::fs::write(&path, b"abc").expect("write input");

    let (code, stdout, stderr) = run_with_args([
        OsString::from("md4sum"),
        path.clone().into_os_string(),
        OsString::from("--string"),
        OsString::from("message digest"),
    ]);

    assert_eq!(code, 0);
    assert!(stderr.is_empty());
    assert_eq!(
        stdout,
        format!(
            "{MESSAGE_DIGEST}  \"message digest\"\n{ABC_DIGEST}  {}\n",
            path.display()
        )
    );
}

#[test]
fn small_chunk_size_produces_same_digest() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("input.bin");
    let data: Vec<u8> = (0..1000u32).map(|i| (i % 251) as u8).collect();
    std::fs::write(&path, &data).expect("write input");

    let expected = format!("{}  {}\n", md4(&data), path.display());
    for chunk_size in ["1", "63", "64", "65", "4096"] {
        let (code, stdout, _) = run_with_args([
            OsString::from("md4sum"),
            OsString::from("--chunk-size"),
            OsString::from(chunk_size),
            path.clone().into_os_string(),
        ]);
        assert_eq!(code, 0, "chunk size {chunk_size}");
        assert_eq!(stdout, expected, "chunk size {chunk_size}");
    }
}

#[test]
fn no_operands_reads_standard_input() {
    set_stdin_input(b"abc".to_vec());

    let (code, stdout, stderr) = run_with_args(["md4sum"]);

    assert_eq!(code, 0);
    assert!(stderr.is_empty());
    assert_eq!(stdout, format!("{ABC_DIGEST}  -\n"));
}

#[test]
fn dash_operand_reads_standard_input() {
    set_stdin_input(Vec::new());

    let (code, stdout, _) = run_with_args(["md4sum", "-s", "abc", "-"]);

    assert_eq!(code, 0);
    assert_eq!(stdout, format!("{ABC_DIGEST}  \"abc\"\n{EMPTY_DIGEST}  -\n"));
}

#[test]
fn missing_file_is_reported_and_remaining_inputs_processed() {
    let dir = tempdir().expect("tempdir");
    let missing = dir.path().join("missing.txt");
    let present = dir.path().join("present.txt");
    std::fs::write(&present, b"abc").expect("write input");

    let (code, stdout, stderr) = run_with_args([
        OsString::from("md4sum"),
        missing.clone().into_os_string(),
        present.clone().into_os_string(),
    ]);

    assert_eq!(code, 1);
    assert_eq!(stdout, format!("{ABC_DIGEST}  {}\n", present.display()));
    assert!(
        stderr.starts_with(&format!("md4sum: {}: ", missing.display())),
        "unexpected diagnostic: {stderr}"
    );
}

#[test]
fn unknown_option_is_a_usage_error() {
    let (code, stdout, stderr) = run_with_args(["md4sum", "--bogus"]);

    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.starts_with("md4sum: "));
    assert!(stderr.contains("--bogus"));
    assert!(stderr.contains("Try 'md4sum --help' for more information."));
}

#[test]
fn zero_chunk_size_is_rejected() {
    let (code, stdout, stderr) = run_with_args(["md4sum", "--chunk-size", "0", "-s", "abc"]);

    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("chunk size must be a positive integer"));
}

#[test]
fn non_numeric_chunk_size_is_rejected() {
    let (code, _, stderr) = run_with_args(["md4sum", "--chunk-size=lots", "-s", "abc"]);

    assert_eq!(code, 1);
    assert!(stderr.contains("--chunk-size"));
}

#[test]
fn unknown_info_flag_is_a_usage_error() {
    let (code, stdout, stderr) = run_with_args(["md4sum", "--info=progress", "-s", "abc"]);

    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.starts_with("md4sum: --info: unknown info flag: progress\n"));
}

#[test]
fn malformed_debug_level_is_a_usage_error() {
    let (code, _, stderr) = run_with_args(["md4sum", "--debug=hash999", "-s", "abc"]);

    assert_eq!(code, 1);
    assert!(stderr.starts_with("md4sum: --debug: invalid level in flag: hash999\n"));
}

#[test]
fn verbose_reports_names_and_statistics() {
    let (code, stdout, stderr) = run_with_args(["md4sum", "-v", "--string", "abc"]);

    assert_eq!(code, 0);
    assert_eq!(stdout, format!("{ABC_DIGEST}  \"abc\"\n"));
    assert_eq!(
        stderr,
        "md4sum: hashing string \"abc\"\nmd4sum: hashed 1 inputs (3 bytes), 0 failed\n"
    );
}

#[test]
fn quiet_suppresses_diagnostics() {
    let (code, stdout, stderr) = run_with_args(["md4sum", "-v", "-q", "--string", "abc"]);

    assert_eq!(code, 0);
    assert_eq!(stdout, format!("{ABC_DIGEST}  \"abc\"\n"));
    assert!(stderr.is_empty());
}

#[test]
fn quiet_still_reports_errors() {
    let dir = tempdir().expect("tempdir");
    let missing = dir.path().join("absent");

    let (code, _, stderr) = run_with_args([
        OsString::from("md4sum"),
        OsString::from("--quiet"),
        missing.clone().into_os_string(),
    ]);

    assert_eq!(code, 1);
    assert!(stderr.contains(&missing.display().to_string()));
}

#[test]
fn stats_flag_counts_failures() {
    let dir = tempdir().expect("tempdir");
    let missing = dir.path().join("absent");

    let (code, _, stderr) = run_with_args([
        OsString::from("md4sum"),
        OsString::from("--info=stats"),
        OsString::from("-s"),
        OsString::from("abc"),
        missing.into_os_string(),
    ]);

    assert_eq!(code, 1);
    assert!(stderr.ends_with("md4sum: hashed 1 inputs (3 bytes), 1 failed\n"));
}

#[test]
fn debug_hash_reports_streamed_digests() {
    set_stdin_input(b"abc".to_vec());

    let (code, _, stderr) = run_with_args(["md4sum", "--debug=hash"]);

    assert_eq!(code, 0);
    assert_eq!(
        stderr,
        format!("md4sum: [hash] md4 {ABC_DIGEST} over 3 bytes\n")
    );
}

#[test]
fn debug_hash_reports_string_digests() {
    let (code, stdout, stderr) = run_with_args(["md4sum", "--debug=hash", "-s", "abc"]);

    assert_eq!(code, 0);
    assert_eq!(stdout, format!("{ABC_DIGEST}  \"abc\"\n"));
    assert_eq!(
        stderr,
        format!("md4sum: [hash] md4 {ABC_DIGEST} over 3 bytes\n")
    );
}

#[test]
fn debug_io_reports_reads() {
    set_stdin_input(b"abc".to_vec());

    let (code, _, stderr) = run_with_args(["md4sum", "--debug=io", "--chunk-size=2"]);

    assert_eq!(code, 0);
    assert!(stderr.contains("md4sum: [io] reading standard input in 2-byte chunks\n"));
    assert!(stderr.contains("md4sum: [io] read 3 bytes in "));
    assert!(!stderr.contains("read chunk"));
}

#[test]
fn debug_io_level_two_reports_each_chunk() {
    set_stdin_input(b"abc".to_vec());

    let (code, _, stderr) = run_with_args(["md4sum", "--debug=io2", "--chunk-size=2"]);

    assert_eq!(code, 0);
    assert_eq!(stderr.matches("[io] read chunk").count(), 2);
}
