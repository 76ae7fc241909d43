//! Command-line surface for the `recipe-kit` binary.
//!
//! The binary only installs error reporting and logging, then delegates to
//! [`run`] so every command can be exercised in tests without spawning a
//! subprocess. Payloads and reports go to the supplied writer; logs go to
//! stderr.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use mockable::Clock;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::boundary::{BoundaryError, decode_create_request, decode_update_request};
use crate::codec::{EncodeError, WIRE_CODEC};
use crate::domain::{Recipe, User};
use crate::dto::{CurrentUserDto, ErrorResponse};
use crate::example_data::{SampleDataError, SampleDataSettings, catalogue, load_samples};
use crate::routes::Endpoint;

/// `recipe-kit` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "recipe-kit",
    about = "Check recipe payloads against the shared wire contract",
    version
)]
pub struct Cli {
    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Decode a payload, validate request bodies, and print the canonical form.
    Check {
        /// Payload type to decode.
        #[arg(long, value_enum)]
        kind: PayloadKind,
        /// Payload file. Reads stdin when omitted.
        #[arg(value_name = "path")]
        path: Option<PathBuf>,
    },
    /// Print the route table.
    Routes,
    /// Print sample recipes in canonical form.
    Samples {
        /// Print the fixed catalogue instead of generated recipes.
        #[arg(long, conflicts_with_all = ["seed", "count"])]
        catalogue: bool,
        /// Seed name to generate from.
        #[arg(long, value_name = "name")]
        seed: Option<String>,
        /// Number of recipes to generate.
        #[arg(long, value_name = "n")]
        count: Option<usize>,
    },
}

impl Command {
    /// Whether the command reads [`SampleDataSettings`]. Only `samples` does,
    /// so the other commands never load configuration.
    #[must_use]
    pub const fn uses_sample_settings(&self) -> bool {
        matches!(self, Self::Samples { .. })
    }
}

/// Payload types understood by `check`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PayloadKind {
    /// `POST /api/recipes` body, decoded and validated.
    Create,
    /// `PUT /api/recipes/{id}` body, decoded and validated.
    Update,
    /// A recipe record.
    Recipe,
    /// A user record.
    User,
    /// The `GET /api/auth/me` projection.
    CurrentUser,
}

/// Errors that stop a command before it can report.
#[derive(Debug, Error)]
pub enum CliError {
    /// The payload could not be read.
    #[error("failed to read payload from {origin}: {source}")]
    Read {
        /// File path or `stdin`.
        origin: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// Output could not be written.
    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
    /// A value could not be encoded.
    #[error(transparent)]
    Encode(#[from] EncodeError),
    /// Sample data could not be produced.
    #[error(transparent)]
    Samples(#[from] SampleDataError),
}

impl CliError {
    /// `true` when output failed because the reader went away, as with
    /// `recipe-kit routes | head -1`.
    #[must_use]
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Write(err) if err.kind() == io::ErrorKind::BrokenPipe)
    }
}

/// How a command finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command did what was asked.
    Success,
    /// The payload was rejected; an error body was printed.
    Rejected,
}

impl Outcome {
    /// `true` for [`Outcome::Success`].
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Result of checking a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckReport {
    /// The payload was accepted; holds its canonical encoding.
    Accepted(String),
    /// The payload was rejected.
    Rejected(ErrorResponse),
}

impl CheckReport {
    /// Text to print: the canonical payload or the encoded error body.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError`] if the error body cannot be encoded.
    pub fn render(&self) -> Result<String, EncodeError> {
        match self {
            Self::Accepted(canonical) => Ok(canonical.clone()),
            Self::Rejected(response) => WIRE_CODEC.encode(response),
        }
    }
}

/// Decode `body` as `kind`, validating request bodies.
///
/// # Errors
///
/// Returns [`EncodeError`] only if an accepted value cannot be re-encoded.
///
/// # Examples
/// ```
/// use recipe_kit::cli::{CheckReport, PayloadKind, check};
///
/// let report = check(PayloadKind::Update, br#"{"servings": 0}"#).expect("encodable");
/// let CheckReport::Rejected(response) = report else {
///     panic!("servings out of range");
/// };
/// assert_eq!(response.error, "Servings must be at least 1");
/// ```
pub fn check(kind: PayloadKind, body: &[u8]) -> Result<CheckReport, EncodeError> {
    match kind {
        PayloadKind::Create => canonical(decode_create_request(body)),
        PayloadKind::Update => canonical(decode_update_request(body)),
        PayloadKind::Recipe => canonical(decode_record::<Recipe>(body)),
        PayloadKind::User => canonical(decode_record::<User>(body)),
        PayloadKind::CurrentUser => canonical(decode_record::<CurrentUserDto>(body)),
    }
}

fn decode_record<T: DeserializeOwned>(body: &[u8]) -> Result<T, BoundaryError> {
    Ok(WIRE_CODEC.decode(body)?)
}

fn canonical<T: Serialize>(decoded: Result<T, BoundaryError>) -> Result<CheckReport, EncodeError> {
    match decoded {
        Ok(value) => Ok(CheckReport::Accepted(WIRE_CODEC.encode(&value)?)),
        Err(err) => Ok(CheckReport::Rejected(ErrorResponse::from(err))),
    }
}

/// The route table, one `METHOD path` per line.
#[must_use]
pub fn render_routes() -> String {
    Endpoint::routes()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Execute a parsed command.
///
/// `settings` supplies the sample defaults; `--seed` and `--count` override
/// them, and either flag selects generation even when the settings ask for
/// the catalogue. `input` is read only by `check` without a path.
///
/// # Errors
///
/// Returns [`CliError`] for I/O, encoding or sample data failures. A rejected
/// payload is not an error; it yields [`Outcome::Rejected`].
pub fn run(
    cli: Cli,
    settings: SampleDataSettings,
    input: &mut dyn Read,
    out: &mut dyn Write,
    clock: &dyn Clock,
) -> Result<Outcome, CliError> {
    match cli.command {
        Command::Check { kind, path } => {
            let body = read_payload(path.as_deref(), input)?;
            let report = check(kind, &body)?;
            writeln!(out, "{}", report.render()?)?;
            if let CheckReport::Rejected(response) = &report {
                debug!(kind = ?kind, error = %response.error, "payload rejected");
                return Ok(Outcome::Rejected);
            }
            Ok(Outcome::Success)
        }
        Command::Routes => {
            writeln!(out, "{}", render_routes())?;
            Ok(Outcome::Success)
        }
        Command::Samples {
            catalogue: use_catalogue,
            seed,
            count,
        } => {
            let from_settings = settings.catalogue && seed.is_none() && count.is_none();
            let samples = if use_catalogue || from_settings {
                catalogue(clock)?
            } else {
                let resolved = SampleDataSettings {
                    catalogue: false,
                    seed_name: seed.or(settings.seed_name),
                    count: count.or(settings.count),
                    registry_path: settings.registry_path,
                };
                load_samples(&resolved, clock)?
            };
            writeln!(out, "{}", WIRE_CODEC.encode(&samples)?)?;
            Ok(Outcome::Success)
        }
    }
}

fn read_payload(path: Option<&Path>, input: &mut dyn Read) -> Result<Vec<u8>, CliError> {
    if let Some(file) = path {
        return fs::read(file).map_err(|source| CliError::Read {
            origin: file.display().to_string(),
            source,
        });
    }
    let mut body = Vec::new();
    input
        .read_to_end(&mut body)
        .map_err(|source| CliError::Read {
            origin: "stdin".to_owned(),
            source,
        })?;
    Ok(body)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use rstest::rstest;

    use super::*;
    use crate::test_support::fixture_clock;

    fn run_with_stdin(args: &[&str], stdin: &str) -> (Outcome, String) {
        let cli = Cli::try_parse_from(args).expect("valid arguments");
        let mut input = Cursor::new(stdin.as_bytes().to_vec());
        let mut out = Vec::new();
        let outcome = run(
            cli,
            SampleDataSettings::default(),
            &mut input,
            &mut out,
            &fixture_clock(),
        )
        .expect("command runs");
        (outcome, String::from_utf8(out).expect("utf-8 output"))
    }

    #[rstest]
    fn check_prints_canonical_create_body() {
        let body = r#"{"tags":[],"servings":1,"prepTime":0,"name":"Toast","instructions":["Toast"],"ingredients":["Bread"],"cookTime":3}"#;
        let (outcome, out) = run_with_stdin(&["recipe-kit", "check", "--kind", "create"], body);

        assert_eq!(outcome, Outcome::Success);
        insta::assert_snapshot!(out.trim_end(), @r#"
        {
          "cookTime": 3,
          "ingredients": [
            "Bread"
          ],
          "instructions": [
            "Toast"
          ],
          "name": "Toast",
          "prepTime": 0,
          "servings": 1,
          "tags": []
        }
        "#);
    }

    #[rstest]
    fn check_reports_rejection_as_error_body() {
        let (outcome, out) = run_with_stdin(
            &["recipe-kit", "check", "--kind", "update"],
            r#"{"prepTime": -5}"#,
        );

        assert_eq!(outcome, Outcome::Rejected);
        assert!(!outcome.is_success());
        insta::assert_snapshot!(out.trim_end(), @r#"
        {
          "error": "Prep time cannot be negative",
          "statusCode": 400
        }
        "#);
    }

    #[rstest]
    #[case(PayloadKind::Recipe)]
    #[case(PayloadKind::User)]
    #[case(PayloadKind::CurrentUser)]
    fn malformed_records_are_rejected(#[case] kind: PayloadKind) {
        let report = check(kind, b"[").expect("encodable");
        let CheckReport::Rejected(response) = report else {
            panic!("expected rejection");
        };
        assert!(response.error.starts_with("incomplete JSON"), "got {}", response.error);
        assert_eq!(response.status_code, Some(400));
    }

    #[rstest]
    fn check_accepts_current_user_projection() {
        let body = br#"{"id":"660E8400-E29B-41D4-A716-446655440000","email":"john.doe@example.com","name":"John Doe"}"#;
        let report = check(PayloadKind::CurrentUser, body).expect("encodable");
        let CheckReport::Accepted(text) = report else {
            panic!("expected acceptance");
        };
        assert!(text.contains("\"id\": \"660e8400-e29b-41d4-a716-446655440000\""));
    }

    #[rstest]
    fn missing_payload_file_is_a_read_error() {
        let args = ["recipe-kit", "check", "--kind", "recipe", "/nonexistent.json"];
        let cli = Cli::try_parse_from(args).expect("valid arguments");
        let err = run(
            cli,
            SampleDataSettings::default(),
            &mut io::empty(),
            &mut Vec::new(),
            &fixture_clock(),
        )
        .expect_err("file is missing");
        assert!(err.to_string().starts_with("failed to read payload from /nonexistent.json"));
    }

    #[rstest]
    fn routes_lists_every_route() {
        let (outcome, out) = run_with_stdin(&["recipe-kit", "routes"], "");
        assert_eq!(outcome, Outcome::Success);
        assert_eq!(out.lines().count(), Endpoint::routes().len());
        assert_eq!(out.lines().next(), Some("GET /api/recipes"));
    }

    #[rstest]
    fn samples_catalogue_prints_owner_and_recipes() {
        let (outcome, out) = run_with_stdin(&["recipe-kit", "samples", "--catalogue"], "");
        assert_eq!(outcome, Outcome::Success);

        let value: serde_json::Value = serde_json::from_str(&out).expect("json output");
        assert_eq!(value["owner"]["name"], "John Doe");
        assert_eq!(value["recipes"].as_array().map(Vec::len), Some(3));
        assert_eq!(value["recipes"][0]["createdAt"], "2024-01-14T10:30:00Z");
    }

    #[rstest]
    fn samples_flags_override_settings() {
        let (_, out) = run_with_stdin(
            &["recipe-kit", "samples", "--seed", "weeknight-supper", "--count", "2"],
            "",
        );
        let value: serde_json::Value = serde_json::from_str(&out).expect("json output");
        assert_eq!(value["recipes"].as_array().map(Vec::len), Some(2));
    }

    #[rstest]
    #[case(&["recipe-kit", "routes"], false)]
    #[case(&["recipe-kit", "check", "--kind", "user"], false)]
    #[case(&["recipe-kit", "samples"], true)]
    fn only_samples_reads_sample_settings(#[case] args: &[&str], #[case] expected: bool) {
        let cli = Cli::try_parse_from(args).expect("valid arguments");
        assert_eq!(cli.command.uses_sample_settings(), expected);
    }

    #[rstest]
    fn catalogue_setting_selects_catalogue() {
        let cli = Cli::try_parse_from(["recipe-kit", "samples"]).expect("valid arguments");
        let settings = SampleDataSettings {
            catalogue: true,
            ..SampleDataSettings::default()
        };
        let mut out = Vec::new();
        run(cli, settings, &mut io::empty(), &mut out, &fixture_clock()).expect("command runs");

        let value: serde_json::Value = serde_json::from_slice(&out).expect("json output");
        assert_eq!(value["recipes"].as_array().map(Vec::len), Some(3));
    }

    #[rstest]
    fn count_flag_above_limit_is_an_error() {
        let args = ["recipe-kit", "samples", "--count", "1000000"];
        let cli = Cli::try_parse_from(args).expect("valid arguments");
        let err = run(
            cli,
            SampleDataSettings::default(),
            &mut io::empty(),
            &mut Vec::new(),
            &fixture_clock(),
        )
        .expect_err("count too large");
        assert!(matches!(
            err,
            CliError::Samples(SampleDataError::CountTooLarge { requested: 1_000_000, .. })
        ));
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[rstest]
    fn closed_output_is_a_broken_pipe() {
        let cli = Cli::try_parse_from(["recipe-kit", "routes"]).expect("valid arguments");
        let err = run(
            cli,
            SampleDataSettings::default(),
            &mut io::empty(),
            &mut ClosedPipe,
            &fixture_clock(),
        )
        .expect_err("pipe is closed");
        assert!(err.is_broken_pipe());
    }

    #[rstest]
    fn other_write_failures_are_not_broken_pipes() {
        let err = CliError::Write(io::ErrorKind::PermissionDenied.into());
        assert!(!err.is_broken_pipe());
    }

    #[rstest]
    fn catalogue_conflicts_with_seed() {
        let result = Cli::try_parse_from(["recipe-kit", "samples", "--catalogue", "--seed", "x"]);
        assert!(result.is_err());
    }
}
