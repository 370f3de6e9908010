//! The `text-compare` command line driver.
//!
//! Reads two documents from the configured data directory, scores them and
//! reports the result on stderr. Failures become exit codes here and nowhere
//! else.

use std::path::PathBuf;

use crate::config::Config;
use crate::error::{CompareError, Result};
use crate::services::{CompareService, FileTextSource, TextSource};
use crate::utils::{format_score, SimilarityReport};

pub const USAGE: &str = "usage: text-compare [--config <path>] <file1> <file2>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub file1: String,
    pub file2: String,
    pub config_path: Option<PathBuf>,
}

impl CliArgs {
    /// Parses the arguments following the program name.
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config_path = None;
        let mut files = Vec::new();

        let mut args = args.into_iter().map(Into::into);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" | "-c" => {
                    let path = args.next().ok_or_else(|| {
                        CompareError::InputMissing(format!("{} requires a path", arg))
                    })?;
                    config_path = Some(PathBuf::from(path));
                }
                _ => files.push(arg),
            }
        }

        if files.len() > 2 {
            tracing::warn!("Ignoring extra arguments: {:?}", &files[2..]);
        }
        let mut files = files.into_iter();
        match (files.next(), files.next()) {
            (Some(file1), Some(file2)) => Ok(Self {
                file1,
                file2,
                config_path,
            }),
            _ => Err(CompareError::InputMissing(
                "two file arguments are required".to_string(),
            )),
        }
    }
}

/// Reads both documents through `source` and scores them.
pub fn run<S>(args: &CliArgs, source: &S, service: &CompareService) -> Result<SimilarityReport>
where
    S: TextSource + ?Sized,
{
    tracing::info!("Driver: About to ingest and process texts.");

    let doc1 = source.read_text(&args.file1)?;
    let doc2 = source.read_text(&args.file2)?;

    service.compare(&doc1, &doc2)
}

/// Full driver: parse, configure, compare, report. Returns the exit code.
pub fn main_with_args<I, S>(args: I) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args = match CliArgs::parse(args) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", USAGE);
            return e.exit_code();
        }
    };

    match execute(&args) {
        Ok(report) => {
            let line = score_line(report.score);
            tracing::info!("{}", line);
            eprintln!("{}", line);
            0
        }
        Err(e) => {
            tracing::error!("Process failure: {}", e);
            eprintln!("Process failure: {}", e);
            e.exit_code()
        }
    }
}

pub fn score_line(score: f64) -> String {
    format!("text comparison score:  {}", format_score(score))
}

fn execute(args: &CliArgs) -> Result<SimilarityReport> {
    let config = Config::discover(args.config_path.as_deref())?;
    let service = CompareService::from_config(&config.comparison)?;
    let source = FileTextSource::new(&config.comparison.data_dir);
    run(args, &source, &service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::MockTextSource;
    use crate::utils::{SimilarityAlgorithm, StopWords};
    use mockall::predicate::eq;
    use rstest::rstest;

    fn args(file1: &str, file2: &str) -> CliArgs {
        CliArgs {
            file1: file1.to_string(),
            file2: file2.to_string(),
            config_path: None,
        }
    }

    fn service() -> CompareService {
        CompareService::new(StopWords::new(["the", "on"]), SimilarityAlgorithm::Jaccard)
    }

    #[test]
    fn parses_two_files() {
        let parsed = CliArgs::parse(["a.txt", "b.txt"]).unwrap();
        assert_eq!(parsed, args("a.txt", "b.txt"));
    }

    #[test]
    fn parses_config_flag_anywhere() {
        let parsed = CliArgs::parse(["a.txt", "--config", "conf/alt.json", "b.txt"]).unwrap();
        assert_eq!(parsed.config_path, Some(PathBuf::from("conf/alt.json")));
        assert_eq!(parsed.file2, "b.txt");
    }

    #[rstest]
    #[case(&[])]
    #[case(&["only-one.txt"])]
    #[case(&["a.txt", "b.txt", "--config"])]
    #[case(&["--config", "conf.json", "a.txt"])]
    fn missing_arguments_are_usage_errors(#[case] argv: &[&str]) {
        let err = CliArgs::parse(argv.iter().copied()).unwrap_err();
        assert!(matches!(err, CompareError::InputMissing(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn run_reads_both_documents_and_scores() {
        let mut source = MockTextSource::new();
        source
            .expect_read_text()
            .with(eq("doc1.txt"))
            .times(1)
            .returning(|_| Ok("The Cat sat on the MAT.".to_string()));
        source
            .expect_read_text()
            .with(eq("doc2.txt"))
            .times(1)
            .returning(|_| Ok("the cat ran on the mat".to_string()));

        let report = run(&args("doc1.txt", "doc2.txt"), &source, &service()).unwrap();
        assert_eq!(report.score, 0.5);
    }

    #[test]
    fn run_propagates_read_failures() {
        let mut source = MockTextSource::new();
        source.expect_read_text().returning(|name| {
            Err(CompareError::Io {
                path: PathBuf::from(name),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            })
        });

        let err = run(&args("doc1.txt", "doc2.txt"), &source, &service()).unwrap_err();
        assert!(matches!(err, CompareError::Io { .. }));
    }

    #[test]
    fn run_surfaces_zero_overlap() {
        let mut source = MockTextSource::new();
        source
            .expect_read_text()
            .returning(|_| Ok("the on THE".to_string()));

        let err = run(&args("doc1.txt", "doc2.txt"), &source, &service()).unwrap_err();
        assert!(matches!(err, CompareError::ZeroOverlap));
    }

    #[test]
    fn score_line_always_shows_a_fraction() {
        assert_eq!(score_line(1.0), "text comparison score:  1.0");
        assert_eq!(score_line(0.0), "text comparison score:  0.0");
        assert_eq!(score_line(0.5), "text comparison score:  0.5");
    }

    #[test]
    fn main_exits_with_usage_code_on_missing_arguments() {
        assert_eq!(main_with_args(["just-one.txt"]), 2);
    }
}
