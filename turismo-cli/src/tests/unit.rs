//! Focused unit tests covering recommend CLI configuration and request parsing.

use super::helpers::{Workspace, adventurous_request, write_request, write_utf8};
use super::*;
use crate::recommend::{
    CatalogChoice, DefaultRecommenderBuilder, RecommendArgs, RecommendConfig,
    config_from_layers_for_test, load_request, run_recommend_with, write_response,
};
use camino::Utf8PathBuf;
use clap::Parser;
use rstest::rstest;
use std::io::{self, ErrorKind, Write};
use turismo_core::{DEFAULT_LIMIT, RecommendationResponse, RequestValidationError};

fn parse_recommend(argv: &[&str]) -> RecommendArgs {
    let cli = Cli::try_parse_from(argv).expect("arguments should parse");
    match cli.command {
        Command::Recommend(args) => args,
    }
}

fn args_with_request(path: &str) -> RecommendArgs {
    RecommendArgs {
        request_path: Some(Utf8PathBuf::from(path)),
        ..RecommendArgs::default()
    }
}

#[rstest]
fn converting_without_request_errors() {
    let err = RecommendConfig::try_from(RecommendArgs::default())
        .expect_err("missing request should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_RECOMMEND_REQUEST);
            assert_eq!(env, ENV_RECOMMEND_REQUEST);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
#[case::request(None, None, CatalogChoice::Request)]
#[case::explicit_false(None, Some(false), CatalogChoice::Request)]
#[case::builtin(None, Some(true), CatalogChoice::Builtin)]
#[case::file(
    Some("catalog.json"),
    Some(false),
    CatalogChoice::File(Utf8PathBuf::from("catalog.json"))
)]
fn catalog_choice_follows_options(
    #[case] catalog: Option<&str>,
    #[case] builtin: Option<bool>,
    #[case] expected: CatalogChoice,
) {
    let args = RecommendArgs {
        catalog: catalog.map(Utf8PathBuf::from),
        builtin_catalog: builtin,
        ..args_with_request("request.json")
    };
    let config = RecommendConfig::try_from(args).expect("config should build");
    assert_eq!(config.catalog, expected);
    assert_eq!(config.limit, DEFAULT_LIMIT);
}

#[rstest]
fn catalog_options_are_mutually_exclusive() {
    let args = RecommendArgs {
        catalog: Some(Utf8PathBuf::from("catalog.json")),
        builtin_catalog: Some(true),
        ..args_with_request("request.json")
    };
    let err = RecommendConfig::try_from(args).expect_err("conflicting catalogs");
    assert!(matches!(err, CliError::ConflictingCatalogs { .. }));
    assert!(err.is_client_error());
}

#[rstest]
fn explicit_limit_is_kept() {
    let args = RecommendArgs {
        limit: Some(2),
        ..args_with_request("request.json")
    };
    let config = RecommendConfig::try_from(args).expect("config should build");
    assert_eq!(config.limit, 2);
}

#[rstest]
#[case::flag_first(&["turismo", "recommend", "--builtin-catalog", "req.json"], Some(true))]
#[case::flag_last(&["turismo", "recommend", "req.json", "--builtin-catalog"], Some(true))]
#[case::explicit_value(&["turismo", "recommend", "--builtin-catalog=false", "req.json"], Some(false))]
#[case::absent(&["turismo", "recommend", "req.json"], None)]
fn builtin_catalog_flag_leaves_request_path_alone(
    #[case] argv: &[&str],
    #[case] builtin: Option<bool>,
) {
    let args = parse_recommend(argv);
    assert_eq!(args.request_path, Some(Utf8PathBuf::from("req.json")));
    assert_eq!(args.builtin_catalog, builtin);
}

#[rstest]
fn zero_limit_is_a_client_error() {
    let args = RecommendArgs {
        limit: Some(0),
        ..args_with_request("request.json")
    };
    let err = RecommendConfig::try_from(args).expect_err("zero limit should be rejected");
    match &err {
        CliError::InvalidLimit { field } => assert_eq!(*field, ARG_RECOMMEND_LIMIT),
        other => panic!("expected InvalidLimit, found {other:?}"),
    }
    assert_eq!(err.exit_code(), 2);
}

#[rstest]
fn zero_limit_from_the_command_line_is_rejected() {
    let args = parse_recommend(&["turismo", "recommend", "req.json", "--limit", "0"]);
    let err = RecommendConfig::try_from(args).expect_err("zero limit should be rejected");
    assert!(matches!(err, CliError::InvalidLimit { .. }));
}

/// Writer whose reader has already gone away.
struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::from(ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Writer that fails for reasons other than a closed pipe.
struct FullDisk;

impl Write for FullDisk {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("disk full"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[rstest]
fn closed_output_pipe_is_not_an_error() {
    let response = RecommendationResponse::new("visitante-1".to_owned(), Vec::new());
    write_response(&mut ClosedPipe, &response).expect("broken pipe should be ignored");
}

#[rstest]
fn other_write_failures_are_reported() {
    let response = RecommendationResponse::new("visitante-1".to_owned(), Vec::new());
    let err = write_response(&mut FullDisk, &response).expect_err("write should fail");
    assert!(matches!(err, CliError::WriteOutput(_)));
    assert_eq!(err.exit_code(), 1);
}

#[rstest]
fn validate_sources_reports_missing_request() {
    let workspace = Workspace::new();
    let config = RecommendConfig {
        request_path: workspace.path("absent.json"),
        catalog: CatalogChoice::Request,
        limit: DEFAULT_LIMIT,
    };
    let err = config.validate_sources().expect_err("missing request");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_RECOMMEND_REQUEST),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_missing_catalog() {
    let workspace = Workspace::new();
    let request_path = workspace.path("request.json");
    write_utf8(&request_path, b"{}");
    let config = RecommendConfig {
        request_path,
        catalog: CatalogChoice::File(workspace.path("catalog.json")),
        limit: DEFAULT_LIMIT,
    };
    let err = config.validate_sources().expect_err("missing catalog");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_RECOMMEND_CATALOG),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_not_file() {
    let workspace = Workspace::new();
    let request_path = workspace.path("request.json");
    std::fs::create_dir(&request_path).expect("request directory");
    let config = RecommendConfig {
        request_path: request_path.clone(),
        catalog: CatalogChoice::Builtin,
        limit: DEFAULT_LIMIT,
    };
    let err = config
        .validate_sources()
        .expect_err("expected directory path to fail validation");
    match err {
        CliError::SourcePathNotFile { field, path } => {
            assert_eq!(field, ARG_RECOMMEND_REQUEST);
            assert_eq!(path, request_path);
        }
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn load_request_reports_open_errors() {
    let workspace = Workspace::new();
    let request_path = workspace.path("request.json");
    let err = load_request(&request_path).expect_err("missing request should error");
    match err {
        CliError::OpenRequest { path, .. } => assert_eq!(path, request_path),
        other => panic!("expected OpenRequest, found {other:?}"),
    }
}

#[rstest]
fn load_request_reports_parse_errors() {
    let workspace = Workspace::new();
    let request_path = workspace.path("request.json");
    write_utf8(&request_path, b"{ not valid json");
    let err = load_request(&request_path).expect_err("invalid JSON should error");
    assert!(matches!(err, CliError::ParseRequest { .. }));
    assert_eq!(err.exit_code(), 2);
}

#[rstest]
fn load_request_decodes_wire_payloads() {
    let workspace = Workspace::new();
    let request_path = workspace.path("request.json");
    write_request(&request_path, &adventurous_request());
    let request = load_request(&request_path).expect("request should load");
    assert_eq!(request, adventurous_request());
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "limit": "many" }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let workspace = Workspace::new();
    let env_request = workspace.path("from-env-request.json");
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "request_path": workspace.path("from-file.json").as_str(),
            "limit": 9,
            "builtin_catalog": true,
        }),
        None,
    );
    composer.push_environment(json!({
        "request_path": env_request.as_str(),
        "limit": 7,
    }));
    composer.push_cli(json!({ "limit": 3 }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.request_path, env_request);
    assert_eq!(config.limit, 3);
    assert_eq!(config.catalog, CatalogChoice::Builtin);
}

#[rstest]
#[case::client(
    CliError::InvalidRequest {
        path: Utf8PathBuf::from("request.json"),
        source: RequestValidationError::MissingInterests,
    },
    true,
    2
)]
#[case::server(CliError::NoRecommendations { user_id: "u".to_owned() }, false, 1)]
#[case::io(
    CliError::WriteOutput(std::io::Error::other("closed pipe")),
    false,
    1
)]
fn exit_codes_separate_client_errors(
    #[case] err: CliError,
    #[case] client: bool,
    #[case] code: i32,
) {
    assert_eq!(err.is_client_error(), client);
    assert_eq!(err.exit_code(), code);
}

#[rstest]
fn default_builder_ranks_request_activities() {
    let workspace = Workspace::new();
    let request_path = workspace.path("request.json");
    write_request(&request_path, &adventurous_request());

    let mut output = Vec::new();
    run_recommend_with(
        args_with_request(request_path.as_str()),
        &DefaultRecommenderBuilder,
        &mut output,
    )
    .expect("recommend should succeed");

    let response: RecommendationResponse =
        serde_json::from_slice(&output).expect("output should be a JSON response");
    assert_eq!(response.user_id, "visitante-1");
    let names: Vec<_> = response
        .recommendations
        .iter()
        .map(|item| item.activity_name.as_str())
        .collect();
    assert_eq!(names, ["Parapente", "Miradores"]);
}
