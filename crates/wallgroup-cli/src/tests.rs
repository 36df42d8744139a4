use std::path::{Path, PathBuf};

use serde_json::{json, Value};
use wallgroup_core::Environment;

use super::*;

fn test_config() -> AppConfig {
    AppConfig {
        env: Environment::Test,
        log_level: "info".to_string(),
        vocabulary_path: None,
        max_strip_passes: 10,
        audit_max_distance: 3,
    }
}

fn repo_vocabulary() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/vocabulary.yaml")
}

fn write_catalog(dir: &tempfile::TempDir, items: &Value) -> PathBuf {
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, items.to_string()).expect("write test catalog");
    path
}

fn sample_catalog() -> Value {
    json!([
        { "id": "1", "name": "Retro Esme Aqua Peel & Stick Wallpaper", "price": 39.99 },
        { "id": "2", "name": "Retro Esme Navy Peel & Stick Wallpaper", "price": 39.99 },
        { "id": "3", "name": "Beverly Slopes Pink Peel & Stick Wallpaper", "group": "slopes" },
        { "id": "4", "name": "Dream Garden Teal Wallpaper" },
        { "id": "5", "name": "Dream Garden Honey Wallpaper" }
    ])
}

// ---------------------------------------------------------------------------
// argument parsing
// ---------------------------------------------------------------------------

#[test]
fn parses_normalize_with_several_names() {
    let cli = Cli::try_parse_from(["wallgroup", "normalize", "Oasis Navy", "Cream"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Normalize { ref names } if names == &["Oasis Navy", "Cream"]
    ));
    assert!(cli.vocabulary.is_none());
}

#[test]
fn normalize_requires_a_name() {
    assert!(Cli::try_parse_from(["wallgroup", "normalize"]).is_err());
}

#[test]
fn subcommand_is_required() {
    assert!(Cli::try_parse_from(["wallgroup"]).is_err());
}

#[test]
fn parses_enrich_defaults() {
    let cli = Cli::try_parse_from(["wallgroup", "enrich", "--input", "catalog.json"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Enrich {
            ref input,
            output: None,
            recompute: false,
        } if input == Path::new("catalog.json")
    ));
}

#[test]
fn parses_enrich_with_output_and_recompute() {
    let cli = Cli::try_parse_from([
        "wallgroup",
        "enrich",
        "--input",
        "in.json",
        "--output",
        "out.json",
        "--recompute",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Commands::Enrich {
            output: Some(ref out),
            recompute: true,
            ..
        } if out == Path::new("out.json")
    ));
}

#[test]
fn parses_groups_min_size_default() {
    let cli = Cli::try_parse_from(["wallgroup", "groups", "--input", "c.json"]).unwrap();
    assert!(matches!(cli.command, Commands::Groups { min_size: 1, .. }));
}

#[test]
fn enrich_without_input_is_an_error() {
    assert!(Cli::try_parse_from(["wallgroup", "enrich"]).is_err());
}

#[test]
fn vocabulary_flag_is_global() {
    let cli = Cli::try_parse_from([
        "wallgroup",
        "audit",
        "--input",
        "c.json",
        "--vocabulary",
        "vocab.yaml",
    ])
    .unwrap();
    assert_eq!(cli.vocabulary.as_deref(), Some(Path::new("vocab.yaml")));
    assert!(matches!(cli.command, Commands::Audit { output: None, .. }));
}

// ---------------------------------------------------------------------------
// normalizer construction
// ---------------------------------------------------------------------------

#[test]
fn build_normalizer_defaults_to_builtin_vocabulary() {
    let normalizer = build_normalizer(&test_config(), None).unwrap();
    assert_eq!(normalizer.normalize("Avalon Honey Wallpaper"), "Avalon Honey");
}

#[test]
fn build_normalizer_uses_configured_vocabulary() {
    let config = AppConfig {
        vocabulary_path: Some(repo_vocabulary()),
        ..test_config()
    };
    let normalizer = build_normalizer(&config, None).unwrap();
    assert_eq!(normalizer.normalize("Avalon Honey Wallpaper"), "Avalon");
}

#[test]
fn build_normalizer_flag_overrides_config() {
    let config = AppConfig {
        vocabulary_path: Some(PathBuf::from("/nonexistent/vocabulary.yaml")),
        ..test_config()
    };
    let normalizer = build_normalizer(&config, Some(repo_vocabulary().as_path())).unwrap();
    assert_eq!(normalizer.normalize("Avalon Honey Wallpaper"), "Avalon");
}

#[test]
fn build_normalizer_missing_vocabulary_is_an_error() {
    let err = build_normalizer(&test_config(), Some(Path::new("/nonexistent/vocab.yaml")))
        .expect_err("expected Err for missing vocabulary file");
    assert!(
        format!("{err}").contains("vocabulary"),
        "error should mention the vocabulary file, got: {err}"
    );
}

// ---------------------------------------------------------------------------
// handlers
// ---------------------------------------------------------------------------

#[test]
fn run_normalize_prints_base_name_and_slug() {
    let mut out = Vec::new();
    let names = vec![
        "Retro Esme Aqua Peel & Stick Wallpaper".to_string(),
        "Cream".to_string(),
    ];
    catalog::run_normalize(Normalizer::builtin(), &names, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        [
            "Retro Esme Aqua Peel & Stick Wallpaper\tRetro Esme\tretro-esme",
            "Cream\tCream\tcream",
        ]
    );
}

#[test]
fn run_enrich_writes_groups_and_keeps_extra_fields() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_catalog(&dir, &sample_catalog());
    let output = dir.path().join("enriched.json");

    catalog::run_enrich(Normalizer::builtin(), &input, Some(output.as_path()), false).unwrap();

    let enriched: Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(enriched[0]["group"], "retro-esme");
    assert_eq!(enriched[1]["group"], "retro-esme");
    assert_eq!(enriched[2]["group"], "slopes");
    assert_eq!(enriched[0]["price"], 39.99);
    assert_eq!(enriched.as_array().map(Vec::len), Some(5));
}

#[test]
fn run_enrich_accepts_numeric_ids() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_catalog(
        &dir,
        &json!([
            { "id": "a", "name": "Retro Esme Aqua Peel & Stick Wallpaper" },
            { "id": 42, "name": "Retro Esme Navy Peel & Stick Wallpaper" },
            { "id": 7, "name": "???" }
        ]),
    );
    let output = dir.path().join("enriched.json");

    catalog::run_enrich(Normalizer::builtin(), &input, Some(output.as_path()), false).unwrap();

    let enriched: Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(enriched[1]["id"], "42");
    assert_eq!(enriched[1]["group"], "retro-esme");
    assert_eq!(enriched[2]["group"], "7");
}

#[test]
fn run_enrich_recompute_replaces_curated_group() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_catalog(&dir, &sample_catalog());
    let output = dir.path().join("enriched.json");

    catalog::run_enrich(Normalizer::builtin(), &input, Some(output.as_path()), true).unwrap();

    let enriched: Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(enriched[2]["group"], "beverly-slopes");
}

#[test]
fn run_groups_filters_by_min_size() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_catalog(&dir, &sample_catalog());

    let mut out = Vec::new();
    catalog::run_groups(Normalizer::builtin(), &input, 2, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with("retro-esme (2)\n"));
    assert!(text.contains("  Retro Esme Navy Peel & Stick Wallpaper\n"));
    assert!(!text.contains("slopes"));
}

#[test]
fn run_audit_reports_split_design() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_catalog(&dir, &sample_catalog());
    let output = dir.path().join("audit.json");

    catalog::run_audit(Normalizer::builtin(), &input, Some(output.as_path()), 3).unwrap();

    let suspects: Value = serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    let suspects = suspects.as_array().expect("audit output is an array");
    assert_eq!(suspects.len(), 1);
    assert_eq!(suspects[0]["group_a"], "dream-garden");
    assert_eq!(suspects[0]["group_b"], "dream-garden-honey");
    assert_eq!(suspects[0]["reason"]["kind"], "prefix");
}

#[test]
fn read_catalog_rejects_invalid_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = catalog::read_catalog(&path).expect_err("expected Err for invalid JSON");
    assert!(
        format!("{err}").contains("failed to parse catalog"),
        "unexpected error: {err}"
    );
}

#[test]
fn read_catalog_missing_file_is_an_error() {
    let err = catalog::read_catalog(Path::new("/nonexistent/catalog.json")).unwrap_err();
    assert!(format!("{err}").contains("failed to read catalog"));
}
