//! Integration test: engines linting small on-disk projects end-to-end.
//!
//! Each test writes a throwaway project into a temp directory, initializes
//! an engine over it with the built-in strategies and checks the result.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use script_lint_core::{Config, ConfigError, LintResult, Severity};
use script_lint_engine::{Engine, EngineError, LintBase, StrategyKind};
use tempfile::TempDir;

fn project(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().expect("temp dir");
    for (path, content) in files {
        let path = dir.path().join(path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(path, content).expect("write fixture file");
    }
    dir
}

async fn init_engine(kind: StrategyKind, root: &Path, toml: &str) -> Engine {
    let config = Config::parse(toml).expect("config should parse");
    let base = LintBase::new(root, Arc::new(config)).expect("base should build");
    let mut engine = Engine::new(kind, base);
    engine.init().await.expect("init should succeed");
    engine
}

async fn lint(kind: StrategyKind, root: &Path, toml: &str) -> LintResult {
    let engine = init_engine(kind, root, toml).await;
    engine.base().run().await.expect("run should succeed")
}

fn summary(result: &LintResult) -> Vec<(PathBuf, usize, &str)> {
    result
        .violations
        .iter()
        .map(|v| (v.location.file.clone(), v.location.line, v.code.as_str()))
        .collect()
}

const APP_JS: &str = r#"var count = 0;
if (count == 1) {
  console.log("one");
}
debugger;
"#;

// ── JavaScript ──

#[tokio::test]
async fn javascript_project_reports_each_rule() {
    let dir = project(&[
        ("src/app.js", APP_JS),
        ("src/app.test.js", "console.log(\"in test\");\n"),
        ("node_modules/lib/index.js", "debugger;\n"),
        ("src/types.ts", "let a: any = 1;\n"),
    ]);

    let result = lint(StrategyKind::JavaScript, dir.path(), "").await;
    let app = PathBuf::from("src/app.js");

    assert_eq!(result.files_checked, 2);
    assert_eq!(
        summary(&result),
        vec![
            (app.clone(), 1, "JS001"),
            (app.clone(), 2, "JS003"),
            (app.clone(), 3, "JS004"),
            (app, 5, "JS002"),
        ]
    );
    assert!(result.has_errors());
}

#[tokio::test]
async fn severity_override_and_disabled_rule_apply() {
    let dir = project(&[("src/app.js", APP_JS)]);
    let toml = r#"
[rules.no-var]
severity = "error"

[rules.no-console]
enabled = false
"#;

    let result = lint(StrategyKind::JavaScript, dir.path(), toml).await;

    assert!(result.violations.iter().all(|v| v.rule != "no-console"));
    let no_var = result
        .violations
        .iter()
        .find(|v| v.rule == "no-var")
        .expect("no-var violation");
    assert_eq!(no_var.severity, Severity::Error);
}

#[tokio::test]
async fn allow_directive_suppresses_violation() {
    let dir = project(&[(
        "index.js",
        "// script-lint: allow(no-debugger) reason=\"local repro\"\ndebugger;\ndebugger;\n",
    )]);

    let result = lint(StrategyKind::JavaScript, dir.path(), "").await;
    assert_eq!(
        summary(&result),
        vec![(PathBuf::from("index.js"), 3, "JS002")]
    );
}

#[tokio::test]
async fn gitignore_and_ignore_file_exclude_targets() {
    let dir = project(&[
        (".gitignore", "build/\n"),
        (".lintignore", "# static assets\npublic/\n"),
        ("build/bundle.js", "debugger;\n"),
        ("public/vendor.js", "debugger;\n"),
        ("index.js", "const ok = 1;\n"),
    ]);

    let engine = init_engine(
        StrategyKind::JavaScript,
        dir.path(),
        "[javascript]\nignore_file = \".lintignore\"\n",
    )
    .await;
    let targets = engine.base().targets().expect("targets");
    assert_eq!(targets, [dir.path().join("index.js")]);
}

#[tokio::test]
async fn ignore_file_uses_gitignore_syntax() {
    let dir = project(&[
        (".eslintignore", "/dist\n*.min.js\n!vendor.min.js\n"),
        ("dist/bundle.js", "debugger;\n"),
        ("src/dist/util.js", "const ok = 1;\n"),
        ("lib/app.min.js", "debugger;\n"),
        ("lib/vendor.min.js", "const ok = 1;\n"),
        ("index.js", "const ok = 1;\n"),
    ]);

    let engine = init_engine(
        StrategyKind::JavaScript,
        dir.path(),
        "[javascript]\nignore_file = \".eslintignore\"\n",
    )
    .await;
    let targets = engine.base().targets().expect("targets");
    assert_eq!(
        targets,
        [
            dir.path().join("index.js"),
            dir.path().join("lib/vendor.min.js"),
            dir.path().join("src/dist/util.js"),
        ]
    );
}

#[tokio::test]
async fn catalog_and_patterns_reflect_strategy() {
    let dir = project(&[]);
    let engine = init_engine(
        StrategyKind::JavaScript,
        dir.path(),
        "[javascript]\nextensions = [\".js\"]\n\n[rules.eqeqeq]\nseverity = \"warning\"\n",
    )
    .await;

    let base = engine.base();
    assert_eq!(base.name().expect("name"), "javascript");
    assert_eq!(base.target_patterns().expect("patterns"), vec!["**/*.js"]);

    let catalog = base.catalog().expect("catalog");
    assert_eq!(catalog.len(), 4);
    let eqeqeq = catalog
        .iter()
        .find(|r| r.name == "eqeqeq")
        .expect("eqeqeq listed");
    assert_eq!(eqeqeq.severity, Severity::Warning);
    assert!(catalog
        .iter()
        .all(|r| r.language == StrategyKind::JavaScript));
}

// ── TypeScript ──

#[tokio::test]
async fn typescript_project_honors_tsconfig_exclude() {
    let dir = project(&[
        (
            "tsconfig.json",
            "{\n  // generated clients\n  \"exclude\": [\"generated\"]\n}\n",
        ),
        ("src/main.ts", "const v: any = load()!;\n"),
        ("src/view.tsx", "export const View = () => <div>{value!}</div>;\n"),
        ("generated/client.ts", "let x: any;\n"),
        ("src/legacy.js", "var old = 1;\n"),
    ]);

    let result = lint(StrategyKind::TypeScript, dir.path(), "").await;

    assert_eq!(result.files_checked, 2);
    assert_eq!(
        summary(&result),
        vec![
            (PathBuf::from("src/main.ts"), 1, "TS001"),
            (PathBuf::from("src/main.ts"), 1, "TS002"),
            (PathBuf::from("src/view.tsx"), 1, "TS002"),
        ]
    );
}

#[tokio::test]
async fn typescript_project_reads_tsc_init_tsconfig() {
    let dir = project(&[
        (
            "tsconfig.json",
            r#"{
  "compilerOptions": {
    "target": "es2016",                                  /* Set the JavaScript language version. */
    "strict": true,                                      /* Enable all strict type-checking options. */
  },
  "exclude": ["out",],
}
"#,
        ),
        ("src/main.ts", "let a: any = 1;\n"),
        ("out/main.ts", "let a: any = 1;\n"),
    ]);

    let engine = init_engine(StrategyKind::TypeScript, dir.path(), "").await;
    let targets = engine.base().targets().expect("targets");
    assert_eq!(targets, [dir.path().join("src/main.ts")]);
}

#[tokio::test]
async fn typescript_catalog_includes_shared_rules() {
    let dir = project(&[]);
    let engine = init_engine(StrategyKind::TypeScript, dir.path(), "").await;

    let codes: Vec<&str> = engine
        .base()
        .catalog()
        .expect("catalog")
        .iter()
        .map(|r| r.code)
        .collect();
    assert_eq!(
        codes,
        vec!["JS001", "JS002", "JS003", "JS004", "TS001", "TS002"]
    );
}

// ── Failures ──

#[tokio::test]
async fn lint_before_init_is_not_initialized() {
    let dir = project(&[("index.js", "debugger;\n")]);
    let base = LintBase::new(dir.path(), Arc::new(Config::new())).expect("base");
    let engine = Engine::new(StrategyKind::JavaScript, base);

    assert!(!engine.is_initialized());
    assert!(matches!(
        engine.base().run().await,
        Err(EngineError::NotInitialized)
    ));
}

#[tokio::test]
async fn invalid_configured_tsconfig_fails_init_without_contents() {
    let dir = project(&[("tsconfig.build.json", "{ not json")]);
    let config = Config::parse("[typescript]\ntsconfig = \"tsconfig.build.json\"\n")
        .expect("config should parse");
    let base = LintBase::new(dir.path(), Arc::new(config)).expect("base");
    let mut engine = Engine::new(StrategyKind::TypeScript, base);

    let err = engine.init().await.expect_err("init should fail");
    assert!(matches!(err, EngineError::Config(ConfigError::Parse { .. })));
    assert!(!engine.is_initialized());
    assert!(!engine.base().is_ready());
}

#[tokio::test]
async fn invalid_default_tsconfig_is_skipped() {
    let dir = project(&[("tsconfig.json", "{ not json"), ("index.ts", "let a: any;\n")]);

    let engine = init_engine(StrategyKind::TypeScript, dir.path(), "").await;
    assert!(engine.is_initialized());
    assert_eq!(
        engine.base().targets().expect("targets"),
        [dir.path().join("index.ts")]
    );
}

#[tokio::test]
async fn invalid_utf8_is_skipped_unless_configured() {
    let dir = project(&[("good.js", "debugger;\n")]);
    std::fs::write(dir.path().join("bad.js"), [0xff, 0xfe, 0x00]).expect("write bad.js");

    let result = lint(StrategyKind::JavaScript, dir.path(), "").await;
    assert_eq!(result.files_checked, 1);
    assert_eq!(result.violations.len(), 1);

    let engine = init_engine(
        StrategyKind::JavaScript,
        dir.path(),
        "[analyzer]\nfail_on_parse_error = true\n",
    )
    .await;
    let err = engine.base().run().await.expect_err("run should fail");
    assert!(matches!(err, EngineError::Parse { path, .. } if path == Path::new("bad.js")));
}
