//! Integration test: `Engine::init` sequencing against mock collaborators.
//!
//! The mock factory records every strategy it creates and the mock base
//! records every strategy it receives, so tests can check ordering,
//! short-circuiting and instance identity without touching the filesystem.

use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use script_lint_core::{ConfigError, RuleBox};
use script_lint_engine::{Engine, EngineBase, EngineError, LintStrategy, StrategyFactory, StrategyKind};

type Log = Arc<Mutex<Vec<String>>>;

fn address(strategy: &dyn LintStrategy) -> usize {
    (strategy as *const dyn LintStrategy).cast::<()>() as usize
}

fn validation_error(message: &str) -> EngineError {
    EngineError::Config(ConfigError::Validation(message.to_string()))
}

struct MockStrategy {
    kind: StrategyKind,
    fail: bool,
    log: Log,
    extensions: Vec<String>,
}

#[async_trait]
impl LintStrategy for MockStrategy {
    fn kind(&self) -> StrategyKind {
        self.kind
    }

    async fn init(&mut self) -> Result<(), EngineError> {
        self.log
            .lock()
            .unwrap()
            .push(format!("strategy.init {}", self.kind));
        tokio::task::yield_now().await;
        if self.fail {
            return Err(validation_error("bad strategy config"));
        }
        self.extensions = vec![".mock".to_string()];
        Ok(())
    }

    fn extensions(&self) -> &[String] {
        &self.extensions
    }

    fn exclude_patterns(&self) -> &[String] {
        &[]
    }

    fn language_for(&self, _path: &Path) -> Option<tree_sitter::Language> {
        None
    }

    fn rules(&self) -> &[RuleBox] {
        &[]
    }
}

#[derive(Default)]
struct MockFactory {
    fail_strategy: bool,
    log: Log,
    created: Mutex<Vec<usize>>,
}

impl MockFactory {
    fn created(&self) -> Vec<usize> {
        self.created.lock().unwrap().clone()
    }
}

impl StrategyFactory for MockFactory {
    fn create(&self, kind: StrategyKind) -> Box<dyn LintStrategy> {
        let strategy: Box<dyn LintStrategy> = Box::new(MockStrategy {
            kind,
            fail: self.fail_strategy,
            log: Arc::clone(&self.log),
            extensions: Vec::new(),
        });
        self.created.lock().unwrap().push(address(&*strategy));
        strategy
    }
}

/// What the base saw for one `initialize_contents` call.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Received {
    address: usize,
    kind: StrategyKind,
    initialized: bool,
}

#[derive(Default)]
struct MockBase {
    fail: bool,
    log: Log,
    received: Vec<Received>,
    held: Vec<Box<dyn LintStrategy>>,
}

#[async_trait]
impl EngineBase for MockBase {
    async fn initialize_contents(
        &mut self,
        strategy: Box<dyn LintStrategy>,
    ) -> Result<(), EngineError> {
        self.log
            .lock()
            .unwrap()
            .push(format!("base.initialize_contents {}", strategy.kind()));
        self.received.push(Received {
            address: address(&*strategy),
            kind: strategy.kind(),
            initialized: !strategy.extensions().is_empty(),
        });
        // Keep ownership so addresses stay unique across calls.
        self.held.push(strategy);
        if self.fail {
            return Err(validation_error("bad base contents"));
        }
        Ok(())
    }
}

fn setup(
    kind: StrategyKind,
    fail_strategy: bool,
    fail_base: bool,
) -> (Engine<MockBase>, Arc<MockFactory>, Log) {
    let log = Log::default();
    let factory = Arc::new(MockFactory {
        fail_strategy,
        log: Arc::clone(&log),
        ..MockFactory::default()
    });
    let base = MockBase {
        fail: fail_base,
        log: Arc::clone(&log),
        ..MockBase::default()
    };
    let engine = Engine::with_factory(kind, base, Arc::clone(&factory) as Arc<dyn StrategyFactory>);
    (engine, factory, log)
}

// ── Successful init ──

#[tokio::test]
async fn base_receives_the_initialized_strategy_exactly_once() {
    for kind in StrategyKind::ALL {
        let (mut engine, factory, _) = setup(kind, false, false);
        engine.init().await.expect("init should succeed");

        let created = factory.created();
        let received = &engine.base().received;
        assert_eq!(created.len(), 1);
        assert_eq!(
            received,
            &[Received {
                address: created[0],
                kind,
                initialized: true,
            }]
        );
        assert!(engine.is_initialized());
    }
}

#[tokio::test]
async fn strategy_init_completes_before_base_init() {
    let (mut engine, _, log) = setup(StrategyKind::JavaScript, false, false);
    engine.init().await.expect("init should succeed");

    assert_eq!(
        *log.lock().unwrap(),
        vec![
            "strategy.init javascript".to_string(),
            "base.initialize_contents javascript".to_string(),
        ]
    );
}

#[tokio::test]
async fn javascript_engine_hands_over_a_javascript_strategy() {
    let (mut engine, _, _) = setup(StrategyKind::JavaScript, false, false);
    engine.init().await.expect("init should succeed");

    let received = &engine.base().received;
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].kind, StrategyKind::JavaScript);
}

// ── Failures ──

#[tokio::test]
async fn strategy_failure_short_circuits_base() {
    for kind in StrategyKind::ALL {
        let (mut engine, factory, log) = setup(kind, true, false);
        let err = engine.init().await.expect_err("init should fail");

        assert!(
            matches!(&err, EngineError::Config(ConfigError::Validation(m)) if m == "bad strategy config"),
            "unexpected error: {err:?}"
        );
        assert_eq!(factory.created().len(), 1);
        assert!(engine.base().received.is_empty());
        assert_eq!(log.lock().unwrap().len(), 1);
        assert!(!engine.is_initialized());
    }
}

#[tokio::test]
async fn typescript_config_error_is_propagated_unchanged() {
    let (mut engine, _, _) = setup(StrategyKind::TypeScript, true, false);
    let err = engine.init().await.expect_err("init should fail");

    assert_eq!(err.to_string(), "config validation: bad strategy config");
    assert!(engine.base().received.is_empty());
}

#[tokio::test]
async fn base_failure_is_propagated() {
    for kind in StrategyKind::ALL {
        let (mut engine, _, _) = setup(kind, false, true);
        let err = engine.init().await.expect_err("init should fail");

        assert!(
            matches!(&err, EngineError::Config(ConfigError::Validation(m)) if m == "bad base contents"),
            "unexpected error: {err:?}"
        );
        assert_eq!(engine.base().received.len(), 1);
        assert!(engine.base().received[0].initialized);
        assert!(!engine.is_initialized());
    }
}

// ── Re-initialization ──

#[tokio::test]
async fn second_init_uses_a_new_strategy_instance() {
    for kind in StrategyKind::ALL {
        let (mut engine, factory, _) = setup(kind, false, false);
        engine.init().await.expect("first init should succeed");
        engine.init().await.expect("second init should succeed");

        let created = factory.created();
        assert_eq!(created.len(), 2);
        assert_ne!(created[0], created[1]);

        let received: Vec<usize> = engine.base().received.iter().map(|r| r.address).collect();
        assert_eq!(received, created);
    }
}
