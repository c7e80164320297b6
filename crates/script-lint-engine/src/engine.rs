//! The language engine: picks a strategy, initializes it, hands it to a base.

use std::sync::Arc;

use tracing::info;

use crate::base::{EngineBase, LintBase};
use crate::error::EngineError;
use crate::strategy::{DefaultStrategyFactory, StrategyFactory, StrategyKind};

/// A lint engine for one language.
///
/// The language is fixed at construction. Every call to [`Engine::init`]
/// creates a fresh strategy, awaits its initialization and only then passes
/// it to the base, which owns it from that point on.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use script_lint_core::Config;
/// use script_lint_engine::{Engine, LintBase, StrategyKind};
///
/// # async fn example() -> Result<(), script_lint_engine::EngineError> {
/// let base = LintBase::new(".", Arc::new(Config::new()))?;
/// let mut engine = Engine::new(StrategyKind::TypeScript, base);
/// engine.init().await?;
///
/// let result = engine.base().run().await?;
/// println!("{}", result.format_report());
/// # Ok(())
/// # }
/// ```
pub struct Engine<B: EngineBase = LintBase> {
    kind: StrategyKind,
    base: B,
    factory: Arc<dyn StrategyFactory>,
    initialized: bool,
}

impl Engine<LintBase> {
    /// Creates an engine using the built-in strategies, rooted where `base` is.
    #[must_use]
    pub fn new(kind: StrategyKind, base: LintBase) -> Self {
        let factory = DefaultStrategyFactory::new(base.root(), Arc::clone(base.config()));
        Self::with_factory(kind, base, Arc::new(factory))
    }
}

impl<B: EngineBase> Engine<B> {
    /// Creates an engine that obtains strategies from `factory`.
    #[must_use]
    pub fn with_factory(kind: StrategyKind, base: B, factory: Arc<dyn StrategyFactory>) -> Self {
        Self {
            kind,
            base,
            factory,
            initialized: false,
        }
    }

    /// Initializes a new strategy and installs it in the base.
    ///
    /// The base is not touched if strategy initialization fails.
    ///
    /// # Errors
    ///
    /// Returns the error raised by the strategy or the base, unchanged.
    pub async fn init(&mut self) -> Result<(), EngineError> {
        let mut strategy = self.factory.create(self.kind);
        strategy.init().await?;
        self.base.initialize_contents(strategy).await?;
        self.initialized = true;

        info!("{} engine initialized", self.kind);
        Ok(())
    }

    /// Language of this engine.
    #[must_use]
    pub fn kind(&self) -> StrategyKind {
        self.kind
    }

    /// Whether some call to [`Engine::init`] has succeeded.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// The engine base.
    #[must_use]
    pub fn base(&self) -> &B {
        &self.base
    }

    /// Mutable access to the engine base.
    pub fn base_mut(&mut self) -> &mut B {
        &mut self.base
    }

    /// Consumes the engine, returning its base.
    #[must_use]
    pub fn into_base(self) -> B {
        self.base
    }
}
