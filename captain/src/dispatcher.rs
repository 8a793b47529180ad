//! # Dispatcher
//!
//! [`Captain`] is both the builder and the dispatcher. Every `add_*` call
//! returns a new instance wrapping an extended [`ConfigStore`]; the receiver is
//! never touched. [`Captain::command`] resolves the store against the instance
//! itself, picks an order, and folds the response through the matching
//! inspections.

use crate::settings::Settings;
use captain_core::{
    CaptainError, CommandLine, Config, ConfigEntry, ConfigStore, IntoConfigEntries, IntoConfigs,
    Resolution, Resolver, Selector, Tokenizer,
};
use captain_std::{
    process::{Spawned, spawn_order},
    tokenizer::ShellTokenizer,
};
use std::{fmt, sync::Arc};
use tracing::debug;

/// A config whose context is a [`Captain`].
pub type CaptainConfig<R> = Config<Captain<R>, R>;

/// A store entry whose context is a [`Captain`].
pub type CaptainConfigEntry<R> = ConfigEntry<Captain<R>, R>;

/// An immutable command dispatcher producing responses of type `R`.
///
/// # Example
///
/// ```rust,ignore
/// let captain = Captain::new()
///     .add_default_orders(|args: &[String], _: &Captain<Vec<String>>| args.to_vec())
///     .add_inspection("ls", |mut args: Vec<String>| { args.push("--color".into()); args })?;
///
/// assert_eq!(captain.command("ls -la")?, ["ls", "-la", "--color"]);
/// ```
pub struct Captain<R> {
    store: ConfigStore<Captain<R>, R>,
    tokenizer: Arc<dyn Tokenizer>,
    resolver: Resolver,
}

impl<R: 'static> Captain<R> {
    /// Create a dispatcher with no configuration, reading settings from the
    /// environment.
    pub fn new() -> Self {
        Self::with_settings(&Settings::from_env())
    }

    /// Create a dispatcher with no configuration.
    pub fn with_settings(settings: &Settings) -> Self {
        Self {
            store: ConfigStore::new(),
            tokenizer: Arc::new(ShellTokenizer::new()),
            resolver: Resolver::new(settings.diagnostics()),
        }
    }

    /// Return a dispatcher with the same configuration and another tokenizer.
    pub fn with_tokenizer(&self, tokenizer: impl Tokenizer) -> Self {
        Self {
            store: self.store.clone(),
            tokenizer: Arc::new(tokenizer),
            resolver: self.resolver,
        }
    }

    fn extend(&self, entries: Vec<CaptainConfigEntry<R>>) -> Self {
        Self {
            store: self.store.extend(entries),
            tokenizer: Arc::clone(&self.tokenizer),
            resolver: self.resolver,
        }
    }

    /// Register an order for `command_name`.
    ///
    /// A later order for the same name replaces this one at resolution time.
    pub fn add_orders<F>(
        &self,
        command_name: impl Into<String>,
        order: F,
    ) -> Result<Self, CaptainError>
    where
        F: Fn(&[String], &Self) -> R + Send + Sync + 'static,
    {
        let command_name = command_name.into();
        if command_name.is_empty() {
            return Err(CaptainError::invalid_argument(
                "command_name",
                "must not be empty",
            ));
        }
        Ok(self.extend(vec![Config::order(command_name, order).into()]))
    }

    /// Register the default order, used when no named order matches.
    pub fn add_default_orders<F>(&self, order: F) -> Self
    where
        F: Fn(&[String], &Self) -> R + Send + Sync + 'static,
    {
        self.extend(vec![Config::default_order(order).into()])
    }

    /// Register an inspection for commands matching `selector`.
    pub fn add_inspection<F>(
        &self,
        selector: impl Into<Selector>,
        inspection: F,
    ) -> Result<Self, CaptainError>
    where
        F: Fn(R) -> R + Send + Sync + 'static,
    {
        let selector = selector.into();
        if matches!(&selector, Selector::Exact(name) if name.is_empty()) {
            return Err(CaptainError::invalid_argument(
                "command_selector",
                "must not be empty",
            ));
        }
        Ok(self.extend(vec![Config::inspection(selector, inspection).into()]))
    }

    /// Register an inspection for command names matching the regular
    /// expression `pattern`.
    pub fn add_inspection_pattern<F>(
        &self,
        pattern: &str,
        inspection: F,
    ) -> Result<Self, CaptainError>
    where
        F: Fn(R) -> R + Send + Sync + 'static,
    {
        let selector = Selector::pattern(pattern)
            .map_err(|e| CaptainError::invalid_argument("command_selector", e.to_string()))?;
        Ok(self.extend(vec![Config::inspection(selector, inspection).into()]))
    }

    /// Register an inspection applied to every command.
    pub fn add_global_inspection<F>(&self, inspection: F) -> Self
    where
        F: Fn(R) -> R + Send + Sync + 'static,
    {
        self.extend(vec![Config::inspection(Selector::Any, inspection).into()])
    }

    /// Append configs or factories verbatim.
    pub fn add_configs(&self, configs: impl IntoConfigEntries<Self, R>) -> Self {
        self.extend(configs.into_config_entries())
    }

    /// Append a factory producing configs from the dispatcher at resolution
    /// time.
    pub fn add_factory<F, T>(&self, factory: F) -> Self
    where
        F: Fn(&Self) -> T + Send + Sync + 'static,
        T: IntoConfigs<Self, R> + 'static,
    {
        self.extend(vec![ConfigEntry::factory(factory)])
    }

    /// Resolve the current configuration with this dispatcher as context.
    pub fn resolve(&self) -> Result<Resolution<Self, R>, CaptainError> {
        self.resolver.resolve(&self.store, self)
    }

    /// Dispatch a command line.
    ///
    /// Strings are tokenized; argument vectors are used directly. The selected
    /// order receives the argument vector and this dispatcher. Its response is
    /// folded through every matching inspection in registration order.
    pub fn command(&self, input: impl Into<CommandLine>) -> Result<R, CaptainError> {
        let line: CommandLine = input.into();
        let argv = line.parse(self.tokenizer.as_ref())?;
        let command_name = argv.command_name();

        let span = tracing::debug_span!("command", command = command_name);
        let _guard = span.enter();

        let resolution = self.resolve()?;
        let order = resolution.orders.select(command_name).ok_or_else(|| {
            CaptainError::NoOrderFound {
                command: command_name.to_string(),
            }
        })?;

        debug!(args = argv.len(), "dispatching order");
        let response = order.call(&argv, self);
        Ok(resolution.inspections.apply(command_name, response))
    }

    /// Alias for [`Captain::command`].
    pub fn call(&self, input: impl Into<CommandLine>) -> Result<R, CaptainError> {
        self.command(input)
    }

    /// Number of store entries (configs and factories).
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Check if nothing has been configured.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// The underlying config store.
    pub fn store(&self) -> &ConfigStore<Self, R> {
        &self.store
    }

    /// Check whether both dispatchers share the same configuration in memory.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.store.ptr_eq(&other.store)
    }
}

impl Captain<Spawned> {
    /// A dispatcher whose default order runs the command as an external
    /// program, reading settings from the environment.
    pub fn standard() -> Self {
        Self::standard_with_settings(&Settings::from_env())
    }

    /// A dispatcher whose default order runs the command as an external
    /// program.
    pub fn standard_with_settings(settings: &Settings) -> Self {
        Self::with_settings(settings).add_default_orders(spawn_order::<Self>)
    }
}

impl<R: 'static> Default for Captain<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for Captain<R> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            tokenizer: Arc::clone(&self.tokenizer),
            resolver: self.resolver,
        }
    }
}

impl<R> fmt::Debug for Captain<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Captain")
            .field("store", &self.store)
            .field("diagnostics", &self.resolver.diagnostics())
            .finish_non_exhaustive()
    }
}
