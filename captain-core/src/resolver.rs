//! # Config Resolution
//!
//! Turns a [`ConfigStore`] into the structures the dispatcher consults:
//!
//! 1. Every factory is called with the context; its output is flattened.
//! 2. Order configs are written into the [`OrderTable`]. A later config for the
//!    same key replaces the earlier one.
//! 3. Inspection configs are appended to the [`InspectionList`]. Nothing is
//!    replaced.
//!
//! Resolution is not cached. It runs in full on every dispatch.

use crate::{
    config::{Config, ConfigEntry},
    error::CaptainError,
    inspection::SharedInspection,
    order::SharedOrder,
    selector::Selector,
    store::ConfigStore,
};
use std::{collections::HashMap, fmt};

/// Whether resolution warnings are logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Diagnostics {
    enabled: bool,
}

impl Diagnostics {
    /// Log resolution warnings.
    pub const fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Stay silent.
    pub const fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Check whether warnings are logged.
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// Orders keyed by command name, plus the default slot.
pub struct OrderTable<C, R> {
    named: HashMap<String, SharedOrder<C, R>>,
    default: Option<SharedOrder<C, R>>,
}

impl<C, R> OrderTable<C, R> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            named: HashMap::new(),
            default: None,
        }
    }

    /// Write an order under `command_name`, or into the default slot for `None`.
    ///
    /// Returns the order that was replaced, if any.
    pub fn insert(
        &mut self,
        command_name: Option<String>,
        order: SharedOrder<C, R>,
    ) -> Option<SharedOrder<C, R>> {
        match command_name {
            Some(name) => self.named.insert(name, order),
            None => self.default.replace(order),
        }
    }

    /// The order registered for exactly `command_name`.
    pub fn get(&self, command_name: &str) -> Option<&SharedOrder<C, R>> {
        self.named.get(command_name)
    }

    /// The default order.
    pub fn default_order(&self) -> Option<&SharedOrder<C, R>> {
        self.default.as_ref()
    }

    /// The order for `command_name`, falling back to the default order.
    pub fn select(&self, command_name: &str) -> Option<&SharedOrder<C, R>> {
        self.get(command_name).or(self.default.as_ref())
    }

    /// Registered command names, in no particular order.
    pub fn command_names(&self) -> impl Iterator<Item = &str> {
        self.named.keys().map(String::as_str)
    }

    /// Number of named orders plus the default order if present.
    pub fn len(&self) -> usize {
        self.named.len() + usize::from(self.default.is_some())
    }

    /// Check if no order is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<C, R> Default for OrderTable<C, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, R> fmt::Debug for OrderTable<C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.command_names().collect();
        names.sort_unstable();
        f.debug_struct("OrderTable")
            .field("named", &names)
            .field("default", &self.default.is_some())
            .finish()
    }
}

/// Inspections in registration order.
pub struct InspectionList<R> {
    entries: Vec<(Selector, SharedInspection<R>)>,
}

impl<R: 'static> InspectionList<R> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an inspection.
    pub fn push(&mut self, selector: Selector, inspection: SharedInspection<R>) {
        self.entries.push((selector, inspection));
    }

    /// Inspections whose selector matches `command_name`, in registration order.
    pub fn matching<'a>(
        &'a self,
        command_name: &'a str,
    ) -> impl Iterator<Item = &'a SharedInspection<R>> + 'a {
        self.entries
            .iter()
            .filter(move |(selector, _)| selector.matches(command_name))
            .map(|(_, inspection)| inspection)
    }

    /// Fold `response` through every inspection matching `command_name`.
    pub fn apply(&self, command_name: &str, response: R) -> R {
        self.entries
            .iter()
            .filter(|(selector, _)| selector.matches(command_name))
            .fold(response, |response, (_selector, inspection)| {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    command = command_name,
                    selector = %_selector,
                    "applying inspection"
                );
                inspection.inspect(response)
            })
    }

    /// Selectors in registration order.
    pub fn selectors(&self) -> impl Iterator<Item = &Selector> {
        self.entries.iter().map(|(selector, _)| selector)
    }

    /// Number of inspections.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<R: 'static> Default for InspectionList<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: 'static> fmt::Debug for InspectionList<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.selectors()).finish()
    }
}

/// The outcome of resolving a store against a context.
pub struct Resolution<C, R> {
    /// Orders by command name.
    pub orders: OrderTable<C, R>,
    /// Inspections in registration order.
    pub inspections: InspectionList<R>,
}

impl<C, R: 'static> fmt::Debug for Resolution<C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolution")
            .field("orders", &self.orders)
            .field("inspections", &self.inspections)
            .finish()
    }
}

/// Resolves config stores.
#[derive(Debug, Clone, Copy, Default)]
pub struct Resolver {
    diagnostics: Diagnostics,
}

impl Resolver {
    /// Create a resolver.
    pub const fn new(diagnostics: Diagnostics) -> Self {
        Self { diagnostics }
    }

    /// The diagnostics setting of this resolver.
    pub const fn diagnostics(&self) -> Diagnostics {
        self.diagnostics
    }

    /// Resolve `store` against `context`.
    pub fn resolve<C: 'static, R: 'static>(
        &self,
        store: &ConfigStore<C, R>,
        context: &C,
    ) -> Result<Resolution<C, R>, CaptainError> {
        let mut resolution = Resolution {
            orders: OrderTable::new(),
            inspections: InspectionList::new(),
        };

        for (position, entry) in store.entries().into_iter().enumerate() {
            match entry {
                ConfigEntry::Static(config) => {
                    self.fold(&mut resolution, position, config.clone())?;
                }
                ConfigEntry::Factory(factory) => {
                    let configs =
                        factory
                            .produce(context)
                            .map_err(|source| CaptainError::InvalidConfig {
                                position,
                                reason: "config factory failed".to_string(),
                                source: Some(source),
                            })?;
                    #[cfg(feature = "tracing")]
                    if configs.is_empty() && self.diagnostics.is_enabled() {
                        tracing::warn!(position, "config factory produced no configs");
                    }
                    for config in configs {
                        self.fold(&mut resolution, position, config)?;
                    }
                }
            }
        }

        Ok(resolution)
    }

    fn fold<C, R: 'static>(
        &self,
        resolution: &mut Resolution<C, R>,
        position: usize,
        config: Config<C, R>,
    ) -> Result<(), CaptainError> {
        match config {
            Config::Order {
                command_name,
                order,
            } => {
                if command_name.as_deref() == Some("") {
                    return Err(CaptainError::invalid_config(
                        position,
                        "order command name must not be empty",
                    ));
                }
                #[cfg(feature = "tracing")]
                let key = command_name.clone();
                let _replaced = resolution.orders.insert(command_name, order);
                #[cfg(feature = "tracing")]
                if _replaced.is_some() && self.diagnostics.is_enabled() {
                    tracing::warn!(
                        position,
                        command = key.as_deref().unwrap_or("<default>"),
                        "order replaces an earlier registration"
                    );
                }
                Ok(())
            }
            Config::Inspection {
                selector,
                inspection,
            } => {
                if matches!(&selector, Selector::Exact(name) if name.is_empty()) {
                    return Err(CaptainError::invalid_config(
                        position,
                        "inspection selector must not be empty",
                    ));
                }
                resolution.inspections.push(selector, inspection);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Diagnostics, Resolver};
    use crate::{
        config::{Config, ConfigEntry},
        error::CaptainError,
        store::ConfigStore,
    };

    type Store = ConfigStore<&'static str, String>;

    fn tagged(
        tag: &'static str,
    ) -> impl Fn(&[String], &&'static str) -> String + Send + Sync + 'static {
        move |_: &[String], _: &&'static str| tag.to_string()
    }

    fn run(store: &Store, name: &str) -> Option<String> {
        let resolution = Resolver::default().resolve(store, &"ctx").unwrap();
        resolution
            .orders
            .select(name)
            .map(|order| order.call(&[name.to_string()], &"ctx"))
    }

    #[test]
    fn test_later_order_replaces_earlier() {
        let store = Store::new().extend([
            Config::order("echo", tagged("first")).into(),
            Config::order("echo", tagged("second")).into(),
        ]);
        assert_eq!(run(&store, "echo").as_deref(), Some("second"));
    }

    #[test]
    fn test_later_default_replaces_earlier() {
        let store = Store::new().extend([
            Config::default_order(tagged("first")).into(),
            Config::default_order(tagged("second")).into(),
        ]);
        assert_eq!(run(&store, "anything").as_deref(), Some("second"));
    }

    #[test]
    fn test_named_wins_over_default() {
        let store = Store::new().extend([
            Config::default_order(tagged("default")).into(),
            Config::order("echo", tagged("echo")).into(),
        ]);
        assert_eq!(run(&store, "echo").as_deref(), Some("echo"));
        assert_eq!(run(&store, "pwd").as_deref(), Some("default"));
    }

    #[test]
    fn test_missing_order() {
        let store = Store::new().push(Config::order("echo", tagged("echo")).into());
        assert!(run(&store, "pwd").is_none());
    }

    #[test]
    fn test_inspections_accumulate() {
        let store = Store::new().extend([
            Config::inspection("echo", |r: String| r + "1").into(),
            Config::inspection("echo", |r: String| r + "2").into(),
        ]);
        let resolution = Resolver::default().resolve(&store, &"ctx").unwrap();
        assert_eq!(resolution.inspections.len(), 2);
        assert_eq!(resolution.inspections.apply("echo", String::new()), "12");
        assert_eq!(resolution.inspections.apply("pwd", String::new()), "");
    }

    #[test]
    fn test_factory_receives_context() {
        let store = Store::new().push(ConfigEntry::factory(|ctx: &&'static str| {
            Config::order(*ctx, tagged("from factory"))
        }));
        let resolution = Resolver::default().resolve(&store, &"greet").unwrap();
        assert!(resolution.orders.get("greet").is_some());
    }

    #[test]
    fn test_factory_configs_keep_store_position() {
        let store = Store::new().extend([
            Config::order("echo", tagged("static")).into(),
            ConfigEntry::factory(|_: &&'static str| {
                vec![
                    Config::order("echo", tagged("factory")),
                    Config::order("pwd", tagged("pwd")),
                ]
            }),
        ]);
        assert_eq!(run(&store, "echo").as_deref(), Some("factory"));
        assert_eq!(run(&store, "pwd").as_deref(), Some("pwd"));
    }

    #[test]
    fn test_failing_factory_is_invalid_config() {
        let store = Store::new().extend([
            Config::default_order(tagged("default")).into(),
            ConfigEntry::factory(|_: &&'static str| Err::<Config<_, String>, _>("broken")),
        ]);
        let err = Resolver::default().resolve(&store, &"ctx").unwrap_err();
        assert!(matches!(err, CaptainError::InvalidConfig { position: 1, .. }));
    }

    #[test]
    fn test_empty_command_name_is_invalid_config() {
        let store = Store::new().push(Config::order("", tagged("nameless")).into());
        let err = Resolver::new(Diagnostics::enabled())
            .resolve(&store, &"ctx")
            .unwrap_err();
        assert!(matches!(err, CaptainError::InvalidConfig { position: 0, .. }));
    }

    #[test]
    fn test_empty_exact_selector_is_invalid_config() {
        let store = Store::new().extend([
            Config::inspection("echo", |r: String| r).into(),
            Config::inspection("", |r: String| r).into(),
        ]);
        let err = Resolver::default().resolve(&store, &"ctx").unwrap_err();
        assert!(matches!(err, CaptainError::InvalidConfig { position: 1, .. }));
    }

    #[test]
    fn test_diagnostics_flag() {
        assert!(Diagnostics::enabled().is_enabled());
        assert!(!Diagnostics::default().is_enabled());
        assert!(!Resolver::default().diagnostics().is_enabled());
    }
}
