//! # Configs
//!
//! A [`Config`] declares one order or one inspection. A [`ConfigEntry`] is what
//! the store actually holds: either a static config, or a [`ConfigFactory`] that
//! produces configs from the context when the store is resolved.
//!
//! Factories are expected to be referentially transparent for a given context.
//! Resolution calls them on every dispatch.

use crate::{
    error::BoxError,
    inspection::{Inspection, SharedInspection},
    order::{Order, SharedOrder},
    selector::Selector,
};
use std::{fmt, sync::Arc};

/// The kind of a [`Config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKind {
    /// A named or default handler.
    Order,
    /// A selector-qualified response transformer.
    Inspection,
}

impl fmt::Display for ConfigKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigKind::Order => f.write_str("order"),
            ConfigKind::Inspection => f.write_str("inspection"),
        }
    }
}

/// The immutable declaration of one order or one inspection.
pub enum Config<C, R> {
    /// An order, keyed by command name or stored in the default slot.
    Order {
        /// Exact-match key; `None` is the default order.
        command_name: Option<String>,
        /// The handler.
        order: SharedOrder<C, R>,
    },
    /// An inspection applied to commands matching `selector`.
    Inspection {
        /// Which command names this inspection applies to.
        selector: Selector,
        /// The transformer.
        inspection: SharedInspection<R>,
    },
}

impl<C: 'static, R: 'static> Config<C, R> {
    /// Declare an order for `command_name`.
    pub fn order<F>(command_name: impl Into<String>, order: F) -> Self
    where
        F: Fn(&[String], &C) -> R + Send + Sync + 'static,
    {
        Self::from_order(Some(command_name.into()), order)
    }

    /// Declare the default order.
    pub fn default_order<F>(order: F) -> Self
    where
        F: Fn(&[String], &C) -> R + Send + Sync + 'static,
    {
        Self::from_order(None, order)
    }

    /// Declare an order from any [`Order`] implementation.
    pub fn from_order(command_name: Option<String>, order: impl Order<C, R>) -> Self {
        Config::Order {
            command_name,
            order: Arc::new(order),
        }
    }

    /// Declare an inspection.
    pub fn inspection<F>(selector: impl Into<Selector>, inspection: F) -> Self
    where
        F: Fn(R) -> R + Send + Sync + 'static,
    {
        Self::from_inspection(selector.into(), inspection)
    }

    /// Declare an inspection from any [`Inspection`] implementation.
    pub fn from_inspection(selector: Selector, inspection: impl Inspection<R>) -> Self {
        Config::Inspection {
            selector,
            inspection: Arc::new(inspection),
        }
    }
}

impl<C, R> Config<C, R> {
    /// The kind of this config.
    pub fn kind(&self) -> ConfigKind {
        match self {
            Config::Order { .. } => ConfigKind::Order,
            Config::Inspection { .. } => ConfigKind::Inspection,
        }
    }

    /// The command name of an order config.
    pub fn command_name(&self) -> Option<&str> {
        match self {
            Config::Order { command_name, .. } => command_name.as_deref(),
            Config::Inspection { .. } => None,
        }
    }

    /// The selector of an inspection config.
    pub fn selector(&self) -> Option<&Selector> {
        match self {
            Config::Order { .. } => None,
            Config::Inspection { selector, .. } => Some(selector),
        }
    }
}

impl<C, R> Clone for Config<C, R> {
    fn clone(&self) -> Self {
        match self {
            Config::Order {
                command_name,
                order,
            } => Config::Order {
                command_name: command_name.clone(),
                order: Arc::clone(order),
            },
            Config::Inspection {
                selector,
                inspection,
            } => Config::Inspection {
                selector: selector.clone(),
                inspection: Arc::clone(inspection),
            },
        }
    }
}

impl<C, R> fmt::Debug for Config<C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Config::Order { command_name, .. } => f
                .debug_struct("Order")
                .field("command_name", command_name)
                .finish_non_exhaustive(),
            Config::Inspection { selector, .. } => f
                .debug_struct("Inspection")
                .field("selector", selector)
                .finish_non_exhaustive(),
        }
    }
}

/// Conversion of a factory's output into a flat list of configs.
///
/// # Default Implementations
///
/// - `Config` → one config
/// - `Vec<Config>` / `[Config; N]` → each config, in order
/// - `Option<T>` → `None` produces nothing
/// - `Result<T, E>` → delegates to `T` or fails resolution with `E`
pub trait IntoConfigs<C, R> {
    /// Flatten into configs, or report why the factory failed.
    fn into_configs(self) -> Result<Vec<Config<C, R>>, BoxError>;
}

impl<C, R> IntoConfigs<C, R> for Config<C, R> {
    fn into_configs(self) -> Result<Vec<Config<C, R>>, BoxError> {
        Ok(vec![self])
    }
}

impl<C, R> IntoConfigs<C, R> for Vec<Config<C, R>> {
    fn into_configs(self) -> Result<Vec<Config<C, R>>, BoxError> {
        Ok(self)
    }
}

impl<C, R, const N: usize> IntoConfigs<C, R> for [Config<C, R>; N] {
    fn into_configs(self) -> Result<Vec<Config<C, R>>, BoxError> {
        Ok(self.into())
    }
}

impl<C, R, T: IntoConfigs<C, R>> IntoConfigs<C, R> for Option<T> {
    fn into_configs(self) -> Result<Vec<Config<C, R>>, BoxError> {
        match self {
            Some(t) => t.into_configs(),
            None => Ok(Vec::new()),
        }
    }
}

impl<C, R, T, E> IntoConfigs<C, R> for Result<T, E>
where
    T: IntoConfigs<C, R>,
    E: Into<BoxError>,
{
    fn into_configs(self) -> Result<Vec<Config<C, R>>, BoxError> {
        self.map_err(Into::into)?.into_configs()
    }
}

/// A function producing configs from the context at resolution time.
pub trait ConfigFactory<C, R>: Send + Sync + 'static {
    /// Produce the configs for `context`.
    fn produce(&self, context: &C) -> Result<Vec<Config<C, R>>, BoxError>;
}

impl<F, C, R> ConfigFactory<C, R> for F
where
    F: Fn(&C) -> Result<Vec<Config<C, R>>, BoxError> + Send + Sync + 'static,
{
    fn produce(&self, context: &C) -> Result<Vec<Config<C, R>>, BoxError> {
        (self)(context)
    }
}

/// One element of a config store.
pub enum ConfigEntry<C, R> {
    /// A config used as-is.
    Static(Config<C, R>),
    /// A factory called with the context during resolution.
    Factory(Arc<dyn ConfigFactory<C, R>>),
}

impl<C: 'static, R: 'static> ConfigEntry<C, R> {
    /// Wrap a factory function. Its output may be anything implementing
    /// [`IntoConfigs`].
    pub fn factory<F, T>(factory: F) -> Self
    where
        F: Fn(&C) -> T + Send + Sync + 'static,
        T: IntoConfigs<C, R>,
    {
        ConfigEntry::Factory(Arc::new(move |context: &C| factory(context).into_configs()))
    }
}

impl<C, R> ConfigEntry<C, R> {
    /// The static config, if this entry is not a factory.
    pub fn as_static(&self) -> Option<&Config<C, R>> {
        match self {
            ConfigEntry::Static(config) => Some(config),
            ConfigEntry::Factory(_) => None,
        }
    }
}

impl<C, R> From<Config<C, R>> for ConfigEntry<C, R> {
    fn from(config: Config<C, R>) -> Self {
        ConfigEntry::Static(config)
    }
}

impl<C, R> Clone for ConfigEntry<C, R> {
    fn clone(&self) -> Self {
        match self {
            ConfigEntry::Static(config) => ConfigEntry::Static(config.clone()),
            ConfigEntry::Factory(factory) => ConfigEntry::Factory(Arc::clone(factory)),
        }
    }
}

impl<C, R> fmt::Debug for ConfigEntry<C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigEntry::Static(config) => f.debug_tuple("Static").field(config).finish(),
            ConfigEntry::Factory(_) => f.write_str("Factory(..)"),
        }
    }
}

/// Anything `add_configs` accepts: a single config or entry, or a sequence.
pub trait IntoConfigEntries<C, R> {
    /// Convert into store entries, preserving order.
    fn into_config_entries(self) -> Vec<ConfigEntry<C, R>>;
}

impl<C, R> IntoConfigEntries<C, R> for Config<C, R> {
    fn into_config_entries(self) -> Vec<ConfigEntry<C, R>> {
        vec![ConfigEntry::Static(self)]
    }
}

impl<C, R> IntoConfigEntries<C, R> for ConfigEntry<C, R> {
    fn into_config_entries(self) -> Vec<ConfigEntry<C, R>> {
        vec![self]
    }
}

impl<C, R> IntoConfigEntries<C, R> for Vec<Config<C, R>> {
    fn into_config_entries(self) -> Vec<ConfigEntry<C, R>> {
        self.into_iter().map(ConfigEntry::Static).collect()
    }
}

impl<C, R> IntoConfigEntries<C, R> for Vec<ConfigEntry<C, R>> {
    fn into_config_entries(self) -> Vec<ConfigEntry<C, R>> {
        self
    }
}

impl<C, R, const N: usize> IntoConfigEntries<C, R> for [Config<C, R>; N] {
    fn into_config_entries(self) -> Vec<ConfigEntry<C, R>> {
        self.into_iter().map(ConfigEntry::Static).collect()
    }
}

impl<C, R, const N: usize> IntoConfigEntries<C, R> for [ConfigEntry<C, R>; N] {
    fn into_config_entries(self) -> Vec<ConfigEntry<C, R>> {
        self.into()
    }
}
