//! Builder immutability and the accepted config shapes.

use captain::{Captain, CaptainError, Config, ConfigEntry};

mod common;
use common::{Args, echo, quiet, strings, tagged};

#[test]
fn test_add_orders_leaves_receiver_untouched() {
    let base = quiet().add_default_orders(tagged("base"));
    let derived = base.add_default_orders(tagged("derived"));

    assert!(!base.ptr_eq(&derived));
    assert_eq!(base.len(), 1);
    assert_eq!(derived.len(), 2);
    assert_eq!(base.command("ls").unwrap(), "base");
    assert_eq!(derived.command("ls").unwrap(), "derived");
}

#[test]
fn test_siblings_are_independent() {
    let base = quiet().add_default_orders(tagged("default"));
    let with_echo = base.add_orders("echo", tagged("echo")).unwrap();
    let with_pwd = base.add_orders("pwd", tagged("pwd")).unwrap();

    assert_eq!(with_echo.command("pwd").unwrap(), "default");
    assert_eq!(with_pwd.command("echo").unwrap(), "default");
    assert_eq!(with_echo.command("echo").unwrap(), "echo");
    assert_eq!(with_pwd.command("pwd").unwrap(), "pwd");
}

#[test]
fn test_chained_configuration() {
    let captain = quiet()
        .add_orders("echo", tagged("echo"))
        .unwrap()
        .add_orders("pwd", tagged("pwd"))
        .unwrap();
    assert_eq!(captain.len(), 2);
    assert!(matches!(
        captain.command("ls"),
        Err(CaptainError::NoOrderFound { .. })
    ));
}

#[test]
fn test_add_configs_single_config() {
    let captain = quiet().add_configs(Config::order("echo", echo));
    assert_eq!(captain.command("echo hi").unwrap(), strings(&["echo", "hi"]));
}

#[test]
fn test_add_configs_default_config() {
    let captain = quiet().add_configs(Config::default_order(echo));
    assert_eq!(captain.command("anything").unwrap(), strings(&["anything"]));
}

#[test]
fn test_add_configs_array_of_configs() {
    let captain = quiet().add_configs([
        Config::order("echo", tagged("echo")),
        Config::order("pwd", tagged("pwd")),
    ]);
    assert_eq!(captain.len(), 2);
    assert_eq!(captain.command("echo").unwrap(), "echo");
    assert_eq!(captain.command("pwd").unwrap(), "pwd");
}

#[test]
fn test_add_configs_single_factory() {
    let captain = quiet().add_configs(ConfigEntry::factory(|_: &Captain<String>| {
        Config::order("echo", tagged("echo"))
    }));
    assert_eq!(captain.len(), 1);
    assert_eq!(captain.command("echo").unwrap(), "echo");
}

#[test]
fn test_add_configs_array_of_factories() {
    let captain = quiet().add_configs([
        ConfigEntry::factory(|_: &Captain<String>| Config::order("echo", tagged("echo"))),
        ConfigEntry::factory(|_: &Captain<String>| Config::order("pwd", tagged("pwd"))),
    ]);
    assert_eq!(captain.command("echo").unwrap(), "echo");
    assert_eq!(captain.command("pwd").unwrap(), "pwd");
}

#[test]
fn test_factory_returning_many_configs() {
    let captain = quiet().add_factory(|_| {
        vec![
            Config::order("echo", tagged("echo")),
            Config::order("pwd", tagged("pwd")),
        ]
    });
    assert_eq!(captain.len(), 1);
    assert_eq!(captain.command("echo").unwrap(), "echo");
    assert_eq!(captain.command("pwd").unwrap(), "pwd");
}

#[test]
fn test_mixed_entries_keep_order() {
    let captain = quiet::<Args>().add_configs(vec![
        ConfigEntry::from(Config::default_order(|_: &[String], _: &Captain<Args>| {
            strings(&["static"])
        })),
        ConfigEntry::factory(|_: &Captain<Args>| Config::default_order(echo)),
    ]);
    assert_eq!(captain.command("ls").unwrap(), strings(&["ls"]));
}

#[test]
fn test_global_inspection_without_selector() {
    let captain = quiet()
        .add_default_orders(echo)
        .add_global_inspection(|r: Args| r.into_iter().rev().collect());
    assert_eq!(captain.command("a b").unwrap(), strings(&["b", "a"]));
}
