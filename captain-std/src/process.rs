//! External process execution, used as the default order.

use std::{
    io,
    process::{Child, Command, Stdio},
};

/// The response of the default order: the running child process, or the
/// launch failure.
pub type Spawned = io::Result<Child>;

/// Launch `program` with `args`, inheriting the standard streams.
///
/// The child is returned without waiting for it.
pub fn spawn(program: &str, args: &[String]) -> Spawned {
    #[cfg(feature = "tracing")]
    tracing::debug!(program, ?args, "spawning process");

    Command::new(program)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
}

/// An order that runs the command as an external program.
///
/// The first element of `args` is the program, the rest its arguments.
pub fn spawn_order<C>(args: &[String], _context: &C) -> Spawned {
    match args.split_first() {
        Some((program, rest)) => spawn(program, rest),
        None => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "no program to spawn",
        )),
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::{spawn, spawn_order};

    #[test]
    fn test_spawn_true() {
        let mut child = spawn("true", &[]).unwrap();
        assert!(child.wait().unwrap().success());
    }

    #[test]
    fn test_spawn_order_passes_arguments() {
        let args = vec!["sh".to_string(), "-c".to_string(), "exit 3".to_string()];
        let mut child = spawn_order(&args, &()).unwrap();
        assert_eq!(child.wait().unwrap().code(), Some(3));
    }

    #[test]
    fn test_missing_program_is_reported_by_io() {
        let args = vec!["captain-definitely-not-a-program".to_string()];
        let err = spawn_order(&args, &()).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn test_empty_args() {
        let err = spawn_order(&[], &()).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    }
}
