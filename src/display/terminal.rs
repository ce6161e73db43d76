//! TTY detection and color support logic

use std::io::IsTerminal;

/// Whether stdout should receive color and style sequences
pub fn color_enabled() -> bool {
    color_enabled_with(|name| std::env::var(name).ok(), std::io::stdout().is_terminal())
}

/// Color decision from an environment lookup and the TTY status of stdout.
///
/// Priority: `NO_COLOR` (https://no-color.org/), then `CLICOLOR_FORCE` other
/// than "0", then `CLICOLOR=0`, then the TTY check.
fn color_enabled_with(env: impl Fn(&str) -> Option<String>, is_tty: bool) -> bool {
    if env("NO_COLOR").is_some() {
        return false;
    }

    if env("CLICOLOR_FORCE").is_some_and(|val| val != "0") {
        return true;
    }

    if env("CLICOLOR").is_some_and(|val| val == "0") {
        return false;
    }

    is_tty
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn env_of(vars: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |name| {
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, val)| val.to_string())
        }
    }

    #[test]
    fn test_tty_decides_without_overrides() {
        assert!(color_enabled_with(env_of(&[]), true));
        assert!(!color_enabled_with(env_of(&[]), false));
    }

    #[test]
    fn test_no_color_disables() {
        assert!(!color_enabled_with(env_of(&[("NO_COLOR", "1")]), true));
    }

    #[test]
    fn test_clicolor_force_enables_when_piped() {
        assert!(color_enabled_with(env_of(&[("CLICOLOR_FORCE", "1")]), false));
        assert!(!color_enabled_with(env_of(&[("CLICOLOR_FORCE", "0")]), false));
    }

    #[test]
    fn test_no_color_overrides_force() {
        let env = env_of(&[("NO_COLOR", "1"), ("CLICOLOR_FORCE", "1")]);
        assert!(!color_enabled_with(env, true));
    }

    #[test]
    fn test_clicolor_zero_disables() {
        assert!(!color_enabled_with(env_of(&[("CLICOLOR", "0")]), true));
    }

    #[test]
    #[serial]
    fn test_process_environment_is_consulted() {
        std::env::set_var("NO_COLOR", "1");
        assert!(!color_enabled());
        std::env::remove_var("NO_COLOR");
    }
}
