#![cfg(feature = "cli")]

use tintpick::color::colorize;
use tintpick::shell::build_prompt;
use tintpick::{Config, Rgb, Session};

fn session(config: Config) -> Session<Vec<u8>, Vec<u8>> {
    Session::with_writers(config, Vec::new(), Vec::new())
}

#[test]
fn plain_prompt_by_default() {
    let mut s = session(Config::default());
    s.dispatch_line("loadhex #ff0000").unwrap();
    assert_eq!(build_prompt(&s), ":: ");
}

#[test]
fn tinted_prompt_follows_the_mix() {
    let mut config = Config::default();
    config.shell.tint_prompt = true;
    let mut s = session(config);

    assert_eq!(build_prompt(&s), colorize(":: ", Rgb::new(0, 0, 0)));

    s.dispatch_line("loadhex #0a05ff").unwrap();
    let prompt = build_prompt(&s);
    assert_eq!(prompt, colorize(":: ", s.state().rgb()));
    assert_eq!(prompt, "\x1b[38;2;10;5;255m:: \x1b[0m");
}

#[test]
fn custom_prompt_is_used() {
    let mut config = Config::default();
    config.shell.prompt = "mix> ".to_string();
    assert_eq!(build_prompt(&session(config.clone())), "mix> ");

    config.shell.tint_prompt = true;
    let mut s = session(config);
    s.dispatch_line("= green 200").unwrap();
    assert_eq!(build_prompt(&s), colorize("mix> ", Rgb::new(0, 200, 0)));
}
