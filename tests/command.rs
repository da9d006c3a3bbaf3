use tintpick::command::{COMMANDS, WindowSize, help_text, lookup};
use tintpick::{Adjustment, Channel, Command, CommandLine, Error, Geometry};

fn parse(line: &str) -> Result<Command, Error> {
    Command::parse(line).map(|c| c.expect("line is not blank"))
}

#[test]
fn split_tokenizes_on_whitespace() {
    let cl = CommandLine::split("  +   red\t10 ").unwrap();
    assert_eq!(cl.name, "+");
    assert_eq!(cl.args, vec!["red", "10"]);
}

#[test]
fn blank_lines_yield_no_command() {
    assert!(CommandLine::split("   ").is_none());
    assert!(Command::parse("").unwrap().is_none());
}

#[test]
fn parses_adjustments() {
    assert_eq!(
        parse("+ red 10").unwrap(),
        Command::Adjust {
            op: Adjustment::Add,
            channel: Channel::Red,
            amount: 10
        }
    );
    assert_eq!(
        parse("- green -3").unwrap(),
        Command::Adjust {
            op: Adjustment::Subtract,
            channel: Channel::Green,
            amount: -3
        }
    );
    assert_eq!(
        parse("= blue 255").unwrap(),
        Command::Adjust {
            op: Adjustment::Set,
            channel: Channel::Blue,
            amount: 255
        }
    );
}

#[test]
fn adjustment_errors_are_typed() {
    assert!(matches!(parse("+ alpha 5"), Err(Error::InvalidChannel(c)) if c == "alpha"));
    assert!(matches!(parse("+ red ten"), Err(Error::Parse(v)) if v == "ten"));
    assert!(matches!(parse("+ red"), Err(Error::Usage(_))));
    assert!(matches!(parse("="), Err(Error::Usage(_))));
}

#[test]
fn unknown_names_are_not_found() {
    assert!(matches!(parse("paint red"), Err(Error::CommandNotFound(n)) if n == "paint"));
}

#[test]
fn bg_is_true_only_for_literal_true() {
    assert_eq!(parse("bg true").unwrap(), Command::Background { enabled: true });
    assert_eq!(parse("bg yes").unwrap(), Command::Background { enabled: false });
    assert_eq!(parse("bg True").unwrap(), Command::Background { enabled: false });
    assert!(matches!(parse("bg"), Err(Error::Usage(_))));
}

#[test]
fn optional_arguments() {
    assert_eq!(parse("out").unwrap(), Command::Out { hex: None });
    assert_eq!(
        parse("out #ff00ff").unwrap(),
        Command::Out {
            hex: Some("#ff00ff".to_string())
        }
    );
    assert_eq!(parse("save").unwrap(), Command::Save { path: None });
    assert_eq!(
        parse("export ~/c.cp").unwrap(),
        Command::Export {
            path: Some("~/c.cp".to_string())
        }
    );
    assert_eq!(parse("exit").unwrap(), Command::Exit { code: 0 });
    assert_eq!(parse("exit 3").unwrap(), Command::Exit { code: 3 });
    assert!(matches!(parse("exit x"), Err(Error::Parse(_))));
}

#[test]
fn parses_gui_arguments() {
    assert_eq!(
        parse("gui daemon 200x100 #123456").unwrap(),
        Command::Gui {
            daemon: true,
            size: WindowSize::Explicit(Geometry::new(200, 100)),
            hex: Some("#123456".to_string())
        }
    );
    assert_eq!(
        parse("gui wait -").unwrap(),
        Command::Gui {
            daemon: false,
            size: WindowSize::Default,
            hex: None
        }
    );
    assert!(matches!(parse("gui daemon"), Err(Error::Usage(_))));
    assert!(matches!(
        parse("gui daemon big"),
        Err(Error::InvalidGeometry(_))
    ));
}

#[test]
fn geometry_parses_size_and_position() {
    assert_eq!("300x200".parse::<Geometry>().unwrap(), Geometry::new(300, 200));
    assert_eq!(
        "300x200+10+20".parse::<Geometry>().unwrap(),
        Geometry::new(300, 200).at(10, 20)
    );
    assert_eq!(
        "300x200-10+20".parse::<Geometry>().unwrap(),
        Geometry::new(300, 200).at(-10, 20)
    );
    for bad in ["", "300", "0x10", "x10", "300x200+", "300x200+10", "axb"] {
        assert!(bad.parse::<Geometry>().is_err(), "{bad} should be rejected");
    }
}

#[test]
fn geometry_display_round_trips() {
    let geometry = Geometry::new(300, 200).at(-10, 20);
    assert_eq!(geometry.to_string(), "300x200-10+20");
    assert_eq!(geometry.to_string().parse::<Geometry>().unwrap(), geometry);
}

#[test]
fn registry_is_complete() {
    for name in [
        "out", "bg", "-", "+", "=", "gui", "save", "export", "loadhex", "load", "exit", "clear",
        "help",
    ] {
        assert!(lookup(name).is_some(), "{name} missing from registry");
    }
    assert_eq!(COMMANDS.len(), 13);
}

#[test]
fn help_lists_first_description_line() {
    let help = help_text();
    for info in COMMANDS {
        assert!(help.contains(info.name));
        assert!(help.contains(info.summary()));
    }
    assert!(!help.contains("The result never drops below 0."));
}
