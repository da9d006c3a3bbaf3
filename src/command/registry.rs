//! Every command the session understands, with the text `help` prints.

/// Static description of one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandInfo {
    pub name: &'static str,
    pub usage: &'static str,
    /// First line is the summary shown by `help`.
    pub description: &'static str,
}

impl CommandInfo {
    #[must_use]
    pub fn summary(&self) -> &'static str {
        self.description.lines().next().unwrap_or("")
    }
}

pub const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        name: "out",
        usage: "out [hex]",
        description: "Print the color as escape code, rgb() and hex, with a live swatch.\n\
                      A hex argument previews that color instead of the current one.",
    },
    CommandInfo {
        name: "bg",
        usage: "bg <true|false>",
        description: "Choose whether escapes color the background or the text.\n\
                      Anything other than 'true' selects the foreground.",
    },
    CommandInfo {
        name: "-",
        usage: "- <red|green|blue> <amount>",
        description: "Subtract from a channel.\nThe result never drops below 0.",
    },
    CommandInfo {
        name: "+",
        usage: "+ <red|green|blue> <amount>",
        description: "Add to a channel.\nThe result never exceeds 255.",
    },
    CommandInfo {
        name: "=",
        usage: "= <red|green|blue> <value>",
        description: "Set a channel.\nValues are clamped into 0..=255.",
    },
    CommandInfo {
        name: "gui",
        usage: "gui <daemon|wait> <WxH[+X+Y]|-> [hex]",
        description: "Open a window filled with the color.\n\
                      'daemon' lets tintpick exit while the window is open; '-' uses the configured geometry.",
    },
    CommandInfo {
        name: "save",
        usage: "save [file]",
        description: "Append a readable description of the color to a file (default colour.clr).",
    },
    CommandInfo {
        name: "export",
        usage: "export [file]",
        description: "Write the color as a script that 'load' replays (default colour.cp).",
    },
    CommandInfo {
        name: "loadhex",
        usage: "loadhex <hex>",
        description: "Set all three channels from a hex string such as #ff00ff.",
    },
    CommandInfo {
        name: "load",
        usage: "load <file>",
        description: "Run every line of a file as a command.\n\
                      Files written by 'export' restore the exported color.",
    },
    CommandInfo {
        name: "exit",
        usage: "exit [code]",
        description: "Leave tintpick.",
    },
    CommandInfo {
        name: "clear",
        usage: "clear",
        description: "Clear the terminal.",
    },
    CommandInfo {
        name: "help",
        usage: "help",
        description: "List commands.",
    },
];

/// Looks up a command by the name typed at the prompt.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static CommandInfo> {
    COMMANDS.iter().find(|info| info.name == name)
}

/// Name and summary of every command, aligned for the terminal.
#[must_use]
pub fn help_text() -> String {
    let width = COMMANDS.iter().map(|c| c.name.len()).max().unwrap_or(0);
    let mut out = String::from("Commands:\n");
    for info in COMMANDS {
        out.push_str(&format!("  {:<width$}  {}\n", info.name, info.summary()));
    }
    out
}
