use clap::{CommandFactory, Parser, Subcommand};

/// One line typed at the session prompt.
#[derive(Parser, Debug)]
#[command(
    name = "flipwise",
    no_binary_name = true,
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub struct Line {
    #[command(subcommand)]
    pub command: Command,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Study,
    Cards,
    Deck,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Study => "Study:",
            CommandGroup::Cards => "Cards:",
            CommandGroup::Deck => "Deck Files:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    /// Returns the group for a given command name
    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "flip" | "next" | "previous" | "shuffle" | "category" | "categories" => {
                Some(CommandGroup::Study)
            }
            "add" | "edit" | "delete" => Some(CommandGroup::Cards),
            "save" | "load" => Some(CommandGroup::Deck),
            "config" | "help" | "quit" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    /// Returns all groups in display order
    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Study,
            CommandGroup::Cards,
            CommandGroup::Deck,
            CommandGroup::Misc,
        ]
    }
}

/// Returns the grouped command overview shown by `help`.
pub fn get_grouped_help() -> String {
    let cmd = Line::command();
    let mut output = String::new();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = cmd
            .get_subcommands()
            .filter(|sc| CommandGroup::for_command(sc.get_name()) == Some(*group))
            .collect();

        if group_cmds.is_empty() {
            continue;
        }
        output.push_str(&format!("{}\n", group.heading()));
        for sc in group_cmds {
            let names: Vec<&str> = std::iter::once(sc.get_name())
                .chain(sc.get_all_aliases())
                .collect();
            let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
            output.push_str(&format!("  {:<22} {}\n", names.join(", "), about));
        }
        output.push('\n');
    }
    output.push_str("Type `help <command>` for details on one command.\n");
    output
}

/// Returns clap's help for one command, looked up by name or alias.
pub fn get_command_help(name: &str) -> Option<String> {
    let mut cmd = Line::command();
    cmd.find_subcommand_mut(name)
        .map(|sc| sc.render_help().to_string())
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Add a new card
    #[command(alias = "a", display_order = 1)]
    Add,

    /// Edit the card on screen
    #[command(alias = "e", display_order = 2)]
    Edit,

    /// Delete the card on screen
    #[command(aliases = ["d", "rm"], display_order = 3)]
    Delete,

    /// Show the other side of the card
    #[command(alias = "f", display_order = 10)]
    Flip,

    /// Go to the next card
    #[command(alias = "n", display_order = 11)]
    Next,

    /// Go to the previous card
    #[command(aliases = ["p", "prev"], display_order = 12)]
    Previous,

    /// Toggle shuffled order
    #[command(alias = "s", display_order = 13)]
    Shuffle,

    /// Study one category (no name, or "All", for every card)
    #[command(alias = "c", display_order = 14)]
    Category {
        /// Category name, spacing kept as typed
        #[arg(trailing_var_arg = true)]
        name: Vec<String>,
    },

    /// List categories
    #[command(alias = "ls", display_order = 15)]
    Categories,

    /// Save every card to a JSON file
    #[command(display_order = 20)]
    Save {
        /// File to write (prompts with the configured deck file if omitted)
        #[arg(trailing_var_arg = true)]
        path: Vec<String>,
    },

    /// Replace the deck with one loaded from a JSON file
    #[command(display_order = 21)]
    Load {
        /// File to read (prompts with the configured deck file if omitted)
        #[arg(trailing_var_arg = true)]
        path: Vec<String>,
    },

    /// Get or set configuration
    #[command(display_order = 30)]
    Config {
        /// Configuration key (deck-file, load-on-start, log-level)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Show available commands
    #[command(alias = "h", display_order = 31)]
    Help {
        /// Command to get help for
        command: Option<String>,
    },

    /// End the session
    #[command(aliases = ["q", "exit"], display_order = 32)]
    Quit,
}
