use super::prompt::{Prompter, Terminal};
use super::render::{render_categories, render_messages, render_result};
use super::setup::{get_command_help, get_grouped_help, Command, Line};
use clap::error::ErrorKind;
use clap::Parser;
use directories::ProjectDirs;
use flipwise::api::{CmdResult, ConfigAction, FlipwiseApi};
use flipwise::config::FlipwiseConfig;
use flipwise::controller::DeckController;
use flipwise::error::Result;
use flipwise::model::CardDraft;
use flipwise::store::fs::FileStore;
use flipwise::store::DeckStore;
use std::io;
use std::path::{Path, PathBuf};

const PROMPT: &str = "flipwise> ";
const BANNER: &str = "flipwise: flip through your flashcards. Type `help` for commands.";

struct AppContext<S: DeckStore> {
    api: FlipwiseApi<S>,
    config: FlipwiseConfig,
}

enum Flow {
    Continue,
    Quit,
}

pub fn run() -> Result<()> {
    let config_dir = ProjectDirs::from("com", "flipwise", "flipwise")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".flipwise"));

    let (config, config_error) = match FlipwiseConfig::load(&config_dir) {
        Ok(config) => (config, None),
        Err(e) => (FlipwiseConfig::default(), Some(e)),
    };
    init_logging(&config);
    if let Some(e) = config_error {
        tracing::warn!(error = %e, path = %config_dir.display(), "using default config");
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let api = FlipwiseApi::new(DeckController::new(), FileStore::new(cwd), config_dir);
    let mut ctx = AppContext { api, config };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut terminal = Terminal::new(stdin.lock(), stdout.lock());
    run_session(&mut ctx, &mut terminal)
}

fn init_logging(config: &FlipwiseConfig) {
    // A subscriber may already be set when running under a test harness.
    let _ = tracing_subscriber::fmt()
        .with_max_level(config.level())
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn run_session<S: DeckStore, P: Prompter>(ctx: &mut AppContext<S>, term: &mut P) -> Result<()> {
    term.write(&format!("{}\n", BANNER))?;

    let start = if ctx.config.load_on_start {
        let deck_file = PathBuf::from(&ctx.config.deck_file);
        ctx.api.load_if_present(&deck_file)?
    } else {
        CmdResult::default().with_model(ctx.api.read_model())
    };
    term.write(&render_result(&start))?;

    while let Some(line) = term.read_line(PROMPT)? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let command = match Line::try_parse_from(line.split_whitespace()) {
            Ok(parsed) => parsed.command,
            Err(e) => {
                term.write(&describe_parse_error(line, &e))?;
                continue;
            }
        };
        tracing::debug!(?command, "dispatching");
        if let Flow::Quit = dispatch(ctx, term, command, argument_text(line))? {
            break;
        }
    }

    term.write("Bye!\n")?;
    Ok(())
}

fn describe_parse_error(line: &str, err: &clap::Error) -> String {
    if err.kind() == ErrorKind::InvalidSubcommand {
        let word = line.split_whitespace().next().unwrap_or(line);
        return format!(
            "Unknown command: {}. Type `help` for a list of commands.\n",
            word
        );
    }
    let rendered = err.render().to_string();
    let first = rendered.lines().next().unwrap_or_default();
    format!("{}\n", first.trim_start_matches("error: "))
}

/// Everything typed after the command word, with inner spacing kept.
fn argument_text(line: &str) -> &str {
    line.trim()
        .split_once(char::is_whitespace)
        .map_or("", |(_, rest)| rest.trim())
}

fn dispatch<S: DeckStore, P: Prompter>(
    ctx: &mut AppContext<S>,
    term: &mut P,
    command: Command,
    argument: &str,
) -> Result<Flow> {
    let result = match command {
        Command::Add => match term.ask_card(None)? {
            Some(draft) => ctx.api.add_card(draft)?,
            None => return cancelled(term),
        },
        Command::Edit => handle_edit(ctx, term)?,
        Command::Delete => {
            if ctx.api.has_cards() && !term.confirm("Delete this card?")? {
                return cancelled(term);
            }
            ctx.api.delete_card()?
        }
        Command::Flip => ctx.api.flip(),
        Command::Next => ctx.api.next(),
        Command::Previous => ctx.api.previous(),
        Command::Shuffle => ctx.api.toggle_shuffle(),
        Command::Category { name } => {
            debug_assert_eq!(name.is_empty(), argument.is_empty());
            ctx.api.switch_category(argument)
        }
        Command::Categories => {
            let result = ctx.api.list_categories();
            let active = ctx.api.read_model().filter;
            term.write(&render_messages(&result.messages))?;
            term.write(&render_categories(&result.categories, Some(&active)))?;
            return Ok(Flow::Continue);
        }
        Command::Save { path } => {
            debug_assert_eq!(path.is_empty(), argument.is_empty());
            handle_save(ctx, term, argument)?
        }
        Command::Load { path } => {
            debug_assert_eq!(path.is_empty(), argument.is_empty());
            handle_load(ctx, term, argument)?
        }
        Command::Config { key, value } => handle_config(ctx, key, value)?,
        Command::Help { command } => {
            let help = match command {
                None => get_grouped_help(),
                Some(name) => get_command_help(&name)
                    .unwrap_or_else(|| format!("Unknown command: {}\n", name)),
            };
            term.write(&help)?;
            return Ok(Flow::Continue);
        }
        Command::Quit => return Ok(Flow::Quit),
    };

    term.write(&render_result(&result))?;
    Ok(Flow::Continue)
}

fn cancelled<P: Prompter>(term: &mut P) -> Result<Flow> {
    term.write("Cancelled.\n")?;
    Ok(Flow::Continue)
}

fn handle_edit<S: DeckStore, P: Prompter>(
    ctx: &mut AppContext<S>,
    term: &mut P,
) -> Result<CmdResult> {
    let Some(current) = ctx.api.current_draft() else {
        return ctx.api.edit_card(CardDraft::default());
    };
    match term.ask_card(Some(&current))? {
        Some(draft) => ctx.api.edit_card(draft),
        None => {
            term.write("Cancelled.\n")?;
            Ok(CmdResult::default())
        }
    }
}

/// The path typed after the command, or the one asked for with the configured default.
fn resolve_path<P: Prompter>(
    term: &mut P,
    typed: &str,
    label: &str,
    default: &str,
) -> Result<Option<PathBuf>> {
    if !typed.is_empty() {
        return Ok(Some(PathBuf::from(typed)));
    }
    Ok(term.ask_path(label, default)?)
}

fn handle_save<S: DeckStore, P: Prompter>(
    ctx: &mut AppContext<S>,
    term: &mut P,
    path: &str,
) -> Result<CmdResult> {
    if !ctx.api.has_cards() {
        // Nothing is written; the store reports the empty deck.
        return ctx.api.save(Path::new(&ctx.config.deck_file));
    }
    match resolve_path(term, path, "Save to", &ctx.config.deck_file)? {
        Some(location) => ctx.api.save(&location),
        None => {
            term.write("Cancelled.\n")?;
            Ok(CmdResult::default())
        }
    }
}

fn handle_load<S: DeckStore, P: Prompter>(
    ctx: &mut AppContext<S>,
    term: &mut P,
    path: &str,
) -> Result<CmdResult> {
    let Some(location) = resolve_path(term, path, "Load from", &ctx.config.deck_file)? else {
        term.write("Cancelled.\n")?;
        return Ok(CmdResult::default());
    };
    if ctx.api.has_cards() && !term.confirm("Replace the current deck?")? {
        term.write("Cancelled.\n")?;
        return Ok(CmdResult::default());
    }
    ctx.api.load(&location)
}

fn handle_config<S: DeckStore>(
    ctx: &mut AppContext<S>,
    key: Option<String>,
    value: Option<String>,
) -> Result<CmdResult> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        ctx.config = config.clone();
    }
    Ok(result)
}
