use crate::{
    config::Config,
    error::RosterError,
    form::{self, PlayerForm},
    journal::Journal,
    player::Role,
    roster::RosterManager,
    search, table,
};
use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::cell::RefCell;
use std::io::{self, Write};

pub struct Context {
    pub config: Config,
    pub roster: RefCell<RosterManager>,
    pub journal: RefCell<Journal>,
    pub session_id: String,
    pub debug: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

const ADD_USAGE: &str = "Usage: add <id> <name> <role> <matches> <stat>";
const UPDATE_USAGE: &str = "Usage: update <id> <name> <role> <matches> <stat>";

pub fn run_once(ctx: &Context, commands: &[String]) -> Result<()> {
    let mut out = io::stdout();
    for line in commands {
        if handle_line(ctx, line, &mut out)? == Flow::Exit {
            break;
        }
    }
    Ok(())
}

pub fn run_repl(ctx: Context) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    let mut out = io::stdout();

    println!("roster - type /help for commands, /exit to quit");
    print_table(&ctx, &mut out)?;

    loop {
        match rl.readline(ctx.config.prompt()) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                rl.add_history_entry(line)?;

                match handle_line(&ctx, line, &mut out) {
                    Ok(Flow::Exit) => break,
                    Ok(Flow::Continue) => {}
                    Err(e) => eprintln!("Error: {}", e),
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("Input error: {}", e);
                break;
            }
        }
    }

    Ok(())
}

/// Run one input line. Roster failures are reported to `out` and never
/// end the session; only I/O errors are returned.
pub fn handle_line(ctx: &Context, line: &str, out: &mut impl Write) -> Result<Flow> {
    let args = match shell_words::split(line) {
        Ok(args) => args,
        Err(e) => {
            writeln!(out, "Error: {}", e)?;
            return Ok(Flow::Continue);
        }
    };
    let Some(cmd) = args.first() else {
        return Ok(Flow::Continue);
    };
    let rest = &args[1..];

    if ctx.debug {
        eprintln!("[DEBUG] command: {} {:?}", cmd, rest);
    }

    match cmd.as_str() {
        "/exit" | "/quit" => return Ok(Flow::Exit),
        "/help" => print_help(out)?,
        "/session" => {
            writeln!(out, "Session: {}", ctx.session_id)?;
            match &ctx.journal.borrow().path {
                Some(path) => writeln!(out, "Journal: {}", path.display())?,
                None => writeln!(out, "Journal: off")?,
            }
            writeln!(out, "Players: {}", ctx.roster.borrow().len())?;
        }
        "add" => add_player(ctx, rest, out)?,
        "pop" => pop_player(ctx, out)?,
        "update" => update_player(ctx, rest, out)?,
        "delete" => delete_player(ctx, rest, out)?,
        "find" => find_player(ctx, rest, out)?,
        "list" => print_table(ctx, out)?,
        "search" => {
            let query = search_query(line);
            let snapshot = ctx.roster.borrow().list_top_to_bottom();
            let matches = search::filter_players(&snapshot, &query);
            writeln!(out, "{} of {} players match '{}'", matches.len(), snapshot.len(), query.trim())?;
            write!(out, "{}", table::render(&matches))?;
        }
        "size" => writeln!(out, "Total: {}", ctx.roster.borrow().len())?,
        "stat-label" => match form::parse_role(&rest.join(" ")) {
            Ok(role) => writeln!(out, "{}", role.stat_label())?,
            Err(e) => writeln!(out, "Error: {}", e)?,
        },
        _ => writeln!(out, "Unknown command: {}. Type /help for commands.", cmd)?,
    }
    Ok(Flow::Continue)
}

/// Text after the command word, spacing intact. A single quoted word is
/// unquoted.
fn search_query(line: &str) -> String {
    let raw = line
        .trim_start()
        .split_once(char::is_whitespace)
        .map(|(_, rest)| rest.trim())
        .unwrap_or("");
    match shell_words::split(raw) {
        Ok(words) if words.len() == 1 => words.into_iter().next().unwrap_or_default(),
        _ => raw.to_string(),
    }
}

fn add_player(ctx: &Context, args: &[String], out: &mut impl Write) -> Result<()> {
    let Some(player_form) = PlayerForm::from_args(args) else {
        writeln!(out, "{}", ADD_USAGE)?;
        return Ok(());
    };
    let record = match player_form.into_record() {
        Ok(record) => record,
        Err(e) => return report(ctx, "add", &e, out),
    };

    let result = ctx.roster.borrow_mut().insert_top(record.clone());
    if let Err(e) = result {
        return report(ctx, "add", &e, out);
    }

    let size = ctx.roster.borrow().len();
    journal(ctx, |j| j.player_added(&record, size));
    writeln!(out, "Player added. Total: {}", size)?;
    redraw(ctx, out)
}

fn pop_player(ctx: &Context, out: &mut impl Write) -> Result<()> {
    let removed = ctx.roster.borrow_mut().remove_top();
    let Some(player) = removed else {
        return report(ctx, "pop", &RosterError::EmptyRoster, out);
    };

    let size = ctx.roster.borrow().len();
    journal(ctx, |j| j.player_popped(&player, size));
    writeln!(out, "Popped: {}", player.name)?;
    redraw(ctx, out)
}

fn update_player(ctx: &Context, args: &[String], out: &mut impl Write) -> Result<()> {
    let Some(player_form) = PlayerForm::from_args(args) else {
        writeln!(out, "{}", UPDATE_USAGE)?;
        return Ok(());
    };
    let parsed = player_form
        .parse_id()
        .and_then(|id| Ok((id, player_form.into_update()?)));
    let (id, update) = match parsed {
        Ok(parsed) => parsed,
        Err(e) => return report(ctx, "update", &e, out),
    };

    let found = ctx.roster.borrow_mut().update_by_id(id, update);
    if !found {
        return report(ctx, "update", &RosterError::NotFound(id), out);
    }

    if let Some(player) = ctx.roster.borrow().find_by_id(id) {
        journal(ctx, |j| j.player_updated(player));
    }
    writeln!(out, "Updated: ID {}", id)?;
    redraw(ctx, out)
}

fn delete_player(ctx: &Context, args: &[String], out: &mut impl Write) -> Result<()> {
    let id = match form::parse_id(&args.join(" ")) {
        Ok(id) => id,
        Err(e) => return report(ctx, "delete", &e, out),
    };

    let found = ctx.roster.borrow_mut().delete_by_id(id);
    if !found {
        return report(ctx, "delete", &RosterError::NotFound(id), out);
    }

    let size = ctx.roster.borrow().len();
    journal(ctx, |j| j.player_deleted(id, size));
    writeln!(out, "Deleted ID: {}", id)?;
    redraw(ctx, out)
}

fn find_player(ctx: &Context, args: &[String], out: &mut impl Write) -> Result<()> {
    let id = match form::parse_id(&args.join(" ")) {
        Ok(id) => id,
        Err(e) => return report(ctx, "find", &e, out),
    };

    let found = ctx.roster.borrow().find_by_id(id).cloned();
    match found {
        Some(player) => write!(out, "{}", table::render(&[player]))?,
        None => return report(ctx, "find", &RosterError::NotFound(id), out),
    }
    Ok(())
}

/// Show a failure to the user and record it in the journal
fn report(ctx: &Context, command: &str, err: &RosterError, out: &mut impl Write) -> Result<()> {
    let text = match err {
        RosterError::Validation { .. } => match command {
            "add" => "Please enter valid numeric values.",
            "update" => "Enter valid values.",
            _ => "Enter valid ID.",
        },
        RosterError::DuplicateIdentifier(_) => "ID already exists.",
        RosterError::NotFound(_) if command == "delete" => "Not found.",
        RosterError::NotFound(_) => "Player not found.",
        RosterError::EmptyRoster => "Roster is empty.",
    };
    journal(ctx, |j| j.notice(command, err));
    writeln!(out, "{}: {} ({})", err.severity().as_str(), text, err)?;
    Ok(())
}

fn journal(ctx: &Context, f: impl FnOnce(&mut Journal) -> Result<()>) {
    if let Err(e) = f(&mut *ctx.journal.borrow_mut()) {
        eprintln!("Warning: failed to write journal: {}", e);
    }
}

fn redraw(ctx: &Context, out: &mut impl Write) -> Result<()> {
    if ctx.config.redraw_after_mutation() {
        print_table(ctx, out)?;
    }
    Ok(())
}

fn print_table(ctx: &Context, out: &mut impl Write) -> Result<()> {
    let snapshot = ctx.roster.borrow().list_top_to_bottom();
    writeln!(out, "{}", table::TITLE)?;
    write!(out, "{}", table::render(&snapshot))?;
    Ok(())
}

fn print_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Roster:")?;
    writeln!(out, "  add <id> <name> <role> <matches> <stat>    - push a player on top")?;
    writeln!(out, "  pop                                         - remove the most recent player")?;
    writeln!(out, "  update <id> <name> <role> <matches> <stat> - replace a player's fields")?;
    writeln!(out, "  delete <id>                                 - remove a player by id")?;
    writeln!(out, "  find <id>                                   - show one player")?;
    writeln!(out, "  list                                        - show all players, top first")?;
    writeln!(out, "  search <text>                               - filter by id or name")?;
    writeln!(out, "  size                                        - count players")?;
    writeln!(out, "  stat-label <role>                           - Runs or Wickets for a role")?;
    let roles: Vec<&str> = Role::ALL.iter().map(|r| r.as_str()).collect();
    writeln!(out, "Roles: {}", roles.join(", "))?;
    writeln!(out, "Quote names with spaces: add 7 \"MS Dhoni\" Wicket-Keeper 90 4876")?;
    writeln!(out, "Session:")?;
    writeln!(out, "  /help    - show commands")?;
    writeln!(out, "  /session - show session info")?;
    writeln!(out, "  /exit    - quit")?;
    Ok(())
}
