//! # CLI Layer
//!
//! One possible UI client for pinbook. This is the only place that:
//! - Parses arguments
//! - Writes to stdout/stderr
//! - Talks to the clipboard and opens links
//! - Asks the user for confirmation
//!
//! Handlers call `PinbookApi`, then render the returned `CmdResult`. Records and
//! values go to stdout; warnings and errors go to stderr so listings stay pipeable.

use super::print::{print_messages, render_full_records, render_record_list};
use super::setup::{
    print_grouped_help, print_help_for_command, print_subcommand_help, Cli, Commands,
    CoreCommands, MiscCommands, RecordCommands,
};
use chrono::Utc;
use clap::Parser;
use colored::Colorize;
use pinbook::api::{CmdMessage, ConfigAction, PinbookApi, SharePayload};
use pinbook::clipboard::copy_to_clipboard;
use pinbook::config::PinbookConfig;
use pinbook::error::{PinbookError, Result};
use pinbook::format::format_identifier;
use pinbook::init::{data_dir, initialize, FsRecordStore};
use pinbook::launcher::open_link;
use pinbook::logging::{init_logging, Verbosity};
use pinbook::share::ShareTarget;
use pinbook::store::LoadReport;
use std::io::{BufRead, Write};

struct AppContext {
    api: PinbookApi<FsRecordStore>,
    config: PinbookConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(Verbosity::from_flags(cli.quiet, cli.verbose));

    if cli.help {
        if cli.command.is_none() {
            print_grouped_help();
        } else {
            print_subcommand_help(&cli.command);
        }
        return Ok(());
    }

    // Commands that never touch the store
    match &cli.command {
        Some(Commands::Core(CoreCommands::Format { raw })) => return handle_format(raw),
        Some(Commands::Misc(MiscCommands::Help { command })) => return handle_help(command),
        _ => {}
    }

    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Core(cmd)) => match cmd {
            CoreCommands::Add { name, identifier } => {
                handle_add(&mut ctx, &name, &identifier.join(" "))
            }
            CoreCommands::List { search } => handle_list(&ctx, search),
            CoreCommands::Format { raw } => handle_format(&raw),
        },
        Some(Commands::Record(cmd)) => match cmd {
            RecordCommands::View { selectors } => handle_view(&ctx, selectors),
            RecordCommands::Edit {
                selector,
                name,
                pin,
            } => handle_edit(&mut ctx, selector, name, pin),
            RecordCommands::Delete { selectors, yes } => handle_delete(&mut ctx, selectors, yes),
            RecordCommands::Share {
                selector,
                via,
                open,
            } => handle_share(&ctx, selector, &via, open),
        },
        Some(Commands::Misc(cmd)) => match cmd {
            MiscCommands::Config { key, value } => handle_config(&mut ctx, key, value),
            MiscCommands::Init => handle_init(&mut ctx),
            MiscCommands::Help { command } => handle_help(&command),
        },
        None => handle_list(&ctx, None),
    }
}

fn init_context() -> Result<AppContext> {
    let dir = data_dir()?;
    let ctx = initialize(&dir)?;
    report_load(&ctx.load_report);

    Ok(AppContext {
        api: ctx.api,
        config: ctx.config,
    })
}

fn report_load(report: &LoadReport) {
    if let Some(backup) = &report.backup_key {
        let what = if report.dropped_duplicates > 0 {
            format!(
                "{} records with duplicate ids were skipped",
                report.dropped_duplicates
            )
        } else {
            "Stored records could not be read and were reset".to_string()
        };
        print_messages(&[CmdMessage::warning(format!(
            "{}. The original data was kept in slot '{}'.",
            what, backup
        ))]);
    }
}

fn handle_add(ctx: &mut AppContext, name: &str, identifier: &str) -> Result<()> {
    let result = ctx.api.add_record(name, identifier)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, search: Option<String>) -> Result<()> {
    let result = ctx.api.list_records(search.as_deref())?;
    print!("{}", render_record_list(&result.listed_records, Utc::now()));
    print_messages(&result.messages);
    Ok(())
}

fn handle_format(raw: &[String]) -> Result<()> {
    println!("{}", format_identifier(&raw.join(" ")));
    Ok(())
}

fn handle_view(ctx: &AppContext, selectors: Vec<String>) -> Result<()> {
    let result = ctx.api.view_records(&selectors)?;
    print!(
        "{}",
        render_full_records(
            &result.listed_records,
            &ctx.config.identifier_label,
            Utc::now()
        )
    );
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    selector: String,
    name: Option<String>,
    pin: Option<String>,
) -> Result<()> {
    let result = ctx
        .api
        .update_record(&selector, name.as_deref(), pin.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, selectors: Vec<String>, yes: bool) -> Result<()> {
    if ctx.config.confirm_delete && !yes {
        let targets = ctx.api.view_records(&selectors)?.listed_records;
        print!("{}", render_record_list(&targets, Utc::now()));
        let prompt = format!("Delete {} record(s)? [y/N] ", targets.len());
        if !confirm(&prompt)? {
            print_messages(&[CmdMessage::info("Nothing deleted.")]);
            return Ok(());
        }
    }

    let result = ctx.api.delete_records(&selectors)?;
    print_messages(&result.messages);
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{}", prompt);
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn handle_share(ctx: &AppContext, selector: String, via: &str, open: bool) -> Result<()> {
    let target: ShareTarget = via.parse().map_err(PinbookError::Api)?;
    let result = ctx.api.share_record(&selector, target)?;
    print_messages(&result.messages);

    if let Some(payload) = result.share {
        deliver(&payload, open);
    }
    Ok(())
}

/// Sends a share to its target. Delivery problems are warnings: the payload is
/// printed instead so nothing is lost.
fn deliver(payload: &SharePayload, open: bool) {
    match payload.target {
        ShareTarget::Clipboard => match copy_to_clipboard(&payload.text) {
            Ok(()) => print_messages(&[CmdMessage::success(format!(
                "Copied {} to the clipboard",
                payload.record.record.name
            ))]),
            Err(e) => {
                print_messages(&[CmdMessage::warning(format!("Clipboard unavailable: {}", e))]);
                println!("{}", payload.text);
            }
        },
        ShareTarget::Message | ShareTarget::Email => {
            println!("{}", payload.content());
            if open {
                if let Err(e) = open_link(payload.content()) {
                    print_messages(&[CmdMessage::warning(format!("Could not open link: {}", e))]);
                }
            }
        }
        ShareTarget::Code => println!("{}", payload.content().bold()),
    }
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        if show_all {
            for (k, v) in config.list_all() {
                println!("{} = {}", k, v);
            }
        }
        ctx.config = config.clone();
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_help(command: &Option<String>) -> Result<()> {
    match command {
        Some(cmd) => print_help_for_command(cmd),
        None => print_grouped_help(),
    }
    Ok(())
}
