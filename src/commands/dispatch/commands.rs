//! Command implementations for all gradebook commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use gradebook_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        dispatch_command::execute(self, ctx)
    }
}

pub(super) mod dispatch_command {
    use super::*;

    use crate::cli::paths::resolve_store_path;
    use crate::cli::{AddArgs, ImportArgs, ListArgs, ReportArgs};
    use crate::commands;
    use crate::commands::dispatch::trace_command;
    use gradebook_core::store::Store;

    pub(super) fn execute(cmd: &Commands, ctx: &CommandContext) -> Result<()> {
        match cmd {
            Commands::Init => execute_init(ctx),
            Commands::Add(args) => execute_add(ctx, args),
            Commands::Import(args) => execute_import(ctx, args),
            Commands::Delete { id } => execute_delete(ctx, id),
            Commands::Search { key } => execute_search(ctx, key),
            Commands::List(args) => execute_list(ctx, args),
            Commands::Report(args) => execute_report(ctx, args),
            Commands::Stats => execute_stats(ctx),
            Commands::Rank => execute_rank(ctx),
        }
    }

    fn open_store(ctx: &CommandContext) -> Result<Store> {
        let store = ctx.discover_or_open_store()?;
        trace_command!(ctx.cli, ctx.start, "discover_store");
        Ok(store)
    }

    fn execute_init(ctx: &CommandContext) -> Result<()> {
        let store = match &ctx.cli.store {
            Some(path) => Store::init_at(&resolve_store_path(ctx.root, path))?,
            None => Store::init(ctx.root)?,
        };
        commands::init::execute(ctx.cli, &store)?;
        trace_command!(ctx.cli, ctx.start, "execute_command");
        Ok(())
    }

    fn execute_add(ctx: &CommandContext, args: &AddArgs) -> Result<()> {
        let mut store = open_store(ctx)?;
        commands::add::execute(ctx.cli, &mut store, args)?;
        trace_command!(ctx.cli, ctx.start, "execute_command");
        Ok(())
    }

    fn execute_import(ctx: &CommandContext, args: &ImportArgs) -> Result<()> {
        let mut store = open_store(ctx)?;
        commands::import::execute(ctx.cli, &mut store, &args.file)?;
        trace_command!(ctx.cli, ctx.start, "execute_command");
        Ok(())
    }

    fn execute_delete(ctx: &CommandContext, id: &str) -> Result<()> {
        let mut store = open_store(ctx)?;
        commands::delete::execute(ctx.cli, &mut store, id)?;
        trace_command!(ctx.cli, ctx.start, "execute_command");
        Ok(())
    }

    fn execute_search(ctx: &CommandContext, key: &str) -> Result<()> {
        let mut store = open_store(ctx)?;
        commands::search::execute(ctx.cli, &mut store, key)?;
        trace_command!(ctx.cli, ctx.start, "execute_command");
        Ok(())
    }

    fn execute_list(ctx: &CommandContext, args: &ListArgs) -> Result<()> {
        let mut store = open_store(ctx)?;
        commands::list::execute(ctx.cli, &mut store, args)?;
        trace_command!(ctx.cli, ctx.start, "execute_command");
        Ok(())
    }

    fn execute_report(ctx: &CommandContext, args: &ReportArgs) -> Result<()> {
        let mut store = open_store(ctx)?;
        let threshold = args.threshold.unwrap_or(store.config().report_threshold);
        commands::report::execute(ctx.cli, &mut store, threshold)?;
        trace_command!(ctx.cli, ctx.start, "execute_command");
        Ok(())
    }

    fn execute_stats(ctx: &CommandContext) -> Result<()> {
        let mut store = open_store(ctx)?;
        commands::stats::execute(ctx.cli, &mut store)?;
        trace_command!(ctx.cli, ctx.start, "execute_command");
        Ok(())
    }

    fn execute_rank(ctx: &CommandContext) -> Result<()> {
        let mut store = open_store(ctx)?;
        commands::rank::execute(ctx.cli, &mut store)?;
        trace_command!(ctx.cli, ctx.start, "execute_command");
        Ok(())
    }
}
