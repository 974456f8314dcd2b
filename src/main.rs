//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use power_rankings::{
    cli::{Commands, ImportCmd, RankCmd, Rankings, TierCmd},
    commands::{
        common::{render_ranking, render_tiers},
        import::{handle_import_espn, handle_import_json, handle_import_sleeper},
        open_session,
        ranking::{handle_rank_move, handle_rank_show},
        serve::handle_serve,
        tiers::{
            handle_tier_add, handle_tier_delete, handle_tier_move, handle_tier_rename,
            handle_tier_show,
        },
    },
    logging::setup_logging,
    session::RankingSession,
    storage::StateDatabase,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = Rankings::parse();
    setup_logging(app.verbose);

    match app.command {
        Commands::Serve { addr } => handle_serve(addr).await.context("ESPN proxy stopped")?,
        command => {
            let mut session =
                open_session(app.db.as_deref()).context("Could not open saved state")?;
            run(command, &mut session).await?;
        }
    }

    Ok(())
}

async fn run(command: Commands, session: &mut RankingSession<StateDatabase>) -> power_rankings::Result<()> {
    match command {
        Commands::Import { source } => match source {
            ImportCmd::Json { path } => handle_import_json(session, &path)?,
            ImportCmd::Sleeper { league_id } => handle_import_sleeper(session, league_id).await?,
            ImportCmd::Espn {
                league_id,
                season,
                proxy_url,
            } => handle_import_espn(session, league_id, season, proxy_url).await?,
        },

        Commands::Rank { cmd } => match cmd {
            RankCmd::Show => handle_rank_show(session),
            RankCmd::Move { from, to } => handle_rank_move(session, from, to)?,
        },

        Commands::Tier { cmd } => match cmd {
            TierCmd::Show => handle_tier_show(session),
            TierCmd::Move {
                from_tier,
                from_pos,
                to_tier,
                to_pos,
            } => handle_tier_move(session, from_tier, from_pos, to_tier, to_pos)?,
            TierCmd::Rename { id, label } => handle_tier_rename(session, &id, &label)?,
            TierCmd::Add => handle_tier_add(session)?,
            TierCmd::Delete { id } => handle_tier_delete(session, &id)?,
        },

        Commands::Show => {
            println!("Power Rankings");
            print!("{}", render_ranking(session.ranking()));
            println!();
            println!("Tiers");
            print!("{}", render_tiers(session.board()));
        }

        Commands::Serve { addr } => handle_serve(addr).await?,
    }

    Ok(())
}
