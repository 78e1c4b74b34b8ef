use super::{gift_board, history_table, rng_from_seed, stop_report, SetupArgs};
use crate::config::CliConfig;
use crate::reward::RewardPicker;
use anyhow::{anyhow, Result};
use dialoguer::{Confirm, MultiSelect};
use giftswap_core::{DrawSession, GamePhase, GiftId, ParticipantId};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::io::Write;

pub async fn play(config: &CliConfig, args: &SetupArgs, auto: bool, seed: Option<u64>) -> Result<()> {
    let mut session = args.build_session(config)?;
    let rewards = RewardPicker::new(&config.videos)?;
    if rewards.is_empty() {
        tracing::debug!("No reward videos configured");
    }
    let mut rng = rng_from_seed(seed);

    loop {
        if !auto && args.exclude.is_empty() {
            choose_participants(&mut session)?;
        }

        session.start()?;
        println!();
        println!("{} participants, {} gifts.", session.eligible_count(), session.gifts().len());
        println!("{} opens the exchange.", session.config().host_name);

        while session.phase() == GamePhase::Playing {
            if !play_turn(&mut session, config, &rewards, &mut rng, auto).await? {
                println!("{}", stop_report(&session));
                return Ok(());
            }
        }

        println!();
        println!("------ ALL GIFTS DRAWN! ------");
        println!("Merry Christmas!");
        println!("{}", history_table(session.history()));

        if auto || !Confirm::new().with_prompt("Play again?").default(false).interact()? {
            return Ok(());
        }
        session.reset();
    }
}

/// Let the host opt seats in or out. The host is always in.
fn choose_participants(session: &mut DrawSession) -> Result<()> {
    let seats: Vec<(ParticipantId, String, bool)> = session
        .roster()
        .participants()
        .iter()
        .filter(|p| !p.is_host())
        .map(|p| (p.id(), p.name().to_string(), p.is_eligible()))
        .collect();

    let names: Vec<&str> = seats.iter().map(|(_, name, _)| name.as_str()).collect();
    let defaults: Vec<bool> = seats.iter().map(|(_, _, eligible)| *eligible).collect();

    let chosen = MultiSelect::new()
        .with_prompt("Who is taking part today? (space to toggle, enter to start)")
        .items(&names)
        .defaults(&defaults)
        .interact()?;

    for (i, (id, _, _)) in seats.iter().enumerate() {
        session.set_eligibility(*id, chosen.contains(&i))?;
    }

    Ok(())
}

/// One turn. Returns false when the user stops the exchange.
async fn play_turn(
    session: &mut DrawSession,
    config: &CliConfig,
    rewards: &RewardPicker,
    rng: &mut StdRng,
    auto: bool,
) -> Result<bool> {
    let drawer = session
        .current_drawer()
        .and_then(|id| session.roster().get(id))
        .map(|p| p.name().to_string())
        .ok_or_else(|| anyhow!("No drawer while playing"))?;

    println!();
    println!("Up next: {}  (gifts left: {})", drawer, session.available_gifts().len());
    println!("{}", gift_board(session));

    if !auto
        && !Confirm::new()
            .with_prompt("Start the draw?")
            .default(true)
            .interact()?
    {
        return Ok(false);
    }

    let gift = spin(session, config, rng).await?;
    let outcome = session.apply_draw(gift)?;

    println!("{} got gift No. {:02}!", outcome.record.drawer_name, gift);
    println!("{}", gift_board(session));
    if let Some(reward) = rewards.pick(rng) {
        println!("Congratulations! Video {}: {}", reward.id, reward.url);
    }

    tracing::debug!("Next drawer: {:?}", outcome.next_drawer);
    Ok(true)
}

/// Flash random previews, then settle on the gift to commit.
async fn spin(session: &DrawSession, config: &CliConfig, rng: &mut StdRng) -> Result<GiftId> {
    let available = session.available_gifts();
    let timing = config.spin_timing(session.is_host_opening());

    let mut stdout = std::io::stdout();
    for _ in 0..timing.frames {
        if let Some(preview) = available.choose(rng) {
            print!("\r  Drawing... {:02}", preview);
            stdout.flush()?;
        }
        tokio::time::sleep(timing.interval).await;
    }

    let gift = session
        .resolve_gift(rng)
        .ok_or_else(|| anyhow!("No gift available to draw"))?;
    println!("\r  Drawing... {:02}", gift);
    tokio::time::sleep(timing.reveal_delay).await;

    Ok(gift)
}
