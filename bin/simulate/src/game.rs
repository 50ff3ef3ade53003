use crate::args::Args;
use futures::StreamExt;
use rbd_core::*;
use rbd_gameplay::*;
use rbd_gameroom::*;
use rbd_players::Level;
use rbd_players::Profile;
use std::sync::Arc;

/// Plays one bot-vs-bot match and logs each seat's statistics.
pub async fn run(args: &Args) -> anyhow::Result<()> {
    let rules = Rules::new(
        Start::try_from(args.start)?,
        args.legs,
        args.double_out,
        Opening::default(),
    )?;
    let levels = [Level::try_from(args.home)?, Level::try_from(args.away)?];
    let seats = levels.map(|level| Participant::robot(&format!("bot {}", level), level.tier()));
    let seed = args.seed();
    let game = Match::new([seats[0].id(), seats[1].id()], rules)?;
    let referee = Arc::new(Referee::new(Memory::new()));
    let printer = args.json.then(|| {
        let mut subscription = referee.subscribe(game.id());
        tokio::spawn(async move {
            while let Some(snapshot) = subscription.next().await {
                println!("{}", snapshot.to_json()?);
                if snapshot.game.is_over() {
                    break;
                }
            }
            anyhow::Ok(())
        })
    });
    log::info!("{} vs {} | {} | seed {}", seats[0], seats[1], rules, seed);
    let home = Robot::new(Profile::from(levels[0]), seed);
    let away = Robot::new(Profile::from(levels[1]), seed.wrapping_add(1));
    let done = Table::new(referee.clone(), Box::new(home), Box::new(away))
        .play(game)
        .await?;
    if let Some(printer) = printer {
        printer.await??;
    }
    let mut visits = Vec::new();
    for leg in referee.repository().legs(done.id()).await? {
        visits.extend(referee.repository().visits(leg.id()).await?);
    }
    for (seat, participant) in seats.iter().enumerate() {
        log::info!("{:<8} {}", participant.name(), Tally::of(&visits, seat));
    }
    log::info!("{}", done);
    Ok(())
}
