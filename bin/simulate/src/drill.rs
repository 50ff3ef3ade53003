use crate::args::Args;
use crate::args::Drill;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rbd_board::Dart;
use rbd_board::Segment;
use rbd_core::*;
use rbd_players::Bot;
use rbd_players::Level;
use rbd_training::*;

/// Runs the home bot through one practice drill.
pub fn run(drill: Drill, args: &Args) -> anyhow::Result<()> {
    let level = Level::try_from(args.home)?;
    let bot = Bot::from(level);
    let seed = args.seed();
    let ref mut rng = SmallRng::seed_from_u64(seed);
    log::info!("{} {:?} drill | seed {}", level, drill, seed);
    match drill {
        Drill::Finish => finish(bot, args.double_out, seed, rng),
        Drill::Clock => clock(bot, rng),
        Drill::Jdc => jdc(bot, rng),
        Drill::Bobs => bobs(bot, rng),
    }
}

fn volley(bot: Bot, target: Segment, rng: &mut SmallRng) -> Vec<Dart> {
    (0..DARTS_PER_VISIT).map(|_| bot.aim(target, rng)).collect()
}

fn finish(bot: Bot, double_out: bool, seed: u64, rng: &mut SmallRng) -> anyhow::Result<()> {
    let mut session = Finish::seeded(2, MAX_CHECKOUT, FINISH_ATTEMPTS, double_out, seed)?;
    while session.progress().is_active() {
        let target = session.target();
        let throws = bot.visit(target, double_out, rng);
        let feedback = session.record(throws.darts())?;
        log::info!("{:>3} | {:<20} | {}", target, throws.to_string(), feedback.message);
    }
    let stats = session.stats();
    log::info!(
        "checked out {}/{} ({:.1}%) across {} targets",
        stats.successes,
        stats.attempts,
        stats.success_rate(),
        stats.targets()
    );
    println!("{}", serde_json::to_string(&stats)?);
    Ok(())
}

fn clock(bot: Bot, rng: &mut SmallRng) -> anyhow::Result<()> {
    let mut session = Clock::solo(Mode::Standard);
    while session.progress().is_active() {
        for _ in 0..DARTS_PER_VISIT {
            let needed = Segment::Single(session.current().cursor());
            if session.throw(bot.aim(needed, rng))?.completed {
                break;
            }
        }
        log::debug!("{}", session.message());
    }
    let stats = session.current().stats();
    log::info!(
        "around the clock in {} darts ({:.2} per number)",
        stats.darts,
        stats.per_number()
    );
    println!("{}", serde_json::to_string(&stats)?);
    Ok(())
}

fn jdc(bot: Bot, rng: &mut SmallRng) -> anyhow::Result<()> {
    let mut session = Jdc::new();
    while let Some(target) = session.target() {
        let aim = match target {
            Target::Number(n) | Target::Treble(n) => Segment::Triple(n),
            Target::Doubles => Segment::Double(20),
            Target::Bull => Segment::Bull,
        };
        let round = session.record(&volley(bot, aim, rng))?;
        log::info!("{:<8} {:>3} (+{})", round.target(), round.score(), round.bonus());
    }
    log::info!(
        "JDC total {} | bonus {} | best round {} | {}",
        session.total(),
        session.bonus(),
        session.highest(),
        session.grade()
    );
    println!("{}", serde_json::to_string(session.rounds())?);
    Ok(())
}

fn bobs(bot: Bot, rng: &mut SmallRng) -> anyhow::Result<()> {
    let mut session = Bobs::new();
    while session.progress().is_active() {
        let aim = Segment::Double(session.target());
        session.record(&volley(bot, aim, rng))?;
        log::info!("{}", session.message());
    }
    log::info!(
        "Bob's 27 {} on {} | accuracy {:.1}% | streak {} | {}",
        session.progress(),
        session.score(),
        session.accuracy(),
        session.streak(),
        session.grade()
    );
    println!("{}", serde_json::to_string(session.history())?);
    Ok(())
}
