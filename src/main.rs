use clap::Parser;
use faro_shuffle::card::{
    create_deck, describe_sequence, elmsley_sequence, place_top_card, Card, ShuffleKind,
};
use faro_shuffle::cli::{Cli, Commands};
use faro_shuffle::config::EngineConfig;
use faro_shuffle::rng::TrickRng;
use faro_shuffle::session::Session;
use faro_shuffle::simulation::{
    closed_form_restoration, decompose_with_cap, restoration_count_with_cap, save_report, sweep,
    Restoration,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt::Display;
use std::time::{Duration, Instant};

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = match &cli.config {
        Some(path) => match EngineConfig::from_file(path) {
            Ok(config) => {
                eprintln!("✓ Loaded config from {}", path);
                config
            }
            Err(e) => fail(format!("Failed to load config '{}'", path), e),
        },
        None => EngineConfig::default(),
    };

    match cli.command {
        Some(Commands::Restore { size, kind }) => {
            show_restore(&config, size, kind.into());
        }
        Some(Commands::Decompose { size }) => {
            show_decomposition(&config, size);
        }
        Some(Commands::Table {
            min,
            max,
            json,
            save,
        }) => {
            show_table(&config, min, max, json, save);
        }
        Some(Commands::Place {
            size,
            position,
            seed,
        }) => {
            show_placement(&config, size, position, seed);
        }
        Some(Commands::Play {
            size,
            kind,
            steps,
            auto,
            fast,
        }) => {
            play(&config, size, kind.into(), steps, auto, fast);
        }
        None => {
            show_restore(&config, cli.size, ShuffleKind::Out);
            show_restore(&config, cli.size, ShuffleKind::In);
            show_decomposition(&config, cli.size);
        }
    }
}

fn fail(context: impl Display, err: impl Display) -> ! {
    eprintln!("✗ {}: {}", context, err);
    std::process::exit(1);
}

fn checked_size(config: &EngineConfig, size: usize) -> usize {
    config
        .validate_size(size)
        .unwrap_or_else(|e| fail("Invalid deck size", e))
}

/// Exact count, or `unknown` for a count that hit the cap
fn describe_restoration(restoration: &Restoration, unknown: &str) -> String {
    match restoration.exact() {
        Some(count) => count.to_string(),
        None => unknown.to_string(),
    }
}

fn gave_up(cap: usize) -> String {
    format!("unknown (gave up at {})", cap)
}

fn show_restore(config: &EngineConfig, size: usize, kind: ShuffleKind) {
    let size = checked_size(config, size);
    let restoration = restoration_count_with_cap(size, kind, config.restore_cap)
        .unwrap_or_else(|e| fail("Restoration failed", e));

    println!(
        "{}-shuffles to restore {} cards: {}",
        kind,
        size,
        describe_restoration(&restoration, &gave_up(restoration.cap))
    );
    if let Some(predicted) = closed_form_restoration(size, kind) {
        if restoration.exact() == Some(predicted) {
            log::debug!("closed form agrees: order of 2 is {}", predicted);
        } else {
            log::warn!(
                "closed form predicts {} but simulation gave {}",
                predicted,
                restoration.count
            );
        }
    }
}

fn show_decomposition(config: &EngineConfig, size: usize) {
    let size = checked_size(config, size);
    let decomposition = decompose_with_cap(size, config.restore_cap)
        .unwrap_or_else(|e| fail("Decomposition failed", e));

    match decomposition {
        Some(d) => println!(
            "Shortest mix restoring {} cards: {} ({} total)",
            size,
            d,
            d.total()
        ),
        None => println!(
            "Shortest mix restoring {} cards: {}",
            size,
            gave_up(config.restore_cap)
        ),
    }
}

fn show_table(
    config: &EngineConfig,
    min: Option<usize>,
    max: Option<usize>,
    json: bool,
    save: bool,
) {
    let mut bounds = config.clone();
    bounds.min_size = min.unwrap_or(config.min_size);
    bounds.max_size = max.unwrap_or(config.max_size);
    if let Err(e) = bounds.validate() {
        fail("Invalid size range", e);
    }
    let sizes = bounds.sizes();

    let bar = ProgressBar::new(sizes.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} sizes")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    let start = Instant::now();
    let reports = sweep(&sizes, config.restore_cap, |_| bar.inc(1))
        .unwrap_or_else(|e| fail("Sweep failed", e));
    bar.finish_and_clear();
    let elapsed = start.elapsed();

    if json {
        match serde_json::to_string_pretty(&reports) {
            Ok(text) => println!("{}", text),
            Err(e) => fail("Failed to serialize table", e),
        }
    } else {
        println!("\n=== Faro Restoration Table ===\n");
        println!(
            "{:>5} {:>6} {:>6} {:>14}  {}",
            "Cards", "Out", "In", "Shortest mix", "Check"
        );
        println!("{:-<50}", "");
        for r in &reports {
            println!(
                "{:>5} {:>6} {:>6} {:>14}  {}",
                r.size,
                describe_restoration(&r.out_restoration, "?"),
                describe_restoration(&r.in_restoration, "?"),
                match &r.decomposition {
                    Some(d) => format!("{}o + {}i", d.outshuffles, d.inshuffles),
                    None => "?".to_string(),
                },
                if r.consistent() { "✓" } else { "✗" }
            );
        }
        println!("\nCompleted in {:.2?}", elapsed);
    }

    if save {
        match save_report(reports, config.restore_cap) {
            Ok(filename) => println!("\nReport saved to: {}", filename),
            Err(e) => eprintln!("\nFailed to save report: {}", e),
        }
    }
}

fn show_placement(config: &EngineConfig, size: usize, position: Option<usize>, seed: Option<u64>) {
    let size = checked_size(config, size);
    let deck = create_deck(size).unwrap_or_else(|e| fail("Failed to build deck", e));

    let target = match position {
        Some(p) => p,
        None => {
            let mut rng = TrickRng::new(seed);
            println!("Seed: {}", rng.seed());
            rng.pick_position(size)
        }
    };

    let placed = place_top_card(&deck, target).unwrap_or_else(|e| fail("Cannot place card", e));
    let sequence = elmsley_sequence(target);

    println!("\n=== Binary Card Positioning ===\n");
    println!("Deck: {} cards, top card {}", size, deck.top());
    println!("Target position: {} (binary {:b})", target, target);
    println!("Shuffles: {}", describe_sequence(&sequence));
    match placed.index_of(deck.top().position_id) {
        Some(index) if index == target => {
            println!("✓ {} is now at position {}", deck.top(), index)
        }
        other => fail("Placement check", format!("card ended at {:?}", other)),
    }
}

fn render_row(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| format!("{:>3}", c.to_string()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_cards(label: &str, cards: &[Card]) {
    for (i, row) in cards.chunks(13).enumerate() {
        let prefix = if i == 0 { label } else { "" };
        println!("  {:<8} {}", prefix, render_row(row));
    }
}

fn play(
    config: &EngineConfig,
    size: usize,
    kind: ShuffleKind,
    steps: Option<usize>,
    auto: bool,
    fast: bool,
) {
    let size = checked_size(config, size);
    let timing = config.timing();
    let split_delay = if fast { Duration::ZERO } else { timing.split_delay };
    let interval = if fast { Duration::ZERO } else { timing.auto_interval };

    let mut session = Session::new(size, kind, config.restore_cap, interval)
        .unwrap_or_else(|e| fail("Failed to start session", e));
    let steps = steps.unwrap_or(session.restoration().count);

    println!("\n=== Faro Shuffle ===\n");
    println!(
        "{} cards, {}-shuffle, restores after {}",
        size,
        kind,
        describe_restoration(&session.restoration(), &gave_up(config.restore_cap))
    );
    print_cards("start", session.deck().cards());

    if auto {
        session.auto_mut().start(Instant::now());
    }

    while session.shuffle_count() < steps {
        if auto {
            let now = Instant::now();
            if !session.auto_mut().due(now, false) {
                let wait = session.auto().remaining(now).unwrap_or(Duration::ZERO);
                std::thread::sleep(wait);
                continue;
            }
        }

        match session.begin_shuffle() {
            Ok((first, second)) => {
                println!();
                print_cards("first", first);
                print_cards("second", second);
            }
            Err(e) => fail("Shuffle failed", e),
        }
        std::thread::sleep(split_delay);

        if let Err(e) = session.commit_shuffle() {
            fail("Shuffle failed", e);
        }
        let label = format!("#{}", session.shuffle_count());
        print_cards(&label, session.deck().cards());
        println!("  progress {:.0}%", session.progress() * 100.0);

        if session.is_restored() {
            println!("\n✓ Deck restored after {} shuffles", session.shuffle_count());
        }
    }
}
