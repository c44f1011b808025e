//! Transcript of one wumpus-world hunt steered by the entailment engine

use resolute::wumpus::{Choice, Explorer, GameResult, Percept, WumpusWorld};
use resolute::EngineConfig;

fn describe(percept: Percept) -> String {
    let mut senses = Vec::new();
    if percept.stench {
        senses.push("stench");
    }
    if percept.breeze {
        senses.push("breeze");
    }
    if percept.glitter {
        senses.push("glitter");
    }
    if senses.is_empty() {
        "quiet".to_string()
    } else {
        senses.join(", ")
    }
}

fn usage(program: &str) -> ! {
    eprintln!("Usage: {} [options]", program);
    eprintln!("\nOptions:");
    eprintln!("  --random               Play a random cave instead of the classic one");
    eprintln!("  --seed <n>             Seed for the random cave (default: 0)");
    eprintln!("  --pit-probability <p>  Pit chance per cell in the random cave (default: 0.2)");
    eprintln!("  --moves <n>            Move budget before giving up (default: 32)");
    eprintln!("  --max-rounds <n>       Per-query resolution round limit (0 = no limit)");
    eprintln!("  --max-clauses <n>      Per-query retained clause limit (0 = no limit)");
    std::process::exit(1);
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    let mut random = false;
    let mut seed = 0u64;
    let mut pit_probability = 0.2f64;
    let mut moves = 32usize;
    let mut config = EngineConfig::default();

    // Parse command line options
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--random" => {
                random = true;
            }
            "--seed" => {
                if i + 1 < args.len() {
                    if let Ok(n) = args[i + 1].parse::<u64>() {
                        seed = n;
                    }
                    i += 1;
                }
            }
            "--pit-probability" => {
                if i + 1 < args.len() {
                    if let Ok(p) = args[i + 1].parse::<f64>() {
                        pit_probability = p;
                    }
                    i += 1;
                }
            }
            "--moves" => {
                if i + 1 < args.len() {
                    if let Ok(n) = args[i + 1].parse::<usize>() {
                        moves = n;
                    }
                    i += 1;
                }
            }
            "--max-rounds" => {
                if i + 1 < args.len() {
                    if let Ok(n) = args[i + 1].parse::<usize>() {
                        config.max_rounds = n;
                    }
                    i += 1;
                }
            }
            "--max-clauses" => {
                if i + 1 < args.len() {
                    if let Ok(n) = args[i + 1].parse::<usize>() {
                        config.max_clauses = n;
                    }
                    i += 1;
                }
            }
            _ => {
                usage(&args[0]);
            }
        }
        i += 1;
    }

    let mut world = if random {
        WumpusWorld::random(seed, pit_probability)
    } else {
        WumpusWorld::fixed()
    };
    let mut explorer = Explorer::with_config(world.size(), config);

    println!("the cave (E explorer, P pit, W wumpus, G gold):");
    print!("{}", world);
    println!();

    let mut turn = 0;
    let result = loop {
        if let Some(result) = world.outcome() {
            break result;
        }
        turn += 1;
        if turn > moves {
            println!("move budget spent");
            world.give_up();
            break GameResult::GiveUp;
        }

        let percept = world.percept();
        println!("[{}] at {}: {}", turn, explorer.location(), describe(percept));
        explorer.perceive(percept);
        if percept.glitter {
            println!("    grabbing the gold");
            world.grab_gold();
            continue;
        }

        match explorer.choose() {
            Ok(Choice::Safe(target)) => {
                println!("    moving to safe cell {}", target);
                explorer.relocate(target);
                world.enter(target);
            }
            Ok(Choice::Risky(target)) => {
                println!("    taking a risk on {}", target);
                explorer.relocate(target);
                world.enter(target);
            }
            Ok(Choice::Exhausted) => {
                println!("    nowhere left to go");
                world.give_up();
            }
            Err(e) => {
                eprintln!("reasoning failed: {}", e);
                std::process::exit(2);
            }
        }
    };

    println!();
    match result {
        GameResult::Win => println!("result: won with the gold after {} turns", turn),
        GameResult::Death => println!("result: died at {}", world.explorer()),
        GameResult::GiveUp => println!(
            "result: gave up knowing {} clauses",
            explorer.knowledge().len()
        ),
    }
}
