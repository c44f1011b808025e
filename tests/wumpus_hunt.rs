//! Full hunts through the cave simulator

use resolute::wumpus::{hunt, Cell, Explorer, GameResult, WumpusWorld};

#[test]
fn test_classic_cave_is_won() {
    let mut world = WumpusWorld::fixed();
    let mut explorer = Explorer::new(world.size());

    let result = hunt(&mut world, &mut explorer, 32).unwrap();

    assert_eq!(result, GameResult::Win);
    // The gold sits at (2, 3) and the winner stands on it
    assert_eq!(world.explorer(), Cell::new(2, 3));
}

#[test]
fn test_all_pit_cave_kills() {
    // With every other cell a pit, the first risky step is fatal
    let mut world = WumpusWorld::random(1, 1.0);
    let mut explorer = Explorer::new(world.size());

    let result = hunt(&mut world, &mut explorer, 32).unwrap();

    assert_eq!(result, GameResult::Death);
}

#[test]
fn test_cornered_wumpus_forces_give_up() {
    // A 2 x 2 cave with the wumpus guarding the gold at (2, 2): after
    // visiting both free cells the explorer proves the last one deadly
    let mut world = WumpusWorld::with_layout(2, &[], Cell::new(2, 2), Cell::new(2, 2));
    let mut explorer = Explorer::new(world.size());

    let result = hunt(&mut world, &mut explorer, 16).unwrap();

    assert_eq!(result, GameResult::GiveUp);
    assert_eq!(world.outcome(), Some(GameResult::GiveUp));
}

#[test]
fn test_move_budget_forces_give_up() {
    let mut world = WumpusWorld::fixed();
    let mut explorer = Explorer::new(world.size());

    let result = hunt(&mut world, &mut explorer, 1).unwrap();

    assert_eq!(result, GameResult::GiveUp);
    assert_eq!(world.outcome(), Some(GameResult::GiveUp));
}

#[test]
fn test_hunt_learns_facts_beyond_the_axioms() {
    let mut world = WumpusWorld::fixed();
    let mut explorer = Explorer::new(world.size());
    let axioms = explorer.knowledge().len();

    hunt(&mut world, &mut explorer, 32).unwrap();

    assert!(explorer.knowledge().len() > axioms);
}
