//! Last Stand Example
//!
//! Walks one combatant down the whole stance ladder: fresh fighter, a hit
//! into fury, a hit into desperation, a hit to the ground, then a heal that
//! demonstrates the absorbing incapacitated stance. Run with
//! `RUST_LOG`-style verbosity baked in so the stance shifts are visible.

use valor_battle::Combatant;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut fighter = Combatant::new();
    println!("fresh   -> {}", fighter.act());

    fighter.damage(30);
    println!("hp {:>3} -> {}", fighter.hp(), fighter.act());

    fighter.damage(50);
    println!("hp {:>3} -> {}", fighter.hp(), fighter.act());

    fighter.damage(50);
    println!("hp {:>3} -> {}", fighter.hp(), fighter.act());

    // Healing does not stand the fighter back up: the stance stays
    // incapacitated until someone reassigns it explicitly.
    fighter.heal(50);
    println!("hp {:>3} -> {}", fighter.hp(), fighter.act());
}
