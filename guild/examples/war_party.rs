//! War Party Example
//!
//! Loads a roster from JSON, musters the party, then puts the first
//! fighter through random hits until they drop, printing the attack
//! narration after every hit. Finishes with the futile post-knockout
//! heal so the absorbing incapacitated stance is visible.

use anyhow::Result;
use rand::Rng;
use valor_guild::Roster;

const ROSTER_JSON: &str = r#"{
    "adventurers": [
        {"name": "Roland", "class": "knight", "titles": ["mighty"], "tactic": "skill"},
        {"name": "Robin", "class": "archer", "tactic": "item"},
        {"name": "Jobs", "class": "lancer", "titles": ["mighty", "swift"]}
    ]
}"#;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let roster = Roster::from_json(ROSTER_JSON)?;
    let mut party = roster.muster();

    for adventurer in &mut party {
        println!(
            "{} the {} carries a {}",
            adventurer.name(),
            adventurer.class(),
            adventurer.kit().weapon
        );
    }

    let fighter = &mut party[0];
    let mut rng = rand::thread_rng();

    println!("\n{} takes the field:", fighter.name());
    while fighter.combatant().hp() > 0 {
        let hit = rng.gen_range(10..=35);
        fighter.combatant().damage(hit);
        println!("-- takes {} damage --", hit);
        println!("{}", fighter.attack());
    }

    // Down. Healing alone never stands a fighter back up.
    fighter.combatant().heal(60);
    println!("-- healed to {} HP --", fighter.combatant().hp());
    println!("{}", fighter.attack());

    Ok(())
}
