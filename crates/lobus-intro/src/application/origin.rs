//! The character origin questionnaire.
//!
//! Four scenarios run through the choices engine against the `Player` being
//! created: class, weapon (filtered by class), homeland (skipped for mages,
//! who grow up in the tower) and armor (only offered to characters strong
//! enough to wear it).

use lobus_choices::{Choice, Choices, DecisionLedger, Scenario, ScenarioConfig};

use crate::domain::player::{Attributes, Player};

/// Ledger key of the class scenario.
pub const CLASS: &str = "class";
/// Ledger key of the weapon scenario.
pub const WEAPON: &str = "weapon";
/// Ledger key of the homeland scenario.
pub const HOMELAND: &str = "homeland";
/// Ledger key of the armor scenario.
pub const ARMOR: &str = "armor";

const ARMOR_STRENGTH: i32 = 30;

fn trait_choice(
    id: &'static str,
    description: &str,
    adjust: fn(&mut Attributes),
) -> Choice<Player> {
    Choice::<Player>::new(id, description).on_select(move |_, player| {
        adjust(&mut player.attributes);
        Ok(())
    })
}

fn gear_choice(
    id: &'static str,
    description: &str,
    item: &'static str,
    adjust: fn(&mut Attributes),
) -> Choice<Player> {
    Choice::<Player>::new(id, description).on_select(move |_, player| {
        player.equipment.push(item.to_owned());
        adjust(&mut player.attributes);
        Ok(())
    })
}

fn class_is(class: &'static str) -> impl Fn(&DecisionLedger, &Player) -> bool {
    move |decisions: &DecisionLedger, _: &Player| decisions.is_chosen(CLASS, class)
}

/// Builds the questionnaire in the order it is asked.
#[must_use]
pub fn origin_scenarios() -> Vec<Scenario<Player>> {
    vec![
        Choices::create_scenario(
            CLASS,
            ScenarioConfig::new("Choose your class")
                .description("Your class decides where your strengths lie.")
                .choice(trait_choice("warrior", "Warrior - a master of arms", |a| {
                    a.strength += 10;
                    a.health += 20;
                }))
                .choice(trait_choice("mage", "Mage - a student of the arcane", |a| {
                    a.intellect += 10;
                }))
                .choice(trait_choice("rogue", "Rogue - quick and unseen", |a| {
                    a.agility += 10;
                    a.critical += 5;
                })),
        ),
        Choices::create_scenario(
            WEAPON,
            ScenarioConfig::new("Choose your weapon")
                .choice(
                    gear_choice("greatsword", "Greatsword", "greatsword", |a| a.strength += 5)
                        .when(class_is("warrior")),
                )
                .choice(
                    gear_choice("staff", "Oak staff", "oak staff", |a| a.intellect += 5)
                        .when(class_is("mage")),
                )
                .choice(
                    gear_choice("daggers", "Pair of daggers", "pair of daggers", |a| {
                        a.critical += 5;
                    })
                    .when(|decisions, _| !decisions.is_chosen(CLASS, "mage")),
                )
                .choice(
                    gear_choice("shortbow", "Shortbow", "shortbow", |a| a.agility += 5)
                        .when(|decisions, _| !decisions.is_chosen(CLASS, "mage")),
                ),
        ),
        Choices::create_scenario(
            HOMELAND,
            ScenarioConfig::new("Where were you raised?")
                .when(|decisions, _| !decisions.is_chosen(CLASS, "mage"))
                .choice(trait_choice("highlands", "The northern highlands", |a| {
                    a.stamina += 10;
                }))
                .choice(trait_choice("coast", "A fishing village on the coast", |a| {
                    a.agility += 5;
                    a.stamina += 5;
                }))
                .choice(
                    trait_choice("capital", "The back alleys of the capital", |a| {
                        a.critical += 5;
                    })
                    .when(class_is("rogue")),
                ),
        ),
        Choices::create_scenario(
            ARMOR,
            ScenarioConfig::new("Choose your armor")
                .description("Heavy armor needs a strong back.")
                .when(|_, player: &Player| player.attributes.strength >= ARMOR_STRENGTH)
                .choice(gear_choice("plate", "Plate armor", "plate armor", |a| a.armor += 10))
                .choice(gear_choice("mail", "Chain mail", "chain mail", |a| a.armor += 5)),
        ),
    ]
}
