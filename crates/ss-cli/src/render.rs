//! Turns session output into terminal text.

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use ss_core::{Ability, modifier};
use ss_game::{CharacterSnapshot, Output, Prompt};
use ss_mechanics::{CombatAction, CombatEvent, Initiative, Side};

const BANNER: &str = r"
           __       _     _
          / _\_   _| |__ | |_ ___ _ __ _ __ ___  __ _ _ __
          \ \| | | | '_ \| __/ _ \ '__| '__/ _ \/ _` | '_ \
          _\ \ |_| | |_) | ||  __/ |  | | |  __/ (_| | | | |
          \__/\__,_|_.__/ \__\___|_|  |_|  \___|\__,_|_| |_|
                      __           _       _
                     / _\ ___ _ __(_)_ __ | |_
                     \ \ / __| '__| | '_ \| __|
                     _\ \ (__| |  | | |_) | |_
                     \__/\___|_|  |_| .__/ \__|
                                    |_|
";

const INTRO: &str = "Awakening in a room, a sense of déjà vu strikes you...
Have you visited this place before?
A shroud of darkness wraps the space, its cold grip only
punctuated by the echoing drip of water against stone walls.
In the feeble light, an inscription comes to view on
your arm, etched crudely by an apparent blade.";

pub const FAREWELL: &str = "Maybe it's all just a dream...";

pub fn banner() -> String {
    format!(
        "{}
            Welcome to the depths of 'Subterranean Script'!
          This is a text-based, choice-driven adventure game.
            Navigate through the all-encompassing darkness
           where every door opens a new path, a new destiny.

        Note: Whisper 'help' anytime to conjure the command list

        Ready to step into the unknown? Type 'Enter' if you dare
",
        BANNER.red()
    )
}

pub fn render(output: &Output) -> String {
    match output {
        Output::Intro => format!("\n{INTRO}"),
        Output::NameAccepted { name } => format!(
            "\n{}, that appears to be my name...\nI suppose that's as good a start as any.",
            name.bold()
        ),
        Output::StatSheet(sheet) => stat_sheet(sheet),
        Output::ObjectOffered { name, description } => format!(
            "\nSomething lies on the floor at your feet: {}.\n{description}",
            name.bold()
        ),
        Output::ObjectTaken {
            name,
            gained,
            totals,
        } => {
            let mut text = format!("You pick up the {}.", name.bold());
            if !gained.is_empty() {
                text.push_str(&format!("\n  Gained: {gained}"));
                text.push_str(&format!("\n  All changes so far: {totals}"));
            }
            text
        }
        Output::ObjectLeft { name } => format!("You leave the {name} where it lies."),
        Output::RoomEntered {
            door,
            name,
            description,
        } => format!(
            "\nYou push open the {door} door and step into the {}.\n{description}",
            name.bold()
        ),
        Output::EnemyAppears { name, kind } => format!(
            "\nA {} ({kind}) emerges from the shadows!",
            name.red().bold()
        ),
        Output::Initiative(initiative) => render_initiative(initiative),
        Output::Combat(event) => render_event(event),
        Output::Victory { enemy } => format!(
            "\nThe {enemy} crumples to the floor. {}\nThe darkness closes in again, and you wake once more...",
            "Victory!".green().bold()
        ),
        Output::Defeat { enemy } => format!(
            "\nThe {enemy} stands over you as the world fades to black. {}\nYou wake once more...",
            "Defeat.".red().bold()
        ),
        Output::Stalemate { enemy } => format!(
            "\nYou and the {enemy} stagger apart, neither able to finish the fight.\nThe darkness takes you, and you wake once more..."
        ),
        Output::Help { state, commands } => {
            let list = commands
                .iter()
                .map(|c| format!("  {}", c.cyan()))
                .collect::<Vec<_>>()
                .join("\n");
            format!("\nCommands ({state}):\n{list}\n  {}", "return".cyan())
        }
        Output::Returned { state } => format!("You return to the {state}."),
        Output::Farewell => format!("\n{FAREWELL}"),
        Output::Prompt(prompt) => render_prompt(prompt),
    }
}

fn render_prompt(prompt: &Prompt) -> String {
    match prompt {
        Prompt::Start => String::new(),
        Prompt::Name => "\nWhat does it say?".to_string(),
        Prompt::Pickup { object } => {
            format!("Will you 'pick up' the {object}, or 'leave' it?")
        }
        Prompt::Door { doors } => {
            let doors = doors
                .iter()
                .map(|d| format!("'{d}'"))
                .collect::<Vec<_>>()
                .join(" or ");
            format!("\nTwo doors loom before you. Which will it be, {doors}?")
        }
        Prompt::CombatAction {
            player_hp,
            enemy_hp,
            enemy,
        } => format!(
            "\n[You: {player_hp} HP | {enemy}: {enemy_hp} HP] 'quick', 'heavy' or 'dodge'?"
        ),
        Prompt::Help | Prompt::Stats => "Type 'return' to go back.".to_string(),
    }
}

fn render_initiative(initiative: &Initiative) -> String {
    let first = match initiative.first {
        Side::Player => "You move first.",
        Side::Enemy => "It moves first.",
    };
    format!(
        "Initiative: you rolled {} ({}), it rolled {} ({}). {first}",
        initiative.player_roll,
        initiative.player_total,
        initiative.enemy_roll,
        initiative.enemy_total
    )
}

fn render_event(event: &CombatEvent) -> String {
    let (actor, target) = match event.actor {
        Side::Player => ("You".to_string(), format!("the {}", event.target_name)),
        Side::Enemy => (format!("The {}", event.actor_name), "you".to_string()),
    };
    let third_person = event.actor == Side::Enemy;
    let (kind, attack) = match (event.action, &event.attack) {
        (CombatAction::Quick, Some(attack)) => ("quick", attack),
        (CombatAction::Heavy, Some(attack)) => ("heavy", attack),
        (CombatAction::Dodge, _) | (_, None) => {
            return format!("{actor} {} to dodge the next blow.", conjugate("brace", third_person));
        }
    };
    let dodge = match attack.dodge_bonus {
        Some(bonus) => format!(" + dodge {bonus}"),
        None => String::new(),
    };
    let roll = format!(
        "{} {:+} = {} vs AC {}{dodge}",
        attack.roll, attack.modifier, attack.total, attack.armor_class
    );
    if attack.hit {
        format!(
            "{actor} {} a {kind} attack on {target} ({roll}): {} damage, {} HP left.",
            conjugate("land", third_person),
            attack.damage.to_string().red(),
            attack.defender_hit_points
        )
    } else {
        format!("{actor} {} {target} ({roll}).", conjugate("miss", third_person))
    }
}

fn conjugate(verb: &str, third_person: bool) -> String {
    match (third_person, verb.ends_with('s')) {
        (false, _) => verb.to_string(),
        (true, true) => format!("{verb}es"),
        (true, false) => format!("{verb}s"),
    }
}

fn stat_sheet(sheet: &CharacterSnapshot) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Ability", "Score", "Modifier", "From objects"]);

    for ability in Ability::ALL {
        let score = sheet.abilities.get(ability);
        let change = if sheet.stat_changes.contains(ability) {
            format!("{:+}", sheet.stat_changes.get(ability))
        } else {
            "-".to_string()
        };
        table.add_row(vec![
            ability.name().to_string(),
            score.to_string(),
            format!("{:+}", modifier(score)),
            change,
        ]);
    }

    format!(
        "\n  {} the {}\n  HP {} | AC {} | Weapon: {}\n{table}",
        sheet.name.bold(),
        sheet.kind,
        sheet.hit_points,
        sheet.armor_class,
        sheet.weapon
    )
}
