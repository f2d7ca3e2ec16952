//! Command-line interface.

mod render;

use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use sheetsmith_domain::{EquipRequest, Hand, NewCharacter, ScoreChoices, Slot, SpellChange};

use crate::api;
use crate::app::App;
use crate::config::{normalize_addr, EngineConfig};

/// Character builder and rules engine for 5e characters
#[derive(Debug, Parser)]
#[command(name = "sheetsmith")]
#[command(about = "Create, equip and inspect 5e characters", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a character, replacing any with the same name
    Create(CreateArgs),

    /// Show the derived character sheet
    View {
        /// Name or part of it
        name: String,

        /// Hide the spell slot rows of full casters
        #[arg(long)]
        no_slots: bool,
    },

    /// List stored characters
    List,

    /// Delete a character by its full name
    Delete { name: String },

    /// Equip a weapon, armor or shield
    Equip(EquipArgs),

    /// Prepare a spell
    #[command(alias = "prepare")]
    PrepareSpell {
        name: String,
        /// Spell name; several words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        spell: Vec<String>,
    },

    /// Learn a spell
    #[command(alias = "learn")]
    LearnSpell {
        name: String,
        #[arg(required = true, num_args = 1..)]
        spell: Vec<String>,
    },

    /// Fetch weapon, armor and spell metadata from the SRD API
    Enrich {
        /// Only this character
        #[arg(long)]
        name: Option<String>,

        /// Stop after this many characters (0 means all)
        #[arg(long, default_value_t = 0)]
        limit: usize,
    },

    /// Show the enriched metadata
    Inspect {
        #[arg(long)]
        name: Option<String>,
    },

    /// Run the HTTP API
    Serve {
        /// Listen address, e.g. ":8080" or "127.0.0.1:3000"
        #[arg(long)]
        addr: Option<String>,
    },
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    #[arg(long)]
    name: String,
    #[arg(long, default_value = "")]
    race: String,
    #[arg(long, default_value = "")]
    class: String,
    #[arg(long, default_value_t = 1)]
    level: u8,
    #[arg(long, alias = "bg")]
    background: Option<String>,
    #[arg(long = "str")]
    strength: Option<i32>,
    #[arg(long = "dex")]
    dexterity: Option<i32>,
    #[arg(long = "con")]
    constitution: Option<i32>,
    #[arg(long = "int")]
    intelligence: Option<i32>,
    #[arg(long = "wis")]
    wisdom: Option<i32>,
    #[arg(long = "cha")]
    charisma: Option<i32>,
    /// Comma separated, e.g. "stealth, perception"
    #[arg(long, value_delimiter = ',')]
    skills: Vec<String>,
    #[arg(long)]
    weapon: Option<String>,
    #[arg(long)]
    armor: Option<String>,
    #[arg(long)]
    shield: Option<String>,
    #[arg(long = "offhand")]
    off_hand: Option<String>,
}

impl From<CreateArgs> for NewCharacter {
    fn from(args: CreateArgs) -> Self {
        Self {
            name: args.name,
            race: args.race,
            class: args.class,
            level: args.level,
            background: args.background,
            scores: ScoreChoices {
                strength: args.strength,
                dexterity: args.dexterity,
                constitution: args.constitution,
                intelligence: args.intelligence,
                wisdom: args.wisdom,
                charisma: args.charisma,
            },
            skills: args.skills,
            weapon: args.weapon,
            armor: args.armor,
            shield: args.shield,
            off_hand: args.off_hand,
        }
    }
}

#[derive(Debug, Args)]
pub struct EquipArgs {
    name: String,
    #[arg(long)]
    weapon: Option<String>,
    /// main-hand or off-hand
    #[arg(long, default_value = "main-hand")]
    slot: String,
    #[arg(long)]
    armor: Option<String>,
    #[arg(long)]
    shield: Option<String>,
}

impl EquipArgs {
    fn request(&self) -> Result<EquipRequest> {
        let hand = Hand::parse(&self.slot)
            .ok_or_else(|| anyhow!("unknown slot \"{}\", expected main-hand or off-hand", self.slot))?;
        Ok(EquipRequest {
            weapon: self.weapon.clone(),
            hand,
            armor: self.armor.clone(),
            shield: self.shield.clone(),
        })
    }
}

/// Run one command against the composed application.
pub async fn run(command: Command, app: Arc<App>, config: &EngineConfig) -> Result<()> {
    let characters = &app.characters;

    match command {
        Command::Create(args) => {
            let character = characters.create(&args.into()).await?;
            println!("saved character {}", character.name);
        }
        Command::View { name, no_slots } => {
            let sheet = characters.view(&name).await?;
            println!("{}", render::sheet(&sheet, no_slots));
        }
        Command::List => {
            for character in characters.list().await? {
                println!("{}", render::list_entry(&character));
            }
        }
        Command::Delete { name } => {
            characters.delete(&name).await?;
            println!("deleted {name}");
        }
        Command::Equip(args) => {
            let result = characters.equip(&args.name, &args.request()?).await?;
            for outcome in &result.outcomes {
                if outcome.unknown {
                    println!(
                        "(warning) \"{}\" not found in equipment CSV; continuing",
                        outcome.name
                    );
                }
                match outcome.slot {
                    Slot::Hand(hand) => println!("Equipped weapon {} to {hand}", outcome.name),
                    Slot::Armor => println!("Equipped armor {}", outcome.name),
                    Slot::Shield => println!("Equipped shield {}", outcome.name),
                }
            }
        }
        Command::PrepareSpell { name, spell } => {
            let result = characters.prepare_spell(&name, &spell.join(" ")).await?;
            println!("Prepared spell {}", result.spell);
        }
        Command::LearnSpell { name, spell } => {
            let result = characters.learn_spell(&name, &spell.join(" ")).await?;
            if result.change == SpellChange::AlreadyKnown {
                tracing::debug!(spell = %result.spell, "Spell already known");
            }
            println!("Learned spell {}", result.spell);
        }
        Command::Enrich { name, limit } => {
            match name {
                Some(name) => {
                    let report = characters.enrich(&name).await?;
                    println!(
                        "enriched {name}: weapon={}, armor={}, spells={}",
                        report.weapon, report.armor, report.spells
                    );
                }
                None => {
                    characters.enrich_all(limit).await?;
                }
            }
            println!("enrichment done");
        }
        Command::Inspect { name } => {
            for inspection in characters.inspect(name.as_deref()).await? {
                println!("{}", render::inspection(&inspection));
            }
        }
        Command::Serve { addr } => {
            let addr = addr
                .map(|a| normalize_addr(&a))
                .unwrap_or_else(|| config.server_addr.clone());
            serve(app, config, &addr).await?;
        }
    }
    Ok(())
}

async fn serve(app: Arc<App>, config: &EngineConfig, addr: &str) -> Result<()> {
    let router = api::router(app, config);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    tracing::info!(
        addr = %addr,
        static_dir = %config.static_dir.display(),
        "Listening"
    );
    axum::serve(listener, router).await?;
    Ok(())
}
