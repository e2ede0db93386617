//! Simulation runner driving the real selection, scaling and party code.

use super::config::SimConfig;
use super::report::SimReport;
use crate::battle::{BattleContext, CatalogCombatantFactory};
use crate::error::{ForgeError, ForgeResult};
use crate::rival::{
    all_rival_types, get_dynamic_rival_config, plan_rival_encounters, RivalEncounter, RivalRoster,
    RivalSave, RivalTrainerType,
};
use crate::species::{ElementType, SpeciesCatalog, SpeciesInfo, SpeciesRegistry};
use crate::trainer::generate_party;
use log::{info, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::collections::HashSet;

/// What one rival battle looked like.
#[derive(Debug, Clone, Serialize)]
pub struct EncounterStats {
    pub stage: u32,
    pub wave: u32,
    pub rival: RivalTrainerType,
    pub corrupted: bool,
    pub party_size: usize,
    pub boss_count: usize,
    pub tera_count: usize,
    pub late_forms: usize,
    /// Members sharing a species with an earlier member
    pub duplicate_species: usize,
    pub bgm: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    pub primary: RivalTrainerType,
    pub encounters: Vec<EncounterStats>,
    pub nightmare_unlocked: bool,
}

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> ForgeResult<SimReport> {
    let roster = RivalRoster::standard();
    let catalog = match &config.catalog_path {
        Some(path) => SpeciesRegistry::load(path)?,
        None => {
            warn!("No species catalog given; all species are untyped");
            roster_catalog(&roster)
        }
    };

    let mut save = initial_save(config);
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(u64::from(run_idx))),
            None => ChaCha8Rng::from_entropy(),
        };
        if !config.carry_save {
            save = initial_save(config);
        }

        let run = simulate_single_run(config, &mut save, &roster, &catalog, &mut rng)?;
        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - {} ({} encounters, {} bosses)",
                run_idx + 1,
                config.num_runs,
                run.primary.display_name(),
                run.encounters.len(),
                run.encounters.iter().map(|e| e.boss_count).sum::<usize>()
            );
        }
        all_runs.push(run);
    }

    info!("Simulated {} runs", all_runs.len());
    Ok(SimReport::from_runs(all_runs))
}

fn initial_save(config: &SimConfig) -> RivalSave {
    let mut save = RivalSave::default().with_unlocks(config.nightmare_unlocked, config.void_overtaken);
    save.defeated_rivals = all_rival_types().into_iter().take(config.pre_defeated).collect();
    save
}

/// Every pooled species as an untyped entry, plus one universal form.
fn roster_catalog(roster: &RivalRoster) -> SpeciesRegistry {
    let mut catalog = SpeciesRegistry::default().with_universal_form("glitch");
    for rival in roster.rivals() {
        if let Ok(pools) = roster.pools(rival) {
            for species in pools.iter().flatten() {
                catalog.insert(species.clone(), SpeciesInfo::new(ElementType::Normal));
            }
        }
    }
    catalog
}

/// One run: choose the persona, plan the schedule, then build every party.
fn simulate_single_run(
    config: &SimConfig,
    save: &mut RivalSave,
    roster: &RivalRoster,
    catalog: &SpeciesRegistry,
    rng: &mut impl Rng,
) -> ForgeResult<RunStats> {
    save.reset_run();
    let plan = plan_rival_encounters(save, rng)?;
    let primary = save.player_rival.ok_or(ForgeError::RivalNotInitialized)?;

    let mut encounters = Vec::with_capacity(plan.len());
    for encounter in &plan {
        encounters.push(simulate_encounter(config, save, roster, catalog, encounter, rng)?);
    }

    save.record_defeat(primary);
    Ok(RunStats {
        primary,
        encounters,
        nightmare_unlocked: save.unlocks.nightmare_mode,
    })
}

fn simulate_encounter(
    config: &SimConfig,
    save: &RivalSave,
    roster: &RivalRoster,
    catalog: &impl SpeciesCatalog,
    encounter: &RivalEncounter,
    rng: &mut impl Rng,
) -> ForgeResult<EncounterStats> {
    let battle = BattleContext::new(encounter.wave + config.wave_offset, config.game_mode)
        .with_highest_player_level(config.player_level);
    let trainer = get_dynamic_rival_config(
        encounter.stage,
        encounter.rival,
        save,
        roster,
        &battle,
        catalog,
        rng,
    )?;
    let factory = CatalogCombatantFactory::new(catalog);
    let party = generate_party(&trainer, &battle, catalog, &factory, rng)?;

    let mut seen = HashSet::new();
    let duplicate_species = party
        .members
        .iter()
        .filter(|m| !seen.insert(m.species.clone()))
        .count();

    Ok(EncounterStats {
        stage: encounter.stage,
        wave: battle.wave_index,
        rival: encounter.rival,
        corrupted: encounter.corrupted,
        party_size: party.members.len(),
        boss_count: party.boss_count(),
        tera_count: party.modifiers.len(),
        late_forms: party.members.iter().filter(|m| m.form.is_some()).count(),
        duplicate_species,
        bgm: trainer.battle_bgm,
    })
}
