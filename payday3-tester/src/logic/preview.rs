//! Seeded objective previews.
//!
//! Mirrors what the randomizer host does with our templates so option
//! files can be eyeballed: one weighted template pick, then `count`
//! distinct items per placeholder.
use payday3_game::{Game, ObjectiveTemplate};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewObjective {
    pub template: String,
    pub text: String,
    pub weight: u32,
    pub picks: BTreeMap<String, Vec<String>>,
}

/// Draw `samples` objectives from `game` with a deterministic RNG.
///
/// Returns an empty list when every template weight is zero.
pub fn draw_previews<G: Game>(game: &G, samples: usize, seed: u64) -> Vec<PreviewObjective> {
    let templates = game.game_objective_templates();
    let weighted: Vec<(usize, u32)> = templates
        .iter()
        .enumerate()
        .map(|(idx, template)| (idx, template.weight))
        .collect();
    let mut rng = ChaCha20Rng::seed_from_u64(seed);

    let mut previews = Vec::with_capacity(samples);
    for _ in 0..samples {
        let Some(idx) = choose_weighted(&weighted, &mut rng) else {
            log::warn!("all template weights are zero; no objectives drawn");
            break;
        };
        previews.push(fill_template(game, &templates[idx], &mut rng));
    }
    previews
}

fn fill_template<G: Game, R: Rng>(
    game: &G,
    template: &ObjectiveTemplate<G::Dataset>,
    rng: &mut R,
) -> PreviewObjective {
    let mut picks = BTreeMap::new();
    for (token, binding) in &template.data {
        let items = game.dataset(binding.dataset);
        let drawn: Vec<String> = items
            .choose_multiple(rng, binding.count)
            .cloned()
            .collect();
        picks.insert(token.clone(), drawn);
    }
    let values: BTreeMap<&str, Vec<String>> = picks
        .iter()
        .map(|(token, drawn)| (token.as_str(), drawn.clone()))
        .collect();
    PreviewObjective {
        template: template.label.clone(),
        text: template.render(&values),
        weight: template.weight,
        picks,
    }
}

fn choose_weighted<R: Rng>(weights: &[(usize, u32)], rng: &mut R) -> Option<usize> {
    let total_weight: u32 = weights.iter().map(|(_, weight)| *weight).sum();
    if total_weight == 0 {
        return None;
    }

    let roll = rng.gen_range(0..total_weight);
    let mut current = 0;
    for (idx, weight) in weights {
        current += *weight;
        if roll < current {
            return Some(*idx);
        }
    }

    weights.first().map(|(idx, _)| *idx)
}
