use payday3_game::{
    DatasetId, Game, GamePlatform, ObjectiveTemplate, Payday3Game, Payday3Options, TemplateWeights,
};
use serde::Serialize;
use std::collections::BTreeMap;

use super::preview::PreviewObjective;

#[derive(Debug, Clone, Serialize)]
pub struct TemplateSummary {
    pub label: String,
    pub weight: u32,
    pub bindings: BTreeMap<String, (DatasetId, usize)>,
    pub is_time_consuming: bool,
    pub is_difficult: bool,
}

/// Everything the plugin hands the host for one set of options.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogReport {
    pub name: &'static str,
    pub platform: GamePlatform,
    pub platforms_other: Vec<GamePlatform>,
    pub is_adult_only_or_unrated: bool,
    pub options: Payday3Options,
    pub weights: TemplateWeights,
    pub datasets: BTreeMap<&'static str, Vec<String>>,
    pub constraints: Vec<TemplateSummary>,
    pub objectives: Vec<TemplateSummary>,
    pub previews: Vec<PreviewObjective>,
}

impl CatalogReport {
    #[must_use]
    pub fn build(game: &Payday3Game, previews: Vec<PreviewObjective>) -> Self {
        let datasets = DatasetId::ALL
            .into_iter()
            .map(|id| (id.name(), game.dataset(id)))
            .collect();
        Self {
            name: Payday3Game::NAME,
            platform: game.platform(),
            platforms_other: game.platforms_other(),
            is_adult_only_or_unrated: game.is_adult_only_or_unrated(),
            options: game.options().clone(),
            weights: game.weights(),
            datasets,
            constraints: summarize(game.optional_game_constraint_templates()),
            objectives: summarize(game.game_objective_templates()),
            previews,
        }
    }

    #[must_use]
    pub fn total_weight(&self) -> u32 {
        self.objectives.iter().map(|t| t.weight).sum()
    }
}

fn summarize(templates: Vec<ObjectiveTemplate<DatasetId>>) -> Vec<TemplateSummary> {
    templates
        .into_iter()
        .map(|template| TemplateSummary {
            bindings: template
                .data
                .iter()
                .map(|(token, binding)| (token.clone(), (binding.dataset, binding.count)))
                .collect(),
            label: template.label,
            weight: template.weight,
            is_time_consuming: template.is_time_consuming,
            is_difficult: template.is_difficult,
        })
        .collect()
}
