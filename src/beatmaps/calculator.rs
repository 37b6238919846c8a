use crate::{
    beatmaps::loader::ChartSource,
    model::{
        resolver::{PerformanceCalculator, ResolveError},
        structures::{attempt::Attempt, ruleset::Ruleset}
    }
};
use rosu_pp::{model::mode::GameMode, Difficulty, Performance};

fn game_mode(ruleset: Ruleset) -> GameMode {
    match ruleset {
        Ruleset::Osu => GameMode::Osu,
        Ruleset::Taiko => GameMode::Taiko,
        Ruleset::Catch => GameMode::Catch,
        Ruleset::Mania => GameMode::Mania
    }
}

/// rosu-pp backed difficulty and performance calculation for one ruleset.
///
/// Difficulty attributes are computed per call and discarded with it.
/// Attempts on charts of a different native mode (converts) are declined
/// rather than scored with the wrong calculator.
pub struct RosuCalculator {
    charts: ChartSource,
    ruleset: Ruleset
}

impl RosuCalculator {
    pub fn new(charts: ChartSource, ruleset: Ruleset) -> Self {
        RosuCalculator { charts, ruleset }
    }
}

impl PerformanceCalculator for RosuCalculator {
    fn performance(&self, attempt: &Attempt) -> Result<Option<f64>, ResolveError> {
        let chart = self.charts.load(&attempt.chart_hash)?;

        if chart.mode != game_mode(self.ruleset) {
            return Ok(None);
        }

        let mods = attempt.mod_set.legacy_bits();
        let difficulty_attributes = Difficulty::new().mods(mods).calculate(&chart);

        let performance_attributes = Performance::new(difficulty_attributes)
            .mods(mods)
            .accuracy(attempt.accuracy * 100.0)
            .calculate();

        let pp = performance_attributes.pp();
        if pp.is_finite() {
            Ok(Some(pp))
        } else {
            Err(ResolveError::Calculation(format!(
                "non-finite pp for chart {}",
                attempt.chart_hash
            )))
        }
    }
}
