use serde::{Deserialize, Serialize};

use crate::tags::TagSet;

/// Water-body size class the buyer expects to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterBody {
    /// Big open water: favors tritoons and higher horsepower.
    Large,
    /// Small lakes and rivers: modest horsepower is the better fit.
    Small,
}

/// Buyer preferences collected by the guided questionnaire.
///
/// Every field is optional and an unanswered (or blank) field contributes
/// nothing to the score, so a partially completed questionnaire still ranks.
/// Free-text comparisons ignore case.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuyerAnswers {
    /// Target spend in dollars; zero or negative counts as unanswered.
    pub budget: Option<f64>,
    /// Expected passenger count; zero counts as unanswered.
    pub party_size: Option<u32>,
    /// Planned activities, matched against item feature tags.
    pub activities: TagSet,
    pub water_body: Option<WaterBody>,
    pub engine_pref: Option<String>,
    /// Desired layouts, matched against item feature tags.
    pub layout_prefs: TagSet,
    pub brand_pref: Option<String>,
}

impl BuyerAnswers {
    pub(crate) fn effective_budget(&self) -> Option<f64> {
        self.budget.filter(|budget| budget.is_finite() && *budget > 0.0)
    }

    pub(crate) fn effective_party_size(&self) -> Option<u32> {
        self.party_size.filter(|party| *party > 0)
    }

    pub(crate) fn effective_engine_pref(&self) -> Option<&str> {
        trimmed_pref(self.engine_pref.as_deref())
    }

    pub(crate) fn effective_brand_pref(&self) -> Option<&str> {
        trimmed_pref(self.brand_pref.as_deref())
    }
}

fn trimmed_pref(pref: Option<&str>) -> Option<&str> {
    pref.map(str::trim).filter(|pref| !pref.is_empty())
}
