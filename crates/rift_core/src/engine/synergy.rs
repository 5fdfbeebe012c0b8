//! Known champion combos
//!
//! A combo is active when every member is on the same team. Draft scoring
//! rewards completing combos, bans target combos the opponent could finish,
//! and the power model multiplies a team's power by all active combos.

/// Two champions that perform better together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Combo {
    pub name: &'static str,
    pub champions: [&'static str; 2],
    pub bonus: f32,
}

impl Combo {
    #[inline]
    pub fn contains(&self, champion: &str) -> bool {
        self.champions.contains(&champion)
    }

    /// The other member, if `champion` belongs to this combo.
    pub fn partner(&self, champion: &str) -> Option<&'static str> {
        match self.champions {
            [a, b] if a == champion => Some(b),
            [a, b] if b == champion => Some(a),
            _ => None,
        }
    }
}

pub const COMBOS: &[Combo] = &[
    Combo { name: "Lovers", champions: ["Xayah", "Rakan"], bonus: 1.06 },
    Combo { name: "Wind Wall Knock-up", champions: ["Yasuo", "Malphite"], bonus: 1.05 },
    Combo { name: "Ball Delivery", champions: ["Orianna", "Jarvan IV"], bonus: 1.05 },
    Combo { name: "Flow Lane", champions: ["Lucian", "Nami"], bonus: 1.05 },
    Combo { name: "Hypercarry Guard", champions: ["Jinx", "Lulu"], bonus: 1.04 },
    Combo { name: "Fate Dive", champions: ["Twisted Fate", "Nocturne"], bonus: 1.04 },
    Combo { name: "Oath Lane", champions: ["Kalista", "Braum"], bonus: 1.04 },
    Combo { name: "Hero's Entrance", champions: ["Galio", "Camille"], bonus: 1.04 },
    Combo { name: "Lightning Rider", champions: ["Zeri", "Yuumi"], bonus: 1.04 },
    Combo { name: "Lantern Carry", champions: ["Aphelios", "Thresh"], bonus: 1.03 },
    Combo { name: "Poke Lane", champions: ["Ezreal", "Karma"], bonus: 1.03 },
];

/// Multiplier for adding `candidate` to a team that already has `allies`.
pub fn completion_multiplier<S: AsRef<str>>(allies: &[S], candidate: &str) -> f32 {
    COMBOS
        .iter()
        .filter_map(|combo| combo.partner(candidate).map(|partner| (combo, partner)))
        .filter(|(_, partner)| allies.iter().any(|a| a.as_ref() == *partner))
        .map(|(combo, _)| combo.bonus)
        .product()
}

/// Whether `candidate` would complete any combo with `allies`.
pub fn completes_combo<S: AsRef<str>>(allies: &[S], candidate: &str) -> bool {
    completion_multiplier(allies, candidate) > 1.0
}

/// Product of all combos fully present in `lineup`.
pub fn team_multiplier<S: AsRef<str>>(lineup: &[S]) -> f32 {
    active_combos(lineup).map(|c| c.bonus).product()
}

pub fn active_combos<S: AsRef<str>>(lineup: &[S]) -> impl Iterator<Item = &'static Combo> + '_ {
    COMBOS
        .iter()
        .filter(move |combo| combo.champions.iter().all(|m| lineup.iter().any(|c| c.as_ref() == *m)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partner_lookup() {
        let lovers = &COMBOS[0];
        assert_eq!(lovers.partner("Xayah"), Some("Rakan"));
        assert_eq!(lovers.partner("Rakan"), Some("Xayah"));
        assert_eq!(lovers.partner("Jinx"), None);
    }

    #[test]
    fn test_completion_needs_partner_on_team() {
        assert!((completion_multiplier(&["Rakan"], "Xayah") - 1.06).abs() < 1e-6);
        assert!((completion_multiplier(&["Thresh"], "Xayah") - 1.0).abs() < 1e-6);
        assert!((completion_multiplier::<&str>(&[], "Xayah") - 1.0).abs() < 1e-6);
        assert!(completes_combo(&["Malphite".to_string()], "Yasuo"));
    }

    #[test]
    fn test_team_multiplier_stacks_combos() {
        let lineup = ["Camille", "Jarvan IV", "Orianna", "Xayah", "Rakan"];
        let expected = 1.05 * 1.06;
        assert!((team_multiplier(&lineup) - expected).abs() < 1e-5);
        assert_eq!(active_combos(&lineup).count(), 2);
    }

    #[test]
    fn test_no_combo_is_neutral() {
        assert!((team_multiplier(&["Aatrox", "Vi", "Ahri", "Jinx", "Thresh"]) - 1.0).abs() < 1e-6);
    }
}
