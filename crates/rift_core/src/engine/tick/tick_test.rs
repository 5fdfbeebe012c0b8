#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::engine::combat::CombatResolver;
    use crate::engine::tick::state::TimedBuff;
    use crate::models::{Champion, Objective, Player, TeamRoster};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn lineup(team: &str, overall: u8) -> Lineup {
        let players = Role::ALL.iter().map(|&r| Player::new(format!("{team}-{r}"), r, overall)).collect();
        let roster = TeamRoster::new(team, players).unwrap();
        let picks = Role::ALL.map(|r| Some(Champion::placeholder(r)));
        Lineup::from_picks(&roster, &picks)
    }

    fn mirror() -> [Lineup; 2] {
        [lineup("Blue Team", 80), lineup("Red Team", 80)]
    }

    #[test]
    fn test_game_terminates_within_cap() {
        let cfg = EngineConfig::default();
        let engine = TickEngine::new(&cfg);
        let lineups = mirror();
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let outcome = engine.simulate(&mut rng, &lineups, [1.0, 1.0]);
            assert!(outcome.state.minute <= 70, "seed {seed}: minute {}", outcome.state.minute);
            assert!(outcome.end_second <= 70 * 60);
            for side in Side::BOTH {
                assert!(outcome.state.side(side).nexus_health >= 0.0);
            }
            assert!(!outcome.state.is_running());
        }
    }

    #[test]
    fn test_nexus_end_matches_state() {
        let cfg = EngineConfig::high_tempo();
        let engine = TickEngine::new(&cfg);
        let lineups = mirror();
        let mut nexus_endings = 0;
        for seed in 0..40 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let outcome = engine.simulate(&mut rng, &lineups, [1.0, 1.0]);
            if outcome.reason == EndReason::NexusDestroyed {
                nexus_endings += 1;
                let loser = outcome.winner.opponent();
                assert_eq!(outcome.state.side(loser).nexus_health, 0.0);
            }
        }
        assert!(nexus_endings > 0);
    }

    #[test]
    fn test_event_log_sorted_and_ends_with_game_end() {
        let cfg = EngineConfig::high_tempo();
        let engine = TickEngine::new(&cfg);
        let lineups = mirror();
        for seed in 0..500 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let outcome = engine.simulate(&mut rng, &lineups, [1.0, 1.0]);
            assert!(outcome.events.windows(2).all(|w| w[0].second <= w[1].second), "seed {seed}");
            let ended: Vec<_> =
                outcome.events.iter().filter(|e| matches!(e.kind, EventKind::GameEnded { .. })).collect();
            assert_eq!(ended.len(), 1, "seed {seed}");
            assert_eq!(ended[0].second, outcome.end_second);
            assert!(outcome.events.iter().all(|e| e.second <= outcome.end_second), "seed {seed}");
        }
    }

    #[test]
    fn test_kills_stay_inside_skirmish_window() {
        let cfg = EngineConfig::high_tempo();
        let engine = TickEngine::new(&cfg);
        let lineups = mirror();
        for seed in 0..200 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let outcome = engine.simulate(&mut rng, &lineups, [1.0, 1.0]);
            for event in &outcome.events {
                if matches!(event.kind, EventKind::Kill { .. } | EventKind::FlashEscape { .. }) {
                    assert!(SKIRMISH_WINDOW.contains(&(event.second % 60)), "seed {seed}: {event:?}");
                }
            }
        }
    }

    #[test]
    fn test_time_limit_when_cap_is_low() {
        let mut cfg = EngineConfig::default();
        cfg.tick.max_minutes = 3;
        let engine = TickEngine::new(&cfg);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let outcome = engine.simulate(&mut rng, &mirror(), [1.0, 1.0]);
        assert_eq!(outcome.reason, EndReason::TimeLimit);
        assert_eq!(outcome.end_second, 180);
        assert_eq!(outcome.state.minute, 3);
    }

    #[test]
    fn test_same_seed_same_game() {
        let cfg = EngineConfig::default();
        let engine = TickEngine::new(&cfg);
        let lineups = mirror();
        let a = engine.simulate(&mut ChaCha8Rng::seed_from_u64(11), &lineups, [1.0, 1.0]);
        let b = engine.simulate(&mut ChaCha8Rng::seed_from_u64(11), &lineups, [1.0, 1.0]);
        assert_eq!(a.events, b.events);
        assert_eq!(a.state, b.state);
    }

    #[test]
    fn test_mirror_lineups_are_balanced() {
        let cfg = EngineConfig::default();
        let engine = TickEngine::new(&cfg);
        let lineups = mirror();
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let blue_wins = (0..1000)
            .filter(|_| engine.simulate(&mut rng, &lineups, [1.0, 1.0]).winner == Side::Blue)
            .count();
        assert!((450..=550).contains(&blue_wins), "blue won {blue_wins}/1000");
    }

    #[test]
    fn test_stronger_team_wins_more() {
        let cfg = EngineConfig::default();
        let engine = TickEngine::new(&cfg);
        let lineups = [lineup("Strong", 95), lineup("Weak", 55)];
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let wins = (0..300)
            .filter(|_| engine.simulate(&mut rng, &lineups, [1.0, 1.0]).winner == Side::Blue)
            .count();
        assert!(wins > 180, "strong side won only {wins}/300");
    }

    #[test]
    fn test_baron_raises_owner_win_probability() {
        let cfg = EngineConfig::default();
        let engine = TickEngine::new(&cfg);
        let lineups = mirror();
        let mut run = GameRun {
            state: GameState::new(&cfg.tick),
            events: Vec::new(),
            profile: engine.power.profile(&lineups),
            modifiers: [1.0, 1.0],
        };
        let resolver = CombatResolver::new(cfg.tick.combat_tilt);
        let second = 1400;
        let before = resolver.win_probability(
            engine.side_power(&run, Side::Red, second),
            engine.side_power(&run, Side::Blue, second),
        );
        run.emit(
            1260,
            EventKind::ObjectiveTaken { side: Side::Red, objective: Objective::Baron, gold: 0 },
        );
        assert_eq!(
            run.state.baron,
            Some(TimedBuff { owner: Side::Red, expires_at: 1260 + cfg.tick.baron_duration })
        );
        let after = resolver.win_probability(
            engine.side_power(&run, Side::Red, second),
            engine.side_power(&run, Side::Blue, second),
        );
        assert!((before - 0.5).abs() < 1e-6);
        assert!(after > before);
    }

    #[test]
    fn test_time_limit_tiebreakers() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut state = GameState::default();
        state.sides[1].nexus_health = 40.0;
        assert_eq!(time_limit_winner(&mut rng, &state), Side::Blue);

        let mut state = GameState::default();
        state.sides[1].structures_destroyed = 2;
        state.sides[0].kills = 10;
        assert_eq!(time_limit_winner(&mut rng, &state), Side::Red);

        let mut state = GameState::default();
        state.sides[0].kills = 3;
        assert_eq!(time_limit_winner(&mut rng, &state), Side::Blue);

        let mut state = GameState::default();
        state.sides[1].players[0].gold += 1;
        assert_eq!(time_limit_winner(&mut rng, &state), Side::Red);
    }

    #[test]
    fn test_dead_players_never_act() {
        let cfg = EngineConfig::high_tempo();
        let engine = TickEngine::new(&cfg);
        let lineups = mirror();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let outcome = engine.simulate(&mut rng, &lineups, [1.0, 1.0]);

        // replay kills in emission-independent order: a victim must not
        // kill or assist before its respawn second
        let mut respawn: std::collections::HashMap<crate::models::PlayerRef, u32> = Default::default();
        for event in &outcome.events {
            if let EventKind::Kill { killer, victim, assisters, respawn_at, .. } = &event.kind {
                for actor in std::iter::once(killer).chain(assisters.iter()) {
                    let until = respawn.get(actor).copied().unwrap_or(0);
                    assert!(until <= event.second, "{actor:?} acted while dead at {}", event.second);
                }
                respawn.insert(*victim, *respawn_at);
            }
        }
    }
}
