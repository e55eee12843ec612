//! Choosing who opens the match.
//!
//! Every active player rolls `opening_dice` dice. A unique best total wins.
//! Otherwise only the tied players roll again, each attempt working on a
//! fresh list of contenders, until one total stands alone.

use crate::agents::RollPurpose;
use crate::core::{MatchEvent, PlayerId};
use crate::error::MatchError;
use crate::rules::max_indices;

use super::engine::Match;

impl Match {
    pub(crate) fn determine_first_player(&mut self) -> Result<PlayerId, MatchError> {
        let mut contenders = self.state.active.clone();
        let mut attempt = 0u32;

        loop {
            let mut totals = Vec::with_capacity(contenders.len());
            for &id in &contenders {
                self.agent_ready(id, RollPurpose::Opening { attempt })?;

                let player = self.state.player_mut(id);
                player.reset_dice(self.config.opening_dice);
                player.roll_all_dice(self.roller.as_mut());
                let faces = player.faces();
                let total = player.total_pips();

                self.emit(MatchEvent::OpeningRoll {
                    player: id,
                    attempt,
                    faces,
                    total,
                });
                totals.push(total);
            }

            let best = max_indices(&totals);
            if let [winner] = best.as_slice() {
                return Ok(contenders[*winner]);
            }

            let total = totals[best[0]];
            contenders = best.into_iter().map(|i| contenders[i]).collect();
            self.emit(MatchEvent::TieBreak {
                tied: contenders.clone(),
                total,
            });
            attempt += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::{MatchConfig, MatchEvent, PlayerId, ScriptedRoller};
    use crate::game::MatchBuilder;

    fn opening_events(events: &[MatchEvent]) -> Vec<(PlayerId, u32, u32)> {
        events
            .iter()
            .filter_map(|e| match e {
                MatchEvent::OpeningRoll { player, attempt, total, .. } => {
                    Some((*player, *attempt, *total))
                }
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_tie_rerolls_only_tied_players() {
        // Attempt 0: P1 6+6, P2 2+2, P3 6+6. Attempt 1: P1 3+4, P3 5+6.
        let roller = ScriptedRoller::from_values(&[6, 6, 2, 2, 6, 6, 3, 4, 5, 6]);
        let mut m = MatchBuilder::new(MatchConfig::new(3, 0).with_seed(3))
            .roller(roller)
            .build()
            .unwrap();

        let first = m.determine_first_player().unwrap();
        assert_eq!(first, PlayerId::new(3));

        let events: Vec<MatchEvent> = m.events().records().iter().map(|r| r.event.clone()).collect();
        assert_eq!(
            opening_events(&events),
            vec![
                (PlayerId::new(1), 0, 12),
                (PlayerId::new(2), 0, 4),
                (PlayerId::new(3), 0, 12),
                (PlayerId::new(1), 1, 7),
                (PlayerId::new(3), 1, 11),
            ]
        );
        assert!(events.contains(&MatchEvent::TieBreak {
            tied: vec![PlayerId::new(1), PlayerId::new(3)],
            total: 12,
        }));
    }

    #[test]
    fn test_repeated_ties_keep_rolling() {
        // Two rounds of 4+4 ties before P2 wins with 5+4.
        let roller = ScriptedRoller::from_values(&[4, 4, 4, 4, 4, 4, 4, 4, 1, 2, 5, 4]);
        let mut m = MatchBuilder::new(MatchConfig::new(2, 0).with_seed(3))
            .roller(roller)
            .build()
            .unwrap();

        assert_eq!(m.determine_first_player().unwrap(), PlayerId::new(2));
        let ties = m
            .events()
            .records()
            .iter()
            .filter(|r| matches!(r.event, MatchEvent::TieBreak { .. }))
            .count();
        assert_eq!(ties, 2);
    }
}
