//! Round-end settlement.
//!
//! Every active player except the round winner rolls what they still hold.
//! Each pays `min(score, pips)` into the pot; paying their whole score
//! eliminates them. The winner collects the whole pot, every seat gets a
//! fresh set of dice and the winner opens the next round.

use serde::{Deserialize, Serialize};

use super::adjacency::refresh_next;
use crate::core::{DieRoller, EndReason, Face, MatchConfig, MatchState, Phase, PlayerId};

/// One losing player's payment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Liability {
    pub player: PlayerId,
    pub faces: Vec<Face>,
    pub pips: u32,
    /// Points actually paid: `min(score, pips)`.
    pub paid: u32,
    /// The roll covered the whole score.
    pub eliminated: bool,
}

/// Result of settling a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub winner: PlayerId,
    pub liabilities: Vec<Liability>,
    /// Sum of every `paid`, awarded to the winner.
    pub pot: u32,
    pub winner_score: u32,
    /// Players removed from the active set, in seating order.
    pub eliminated: Vec<PlayerId>,
    /// Set when the match cannot continue.
    pub end: Option<EndReason>,
}

/// Settle the round that just ended and prepare the next one.
///
/// # Panics
///
/// Panics unless the round is over.
pub fn settle_round(
    state: &mut MatchState,
    roller: &mut dyn DieRoller,
    config: &MatchConfig,
) -> Settlement {
    assert_eq!(state.phase, Phase::RoundOver, "Settlement needs a finished round");
    let winner = state
        .round_winner
        .expect("a finished round always has a winner");

    let mut liabilities = Vec::with_capacity(state.active.len().saturating_sub(1));
    for id in state.active.clone() {
        if id == winner {
            continue;
        }
        let player = state.player_mut(id);
        player.roll_all_dice(roller);
        let pips = player.total_pips();
        let eliminated = pips >= player.score();
        let paid = player.apply_loss(pips);
        liabilities.push(Liability {
            player: id,
            faces: player.faces(),
            pips,
            paid,
            eliminated,
        });
    }

    let pot: u32 = liabilities.iter().map(|l| l.paid).sum();
    state.player_mut(winner).apply_score_delta(pot);
    let winner_score = state.player(winner).score();

    state.reset_all_dice(config.dice_per_round);

    let eliminated: Vec<PlayerId> = state
        .active
        .iter()
        .copied()
        .filter(|&id| !state.player(id).is_active())
        .collect();
    state.active.retain(|id| !eliminated.contains(id));

    state.current = winner;
    refresh_next(state);
    state.rounds_played += 1;

    let end = if state.active.len() <= 1 {
        Some(EndReason::LastPlayerStanding)
    } else {
        state.round += 1;
        (state.round > config.max_rounds).then_some(EndReason::RoundLimit)
    };
    state.phase = match end {
        Some(reason) => Phase::Finished { reason },
        None => Phase::AwaitingRoll,
    };

    Settlement {
        winner,
        liabilities,
        pot,
        winner_score,
        eliminated,
        end,
    }
}
