use crate::cards::Card;
use crate::evaluator::{compare_hands, evaluate_pool, EvalError, Evaluation};
use crate::hand::Pool;
use core::cmp::Ordering;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("no players to evaluate")]
    NoPlayers,
    #[error("player {id}: {source}")]
    Player {
        id: String,
        #[source]
        source: EvalError,
    },
}

/// A seat at showdown: an identifier and its private hole cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub hole: Vec<Card>,
}

impl Player {
    pub fn new(id: impl Into<String>, hole: Vec<Card>) -> Self {
        Self { id: id.into(), hole }
    }
}

/// One player's best hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct PlayerResult<'a> {
    pub id: &'a str,
    pub best: Evaluation,
}

/// Showdown result: every player's best hand and the winner(s).
///
/// Both lists follow the order players were given in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct GameOutcome<'a> {
    pub winners: Vec<&'a str>,
    pub players: Vec<PlayerResult<'a>>,
}

impl GameOutcome<'_> {
    /// More than one player shares the best hand.
    pub fn is_split(&self) -> bool {
        self.winners.len() > 1
    }

    /// The hand every winner holds (equal under [`compare_hands`]).
    pub fn winning_hand(&self) -> Option<&Evaluation> {
        let first = self.winners.first()?;
        self.players.iter().find(|p| p.id == *first).map(|p| &p.best)
    }

    /// Result for the player with `id`.
    pub fn player(&self, id: &str) -> Option<&PlayerResult<'_>> {
        self.players.iter().find(|p| p.id == id)
    }
}

/// Evaluate a showdown: best hand for each player on the shared board, then
/// the winner set.
///
/// Each pool is the board followed by that player's hole cards and must hold
/// at least five distinct cards.
///
/// ```
/// use holdem_showdown::cards::parse_cards;
/// use holdem_showdown::game::{evaluate, Player};
///
/// let board = parse_cards("5S 6D 7H 8C 9S").unwrap();
/// let players = vec![
///     Player::new("p1", parse_cards("2D KC").unwrap()),
///     Player::new("p2", parse_cards("AD QC").unwrap()),
/// ];
/// let outcome = evaluate(&board, &players).unwrap();
/// assert_eq!(outcome.winners, ["p1", "p2"]);
/// assert!(outcome.is_split());
/// ```
pub fn evaluate<'a>(board: &[Card], players: &'a [Player]) -> Result<GameOutcome<'a>, GameError> {
    if players.is_empty() {
        return Err(GameError::NoPlayers);
    }

    let results = players
        .iter()
        .map(|player| -> Result<PlayerResult<'a>, GameError> {
            let best = Pool::from_parts(board, &player.hole)
                .map(|pool| evaluate_pool(&pool))
                .map_err(|e| GameError::Player { id: player.id.clone(), source: e.into() })?;
            debug!("{}: {}", player.id, best);
            Ok(PlayerResult { id: player.id.as_str(), best })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let winners = resolve_winners(&results);
    debug!("winners: {}", winners.join(", "));

    Ok(GameOutcome { winners, players: results })
}

/// Single left-to-right pass: a stronger hand restarts the leader set, an
/// equal hand joins it.
fn resolve_winners<'a>(results: &[PlayerResult<'a>]) -> Vec<&'a str> {
    let Some((first, rest)) = results.split_first() else {
        return Vec::new();
    };

    let mut best = &first.best;
    let mut winners = vec![first.id];
    for result in rest {
        match compare_hands(&result.best, best) {
            Ordering::Greater => {
                trace!("{} takes the lead with {}", result.id, result.best);
                best = &result.best;
                winners.clear();
                winners.push(result.id);
            }
            Ordering::Equal => {
                trace!("{} ties the lead", result.id);
                winners.push(result.id);
            }
            Ordering::Less => trace!("{} loses to the lead", result.id),
        }
    }
    winners
}
