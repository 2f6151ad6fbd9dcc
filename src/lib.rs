//! holdem-showdown: Texas Hold'em showdown evaluation
//!
//! Goals:
//! - Best five of the board plus hole cards, classified into the nine standard categories
//! - Deterministic: same input, same outcome, including which five cards are reported
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: resolve a showdown
//! ```
//! use holdem_showdown::cards::parse_cards;
//! use holdem_showdown::evaluator::Category;
//! use holdem_showdown::game::{evaluate, Player};
//!
//! let board = parse_cards("9S 8S 7S 6C 5D").unwrap();
//! let players = vec![
//!     Player::new("a", parse_cards("4H 3H").unwrap()),
//!     Player::new("b", parse_cards("TS 2S").unwrap()),
//! ];
//!
//! let outcome = evaluate(&board, &players).unwrap();
//! assert_eq!(outcome.winners, ["b"]);
//! assert_eq!(outcome.players[0].best.category, Category::Straight);
//! assert_eq!(outcome.players[1].best.category, Category::Flush);
//! ```
//!
//! ## CLI
//! ```sh
//! cargo run --bin holdem-showdown -- --board "AS KD 7H 4S 2C" --player p1=9D,3C --player p2=7D,3C
//! ```

pub mod cards;
pub mod evaluator;
pub mod game;
pub mod hand;
