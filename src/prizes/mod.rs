//! Prize Ledger Module
//!
//! Aggregations over the list of winning numbers:
//! - the prize ranking, each prize with its owner
//! - totals per registered person
//! - the grand total paid out by the draw
//!
//! Prizes are matched to holders by ticket number at query time. A prize
//! whose number nobody registered still counts in the grand total but not
//! in anyone's personal total.

mod ledger;

pub use ledger::{rank_totals, ranked_prizes, total_prize_amount, totals_by_person};
