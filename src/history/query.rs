use std::borrow::Borrow;

use super::{timestamps::completed_at_of, GameHistory, GameTypeFilter, HistoryError};

/// Keeps the records matching `filter`, preserving their relative order.
///
/// Works over owned records or references alike so it composes with
/// [`sort_by_recency`] without cloning.
pub fn filter_by_type<I, R>(records: I, filter: GameTypeFilter) -> Vec<R>
where
    I: IntoIterator<Item = R>,
    R: Borrow<GameHistory>,
{
    records
        .into_iter()
        .filter(|record| {
            let game: &GameHistory = record.borrow();
            filter.matches(game.game_type)
        })
        .collect()
}

/// Orders records most recent first by `completedAt`.
///
/// Stable: records completed at the same instant keep their input order.
/// Fails on the first timestamp that does not parse.
pub fn sort_by_recency<R>(records: Vec<R>) -> Result<Vec<R>, HistoryError>
where
    R: Borrow<GameHistory>,
{
    let mut keyed = records
        .into_iter()
        .map(|record| {
            let game: &GameHistory = record.borrow();
            completed_at_of(game).map(|at| (at, record))
        })
        .collect::<Result<Vec<_>, _>>()?;

    keyed.sort_by(|(a, _), (b, _)| b.cmp(a));

    Ok(keyed.into_iter().map(|(_, record)| record).collect())
}

/// The last `limit` records in insertion order, newest-appended first
pub fn most_recently_added<R>(records: &[R], limit: usize) -> Vec<&R> {
    records.iter().rev().take(limit).collect()
}
