use gamedex_core::game::{Game, seed_catalog};
use gamedex_core::input::GamePatch;

/// In-memory, ordered game collection.
///
/// A record's identifier is its position in the sequence at request time.
/// Removing a record shifts every later identifier down by one, so
/// identifiers are not stable across deletions. That is a compatibility
/// requirement of the wire contract, not an oversight.
pub struct GameStore {
    games: Vec<Game>,
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStore {
    /// A store holding the seed catalog.
    pub fn new() -> Self {
        Self {
            games: seed_catalog(),
        }
    }

    /// A store holding the given records.
    pub fn from_games(games: Vec<Game>) -> Self {
        Self { games }
    }

    /// All records in insertion order.
    pub fn all(&self) -> &[Game] {
        &self.games
    }

    /// Case-insensitive exact match on genre, original order preserved.
    pub fn by_genre(&self, genre: &str) -> Vec<Game> {
        let wanted = genre.to_lowercase();
        self.games
            .iter()
            .filter(|g| g.genre.to_lowercase() == wanted)
            .cloned()
            .collect()
    }

    pub fn get(&self, index: usize) -> Option<&Game> {
        self.games.get(index)
    }

    /// Append a record, returning its identifier.
    pub fn push(&mut self, game: Game) -> usize {
        self.games.push(game);
        self.games.len() - 1
    }

    /// Apply a partial update in place, returning the updated record.
    pub fn patch(&mut self, index: usize, patch: &GamePatch) -> Option<Game> {
        let game = self.games.get_mut(index)?;
        patch.apply(game);
        Some(game.clone())
    }

    /// Remove the record at `index`, shifting later identifiers down.
    pub fn remove(&mut self, index: usize) -> Option<Game> {
        if index < self.games.len() {
            Some(self.games.remove(index))
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
