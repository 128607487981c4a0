use serde::{Deserialize, Serialize};

/// A single catalog record.
///
/// `year` is optional; when unset it is omitted from the serialized form
/// entirely rather than written as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub title: String,
    pub genre: String,
    pub platform: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    pub developer: String,
}

/// The records every fresh catalog starts with.
pub fn seed_catalog() -> Vec<Game> {
    vec![
        Game {
            title: "The Legend of Zelda: Breath of the Wild".to_string(),
            genre: "Adventure".to_string(),
            platform: "Nintendo Switch".to_string(),
            year: Some(2017),
            developer: "Nintendo".to_string(),
        },
        Game {
            title: "God of War".to_string(),
            genre: "Action".to_string(),
            platform: "PlayStation 4".to_string(),
            year: Some(2018),
            developer: "Santa Monica Studio".to_string(),
        },
        Game {
            title: "Hollow Knight".to_string(),
            genre: "Metroidvania".to_string(),
            platform: "PC".to_string(),
            year: Some(2017),
            developer: "Team Cherry".to_string(),
        },
        Game {
            title: "Forza Horizon 5".to_string(),
            genre: "Racing".to_string(),
            platform: "Xbox Series X|S".to_string(),
            year: Some(2021),
            developer: "Playground Games".to_string(),
        },
        Game {
            title: "Stardew Valley".to_string(),
            genre: "Simulation".to_string(),
            platform: "Nintendo Switch".to_string(),
            year: Some(2016),
            developer: "ConcernedApe".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_catalog_has_five_records() {
        let games = seed_catalog();
        assert_eq!(games.len(), 5);
        assert_eq!(games[0].title, "The Legend of Zelda: Breath of the Wild");
        assert_eq!(games[4].developer, "ConcernedApe");
    }

    #[test]
    fn serializes_with_year() {
        let game = &seed_catalog()[1];
        let json = serde_json::to_value(game).unwrap();
        assert_eq!(json["title"], "God of War");
        assert_eq!(json["year"], 2018);
    }

    #[test]
    fn unset_year_is_omitted() {
        let game = Game {
            title: "Tetris".to_string(),
            genre: "Puzzle".to_string(),
            platform: "Game Boy".to_string(),
            year: None,
            developer: "Nintendo".to_string(),
        };
        let json = serde_json::to_value(&game).unwrap();
        assert!(json.get("year").is_none());
    }

    #[test]
    fn deserializes_without_year() {
        let game: Game = serde_json::from_str(
            r#"{"title":"Tetris","genre":"Puzzle","platform":"Game Boy","developer":"Nintendo"}"#,
        )
        .unwrap();
        assert_eq!(game.year, None);
    }
}
