//! The validated-input boundary for request bodies.
//!
//! Bodies arrive as untyped JSON and are parsed here into strongly-typed
//! records, carrying over the loose coercion rules of the wire contract:
//! scalar values coerce to strings, `year` accepts integer strings, and a
//! required field counts as missing when its value is falsy.

use serde_json::Value;

use crate::game::Game;

/// Validation failures raised when parsing a request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInput {
    /// A required string field is absent, empty, or falsy.
    MissingFields,
    /// A `year` value was supplied but is not an integer.
    YearNotInteger,
    /// A string field was given an array or object value.
    NonScalarField,
}

impl std::fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFields => write!(f, "missing required fields"),
            Self::YearNotInteger => write!(f, "year must be an integer if provided"),
            Self::NonScalarField => write!(f, "string fields must be scalar values"),
        }
    }
}

impl std::error::Error for InvalidInput {}

/// True for values the wire contract treats as "not provided": null,
/// `false`, numeric zero, and the empty string.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Coerce a scalar JSON value to its string form. A present null coerces to
/// the literal string "null".
fn coerce_string(value: &Value) -> Result<String, InvalidInput> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok("null".to_string()),
        Value::Array(_) | Value::Object(_) => Err(InvalidInput::NonScalarField),
    }
}

/// Coerce a JSON value to an integer year. Accepts integers, integer-valued
/// floats, and strings that parse as integers.
fn coerce_year(value: &Value) -> Result<i32, InvalidInput> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i32::try_from(i).map_err(|_| InvalidInput::YearNotInteger)
            } else if let Some(f) = n.as_f64()
                && f.fract() == 0.0
                && f >= f64::from(i32::MIN)
                && f <= f64::from(i32::MAX)
            {
                Ok(f as i32)
            } else {
                Err(InvalidInput::YearNotInteger)
            }
        },
        Value::String(s) => s
            .trim()
            .parse::<i32>()
            .map_err(|_| InvalidInput::YearNotInteger),
        _ => Err(InvalidInput::YearNotInteger),
    }
}

/// A fully validated creation payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameDraft {
    pub title: String,
    pub genre: String,
    pub platform: String,
    pub year: Option<i32>,
    pub developer: String,
}

impl GameDraft {
    /// Parse an untyped JSON body into a draft, or a typed validation error.
    pub fn from_value(body: &Value) -> Result<Self, InvalidInput> {
        let required = |key: &str| -> Result<String, InvalidInput> {
            match body.get(key) {
                None => Err(InvalidInput::MissingFields),
                Some(v) if is_falsy(v) => Err(InvalidInput::MissingFields),
                Some(v) => coerce_string(v),
            }
        };

        let title = required("title")?;
        let genre = required("genre")?;
        let platform = required("platform")?;
        let developer = required("developer")?;

        let year = match body.get("year") {
            None | Some(Value::Null) => None,
            Some(v) => Some(coerce_year(v)?),
        };

        Ok(Self {
            title,
            genre,
            platform,
            year,
            developer,
        })
    }

    /// The catalog record this draft produces.
    pub fn into_game(self) -> Game {
        Game {
            title: self.title,
            genre: self.genre,
            platform: self.platform,
            year: self.year,
            developer: self.developer,
        }
    }
}

/// A partial update payload. `None` fields were absent from the body and
/// leave the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GamePatch {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub platform: Option<String>,
    /// Outer `None`: key absent. `Some(None)`: explicit null, clears the
    /// stored year.
    pub year: Option<Option<i32>>,
    pub developer: Option<String>,
}

impl GamePatch {
    /// Parse an untyped JSON body into a patch, or a typed validation error.
    pub fn from_value(body: &Value) -> Result<Self, InvalidInput> {
        let field = |key: &str| -> Result<Option<String>, InvalidInput> {
            body.get(key).map(coerce_string).transpose()
        };

        let year = match body.get("year") {
            None => None,
            Some(Value::Null) => Some(None),
            Some(v) => Some(Some(coerce_year(v)?)),
        };

        Ok(Self {
            title: field("title")?,
            genre: field("genre")?,
            platform: field("platform")?,
            year,
            developer: field("developer")?,
        })
    }

    /// Overwrite only the fields present in the patch.
    pub fn apply(&self, game: &mut Game) {
        if let Some(title) = &self.title {
            game.title = title.clone();
        }
        if let Some(genre) = &self.genre {
            game.genre = genre.clone();
        }
        if let Some(platform) = &self.platform {
            game.platform = platform.clone();
        }
        if let Some(developer) = &self.developer {
            game.developer = developer.clone();
        }
        if let Some(year) = self.year {
            game.year = year;
        }
    }
}
