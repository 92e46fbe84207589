use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Input that matches none of the menu entries
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown menu choice: '{0}'")]
pub struct UnknownChoice(pub String);

/// The five menu entries, numbered as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    List,
    Add,
    Update,
    Delete,
    Exit,
}

impl MenuChoice {
    /// All entries in display order
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::List,
        MenuChoice::Add,
        MenuChoice::Update,
        MenuChoice::Delete,
        MenuChoice::Exit,
    ];

    pub fn number(self) -> u8 {
        match self {
            Self::List => 1,
            Self::Add => 2,
            Self::Update => 3,
            Self::Delete => 4,
            Self::Exit => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::List => "List all videos",
            Self::Add => "Add a video",
            Self::Update => "Update a video's details",
            Self::Delete => "Delete a video",
            Self::Exit => "Exit the app",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

impl FromStr for MenuChoice {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|choice| trimmed == choice.number().to_string())
            .ok_or_else(|| UnknownChoice(trimmed.to_string()))
    }
}
