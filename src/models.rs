use crate::entities::{actor_info, movie_info};

/// Relation type marking a lead performance ("starring"). Every other value
/// is treated as a directing or other off-screen role.
pub const LEAD_PERFORMER: &str = "主演";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    Lead,
    Other,
}

impl Role {
    pub fn of(relation_type: Option<&str>) -> Self {
        match relation_type {
            Some(LEAD_PERFORMER) => Role::Lead,
            _ => Role::Other,
        }
    }
}

/// Actors linked to one movie, split by role.
#[derive(Clone, Debug, Default)]
pub struct MovieCredits {
    pub actors: Vec<actor_info::Model>,
    pub directors: Vec<actor_info::Model>,
}

/// Movies linked to one actor, split by role.
#[derive(Clone, Debug, Default)]
pub struct ActorWorks {
    pub act_works: Vec<movie_info::Model>,
    pub direct_works: Vec<movie_info::Model>,
}

#[derive(Clone, Debug)]
pub struct MovieSummary {
    pub movie: movie_info::Model,
    pub actor_names: Vec<String>,
    pub director_names: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct ActorSummary {
    pub actor: actor_info::Model,
    pub acting_count: usize,
    pub directing_count: usize,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Invalid input.")]
pub struct InvalidActor;

/// A validated add-actor submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewActor {
    pub name: String,
    pub gender: String,
    pub country: String,
}

impl NewActor {
    pub fn parse(name: &str, gender: &str, country: &str) -> Result<Self, InvalidActor> {
        let name = name.trim();
        let gender = gender.trim();
        let country = country.trim();

        if name.is_empty() || gender.is_empty() || country.is_empty() {
            return Err(InvalidActor);
        }

        Ok(Self { name: name.to_string(), gender: gender.to_string(), country: country.to_string() })
    }
}
