use thiserror::Error;

/// The entry shown before the user has picked a sport
pub const SPORT_PLACEHOLDER: &str = "Selecciona un deporte...";

/// The catalogue entry that lets the user type their own activity
pub const OTHER_SPORT: &str = "Otro";

/// Youngest and oldest accepted ages
pub const AGE_RANGE: std::ops::RangeInclusive<u32> = 1..=100;

/// Every selectable entry, in display order, placeholder first
pub const SPORTS: [&str; 17] = [
    SPORT_PLACEHOLDER,
    "Fútbol",
    "Baloncesto",
    "Tenis",
    "Natación",
    "Ciclismo",
    "Voleibol",
    "Atletismo",
    "Béisbol",
    "Rugby",
    "Boxeo",
    "Artes Marciales",
    "Gimnasia",
    "Escalada",
    "Surf",
    "Skateboarding",
    OTHER_SPORT,
];

/// Find the catalogue spelling of `selection`, ignoring case and surrounding
/// whitespace. The placeholder is part of the catalogue and is returned as-is.
pub fn find_sport(selection: &str) -> Option<&'static str> {
    let wanted = selection.trim().to_lowercase();
    SPORTS
        .iter()
        .copied()
        .find(|sport| sport.to_lowercase() == wanted)
}

/// A favourite activity, either straight from the catalogue or typed in by the
/// user after picking [OTHER_SPORT]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activity {
    Sport(&'static str),
    Other(String),
}

impl Activity {
    pub fn as_str(&self) -> &str {
        match self {
            Activity::Sport(sport) => sport,
            Activity::Other(text) => text.as_str(),
        }
    }
}

/// A single problem with the submitted form, displayed to the user as-is
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Por favor, ingresa tu nombre")]
    BlankName,
    #[error("Por favor, selecciona un deporte")]
    SportNotSelected,
    #[error("Deporte desconocido: {0}")]
    UnknownSport(String),
    #[error("La edad debe estar entre 1 y 100")]
    AgeOutOfRange(u32),
}

/// Every problem found with a submission
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }
}

/// The validated input of one document render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationRequest {
    full_name: String,
    age: u8,
    activity: Activity,
}

impl PresentationRequest {
    /// Validate a form submission.
    ///
    /// `sport` must be a catalogue entry other than the placeholder. When it is
    /// [OTHER_SPORT], a non-blank `other` text replaces it verbatim (trimmed);
    /// without one the activity stays "Otro". All problems are reported together.
    pub fn new(
        full_name: &str,
        age: u32,
        sport: &str,
        other: Option<&str>,
    ) -> Result<PresentationRequest, ValidationErrors> {
        let mut errors = Vec::new();

        let full_name = full_name.trim();
        if full_name.is_empty() {
            errors.push(ValidationError::BlankName);
        }

        if !AGE_RANGE.contains(&age) {
            errors.push(ValidationError::AgeOutOfRange(age));
        }

        let activity = match find_sport(sport) {
            Some(SPORT_PLACEHOLDER) => {
                errors.push(ValidationError::SportNotSelected);
                None
            }
            Some(OTHER_SPORT) => match other.map(str::trim).filter(|text| !text.is_empty()) {
                Some(text) => Some(Activity::Other(text.to_string())),
                None => Some(Activity::Sport(OTHER_SPORT)),
            },
            Some(sport) => Some(Activity::Sport(sport)),
            None if sport.trim().is_empty() => {
                errors.push(ValidationError::SportNotSelected);
                None
            }
            None => {
                errors.push(ValidationError::UnknownSport(sport.trim().to_string()));
                None
            }
        };

        match activity {
            Some(activity) if errors.is_empty() => Ok(PresentationRequest {
                full_name: full_name.to_string(),
                age: age as u8,
                activity,
            }),
            _ => Err(ValidationErrors(errors)),
        }
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn age(&self) -> u8 {
        self.age
    }

    pub fn activity(&self) -> &Activity {
        &self.activity
    }
}
