use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::support::constraint::{Constrained, StrictlyPositive};

use super::EstimateError;

/// Kind of project, which selects the productivity divisors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectKind {
    Residential,
    Corporate,
}

/// Where the installation takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    /// State capital.
    Capital,
    /// Inland or coastal town.
    Interior,
}

/// Indoor terminal installed in a room.
///
/// Ducted terminals are hidden above the ceiling. Every other kind is
/// exposed and costs more installation time per ton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminalKind {
    Ducted,
    HiWall,
    CassetteOneWay,
    CassetteFourWay,
    FloorCeiling,
}

impl TerminalKind {
    /// Returns `true` for terminals hidden above the ceiling.
    #[must_use]
    pub fn is_ducted(self) -> bool {
        matches!(self, Self::Ducted)
    }
}

/// An unrecognized project kind, location or terminal name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized option: {0}")]
pub struct ParseChoiceError(pub String);

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Residential => "Residencial",
            Self::Corporate => "Corporativo",
        })
    }
}

impl FromStr for ProjectKind {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "residential" | "residencial" => Ok(Self::Residential),
            "corporate" | "corporativo" => Ok(Self::Corporate),
            _ => Err(ParseChoiceError(s.to_owned())),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Capital => "Capital",
            Self::Interior => "Interior/Litoral",
        })
    }
}

impl FromStr for Location {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "capital" => Ok(Self::Capital),
            "interior" | "litoral" | "interior/litoral" | "coast" => Ok(Self::Interior),
            _ => Err(ParseChoiceError(s.to_owned())),
        }
    }
}

impl fmt::Display for TerminalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ducted => "Dutado",
            Self::HiWall => "Hi Wall",
            Self::CassetteOneWay => "K7 1via",
            Self::CassetteFourWay => "K7 4vias",
            Self::FloorCeiling => "Piso Teto",
        })
    }
}

/// Accepts the catalog names ("Dutado", "K7 4vias", ...) case-insensitively.
impl FromStr for TerminalKind {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "dutado" | "ducted" | "duto" => Ok(Self::Ducted),
            "hiwall" => Ok(Self::HiWall),
            "k71via" | "cassete1via" | "cassetteoneway" => Ok(Self::CassetteOneWay),
            "k74vias" | "cassete4vias" | "cassettefourway" => Ok(Self::CassetteFourWay),
            "pisoteto" | "floorceiling" => Ok(Self::FloorCeiling),
            _ => Err(ParseChoiceError(s.to_owned())),
        }
    }
}

/// One room of a project.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    name: String,
    area: Constrained<f64, StrictlyPositive>,
    load_factor: u32,
    double_height: bool,
    occupants: u32,
    terminal: TerminalKind,
}

impl Room {
    /// Creates a single-height, unoccupied room.
    ///
    /// `area` is in m² and `load_factor` in BTU/h per m².
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::UnnamedRoom`] if `name` is blank, or
    /// [`EstimateError::InvalidArea`] if `area` is not strictly positive.
    pub fn new(
        name: impl Into<String>,
        area: f64,
        load_factor: u32,
        terminal: TerminalKind,
    ) -> Result<Self, EstimateError> {
        let name = name.into().trim().to_owned();
        if name.is_empty() {
            return Err(EstimateError::UnnamedRoom);
        }
        let area = StrictlyPositive::new(area).map_err(|source| EstimateError::InvalidArea {
            room: name.clone(),
            source,
        })?;

        Ok(Self {
            name,
            area,
            load_factor,
            double_height: false,
            occupants: 0,
            terminal,
        })
    }

    /// Marks the room as double height, which raises its load.
    #[must_use]
    pub fn with_double_height(mut self, double_height: bool) -> Self {
        self.double_height = double_height;
        self
    }

    /// Sets the number of people the room holds.
    #[must_use]
    pub fn with_occupants(mut self, occupants: u32) -> Self {
        self.occupants = occupants;
        self
    }

    /// Returns the trimmed room name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the floor area, in m².
    #[must_use]
    pub fn area(&self) -> f64 {
        *self.area.as_ref()
    }

    /// Returns the load factor, in BTU/h per m².
    #[must_use]
    pub fn load_factor(&self) -> u32 {
        self.load_factor
    }

    /// Returns `true` if the room is double height.
    #[must_use]
    pub fn double_height(&self) -> bool {
        self.double_height
    }

    /// Returns the number of occupants.
    #[must_use]
    pub fn occupants(&self) -> u32 {
        self.occupants
    }

    /// Returns the terminal installed in the room.
    #[must_use]
    pub fn terminal(&self) -> TerminalKind {
        self.terminal
    }
}

/// A project to estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    /// Kind of project, which selects the divisors.
    pub kind: ProjectKind,

    /// Where the installation takes place.
    pub location: Location,

    /// Whether as-built documentation is part of the scope.
    pub as_built: bool,

    /// Rooms to install, in entry order.
    pub rooms: Vec<Room>,
}

impl Project {
    /// Creates a project with no rooms and no as-built documentation.
    #[must_use]
    pub fn new(kind: ProjectKind, location: Location) -> Self {
        Self {
            kind,
            location,
            as_built: false,
            rooms: Vec::new(),
        }
    }

    /// Includes or excludes as-built documentation.
    #[must_use]
    pub fn with_as_built(mut self, as_built: bool) -> Self {
        self.as_built = as_built;
        self
    }

    /// Appends a room.
    #[must_use]
    pub fn with_room(mut self, room: Room) -> Self {
        self.rooms.push(room);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::constraint::ConstraintError;

    #[test]
    fn room_defaults() {
        let room = Room::new("  Sala ", 30.0, 700, TerminalKind::HiWall).unwrap();
        assert_eq!(room.name(), "Sala");
        assert_relative_eq!(room.area(), 30.0);
        assert!(!room.double_height());
        assert_eq!(room.occupants(), 0);
    }

    #[test]
    fn blank_name_is_rejected() {
        assert!(matches!(
            Room::new("   ", 30.0, 700, TerminalKind::HiWall),
            Err(EstimateError::UnnamedRoom)
        ));
    }

    #[test]
    fn area_must_be_positive() {
        assert!(matches!(
            Room::new("Sala", 0.0, 700, TerminalKind::HiWall),
            Err(EstimateError::InvalidArea {
                source: ConstraintError::Zero,
                ..
            })
        ));
        assert!(matches!(
            Room::new("Sala", f64::NAN, 700, TerminalKind::HiWall),
            Err(EstimateError::InvalidArea {
                source: ConstraintError::NotANumber,
                ..
            })
        ));
    }

    #[test]
    fn parses_catalog_terminal_names() {
        assert_eq!("Dutado".parse::<TerminalKind>(), Ok(TerminalKind::Ducted));
        assert_eq!("hi wall".parse::<TerminalKind>(), Ok(TerminalKind::HiWall));
        assert_eq!("K7 1via".parse::<TerminalKind>(), Ok(TerminalKind::CassetteOneWay));
        assert_eq!("K7 4vias".parse::<TerminalKind>(), Ok(TerminalKind::CassetteFourWay));
        assert_eq!("Piso Teto".parse::<TerminalKind>(), Ok(TerminalKind::FloorCeiling));
        assert!("Split".parse::<TerminalKind>().is_err());

        for kind in [
            TerminalKind::Ducted,
            TerminalKind::HiWall,
            TerminalKind::CassetteOneWay,
            TerminalKind::CassetteFourWay,
            TerminalKind::FloorCeiling,
        ] {
            assert_eq!(kind.to_string().parse::<TerminalKind>(), Ok(kind));
        }
    }

    #[test]
    fn parses_project_options() {
        assert_eq!("Corporativo".parse::<ProjectKind>(), Ok(ProjectKind::Corporate));
        assert_eq!("residential".parse::<ProjectKind>(), Ok(ProjectKind::Residential));
        assert_eq!("Interior/Litoral".parse::<Location>(), Ok(Location::Interior));
        assert_eq!("capital".parse::<Location>(), Ok(Location::Capital));
        assert!("industrial".parse::<ProjectKind>().is_err());
    }
}
