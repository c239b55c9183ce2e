use tracing::{debug, trace};

use super::{EstimateError, LaborCoefficients, Location, Project, TerminalKind};

/// Computed load of one room.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomLoad {
    /// Room name.
    pub name: String,

    /// Terminal installed in the room.
    pub terminal: TerminalKind,

    /// Thermal load in BTU/h, after the height and location multipliers.
    pub capacity: f64,

    /// Refrigeration tons.
    pub tr: f64,

    /// Horsepower equivalent of the load.
    pub hp: f64,

    /// Area served per refrigeration ton.
    pub m2_per_tr: f64,
}

/// Result of a labor-day estimate.
#[derive(Debug, Clone, PartialEq)]
pub struct LaborEstimate {
    /// Per-room loads, in project order.
    pub rooms: Vec<RoomLoad>,

    /// Unrounded days contributed by ducted rooms.
    pub ducted_days: f64,

    /// Unrounded days contributed by exposed rooms, before the extra weight.
    pub exposed_days: f64,

    /// Whole installation days, rounded up.
    pub days: u32,

    /// Working hours for those days.
    pub hours: u32,
}

/// Estimates the installation days of a project.
///
/// The coefficients must already be validated.
///
/// # Errors
///
/// Returns [`EstimateError::UnknownLoadFactor`] if a room uses a load factor
/// the coefficients do not offer, or [`EstimateError::OutOfRange`] if the
/// day or hour count overflows.
pub(crate) fn estimate(
    coefficients: &LaborCoefficients,
    project: &Project,
) -> Result<LaborEstimate, EstimateError> {
    let location = match project.location {
        Location::Capital => coefficients.capital,
        Location::Interior => coefficients.interior,
    };
    let divisors = coefficients.for_project(project.kind);

    let mut ducted_days = 0.0;
    let mut exposed_days = 0.0;
    let mut rooms = Vec::with_capacity(project.rooms.len());

    for room in &project.rooms {
        if !coefficients.load_factors.contains(&room.load_factor()) {
            return Err(EstimateError::UnknownLoadFactor {
                room: room.name().to_owned(),
                factor: room.load_factor(),
            });
        }

        let mut capacity = room.area() * f64::from(room.load_factor())
            + f64::from(room.occupants()) * coefficients.occupant_load;
        if room.double_height() {
            capacity *= coefficients.double_height;
        }
        capacity *= location;

        let tr = capacity / coefficients.btu_per_tr;
        let hp = capacity / coefficients.btu_per_hp;

        if room.terminal().is_ducted() {
            ducted_days += tr / divisors.ducted_divisor;
        } else {
            exposed_days += tr / divisors.exposed_divisor;
        }

        trace!(room = room.name(), capacity, tr, "room load");
        rooms.push(RoomLoad {
            name: room.name().to_owned(),
            terminal: room.terminal(),
            capacity,
            tr,
            hp,
            m2_per_tr: room.area() / tr,
        });
    }

    let mut raw = ducted_days + exposed_days * divisors.exposed_extra;
    if project.as_built {
        raw *= coefficients.as_built;
    }
    let Some((days, hours)) = whole_days(raw, coefficients.hours_per_day) else {
        return Err(EstimateError::OutOfRange { days: raw });
    };

    debug!(
        kind = %project.kind,
        location = %project.location,
        rooms = rooms.len(),
        days,
        "estimated labor days"
    );

    Ok(LaborEstimate {
        rooms,
        ducted_days,
        exposed_days,
        days,
        hours,
    })
}

/// Rounds `raw` up to whole days and converts them to hours.
///
/// Returns `None` if either count does not fit in a `u32`.
fn whole_days(raw: f64, hours_per_day: u32) -> Option<(u32, u32)> {
    let days = raw.ceil();
    if !(0.0..=f64::from(u32::MAX)).contains(&days) {
        return None;
    }
    let days = days as u32;
    days.checked_mul(hours_per_day).map(|hours| (days, hours))
}
