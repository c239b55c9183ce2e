use std::fmt;

use crate::support::format::DecimalComma;

use super::LaborEstimate;

impl fmt::Display for LaborEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for room in &self.rooms {
            writeln!(
                f,
                "{} ({}) - carga {} BTU/h - {} TR - {} HP - {} m²/TR",
                room.name,
                room.terminal,
                room.capacity.round(),
                DecimalComma(room.tr),
                DecimalComma(room.hp),
                DecimalComma(room.m2_per_tr),
            )?;
        }
        if !self.rooms.is_empty() {
            writeln!(f)?;
        }
        writeln!(
            f,
            "Estimativa de Diárias: {} | Estimativa de Hora Útil: {}",
            self.days, self.hours
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::models::estimating::labor_days::core::{
        LaborCoefficients, Location, Project, ProjectKind, Room, TerminalKind, estimate,
    };

    #[test]
    fn renders_rooms_and_summary() {
        let project = Project::new(ProjectKind::Residential, Location::Capital).with_room(
            Room::new("Sala", 30.0, 700, TerminalKind::HiWall)
                .unwrap()
                .with_occupants(2),
        );
        let report = estimate(&LaborCoefficients::default(), &project)
            .unwrap()
            .to_string();

        assert_eq!(
            report,
            "Sala (Hi Wall) - carga 22000 BTU/h - 1,8 TR - 2,3 HP - 16,4 m²/TR\n\
             \n\
             Estimativa de Diárias: 1 | Estimativa de Hora Útil: 8\n"
        );
    }

    #[test]
    fn empty_project_renders_summary_only() {
        let project = Project::new(ProjectKind::Corporate, Location::Interior);
        let report = estimate(&LaborCoefficients::default(), &project)
            .unwrap()
            .to_string();
        assert_eq!(report, "Estimativa de Diárias: 0 | Estimativa de Hora Útil: 0\n");
    }
}
