//! Text projection of a [`Selection`].

use std::fmt;

use crate::support::format::Percent;

use super::{RatedCondenser, Selection, Status};

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Marca: {} | Orientação: {}", self.brand, self.orientation)?;
        if self.is_capped() {
            writeln!(
                f,
                "Simultaneidade: {} (solicitada {}, limitada pela marca)",
                self.applied_percent, self.requested_percent
            )?;
        } else {
            writeln!(f, "Simultaneidade: {}", self.applied_percent)?;
        }
        writeln!(
            f,
            "Limite de referência da marca: {}",
            Percent(self.brand_ceiling * 100.0)
        )?;
        writeln!(f, "Soma das evaporadoras: {}", self.sum)?;
        writeln!(f, "Capacidade mínima necessária: {}", self.min_required)?;

        writeln!(f)?;
        for condenser in &self.condensers {
            writeln!(f, "{}", TraceLine(condenser))?;
        }

        writeln!(f)?;
        match self.ideal() {
            Some(ideal) => {
                writeln!(f, "Ideal: {}", ideal.name)?;
                writeln!(f, "Uma acima: {}", name_or_none(self.one_up()))?;
                writeln!(f, "Uma abaixo: {}", name_or_none(self.one_down()))?;
            }
            None => writeln!(f, "Nenhuma condensadora adequada")?,
        }
        Ok(())
    }
}

struct TraceLine<'a>(&'a RatedCondenser);

impl fmt::Display for TraceLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.0;
        let mark = match c.status {
            Status::Ok => '✔',
            Status::Warn => '!',
            Status::Error => '✖',
        };
        write!(
            f,
            "{mark} {} - nominal {} - máx {} - limite {} - uso {} - {}",
            c.name,
            c.nominal,
            c.max,
            c.limit,
            Percent(c.usage_percent),
            c.status,
        )
    }
}

fn name_or_none(condenser: Option<&RatedCondenser>) -> &str {
    condenser.map_or("nenhuma", |c| c.name.as_str())
}
