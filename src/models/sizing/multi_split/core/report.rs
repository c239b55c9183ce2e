//! Text projection of a [`MatchOutcome`].

use std::fmt;

use crate::support::format::{DecimalComma, Percent};

use super::{MatchOutcome, Verdict};

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Entrada normalizada: [")?;
        for (i, value) in self.evaporators.values().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        writeln!(f, "]")?;
        if let Some(note) = self.seven_as_nine {
            writeln!(f, "{note}")?;
        }
        writeln!(f, "Soma das evaporadoras: {}", self.total)?;

        writeln!(f)?;
        for verdict in &self.verdicts {
            writeln!(f, "{}", TraceLine(verdict, self))?;
        }

        writeln!(f)?;
        for result in &self.best {
            match &result.best {
                Some(best) => writeln!(
                    f,
                    "Melhor opção {}: {} (simultaneidade {})",
                    result.brand,
                    best.model,
                    Percent(best.simultaneity_percent)
                )?,
                None => writeln!(f, "Melhor opção {}: nenhum modelo compatível", result.brand)?,
            }
        }
        Ok(())
    }
}

struct TraceLine<'a>(&'a Verdict, &'a MatchOutcome);

impl fmt::Display for TraceLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self(verdict, outcome) = self;
        let mark = if verdict.listed { '✔' } else { '✖' };
        write!(
            f,
            "{mark} {} - nominal {} - máx {} - limite ({}) = {} - {} - Simultaneidade: {}",
            verdict.model,
            verdict.nominal,
            verdict.max,
            outcome.mode,
            DecimalComma(verdict.limit),
            verdict.compatibility(),
            Percent(verdict.simultaneity_percent),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::models::sizing::multi_split::core::{BrandSelection, MatchInput, evaluate};
    use crate::support::{
        catalog::{Brand, Catalog},
        simultaneity::MultiSplitMode,
    };

    fn render(text: &str, mode: MultiSplitMode, brands: impl Into<BrandSelection>) -> String {
        let input = MatchInput::parse(text, mode, brands);
        evaluate(&Catalog::builtin(), &input).unwrap().to_string()
    }

    #[test]
    fn renders_header_and_trace() {
        let report = render("12,9", MultiSplitMode::Residential, Brand::Lg);
        let lines: Vec<_> = report.lines().collect();

        assert_eq!(lines[0], "Entrada normalizada: [9, 12]");
        assert_eq!(lines[1], "Soma das evaporadoras: 21");
        assert_eq!(lines[2], "");
        assert_eq!(
            lines[3],
            "✔ LG 18 - nominal 18 - máx 24 - limite (residencial) = 24,0 - Compatível - Simultaneidade: 116,7%"
        );
        assert!(report.contains("Melhor opção LG: LG 18 (simultaneidade 116,7%)"));
    }

    #[test]
    fn renders_substitution_note_and_unlisted_models() {
        let report = render("7,7,7,7,7", MultiSplitMode::Corporate, Brand::Daikin);

        assert!(report.starts_with("Entrada normalizada: [7, 7, 7, 7, 7]\n7 tratado como 9\n"));
        assert!(report.contains("✖ Daikin 18 Bi - nominal 18 - máx 24"));
        assert!(report.contains("Combinação não listada"));
        // Read as five 9k units, which only Daikin 38 lists.
        assert!(report.contains("Melhor opção Daikin: Daikin 38"));
    }

    #[test]
    fn marks_listed_combinations_over_the_limit() {
        let report = render("12,18", MultiSplitMode::Corporate, Brand::Samsung);
        assert!(report.contains(
            "✔ Samsung 18 - nominal 18 - máx 30 - limite (corporativo) = 19,8 - Ultrapassa limite - Simultaneidade: 166,7%"
        ));
    }
}
