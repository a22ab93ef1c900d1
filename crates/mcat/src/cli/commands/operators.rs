//! Implementation of `mcat operators`.

use std::process::ExitCode;

use comfy_table::{Table, presets::UTF8_FULL_CONDENSED};
use mcat_formula::Connective;
use mcat_query::{CONNECTIVE_ALIASES, SearchOperator};

/// Lists the search operators and the spellings accepted for each connective.
pub fn run() -> ExitCode {
    println!("{}", operator_table());
    println!();
    println!("{}", connective_table());
    println!();
    println!("Prefix an operator with ! to negate it, e.g. 'title !contains Star'.");
    ExitCode::SUCCESS
}

/// Builds the operator table.
fn operator_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Operator", "Description"]);
    for operator in SearchOperator::ALL {
        table.add_row(vec![operator.token(), operator.description()]);
    }
    table
}

/// Builds the connective table, grouping aliases by connective.
fn connective_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Connective", "Glyph", "Written as"]);
    for connective in Connective::ALL {
        let aliases = CONNECTIVE_ALIASES
            .iter()
            .filter(|(_, c)| *c == connective)
            .map(|(alias, _)| *alias)
            .collect::<Vec<_>>()
            .join("  ");
        table.add_row(vec![
            connective.name().to_string(),
            connective.glyph().to_string(),
            aliases,
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_operator_is_listed() {
        let rendered = operator_table().to_string();
        for operator in SearchOperator::ALL {
            assert!(rendered.contains(operator.description()));
        }
    }

    #[test]
    fn aliases_are_grouped() {
        let rendered = connective_table().to_string();
        assert!(rendered.contains("<implies>"));
        assert!(rendered.contains("<reverse_implies>"));
        assert!(rendered.contains("&&"));
    }
}
