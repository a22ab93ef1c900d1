//! Rendering and JSON serialization for CLI output.

use std::process::ExitCode;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use mcat_catalogue::Media;
use mcat_query::Criteria;
use serde::Serialize;

/// Number of leading fields shown in their own columns; the rest go to "Details".
const COMMON_FIELDS: usize = 4;

/// JSON output for `search --explain`.
#[derive(Serialize)]
struct JsonExplain<'a> {
    /// The original query string.
    query: &'a str,
    /// The generated formula in glyph form.
    formula: String,
    /// One entry per condition, in variable order.
    conditions: Vec<JsonCondition<'a>>,
}

/// One condition of an explained query.
#[derive(Serialize)]
struct JsonCondition<'a> {
    /// Variable letter standing for the condition.
    variable: char,
    /// Left operand.
    left: &'a str,
    /// Operator token.
    operator: &'static str,
    /// Right operand.
    right: &'a str,
}

/// Prints a value as pretty JSON, reporting serialization failures.
fn print_json<T: Serialize + ?Sized>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Prints search results as a JSON array in catalogue file form.
pub fn output_media_json(items: &[&Media]) -> ExitCode {
    print_json(items)
}

/// Prints search results as a table.
pub fn output_media_table(items: &[&Media]) -> ExitCode {
    if items.is_empty() {
        println!("No results found.");
        return ExitCode::SUCCESS;
    }

    println!("{}", media_table(items, false));
    ExitCode::SUCCESS
}

/// Prints media as a table whose rows are numbered from 1.
pub fn output_numbered_media_table(items: &[&Media]) {
    println!("{}", media_table(items, true));
}

/// Builds the results table, with a leading `#` column when `numbered` is set.
fn media_table(items: &[&Media], numbered: bool) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    let mut header = vec!["Type", "Title", "Rating", "Year", "Details"];
    if numbered {
        header.insert(0, "#");
    }
    table.set_header(header);

    for (number, media) in (1..).zip(items) {
        let fields = media.fields();
        let details = fields
            .iter()
            .skip(COMMON_FIELDS)
            .map(|(name, value)| format!("{name}: {value}"))
            .collect::<Vec<_>>()
            .join(", ");
        let mut row = vec![
            Cell::new(media.media_type()),
            Cell::new(&media.title),
            Cell::new(media.rating),
            Cell::new(media.release_year),
            Cell::new(details),
        ];
        if numbered {
            row.insert(0, Cell::new(number));
        }
        table.add_row(row);
    }

    table
}

/// Builds the JSON form of an explained query.
fn explain_json<'a>(query: &'a str, criteria: &'a Criteria) -> JsonExplain<'a> {
    let formula = criteria.formula();
    JsonExplain {
        query,
        formula: formula.to_string(),
        conditions: criteria
            .conditions()
            .iter()
            .zip(formula.variables())
            .map(|(condition, &variable)| JsonCondition {
                variable,
                left: condition.left(),
                operator: condition.operator().token(),
                right: condition.right(),
            })
            .collect(),
    }
}

/// Prints the explanation of a compiled query.
pub fn output_explain(query: &str, criteria: &Criteria, json: bool) -> ExitCode {
    if json {
        return print_json(&explain_json(query, criteria));
    }

    let formula = criteria.formula();
    println!("Query:");
    println!("   {query}");
    println!();

    println!("Formula:");
    println!("   {formula}");
    println!();

    println!("Conditions:");
    for (condition, variable) in criteria.conditions().iter().zip(formula.variables()) {
        println!("   {variable}  {condition}");
    }
    println!();

    println!("Expression tree:");
    for line in formula.root().to_string().lines() {
        println!("   {line}");
    }

    ExitCode::SUCCESS
}
