//! Implementation of `mcat search`.

use std::process::ExitCode;

use log::info;
use mcat_config::OutputFormat;
use mcat_query::Criteria;

use crate::cli::{
    args::SearchCommand,
    context::CommandContext,
    output::{output_explain, output_media_json, output_media_table},
};

/// Compiles the query, scans the catalogue and prints matching media.
pub fn run(ctx: &CommandContext, cmd: &SearchCommand) -> ExitCode {
    let criteria = match Criteria::compile(&cmd.query) {
        Ok(criteria) => criteria,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cmd.explain.explain {
        return output_explain(&cmd.query, &criteria, cmd.output.json);
    }

    let catalogue = match ctx.catalogue(cmd.catalogue.as_deref()) {
        Ok(catalogue) => catalogue,
        Err(code) => return code,
    };

    let limit = cmd.limit.unwrap_or(ctx.config.search.limit);
    let candidates = catalogue.items_by_type(cmd.media_type);
    let scanned = candidates.len();
    let mut results: Vec<_> = criteria.filter(candidates).collect();
    info!("{} of {scanned} record(s) matched", results.len());
    if limit > 0 {
        results.truncate(limit);
    }

    if cmd.output.json || ctx.config.output.format == OutputFormat::Json {
        output_media_json(&results)
    } else {
        output_media_table(&results)
    }
}
