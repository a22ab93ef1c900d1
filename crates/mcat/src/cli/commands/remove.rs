//! Implementation of `mcat remove`.

use std::process::ExitCode;

use log::info;
use mcat_catalogue::{Catalogue, Media};
use mcat_query::Criteria;

use crate::cli::{
    args::RemoveCommand, context::CommandContext, output::output_numbered_media_table,
};

/// Removes the records matching the query and writes the catalogue back.
pub fn run(ctx: &CommandContext, cmd: &RemoveCommand) -> ExitCode {
    let criteria = match Criteria::compile(&cmd.query) {
        Ok(criteria) => criteria,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let path = match ctx.catalogue_path(cmd.catalogue.as_deref()) {
        Ok(path) => path,
        Err(code) => return code,
    };
    let mut catalogue = match Catalogue::load(&path) {
        Ok(catalogue) => catalogue,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let matched = catalogue.matching_indices(&criteria, cmd.media_type);
    if matched.is_empty() {
        println!("No results found.");
        return ExitCode::SUCCESS;
    }

    let selected = match select(cmd, &matched) {
        Ok(selected) => selected,
        Err(message) => {
            let items: Vec<&Media> = matched
                .iter()
                .filter_map(|&i| catalogue.items().get(i))
                .collect();
            println!("The following matches were found:");
            output_numbered_media_table(&items);
            eprintln!("error: {message}");
            return ExitCode::FAILURE;
        }
    };

    // Highest position first, so earlier positions stay valid.
    let mut removed: Vec<Media> = selected
        .iter()
        .rev()
        .filter_map(|&i| catalogue.remove(i))
        .collect();
    removed.reverse();

    if let Err(e) = catalogue.save(&path) {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }
    info!(
        "removed {} record(s), {} left in {}",
        removed.len(),
        catalogue.len(),
        path.display()
    );

    for media in &removed {
        println!("Removed {media}");
    }
    ExitCode::SUCCESS
}

/// Picks the catalogue positions to remove out of the matching ones.
fn select(cmd: &RemoveCommand, matched: &[usize]) -> Result<Vec<usize>, String> {
    if cmd.all {
        return Ok(matched.to_vec());
    }
    match cmd.index {
        Some(number) => number
            .checked_sub(1)
            .and_then(|i| matched.get(i))
            .map(|&i| vec![i])
            .ok_or_else(|| format!("no match numbered {number} (found {})", matched.len())),
        None if matched.len() == 1 => Ok(matched.to_vec()),
        None => Err(format!(
            "{} records match; pass --index N to remove one or --all to remove them all",
            matched.len()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(all: bool, index: Option<usize>) -> RemoveCommand {
        RemoveCommand {
            query: "title = x".to_string(),
            catalogue: None,
            media_type: None,
            all,
            index,
        }
    }

    #[test]
    fn single_match_needs_no_selection() {
        assert_eq!(select(&command(false, None), &[3]), Ok(vec![3]));
    }

    #[test]
    fn several_matches_need_a_selection() {
        assert!(select(&command(false, None), &[1, 4]).is_err());
        assert_eq!(select(&command(true, None), &[1, 4]), Ok(vec![1, 4]));
        assert_eq!(select(&command(false, Some(2)), &[1, 4]), Ok(vec![4]));
    }

    #[test]
    fn index_is_one_based_and_checked() {
        assert!(select(&command(false, Some(0)), &[1, 4]).is_err());
        assert!(select(&command(false, Some(3)), &[1, 4]).is_err());
    }
}
