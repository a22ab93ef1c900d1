//! The media collection and its JSON storage.

use std::{
    fs, io,
    path::{Path, PathBuf},
    slice,
};

use log::{debug, warn};
use mcat_query::Criteria;

use crate::{
    error::CatalogueError,
    media::{Media, MediaType},
};

/// An ordered collection of media with no two records sharing type, title and release year.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalogue {
    /// Records in insertion order.
    items: Vec<Media>,
}

impl Catalogue {
    /// Creates an empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a catalogue from a JSON file.
    ///
    /// The file holds an array of media objects, each tagged with its `type`. Records that
    /// duplicate an earlier one are skipped with a warning.
    pub fn load(path: &Path) -> Result<Self, CatalogueError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogueError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let catalogue = Self::from_json(&content).map_err(|source| CatalogueError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded {} record(s) from {}", catalogue.len(), path.display());
        Ok(catalogue)
    }

    /// Parses a catalogue from JSON text.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        let records: Vec<Media> = serde_json::from_str(content)?;
        let mut catalogue = Self::new();
        for media in records {
            let description = media.to_string();
            if !catalogue.add(media) {
                warn!("skipping duplicate record {description}");
            }
        }
        Ok(catalogue)
    }

    /// Serializes the catalogue as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, CatalogueError> {
        serde_json::to_string_pretty(&self.items).map_err(CatalogueError::Serialize)
    }

    /// Writes the catalogue to a JSON file, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), CatalogueError> {
        let write_error = |source: io::Error| CatalogueError::WriteFile {
            path: PathBuf::from(path),
            source,
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(write_error)?;
        }
        let json = self.to_json()?;
        fs::write(path, json + "\n").map_err(write_error)?;
        debug!("saved {} record(s) to {}", self.len(), path.display());
        Ok(())
    }

    /// Adds a record, returning false if an equivalent record is already present.
    pub fn add(&mut self, media: Media) -> bool {
        if self.contains(&media) {
            return false;
        }
        self.items.push(media);
        true
    }

    /// Returns true if a record with the same type, title and release year is present.
    pub fn contains(&self, media: &Media) -> bool {
        let key = media.key();
        self.items.iter().any(|m| m.key() == key)
    }

    /// Removes and returns the record at `index`, if any.
    pub fn remove(&mut self, index: usize) -> Option<Media> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Returns all records in insertion order.
    pub fn items(&self) -> &[Media] {
        &self.items
    }

    /// Returns the records of one type, or all records when `media_type` is `None`.
    pub fn items_by_type(&self, media_type: Option<MediaType>) -> Vec<&Media> {
        self.items
            .iter()
            .filter(|m| media_type.is_none_or(|t| m.media_type() == t))
            .collect()
    }

    /// Returns the records matching the criteria, in insertion order.
    pub fn search(&self, criteria: &Criteria) -> Vec<&Media> {
        let matches: Vec<&Media> = criteria.filter(&self.items).collect();
        debug!(
            "{} of {} record(s) matched {}",
            matches.len(),
            self.items.len(),
            criteria.formula()
        );
        matches
    }

    /// Returns the positions of matching records of one type, or of any type when `media_type`
    /// is `None`, in ascending order.
    pub fn matching_indices(
        &self,
        criteria: &Criteria,
        media_type: Option<MediaType>,
    ) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, m)| media_type.is_none_or(|t| m.media_type() == t))
            .filter(|(_, m)| criteria.matches(*m))
            .map(|(i, _)| i)
            .collect()
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the catalogue has no records.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<Media> for Catalogue {
    fn from_iter<I: IntoIterator<Item = Media>>(iter: I) -> Self {
        let mut catalogue = Self::new();
        for media in iter {
            catalogue.add(media);
        }
        catalogue
    }
}

impl<'a> IntoIterator for &'a Catalogue {
    type Item = &'a Media;
    type IntoIter = slice::Iter<'a, Media>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaKind;

    fn film(title: &str, year: i32, duration: u32) -> Media {
        Media {
            title: title.to_string(),
            rating: 4,
            release_year: year,
            kind: MediaKind::Film {
                duration,
                studio: "Studio".to_string(),
                director: "Director".to_string(),
            },
        }
    }

    fn track(title: &str, year: i32) -> Media {
        Media {
            title: title.to_string(),
            rating: 3,
            release_year: year,
            kind: MediaKind::AudioTrack {
                duration: 4,
                artist: "Artist".to_string(),
                record_label: "Label".to_string(),
            },
        }
    }

    #[test]
    fn duplicates_rejected_on_type_title_year() {
        let mut catalogue = Catalogue::new();
        assert!(catalogue.add(film("Heat", 1995, 170)));
        assert!(!catalogue.add(film("Heat", 1995, 100)));
        assert!(catalogue.add(film("Heat", 1986, 170)));
        assert!(catalogue.add(track("Heat", 1995)));
        assert_eq!(catalogue.len(), 3);
    }

    #[test]
    fn items_by_type() {
        let catalogue: Catalogue = [film("A", 2000, 90), track("B", 2001), film("C", 2002, 90)]
            .into_iter()
            .collect();
        let films: Vec<_> = catalogue
            .items_by_type(Some(MediaType::Film))
            .into_iter()
            .map(|m| m.title.as_str())
            .collect();
        assert_eq!(films, vec!["A", "C"]);
        assert_eq!(catalogue.items_by_type(None).len(), 3);
    }

    #[test]
    fn search_by_duration_and_type() {
        let catalogue: Catalogue = [
            film("Short", 2000, 80),
            film("Long", 2001, 180),
            track("Song", 2002),
        ]
        .into_iter()
        .collect();
        let criteria = Criteria::compile("duration > 1h30m | type = \"audio track\"").unwrap();
        let titles: Vec<_> = catalogue
            .search(&criteria)
            .into_iter()
            .map(|m| m.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Long", "Song"]);
    }

    #[test]
    fn from_json_skips_duplicates() {
        let json = r#"[
            {"type": "film", "title": "Heat", "rating": 5, "releaseYear": 1995,
             "duration": 170, "studio": "Warner", "director": "Mann"},
            {"type": "film", "title": "Heat", "rating": 1, "releaseYear": 1995,
             "duration": 1, "studio": "x", "director": "y"}
        ]"#;
        let catalogue = Catalogue::from_json(json).unwrap();
        assert_eq!(catalogue.len(), 1);
        assert_eq!(catalogue.items()[0].rating, 5);
    }

    #[test]
    fn from_json_rejects_unknown_type() {
        let json = r#"[{"type": "podcast", "title": "x", "rating": 1, "releaseYear": 1}]"#;
        assert!(Catalogue::from_json(json).is_err());
    }

    #[test]
    fn matching_indices_respects_type() {
        let catalogue: Catalogue = [film("A", 2000, 90), track("B", 2001), film("C", 2002, 200)]
            .into_iter()
            .collect();
        let criteria = Criteria::compile("rating >= 3").unwrap();
        assert_eq!(catalogue.matching_indices(&criteria, None), vec![0, 1, 2]);
        assert_eq!(
            catalogue.matching_indices(&criteria, Some(MediaType::Film)),
            vec![0, 2]
        );
        let long = Criteria::compile("duration > 2h").unwrap();
        assert_eq!(catalogue.matching_indices(&long, None), vec![2]);
    }

    #[test]
    fn remove_out_of_range() {
        let mut catalogue: Catalogue = [film("A", 2000, 90)].into_iter().collect();
        assert!(catalogue.remove(1).is_none());
        assert_eq!(catalogue.remove(0).map(|m| m.title), Some("A".to_string()));
        assert!(catalogue.is_empty());
    }
}
