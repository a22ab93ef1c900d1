//! Media records.
//!
//! Every record has a title, a rating and a release year; the remaining fields depend on the
//! kind of media. Search operands see a record as a flat, case-insensitive field map:
//!
//! | Field | Film | Audio track | TV programme |
//! |---|---|---|---|
//! | `type`, `title`, `rating`, `releaseyear` | yes | yes | yes |
//! | `duration` | yes | yes | |
//! | `studio` | yes | | yes |
//! | `director` | yes | | |
//! | `artist`, `recordlabel` | | yes | |
//! | `series`, `episode`, `channel` | | | yes |
//!
//! Looking up a field from another column yields [`FieldLookup::Undefined`], which makes any
//! condition mentioning it false.

use std::{borrow::Cow, fmt, str::FromStr};

use mcat_query::{FieldLookup, Record};
use serde::{Deserialize, Serialize};

use crate::error::CatalogueError;

/// Every field name a record can be searched by.
pub const FIELDS: [&str; 12] = [
    "type",
    "title",
    "rating",
    "releaseyear",
    "duration",
    "studio",
    "director",
    "artist",
    "recordlabel",
    "series",
    "episode",
    "channel",
];

/// The three kinds of media, without their data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MediaType {
    /// A film.
    Film,
    /// A piece of recorded audio.
    AudioTrack,
    /// An episode of a television series.
    TelevisionProgramme,
}

impl MediaType {
    /// Every media type, in display order.
    pub const ALL: [Self; 3] = [Self::Film, Self::AudioTrack, Self::TelevisionProgramme];

    /// Returns the name used in the `type` field and in stored files.
    pub fn name(self) -> &'static str {
        match self {
            Self::Film => "film",
            Self::AudioTrack => "audio track",
            Self::TelevisionProgramme => "tv programme",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MediaType {
    type Err = CatalogueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CatalogueError::UnknownMediaType(s.to_string()))
    }
}

/// Fields specific to one kind of media.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum MediaKind {
    /// A film.
    #[serde(rename = "film")]
    Film {
        /// Running time in minutes.
        duration: u32,
        /// Production studio.
        studio: String,
        /// Director.
        director: String,
    },

    /// A piece of recorded audio.
    #[serde(rename = "audio track")]
    AudioTrack {
        /// Running time in minutes.
        duration: u32,
        /// Performing artist.
        artist: String,
        /// Publishing label.
        record_label: String,
    },

    /// An episode of a television series.
    #[serde(rename = "tv programme")]
    TelevisionProgramme {
        /// Series name.
        series: String,
        /// Episode name or number.
        episode: String,
        /// Production studio.
        studio: String,
        /// Broadcasting channel.
        channel: String,
    },
}

impl MediaKind {
    /// Returns the media type of this kind.
    pub fn media_type(&self) -> MediaType {
        match self {
            Self::Film { .. } => MediaType::Film,
            Self::AudioTrack { .. } => MediaType::AudioTrack,
            Self::TelevisionProgramme { .. } => MediaType::TelevisionProgramme,
        }
    }
}

/// One catalogue record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    /// Title.
    pub title: String,
    /// Rating, conventionally 1 to 5.
    pub rating: u32,
    /// Year of first release.
    pub release_year: i32,
    /// Type-specific fields.
    #[serde(flatten)]
    pub kind: MediaKind,
}

impl Media {
    /// Returns the media type of this record.
    pub fn media_type(&self) -> MediaType {
        self.kind.media_type()
    }

    /// Returns the identity used for duplicate detection: type, title and release year.
    pub fn key(&self) -> (MediaType, &str, i32) {
        (self.media_type(), self.title.as_str(), self.release_year)
    }

    /// Returns the value of a named field, or `None` if the field does not apply.
    ///
    /// `name` must already be lower case.
    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        let value = match (name, &self.kind) {
            ("type", _) => Cow::Borrowed(self.media_type().name()),
            ("title", _) => Cow::Borrowed(self.title.as_str()),
            ("rating", _) => Cow::Owned(self.rating.to_string()),
            ("releaseyear", _) => Cow::Owned(self.release_year.to_string()),
            (
                "duration",
                MediaKind::Film { duration, .. } | MediaKind::AudioTrack { duration, .. },
            ) => Cow::Owned(duration.to_string()),
            (
                "studio",
                MediaKind::Film { studio, .. } | MediaKind::TelevisionProgramme { studio, .. },
            ) => Cow::Borrowed(studio.as_str()),
            ("director", MediaKind::Film { director, .. }) => Cow::Borrowed(director.as_str()),
            ("artist", MediaKind::AudioTrack { artist, .. }) => Cow::Borrowed(artist.as_str()),
            ("recordlabel", MediaKind::AudioTrack { record_label, .. }) => {
                Cow::Borrowed(record_label.as_str())
            }
            ("series", MediaKind::TelevisionProgramme { series, .. }) => {
                Cow::Borrowed(series.as_str())
            }
            ("episode", MediaKind::TelevisionProgramme { episode, .. }) => {
                Cow::Borrowed(episode.as_str())
            }
            ("channel", MediaKind::TelevisionProgramme { channel, .. }) => {
                Cow::Borrowed(channel.as_str())
            }
            _ => return None,
        };
        Some(value)
    }

    /// Returns the record's defined fields in [`FIELDS`] order.
    pub fn fields(&self) -> Vec<(&'static str, Cow<'_, str>)> {
        FIELDS
            .iter()
            .filter_map(|&name| self.field(name).map(|value| (name, value)))
            .collect()
    }
}

impl Record for Media {
    fn lookup(&self, field: &str) -> FieldLookup<'_> {
        let name = field.to_ascii_lowercase();
        if !FIELDS.contains(&name.as_str()) {
            return FieldLookup::Unknown;
        }
        self.field(&name)
            .map_or(FieldLookup::Undefined, FieldLookup::Value)
    }
}

impl fmt::Display for Media {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}) {} [{}], rated {}",
            self.media_type(),
            self.title,
            self.release_year,
            self.rating
        )
    }
}
