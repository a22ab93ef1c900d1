//! Media catalogue records and storage for mcat.
//!
//! A [`Catalogue`] is an ordered set of [`Media`] records: films, audio tracks and television
//! programmes. It is stored as a JSON array in which each object carries a `type` tag:
//!
//! ```json
//! [
//!   {
//!     "title": "Heat",
//!     "rating": 5,
//!     "releaseYear": 1995,
//!     "type": "film",
//!     "duration": 170,
//!     "studio": "Warner Bros.",
//!     "director": "Michael Mann"
//!   }
//! ]
//! ```
//!
//! Records implement [`mcat_query::Record`], so a compiled [`mcat_query::Criteria`] can search
//! them directly with [`Catalogue::search`].

#![warn(missing_docs)]

mod catalogue;
mod error;
mod media;

pub use catalogue::Catalogue;
pub use error::CatalogueError;
pub use media::{FIELDS, Media, MediaKind, MediaType};
