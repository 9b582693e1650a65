//! Album record definitions.
//!
//! [`Album`] is the stored record. [`AlbumFields`] is the client-supplied
//! payload for creating one; the identifier always comes from the request
//! path, never from the body.

use serde::{Deserialize, Serialize};

/// A record album.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Album {
    /// Unique key within the record store
    pub id: String,
    /// Album title
    pub title: String,
    /// Performing artist
    pub artist: String,
    /// Price, no range enforced
    pub price: f64,
}

impl Album {
    /// Build an album from its parts.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            price,
        }
    }
}

/// Body of a create request.
///
/// Missing members decode to their zero values. Unknown members (including a
/// stray `id`) are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AlbumFields {
    pub title: String,
    pub artist: String,
    pub price: f64,
}

impl AlbumFields {
    /// Attach an identifier, producing the album to store.
    pub fn into_album(self, id: impl Into<String>) -> Album {
        Album {
            id: id.into(),
            title: self.title,
            artist: self.artist,
            price: self.price,
        }
    }
}

/// The fixed albums every process starts with.
pub fn seed_albums() -> Vec<Album> {
    vec![
        Album::new("1", "Blue Train", "John Coltrane", 56.99),
        Album::new("2", "Jeru", "Gerry Mulligan", 17.99),
        Album::new("3", "Sarah Vaughan and Clifford Brown", "Sarah Vaughan", 39.99),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_album_json_shape() {
        let album = Album::new("1", "Blue Train", "John Coltrane", 56.99);
        let json = serde_json::to_value(&album).unwrap();

        assert_eq!(json["id"], "1");
        assert_eq!(json["title"], "Blue Train");
        assert_eq!(json["artist"], "John Coltrane");
        assert_eq!(json["price"], 56.99);
    }

    #[test]
    fn test_fields_ignore_body_id() {
        let fields: AlbumFields = serde_json::from_str(
            r#"{"id": "ignored", "title": "X", "artist": "Y", "price": 9.99}"#,
        )
        .unwrap();

        let album = fields.into_album("4");
        assert_eq!(album, Album::new("4", "X", "Y", 9.99));
    }

    #[test]
    fn test_fields_default_missing_members() {
        let fields: AlbumFields = serde_json::from_str(r#"{"title": "X", "artist": "Y"}"#).unwrap();
        assert_eq!(fields.price, 0.0);

        let fields: AlbumFields = serde_json::from_str("{}").unwrap();
        assert_eq!(fields, AlbumFields::default());
    }

    #[test]
    fn test_fields_reject_undecodable_bodies() {
        let wrong_type =
            serde_json::from_str::<AlbumFields>(r#"{"title": "X", "artist": "Y", "price": "cheap"}"#);
        assert!(wrong_type.is_err());

        assert!(serde_json::from_str::<AlbumFields>("{not json").is_err());
        assert!(serde_json::from_slice::<AlbumFields>(b"").is_err());
    }

    #[test]
    fn test_seed_albums() {
        let seeds = seed_albums();
        assert_eq!(seeds.len(), 3);
        assert_eq!(seeds[0].title, "Blue Train");
        assert_eq!(seeds[1].artist, "Gerry Mulligan");
        assert_eq!(seeds[2].price, 39.99);
    }
}
