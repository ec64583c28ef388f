use crate::clients::{
    entities::{CatalogTrack, Track},
    errors::CatalogError,
};

/// Format a duration as `M:SS`, minutes unbounded
pub fn format_duration(duration_ms: u64) -> String {
    let minutes = duration_ms / 60_000;
    let seconds = (duration_ms / 1_000) % 60;
    format!("{minutes}:{seconds:02}")
}

impl TryFrom<CatalogTrack> for Track {
    type Error = CatalogError;

    fn try_from(t: CatalogTrack) -> Result<Track, CatalogError> {
        // Only the primary artist is kept
        let artist = t.artists.into_iter().next().ok_or_else(|| {
            CatalogError::MalformedResponse(format!("track {:?} has no artists", t.name))
        })?;
        let album_art = t.album.images.into_iter().next().map(|i| i.url);

        Ok(Track {
            title: t.name,
            artist_name: artist.name,
            artist_id: artist.id,
            album_name: t.album.name,
            album_art,
            popularity: t.popularity.min(100),
            duration_ms: t.duration_ms,
            duration_display: format_duration(t.duration_ms),
            preview_url: t.preview_url,
            url: t.external_urls.spotify,
        })
    }
}

/// Map raw search records in order. The first malformed record fails the batch.
pub fn map_tracks(records: Vec<CatalogTrack>) -> Result<Vec<Track>, CatalogError> {
    records.into_iter().map(Track::try_from).collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record(value: serde_json::Value) -> CatalogTrack {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn formats_durations() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(59_000), "0:59");
        assert_eq!(format_duration(60_000), "1:00");
        assert_eq!(format_duration(222_000), "3:42");
        assert_eq!(format_duration(3_599_999), "59:59");
    }

    #[test]
    fn minutes_are_not_wrapped_into_hours() {
        assert_eq!(format_duration(3_600_000), "60:00");
    }

    #[test]
    fn maps_a_full_record() {
        let track = Track::try_from(record(json!({
            "name": "So What",
            "artists": [{"id": "0kbYTNQb4Pb1rPbbaF0pT4", "name": "Miles Davis"}, {"id": "x", "name": "Other"}],
            "album": {"name": "Kind of Blue", "images": [{"url": "https://i/1"}, {"url": "https://i/2"}]},
            "popularity": 71,
            "duration_ms": 562_000,
            "preview_url": "https://p/1",
            "external_urls": {"spotify": "https://open.spotify.com/track/1"}
        })))
        .unwrap();

        assert_eq!(track.title, "So What");
        assert_eq!(track.artist_name, "Miles Davis");
        assert_eq!(track.artist_id.as_deref(), Some("0kbYTNQb4Pb1rPbbaF0pT4"));
        assert_eq!(track.album_art.as_deref(), Some("https://i/1"));
        assert_eq!(track.duration_display, "9:22");
        assert_eq!(track.preview_url.as_deref(), Some("https://p/1"));
        assert_eq!(track.url, "https://open.spotify.com/track/1");
    }

    #[test]
    fn empty_or_missing_images_yield_no_album_art() {
        let empty = record(json!({
            "name": "a", "artists": [{"name": "x"}], "album": {"name": "b", "images": []}
        }));
        let missing = record(json!({
            "name": "a", "artists": [{"name": "x"}], "album": {"name": "b"}
        }));
        assert_eq!(Track::try_from(empty).unwrap().album_art, None);
        assert_eq!(Track::try_from(missing).unwrap().album_art, None);
    }

    #[test]
    fn record_without_artists_is_malformed() {
        let err = Track::try_from(record(json!({"name": "a", "album": {"name": "b"}}))).unwrap_err();
        assert!(matches!(err, CatalogError::MalformedResponse(_)));
    }

    #[test]
    fn mapping_preserves_order() {
        let records: Vec<CatalogTrack> = ["c", "a", "b"]
            .iter()
            .map(|n| record(json!({"name": n, "artists": [{"name": "x"}], "album": {"name": "y"}})))
            .collect();
        let titles: Vec<String> = map_tracks(records).unwrap().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, ["c", "a", "b"]);
    }
}
