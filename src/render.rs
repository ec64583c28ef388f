//! Plain-text renderings of explore results for the terminal.

use rand::Rng;
use serde::Serialize;

use crate::clients::entities::{ArtistPopularity, Track};
use crate::clients::errors::Error;
use crate::explorer::{Genre, Outcome, PipelineResult, SideTable, ViewMode};

pub const FETCHING_NOTICE: &str = "Fetching data from Spotify...";
pub const NO_RESULTS_NOTICE: &str = "No tracks found for this genre.";
pub const SEARCH_ERROR_BANNER: &str = "Error fetching data from Spotify.";
pub const POPULARITY_WARNING_BANNER: &str = "Unable to retrieve artist popularity data.";

/// Number of points on the demo map
pub const DEMO_MAP_POINTS: usize = 10;

const BAR_WIDTH: usize = 40;
const SEPARATOR: &str = "---";

pub const ABOUT: &str = "\
Music Genre Explorer uses the Spotify API to retrieve real-time music data, including:
  - Track names
  - Album art
  - Audio previews
  - Popularity

Features:
  - Columns or Table view with Spotify links
  - Bar chart of artist popularity
  - Random artist map demo
  - Options: genre, number of tracks, view mode, chart and map toggles, display name";

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

pub fn greeting(name: &str, genre: Genre) -> Option<String> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some(format!("Welcome, {name}! Exploring the genre: {genre}"))
}

pub fn success_banner(result: &PipelineResult) -> String {
    format!(
        "Showing top {} tracks for: {}",
        result.tracks.len(),
        result.genre
    )
}

pub fn error_banner(err: &Error) -> String {
    format!("{SEARCH_ERROR_BANNER}\n{err}")
}

pub fn warning_banner(err: &Error) -> String {
    format!("{POPULARITY_WARNING_BANNER}\n{err}")
}

/// One card per track: art, track/artist/album, popularity, duration, links
pub fn cards(tracks: &[Track]) -> String {
    let mut out = String::from("Track Details with Album Art & Previews\n");
    for t in tracks {
        push_line(&mut out, SEPARATOR);
        push_line(
            &mut out,
            &format!("Art:        {}", t.album_art.as_deref().unwrap_or("No image")),
        );
        push_line(&mut out, &format!("Track:      {}", t.title));
        push_line(&mut out, &format!("Artist:     {}", t.artist_name));
        push_line(&mut out, &format!("Album:      {}", t.album_name));
        push_line(&mut out, &format!("Popularity: {}", t.popularity));
        push_line(&mut out, &format!("Duration:   {}", t.duration_display));
        if let Some(preview) = &t.preview_url {
            push_line(&mut out, &format!("Preview:    {preview}"));
        }
        push_line(&mut out, &format!("Listen on Spotify: {}", t.url));
    }
    if !tracks.is_empty() {
        push_line(&mut out, SEPARATOR);
    }
    out
}

/// Aligned table with Track, Artist, Album, Popularity, Duration and link columns
pub fn table(tracks: &[Track]) -> String {
    const HEADERS: [&str; 6] = ["Track", "Artist", "Album", "Popularity", "Duration", "Spotify Link"];

    let rows: Vec<[String; 6]> = tracks
        .iter()
        .map(|t| {
            [
                t.title.clone(),
                t.artist_name.clone(),
                t.album_name.clone(),
                t.popularity.to_string(),
                t.duration_display.clone(),
                t.url.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::from("Track Table\n");
    push_row(&mut out, &HEADERS.map(String::from), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &rule.join("-+-"));
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 6], widths: &[usize; 6]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    push_line(out, padded.join(" | ").trim_end());
}

/// Horizontal bar per row, duplicates included, scaled so 100 fills the bar
pub fn bar_chart(rows: &[ArtistPopularity]) -> String {
    let name_width = rows
        .iter()
        .map(|r| r.artist_name.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::from("Artist Popularity Chart\n");
    for r in rows {
        let filled = r.popularity.min(100) as usize * BAR_WIDTH / 100;
        push_line(
            &mut out,
            &format!(
                "{:<name_width$} | {}{} {}",
                r.artist_name,
                "#".repeat(filled),
                " ".repeat(BAR_WIDTH - filled),
                r.popularity
            ),
        );
    }
    out
}

/// A point of the demo map. Coordinates are random, not artist locations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapPoint {
    pub lat: f64,
    pub lon: f64,
}

pub fn demo_map<R: Rng>(rng: &mut R, points: usize) -> Vec<MapPoint> {
    (0..points)
        .map(|_| MapPoint {
            lat: rng.random_range(-50.0..=50.0),
            lon: rng.random_range(-100.0..=100.0),
        })
        .collect()
}

pub fn map_listing(points: &[MapPoint]) -> String {
    let mut out = String::from("Artist Location Map (Demo)\n");
    for p in points {
        push_line(&mut out, &format!("  lat {:>7.2}  lon {:>8.2}", p.lat, p.lon));
    }
    out
}

/// Everything shown after a successful explore action, except the map
pub fn explore_report(result: &PipelineResult, view: ViewMode) -> String {
    if result.outcome == Outcome::NoResults {
        return format!("{NO_RESULTS_NOTICE}\n");
    }

    let mut out = format!("{}\n\n", success_banner(result));
    out.push_str(&match view {
        ViewMode::Columns => cards(&result.tracks),
        ViewMode::Table => table(&result.tracks),
    });

    match &result.popularity {
        SideTable::NotRequested => {}
        SideTable::Ready(rows) => {
            out.push('\n');
            out.push_str(&bar_chart(rows));
        }
        SideTable::Failed(_) => {
            if let Some(warning) = result.warning() {
                out.push('\n');
                out.push_str(&warning_banner(&warning));
                out.push('\n');
            }
        }
    }
    out
}
