use super::time::decompose_timestamp;
use super::TransformError;
use crate::records::PlayEvent;
use crate::warehouse::{TimeRow, UserRow};

/// The action type that marks an actual song play.
const NEXT_SONG_PAGE: &str = "NextSong";

/// A songplay fact before foreign key resolution.
///
/// Carries the raw (song title, artist name, duration) triple the resolver
/// needs. The triple is optional as a whole: when any part is absent the
/// resolver is skipped and the fact lands with NULL catalog references.
#[derive(Clone, Debug, PartialEq)]
pub struct SongplayCandidate {
    pub start_time: i64,
    pub user_id: String,
    pub level: String,
    pub song_title: Option<String>,
    pub artist_name: Option<String>,
    pub duration: Option<f64>,
    pub session_id: Option<i64>,
    pub location: Option<String>,
    pub user_agent: Option<String>,
}

impl SongplayCandidate {
    /// The resolver lookup key, present only when all three parts are.
    pub fn lookup_key(&self) -> Option<(&str, &str, f64)> {
        match (&self.song_title, &self.artist_name, self.duration) {
            (Some(title), Some(artist), Some(duration)) => {
                Some((title.as_str(), artist.as_str(), duration))
            }
            _ => None,
        }
    }
}

/// All rows derived from one retained play event.
///
/// Keeping the three rows bundled per event preserves the input event order
/// for every emitted sequence, which the user-level last-write-wins semantics
/// depend on.
#[derive(Clone, Debug, PartialEq)]
pub struct EventRows {
    pub time: TimeRow,
    pub user: UserRow,
    pub play: SongplayCandidate,
}

/// Transform one log file's events into warehouse rows, lazily and in order.
///
/// Events whose page is not "NextSong" are dropped before any field checks,
/// so partial non-play records never fail a file. A retained event missing
/// its timestamp, user id or level is an error.
pub fn transform_events(
    events: Vec<PlayEvent>,
) -> impl Iterator<Item = Result<EventRows, TransformError>> {
    events
        .into_iter()
        .filter(|e| e.page.as_deref() == Some(NEXT_SONG_PAGE))
        .map(transform_play)
}

fn transform_play(event: PlayEvent) -> Result<EventRows, TransformError> {
    let ts = event.ts.ok_or(TransformError::MissingField { field: "ts" })?;
    let user_id = event
        .user_id
        .filter(|id| !id.is_empty())
        .ok_or(TransformError::MissingField { field: "userId" })?;
    let level = event
        .level
        .ok_or(TransformError::MissingField { field: "level" })?;

    let time = decompose_timestamp(ts)?;

    let user = UserRow {
        user_id: user_id.clone(),
        first_name: event.first_name,
        last_name: event.last_name,
        gender: event.gender,
        level: level.clone(),
    };

    let play = SongplayCandidate {
        start_time: ts,
        user_id,
        level,
        song_title: event.song,
        artist_name: event.artist,
        duration: event.length,
        session_id: event.session_id,
        location: event.location,
        user_agent: event.user_agent,
    };

    Ok(EventRows { time, user, play })
}
