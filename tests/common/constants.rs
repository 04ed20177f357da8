//! Fixture identities shared across the end-to-end tests.

pub const SONG_1_ID: &str = "SOSCXDM12AB0185C39";
pub const SONG_1_TITLE: &str = "The Prayer";
pub const SONG_1_DURATION: f64 = 131.87;

pub const ARTIST_1_ID: &str = "ARIG6O41187B988BDB";
pub const ARTIST_1_NAME: &str = "Richard Souther";

pub const SONG_2_ID: &str = "SOMZWCG12A8C13C480";
pub const SONG_2_TITLE: &str = "I Didn't Mean To";
pub const SONG_2_DURATION: f64 = 218.93179;

pub const ARTIST_2_ID: &str = "ARD7TVE1187B99BFB1";
pub const ARTIST_2_NAME: &str = "Casual";

pub const USER_1_ID: &str = "26";
pub const USER_1_FIRST_NAME: &str = "Ryan";
pub const USER_1_LAST_NAME: &str = "Smith";

// 2018-11-01T21:01:46.796Z and 2018-11-02T01:25:34.796Z
pub const TS_1: i64 = 1541106106796;
pub const TS_2: i64 = 1541121934796;
