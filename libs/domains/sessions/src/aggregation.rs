//! Session/speaker join.

use domain_speakers::Speaker;
use std::collections::HashMap;

use crate::models::{Session, SessionWithSpeakers};

/// Attaches speaker profiles to each session.
///
/// Output keeps the order of `sessions`, and each session's speakers keep
/// the order of its `speaker_ids`. Ids with no matching speaker are dropped
/// without error.
pub fn join_speakers(sessions: Vec<Session>, speakers: &[Speaker]) -> Vec<SessionWithSpeakers> {
    let by_id: HashMap<&str, &Speaker> = speakers.iter().map(|s| (s.id.as_str(), s)).collect();

    sessions
        .into_iter()
        .map(|session| {
            let speakers = session
                .speaker_ids
                .iter()
                .filter_map(|id| by_id.get(id.as_str()).map(|s| (*s).clone()))
                .collect();
            SessionWithSpeakers { session, speakers }
        })
        .collect()
}
