//! End-of-session summaries
//!
//! Which results screen a session leads to depends on its mode. These are
//! plain views over [`SessionEnd`]; the host draws them.

use crate::format_seconds;
use crate::highscores::{HighScoreStore, record_play_time};
use crate::sim::{GameMode, SessionEnd};

/// What the results screen shows
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Results {
    Play {
        time: f32,
        best_time: f32,
        new_best: bool,
    },
    Practice {
        time: f32,
        hits: u32,
        misses: u32,
        /// `None` when the player never tapped
        accuracy: Option<f32>,
    },
}

impl Results {
    /// Build the results for a finished session, recording the best time for play mode.
    /// Unconfigured sessions have no results screen.
    pub fn from_end(end: &SessionEnd, store: &mut (impl HighScoreStore + ?Sized)) -> Option<Self> {
        let stats = &end.stats;
        match end.mode {
            GameMode::Play => {
                let new_best = record_play_time(store, stats.elapsed_time);
                Some(Results::Play {
                    time: stats.elapsed_time,
                    best_time: store.get(),
                    new_best,
                })
            }
            GameMode::Practice => Some(Results::Practice {
                time: stats.elapsed_time,
                hits: stats.hit_count,
                misses: stats.miss_count,
                accuracy: stats.accuracy(),
            }),
            GameMode::None => None,
        }
    }

    /// Text lines for the results table
    pub fn lines(&self) -> Vec<String> {
        match *self {
            Results::Play {
                time,
                best_time,
                new_best,
            } => {
                let mut lines = vec![
                    format!("Time: {}", format_seconds(time)),
                    format!("Best time: {}", format_seconds(best_time)),
                ];
                if new_best {
                    lines.push("New high score!".to_string());
                }
                lines
            }
            Results::Practice {
                time,
                hits,
                misses,
                accuracy,
            } => vec![
                format!("Time: {}", format_seconds(time)),
                format!("Hit: {} p", hits),
                format!("Missed: {} p", misses),
                match accuracy {
                    Some(a) => format!("Accuracy: {:.2}%", a * 100.0),
                    None => "Accuracy: -".to_string(),
                },
            ],
        }
    }
}
