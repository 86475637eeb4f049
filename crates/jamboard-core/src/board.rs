//! Boards and the board list.

use crate::error::{WorkspaceError, WorkspaceResult};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for boards.
pub type BoardId = Uuid;

/// Titles of the boards present on a fresh start.
pub const DEFAULT_BOARD_TITLES: [&str; 3] =
    ["Brainstorming Session", "Project Timeline", "Team Workshop"];

/// A whiteboard.
///
/// Only the saved thumbnail survives a board switch; the drawing history
/// belongs to the session, not to the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    /// Display title, never empty.
    pub title: String,
    /// Last saved canvas as a `data:image/png;base64,` URI.
    pub thumbnail: Option<String>,
    pub last_edited: DateTime<Utc>,
}

impl Board {
    /// Create a blank board. The title must already be validated.
    fn new(title: String, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            thumbnail: None,
            last_edited: now,
        }
    }

    /// Human readable age, e.g. "Last edited 2 days ago".
    pub fn last_edited_label(&self, now: DateTime<Utc>) -> String {
        let elapsed = now.signed_duration_since(self.last_edited);
        if elapsed < Duration::minutes(1) {
            return "Last edited just now".to_string();
        }

        let (count, unit) = if elapsed < Duration::hours(1) {
            (elapsed.num_minutes(), "minute")
        } else if elapsed < Duration::days(1) {
            (elapsed.num_hours(), "hour")
        } else {
            (elapsed.num_days(), "day")
        };
        let plural = if count == 1 { "" } else { "s" };
        format!("Last edited {} {}{} ago", count, unit, plural)
    }

    /// File name used when exporting the board as PNG.
    pub fn export_file_name(&self) -> String {
        format!("{}.png", slugify(&self.title))
    }

    /// Shareable link. Nothing resolves it; it is only copied to the clipboard.
    pub fn share_url(&self, host: &str) -> String {
        format!("https://{}/jamboard/{}", host.trim_end_matches('/'), self.id)
    }
}

/// Lowercase ASCII slug: alphanumerics kept, every other run becomes one `-`.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        "board".to_string()
    } else {
        slug
    }
}

/// Trim and validate a board title.
fn validate_title(title: &str) -> WorkspaceResult<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(WorkspaceError::Validation(
            "Please enter a board title".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

/// Outcome of a board list operation, telling the host whether the drawing
/// surface and history must be reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardChange {
    /// The active board is unchanged.
    Unchanged,
    /// This board is now active; reset surface and history.
    Switched(BoardId),
}

/// Ordered list of boards with exactly one active board.
#[derive(Debug, Clone)]
pub struct BoardManager {
    /// Newest first.
    boards: Vec<Board>,
    active: BoardId,
}

impl BoardManager {
    /// Start with the seeded boards, last edited two days before `now`.
    pub fn with_defaults(now: DateTime<Utc>) -> Self {
        let edited = now - Duration::days(2);
        let boards: Vec<Board> = DEFAULT_BOARD_TITLES
            .iter()
            .map(|title| Board::new((*title).to_string(), edited))
            .collect();
        let active = boards[0].id;
        Self { boards, active }
    }

    /// Build from existing boards; the first one becomes active.
    pub fn from_boards(boards: Vec<Board>) -> WorkspaceResult<Self> {
        let active = boards
            .first()
            .map(|b| b.id)
            .ok_or_else(|| {
                WorkspaceError::InvariantViolation("a workspace needs at least one board".to_string())
            })?;
        Ok(Self { boards, active })
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Always false: the list never drops below one board.
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    pub fn active_id(&self) -> BoardId {
        self.active
    }

    pub fn active(&self) -> &Board {
        // `active` always names a listed board.
        self.boards
            .iter()
            .find(|b| b.id == self.active)
            .unwrap_or(&self.boards[0])
    }

    pub fn get(&self, id: BoardId) -> Option<&Board> {
        self.boards.iter().find(|b| b.id == id)
    }

    fn position(&self, id: BoardId) -> WorkspaceResult<usize> {
        self.boards
            .iter()
            .position(|b| b.id == id)
            .ok_or(WorkspaceError::NotFound(id))
    }

    /// Create a blank board at the front of the list and make it active.
    pub fn create_board(&mut self, title: &str, now: DateTime<Utc>) -> WorkspaceResult<BoardId> {
        let title = validate_title(title)?;
        let board = Board::new(title, now);
        let id = board.id;
        log::info!("created board '{}' ({})", board.title, id);

        self.boards.insert(0, board);
        self.active = id;
        Ok(id)
    }

    /// Make `id` the active board.
    pub fn select_board(&mut self, id: BoardId) -> WorkspaceResult<BoardChange> {
        self.position(id)?;
        if id == self.active {
            return Ok(BoardChange::Unchanged);
        }
        log::info!("switched to board {}", id);
        self.active = id;
        Ok(BoardChange::Switched(id))
    }

    /// Store a snapshot as the active board's thumbnail.
    pub fn save_board(&mut self, thumbnail: String, now: DateTime<Utc>) -> &Board {
        let index = self.position(self.active).unwrap_or(0);
        let board = &mut self.boards[index];
        board.thumbnail = Some(thumbnail);
        board.last_edited = now;
        log::info!("saved board '{}'", board.title);
        board
    }

    /// Rename a board.
    pub fn rename_board(&mut self, id: BoardId, title: &str) -> WorkspaceResult<()> {
        let title = validate_title(title)?;
        let index = self.position(id)?;
        self.boards[index].title = title;
        Ok(())
    }

    /// Delete a board. The last remaining board cannot be deleted.
    pub fn delete_board(&mut self, id: BoardId) -> WorkspaceResult<BoardChange> {
        if self.boards.len() <= 1 {
            return Err(WorkspaceError::InvariantViolation(
                "You need at least one board".to_string(),
            ));
        }
        let index = self.position(id)?;
        let removed = self.boards.remove(index);
        log::info!("deleted board '{}' ({})", removed.title, removed.id);

        if removed.id != self.active {
            return Ok(BoardChange::Unchanged);
        }
        self.active = self.boards[0].id;
        Ok(BoardChange::Switched(self.active))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 14, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_seeded_defaults() {
        let manager = BoardManager::with_defaults(now());
        assert_eq!(manager.len(), 3);
        assert_eq!(manager.active().title, "Brainstorming Session");
        assert!(manager.boards().iter().all(|b| b.thumbnail.is_none()));
        assert_eq!(
            manager.active().last_edited_label(now()),
            "Last edited 2 days ago"
        );
    }

    #[test]
    fn test_create_rejects_blank_titles() {
        let mut manager = BoardManager::with_defaults(now());
        let before = manager.boards().to_vec();

        for title in ["", "   "] {
            let result = manager.create_board(title, now());
            assert!(matches!(result, Err(WorkspaceError::Validation(_))));
        }
        assert_eq!(manager.boards(), &before[..]);
    }

    #[test]
    fn test_create_inserts_at_front_and_activates() {
        let mut manager = BoardManager::with_defaults(now());
        let id = manager.create_board("  Notes ", now()).unwrap();
        assert_eq!(manager.boards()[0].id, id);
        assert_eq!(manager.boards()[0].title, "Notes");
        assert_eq!(manager.active_id(), id);
        assert_eq!(manager.len(), 4);
    }

    #[test]
    fn test_select_board() {
        let mut manager = BoardManager::with_defaults(now());
        let first = manager.active_id();
        let second = manager.boards()[1].id;

        assert_eq!(manager.select_board(first).unwrap(), BoardChange::Unchanged);
        assert_eq!(manager.select_board(second).unwrap(), BoardChange::Switched(second));
        assert_eq!(manager.active_id(), second);

        let missing = Uuid::new_v4();
        assert_eq!(manager.select_board(missing), Err(WorkspaceError::NotFound(missing)));
        assert_eq!(manager.active_id(), second);
    }

    #[test]
    fn test_save_board_updates_thumbnail_and_timestamp() {
        let mut manager = BoardManager::with_defaults(now());
        let later = now() + Duration::hours(1);
        manager.save_board("data:image/png;base64,AAAA".to_string(), later);
        assert_eq!(manager.active().thumbnail.as_deref(), Some("data:image/png;base64,AAAA"));
        assert_eq!(manager.active().last_edited, later);
        assert!(manager.boards()[1].thumbnail.is_none());
    }

    #[test]
    fn test_delete_last_board_is_rejected() {
        let mut manager = BoardManager::with_defaults(now());
        let ids: Vec<BoardId> = manager.boards().iter().map(|b| b.id).collect();
        manager.delete_board(ids[1]).unwrap();
        manager.delete_board(ids[2]).unwrap();

        let before = manager.boards().to_vec();
        let result = manager.delete_board(ids[0]);
        assert!(matches!(result, Err(WorkspaceError::InvariantViolation(_))));
        assert_eq!(manager.boards(), &before[..]);
    }

    #[test]
    fn test_delete_active_activates_first_remaining() {
        let mut manager = BoardManager::with_defaults(now());
        let ids: Vec<BoardId> = manager.boards().iter().map(|b| b.id).collect();

        assert_eq!(manager.delete_board(ids[2]).unwrap(), BoardChange::Unchanged);
        assert_eq!(manager.delete_board(ids[0]).unwrap(), BoardChange::Switched(ids[1]));
        assert_eq!(manager.active_id(), ids[1]);
    }

    #[test]
    fn test_delete_unknown_board() {
        let mut manager = BoardManager::with_defaults(now());
        let missing = Uuid::new_v4();
        assert_eq!(manager.delete_board(missing), Err(WorkspaceError::NotFound(missing)));
        assert_eq!(manager.len(), 3);
    }

    #[test]
    fn test_rename_board() {
        let mut manager = BoardManager::with_defaults(now());
        let id = manager.active_id();
        manager.rename_board(id, "Retro").unwrap();
        assert_eq!(manager.active().title, "Retro");
        assert!(manager.rename_board(id, " ").is_err());
        assert_eq!(manager.active().title, "Retro");
    }

    #[test]
    fn test_from_boards_requires_one() {
        assert!(matches!(
            BoardManager::from_boards(Vec::new()),
            Err(WorkspaceError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Brainstorming Session"), "brainstorming-session");
        assert_eq!(slugify("  Q3 -- Roadmap!! "), "q3-roadmap");
        assert_eq!(slugify("???"), "board");
    }

    #[test]
    fn test_export_and_share() {
        let manager = BoardManager::with_defaults(now());
        let board = manager.active();
        assert_eq!(board.export_file_name(), "brainstorming-session.png");
        assert_eq!(
            board.share_url("jamboard.example.com/"),
            format!("https://jamboard.example.com/jamboard/{}", board.id)
        );
    }

    #[test]
    fn test_last_edited_label() {
        let mut board = Board::new("x".to_string(), now());
        assert_eq!(board.last_edited_label(now()), "Last edited just now");
        board.last_edited = now() - Duration::minutes(1);
        assert_eq!(board.last_edited_label(now()), "Last edited 1 minute ago");
        board.last_edited = now() - Duration::hours(5);
        assert_eq!(board.last_edited_label(now()), "Last edited 5 hours ago");
        board.last_edited = now() + Duration::hours(5);
        assert_eq!(board.last_edited_label(now()), "Last edited just now");
    }
}
