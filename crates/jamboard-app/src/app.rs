//! The whiteboard session: settings, drawing, history, boards and surface.

use crate::clipboard::Clipboard;
use crate::config::AppConfig;
use crate::error::AppResult;
use crate::ui::{Toast, UiAction, UiState};
use chrono::{DateTime, Utc};
use jamboard_core::{
    BACKGROUND_COLOR, BoardChange, BoardId, BoardManager, DrawingAction, History, PointerEvent,
    ToolFeedback, ToolManager, WorkspaceResult,
};
use jamboard_render::{
    RasterSurface, Surface, decode_data_uri, encode_png, render, render_with_preview,
    snapshot_to_data_uri,
};
use std::path::{Path, PathBuf};

/// A PNG produced by [`App::export_png`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedImage {
    /// `<slug>.png` derived from the board title.
    pub file_name: String,
    pub png: Vec<u8>,
}

impl ExportedImage {
    /// Write the PNG into `dir`, creating it if needed.
    pub fn write_to(&self, dir: &Path) -> AppResult<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.png)?;
        log::info!("Exported PNG to: {:?}", path);
        Ok(path)
    }
}

/// One whiteboard session.
///
/// Owns the drawing surface exclusively. Every operation runs to completion
/// synchronously; user-facing failures become toasts instead of errors.
pub struct App<C: Clipboard> {
    config: AppConfig,
    ui: UiState,
    tools: ToolManager,
    history: History,
    boards: BoardManager,
    surface: RasterSurface,
    clipboard: C,
    exports: Vec<ExportedImage>,
}

impl<C: Clipboard> App<C> {
    /// Start a session with the seeded boards.
    pub fn new(config: AppConfig, clipboard: C) -> AppResult<Self> {
        Self::with_boards(config, clipboard, BoardManager::with_defaults(Utc::now()))
    }

    /// Start a session over an existing board list.
    pub fn with_boards(config: AppConfig, clipboard: C, boards: BoardManager) -> AppResult<Self> {
        let surface =
            RasterSurface::with_background(config.width, config.height, BACKGROUND_COLOR.into());
        let ui = UiState::new(boards.active_id());
        log::info!(
            "{}: {}x{} surface, {} boards",
            config.title,
            config.width,
            config.height,
            boards.len()
        );
        Ok(Self {
            config,
            ui,
            tools: ToolManager::new(),
            history: History::new(),
            boards,
            surface,
            clipboard,
            exports: Vec::new(),
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut UiState {
        &mut self.ui
    }

    pub fn tools(&self) -> &ToolManager {
        &self.tools
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn boards(&self) -> &BoardManager {
        &self.boards
    }

    pub fn surface(&self) -> &RasterSurface {
        &self.surface
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// Board titles with their "Last edited" labels, in list order.
    pub fn board_labels(&self, now: DateTime<Utc>) -> Vec<(String, String)> {
        self.boards
            .boards()
            .iter()
            .map(|board| (board.title.clone(), board.last_edited_label(now)))
            .collect()
    }

    /// Images exported so far and not yet taken by the host.
    pub fn take_exports(&mut self) -> Vec<ExportedImage> {
        std::mem::take(&mut self.exports)
    }

    /// Feed a pointer event into the drawing state machine.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        let settings = &self.ui.settings;
        match event {
            PointerEvent::Down { position } => {
                self.tools.begin(position, settings);
            }
            PointerEvent::Move { position } => match self.tools.update(position, settings) {
                ToolFeedback::Segment {
                    from,
                    to,
                    color,
                    width,
                } => self.surface.stroke_segment(from, to, color.into(), width),
                ToolFeedback::Preview(preview) => {
                    render_with_preview(&mut self.surface, self.history.actions(), Some(&preview));
                }
                ToolFeedback::None => {}
            },
            PointerEvent::Up { position } => {
                if let Some(action) = self.tools.end(position, settings) {
                    self.commit(action);
                }
            }
            PointerEvent::Leave => {
                if let Some(action) = self.tools.leave(settings) {
                    self.commit(action);
                }
            }
        }
    }

    fn commit(&mut self, action: DrawingAction) {
        self.history.commit(action);
        // Drag feedback (stroke segments, shape previews) used the settings of
        // each move; the surface must show only what was committed.
        render(&mut self.surface, self.history.actions());
        self.sync_ui();
    }

    /// Execute a UI action.
    pub fn apply(&mut self, action: UiAction) {
        log::debug!("ui action {:?}", action);
        match action {
            UiAction::SetTool(tool) => self.ui.settings.tool = tool,
            UiAction::SetStrokeColor(hex) => {
                if let Err(e) = self.ui.settings.set_color_hex(&hex) {
                    self.ui.push_toast(Toast::error(e.to_string()));
                }
            }
            UiAction::SetStrokeWidth(width) => self.ui.settings.set_width(width),
            UiAction::Undo => {
                self.undo();
            }
            UiAction::Redo => {
                self.redo();
            }
            UiAction::Clear => self.clear(),
            UiAction::NewBoard(title) => {
                let result = self.new_board(&title);
                self.report(result, Some("New board created"));
            }
            UiAction::SelectBoard(id) => {
                let result = self.select_board(id);
                self.report(result.map(|_| ()), None);
            }
            UiAction::SaveBoard => match self.save_board() {
                Ok(()) => self.ui.push_toast(Toast::success("Board saved")),
                Err(e) => self.ui.push_toast(Toast::error(e.to_string())),
            },
            UiAction::DeleteBoard(id) => {
                let result = self.delete_board(id);
                self.report(result.map(|_| ()), Some("Board deleted"));
            }
            UiAction::RenameBoard(id, title) => {
                let result = self.boards.rename_board(id, &title);
                self.report(result, Some("Board renamed"));
            }
            UiAction::ExportPng => match self.export_png() {
                Ok(image) => {
                    self.ui
                        .push_toast(Toast::success(format!("Exported {}", image.file_name)));
                    self.exports.push(image);
                }
                Err(e) => self.ui.push_toast(Toast::error(e.to_string())),
            },
            UiAction::ShareBoard => match self.share() {
                Ok(_) => self.ui.push_toast(Toast::success("Share link copied to clipboard")),
                Err(e) => self.ui.push_toast(Toast::error(e.to_string())),
            },
            UiAction::Resize(width, height) => self.resize(width, height),
        }
    }

    fn report(&mut self, result: WorkspaceResult<()>, success: Option<&str>) {
        match result {
            Ok(()) => {
                if let Some(message) = success {
                    self.ui.push_toast(Toast::success(message));
                }
            }
            Err(e) => self.ui.push_toast(Toast::error(e.to_string())),
        }
    }

    /// Undo the last action and replay. Returns false when there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        if !self.history.undo() {
            return false;
        }
        render(&mut self.surface, self.history.actions());
        self.sync_ui();
        true
    }

    /// Redo the last undone action and replay. Returns false when there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        if !self.history.redo() {
            return false;
        }
        render(&mut self.surface, self.history.actions());
        self.sync_ui();
        true
    }

    /// Commit a clear-all and wipe the surface.
    pub fn clear(&mut self) {
        self.history.clear();
        self.surface.clear();
        self.sync_ui();
    }

    /// Create a board, make it active and start from a blank surface.
    pub fn new_board(&mut self, title: &str) -> WorkspaceResult<()> {
        let id = self.boards.create_board(title, Utc::now())?;
        self.reset_for_board(id);
        Ok(())
    }

    /// Switch boards. The new board shows its last saved thumbnail.
    pub fn select_board(&mut self, id: BoardId) -> WorkspaceResult<BoardChange> {
        let change = self.boards.select_board(id)?;
        if let BoardChange::Switched(id) = change {
            self.reset_for_board(id);
        }
        Ok(change)
    }

    pub fn delete_board(&mut self, id: BoardId) -> WorkspaceResult<BoardChange> {
        let change = self.boards.delete_board(id)?;
        if let BoardChange::Switched(id) = change {
            self.reset_for_board(id);
        }
        self.sync_ui();
        Ok(change)
    }

    /// Store the current surface as the active board's thumbnail.
    pub fn save_board(&mut self) -> AppResult<()> {
        let thumbnail = snapshot_to_data_uri(&self.surface.snapshot())?;
        self.boards.save_board(thumbnail, Utc::now());
        Ok(())
    }

    /// Encode the surface as PNG, named after the active board.
    pub fn export_png(&self) -> AppResult<ExportedImage> {
        let png = encode_png(&self.surface.snapshot())?;
        let file_name = self.boards.active().export_file_name();
        log::info!("Exported {} ({} bytes)", file_name, png.len());
        Ok(ExportedImage { file_name, png })
    }

    /// Copy the active board's share link to the clipboard.
    pub fn share(&mut self) -> AppResult<String> {
        let url = self.boards.active().share_url(&self.config.share_host);
        self.clipboard.set_text(&url)?;
        log::info!("Copied share link {}", url);
        Ok(url)
    }

    /// Resize the surface, keeping the pixels that still fit. Not a replay.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface.resize(width, height);
    }

    fn reset_for_board(&mut self, id: BoardId) {
        self.tools.cancel();
        self.history.reset();
        self.surface.clear();

        let thumbnail = self.boards.get(id).and_then(|b| b.thumbnail.clone());
        if let Some(uri) = thumbnail {
            match decode_data_uri(&uri) {
                Ok(snapshot) => self.surface.draw_snapshot(&snapshot),
                Err(e) => log::warn!("Failed to show thumbnail for board {}: {}", id, e),
            }
        }
        self.sync_ui();
    }

    fn sync_ui(&mut self) {
        self.ui.sync(&self.history, self.boards.active_id());
    }
}
