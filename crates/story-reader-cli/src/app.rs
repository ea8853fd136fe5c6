use anyhow::Result;
use ratatui::{
    text::Line,
    widgets::{ListState, Paragraph, Wrap},
};
use story_reader_config::ReaderSettings;
use story_reader_engine::{
    library::{
        Chapter, ChapterView, IdentityProvider, Library, LocalIdentity, MemoryDocumentStore,
        NewStory, Story,
    },
    parsing::{Block, parse},
    progress::{KeyValueStore, ProgressTracker, ReadingProgress},
};

use crate::render;

/// Which pane has the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Stories,
    Chapters,
    Reading,
}

/// Pending text input or confirmation on the story list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    NewStory(String),
    RenameStory { story_id: String, title: String },
    ConfirmDelete { story_id: String, title: String },
}

impl Prompt {
    /// Text shown in the status line while the prompt is open.
    pub fn label(&self) -> String {
        match self {
            Prompt::NewStory(title) => {
                format!("New story title: {title}_ (Enter: save, Esc: cancel)")
            }
            Prompt::RenameStory { title, .. } => {
                format!("Rename to: {title}_ (Enter: save, Esc: cancel)")
            }
            Prompt::ConfirmDelete { title, .. } => {
                format!("Delete {title} and all its chapters? (y/n)")
            }
        }
    }
}

/// Size of the reading column, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Viewport {
    width: u16,
    height: u16,
}

pub struct App<S> {
    library: Library<MemoryDocumentStore>,
    progress: ProgressTracker<S>,
    identity: LocalIdentity,
    settings: ReaderSettings,
    stories: Vec<Story>,
    chapter_counts: Vec<usize>,
    story_state: ListState,
    chapters: Vec<Chapter>,
    chapter_state: ListState,
    view: Option<ChapterView>,
    blocks: Vec<Block>,
    scroll: u16,
    viewport: Option<Viewport>,
    screen: Screen,
    prompt: Option<Prompt>,
    status: Option<String>,
}

impl<S: KeyValueStore> App<S> {
    pub fn new(
        library: Library<MemoryDocumentStore>,
        mut progress: ProgressTracker<S>,
        identity: LocalIdentity,
        settings: ReaderSettings,
    ) -> Result<Self> {
        let stories = library.list_stories()?;
        let chapter_counts = stories
            .iter()
            .map(|story| library.chapter_count(&story.id))
            .collect::<Result<Vec<_>, _>>()?;

        if let Err(e) = progress.cleanup_expired() {
            log::warn!("Failed to clean up reading progress: {e}");
        }

        let mut app = Self {
            library,
            progress,
            identity,
            settings,
            stories,
            chapter_counts,
            story_state: ListState::default(),
            chapters: Vec::new(),
            chapter_state: ListState::default(),
            view: None,
            blocks: Vec::new(),
            scroll: 0,
            viewport: None,
            screen: Screen::Stories,
            prompt: None,
            status: None,
        };

        // Select first story if available
        if !app.stories.is_empty() {
            app.story_state.select(Some(0));
        }

        Ok(app)
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn settings(&self) -> ReaderSettings {
        self.settings
    }

    pub fn prompt(&self) -> Option<&Prompt> {
        self.prompt.as_ref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn view(&self) -> Option<&ChapterView> {
        self.view.as_ref()
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn story_state_mut(&mut self) -> &mut ListState {
        &mut self.story_state
    }

    pub fn chapter_state_mut(&mut self) -> &mut ListState {
        &mut self.chapter_state
    }

    /// Story list entries: title, chapter count, ownership and where reading
    /// stopped.
    pub fn story_labels(&mut self) -> Vec<String> {
        let user = self.identity.current_user_id();
        let mut labels = Vec::with_capacity(self.stories.len());
        for (story, count) in self.stories.iter().zip(&self.chapter_counts) {
            let mut label = format!("{} ({count} chapters)", story.title);
            if Library::<MemoryDocumentStore>::can_manage(user.as_deref(), story) {
                label.push_str(" [yours]");
            }
            if let Some(progress) = saved_progress(&mut self.progress, &story.id) {
                label.push_str(&format!(" · continue: {}", progress.chapter_title));
            }
            labels.push(label);
        }
        labels
    }

    pub fn chapter_labels(&self) -> Vec<String> {
        self.chapters.iter().map(Chapter::display_title).collect()
    }

    /// Rendered chapter text for the current column width.
    pub fn chapter_lines(&self) -> Vec<Line<'static>> {
        render::chapter_lines(&self.blocks, self.settings.column_width())
    }

    pub fn next_item(&mut self) {
        match self.screen {
            Screen::Stories => select_next(&mut self.story_state, self.stories.len()),
            Screen::Chapters => select_next(&mut self.chapter_state, self.chapters.len()),
            Screen::Reading => self.scroll_down(1),
        }
    }

    pub fn previous_item(&mut self) {
        match self.screen {
            Screen::Stories => select_previous(&mut self.story_state, self.stories.len()),
            Screen::Chapters => select_previous(&mut self.chapter_state, self.chapters.len()),
            Screen::Reading => self.scroll_up(1),
        }
    }

    /// Opens the selected story or chapter.
    pub fn activate(&mut self) -> Result<()> {
        match self.screen {
            Screen::Stories => self.open_selected_story(),
            Screen::Chapters => {
                if let Some(chapter) = self.selected_chapter() {
                    let chapter_id = chapter.id.clone();
                    self.open_chapter(&chapter_id, 0)?;
                }
                Ok(())
            }
            Screen::Reading => Ok(()),
        }
    }

    /// Jumps straight to the saved position of the selected story.
    pub fn resume(&mut self) -> Result<()> {
        let Some(story) = self.selected_story().cloned() else {
            return Ok(());
        };
        let Some(progress) = saved_progress(&mut self.progress, &story.id) else {
            self.status = Some(format!("No saved position for {}", story.title));
            return Ok(());
        };

        self.load_chapters(&story)?;
        let scroll = progress
            .scroll_position
            .map_or(0, |p| u16::try_from(p).unwrap_or(u16::MAX));
        self.open_chapter(&progress.chapter_id, scroll)
    }

    /// Leaves the current pane. Returns false when already at the story list.
    pub fn back(&mut self) -> bool {
        match self.screen {
            Screen::Stories => false,
            Screen::Chapters => {
                self.screen = Screen::Stories;
                true
            }
            Screen::Reading => {
                self.record_position();
                self.screen = Screen::Chapters;
                true
            }
        }
    }

    pub fn next_chapter(&mut self) -> Result<()> {
        let next = self
            .view
            .as_ref()
            .and_then(|view| view.next.as_ref())
            .map(|chapter| chapter.id.clone());
        match next {
            Some(id) => self.open_chapter(&id, 0),
            None => {
                self.status = Some("Last chapter".to_string());
                Ok(())
            }
        }
    }

    pub fn previous_chapter(&mut self) -> Result<()> {
        let previous = self
            .view
            .as_ref()
            .and_then(|view| view.previous.as_ref())
            .map(|chapter| chapter.id.clone());
        match previous {
            Some(id) => self.open_chapter(&id, 0),
            None => {
                self.status = Some("First chapter".to_string());
                Ok(())
            }
        }
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines).min(self.max_scroll());
    }

    /// Records the size of the reading column from the last draw.
    ///
    /// The scroll offset counts wrapped rows, so a change of size (or of font
    /// size) pulls it back inside the chapter.
    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.viewport = Some(Viewport { width, height });
        self.scroll = self.scroll.min(self.max_scroll());
    }

    /// Furthest scroll offset that still fills the column. Unbounded until
    /// the first draw reports the column size.
    fn max_scroll(&self) -> u16 {
        let Some(viewport) = self.viewport else {
            return u16::MAX;
        };
        let rows = Paragraph::new(self.chapter_lines())
            .wrap(Wrap { trim: false })
            .line_count(viewport.width);
        u16::try_from(rows.saturating_sub(usize::from(viewport.height))).unwrap_or(u16::MAX)
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn increase_font_size(&mut self) {
        self.settings.increase_font_size();
        self.status = Some(format!("Font size {}", self.settings.font_size));
    }

    pub fn decrease_font_size(&mut self) {
        self.settings.decrease_font_size();
        self.status = Some(format!("Font size {}", self.settings.font_size));
    }

    pub fn reset_font_size(&mut self) {
        self.settings.reset();
        self.status = Some(format!("Font size {}", self.settings.font_size));
    }

    /// Saves the reading position of the open chapter, if any.
    pub fn record_position(&mut self) {
        let Some(view) = &self.view else {
            return;
        };
        if let Err(e) =
            self.progress
                .record_position(&view.story.id, &view.chapter, u32::from(self.scroll))
        {
            log::warn!("Failed to save reading progress: {e}");
            self.status = Some(format!("Could not save progress: {e}"));
        }
    }

    /// Opens the title prompt for a new story. Needs a signed-in user.
    pub fn start_new_story(&mut self) {
        if self.identity.current_user_id().is_none() {
            self.status = Some("Set user_id in the config file to add stories".to_string());
            return;
        }
        self.prompt = Some(Prompt::NewStory(String::new()));
    }

    /// Opens the rename prompt for the selected story, if the user owns it.
    pub fn start_rename_story(&mut self) {
        if let Some(story) = self.selected_managed_story() {
            self.prompt = Some(Prompt::RenameStory {
                story_id: story.id.clone(),
                title: story.title.clone(),
            });
        }
    }

    /// Asks to confirm deleting the selected story, if the user owns it.
    pub fn start_delete_story(&mut self) {
        if let Some(story) = self.selected_managed_story() {
            self.prompt = Some(Prompt::ConfirmDelete {
                story_id: story.id.clone(),
                title: story.title.clone(),
            });
        }
    }

    pub fn prompt_input(&mut self, c: char) {
        match &mut self.prompt {
            Some(Prompt::NewStory(title)) | Some(Prompt::RenameStory { title, .. }) => {
                title.push(c)
            }
            Some(Prompt::ConfirmDelete { .. }) | None => {}
        }
    }

    pub fn prompt_backspace(&mut self) {
        if let Some(Prompt::NewStory(title)) | Some(Prompt::RenameStory { title, .. }) =
            &mut self.prompt
        {
            title.pop();
        }
    }

    pub fn cancel_prompt(&mut self) {
        self.prompt = None;
    }

    /// Carries out the open prompt. Refusals from the library end up in the
    /// status line.
    pub fn submit_prompt(&mut self) -> Result<()> {
        let Some(prompt) = self.prompt.take() else {
            return Ok(());
        };
        let user = self.identity.current_user_id();
        let user = user.as_deref();

        let outcome = match prompt {
            Prompt::NewStory(title) => self
                .library
                .create_story(
                    user,
                    &NewStory {
                        title,
                        ..NewStory::default()
                    },
                )
                .map(|id| (Some(id), "Created story for this session".to_string())),
            Prompt::RenameStory { story_id, title } => self
                .library
                .rename_story(user, &story_id, &title)
                .map(|()| (Some(story_id), "Renamed story".to_string())),
            Prompt::ConfirmDelete { story_id, title } => self
                .library
                .delete_story(user, &story_id)
                .map(|removed| {
                    if let Err(e) = self.progress.clear(&story_id) {
                        log::warn!("Failed to clear reading progress for {story_id}: {e}");
                    }
                    (None, format!("Deleted {title} and {removed} chapters"))
                }),
        };

        match outcome {
            Ok((select, message)) => {
                self.reload_stories(select.as_deref())?;
                self.status = Some(message);
            }
            Err(e) => self.status = Some(e.to_string()),
        }
        Ok(())
    }

    pub fn selected_story(&self) -> Option<&Story> {
        self.story_state.selected().and_then(|i| self.stories.get(i))
    }

    fn selected_managed_story(&mut self) -> Option<Story> {
        let story = self.selected_story()?.clone();
        let user = self.identity.current_user_id();
        if Library::<MemoryDocumentStore>::can_manage(user.as_deref(), &story) {
            Some(story)
        } else {
            self.status = Some(format!("Only the owner can change {}", story.title));
            None
        }
    }

    /// Re-reads the story list, selecting `select` if given.
    fn reload_stories(&mut self, select: Option<&str>) -> Result<()> {
        self.stories = self.library.list_stories()?;
        self.chapter_counts = self
            .stories
            .iter()
            .map(|story| self.library.chapter_count(&story.id))
            .collect::<Result<Vec<_>, _>>()?;

        let selected = select
            .and_then(|id| self.stories.iter().position(|story| story.id == id))
            .or_else(|| {
                let last = self.stories.len().checked_sub(1)?;
                Some(self.story_state.selected().unwrap_or(0).min(last))
            });
        self.story_state.select(selected);
        Ok(())
    }

    fn selected_chapter(&self) -> Option<&Chapter> {
        self.chapter_state
            .selected()
            .and_then(|i| self.chapters.get(i))
    }

    fn open_selected_story(&mut self) -> Result<()> {
        let Some(story) = self.selected_story().cloned() else {
            return Ok(());
        };
        self.load_chapters(&story)?;
        self.view = None;
        self.blocks.clear();
        self.screen = Screen::Chapters;
        Ok(())
    }

    fn load_chapters(&mut self, story: &Story) -> Result<()> {
        self.chapters = self.library.chapters(&story.id)?;
        let saved = saved_progress(&mut self.progress, &story.id);

        // Highlight the chapter reading stopped at, else the first
        let selected = saved
            .and_then(|p| self.chapters.iter().position(|c| c.id == p.chapter_id))
            .or(if self.chapters.is_empty() { None } else { Some(0) });
        self.chapter_state.select(selected);
        self.status = None;
        Ok(())
    }

    fn open_chapter(&mut self, chapter_id: &str, scroll: u16) -> Result<()> {
        let Some(story_id) = self
            .view
            .as_ref()
            .map(|view| view.story.id.clone())
            .filter(|_| self.screen == Screen::Reading)
            .or_else(|| self.selected_story().map(|story| story.id.clone()))
        else {
            return Ok(());
        };
        let Some(view) = self.library.chapter(&story_id, chapter_id)? else {
            self.status = Some(format!("Chapter not found: {chapter_id}"));
            return Ok(());
        };

        if self.screen == Screen::Reading {
            self.record_position();
        }

        log::debug!("Opening chapter {} of {}", view.chapter.id, view.story.id);
        self.blocks = parse(&view.chapter.content);
        self.chapter_state
            .select(self.chapters.iter().position(|c| c.id == view.chapter.id));
        self.view = Some(view);
        self.scroll = 0;
        self.scroll_down(scroll);
        self.screen = Screen::Reading;
        self.status = None;
        self.record_position();
        Ok(())
    }
}

fn saved_progress<S: KeyValueStore>(
    tracker: &mut ProgressTracker<S>,
    story_id: &str,
) -> Option<ReadingProgress> {
    tracker.get(story_id).unwrap_or_else(|e| {
        log::warn!("Failed to read reading progress for {story_id}: {e}");
        None
    })
}

fn select_next(state: &mut ListState, len: usize) {
    if len == 0 {
        return;
    }
    let i = match state.selected() {
        Some(i) => (i + 1) % len,
        None => 0,
    };
    state.select(Some(i));
}

fn select_previous(state: &mut ListState, len: usize) {
    if len == 0 {
        return;
    }
    let i = match state.selected() {
        Some(0) | None => len - 1,
        Some(i) => i - 1,
    };
    state.select(Some(i));
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use story_reader_engine::library::NewChapter;
    use story_reader_engine::progress::MemoryKeyValueStore;

    use super::*;

    const OWNER: &str = "owner";

    fn library_with(chapters: &[(u32, &str, String)]) -> Library<MemoryDocumentStore> {
        let mut library = Library::new(MemoryDocumentStore::new());
        let story_id = library
            .create_story(
                Some(OWNER),
                &NewStory {
                    title: "Saga".into(),
                    ..NewStory::default()
                },
            )
            .unwrap();
        for (index, title, content) in chapters {
            library
                .add_chapter(
                    Some(OWNER),
                    &story_id,
                    &NewChapter {
                        title: title.to_string(),
                        content: content.clone(),
                        index: Some(*index),
                    },
                )
                .unwrap();
        }
        library
    }

    fn short_lines() -> String {
        (0..10)
            .map(|n| format!("line {n}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn sample_library() -> Library<MemoryDocumentStore> {
        library_with(&[
            (2, "Second", short_lines()),
            (1, "First", short_lines()),
            (3, "Third", short_lines()),
        ])
    }

    fn app_with(
        library: Library<MemoryDocumentStore>,
        identity: LocalIdentity,
    ) -> App<MemoryKeyValueStore> {
        App::new(
            library,
            ProgressTracker::new(MemoryKeyValueStore::new()),
            identity,
            ReaderSettings::default(),
        )
        .unwrap()
    }

    fn app() -> App<MemoryKeyValueStore> {
        app_with(sample_library(), LocalIdentity::new())
    }

    fn owner_app() -> App<MemoryKeyValueStore> {
        app_with(sample_library(), LocalIdentity::signed_in(OWNER))
    }

    #[test]
    fn starts_on_story_list() {
        let mut app = app();
        assert_eq!(app.screen(), Screen::Stories);
        assert_eq!(app.story_labels(), vec!["Saga (3 chapters)"]);
    }

    #[test]
    fn owned_stories_are_marked() {
        let mut app = owner_app();
        assert_eq!(app.story_labels(), vec!["Saga (3 chapters) [yours]"]);
    }

    #[test]
    fn chapters_listed_in_reading_order() {
        let mut app = app();
        app.activate().unwrap();

        assert_eq!(app.screen(), Screen::Chapters);
        assert_eq!(
            app.chapter_labels(),
            vec![
                "Chapter 1: First",
                "Chapter 2: Second",
                "Chapter 3: Third"
            ]
        );
    }

    #[test]
    fn reading_moves_between_chapters() {
        let mut app = app();
        app.activate().unwrap();
        app.activate().unwrap();
        assert_eq!(app.view().unwrap().chapter.title, "First");

        app.previous_chapter().unwrap();
        assert_eq!(app.status(), Some("First chapter"));

        app.next_chapter().unwrap();
        app.next_chapter().unwrap();
        assert_eq!(app.view().unwrap().chapter.title, "Third");
        app.next_chapter().unwrap();
        assert_eq!(app.status(), Some("Last chapter"));
    }

    #[test]
    fn scroll_stops_when_last_row_reaches_bottom() {
        let mut app = app();
        app.activate().unwrap();
        app.activate().unwrap();
        app.set_viewport(80, 4);

        app.scroll_down(100);
        assert_eq!(app.scroll(), 6);
        app.scroll_up(100);
        assert_eq!(app.scroll(), 0);
    }

    #[test]
    fn scroll_limit_counts_wrapped_rows() {
        // 504 cells of text need at least 7 rows at width 80
        let content = format!("{}\nTHE-END", "word ".repeat(100));
        let mut app = app_with(library_with(&[(1, "Long", content)]), LocalIdentity::new());
        app.activate().unwrap();
        app.activate().unwrap();
        app.set_viewport(80, 3);

        app.scroll_down(u16::MAX);

        // More than one row per block, and the final row fills the bottom
        assert!(app.scroll() >= 5, "scroll = {}", app.scroll());
        let rows = Paragraph::new(app.chapter_lines())
            .wrap(Wrap { trim: false })
            .line_count(80);
        assert_eq!(usize::from(app.scroll()) + 3, rows);
    }

    #[test]
    fn narrower_column_allows_further_scroll_and_resize_clamps() {
        let content = "word ".repeat(100);
        let mut app = app_with(library_with(&[(1, "Long", content)]), LocalIdentity::new());
        app.activate().unwrap();
        app.activate().unwrap();

        app.set_viewport(40, 2);
        app.scroll_down(u16::MAX);
        let narrow = app.scroll();

        app.set_viewport(80, 2);
        assert!(app.scroll() < narrow);
        assert!(app.scroll() >= 5, "scroll = {}", app.scroll());
    }

    #[test]
    fn back_records_progress_and_resume_returns_there() {
        let mut app = app();
        app.activate().unwrap();
        app.next_item();
        app.activate().unwrap();
        app.scroll_down(4);

        assert!(app.back());
        assert!(app.back());
        assert!(!app.back());
        assert_eq!(
            app.story_labels(),
            vec!["Saga (3 chapters) · continue: Second"]
        );

        app.resume().unwrap();
        assert_eq!(app.screen(), Screen::Reading);
        assert_eq!(app.view().unwrap().chapter.title, "Second");
        assert_eq!(app.scroll(), 4);
    }

    #[test]
    fn resume_clamps_saved_position_to_current_column() {
        let mut app = app();
        app.activate().unwrap();
        app.activate().unwrap();
        app.scroll_down(9);
        app.back();
        app.back();

        app.set_viewport(80, 8);
        app.resume().unwrap();

        assert_eq!(app.scroll(), 2);
    }

    #[test]
    fn resume_without_progress_reports_it() {
        let mut app = app();
        app.resume().unwrap();
        assert_eq!(app.screen(), Screen::Stories);
        assert_eq!(app.status(), Some("No saved position for Saga"));
    }

    #[test]
    fn new_story_needs_signed_in_user() {
        let mut app = app();
        app.start_new_story();
        assert_eq!(app.prompt(), None);
        assert_eq!(
            app.status(),
            Some("Set user_id in the config file to add stories")
        );
    }

    #[test]
    fn signed_in_user_creates_story() {
        let mut app = app_with(sample_library(), LocalIdentity::signed_in("mai"));
        app.start_new_story();
        for c in "Nw".chars() {
            app.prompt_input(c);
        }
        app.prompt_backspace();
        for c in "ew Tale".chars() {
            app.prompt_input(c);
        }
        assert_eq!(app.prompt(), Some(&Prompt::NewStory("New Tale".into())));

        app.submit_prompt().unwrap();

        assert_eq!(app.prompt(), None);
        assert_eq!(
            app.story_labels(),
            vec!["Saga (3 chapters)", "New Tale (0 chapters) [yours]"]
        );
        assert_eq!(app.selected_story().unwrap().title, "New Tale");
    }

    #[test]
    fn blank_story_title_is_reported() {
        let mut app = owner_app();
        app.start_new_story();
        app.prompt_input(' ');
        app.submit_prompt().unwrap();

        assert_eq!(app.status(), Some("Title must not be blank"));
        assert_eq!(app.story_labels().len(), 1);
    }

    #[test]
    fn only_owner_may_rename_or_delete() {
        let mut app = app_with(sample_library(), LocalIdentity::signed_in("stranger"));
        app.start_delete_story();
        assert_eq!(app.prompt(), None);
        assert_eq!(app.status(), Some("Only the owner can change Saga"));

        app.start_rename_story();
        assert_eq!(app.prompt(), None);
    }

    #[test]
    fn owner_renames_story() {
        let mut app = owner_app();
        app.start_rename_story();
        for c in " II".chars() {
            app.prompt_input(c);
        }
        app.submit_prompt().unwrap();

        assert_eq!(app.selected_story().unwrap().title, "Saga II");
        assert_eq!(app.status(), Some("Renamed story"));
    }

    #[test]
    fn owner_deletes_story_and_its_progress() {
        let mut app = owner_app();
        app.activate().unwrap();
        app.activate().unwrap();
        app.back();
        app.back();
        assert!(app.story_labels()[0].contains("continue"));

        app.start_delete_story();
        app.cancel_prompt();
        assert_eq!(app.story_labels().len(), 1);

        app.start_delete_story();
        app.submit_prompt().unwrap();

        assert!(app.story_labels().is_empty());
        assert_eq!(app.selected_story(), None);
        assert_eq!(app.status(), Some("Deleted Saga and 3 chapters"));
        assert_eq!(app.progress.all().unwrap().len(), 0);
    }

    #[test]
    fn font_size_changes_column_width() {
        let mut app = app();
        app.increase_font_size();
        assert_eq!(app.settings().font_size, 19);
        assert_eq!(app.status(), Some("Font size 19"));
        app.reset_font_size();
        assert_eq!(app.settings(), ReaderSettings::default());
    }

    #[test]
    fn list_selection_wraps() {
        let mut state = ListState::default();
        select_next(&mut state, 2);
        assert_eq!(state.selected(), Some(0));
        select_previous(&mut state, 2);
        assert_eq!(state.selected(), Some(1));
        select_next(&mut state, 2);
        assert_eq!(state.selected(), Some(0));
        select_next(&mut state, 0);
        assert_eq!(state.selected(), Some(0));
    }
}
