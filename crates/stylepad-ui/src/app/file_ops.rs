use std::path::PathBuf;

use stylepad_core::SaveOutcome;

use super::{App, Message};
use iced::Task;

/// Shows the native open dialog. `None` means the user cancelled.
pub async fn pick_open_path() -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title("Open")
        .add_filter("All Files", &["*"])
        .add_filter("Text", &["txt", "md"])
        .pick_file()
        .await
        .map(|file| file.path().to_path_buf())
}

/// Shows the native save dialog. `None` means the user cancelled.
pub async fn pick_save_path(default_name: String) -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title("Save")
        .set_file_name(&default_name)
        .save_file()
        .await
        .map(|file| file.path().to_path_buf())
}

impl App {
    pub fn finish_open(&mut self, choice: Option<PathBuf>) {
        if self.editor.open(choice) {
            let name = self.editor.document().file_name().unwrap_or_default();
            self.status_message = format!("Opened: {}", name);
        }
    }

    /// Runs a save and asks for a destination if the document has no file.
    pub fn start_save(&mut self) -> Task<Message> {
        match self.editor.save() {
            SaveOutcome::NeedsDestination => {
                self.prompt_pending = true;
                Task::perform(
                    pick_save_path("untitled.txt".to_string()),
                    Message::SavePathChosen,
                )
            }
            outcome => {
                self.after_save(outcome);
                Task::none()
            }
        }
    }

    pub fn finish_save(&mut self, choice: Option<PathBuf>) {
        let outcome = self.editor.save_to(choice);
        self.after_save(outcome);
    }

    fn after_save(&mut self, outcome: SaveOutcome) {
        match outcome {
            SaveOutcome::Saved => {
                let name = self.editor.document().file_name().unwrap_or_default();
                self.status_message = format!("Saved: {}", name);
            }
            SaveOutcome::Failed => {
                self.status_message = "Save failed".to_string();
            }
            SaveOutcome::Cancelled | SaveOutcome::NeedsDestination => {}
        }
    }
}
