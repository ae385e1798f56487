use iced::widget::text_editor;
use iced::{Task, keyboard};

use stylepad_core::{MenuCommand, Rgb};

use super::file_ops::pick_open_path;
use super::{App, ColorDraft, Message};

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Menu(command) => {
                self.file_menu_open = false;
                return self.dispatch(command);
            }

            Message::ToggleFileMenu => {
                self.file_menu_open = !self.file_menu_open;
            }

            Message::CloseFileMenu => {
                self.file_menu_open = false;
            }

            Message::EditorAction(action) => {
                self.file_menu_open = false;
                if self.is_blocked() && action.is_edit() {
                    return Task::none();
                }
                self.editor.buffer_mut().perform(action);
            }

            Message::FontSelected(family) => {
                self.editor.set_family(family);
            }

            Message::SizeSelected(size) => {
                self.editor.set_size(size);
            }

            Message::ShowColorPicker => {
                self.file_menu_open = false;
                let current = self.editor.style().color.unwrap_or(Rgb::BLACK);
                self.color_draft = Some(ColorDraft::new(current));
            }

            Message::ColorChannelChanged(channel, value) => {
                if let Some(draft) = &mut self.color_draft {
                    draft.set(channel, value);
                }
            }

            Message::ColorPresetPicked(color) => {
                if let Some(draft) = &mut self.color_draft {
                    draft.color = color;
                }
            }

            Message::ColorConfirm => {
                let choice = self.color_draft.take().map(|d| d.color);
                self.editor.pick_color(choice);
            }

            Message::ColorCancel => {
                self.color_draft = None;
            }

            Message::DismissNotice => {
                self.editor.dismiss_notice();
            }

            Message::KeyPressed(key, modifiers) => {
                return self.handle_key_pressed(key, modifiers);
            }

            Message::OpenPathChosen(choice) => {
                self.prompt_pending = false;
                self.finish_open(choice);
            }

            Message::SavePathChosen(choice) => {
                self.prompt_pending = false;
                self.finish_save(choice);
            }
        }
        Task::none()
    }

    /// Routes a File menu command to its handler.
    ///
    /// Exit always goes through; the others wait until no file dialog or
    /// modal is open.
    pub fn dispatch(&mut self, command: MenuCommand) -> Task<Message> {
        if command != MenuCommand::Exit && (self.prompt_pending || self.is_blocked()) {
            return Task::none();
        }

        match command {
            MenuCommand::New => self.on_new(),
            MenuCommand::Open => self.on_open(),
            MenuCommand::Save => self.on_save(),
            MenuCommand::Exit => self.on_exit(),
        }
    }

    fn on_new(&mut self) -> Task<Message> {
        self.editor.new_file();
        self.status_message = "New file".to_string();
        Task::none()
    }

    fn on_open(&mut self) -> Task<Message> {
        self.prompt_pending = true;
        Task::perform(pick_open_path(), Message::OpenPathChosen)
    }

    fn on_save(&mut self) -> Task<Message> {
        self.start_save()
    }

    fn on_exit(&mut self) -> Task<Message> {
        tracing::info!("Exiting");
        iced::exit()
    }

    pub fn handle_key_pressed(
        &mut self,
        key: keyboard::Key,
        modifiers: keyboard::Modifiers,
    ) -> Task<Message> {
        if let keyboard::Key::Named(keyboard::key::Named::Escape) = key {
            if self.color_draft.is_some() {
                return self.update(Message::ColorCancel);
            }
            if !self.editor.notices().is_empty() {
                return self.update(Message::DismissNotice);
            }
            self.file_menu_open = false;
            return Task::none();
        }

        if modifiers.control() {
            if let keyboard::Key::Character(c) = &key {
                if let Some(command) = MenuCommand::from_shortcut_key(&c.to_lowercase()) {
                    return self.update(Message::Menu(command));
                }
            }
        }

        Task::none()
    }
}
