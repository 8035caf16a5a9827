use dialoguer::theme::ColorfulTheme;

use crate::cli::{io, output, test_mode};
use crate::editor::{
    ActiveDefault, CancelTrigger, EditorEvent, EditorInteraction, FormState, SessionEvent,
};
use crate::errors::Result;
use crate::model::InputType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Id,
    Name,
    Type,
    Default,
    Help,
    Submit,
    Cancel,
}

const MENU_ACTIONS: [MenuAction; 7] = [
    MenuAction::Id,
    MenuAction::Name,
    MenuAction::Type,
    MenuAction::Default,
    MenuAction::Help,
    MenuAction::Submit,
    MenuAction::Cancel,
];

/// Dialoguer-backed presentation of the editor form. Falls back to the
/// scripted queue in [`test_mode`] when one is installed.
pub struct TerminalInteraction {
    theme: ColorfulTheme,
    cursor: usize,
}

impl TerminalInteraction {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
            cursor: 0,
        }
    }

    fn menu_label(action: MenuAction, state: &FormState) -> String {
        match action {
            MenuAction::Id => format!("Id: {}", state.id()),
            MenuAction::Name => format!("Name: {}", state.name()),
            MenuAction::Type => format!(
                "Type: {}",
                state.input_type().map(|kind| kind.as_str()).unwrap_or("-")
            ),
            MenuAction::Default => match state.active_default() {
                Some(ActiveDefault::Toggle) => format!("Default: [{}]", toggle_mark(state)),
                Some(ActiveDefault::Text) => format!("Default: {}", state.default_text()),
                None => "Default: (select a type first)".to_string(),
            },
            MenuAction::Help => format!("Help: {}", state.help()),
            MenuAction::Submit => "OK".to_string(),
            MenuAction::Cancel => "Cancel".to_string(),
        }
    }

    fn prompt_action(
        &mut self,
        action: MenuAction,
        state: &FormState,
    ) -> Result<Option<EditorEvent>> {
        let event = match action {
            MenuAction::Id => Some(EditorEvent::Id(io::prompt_text(
                &self.theme,
                "Id",
                state.id(),
            )?)),
            MenuAction::Name => Some(EditorEvent::Name(io::prompt_text(
                &self.theme,
                "Name",
                state.name(),
            )?)),
            MenuAction::Help => Some(EditorEvent::Help(io::prompt_text(
                &self.theme,
                "Help",
                state.help(),
            )?)),
            MenuAction::Type => {
                let items: Vec<String> = InputType::ALL
                    .iter()
                    .map(|kind| kind.as_str().to_string())
                    .collect();
                let current = state
                    .input_type()
                    .and_then(|kind| InputType::ALL.iter().position(|other| *other == kind))
                    .unwrap_or(0);
                io::select_option(&self.theme, "Type", &items, current)?
                    .map(|index| EditorEvent::SelectType(InputType::ALL[index]))
            }
            MenuAction::Default => match state.active_default() {
                Some(ActiveDefault::Toggle) => {
                    io::prompt_toggle(&self.theme, "Default", state.default_selected())?
                        .map(EditorEvent::DefaultSelected)
                }
                Some(ActiveDefault::Text) => Some(EditorEvent::DefaultText(io::prompt_text(
                    &self.theme,
                    "Default",
                    state.default_text(),
                )?)),
                None => {
                    output::warning("Select a type before editing the default value.");
                    None
                }
            },
            MenuAction::Submit => Some(EditorEvent::Submit),
            MenuAction::Cancel => Some(EditorEvent::Cancel(CancelTrigger::Button)),
        };
        Ok(event)
    }
}

impl Default for TerminalInteraction {
    fn default() -> Self {
        Self::new()
    }
}

fn toggle_mark(state: &FormState) -> &'static str {
    if state.default_selected() {
        "x"
    } else {
        " "
    }
}

impl EditorInteraction for TerminalInteraction {
    fn next_event(&mut self, state: &FormState) -> Result<Option<EditorEvent>> {
        if let Some(scripted) = test_mode::next_event() {
            return Ok(scripted);
        }

        loop {
            output::section("Input definition");
            let items: Vec<String> = MENU_ACTIONS
                .iter()
                .map(|action| Self::menu_label(*action, state))
                .collect();
            let Some(index) = io::select_option(&self.theme, "Edit field", &items, self.cursor)?
            else {
                return Ok(Some(EditorEvent::Cancel(CancelTrigger::Escape)));
            };
            self.cursor = index;
            if let Some(event) = self.prompt_action(MENU_ACTIONS[index], state)? {
                return Ok(Some(event));
            }
        }
    }

    fn render(&mut self, _state: &FormState, outcome: &SessionEvent) {
        match outcome {
            SessionEvent::Rejected(err) => output::error(err),
            SessionEvent::TypeChanged(kind) => {
                output::info(format!("Type set to {}; default value reset.", kind))
            }
            _ => {}
        }
    }
}
