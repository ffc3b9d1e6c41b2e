use crate::ui::composer::intent::ComposerIntent;
use crate::ui::composer::state::ComposerState;
use crate::ui::mvi::Reducer;

pub struct ComposerReducer;

impl Reducer for ComposerReducer {
    type State = ComposerState;
    type Intent = ComposerIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ComposerIntent::SetText(text) => ComposerState { text, ..state },
            ComposerIntent::InsertChar(ch) => {
                state.text.push(ch);
                state
            }
            ComposerIntent::Backspace => {
                state.text.pop();
                state
            }
            ComposerIntent::SetImage(image) => ComposerState { image, ..state },
            ComposerIntent::SetPendingImage(pending_image) => ComposerState {
                pending_image,
                ..state
            },
            ComposerIntent::PendingInsertChar(ch) => {
                state.pending_image.push(ch);
                state
            }
            ComposerIntent::PendingBackspace => {
                state.pending_image.pop();
                state
            }
            ComposerIntent::ToggleImagePanel => ComposerState {
                image_panel_open: !state.image_panel_open,
                ..state
            },
            ComposerIntent::AttachImage => {
                let pending = std::mem::take(&mut state.pending_image);
                let image = if pending.is_empty() {
                    state.image
                } else {
                    pending
                };
                ComposerState {
                    image,
                    image_panel_open: false,
                    ..state
                }
            }
            ComposerIntent::ClearImage => ComposerState {
                image: String::new(),
                ..state
            },
            ComposerIntent::SubmitStarted => ComposerState {
                submitting: true,
                ..state
            },
            ComposerIntent::Posted => ComposerState::default(),
            ComposerIntent::PostFailed => ComposerState {
                submitting: false,
                ..state
            },
        }
    }
}
