use crate::feed::Comment;
use crate::ui::mvi::Reducer;
use crate::ui::thread::intent::ThreadIntent;
use crate::ui::thread::state::{CommentPanel, CommentThreadState, LoadStatus};

pub struct ThreadReducer;

impl Reducer for ThreadReducer {
    type State = CommentThreadState;
    type Intent = ThreadIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ThreadIntent::LoadStarted => CommentThreadState {
                status: LoadStatus::Loading,
                ..state
            },
            ThreadIntent::TogglePanel { signed_in } => {
                if !signed_in {
                    return state;
                }
                let panel = match state.panel {
                    CommentPanel::Hidden => CommentPanel::Visible,
                    CommentPanel::Visible => CommentPanel::Hidden,
                };
                CommentThreadState { panel, ..state }
            }
            ThreadIntent::ClosePanel => CommentThreadState {
                panel: CommentPanel::Hidden,
                ..state
            },
            ThreadIntent::SetDraft(draft) => CommentThreadState { draft, ..state },
            ThreadIntent::DraftInsertChar(ch) => {
                state.draft.push(ch);
                state
            }
            ThreadIntent::DraftBackspace => {
                state.draft.pop();
                state
            }
            ThreadIntent::CommentsLoaded { seq, result } => apply_read(state, seq, result),
            ThreadIntent::SubmitStarted => CommentThreadState {
                in_flight: state.in_flight + 1,
                ..state
            },
            ThreadIntent::Posted { seq, result } => {
                let state = CommentThreadState {
                    draft: String::new(),
                    panel: CommentPanel::Hidden,
                    in_flight: state.in_flight.saturating_sub(1),
                    ..state
                };
                apply_read(state, seq, result)
            }
            ThreadIntent::PostFailed => CommentThreadState {
                in_flight: state.in_flight.saturating_sub(1),
                ..state
            },
        }
    }
}

/// Apply a read unless a newer one is already on screen.
///
/// A failed read keeps whatever is displayed and does not advance the sequence,
/// so an older successful read can still land afterwards.
fn apply_read(
    state: CommentThreadState,
    seq: u64,
    result: Result<Vec<Comment>, String>,
) -> CommentThreadState {
    if !state.accepts(seq) {
        return state;
    }
    match result {
        Ok(comments) => CommentThreadState {
            comments,
            status: LoadStatus::Loaded,
            applied_seq: Some(seq),
            ..state
        },
        Err(reason) => CommentThreadState {
            status: LoadStatus::Failed(reason),
            ..state
        },
    }
}
