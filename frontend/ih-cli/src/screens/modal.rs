use serde::Serialize;

/// Visibility of a modal form. Submitting is implicit while a request is out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

/// How a form submission ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// Accepted by the server; affected data re-fetched
    Submitted,
    /// Stopped before any network call (missing required input)
    Rejected,
    /// Server or transport error; message kept on the form
    Failed,
}

/// Required-field checks run before a submission goes out
pub trait Form: Default {
    /// Message for the first missing required field
    fn missing_field(&self) -> Option<&'static str>;
}

/// A modal-driven action: Closed -> Open -> (submit) -> Closed on success,
/// or Open with an error on failure. Field values survive failures and
/// cancel; only success resets them.
#[derive(Debug, Clone, Default)]
pub struct Modal<F: Form> {
    pub form: F,
    state: ModalState,
    error: Option<String>,
}

impl<F: Form> Modal<F> {
    pub fn open(&mut self) {
        self.state = ModalState::Open;
    }

    /// Cancel. Keeps the entered values.
    pub fn close(&mut self) {
        self.state = ModalState::Closed;
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == ModalState::Open
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Clear the previous error and run required-field checks.
    /// Returns false (with the error set) when the submission must not go out.
    pub(crate) fn begin_submit(&mut self) -> bool {
        self.error = None;
        match self.form.missing_field() {
            Some(message) => {
                self.error = Some(message.to_string());
                false
            }
            None => true,
        }
    }

    pub(crate) fn fail(&mut self, message: String) {
        self.error = Some(message);
        self.state = ModalState::Open;
    }

    pub(crate) fn succeed(&mut self) {
        self.form = F::default();
        self.error = None;
        self.state = ModalState::Closed;
    }

    pub fn view(&self) -> ModalView {
        ModalView {
            state: self.state,
            error: self.error.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModalView {
    pub state: ModalState,
    pub error: Option<String>,
}
