#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// The configured quiz subject is not in the catalog.
    UnknownSubject,
    /// A game board could not be dealt or addressed.
    GameUnavailable,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::UnknownSubject => "That subject is not available.",
            ViewError::GameUnavailable => "This game could not be started.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}
